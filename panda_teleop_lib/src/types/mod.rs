pub mod config;
pub mod trajectory;

pub use config::*;
pub use trajectory::*;
