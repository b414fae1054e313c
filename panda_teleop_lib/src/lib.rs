//! # Panda Teleop Library
//!
//! Shared types and utilities for the Panda arm teleoperation system.
//! This library is used by the keyboard teleoperation nodes.

pub mod types;
pub mod utils;

// Re-export everything for convenience
pub use types::*;
pub use utils::*;
