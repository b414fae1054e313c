//! Raw-terminal key input.
//!
//! Raw mode is a scoped resource: it is entered right before each read and
//! left again on every exit path, so the operator's terminal is never left
//! unbuffered after a failure.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use eyre::Result;

use crate::commander::ETX;

/// Keeps the terminal in raw mode for its lifetime.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Failing to restore here leaves the terminal unusable, but there is
        // no channel left to report it on.
        let _ = disable_raw_mode();
    }
}

/// Blocking read of a single key from the terminal.
///
/// Ctrl+C arrives as a key event in raw mode and is mapped to [`ETX`].
/// Non-character keys (arrows, function keys, releases) are skipped.
pub fn read_key() -> Result<char> {
    let _guard = RawModeGuard::acquire()?;

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(ETX)
                }
                KeyCode::Char(c) => return Ok(c),
                _ => continue,
            },
            _ => continue,
        }
    }
}
