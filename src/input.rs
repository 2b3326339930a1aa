// Non-blocking keyboard input with scoped raw-mode acquisition

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing::warn;

/// A single decoded key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Quit,
}

/// Non-blocking source of key presses
pub trait KeySource {
    /// Return the most recent pending key, or None if nothing was pressed
    /// since the last poll. Must not block.
    fn poll(&mut self) -> io::Result<Option<Key>>;
}

/// Puts the terminal into raw mode, restoring it on drop
///
/// Raw mode disables line buffering and local echo so single key presses
/// arrive immediately. Holding the restore in Drop keeps the terminal
/// usable on every exit path out of the loop, error returns included.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to restore terminal mode: {}", e);
        }
    }
}

/// Keyboard input from the controlling terminal
pub struct TerminalKeys {
    _raw: RawModeGuard,
}

impl TerminalKeys {
    /// Acquire the terminal in raw mode
    ///
    /// Failure here is fatal for the caller: without raw mode the polling
    /// contract does not hold.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            _raw: RawModeGuard::acquire()?,
        })
    }
}

impl KeySource for TerminalKeys {
    fn poll(&mut self) -> io::Result<Option<Key>> {
        let mut latest = None;

        // Drain all pending events, keep the most recent key press.
        // Quit chords win immediately.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event::read()?
            {
                let pressed = kind == KeyEventKind::Press || kind == KeyEventKind::Repeat;
                if !pressed {
                    continue;
                }

                match code {
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(Some(Key::Quit));
                    }
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Key::Quit)),
                    KeyCode::Char(c) => latest = Some(Key::Char(c)),
                    // Arrows, function keys: no velocity mapping
                    _ => {}
                }
            }
        }

        Ok(latest)
    }
}
