//! Terminal capability interface and its backends.
//!
//! The viewer only talks to [`Terminal`]. Backends differ in how they enter
//! raw mode and read keys:
//!
//! - [`UnixTerminal`] (unix): termios raw mode, raw stdin bytes through a
//!   [`KeyQueue`](crate::input::KeyQueue).
//! - [`CrosstermTerminal`]: crossterm raw mode and key events. Default on
//!   Windows.
//! - [`ScriptedTerminal`]: in-memory, for tests and headless runs.
//!
//! Raw mode is never global state here: `enter_raw_mode` returns the saved
//! configuration and `restore_mode` consumes it.

use std::collections::VecDeque;
use std::io::{self, Write};

use crossterm::{
    event::{self, Event},
    terminal,
};
use log::debug;
use thiserror::Error;

use crate::input::key_from_event;
use crate::types::{Key, TerminalGeometry};

#[derive(Debug, Error)]
pub enum TermError {
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TermError>;

pub trait Terminal {
    /// Terminal configuration captured when entering raw mode.
    type Saved;

    fn size(&self) -> Result<TerminalGeometry>;

    /// Write and flush.
    fn write_all(&mut self, bytes: &[u8]) -> Result<()>;

    /// Block until one logical key is available.
    fn read_key(&mut self) -> Result<Key>;

    /// Switch to raw mode. Fails with [`TermError::UnsupportedPlatform`]
    /// before touching the terminal when raw mode is unavailable.
    fn enter_raw_mode(&mut self) -> Result<Self::Saved>;

    fn restore_mode(&mut self, saved: Self::Saved) -> Result<()>;
}

/// Which backend drives the real terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Termios,
    Crossterm,
}

impl Backend {
    /// Backend for the current target.
    pub fn platform_default() -> Result<Self> {
        if cfg!(unix) {
            Ok(Backend::Termios)
        } else if cfg!(windows) {
            Ok(Backend::Crossterm)
        } else {
            Err(TermError::UnsupportedPlatform(std::env::consts::OS.to_string()))
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "termios" => Some(Backend::Termios),
            "crossterm" => Some(Backend::Crossterm),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Termios => "termios",
            Backend::Crossterm => "crossterm",
        }
    }
}

fn query_size() -> Result<TerminalGeometry> {
    let (columns, rows) = terminal::size()?;
    Ok(TerminalGeometry::new(columns, rows))
}

#[cfg(unix)]
pub use unix::{SavedTermios, UnixTerminal};

#[cfg(unix)]
mod unix {
    use std::io::{self, Read, Write};
    use std::os::unix::io::AsRawFd;

    use log::debug;
    use termios::{cfmakeraw, tcsetattr, Termios, TCSANOW};

    use super::{query_size, Result, TermError, Terminal};
    use crate::input::KeyQueue;
    use crate::types::{Key, TerminalGeometry};

    /// Original stdin attributes, handed back to [`UnixTerminal::restore_mode`].
    #[derive(Debug, Clone, Copy)]
    pub struct SavedTermios(Termios);

    pub struct UnixTerminal {
        stdin: io::Stdin,
        stdout: io::Stdout,
        keys: KeyQueue,
    }

    impl UnixTerminal {
        pub fn new() -> Self {
            Self {
                stdin: io::stdin(),
                stdout: io::stdout(),
                keys: KeyQueue::new(),
            }
        }
    }

    impl Default for UnixTerminal {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Terminal for UnixTerminal {
        type Saved = SavedTermios;

        fn size(&self) -> Result<TerminalGeometry> {
            query_size()
        }

        fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
            let mut out = self.stdout.lock();
            out.write_all(bytes)?;
            out.flush()?;
            Ok(())
        }

        fn read_key(&mut self) -> Result<Key> {
            let stdin = &mut self.stdin;
            Ok(self.keys.next_key(|buf| stdin.read(buf))?)
        }

        fn enter_raw_mode(&mut self) -> Result<SavedTermios> {
            let fd = self.stdin.as_raw_fd();
            let original = Termios::from_fd(fd).map_err(|e| {
                TermError::UnsupportedPlatform(format!("stdin has no terminal attributes: {e}"))
            })?;
            let mut raw = original;
            cfmakeraw(&mut raw);
            tcsetattr(fd, TCSANOW, &raw)?;
            debug!("termios raw mode on fd {}", fd);
            Ok(SavedTermios(original))
        }

        fn restore_mode(&mut self, saved: SavedTermios) -> Result<()> {
            let fd = self.stdin.as_raw_fd();
            tcsetattr(fd, TCSANOW, &saved.0)?;
            debug!("termios restored on fd {}", fd);
            Ok(())
        }
    }
}

/// Whether raw mode was already on before [`CrosstermTerminal::enter_raw_mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrosstermRawMode {
    was_enabled: bool,
}

pub struct CrosstermTerminal {
    stdout: io::Stdout,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for CrosstermTerminal {
    type Saved = CrosstermRawMode;

    fn size(&self) -> Result<TerminalGeometry> {
        query_size()
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        let mut out = self.stdout.lock();
        out.write_all(bytes)?;
        out.flush()?;
        Ok(())
    }

    fn read_key(&mut self) -> Result<Key> {
        loop {
            match event::read()? {
                Event::Key(ev) => {
                    if let Some(key) = key_from_event(ev) {
                        return Ok(key);
                    }
                }
                // Re-render with the new geometry.
                Event::Resize(..) => return Ok(Key::Other),
                _ => {}
            }
        }
    }

    fn enter_raw_mode(&mut self) -> Result<CrosstermRawMode> {
        let unsupported = |e: io::Error| TermError::UnsupportedPlatform(format!("raw mode unavailable: {e}"));
        let was_enabled = terminal::is_raw_mode_enabled().map_err(unsupported)?;
        terminal::enable_raw_mode().map_err(unsupported)?;
        debug!("crossterm raw mode (previously enabled: {})", was_enabled);
        Ok(CrosstermRawMode { was_enabled })
    }

    fn restore_mode(&mut self, saved: CrosstermRawMode) -> Result<()> {
        if !saved.was_enabled {
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }
}

/// One step of a [`ScriptedTerminal`] input script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptEvent {
    Key(Key),
    /// Change the reported geometry, then keep reading.
    Resize(TerminalGeometry),
}

/// In-memory terminal fed from a script of keys and resizes.
///
/// Once the script runs out it reports [`Key::Eof`], or an I/O error when
/// built with [`ScriptedTerminal::failing_after_script`].
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    geometry: TerminalGeometry,
    script: VecDeque<ScriptEvent>,
    writes: Vec<Vec<u8>>,
    raw: bool,
    raw_entries: usize,
    keys_read: usize,
    no_raw_mode: bool,
    fail_when_exhausted: bool,
}

impl ScriptedTerminal {
    pub fn new(geometry: TerminalGeometry) -> Self {
        Self {
            geometry,
            ..Self::default()
        }
    }

    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.script.extend(keys.into_iter().map(ScriptEvent::Key));
        self
    }

    pub fn with_chars(self, chars: &str) -> Self {
        self.with_keys(chars.chars().map(Key::Char))
    }

    pub fn with_event(mut self, event: ScriptEvent) -> Self {
        self.script.push_back(event);
        self
    }

    /// Behave like a platform without raw mode.
    pub fn without_raw_mode(mut self) -> Self {
        self.no_raw_mode = true;
        self
    }

    pub fn failing_after_script(mut self) -> Self {
        self.fail_when_exhausted = true;
        self
    }

    /// Every `write_all` call, in order.
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    pub fn output(&self) -> Vec<u8> {
        self.writes.concat()
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }

    pub fn raw_entries(&self) -> usize {
        self.raw_entries
    }

    pub fn keys_read(&self) -> usize {
        self.keys_read
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Terminal for ScriptedTerminal {
    type Saved = bool;

    fn size(&self) -> Result<TerminalGeometry> {
        Ok(self.geometry)
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.writes.push(bytes.to_vec());
        Ok(())
    }

    fn read_key(&mut self) -> Result<Key> {
        while let Some(event) = self.script.pop_front() {
            match event {
                ScriptEvent::Key(key) => {
                    self.keys_read += 1;
                    return Ok(key);
                }
                ScriptEvent::Resize(geometry) => self.geometry = geometry,
            }
        }
        if self.fail_when_exhausted {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe).into());
        }
        Ok(Key::Eof)
    }

    fn enter_raw_mode(&mut self) -> Result<bool> {
        if self.no_raw_mode {
            return Err(TermError::UnsupportedPlatform("scripted terminal without raw mode".into()));
        }
        let was_raw = self.raw;
        self.raw = true;
        self.raw_entries += 1;
        Ok(was_raw)
    }

    fn restore_mode(&mut self, saved: bool) -> Result<()> {
        self.raw = saved;
        Ok(())
    }
}
