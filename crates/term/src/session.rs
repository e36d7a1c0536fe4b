//! Scoped ownership of the terminal for one viewing session.
//!
//! [`ScreenSession::start`] optionally enters raw mode, then hides the cursor,
//! clears the screen and saves the frame anchor. The session restores the
//! terminal when finished or dropped, including on error returns and panics
//! that unwind through it.

use std::ops::{Deref, DerefMut};

use log::{debug, warn};

use crate::ansi::{encode_session_end, encode_session_start};
use crate::terminal::{Result, TermError, Terminal};

pub struct ScreenSession<'a, T: Terminal> {
    term: &'a mut T,
    saved: Option<T::Saved>,
    active: bool,
}

impl<'a, T: Terminal> ScreenSession<'a, T> {
    /// Acquire the terminal. With `raw = true`, raw mode is entered first so
    /// an unsupported platform is reported before anything is written.
    pub fn start(term: &'a mut T, raw: bool) -> Result<Self> {
        let saved = if raw { Some(term.enter_raw_mode()?) } else { None };
        let mut session = Self {
            term,
            saved,
            active: true,
        };

        let mut buf = Vec::new();
        encode_session_start(&mut buf)?;
        session.term.write_all(&buf)?;
        debug!("screen session started (raw: {})", raw);
        Ok(session)
    }

    pub fn is_raw(&self) -> bool {
        self.saved.is_some()
    }

    /// Release the terminal and report any failure.
    pub fn finish(mut self) -> Result<()> {
        self.release()
    }

    fn release(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let mut buf = Vec::new();
        let written = encode_session_end(&mut buf)
            .map_err(TermError::from)
            .and_then(|()| self.term.write_all(&buf));
        // Restore the mode even when the reset write failed.
        let restored = match self.saved.take() {
            Some(saved) => self.term.restore_mode(saved),
            None => Ok(()),
        };
        debug!("screen session released");
        written.and(restored)
    }
}

impl<T: Terminal> Deref for ScreenSession<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.term
    }
}

impl<T: Terminal> DerefMut for ScreenSession<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.term
    }
}

impl<T: Terminal> Drop for ScreenSession<'_, T> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            warn!("failed to restore terminal: {}", e);
        }
    }
}
