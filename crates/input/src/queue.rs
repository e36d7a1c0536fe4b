//! Raw byte queue that yields one logical key per call.
//!
//! A single `read(2)` on a raw-mode tty can return several keys at once
//! (fast typing, pasted text) or one multi-byte escape sequence (arrow keys).
//! The queue keeps the unconsumed tail of a chunk and hands out keys one at a
//! time:
//!
//! - a chunk remainder starting with ESC is one [`Key::Other`] (the whole
//!   escape sequence),
//! - `0x03` is [`Key::Interrupt`],
//! - anything else is decoded as one UTF-8 scalar.

use std::io;

use arrayvec::ArrayVec;

use crate::types::Key;

/// Maximum bytes read from the terminal per chunk.
pub const KEY_CHUNK: usize = 32;

const ESC: u8 = 0x1b;
const CTRL_C: u8 = 0x03;

#[derive(Debug, Clone, Default)]
pub struct KeyQueue {
    pending: ArrayVec<u8, KEY_CHUNK>,
}

impl KeyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Return the next key, calling `read` for a fresh chunk only when the
    /// queue is empty. A zero-length read is reported as [`Key::Eof`].
    pub fn next_key<F>(&mut self, mut read: F) -> io::Result<Key>
    where
        F: FnMut(&mut [u8]) -> io::Result<usize>,
    {
        if self.pending.is_empty() {
            let mut chunk = [0u8; KEY_CHUNK];
            let n = loop {
                match read(&mut chunk) {
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    other => break other?,
                }
            };
            if n == 0 {
                return Ok(Key::Eof);
            }
            // Empty queue, n <= KEY_CHUNK: always fits.
            self.pending.extend(chunk[..n.min(KEY_CHUNK)].iter().copied());
        }
        Ok(self.pop_key())
    }

    fn pop_key(&mut self) -> Key {
        let Some(&first) = self.pending.first() else {
            return Key::Other;
        };

        match first {
            ESC => {
                self.pending.clear();
                Key::Other
            }
            CTRL_C => {
                self.pending.remove(0);
                Key::Interrupt
            }
            _ => {
                let len = utf8_len(first);
                if len == 0 || len > self.pending.len() {
                    // Stray continuation byte, or a scalar cut at the chunk edge.
                    let drop = if len == 0 { 1 } else { self.pending.len() };
                    self.pending.drain(..drop);
                    return Key::Other;
                }
                let key = std::str::from_utf8(&self.pending[..len])
                    .ok()
                    .and_then(|s| s.chars().next())
                    .map_or(Key::Other, Key::Char);
                let consumed = if key == Key::Other { 1 } else { len };
                self.pending.drain(..consumed);
                key
            }
        }
    }
}

/// Length of a UTF-8 sequence from its lead byte; 0 for continuation/invalid bytes.
fn utf8_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => 0,
    }
}
