//! FrameRenderer: flushes encoded frames to a terminal at the saved anchor.
//!
//! Frames are full redraws from the anchor. Row padding covers stale columns;
//! stale rows (a frame shorter than the previous one, or a geometry change)
//! are handled by clearing the screen before the redraw.

use std::io;

use crate::ansi::encode_frame_start;
use crate::core::RenderBuffer;
use crate::encoder::{CellEncoder, LineBreak};
use crate::terminal::{Result, Terminal};

pub struct FrameRenderer {
    encoder: CellEncoder,
    buf: Vec<u8>,
    last_rows: Option<u32>,
    force_clear: bool,
}

impl FrameRenderer {
    pub fn new(columns: u16, line_break: LineBreak) -> Self {
        Self {
            encoder: CellEncoder::new(columns, line_break),
            buf: Vec::with_capacity(64 * 1024),
            last_rows: None,
            force_clear: false,
        }
    }

    pub fn encoder(&self) -> &CellEncoder {
        &self.encoder
    }

    /// Force the next draw to clear the screen first.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.force_clear = true;
    }

    pub fn set_columns(&mut self, columns: u16) {
        if self.encoder.columns() != u32::from(columns) {
            self.encoder.set_columns(columns);
            self.invalidate();
        }
    }

    /// Build the bytes for `frame` (anchor restore included) without writing them.
    pub fn encode(&mut self, frame: &RenderBuffer) -> io::Result<&[u8]> {
        let rows = CellEncoder::cell_rows(frame);
        let shrunk = self.last_rows.is_some_and(|last| rows < last);

        self.buf.clear();
        encode_frame_start(&mut self.buf, self.force_clear || shrunk)?;
        self.encoder.encode_into(frame, &mut self.buf)?;

        self.force_clear = false;
        self.last_rows = Some(rows);
        Ok(&self.buf)
    }

    pub fn draw<T: Terminal>(&mut self, term: &mut T, frame: &RenderBuffer) -> Result<()> {
        self.encode(frame)?;
        term.write_all(&self.buf)
    }

    /// Bytes of the most recent frame.
    pub fn last_frame(&self) -> &[u8] {
        &self.buf
    }
}
