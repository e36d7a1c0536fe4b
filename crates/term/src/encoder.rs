//! Half-block cell encoder.
//!
//! Each terminal cell shows two render pixels: the upper one as the
//! foreground color of `▀`, the lower one as the background. Rows are padded
//! to the full terminal width with black cells so a narrower frame fully
//! overwrites a wider previous one.

use std::io;

use crossterm::{
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};

use crate::core::RenderBuffer;
use crate::types::{Rgb, HALF_BLOCK, PIXEL_ROWS_PER_CELL};

/// Row terminator. Raw mode disables output post-processing, so it needs an
/// explicit carriage return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreak {
    CrLf,
    Lf,
}

impl LineBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineBreak::CrLf => "\r\n",
            LineBreak::Lf => "\n",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellEncoder {
    columns: u32,
    line_break: LineBreak,
}

impl CellEncoder {
    pub fn new(columns: u16, line_break: LineBreak) -> Self {
        Self {
            columns: u32::from(columns),
            line_break,
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn set_columns(&mut self, columns: u16) {
        self.columns = u32::from(columns);
    }

    /// Terminal rows a frame occupies. An odd last render row is dropped.
    pub fn cell_rows(frame: &RenderBuffer) -> u32 {
        frame.height() / u32::from(PIXEL_ROWS_PER_CELL)
    }

    pub fn encode(&self, frame: &RenderBuffer) -> io::Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.estimated_len(frame));
        self.encode_into(frame, &mut out)?;
        Ok(out)
    }

    /// Append the escape sequence for `frame` to `out`.
    pub fn encode_into(&self, frame: &RenderBuffer, out: &mut Vec<u8>) -> io::Result<()> {
        for row in 0..Self::cell_rows(frame) {
            let top_y = row * 2;
            for x in 0..frame.width() {
                put_cell(out, frame.pixel(x, top_y), frame.pixel(x, top_y + 1))?;
            }
            for _ in frame.width()..self.columns {
                put_cell(out, Rgb::BLACK, Rgb::BLACK)?;
            }
            out.queue(SetForegroundColor(rgb_to_color(Rgb::BLACK)))?;
            out.queue(SetBackgroundColor(rgb_to_color(Rgb::BLACK)))?;
            out.queue(Print(self.line_break.as_str()))?;
        }
        Ok(())
    }

    fn estimated_len(&self, frame: &RenderBuffer) -> usize {
        // Two color sequences of at most 19 bytes plus a 3-byte glyph per cell.
        let cells = (Self::cell_rows(frame) as usize) * (self.columns.max(frame.width()) as usize + 1);
        cells * 41
    }
}

fn put_cell(out: &mut Vec<u8>, top: Rgb, bottom: Rgb) -> io::Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(top)))?;
    out.queue(SetBackgroundColor(rgb_to_color(bottom)))?;
    out.queue(Print(HALF_BLOCK))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
