//! Session-level escape sequences.
//!
//! Cell colors go through crossterm's style commands in [`crate::encoder`];
//! this module covers the screen setup around them. The cursor anchor uses a
//! doubled ESC (`ESC ESC 7` / `ESC ESC 8`) for both save and restore so every
//! restore lands on the same anchor.

use std::fmt;
use std::io;

use crossterm::{
    cursor,
    style::ResetColor,
    terminal::{self, ClearType},
    Command, QueueableCommand,
};

/// Save the frame anchor: `ESC ESC 7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveAnchor;

/// Jump back to the frame anchor: `ESC ESC 8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreAnchor;

impl Command for SaveAnchor {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b\x1b7")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "anchor save is ANSI-only",
        ))
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        true
    }
}

impl Command for RestoreAnchor {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b\x1b8")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "anchor restore is ANSI-only",
        ))
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        true
    }
}

/// Hide the cursor, clear the screen, home the cursor and save it as the anchor.
pub fn encode_session_start(out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(cursor::Hide)?;
    out.queue(terminal::Clear(ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(SaveAnchor)?;
    Ok(())
}

/// Reset formatting and show the cursor again.
pub fn encode_session_end(out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(ResetColor)?;
    out.queue(cursor::Show)?;
    Ok(())
}

/// Frame prologue: optionally clear stale content, then return to the anchor.
pub fn encode_frame_start(out: &mut Vec<u8>, clear: bool) -> io::Result<()> {
    if clear {
        out.queue(terminal::Clear(ClearType::All))?;
    }
    out.queue(RestoreAnchor)?;
    Ok(())
}
