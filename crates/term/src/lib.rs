//! Terminal output layer for the image viewer.
//!
//! Render pixels become half-block escape sequences here, and all contact
//! with the real terminal goes through the [`Terminal`] capability trait.
//!
//! - [`encoder`]: render pixels -> `▀` cells with 24-bit fg/bg colors
//! - [`ansi`]: session setup/teardown and cursor anchor sequences
//! - [`renderer`]: anchored full-frame redraws with stale-row clearing
//! - [`session`]: scoped raw-mode/cursor ownership
//! - [`terminal`]: the trait plus termios, crossterm and scripted backends

pub mod ansi;
pub mod encoder;
pub mod renderer;
pub mod session;
pub mod terminal;

pub use tui_imgview_core as core;
pub use tui_imgview_input as input;
pub use tui_imgview_types as types;

pub use encoder::{CellEncoder, LineBreak};
pub use renderer::FrameRenderer;
pub use session::ScreenSession;
#[cfg(unix)]
pub use terminal::{SavedTermios, UnixTerminal};
pub use terminal::{
    Backend, CrosstermRawMode, CrosstermTerminal, ScriptEvent, ScriptedTerminal, TermError,
    Terminal,
};
