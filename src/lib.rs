//! TUI image viewer (workspace facade crate).
//!
//! The pipeline lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_imgview::{core,engine,input,term,types}` and owns
//! the command-line configuration.

pub mod config;

pub use tui_imgview_core as core;
pub use tui_imgview_engine as engine;
pub use tui_imgview_input as input;
pub use tui_imgview_term as term;
pub use tui_imgview_types as types;
