//! Terminal input module (viewer-facing).
//!
//! Maps decoded [`crate::types::Key`]s into [`crate::types::ViewAction`]s,
//! converts crossterm key events into [`crate::types::Key`]s, and provides the
//! bounded byte queue that splits raw stdin chunks into single logical keys.

pub mod map;
pub mod queue;

pub use tui_imgview_types as types;

pub use map::{key_from_event, map_key, should_quit};
pub use queue::{KeyQueue, KEY_CHUNK};
