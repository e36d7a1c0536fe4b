//! Viewer engine: the interaction loop on top of the pipeline crates.
//!
//! [`Viewer`] owns the view state and turns keys into state transitions;
//! [`run`] drives a whole session (static or interactive) against any
//! [`Terminal`](crate::term::Terminal) implementation.
//!
//! # Example
//!
//! ```
//! use tui_imgview_core::Image;
//! use tui_imgview_engine::{run, Mode, ViewerSetup};
//! use tui_imgview_term::ScriptedTerminal;
//! use tui_imgview_types::{Rgb, TerminalGeometry};
//!
//! let image = Image::solid(64, 64, Rgb::new(10, 20, 30));
//! let mut term = ScriptedTerminal::new(TerminalGeometry::new(40, 13)).with_chars("dd-q");
//!
//! let state = run(&mut term, &image, &ViewerSetup::new(Mode::Interactive)).unwrap();
//! assert_eq!(state.center_x, 34);
//! assert!(!term.is_raw());
//! ```

pub mod error;
pub mod setup;
pub mod viewer;

pub use tui_imgview_core as core;
pub use tui_imgview_input as input;
pub use tui_imgview_term as term;
pub use tui_imgview_types as types;

pub use error::{Result, ViewerError};
pub use setup::{query_geometry, GeometryOverride, Mode, ViewerSetup, RESERVED_ROWS};
pub use viewer::{fixed_geometry, run, run_interactive, run_static, Phase, Viewer};
