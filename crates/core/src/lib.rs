//! Image viewport core - pure pipeline stages before terminal encoding
//!
//! This crate turns a view state into render pixels. It performs no terminal
//! I/O, which keeps every stage deterministic and unit-testable:
//!
//! - [`viewport`]: center/zoom -> crop rectangle -> aspect-preserving render size
//! - [`raster`]: the immutable RGB8 source image and crop extraction
//! - [`resample`]: area-average resize of a crop into a [`RenderBuffer`]
//!
//! # Example
//!
//! ```
//! use tui_imgview_core::{compute_crop, render_crop, Image};
//! use tui_imgview_types::{Rgb, TerminalGeometry};
//!
//! let image = Image::solid(320, 200, Rgb::new(0, 128, 255));
//! let geometry = TerminalGeometry::new(80, 24);
//! let (cols, prows) = (u32::from(geometry.columns), geometry.pixel_rows());
//!
//! let crop = compute_crop(160, 100, 4.0, image.width(), image.height(), cols, prows);
//! let frame = render_crop(&image, crop, cols, prows).unwrap();
//! assert!(frame.width() <= cols);
//! assert!(frame.height() <= prows);
//! ```

pub mod error;
pub mod raster;
pub mod resample;
pub mod viewport;

pub use tui_imgview_types as types;

pub use error::{CoreError, Result};
pub use raster::Image;
pub use resample::{render_crop, resize, RenderBuffer};
pub use viewport::{compute_crop, compute_render_size, fit_zoom};
