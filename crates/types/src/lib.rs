//! Core types module - shared data structures and constants
//!
//! This module defines the plain data types passed between the viewport math,
//! the cell encoder and the interaction loop. All types are pure data with no
//! external dependencies, so they can be used from any crate in the workspace
//! (core math, terminal backends, tests).
//!
//! # Coordinate Spaces
//!
//! - **Source space**: integer pixel coordinates into the loaded image.
//!   [`ViewState`] centers and [`CropRect`] bounds live here.
//! - **Cell space**: terminal character cells, described by [`TerminalGeometry`].
//! - **Render space**: the resized pixel grid. Each terminal cell shows two
//!   vertically stacked render pixels, so a grid of `rows` cells covers
//!   `rows * 2` render rows (see [`TerminalGeometry::pixel_rows`]).
//!
//! # Examples
//!
//! ```
//! use tui_imgview_types::{CropRect, TerminalGeometry, ViewAction, ViewState};
//!
//! let geometry = TerminalGeometry::new(80, 24);
//! assert_eq!(geometry.pixel_rows(), 48);
//!
//! let mut state = ViewState::new(50, 50, 2.0);
//! state.apply(ViewAction::PanRight);
//! assert_eq!(state.center_x, 51);
//!
//! let crop = CropRect::new(10, 10, 10, 30);
//! assert!(crop.is_empty());
//! ```

/// Upper half block (U+2580). Foreground paints the top half, background the bottom half.
pub const HALF_BLOCK: char = '\u{2580}';

/// Source pixel rows covered by one terminal cell.
pub const PIXEL_ROWS_PER_CELL: u16 = 2;

/// Geometry used when the terminal size cannot be queried.
pub const FALLBACK_COLUMNS: u16 = 80;
pub const FALLBACK_ROWS: u16 = 24;

/// Lowest zoom reachable with the zoom-in key.
pub const MIN_KEY_ZOOM: f64 = 1.0;

/// Pan distance per key press, in source pixels.
pub const PAN_STEP: i64 = 1;

/// Zoom change per key press.
pub const ZOOM_STEP: f64 = 1.0;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Read a pixel from a packed RGB8 slice (`[r, g, b]`).
    #[inline]
    pub fn from_slice(px: &[u8]) -> Self {
        Self::new(px[0], px[1], px[2])
    }
}

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TerminalGeometry {
    pub columns: u16,
    pub rows: u16,
}

impl TerminalGeometry {
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Render rows available: two source rows per cell.
    pub fn pixel_rows(&self) -> u32 {
        u32::from(self.rows) * u32::from(PIXEL_ROWS_PER_CELL)
    }

    /// Same geometry with `n` rows held back (e.g. for the shell prompt).
    pub fn reserve_rows(self, n: u16) -> Self {
        Self {
            columns: self.columns,
            rows: self.rows.saturating_sub(n),
        }
    }
}

impl Default for TerminalGeometry {
    fn default() -> Self {
        Self::new(FALLBACK_COLUMNS, FALLBACK_ROWS)
    }
}

/// Half-open crop bounds into the source image.
///
/// Always satisfies `sx <= ex` and `sy <= ey`. A zero-area crop is a valid
/// state and renders as a blank frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CropRect {
    pub sx: u32,
    pub sy: u32,
    pub ex: u32,
    pub ey: u32,
}

impl CropRect {
    pub const fn new(sx: u32, sy: u32, ex: u32, ey: u32) -> Self {
        Self { sx, sy, ex, ey }
    }

    pub fn width(&self) -> u32 {
        self.ex.saturating_sub(self.sx)
    }

    pub fn height(&self) -> u32 {
        self.ey.saturating_sub(self.sy)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Output pixel dimensions of a resized crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct RenderSize {
    pub width: u32,
    pub height: u32,
}

impl RenderSize {
    pub const EMPTY: RenderSize = RenderSize::new(0, 0);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// View transitions driven by the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewAction {
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    ZoomIn,
    ZoomOut,
    Quit,
}

impl ViewAction {
    /// Parse action from string (camelCase, as used in logs)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_imgview_types::ViewAction;
    ///
    /// assert_eq!(ViewAction::from_str("zoomIn"), Some(ViewAction::ZoomIn));
    /// assert_eq!(ViewAction::from_str("spin"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "panLeft" => Some(ViewAction::PanLeft),
            "panRight" => Some(ViewAction::PanRight),
            "panUp" => Some(ViewAction::PanUp),
            "panDown" => Some(ViewAction::PanDown),
            "zoomIn" => Some(ViewAction::ZoomIn),
            "zoomOut" => Some(ViewAction::ZoomOut),
            "quit" => Some(ViewAction::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewAction::PanLeft => "panLeft",
            ViewAction::PanRight => "panRight",
            ViewAction::PanUp => "panUp",
            ViewAction::PanDown => "panDown",
            ViewAction::ZoomIn => "zoomIn",
            ViewAction::ZoomOut => "zoomOut",
            ViewAction::Quit => "quit",
        }
    }
}

/// One logical key press, as decoded by a terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable (or control) character.
    Char(char),
    /// Ctrl-C. Raw mode disables the signal, so the backend reports it as a key.
    Interrupt,
    /// Input stream closed.
    Eof,
    /// Anything else: escape sequences, function keys, undecodable bytes.
    Other,
}

/// Logical view position: center in source pixels plus zoom factor.
///
/// `zoom` is source pixels per render pixel; larger values show more of the
/// image (zoomed out).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub center_x: i64,
    pub center_y: i64,
    pub zoom: f64,
}

impl ViewState {
    pub fn new(center_x: i64, center_y: i64, zoom: f64) -> Self {
        Self {
            center_x,
            center_y,
            zoom,
        }
    }

    /// Apply a navigation action. Returns `false` for [`ViewAction::Quit`],
    /// which does not touch the state.
    pub fn apply(&mut self, action: ViewAction) -> bool {
        match action {
            ViewAction::PanLeft => self.center_x = self.center_x.saturating_sub(PAN_STEP),
            ViewAction::PanRight => self.center_x = self.center_x.saturating_add(PAN_STEP),
            ViewAction::PanUp => self.center_y = self.center_y.saturating_sub(PAN_STEP),
            ViewAction::PanDown => self.center_y = self.center_y.saturating_add(PAN_STEP),
            ViewAction::ZoomIn => self.zoom = (self.zoom - ZOOM_STEP).max(MIN_KEY_ZOOM),
            ViewAction::ZoomOut => self.zoom += ZOOM_STEP,
            ViewAction::Quit => return false,
        }
        true
    }
}
