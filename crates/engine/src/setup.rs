//! Session setup: display mode, geometry lookup and initial view state.

use log::warn;

use crate::core::{fit_zoom, Image};
use crate::term::{LineBreak, Terminal};
use crate::types::{TerminalGeometry, ViewState};

/// Terminal rows held back below the image. Keeps the last row's line break
/// from scrolling the screen, and leaves room for the shell prompt.
pub const RESERVED_ROWS: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Render once and exit. Cooked terminal, `\n` line breaks.
    Static,
    /// Render until `q`. Raw terminal, `\r\n` line breaks.
    Interactive,
}

impl Mode {
    pub fn is_raw(&self) -> bool {
        matches!(self, Mode::Interactive)
    }

    pub fn line_break(&self) -> LineBreak {
        match self {
            Mode::Static => LineBreak::Lf,
            Mode::Interactive => LineBreak::CrLf,
        }
    }

    /// Part of the terminal available to the image.
    pub fn usable(&self, geometry: TerminalGeometry) -> TerminalGeometry {
        geometry.reserve_rows(RESERVED_ROWS)
    }
}

/// Per-axis replacements for the queried terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeometryOverride {
    pub columns: Option<u16>,
    pub rows: Option<u16>,
}

impl GeometryOverride {
    pub fn apply(&self, queried: TerminalGeometry) -> TerminalGeometry {
        TerminalGeometry::new(
            self.columns.unwrap_or(queried.columns),
            self.rows.unwrap_or(queried.rows),
        )
    }

    pub fn is_full(&self) -> bool {
        self.columns.is_some() && self.rows.is_some()
    }
}

/// Current terminal size with overrides applied. Falls back to 80x24 when
/// the terminal cannot be queried.
pub fn query_geometry<T: Terminal>(term: &T, overrides: GeometryOverride) -> TerminalGeometry {
    if overrides.is_full() {
        return overrides.apply(TerminalGeometry::default());
    }
    let queried = term.size().unwrap_or_else(|e| {
        warn!("terminal size unavailable ({}), assuming 80x24", e);
        TerminalGeometry::default()
    });
    overrides.apply(queried)
}

/// Everything needed to start a viewing session, before the terminal is touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSetup {
    pub mode: Mode,
    pub center_x: Option<i64>,
    pub center_y: Option<i64>,
    pub zoom: Option<f64>,
    pub overrides: GeometryOverride,
}

impl ViewerSetup {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            center_x: None,
            center_y: None,
            zoom: None,
            overrides: GeometryOverride::default(),
        }
    }

    /// Fill unset fields: center defaults to the image middle, zoom to the
    /// value that fits the whole image into `geometry`.
    pub fn initial_state(&self, image: &Image, geometry: TerminalGeometry) -> ViewState {
        let usable = self.mode.usable(geometry);
        let zoom = self.zoom.unwrap_or_else(|| {
            fit_zoom(
                image.width(),
                image.height(),
                u32::from(usable.columns),
                usable.pixel_rows(),
            )
        });
        ViewState::new(
            self.center_x.unwrap_or(i64::from(image.width() / 2)),
            self.center_y.unwrap_or(i64::from(image.height() / 2)),
            zoom,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::ScriptedTerminal;
    use crate::types::Rgb;

    #[test]
    fn overrides_replace_single_axes() {
        let o = GeometryOverride {
            columns: Some(120),
            rows: None,
        };
        assert_eq!(o.apply(TerminalGeometry::new(80, 24)), TerminalGeometry::new(120, 24));
        assert!(!o.is_full());
    }

    #[test]
    fn query_uses_terminal_size() {
        let term = ScriptedTerminal::new(TerminalGeometry::new(100, 30));
        let g = query_geometry(
            &term,
            GeometryOverride {
                columns: None,
                rows: Some(10),
            },
        );
        assert_eq!(g, TerminalGeometry::new(100, 10));
    }

    #[test]
    fn both_modes_reserve_one_row() {
        let g = TerminalGeometry::new(80, 25);
        assert_eq!(Mode::Static.usable(g).rows, 24);
        assert_eq!(Mode::Interactive.usable(g).rows, 24);
        assert_eq!(Mode::Static.line_break(), LineBreak::Lf);
        assert_eq!(Mode::Interactive.line_break(), LineBreak::CrLf);
    }

    #[test]
    fn only_interactive_mode_is_raw() {
        assert!(!Mode::Static.is_raw());
        assert!(Mode::Interactive.is_raw());
    }

    #[test]
    fn defaults_center_and_fit() {
        let image = Image::solid(800, 480, Rgb::BLACK);
        let state = ViewerSetup::new(Mode::Static).initial_state(&image, TerminalGeometry::new(80, 25));
        assert_eq!(state, ViewState::new(400, 240, 10.0));
    }

    #[test]
    fn explicit_values_win() {
        let image = Image::solid(800, 480, Rgb::BLACK);
        let setup = ViewerSetup {
            center_x: Some(-5),
            center_y: Some(7),
            zoom: Some(2.5),
            ..ViewerSetup::new(Mode::Interactive)
        };
        let state = setup.initial_state(&image, TerminalGeometry::new(80, 25));
        assert_eq!(state, ViewState::new(-5, 7, 2.5));
    }
}
