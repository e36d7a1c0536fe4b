//! Interaction loop: view state machine and per-frame render pipeline.
//!
//! A frame runs to completion (crop -> resize -> encode -> write) before the
//! next blocking key read. Every state change recomputes the crop before the
//! next render.

use log::{debug, info};

use crate::core::{compute_crop, render_crop, Image, RenderBuffer};
use crate::error::Result;
use crate::input::map_key;
use crate::setup::{query_geometry, GeometryOverride, Mode, ViewerSetup};
use crate::term::{FrameRenderer, ScreenSession, Terminal};
use crate::types::{CropRect, Key, TerminalGeometry, ViewAction, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Exiting,
}

pub struct Viewer<'img> {
    image: &'img Image,
    mode: Mode,
    state: ViewState,
    /// Full terminal size as last queried.
    terminal: TerminalGeometry,
    /// Area available to the image.
    usable: TerminalGeometry,
    crop: CropRect,
    renderer: FrameRenderer,
    phase: Phase,
}

impl<'img> Viewer<'img> {
    pub fn new(image: &'img Image, state: ViewState, terminal: TerminalGeometry, mode: Mode) -> Self {
        let usable = mode.usable(terminal);
        let mut viewer = Self {
            image,
            mode,
            state,
            terminal,
            usable,
            crop: CropRect::default(),
            renderer: FrameRenderer::new(usable.columns, mode.line_break()),
            phase: Phase::Running,
        };
        viewer.recompute_crop();
        viewer
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn crop(&self) -> CropRect {
        self.crop
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn recompute_crop(&mut self) {
        self.crop = compute_crop(
            self.state.center_x,
            self.state.center_y,
            self.state.zoom,
            self.image.width(),
            self.image.height(),
            u32::from(self.usable.columns),
            self.usable.pixel_rows(),
        );
        debug!(
            "view center=({}, {}) zoom={} crop={:?}",
            self.state.center_x, self.state.center_y, self.state.zoom, self.crop
        );
    }

    /// Adopt a new terminal size. Returns `true` if it differed.
    pub fn set_geometry(&mut self, terminal: TerminalGeometry) -> bool {
        if terminal == self.terminal {
            return false;
        }
        info!(
            "terminal resized {}x{} -> {}x{}",
            self.terminal.columns, self.terminal.rows, terminal.columns, terminal.rows
        );
        self.terminal = terminal;
        self.usable = self.mode.usable(terminal);
        self.renderer.set_columns(self.usable.columns);
        self.renderer.invalidate();
        self.recompute_crop();
        true
    }

    /// Apply one action. Navigation always recomputes the crop.
    pub fn apply(&mut self, action: ViewAction) -> Phase {
        if self.phase == Phase::Exiting {
            return self.phase;
        }
        if self.state.apply(action) {
            self.recompute_crop();
        } else {
            self.phase = Phase::Exiting;
        }
        self.phase
    }

    /// Handle a key press. Unmapped keys change nothing.
    pub fn handle_key(&mut self, key: Key) -> Phase {
        match map_key(key) {
            Some(action) => self.apply(action),
            None => self.phase,
        }
    }

    /// Crop and resample the current view.
    pub fn render(&self) -> Result<RenderBuffer> {
        Ok(render_crop(
            self.image,
            self.crop,
            u32::from(self.usable.columns),
            self.usable.pixel_rows(),
        )?)
    }

    /// Encode the current view, anchor restore included, without writing it.
    pub fn encode_frame(&mut self) -> Result<&[u8]> {
        let frame = self.render()?;
        Ok(self.renderer.encode(&frame)?)
    }

    pub fn draw<T: Terminal>(&mut self, term: &mut T) -> Result<()> {
        let frame = self.render()?;
        self.renderer.draw(term, &frame)?;
        Ok(())
    }
}

/// Run a full session on `term` and return the final view state.
///
/// The terminal is restored on every exit path, errors included.
pub fn run<T: Terminal>(term: &mut T, image: &Image, setup: &ViewerSetup) -> Result<ViewState> {
    match setup.mode {
        Mode::Static => run_static(term, image, setup),
        Mode::Interactive => run_interactive(term, image, setup),
    }
}

/// Render once and exit.
pub fn run_static<T: Terminal>(term: &mut T, image: &Image, setup: &ViewerSetup) -> Result<ViewState> {
    let geometry = query_geometry(term, setup.overrides);
    let state = setup.initial_state(image, geometry);
    let mode = Mode::Static;
    let mut viewer = Viewer::new(image, state, geometry, mode);

    let mut session = ScreenSession::start(term, mode.is_raw())?;
    viewer.draw(&mut *session)?;
    session.finish()?;
    Ok(viewer.state())
}

/// Render, then re-render after each key until `q`.
pub fn run_interactive<T: Terminal>(term: &mut T, image: &Image, setup: &ViewerSetup) -> Result<ViewState> {
    let mode = Mode::Interactive;
    let mut session = ScreenSession::start(term, mode.is_raw())?;

    let geometry = query_geometry(&*session, setup.overrides);
    let state = setup.initial_state(image, geometry);
    let mut viewer = Viewer::new(image, state, geometry, mode);
    info!(
        "interactive session on {}x{} at zoom {}",
        geometry.columns, geometry.rows, state.zoom
    );

    loop {
        viewer.set_geometry(query_geometry(&*session, setup.overrides));
        viewer.draw(&mut *session)?;

        let key = session.read_key()?;
        if viewer.handle_key(key) == Phase::Exiting {
            break;
        }
    }

    session.finish()?;
    Ok(viewer.state())
}

/// Overrides pinned to a fixed size, for headless rendering.
pub fn fixed_geometry(geometry: TerminalGeometry) -> GeometryOverride {
    GeometryOverride {
        columns: Some(geometry.columns),
        rows: Some(geometry.rows),
    }
}
