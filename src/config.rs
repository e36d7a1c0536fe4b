//! Command-line and environment configuration.
//!
//! # Environment Variables
//!
//! - `IMGVIEW_BACKEND`: terminal backend, `termios` or `crossterm`
//!   (default: termios on unix, crossterm on Windows)
//! - `COLUMNS` / `LINES`: override the queried terminal width / height
//! - `RUST_LOG`: log filter (default: `warn`, written to stderr)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;

use crate::engine::{GeometryOverride, Mode, ViewerSetup};
use crate::term::Backend;

#[derive(Debug, Parser)]
#[command(name = "tui-imgview", version)]
#[command(about = "Preview image files in a terminal using 24-bit color half blocks")]
pub struct Cli {
    /// Image file to open
    pub filename: PathBuf,

    /// View center column in image pixels (default: image width / 2)
    #[arg(short = 'x', long = "center-x", visible_alias = "cx", allow_negative_numbers = true)]
    pub center_x: Option<i64>,

    /// View center row in image pixels (default: image height / 2)
    #[arg(short = 'y', long = "center-y", visible_alias = "cy", allow_negative_numbers = true)]
    pub center_y: Option<i64>,

    /// Source pixels per render pixel (default: fit the whole image)
    #[arg(short = 'z', long, value_parser = parse_zoom)]
    pub zoom: Option<f64>,

    /// Keep the image open: w/a/s/d pan, = and - zoom, q quits
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Terminal backend: termios or crossterm
    #[arg(long, env = "IMGVIEW_BACKEND", value_parser = parse_backend)]
    pub backend: Option<Backend>,
}

fn parse_zoom(s: &str) -> std::result::Result<f64, String> {
    let zoom: f64 = s.parse().map_err(|_| format!("invalid zoom value: {s}"))?;
    if !zoom.is_finite() || zoom <= 0.0 {
        return Err(format!("zoom must be a positive number, got {s}"));
    }
    Ok(zoom)
}

fn parse_backend(s: &str) -> std::result::Result<Backend, String> {
    Backend::from_str(s).ok_or_else(|| format!("unknown backend {s:?} (expected termios or crossterm)"))
}

/// Fully resolved startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub path: PathBuf,
    pub backend: Backend,
    pub setup: ViewerSetup,
}

impl ViewerConfig {
    /// Resolve the CLI plus environment (`env` looks up a variable by name).
    ///
    /// Fails with an unsupported-platform error when no backend exists for
    /// this target; nothing has touched the terminal at that point.
    pub fn from_cli(cli: Cli, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend = match cli.backend {
            Some(backend) => backend,
            None => Backend::platform_default().context("no terminal backend for this platform")?,
        };

        let mode = if cli.interactive {
            Mode::Interactive
        } else {
            Mode::Static
        };

        let setup = ViewerSetup {
            mode,
            center_x: cli.center_x,
            center_y: cli.center_y,
            zoom: cli.zoom,
            overrides: geometry_override_from_env(env),
        };

        Ok(Self {
            path: cli.filename,
            backend,
            setup,
        })
    }
}

/// Read `COLUMNS` / `LINES`. Values that are not positive integers are ignored.
pub fn geometry_override_from_env(env: impl Fn(&str) -> Option<String>) -> GeometryOverride {
    let read = |name: &str| -> Option<u16> {
        let raw = env(name)?;
        match raw.trim().parse::<u16>() {
            Ok(v) if v > 0 => Some(v),
            _ => {
                warn!("ignoring {}={:?}: not a positive integer", name, raw);
                None
            }
        }
    };
    GeometryOverride {
        columns: read("COLUMNS"),
        rows: read("LINES"),
    }
}
