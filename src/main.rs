//! Terminal image viewer (default binary).
//!
//! Static mode draws the image once below the prompt and exits. With
//! `--interactive` the viewer keeps redrawing on each key press.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tui_imgview::config::{Cli, ViewerConfig};
use tui_imgview::core::Image;
use tui_imgview::engine::{run, ViewerSetup};
use tui_imgview::term::{Backend, CrosstermTerminal};
use tui_imgview::types::ViewState;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = ViewerConfig::from_cli(cli, |name| std::env::var(name).ok())?;
    info!("backend: {}, mode: {:?}", config.backend.as_str(), config.setup.mode);

    // Load before the terminal is touched so a bad file leaves it untouched.
    let image = Image::load(&config.path)
        .with_context(|| format!("cannot open {}", config.path.display()))?;

    let state = run_with_backend(config.backend, &image, &config.setup)?;
    info!(
        "final view: center=({}, {}) zoom={}",
        state.center_x, state.center_y, state.zoom
    );
    Ok(())
}

fn run_with_backend(backend: Backend, image: &Image, setup: &ViewerSetup) -> Result<ViewState> {
    let state = match backend {
        #[cfg(unix)]
        Backend::Termios => run(&mut tui_imgview::term::UnixTerminal::new(), image, setup)?,
        #[cfg(not(unix))]
        Backend::Termios => {
            return Err(tui_imgview::term::TermError::UnsupportedPlatform(
                "the termios backend needs a unix target".into(),
            )
            .into())
        }
        Backend::Crossterm => run(&mut CrosstermTerminal::new(), image, setup)?,
    };
    Ok(state)
}
