//! folio terminal entry point.
//!
//! Runs the portfolio command emulator full-screen in the current terminal.
//! Enter runs a command, Up/Down recall history, Ctrl+L clears the screen,
//! Ctrl+C drops the current line, PageUp/PageDown scroll, Escape quits.

mod backend;
mod render;

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};

use backend::{AppEvent, TermBackend};
use folio_terminal::{InputResult, Session, handle_input};
use folio_types::config::TerminalConfig;
use render::Viewport;

fn init_logging() -> Result<()> {
    // The UI owns the screen, so only warnings reach stderr unless logs
    // are redirected to a file.
    match std::env::var_os("FOLIO_LOG_FILE") {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("creating log file {}", path.to_string_lossy()))?;
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        },
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
                .init();
        },
    }
    Ok(())
}

/// Resolve config from CLI arg, `FOLIO_CONFIG` env var, or defaults.
fn load_config() -> Result<TerminalConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FOLIO_CONFIG").ok())
        .map(PathBuf::from);
    match path {
        Some(path) => TerminalConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(TerminalConfig::default()),
    }
}

fn main() -> Result<()> {
    init_logging()?;
    let config = load_config()?;
    log::info!("Starting folio as {}@{}", config.user, config.host);

    let mut session = Session::with_config(&config);
    if config.log_commands {
        session.set_on_command(|cmd| log::info!("command executed: {cmd}"));
    }

    let mut backend = TermBackend::new()?;
    let mut viewport = Viewport::default();

    loop {
        let size = backend.size()?;
        render::draw(backend.out(), &session, &config, viewport, size)?;

        let page = (size.1 as usize).saturating_sub(2).max(1);
        match backend.next_event()? {
            AppEvent::Input(event) => match handle_input(&event, &mut session) {
                InputResult::Quit => break,
                InputResult::ScrollToBottom => viewport.scroll_to_bottom(),
                InputResult::Continue => {},
            },
            AppEvent::PageUp => viewport.page_up(page, session.scrollback().len()),
            AppEvent::PageDown => viewport.page_down(page),
            AppEvent::Resize => {},
        }
    }

    drop(backend);
    log::info!("folio shut down cleanly");
    Ok(())
}
