//! Lavender CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`lavender_engine`] (application state) and [`lavender_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed cleanup.
//!
//! ```text
//! main() -> TerminalSession::new() -> run_app() -> App + TUI
//! ```
//!
//! # Event Loop
//!
//! A fixed ~60 FPS render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`lavender_tui::InputPump`])
//! 3. Advance application state (`app.tick()`), which applies elapsed
//!    breathing and meditation ticks
//! 4. Render frame

use std::{
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use lavender_engine::{App, LavenderConfig};
use lavender_tui::{InputPump, draw, handle_events};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No log file: stay silent rather than write over the TUI.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: logs/ next to the config file, ~/.lavender/logs/lavender.log by default
    if let Some(config_path) = LavenderConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("lavender.log"));
    }

    // Fallback: ./.lavender/logs/lavender.log
    candidates.push(PathBuf::from(".lavender").join("logs").join("lavender.log"));

    candidates
}

/// Owns the terminal for the lifetime of the UI.
///
/// Raw mode and the alternate screen are restored in `Drop`, so the terminal
/// stays usable after early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match LavenderConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Using defaults: {err}");
            None
        }
    };
    let mut app = App::new(config.as_ref());

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app).await
    };

    app.shutdown();
    tracing::info!("Lavender exited");

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        return Err(err);
    }
    Ok(())
}

const FRAME_DURATION: Duration = Duration::from_millis(16);

async fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let quit_now = match handle_events(app, &mut input) {
            Ok(q) => q,
            Err(e) => break Err(e),
        };
        if quit_now {
            break Ok(());
        }

        app.tick();

        if let Err(e) = terminal.draw(|frame| draw(frame, app)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
