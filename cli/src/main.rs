//! Reveal CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`reveal_engine`] (page state and animation timers) and
//! [`reveal_tui`] (rendering), providing RAII-based terminal management with
//! guaranteed cleanup.
//!
//! ```text
//! main() -> TerminalSession::new() -> run_landing() -> Landing + TUI
//! ```
//!
//! # Event Loop
//!
//! A fixed 16ms render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`reveal_tui::InputPump`])
//! 3. Advance frame-driven state (`landing.tick()`)
//! 4. Render frame
//!
//! Counters tick on their own timer tasks; the frame loop only reads their
//! latest values.

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::{Backend, CrosstermBackend, Terminal};
use std::{
    fs::{self, File, OpenOptions},
    io::{Stdout, Write, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use reveal_engine::{Landing, RevealConfig, Settings, ticker};
use reveal_tui::{InputPump, draw, handle_events, page_height};

const FRAME_DURATION: Duration = Duration::from_millis(16);

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

        info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
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

    // Primary: ~/.reveal/logs/reveal.log
    if let Some(config_path) = RevealConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("reveal.log"));
    }

    // Fallback: ./.reveal/logs/reveal.log
    candidates.push(PathBuf::from(".reveal").join("logs").join("reveal.log"));

    candidates
}

fn load_settings() -> Settings {
    match RevealConfig::load() {
        Ok(Some(config)) => config.settings(),
        Ok(None) => Settings::default(),
        Err(err) => {
            warn!(path = %err.path().display(), "Using default settings: {err}");
            Settings::default()
        }
    }
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Enables raw mode, bracketed paste and the alternate screen, plus
/// alternate scroll mode so the scroll wheel arrives as arrow keys. On drop
/// all of it is restored, even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnableBracketedPaste) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            let _ = execute!(out, LeaveAlternateScreen, DisableBracketedPaste);
            return Err(err.into());
        }
        // Enable alternate scroll mode: CSI ? 1007 h
        let _ = out.write_all(b"\x1b[?1007h");
        let _ = out.flush();

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                let _ = out.write_all(b"\x1b[?1007l");
                let _ = out.flush();
                let _ = execute!(out, LeaveAlternateScreen, DisableBracketedPaste);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let backend = self.terminal.backend_mut();
        // Disable alternate scroll mode: CSI ? 1007 l
        let _ = backend.write_all(b"\x1b[?1007l");
        let _ = Write::flush(backend);
        let _ = execute!(backend, LeaveAlternateScreen, DisableBracketedPaste);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let settings = load_settings();
    info!(?settings, "Starting reveal");

    let result = {
        let mut session = TerminalSession::new()?;
        run_landing(&mut session.terminal, settings).await
    };

    if let Err(err) = &result {
        eprintln!("Error: {err:?}");
    }
    result
}

async fn run_landing<B>(terminal: &mut Terminal<B>, settings: Settings) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let size = terminal.size()?;
    let mut landing = Landing::new(settings, page_height(size.height))?;
    let mut input = InputPump::new();
    let mut frames = ticker(FRAME_DURATION);
    let mut frame_tick: usize = 0;

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        match handle_events(&mut landing, &mut input) {
            Ok(true) => break Ok(()),
            Ok(false) => {}
            Err(e) => break Err(e),
        }

        landing.tick();

        if let Err(e) = terminal.draw(|frame| draw(frame, &landing, frame_tick)) {
            break Err(e.into());
        }
        frame_tick = frame_tick.wrapping_add(1);
    };

    input.shutdown().await;
    info!("Landing closed");
    result
}
