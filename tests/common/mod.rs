//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::time::Duration;

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use reveal_engine::{Landing, Settings};
use reveal_tui::{draw, page_height};
use tokio::time::sleep;

pub const COLS: u16 = 80;
pub const ROWS: u16 = 24;
pub const FRAME: Duration = Duration::from_millis(16);

/// A landing page sized for a `COLS` x `ROWS` terminal.
pub fn landing(settings: Settings) -> Landing {
    Landing::new(settings, page_height(ROWS)).expect("settings are valid")
}

/// Drive the frame loop for at least `total` of virtual time.
pub async fn run_frames(landing: &mut Landing, total: Duration) {
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        sleep(FRAME).await;
        landing.tick();
        elapsed += FRAME;
    }
}

/// Render one frame and return the screen as text, one line per row.
pub fn render(landing: &Landing) -> String {
    let mut terminal = Terminal::new(TestBackend::new(COLS, ROWS)).expect("test terminal");
    terminal
        .draw(|frame| draw(frame, landing, 0))
        .expect("draw");
    screen(terminal.backend().buffer())
}

pub fn screen(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf.cell((x, y)).map_or(" ", |c| c.symbol()));
        }
        out.push('\n');
    }
    out
}
