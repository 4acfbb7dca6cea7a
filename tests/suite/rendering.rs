//! Full-frame rendering against ratatui's test backend.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use reveal_engine::Settings;
use reveal_tui::apply_event;

use crate::common::{landing, render, run_frames};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[tokio::test(start_paused = true)]
async fn first_frame_shows_the_hero() {
    let landing = landing(Settings::default());
    let screen = render(&landing);
    assert!(screen.contains("Ship to production"));
    assert!(screen.contains("0s"));
    assert!(screen.contains("BROWSE"));
}

#[tokio::test(start_paused = true)]
async fn settled_hero_shows_the_final_metric() {
    let mut landing = landing(Settings::default());
    run_frames(&mut landing, Duration::from_millis(1600)).await;
    let screen = render(&landing);
    assert!(screen.contains("38s"));
    assert!(screen.contains("Deployed"));
}

#[tokio::test(start_paused = true)]
async fn ascii_mode_renders_ascii_step_dots() {
    let mut settings = Settings::default();
    settings.ui.ascii_only = true;
    let mut landing = landing(settings);
    landing.scroll_to(landing.layout().steps.top);
    let screen = render(&landing);
    assert!(screen.contains("< Prev"));
    assert!(screen.contains("Next >"));
    assert!(screen.contains("* o o"));
}

#[tokio::test(start_paused = true)]
async fn form_mode_shows_validation_errors() {
    let mut landing = landing(Settings::default());
    apply_event(&mut landing, press(KeyCode::Tab));
    apply_event(&mut landing, press(KeyCode::Enter));
    let screen = render(&landing);
    assert!(screen.contains("FORM"));
    assert!(screen.contains("Name is required"));
}
