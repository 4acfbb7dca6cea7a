//! End-to-end page flows driven through the key handler and frame loop.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use reveal_engine::{
    CounterGate, CounterHandle, EasedCounter, Landing, Motion, Region, Settings, StepOutcome,
    SubmissionStatus, Viewport, ViewportSource, VisibilityOptions, observe,
};
use reveal_tui::apply_event;
use tokio::time::sleep;

use crate::common::{FRAME, landing, run_frames};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(landing: &mut Landing, text: &str) {
    for c in text.chars() {
        apply_event(landing, press(KeyCode::Char(c)));
    }
}

#[tokio::test(start_paused = true)]
async fn hero_counts_to_38_without_going_backwards() {
    let mut landing = landing(Settings::default());
    assert_eq!(landing.hero_text(), "0s");
    assert_eq!(landing.hero_label(), "Deploying...");

    let mut previous = 0;
    for _ in 0..100 {
        run_frames(&mut landing, FRAME).await;
        let shown = landing.hero().state.displayed;
        assert!(shown >= previous, "{shown} < {previous}");
        assert!(shown <= 38);
        previous = shown;
    }

    assert_eq!(landing.hero_text(), "38s");
    assert_eq!(landing.hero_label(), "Deployed");
    assert!(landing.hero().state.complete);
}

#[tokio::test(start_paused = true)]
async fn stepper_scenario_through_the_keyboard() {
    let mut settings = Settings::default();
    settings.auto_advance = false;
    let mut landing = landing(settings);

    apply_event(&mut landing, press(KeyCode::Left));
    assert_eq!(landing.stepper().active_index(), 0);

    apply_event(&mut landing, press(KeyCode::Right));
    apply_event(&mut landing, press(KeyCode::Right));
    assert_eq!(landing.stepper().active_index(), 2);

    apply_event(&mut landing, press(KeyCode::Right));
    assert_eq!(landing.stepper().active_index(), 2);
    assert!(!landing.stepper().can_next());

    apply_event(&mut landing, press(KeyCode::Char('7')));
    assert_eq!(landing.stepper().active_index(), 2);

    apply_event(&mut landing, press(KeyCode::Char('1')));
    assert_eq!(landing.stepper().active_index(), 0);
    assert_eq!(landing.jump_to_step(0), StepOutcome::Unchanged);
}

#[tokio::test(start_paused = true)]
async fn auto_advance_stops_on_the_last_step() {
    let mut settings = Settings::default();
    settings.step_progress = Duration::from_millis(200);
    let mut landing = landing(settings);

    run_frames(&mut landing, Duration::from_millis(2000)).await;
    assert_eq!(landing.stepper().active_index(), 2);
    assert!(landing.stepper().progress() >= 1.0);
}

#[tokio::test(start_paused = true)]
async fn feature_cards_reveal_in_scroll_order() {
    let mut landing = landing(Settings::default());
    run_frames(&mut landing, Duration::from_millis(100)).await;

    let revealed = |landing: &Landing| {
        landing
            .cards()
            .iter()
            .filter(|card| card.is_revealed())
            .count()
    };
    let before = revealed(&landing);
    assert!(before < landing.cards().len());

    apply_event(&mut landing, press(KeyCode::End));
    run_frames(&mut landing, Duration::from_millis(100)).await;
    assert!(revealed(&landing) >= before);

    // Scroll back through the whole page so every card passes the viewport.
    apply_event(&mut landing, press(KeyCode::Home));
    for _ in 0..80 {
        apply_event(&mut landing, press(KeyCode::Char('j')));
        run_frames(&mut landing, FRAME).await;
    }
    assert_eq!(revealed(&landing), landing.cards().len());

    // Scrolling away never hides a card again.
    apply_event(&mut landing, press(KeyCode::Home));
    run_frames(&mut landing, Duration::from_millis(2000)).await;
    for card in landing.cards() {
        assert!(card.is_revealed());
        assert_eq!(card.counter().state.displayed, card.feature().metric);
    }
}

#[tokio::test(start_paused = true)]
async fn contact_submission_completes_after_the_delay() {
    let mut landing = landing(Settings::default());

    apply_event(&mut landing, press(KeyCode::Tab));
    type_text(&mut landing, "Grace");
    apply_event(&mut landing, press(KeyCode::Tab));
    type_text(&mut landing, "grace@example.com");
    apply_event(&mut landing, press(KeyCode::Tab));
    type_text(&mut landing, "Can we migrate in a day?");
    apply_event(&mut landing, press(KeyCode::Enter));
    assert_eq!(landing.contact().status(), &SubmissionStatus::Submitting);

    run_frames(&mut landing, Duration::from_millis(1400)).await;
    assert_eq!(landing.contact().status(), &SubmissionStatus::Submitting);

    run_frames(&mut landing, Duration::from_millis(200)).await;
    let SubmissionStatus::Submitted(receipt) = landing.contact().status() else {
        panic!("expected a submitted form, got {:?}", landing.contact().status());
    };
    assert_eq!(receipt.name, "Grace");
    assert_eq!(receipt.email, "grace@example.com");
}

#[tokio::test(start_paused = true)]
async fn released_trigger_never_starts_its_counter() {
    let source = ViewportSource::new(Viewport::new(0, 20));
    let gate = observe(
        Region::new(100, 5),
        VisibilityOptions::default(),
        Some(source.probe()),
    );
    let counter = EasedCounter::new(38, Duration::from_millis(1500)).expect("valid counter");
    let handle = CounterHandle::spawn(
        counter,
        CounterGate::Visible(gate),
        FRAME,
        Motion::Animated,
    );

    let watcher = handle.subscribe();
    sleep(Duration::from_millis(100)).await;
    assert_eq!(source.observer_count(), 1);

    handle.teardown();
    source.set(Viewport::new(95, 20));
    sleep(Duration::from_millis(2000)).await;
    assert_eq!(source.observer_count(), 0);

    let seen = *watcher.borrow();
    assert!(!seen.started);
    assert_eq!(seen.state.displayed, 0);
    assert!(!seen.state.complete);
}
