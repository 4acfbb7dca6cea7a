//! Input handling for the Reveal TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::{
    sync::mpsc,
    task::{JoinHandle, spawn_blocking},
    time::timeout,
};
use tracing::debug;

use reveal_engine::{InputMode, Landing};

use crate::page_height;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering
const SCROLL_STEP: i32 = 1;

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and hands them to the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = Arc::clone(&stop);

        let join = spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a backpressured send unblocks.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending input into `landing`. Returns `Ok(true)` when the user quit.
pub fn handle_events(landing: &mut Landing, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(landing, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(false)
}

/// Apply one terminal event. Returns true when the user asked to quit.
pub fn apply_event(landing: &mut Landing, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            // Handle press + repeat events (ignore releases)
            if matches!(key.kind, KeyEventKind::Release) {
                return false;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return true;
            }
            match landing.input_mode() {
                InputMode::Browse => handle_browse_mode(landing, key),
                InputMode::Form => {
                    handle_form_mode(landing, key);
                    false
                }
            }
        }
        Event::Paste(text) if landing.input_mode() == InputMode::Form => {
            let form = landing.contact_mut();
            for c in text.chars() {
                form.insert_char(c);
            }
            false
        }
        Event::Resize(_, rows) => {
            landing.resize(page_height(rows));
            false
        }
        _ => false,
    }
}

fn handle_browse_mode(landing: &mut Landing, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('j') | KeyCode::Down => landing.scroll_by(SCROLL_STEP),
        KeyCode::Char('k') | KeyCode::Up => landing.scroll_by(-SCROLL_STEP),
        KeyCode::PageDown | KeyCode::Char(' ') => landing.page_down(),
        KeyCode::PageUp => landing.page_up(),
        KeyCode::Home | KeyCode::Char('g') => landing.scroll_home(),
        KeyCode::End | KeyCode::Char('G') => landing.scroll_end(),
        KeyCode::Char('l') | KeyCode::Right => {
            landing.next_step();
        }
        KeyCode::Char('h') | KeyCode::Left => {
            landing.previous_step();
        }
        KeyCode::Char('r') => landing.replay_step(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                landing.jump_to_step(digit as usize - 1);
            }
        }
        KeyCode::Tab => landing.enter_form(),
        _ => {}
    }
    false
}

fn handle_form_mode(landing: &mut Landing, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => landing.leave_form(),
        KeyCode::Tab => landing.contact_mut().focus_next(),
        KeyCode::Enter => {
            debug!("Contact form submit requested");
            landing.contact_mut().submit();
        }
        KeyCode::Backspace => landing.contact_mut().backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            landing.contact_mut().insert_char(c);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::apply_event;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use reveal_engine::{ContactField, InputMode, Landing, Settings, SubmissionStatus};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn landing() -> Landing {
        Landing::new(Settings::default(), 24).expect("default settings are valid")
    }

    #[tokio::test(start_paused = true)]
    async fn quit_keys() {
        let mut landing = landing();
        assert!(apply_event(&mut landing, key(KeyCode::Char('q'))));
        assert!(apply_event(
            &mut landing,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn releases_are_ignored() {
        let mut landing = landing();
        let mut release = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(!apply_event(&mut landing, Event::Key(release)));
        assert_eq!(landing.viewport().scroll_top, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn browse_keys_scroll_and_step() {
        let mut landing = landing();
        apply_event(&mut landing, key(KeyCode::Char('j')));
        apply_event(&mut landing, key(KeyCode::Down));
        assert_eq!(landing.viewport().scroll_top, 2);
        apply_event(&mut landing, key(KeyCode::Home));
        assert_eq!(landing.viewport().scroll_top, 0);

        apply_event(&mut landing, key(KeyCode::Char('l')));
        assert_eq!(landing.stepper().active_index(), 1);
        apply_event(&mut landing, key(KeyCode::Char('3')));
        assert_eq!(landing.stepper().active_index(), 2);
        apply_event(&mut landing, key(KeyCode::Char('9')));
        assert_eq!(landing.stepper().active_index(), 2);
        apply_event(&mut landing, key(KeyCode::Left));
        assert_eq!(landing.stepper().active_index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn form_mode_captures_typing() {
        let mut landing = landing();
        apply_event(&mut landing, key(KeyCode::Tab));
        assert_eq!(landing.input_mode(), InputMode::Form);

        // 'q' is text here, not quit.
        assert!(!apply_event(&mut landing, key(KeyCode::Char('q'))));
        apply_event(&mut landing, key(KeyCode::Char('x')));
        apply_event(&mut landing, key(KeyCode::Backspace));
        assert_eq!(landing.contact().fields().name, "q");

        apply_event(&mut landing, key(KeyCode::Tab));
        assert_eq!(landing.contact().focus(), ContactField::Email);
        apply_event(&mut landing, Event::Paste("q@example.com".to_string()));
        assert_eq!(landing.contact().fields().email, "q@example.com");

        apply_event(&mut landing, key(KeyCode::Enter));
        assert!(matches!(
            landing.contact().status(),
            SubmissionStatus::Invalid(_)
        ));

        apply_event(&mut landing, key(KeyCode::Esc));
        assert_eq!(landing.input_mode(), InputMode::Browse);
    }

    #[tokio::test(start_paused = true)]
    async fn resize_reclamps_the_viewport() {
        let mut landing = landing();
        apply_event(&mut landing, key(KeyCode::End));
        apply_event(&mut landing, Event::Resize(80, 41));
        assert_eq!(landing.viewport().height, 40);
        assert_eq!(
            landing.viewport().scroll_top,
            landing.layout().max_scroll(40)
        );
    }
}
