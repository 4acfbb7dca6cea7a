//! Viewport observation.
//!
//! [`ViewportSource`] is the visibility-detection facility: the owner of the
//! page publishes viewport changes (scroll, resize) into it. [`observe`]
//! turns a region into an [`Observation`] that resolves at most once, when
//! the region first becomes visible.

use tokio::sync::{oneshot, watch};
use tracing::{debug, warn};

use reveal_types::ui::{Region, Viewport, VisibilityOptions, VisibilityTrigger};

use crate::timer::TimerHandle;

/// Receiver side of a [`ViewportSource`].
pub type ViewportProbe = watch::Receiver<Viewport>;

#[derive(Debug)]
pub struct ViewportSource {
    tx: watch::Sender<Viewport>,
}

impl ViewportSource {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let (tx, _rx) = watch::channel(viewport);
        Self { tx }
    }

    /// Publish a viewport. Observers are only woken on an actual change.
    pub fn set(&self, viewport: Viewport) {
        self.tx.send_if_modified(|current| {
            if *current == viewport {
                false
            } else {
                *current = viewport;
                true
            }
        });
    }

    #[must_use]
    pub fn current(&self) -> Viewport {
        *self.tx.borrow()
    }

    #[must_use]
    pub fn probe(&self) -> ViewportProbe {
        self.tx.subscribe()
    }

    /// Number of live observations still subscribed.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObservationState {
    Pending,
    Visible,
    /// Ended without becoming visible.
    Released,
}

/// A pending "became visible" event for one region.
///
/// Owns its observation task; dropping the observation releases the
/// viewport subscription without emitting.
#[derive(Debug)]
pub struct Observation {
    rx: oneshot::Receiver<()>,
    state: ObservationState,
    _timer: Option<TimerHandle>,
}

/// Start observing `region`.
///
/// With no `probe` the facility is unavailable and the observation fails
/// open: it reports visible immediately.
#[must_use]
pub fn observe(
    region: Region,
    options: VisibilityOptions,
    probe: Option<ViewportProbe>,
) -> Observation {
    let (tx, rx) = oneshot::channel();
    let mut trigger = VisibilityTrigger::new(region, options);

    let Some(mut probe) = probe else {
        warn!(
            top = region.top,
            "Viewport source unavailable; treating region as visible"
        );
        if trigger.fail_open() {
            let _ = tx.send(());
        }
        return Observation {
            rx,
            state: ObservationState::Pending,
            _timer: None,
        };
    };

    let timer = TimerHandle::spawn(move |stop| async move {
        loop {
            let viewport = *probe.borrow_and_update();
            if trigger.evaluate(viewport) {
                if !stop.is_stopped() {
                    debug!(top = region.top, scroll = viewport.scroll_top, "Region visible");
                    let _ = tx.send(());
                }
                return;
            }
            // Source dropped: the page is gone, end without emitting.
            if probe.changed().await.is_err() {
                trigger.release();
                return;
            }
        }
    });

    Observation {
        rx,
        state: ObservationState::Pending,
        _timer: Some(timer),
    }
}

impl Observation {
    /// Non-blocking check, suitable for a frame loop.
    pub fn poll_visible(&mut self) -> bool {
        if self.state == ObservationState::Pending {
            match self.rx.try_recv() {
                Ok(()) => self.state = ObservationState::Visible,
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => {
                    self.state = ObservationState::Released;
                }
            }
        }
        self.state == ObservationState::Visible
    }

    /// Wait for the event. Returns `false` if the observation ended without
    /// the region ever becoming visible.
    pub async fn visible(&mut self) -> bool {
        if self.state == ObservationState::Pending {
            self.state = match (&mut self.rx).await {
                Ok(()) => ObservationState::Visible,
                Err(_) => ObservationState::Released,
            };
        }
        self.state == ObservationState::Visible
    }

    #[must_use]
    pub fn has_been_visible(&self) -> bool {
        self.state == ObservationState::Visible
    }

    /// Stop observing without emitting.
    pub fn release(self) {
        drop(self);
    }
}
