//! Counter animation driver.
//!
//! Runs an [`EasedCounter`] on its own tick source once its gate opens and
//! publishes snapshots through a `watch` channel. The frame loop reads the
//! latest snapshot; it never drives the counter itself.

use std::time::Duration;

use tokio::{sync::watch, time::Instant};
use tracing::debug;

use reveal_types::ui::{CounterState, EasedCounter};

use crate::timer::{StopSignal, TimerHandle, ticker};
use crate::visibility::Observation;

/// What has to happen before the counter starts climbing.
#[derive(Debug)]
pub enum CounterGate {
    /// Start immediately.
    Open,
    /// Start when the observed region becomes visible. If the observation
    /// ends without firing, the counter stays at zero.
    Visible(Observation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Animated,
    /// Jump straight to the target once the gate opens.
    Reduced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub state: CounterState,
    /// The gate opened and the animation began.
    pub started: bool,
}

/// A running counter. Dropping it cancels the tick source.
#[derive(Debug)]
pub struct CounterHandle {
    rx: watch::Receiver<CounterSnapshot>,
    timer: TimerHandle,
}

impl CounterHandle {
    /// Start driving `counter`.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn(
        counter: EasedCounter,
        gate: CounterGate,
        tick: Duration,
        motion: Motion,
    ) -> Self {
        let (tx, rx) = watch::channel(CounterSnapshot {
            state: counter.state(),
            started: false,
        });
        let timer = TimerHandle::spawn(move |stop| run(counter, gate, tick, motion, tx, stop));
        Self { rx, timer }
    }

    #[must_use]
    pub fn snapshot(&self) -> CounterSnapshot {
        *self.rx.borrow()
    }

    /// An extra receiver, e.g. to watch the counter from another task.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CounterSnapshot> {
        self.rx.clone()
    }

    /// Wait until the counter completes or its driver stops.
    pub async fn finished(&mut self) -> CounterSnapshot {
        loop {
            let snapshot = *self.rx.borrow_and_update();
            if snapshot.state.complete || self.rx.changed().await.is_err() {
                return *self.rx.borrow();
            }
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.timer.is_finished()
    }

    /// Cancel the animation now. Equivalent to dropping the handle.
    pub fn teardown(self) {
        drop(self);
    }
}

async fn run(
    mut counter: EasedCounter,
    gate: CounterGate,
    tick: Duration,
    motion: Motion,
    tx: watch::Sender<CounterSnapshot>,
    stop: StopSignal,
) {
    if let CounterGate::Visible(mut observation) = gate
        && !observation.visible().await
    {
        return;
    }

    if motion == Motion::Reduced {
        let state = counter.finish();
        publish(&tx, &stop, state);
        return;
    }

    let start = Instant::now();
    let mut ticks = ticker(tick);
    loop {
        ticks.tick().await;
        if stop.is_stopped() {
            return;
        }
        let state = counter.sample(start.elapsed());
        if !publish(&tx, &stop, state) || tx.is_closed() {
            return;
        }
        if state.complete {
            debug!(
                target_value = state.target,
                elapsed_ms = start.elapsed().as_millis(),
                "Counter complete"
            );
            return;
        }
    }
}

/// Store `state` unless the handle was torn down. The stop flag is read
/// under the channel's write lock.
fn publish(tx: &watch::Sender<CounterSnapshot>, stop: &StopSignal, state: CounterState) -> bool {
    tx.send_if_modified(|current| {
        if stop.is_stopped() {
            return false;
        }
        *current = CounterSnapshot {
            state,
            started: true,
        };
        true
    })
}
