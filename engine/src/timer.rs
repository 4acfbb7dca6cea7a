//! Owned timer tasks.
//!
//! Every animation that ticks on its own owns exactly one [`TimerHandle`].
//! Dropping the handle cancels the task: the stop flag is raised first so a
//! task that is mid-poll publishes nothing further, then the task is aborted
//! so it is never polled again.

use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::{
    task::JoinHandle,
    time::{Interval, MissedTickBehavior, interval},
};

/// Shortest period a ticker accepts; `tokio::time::interval` panics on zero.
const MIN_TICK: Duration = Duration::from_millis(1);

/// Read side of a [`TimerHandle`]'s cancellation flag, passed into the task.
#[derive(Debug, Clone)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Debug)]
pub struct TimerHandle {
    stop: Arc<AtomicBool>,
    join: Option<JoinHandle<()>>,
}

impl TimerHandle {
    /// Spawn `task` on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn<F, Fut>(task: F) -> Self
    where
        F: FnOnce(StopSignal) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let join = tokio::spawn(task(StopSignal(Arc::clone(&stop))));
        Self {
            stop,
            join: Some(join),
        }
    }

    /// Cancel the task. Idempotent.
    pub fn cancel(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            join.abort();
        }
    }

    /// True once the task ran to completion or was cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.join.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Periodic tick source. The first tick completes immediately.
///
/// Missed ticks are skipped rather than bursted: a late frame samples the
/// clock once instead of replaying every tick it slept through.
#[must_use]
pub fn ticker(period: Duration) -> Interval {
    let mut ticks = interval(period.max(MIN_TICK));
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticks
}

#[cfg(test)]
mod tests {
    use super::{TimerHandle, ticker};
    use std::{
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    };
    use tokio::time::{Instant, sleep};

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_the_task() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&ticks);
        let handle = TimerHandle::spawn(move |stop| async move {
            let mut source = ticker(Duration::from_millis(10));
            loop {
                source.tick().await;
                if stop.is_stopped() {
                    return;
                }
                counted.fetch_add(1, Ordering::SeqCst);
            }
        });

        sleep(Duration::from_millis(55)).await;
        drop(handle);
        let seen = ticks.load(Ordering::SeqCst);
        assert!(seen > 0);

        sleep(Duration::from_millis(500)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), seen);
    }

    #[tokio::test(start_paused = true)]
    async fn completed_task_reports_finished() {
        let mut handle = TimerHandle::spawn(|_| async {});
        sleep(Duration::from_millis(1)).await;
        assert!(handle.is_finished());

        handle.cancel();
        handle.cancel();
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn zero_period_is_clamped() {
        let start = Instant::now();
        let mut source = ticker(Duration::ZERO);
        source.tick().await;
        source.tick().await;
        assert!(start.elapsed() >= Duration::from_millis(1));
    }
}
