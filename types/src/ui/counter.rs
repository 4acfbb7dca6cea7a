//! Eased numeric counter.
//!
//! Pure sampling of a counter that climbs from zero to a target along an
//! easing curve. The engine drives it with wall-clock elapsed time; nothing
//! here reads a clock.

use std::time::Duration;

use crate::ContractError;

use super::animation::normalized_progress;
use super::easing::Easing;

/// Snapshot of a counter animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    pub displayed: u32,
    pub target: u32,
    pub complete: bool,
}

impl CounterState {
    #[must_use]
    pub const fn initial(target: u32) -> Self {
        Self {
            displayed: 0,
            target,
            complete: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EasedCounter {
    target: u32,
    duration: Duration,
    easing: Easing,
    state: CounterState,
}

impl EasedCounter {
    pub fn new(target: u32, duration: Duration) -> Result<Self, ContractError> {
        if duration.is_zero() {
            return Err(ContractError::ZeroDuration);
        }
        Ok(Self {
            target,
            duration,
            easing: Easing::default(),
            state: CounterState::initial(target),
        })
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sample the counter at `elapsed` since the animation started.
    ///
    /// The displayed value never decreases between samples and reaches
    /// exactly the target once `elapsed >= duration`. Samples after
    /// completion return the frozen final state.
    pub fn sample(&mut self, elapsed: Duration) -> CounterState {
        if self.state.complete {
            return self.state;
        }

        if elapsed >= self.duration {
            return self.finish();
        }

        let eased = self
            .easing
            .apply(normalized_progress(elapsed, self.duration));
        let raw = (eased * f64::from(self.target)).floor();
        let value = if raw >= f64::from(self.target) {
            self.target
        } else {
            raw as u32
        };
        self.state.displayed = self.state.displayed.max(value);
        self.state
    }

    /// Jump straight to the target.
    pub fn finish(&mut self) -> CounterState {
        self.state.displayed = self.target;
        self.state.complete = true;
        self.state
    }

    #[must_use]
    pub fn state(&self) -> CounterState {
        self.state
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.complete
    }
}
