//! Bounded multi-step navigator with a per-step progress fill.

use std::time::Duration;

use crate::ContractError;

use super::animation::EffectTimer;
use super::easing::Easing;

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved { from: usize, to: usize },
    /// Already at the first or last step.
    AtBoundary,
    /// Jump to the step that is already active.
    Unchanged,
    /// Out-of-range jump; state untouched.
    Rejected { index: usize, len: usize },
}

impl StepOutcome {
    #[must_use]
    pub fn moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// An index into a fixed, non-empty list of steps.
///
/// `active` always satisfies `active < steps.len()`. Every successful move
/// replays the progress fill from zero.
#[derive(Debug, Clone)]
pub struct BoundedStepper<T> {
    steps: Vec<T>,
    active: usize,
    progress: EffectTimer,
    easing: Easing,
    auto_advance: bool,
}

impl<T> BoundedStepper<T> {
    pub fn new(steps: Vec<T>, progress_duration: Duration) -> Result<Self, ContractError> {
        if steps.is_empty() {
            return Err(ContractError::EmptySteps);
        }
        Ok(Self {
            steps,
            active: 0,
            progress: EffectTimer::new(progress_duration),
            easing: Easing::Linear,
            auto_advance: false,
        })
    }

    /// Curve applied to [`BoundedStepper::progress`].
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Advance to the next step whenever the progress fill completes.
    #[must_use]
    pub fn with_auto_advance(mut self, enabled: bool) -> Self {
        self.auto_advance = enabled;
        self
    }

    pub fn next(&mut self) -> StepOutcome {
        if self.active + 1 >= self.steps.len() {
            return StepOutcome::AtBoundary;
        }
        self.move_to(self.active + 1)
    }

    pub fn previous(&mut self) -> StepOutcome {
        if self.active == 0 {
            return StepOutcome::AtBoundary;
        }
        self.move_to(self.active - 1)
    }

    pub fn jump_to(&mut self, index: usize) -> StepOutcome {
        if index >= self.steps.len() {
            return StepOutcome::Rejected {
                index,
                len: self.steps.len(),
            };
        }
        if index == self.active {
            return StepOutcome::Unchanged;
        }
        self.move_to(index)
    }

    /// Replay the current step's progress fill as if freshly entered.
    pub fn remount(&mut self) {
        self.progress.restart();
    }

    /// Advance the progress fill by a frame delta.
    ///
    /// With auto-advance on, a completed fill moves to the next step. The
    /// last step stays put once its fill completes.
    pub fn advance(&mut self, delta: Duration) -> StepOutcome {
        let was_finished = self.progress.is_finished();
        self.progress.advance(delta);
        if self.auto_advance && !was_finished && self.progress.is_finished() {
            return self.next();
        }
        StepOutcome::Unchanged
    }

    /// Show the fill as complete without animating.
    pub fn finish_progress(&mut self) {
        self.progress.finish();
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active(&self) -> &T {
        &self.steps[self.active]
    }

    #[must_use]
    pub fn steps(&self) -> &[T] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        self.active + 1 < self.steps.len()
    }

    #[must_use]
    pub fn can_previous(&self) -> bool {
        self.active > 0
    }

    /// Eased fill of the active step's progress bar in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress.eased(self.easing)
    }

    #[must_use]
    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    fn move_to(&mut self, to: usize) -> StepOutcome {
        let from = self.active;
        self.active = to;
        self.progress.restart();
        StepOutcome::Moved { from, to }
    }
}
