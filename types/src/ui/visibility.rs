//! One-shot viewport visibility trigger.
//!
//! The trigger is evaluated against viewport snapshots and reports the
//! moment its region first becomes visible. Once fired it never fires again
//! and never retracts. It owns no subscription; the engine's `Observation`
//! feeds it viewport changes and releases it.

use crate::ContractError;

use super::geometry::{Region, Viewport, visible_fraction};

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_ROOT_MARGIN: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityOptions {
    threshold: f64,
    root_margin: i32,
}

impl VisibilityOptions {
    /// Options for a one-shot trigger.
    ///
    /// `threshold` is the visible fraction of the region, in `(0, 1]`, that
    /// counts as visible. A positive `root_margin` grows the viewport so the
    /// trigger fires slightly before the region scrolls on-screen.
    pub fn new(threshold: f64, root_margin: i32) -> Result<Self, ContractError> {
        if threshold.is_nan() || threshold <= 0.0 || threshold > 1.0 {
            return Err(ContractError::InvalidThreshold { value: threshold });
        }
        Ok(Self {
            threshold,
            root_margin,
        })
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn root_margin(&self) -> i32 {
        self.root_margin
    }
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    /// Waiting for the region to enter the viewport.
    Observing,
    /// Fired. Terminal.
    Visible,
    /// Torn down. Never fires again.
    Released,
}

#[derive(Debug, Clone)]
pub struct VisibilityTrigger {
    region: Region,
    options: VisibilityOptions,
    state: TriggerState,
    has_been_visible: bool,
}

impl VisibilityTrigger {
    #[must_use]
    pub fn new(region: Region, options: VisibilityOptions) -> Self {
        Self {
            region,
            options,
            state: TriggerState::Observing,
            has_been_visible: false,
        }
    }

    /// Evaluate against a viewport snapshot.
    ///
    /// Returns `true` exactly when this evaluation emits the visibility
    /// event.
    #[must_use]
    pub fn evaluate(&mut self, viewport: Viewport) -> bool {
        if self.state != TriggerState::Observing {
            return false;
        }

        let fraction = visible_fraction(self.region, viewport, self.options.root_margin);
        if fraction > 0.0 && fraction >= self.options.threshold {
            self.fire();
            return true;
        }
        false
    }

    /// Treat the region as visible because visibility cannot be measured.
    ///
    /// Returns `true` when this call emits the event.
    #[must_use]
    pub fn fail_open(&mut self) -> bool {
        if self.state == TriggerState::Observing {
            self.fire();
            true
        } else {
            false
        }
    }

    /// Stop observing. No event is emitted after this.
    pub fn release(&mut self) {
        self.state = TriggerState::Released;
    }

    #[must_use]
    pub fn has_been_visible(&self) -> bool {
        self.has_been_visible
    }

    #[must_use]
    pub fn state(&self) -> TriggerState {
        self.state
    }

    fn fire(&mut self) {
        self.state = TriggerState::Visible;
        self.has_been_visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::{TriggerState, VisibilityOptions, VisibilityTrigger};
    use crate::ContractError;
    use crate::ui::geometry::{Region, Viewport};

    fn below_fold() -> VisibilityTrigger {
        VisibilityTrigger::new(
            Region::new(40, 6),
            VisibilityOptions::new(0.1, 0).expect("valid options"),
        )
    }

    #[test]
    fn rejects_bad_thresholds() {
        for bad in [0.0, -0.5, 1.5, f64::NAN] {
            assert!(matches!(
                VisibilityOptions::new(bad, 0),
                Err(ContractError::InvalidThreshold { .. })
            ));
        }
        assert!(VisibilityOptions::new(1.0, 0).is_ok());
    }

    #[test]
    fn fires_on_first_pass_when_already_visible() {
        let mut trigger = VisibilityTrigger::new(Region::new(0, 5), VisibilityOptions::default());
        assert!(trigger.evaluate(Viewport::new(0, 24)));
        assert!(trigger.has_been_visible());
        assert_eq!(trigger.state(), TriggerState::Visible);
    }

    #[test]
    fn fires_once_when_scrolled_into_view() {
        let mut trigger = below_fold();
        assert!(!trigger.evaluate(Viewport::new(0, 24)));
        assert!(!trigger.has_been_visible());

        assert!(trigger.evaluate(Viewport::new(30, 24)));
        assert!(!trigger.evaluate(Viewport::new(31, 24)));
        assert!(!trigger.evaluate(Viewport::new(0, 24)));
        assert!(!trigger.evaluate(Viewport::new(30, 24)));
        assert!(trigger.has_been_visible());
    }

    #[test]
    fn threshold_requires_enough_of_the_region() {
        let mut trigger = VisibilityTrigger::new(
            Region::new(20, 10),
            VisibilityOptions::new(0.5, 0).expect("valid options"),
        );
        // Three of ten rows visible.
        assert!(!trigger.evaluate(Viewport::new(0, 23)));
        // Five of ten rows visible.
        assert!(trigger.evaluate(Viewport::new(0, 25)));
    }

    #[test]
    fn margin_fires_before_on_screen() {
        let mut trigger = VisibilityTrigger::new(
            Region::new(25, 4),
            VisibilityOptions::new(0.1, 2).expect("valid options"),
        );
        assert!(trigger.evaluate(Viewport::new(0, 24)));
    }

    #[test]
    fn released_trigger_never_fires() {
        let mut trigger = below_fold();
        trigger.release();
        assert!(!trigger.evaluate(Viewport::new(40, 24)));
        assert!(!trigger.fail_open());
        assert!(!trigger.has_been_visible());
        assert_eq!(trigger.state(), TriggerState::Released);
    }

    #[test]
    fn fail_open_fires_once() {
        let mut trigger = below_fold();
        assert!(trigger.fail_open());
        assert!(!trigger.fail_open());
        assert!(!trigger.evaluate(Viewport::new(40, 24)));
        assert!(trigger.has_been_visible());
    }

    #[test]
    fn release_keeps_visibility_history() {
        let mut trigger = below_fold();
        assert!(trigger.evaluate(Viewport::new(40, 24)));
        trigger.release();
        assert!(trigger.has_been_visible());
    }
}
