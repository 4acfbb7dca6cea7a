use std::time::Duration;

use super::easing::Easing;

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f64();
    let total = duration.as_secs_f64();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Where a fixed-duration animation currently stands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    Running { progress: f64 },
    Completed,
}

/// Frame-advanced timer for fixed-duration effects.
///
/// The timer does not read any clock: the owner feeds it frame deltas via
/// [`EffectTimer::advance`], which keeps it deterministic under test.
#[derive(Debug, Clone)]
pub struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// A timer that is already at its end.
    #[must_use]
    pub fn finished(duration: Duration) -> Self {
        Self {
            elapsed: duration,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    /// Replay from zero.
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Jump to the end without animating.
    pub fn finish(&mut self) {
        self.elapsed = self.elapsed.max(self.duration);
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub fn eased(&self, easing: Easing) -> f64 {
        easing.apply(self.progress())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        if self.is_finished() {
            AnimPhase::Completed
        } else {
            AnimPhase::Running {
                progress: self.progress(),
            }
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimPhase, EffectTimer, normalized_progress};
    use std::time::Duration;

    #[test]
    fn zero_duration_is_complete() {
        assert!((normalized_progress(Duration::ZERO, Duration::ZERO) - 1.0).abs() < f64::EPSILON);
        assert_eq!(EffectTimer::new(Duration::ZERO).phase(), AnimPhase::Completed);
    }

    #[test]
    fn progress_clamped_at_one() {
        let mut timer = EffectTimer::new(Duration::from_millis(10));
        timer.advance(Duration::from_millis(1000));
        assert!((timer.progress() - 1.0).abs() < f64::EPSILON);
        assert!(timer.is_finished());
    }

    #[test]
    fn restart_replays_from_zero() {
        let mut timer = EffectTimer::new(Duration::from_millis(100));
        timer.advance(Duration::from_millis(150));
        assert_eq!(timer.phase(), AnimPhase::Completed);

        timer.restart();
        assert!(matches!(timer.phase(), AnimPhase::Running { progress } if progress == 0.0));
    }

    #[test]
    fn half_way() {
        let mut timer = EffectTimer::new(Duration::from_millis(200));
        timer.advance(Duration::from_millis(100));
        assert!((timer.progress() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn finished_constructor_skips_animation() {
        let timer = EffectTimer::finished(Duration::from_millis(400));
        assert!(timer.is_finished());
    }
}
