//! Time-to-progress curves.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    OutCubic,
    /// Cubic ease in and out: slow at both ends.
    InOutCubic,
    /// `1 - (1 - p)^4`: fast start, long deceleration.
    #[default]
    OutQuart,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    ///
    /// Input outside the unit interval is clamped.
    #[must_use]
    pub fn apply(self, p: f64) -> f64 {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        match self {
            Self::Linear => p,
            Self::OutCubic => ease_out_cubic(p),
            Self::InOutCubic => ease_in_out_cubic(p),
            Self::OutQuart => ease_out_quart(p),
        }
    }
}

fn ease_out_cubic(p: f64) -> f64 {
    let inv = 1.0 - p;
    1.0 - inv * inv * inv
}

fn ease_in_out_cubic(p: f64) -> f64 {
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        let inv = -2.0 * p + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}

fn ease_out_quart(p: f64) -> f64 {
    let inv = 1.0 - p;
    1.0 - inv.powi(4)
}
