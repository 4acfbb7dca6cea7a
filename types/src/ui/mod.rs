//! UI state types for the landing page.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod contact;
mod counter;
mod easing;
mod geometry;
mod options;
mod stepper;
mod visibility;

pub use animation::{AnimPhase, EffectTimer};
pub use contact::{ContactError, ContactField, ContactFields, ValidContact};
pub use counter::{CounterState, EasedCounter};
pub use easing::Easing;
pub use geometry::{Region, Viewport, visible_fraction};
pub use options::{InputMode, UiOptions};
pub use stepper::{BoundedStepper, StepOutcome};
pub use visibility::{
    DEFAULT_ROOT_MARGIN, DEFAULT_THRESHOLD, TriggerState, VisibilityOptions, VisibilityTrigger,
};
