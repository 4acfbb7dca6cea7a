//! Runtime for the Reveal landing page.
//!
//! The pure state machines live in `reveal_types::ui`. This crate gives them
//! time and ownership: timer tasks that stop when dropped, visibility
//! observations over a viewport channel, counter drivers, the simulated
//! contact submission and the [`Landing`] page that owns them all.

mod contact;
mod content;
mod counter;
mod landing;
mod layout;
mod timer;
mod visibility;

pub use contact::{ContactForm, SubmissionReceipt, SubmissionStatus, submit};
pub use content::{
    DEPLOYED_LABEL, DEPLOYING_LABEL, FEATURES, Feature, HERO_METRIC_LABEL, HERO_SUBTITLE,
    HERO_TITLE, STEPS, Step,
};
pub use counter::{CounterGate, CounterHandle, CounterSnapshot, Motion};
pub use landing::{CARD_FADE, FeatureCard, Landing, SCROLLED_ROWS};
pub use layout::PageLayout;
pub use timer::{StopSignal, TimerHandle, ticker};
pub use visibility::{Observation, ViewportProbe, ViewportSource, observe};

pub use reveal_config::{ConfigError, RevealConfig, Settings};
pub use reveal_types::ContractError;
pub use reveal_types::ui::{
    BoundedStepper, ContactError, ContactField, CounterState, EasedCounter, Easing, InputMode,
    Region, StepOutcome, UiOptions, Viewport, VisibilityOptions,
};
