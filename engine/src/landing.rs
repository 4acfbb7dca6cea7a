//! Landing page state.
//!
//! [`Landing`] owns every animation on the page: the viewport source the
//! observations subscribe to, the counter drivers, the stepper and the
//! contact form. The frame loop calls [`Landing::tick`] once per frame and
//! renders from the accessors; input handlers call the navigation methods.
//! Dropping the landing tears down every timer it owns.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info};

use reveal_config::Settings;
use reveal_types::ContractError;
use reveal_types::ui::{
    BoundedStepper, EasedCounter, EffectTimer, InputMode, StepOutcome, UiOptions, Viewport,
};

use crate::contact::ContactForm;
use crate::content::{DEPLOYED_LABEL, DEPLOYING_LABEL, FEATURES, Feature, STEPS, Step};
use crate::counter::{CounterGate, CounterHandle, CounterSnapshot, Motion};
use crate::layout::PageLayout;
use crate::visibility::{Observation, ViewportSource, observe};

/// How long a feature card takes to fade in once revealed.
pub const CARD_FADE: Duration = Duration::from_millis(400);

/// Rows scrolled past the top before the page chrome switches to its
/// scrolled look.
pub const SCROLLED_ROWS: i32 = 3;

#[derive(Debug)]
pub struct FeatureCard {
    feature: Feature,
    reveal: Observation,
    counter: CounterHandle,
    fade: Option<EffectTimer>,
}

impl FeatureCard {
    #[must_use]
    pub fn feature(&self) -> &Feature {
        &self.feature
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.fade.is_some()
    }

    /// Opacity of the card in `[0, 1]`; zero until revealed.
    #[must_use]
    pub fn fade_progress(&self) -> f64 {
        self.fade.as_ref().map_or(0.0, EffectTimer::progress)
    }

    #[must_use]
    pub fn counter(&self) -> CounterSnapshot {
        self.counter.snapshot()
    }

    #[must_use]
    pub fn metric_text(&self) -> String {
        format!(
            "{}{}",
            self.counter().state.displayed,
            self.feature.metric_suffix
        )
    }
}

#[derive(Debug)]
pub struct Landing {
    settings: Settings,
    layout: PageLayout,
    viewport: ViewportSource,
    hero: CounterHandle,
    cards: Vec<FeatureCard>,
    stepper: BoundedStepper<Step>,
    contact: ContactForm,
    input_mode: InputMode,
    last_frame: Instant,
}

impl Landing {
    /// Build the page and start observing it through a viewport of
    /// `viewport_height` rows scrolled to the top.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(settings: Settings, viewport_height: u32) -> Result<Self, ContractError> {
        let layout = PageLayout::new(FEATURES.len());
        let viewport = ViewportSource::new(Viewport::new(0, viewport_height));
        let motion = if settings.ui.reduced_motion {
            Motion::Reduced
        } else {
            Motion::Animated
        };

        let hero_counter = EasedCounter::new(settings.hero_target, settings.hero_duration)?
            .with_easing(settings.easing);
        let hero_gate = observe(layout.hero, settings.visibility, Some(viewport.probe()));
        let hero = CounterHandle::spawn(
            hero_counter,
            CounterGate::Visible(hero_gate),
            settings.tick_interval,
            motion,
        );

        let mut cards = Vec::with_capacity(FEATURES.len());
        for (feature, region) in FEATURES.iter().zip(&layout.cards) {
            let counter = EasedCounter::new(feature.metric, settings.hero_duration)?
                .with_easing(settings.easing);
            let gate = observe(*region, settings.visibility, Some(viewport.probe()));
            cards.push(FeatureCard {
                feature: *feature,
                reveal: observe(*region, settings.visibility, Some(viewport.probe())),
                counter: CounterHandle::spawn(
                    counter,
                    CounterGate::Visible(gate),
                    settings.tick_interval,
                    motion,
                ),
                fade: None,
            });
        }

        let mut stepper = BoundedStepper::new(STEPS.to_vec(), settings.step_progress)?
            .with_easing(settings.step_easing)
            .with_auto_advance(settings.auto_advance && !settings.ui.reduced_motion);
        if settings.ui.reduced_motion {
            stepper.finish_progress();
        }

        info!(
            page_height = layout.total_height(),
            viewport_height,
            reduced_motion = settings.ui.reduced_motion,
            "Landing page ready"
        );

        Ok(Self {
            contact: ContactForm::new(settings.submit_delay, settings.success_reset),
            settings,
            layout,
            viewport,
            hero,
            cards,
            stepper,
            input_mode: InputMode::Browse,
            last_frame: Instant::now(),
        })
    }

    // ---- frame ----------------------------------------------------------

    /// Advance frame-driven state by the time since the previous tick.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        let reduced = self.settings.ui.reduced_motion;
        if let StepOutcome::Moved { from, to } = self.stepper.advance(delta) {
            debug!(from, to, "Step auto-advanced");
        }

        for card in &mut self.cards {
            if card.fade.is_none() && card.reveal.poll_visible() {
                debug!(title = card.feature.title, "Feature card revealed");
                card.fade = Some(if reduced {
                    EffectTimer::finished(CARD_FADE)
                } else {
                    EffectTimer::new(CARD_FADE)
                });
            } else if let Some(fade) = card.fade.as_mut() {
                fade.advance(delta);
            }
        }

        self.contact.poll();
    }

    // ---- scrolling ------------------------------------------------------

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport.current()
    }

    /// True once the page has scrolled away from the hero.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.viewport().scroll_top > SCROLLED_ROWS
    }

    pub fn scroll_by(&mut self, rows: i32) {
        let current = self.viewport();
        self.scroll_to(current.scroll_top.saturating_add(rows));
    }

    /// Scroll to `row`, clamped to the page.
    pub fn scroll_to(&mut self, row: i32) {
        let current = self.viewport();
        let top = row.clamp(0, self.layout.max_scroll(current.height));
        self.viewport.set(Viewport::new(top, current.height));
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.page_rows());
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-self.page_rows());
    }

    pub fn scroll_home(&mut self) {
        self.scroll_to(0);
    }

    pub fn scroll_end(&mut self) {
        self.scroll_to(i32::MAX);
    }

    /// The terminal changed size. Re-clamps the scroll offset.
    pub fn resize(&mut self, viewport_height: u32) {
        let current = self.viewport();
        let top = current
            .scroll_top
            .clamp(0, self.layout.max_scroll(viewport_height));
        self.viewport.set(Viewport::new(top, viewport_height));
    }

    fn page_rows(&self) -> i32 {
        let height = i32::try_from(self.viewport().height).unwrap_or(i32::MAX);
        (height - 2).max(1)
    }

    // ---- stepper --------------------------------------------------------

    pub fn next_step(&mut self) -> StepOutcome {
        let outcome = self.stepper.next();
        self.after_step_change(outcome)
    }

    pub fn previous_step(&mut self) -> StepOutcome {
        let outcome = self.stepper.previous();
        self.after_step_change(outcome)
    }

    /// Jump to step `index`; out-of-range indices are ignored.
    pub fn jump_to_step(&mut self, index: usize) -> StepOutcome {
        let outcome = self.stepper.jump_to(index);
        if let StepOutcome::Rejected { index, len } = outcome {
            debug!(index, len, "Ignoring jump to missing step");
        }
        self.after_step_change(outcome)
    }

    /// Replay the active step's progress fill.
    pub fn replay_step(&mut self) {
        self.stepper.remount();
        if self.settings.ui.reduced_motion {
            self.stepper.finish_progress();
        }
    }

    fn after_step_change(&mut self, outcome: StepOutcome) -> StepOutcome {
        if outcome.moved() && self.settings.ui.reduced_motion {
            self.stepper.finish_progress();
        }
        outcome
    }

    // ---- contact form ---------------------------------------------------

    /// Route keys to the form and bring it into view.
    pub fn enter_form(&mut self) {
        self.input_mode = InputMode::Form;
        self.scroll_to(self.layout.contact.top);
    }

    /// Return keys to page navigation. An in-flight submission is abandoned.
    pub fn leave_form(&mut self) {
        if self.contact.is_submitting() {
            info!("Abandoning contact submission");
        }
        self.contact.cancel();
        self.input_mode = InputMode::Browse;
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    #[must_use]
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    // ---- rendering accessors --------------------------------------------

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.settings.ui
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    #[must_use]
    pub fn hero(&self) -> CounterSnapshot {
        self.hero.snapshot()
    }

    /// The hero metric, e.g. `"38s"`.
    #[must_use]
    pub fn hero_text(&self) -> String {
        format!("{}s", self.hero().state.displayed)
    }

    #[must_use]
    pub fn hero_label(&self) -> &'static str {
        if self.hero().state.complete {
            DEPLOYED_LABEL
        } else {
            DEPLOYING_LABEL
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[FeatureCard] {
        &self.cards
    }

    #[must_use]
    pub fn stepper(&self) -> &BoundedStepper<Step> {
        &self.stepper
    }
}
