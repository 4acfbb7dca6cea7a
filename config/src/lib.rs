//! Configuration loading for Reveal.
//!
//! Every section of `~/.reveal/config.toml` is optional. [`RevealConfig`] is
//! the raw file; [`Settings`] is the resolved, validated view the engine
//! consumes. Invalid values are logged and replaced by defaults so a bad
//! config never blocks the page from rendering.

use serde::Deserialize;
use std::{env, fs, path::Path, path::PathBuf, time::Duration};
use thiserror::Error;

use reveal_types::ui::{
    DEFAULT_ROOT_MARGIN, DEFAULT_THRESHOLD, Easing, UiOptions, VisibilityOptions,
};

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 16;
pub const DEFAULT_HERO_TARGET: u32 = 38;
pub const DEFAULT_HERO_DURATION_MS: u64 = 1500;
pub const DEFAULT_STEP_PROGRESS_MS: u64 = 2000;
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;
pub const DEFAULT_SUCCESS_RESET_MS: u64 = 5000;

const CONFIG_ENV: &str = "REVEAL_CONFIG";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RevealConfig {
    pub app: Option<AppConfig>,
    pub animation: Option<AnimationConfig>,
    pub visibility: Option<VisibilityConfig>,
    pub stepper: Option<StepperConfig>,
    pub contact: Option<ContactConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for markers and progress bars.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Skip counter easing and progress fills.
    #[serde(default)]
    pub reduced_motion: bool,
}

/// ```toml
/// [animation]
/// tick_interval_ms = 16
/// hero_target = 38
/// hero_duration_ms = 1500
/// easing = "out_quart"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct AnimationConfig {
    pub tick_interval_ms: Option<u64>,
    pub hero_target: Option<u32>,
    pub hero_duration_ms: Option<u64>,
    pub easing: Option<Easing>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VisibilityConfig {
    /// Visible fraction in (0, 1] that counts as "in view".
    pub threshold: Option<f64>,
    /// Rows added around the viewport; positive fires early.
    pub root_margin: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StepperConfig {
    pub progress_ms: Option<u64>,
    /// Curve of the per-step progress fill.
    pub easing: Option<Easing>,
    pub auto_advance: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactConfig {
    pub submit_delay_ms: Option<u64>,
    /// How long the success message stays up after a submission.
    pub success_reset_ms: Option<u64>,
}

/// Resolved configuration with every default applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub ui: UiOptions,
    pub tick_interval: Duration,
    pub hero_target: u32,
    pub hero_duration: Duration,
    pub easing: Easing,
    pub visibility: VisibilityOptions,
    pub step_progress: Duration,
    pub step_easing: Easing,
    pub auto_advance: bool,
    pub submit_delay: Duration,
    pub success_reset: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ui: UiOptions::default(),
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            hero_target: DEFAULT_HERO_TARGET,
            hero_duration: Duration::from_millis(DEFAULT_HERO_DURATION_MS),
            easing: Easing::default(),
            visibility: VisibilityOptions::default(),
            step_progress: Duration::from_millis(DEFAULT_STEP_PROGRESS_MS),
            step_easing: Easing::InOutCubic,
            auto_advance: true,
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            success_reset: Duration::from_millis(DEFAULT_SUCCESS_RESET_MS),
        }
    }
}

impl RevealConfig {
    /// Load from the default location. `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolve into [`Settings`], falling back to defaults for invalid values.
    #[must_use]
    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();

        let ui = self.app.as_ref().map_or(defaults.ui, |app| UiOptions {
            ascii_only: app.ascii_only,
            high_contrast: app.high_contrast,
            reduced_motion: app.reduced_motion,
        });

        let animation = self.animation.as_ref();
        let tick_interval = positive_millis(
            "animation.tick_interval_ms",
            animation.and_then(|a| a.tick_interval_ms),
            defaults.tick_interval,
        );
        let hero_duration = positive_millis(
            "animation.hero_duration_ms",
            animation.and_then(|a| a.hero_duration_ms),
            defaults.hero_duration,
        );
        let hero_target = animation
            .and_then(|a| a.hero_target)
            .unwrap_or(defaults.hero_target);
        let easing = animation.and_then(|a| a.easing).unwrap_or(defaults.easing);

        let visibility = self
            .visibility
            .as_ref()
            .map_or(defaults.visibility, |v| {
                let threshold = v.threshold.unwrap_or(DEFAULT_THRESHOLD);
                let margin = v.root_margin.unwrap_or(DEFAULT_ROOT_MARGIN);
                VisibilityOptions::new(threshold, margin).unwrap_or_else(|err| {
                    tracing::warn!("Ignoring visibility.threshold: {err}");
                    VisibilityOptions::new(DEFAULT_THRESHOLD, margin)
                        .unwrap_or(defaults.visibility)
                })
            });

        let stepper = self.stepper.as_ref();
        let step_progress = positive_millis(
            "stepper.progress_ms",
            stepper.and_then(|s| s.progress_ms),
            defaults.step_progress,
        );
        let step_easing = stepper
            .and_then(|s| s.easing)
            .unwrap_or(defaults.step_easing);
        let auto_advance = stepper
            .and_then(|s| s.auto_advance)
            .unwrap_or(defaults.auto_advance);

        let contact = self.contact.as_ref();
        let submit_delay = contact
            .and_then(|c| c.submit_delay_ms)
            .map_or(defaults.submit_delay, Duration::from_millis);
        let success_reset = positive_millis(
            "contact.success_reset_ms",
            contact.and_then(|c| c.success_reset_ms),
            defaults.success_reset,
        );

        Settings {
            ui,
            tick_interval,
            hero_target,
            hero_duration,
            easing,
            visibility,
            step_progress,
            step_easing,
            auto_advance,
            submit_delay,
            success_reset,
        }
    }
}

fn positive_millis(key: &str, value: Option<u64>, default: Duration) -> Duration {
    match value {
        Some(0) => {
            tracing::warn!("Ignoring {key} = 0; using {}ms", default.as_millis());
            default
        }
        Some(ms) => Duration::from_millis(ms),
        None => default,
    }
}

fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV)
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".reveal").join("config.toml"))
}
