//! Configuration files feeding the landing page.

use std::{fs, time::Duration};

use reveal_config::{ConfigError, RevealConfig};
use reveal_types::ui::Easing;
use tempfile::tempdir;

use crate::common::{landing, run_frames};

#[tokio::test(start_paused = true)]
async fn reduced_motion_config_skips_the_count_up() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[app]\nreduced_motion = true\n\n[animation]\nhero_target = 12\n",
    )
    .expect("write config");

    let settings = RevealConfig::load_from(&path).expect("config").settings();
    let mut landing = landing(settings);
    run_frames(&mut landing, Duration::from_millis(32)).await;

    assert_eq!(landing.hero_text(), "12s");
    assert_eq!(landing.hero_label(), "Deployed");
    assert!(!landing.stepper().auto_advance());
}

#[tokio::test(start_paused = true)]
async fn custom_duration_and_easing_are_honored() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[animation]\nhero_duration_ms = 300\neasing = \"linear\"\n",
    )
    .expect("write config");

    let settings = RevealConfig::load_from(&path).expect("config").settings();
    assert_eq!(settings.easing, Easing::Linear);

    let mut landing = landing(settings);
    run_frames(&mut landing, Duration::from_millis(340)).await;
    assert_eq!(landing.hero_text(), "38s");
}

#[test]
fn broken_config_reports_its_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[animation\nhero_target = ").expect("write config");

    let err = RevealConfig::load_from(&path).expect_err("parse failure");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), &path);
}
