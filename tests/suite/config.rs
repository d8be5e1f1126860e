use std::fs;

use lavender_engine::{App, LavenderConfig, Pattern, PatternSelection};

fn write_config(dir: &tempfile::TempDir, raw: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, raw).expect("write config");
    path
}

#[test]
fn full_config_seeds_the_app() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
[app]
ascii_only = true
high_contrast = true

[breathing]
preset = "box"

[breathing.custom]
inhale = 6
hold = 2
exhale = 9

[meditation]
minutes = 20
"#,
    );

    let config = LavenderConfig::load_from(&path)
        .expect("load")
        .expect("config present");
    let app = App::new(Some(&config));

    assert!(app.ui_options().ascii_only);
    assert!(app.ui_options().high_contrast);
    assert_eq!(app.breathing().selection().id(), "box");
    assert_eq!(
        app.breathing().custom().pattern(),
        Pattern::from_static(6, 2, 9)
    );
    assert_eq!(app.meditation().duration_minutes(), 20);
}

#[test]
fn unknown_preset_and_out_of_range_values_fall_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
[breathing]
preset = "7-11"

[breathing.custom]
inhale = 0
hold = -4
exhale = 500

[meditation]
minutes = 0
"#,
    );

    let config = LavenderConfig::load_from(&path)
        .expect("load")
        .expect("config present");
    assert_eq!(config.selection(), PatternSelection::default());
    assert_eq!(
        config.custom_pattern().pattern(),
        Pattern::from_static(2, 0, 20)
    );

    let app = App::new(Some(&config));
    assert_eq!(app.meditation().duration_minutes(), 1);
}

#[test]
fn broken_config_is_an_error_not_a_panic() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, "[breathing\npreset = ");
    assert!(LavenderConfig::load_from(&path).is_err());
}
