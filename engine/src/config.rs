use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use lavender_core::DEFAULT_MEDITATION_MINUTES;
use lavender_types::ui::UiOptions;
use lavender_types::{CUSTOM_ID, CustomPattern, PatternField, PatternSelection, Preset};

/// Overrides the default config location.
pub const CONFIG_ENV_VAR: &str = "LAVENDER_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct LavenderConfig {
    pub app: Option<AppConfig>,
    pub breathing: Option<BreathingConfig>,
    pub meditation: Option<MeditationConfig>,
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
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the breathing circle easing.
    #[serde(default)]
    pub reduced_motion: bool,
}

/// Initial pattern selection.
///
/// ```toml
/// [breathing]
/// preset = "box"     # any catalog id, or "custom"
///
/// [breathing.custom]
/// inhale = 4
/// hold = 0
/// exhale = 8
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct BreathingConfig {
    pub preset: Option<String>,
    pub custom: Option<CustomPatternConfig>,
}

/// Starting values for the custom pattern. Out-of-range values are clamped.
#[derive(Debug, Default, Deserialize)]
pub struct CustomPatternConfig {
    pub inhale: Option<i64>,
    pub hold: Option<i64>,
    pub exhale: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MeditationConfig {
    pub minutes: Option<u32>,
}

impl LavenderConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from an explicit path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

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
            Ok(config) => Ok(Some(config)),
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

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default()
    }

    /// Configured selection, falling back to the default preset for unknown ids.
    #[must_use]
    pub fn selection(&self) -> PatternSelection {
        let Some(id) = self
            .breathing
            .as_ref()
            .and_then(|breathing| breathing.preset.as_deref())
        else {
            return PatternSelection::default();
        };
        let id = id.trim();
        if id.eq_ignore_ascii_case(CUSTOM_ID) {
            return PatternSelection::Custom;
        }
        match Preset::find(id) {
            Some(preset) => PatternSelection::Preset(preset),
            None => {
                tracing::warn!("Unknown breathing preset in config: {}", id);
                PatternSelection::default()
            }
        }
    }

    #[must_use]
    pub fn custom_pattern(&self) -> CustomPattern {
        let defaults = CustomPattern::default();
        let Some(custom) = self
            .breathing
            .as_ref()
            .and_then(|breathing| breathing.custom.as_ref())
        else {
            return defaults;
        };
        let pick = |value: Option<i64>, field: PatternField| {
            value.unwrap_or_else(|| i64::from(defaults.get(field)))
        };
        CustomPattern::clamped(
            pick(custom.inhale, PatternField::Inhale),
            pick(custom.hold, PatternField::Hold),
            pick(custom.exhale, PatternField::Exhale),
        )
    }

    #[must_use]
    pub fn meditation_minutes(&self) -> u32 {
        self.meditation
            .as_ref()
            .and_then(|meditation| meditation.minutes)
            .unwrap_or(DEFAULT_MEDITATION_MINUTES)
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".lavender").join("config.toml"))
}
