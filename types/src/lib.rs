//! Core domain types for Lavender.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod affirmation;
mod emotion;
mod pattern;
mod phase;
mod preset;
pub mod ui;

pub use affirmation::{AFFIRMATIONS, daily_affirmation};
pub use emotion::{Emotion, EmotionExplorer, EmotionFamily};
pub use pattern::{CustomPattern, FieldRange, Pattern, PatternField};
pub use phase::Phase;
pub use preset::{CUSTOM_ID, DEFAULT_PRESET_ID, PRESETS, PatternSelection, Preset};

/// A compile-time checked non-empty static string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonEmptyStaticStr(&'static str);

impl NonEmptyStaticStr {
    #[must_use]
    pub const fn new(value: &'static str) -> Self {
        assert!(!value.is_empty(), "NonEmptyStaticStr must not be empty");
        Self(value)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl AsRef<str> for NonEmptyStaticStr {
    fn as_ref(&self) -> &str {
        self.0
    }
}
