//! Built-in breathing presets and the current pattern selection.

use crate::NonEmptyStaticStr;
use crate::pattern::{CustomPattern, Pattern};

/// Identifier used to select the custom pattern in config files.
pub const CUSTOM_ID: &str = "custom";

/// A named pattern from the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    id: NonEmptyStaticStr,
    name: NonEmptyStaticStr,
    description: NonEmptyStaticStr,
    pattern: Pattern,
}

impl Preset {
    const fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        pattern: Pattern,
    ) -> Self {
        Self {
            id: NonEmptyStaticStr::new(id),
            name: NonEmptyStaticStr::new(name),
            description: NonEmptyStaticStr::new(description),
            pattern,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id.as_str()
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name.as_str()
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description.as_str()
    }

    #[must_use]
    pub const fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Look up a preset by its stable id.
    #[must_use]
    pub fn find(id: &str) -> Option<&'static Preset> {
        PRESETS.iter().find(|preset| preset.id() == id)
    }
}

/// Ordered preset catalog.
pub static PRESETS: [Preset; 4] = [
    Preset::new(
        "4-7-8",
        "Relax",
        "Classic 4-7-8 technique for deep relaxation and sleep.",
        Pattern::from_static(4, 7, 8),
    ),
    Preset::new(
        "4-4-7",
        "Calm",
        "Gentle nervous system regulation for anxiety.",
        Pattern::from_static(4, 4, 7),
    ),
    Preset::new(
        "box",
        "Box",
        "Navy SEAL technique for focus and stress relief.",
        Pattern::from_static(4, 4, 4),
    ),
    Preset::new(
        "balance",
        "Balance",
        "Coherent breathing to equalize energy.",
        Pattern::from_static(5, 5, 5),
    ),
];

/// Preset selected when nothing else is configured.
pub const DEFAULT_PRESET_ID: &str = "4-4-7";

const CUSTOM_NAME: &str = "Custom";
const CUSTOM_DESCRIPTION: &str = "Your personal rhythm.";

/// Which pattern the next session will use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSelection {
    Preset(&'static Preset),
    Custom,
}

impl PatternSelection {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PatternSelection::Preset(preset) => preset.name(),
            PatternSelection::Custom => CUSTOM_NAME,
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            PatternSelection::Preset(preset) => preset.description(),
            PatternSelection::Custom => CUSTOM_DESCRIPTION,
        }
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            PatternSelection::Preset(preset) => preset.id(),
            PatternSelection::Custom => CUSTOM_ID,
        }
    }

    /// Resolve to a concrete pattern, reading `custom` when selected.
    #[must_use]
    pub fn resolve(self, custom: &CustomPattern) -> Pattern {
        match self {
            PatternSelection::Preset(preset) => preset.pattern(),
            PatternSelection::Custom => custom.pattern(),
        }
    }

    #[must_use]
    pub fn is_custom(self) -> bool {
        matches!(self, PatternSelection::Custom)
    }
}

impl Default for PatternSelection {
    fn default() -> Self {
        Preset::find(DEFAULT_PRESET_ID).map_or(PatternSelection::Custom, PatternSelection::Preset)
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_PRESET_ID, PRESETS, PatternSelection, Preset};
    use crate::pattern::{CustomPattern, Pattern, PatternField};

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in PRESETS.iter().enumerate() {
            for b in &PRESETS[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn find_returns_catalog_entry() {
        let preset = Preset::find("box").expect("box preset");
        assert_eq!(preset.name(), "Box");
        assert_eq!(preset.pattern(), Pattern::from_static(4, 4, 4));
        assert!(Preset::find("nope").is_none());
    }

    #[test]
    fn default_selection_is_calm() {
        let selection = PatternSelection::default();
        assert_eq!(selection.id(), DEFAULT_PRESET_ID);
        assert_eq!(selection.name(), "Calm");
    }

    #[test]
    fn custom_selection_resolves_current_custom_values() {
        let mut custom = CustomPattern::default();
        custom.adjust(PatternField::Exhale, 4);
        assert_eq!(
            PatternSelection::Custom.resolve(&custom),
            Pattern::from_static(4, 4, 8)
        );
    }
}
