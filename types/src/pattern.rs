//! Breathing patterns: the (inhale, hold, exhale) duration triple.
//!
//! A [`Pattern`] is any triple with non-zero inhale and exhale. A
//! [`CustomPattern`] additionally keeps every field inside its [`FieldRange`];
//! the only way to change it is [`CustomPattern::adjust`], which clamps.

use std::fmt;

// ============================================================================
// Pattern
// ============================================================================

/// Durations, in whole seconds, of one breathing cycle.
///
/// Invariant: `inhale >= 1` and `exhale >= 1`. `hold` may be zero, in which
/// case the hold phase is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    inhale: u32,
    hold: u32,
    exhale: u32,
}

impl Pattern {
    /// Compile-time checked constructor for static tables.
    #[must_use]
    pub const fn from_static(inhale: u32, hold: u32, exhale: u32) -> Self {
        assert!(inhale > 0, "Pattern inhale must be non-zero");
        assert!(exhale > 0, "Pattern exhale must be non-zero");
        Self {
            inhale,
            hold,
            exhale,
        }
    }

    #[must_use]
    pub const fn inhale_secs(&self) -> u32 {
        self.inhale
    }

    #[must_use]
    pub const fn hold_secs(&self) -> u32 {
        self.hold
    }

    #[must_use]
    pub const fn exhale_secs(&self) -> u32 {
        self.exhale
    }

    #[must_use]
    pub const fn get(&self, field: PatternField) -> u32 {
        match field {
            PatternField::Inhale => self.inhale,
            PatternField::Hold => self.hold,
            PatternField::Exhale => self.exhale,
        }
    }

    #[must_use]
    pub const fn has_hold(&self) -> bool {
        self.hold > 0
    }

    /// Length of one full cycle in seconds.
    #[must_use]
    pub const fn cycle_secs(&self) -> u32 {
        self.inhale + self.hold + self.exhale
    }
}

/// Renders as `inhale-hold-exhale`, e.g. `4-7-8`.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.inhale, self.hold, self.exhale)
    }
}

// ============================================================================
// Custom pattern
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternField {
    Inhale,
    Hold,
    Exhale,
}

impl PatternField {
    pub const ALL: [PatternField; 3] = [Self::Inhale, Self::Hold, Self::Exhale];

    #[must_use]
    pub const fn range(self) -> FieldRange {
        match self {
            Self::Inhale => FieldRange::new(2, 10),
            Self::Hold => FieldRange::new(0, 30),
            Self::Exhale => FieldRange::new(2, 20),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inhale => "inhale",
            Self::Hold => "hold",
            Self::Exhale => "exhale",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Inhale => Self::Hold,
            Self::Hold => Self::Exhale,
            Self::Exhale => Self::Inhale,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Inhale => Self::Exhale,
            Self::Hold => Self::Inhale,
            Self::Exhale => Self::Hold,
        }
    }
}

/// Closed range `[min, max]` of seconds a custom field may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldRange {
    pub min: u32,
    pub max: u32,
}

impl FieldRange {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        assert!(min <= max, "FieldRange min must not exceed max");
        Self { min, max }
    }

    #[must_use]
    pub fn clamp(self, value: i64) -> u32 {
        value.clamp(i64::from(self.min), i64::from(self.max)) as u32
    }

    #[must_use]
    pub const fn contains(self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// A user-tunable pattern whose fields never leave their [`FieldRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomPattern(Pattern);

impl CustomPattern {
    /// Build from arbitrary values, clamping each field into range.
    #[must_use]
    pub fn clamped(inhale: i64, hold: i64, exhale: i64) -> Self {
        Self(Pattern {
            inhale: PatternField::Inhale.range().clamp(inhale),
            hold: PatternField::Hold.range().clamp(hold),
            exhale: PatternField::Exhale.range().clamp(exhale),
        })
    }

    /// Apply `delta` to one field, clamped to that field's range.
    ///
    /// Returns the new value of the field.
    pub fn adjust(&mut self, field: PatternField, delta: i32) -> u32 {
        let next = field
            .range()
            .clamp(i64::from(self.0.get(field)) + i64::from(delta));
        match field {
            PatternField::Inhale => self.0.inhale = next,
            PatternField::Hold => self.0.hold = next,
            PatternField::Exhale => self.0.exhale = next,
        }
        next
    }

    #[must_use]
    pub const fn pattern(&self) -> Pattern {
        self.0
    }

    #[must_use]
    pub const fn get(&self, field: PatternField) -> u32 {
        self.0.get(field)
    }

    #[must_use]
    pub const fn at_min(&self, field: PatternField) -> bool {
        self.0.get(field) <= field.range().min
    }

    #[must_use]
    pub const fn at_max(&self, field: PatternField) -> bool {
        self.0.get(field) >= field.range().max
    }
}

impl Default for CustomPattern {
    fn default() -> Self {
        Self(Pattern::from_static(4, 4, 4))
    }
}
