//! Breathing phases and the text shown for each.

/// Stage of a breathing cycle. `Idle` is both the initial state and the state
/// a session returns to when stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Inhale,
    Hold,
    Exhale,
}

impl Phase {
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Phase::Idle)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Inhale => "inhale",
            Phase::Hold => "hold",
            Phase::Exhale => "exhale",
        }
    }

    /// Headline instruction for the phase.
    #[must_use]
    pub const fn instruction(self) -> &'static str {
        match self {
            Phase::Idle => "Ready to breathe?",
            Phase::Inhale => "Breathe In",
            Phase::Hold => "Hold",
            Phase::Exhale => "Breathe Out",
        }
    }

    /// Secondary cue. `None` while idle, where the selected pattern's
    /// description is shown instead.
    #[must_use]
    pub const fn cue(self) -> Option<&'static str> {
        match self {
            Phase::Idle => None,
            Phase::Inhale => Some("Fill your lungs slowly..."),
            Phase::Hold => Some("Relax your shoulders..."),
            Phase::Exhale => Some("Let go of tension..."),
        }
    }

    /// Lungs are full (or filling) in this phase.
    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Phase::Inhale | Phase::Hold)
    }
}
