//! Breathing session state and its pure reducer.
//!
//! [`SessionState::reduce`] is the whole state machine:
//!
//! ```text
//! Idle --Start--> Inhale --expire--> Hold --expire--> Exhale --expire--> Inhale (cycle += 1)
//!                    \______________(hold == 0)______/
//! any --Stop--> Idle
//! ```
//!
//! The reducer owns no clock. Each [`SessionInput::Tick`] is one elapsed
//! second supplied by an external driver.

use lavender_types::{Pattern, Phase};

/// Inputs accepted by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    /// Begin a session with the given pattern. Ignored unless idle.
    Start(Pattern),
    /// End the session. Ignored when already idle.
    Stop,
    /// One second has elapsed.
    Tick,
}

/// Observable outcome of a reducer step, for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Started {
        pattern: Pattern,
    },
    /// Countdown moved within the current phase.
    Countdown {
        phase: Phase,
        seconds_remaining: u32,
    },
    /// A phase expired and the next one began.
    PhaseChanged {
        from: Phase,
        to: Phase,
        seconds_remaining: u32,
        cycle: u32,
    },
    Stopped {
        /// Cycle that was in progress when the session ended.
        cycle: u32,
    },
}

/// Snapshot of a breathing session.
///
/// Invariants:
/// - `phase == Idle` iff `cycle_count == 0` iff `active_pattern.is_none()`.
/// - While running, `seconds_remaining >= 1`.
/// - `Hold` is only ever entered when the active pattern has a non-zero hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    phase: Phase,
    seconds_remaining: u32,
    cycle_count: u32,
    active_pattern: Option<Pattern>,
}

impl SessionState {
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            seconds_remaining: 0,
            cycle_count: 0,
            active_pattern: None,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    #[must_use]
    pub const fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    /// Pattern captured when the session started; `None` while idle.
    #[must_use]
    pub const fn active_pattern(&self) -> Option<Pattern> {
        self.active_pattern
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        !self.phase.is_idle()
    }

    /// Advance the state machine by one input.
    #[must_use]
    pub fn reduce(self, input: SessionInput) -> (Self, Option<SessionEvent>) {
        match input {
            SessionInput::Start(pattern) => self.start(pattern),
            SessionInput::Stop => self.stop(),
            SessionInput::Tick => self.tick(),
        }
    }

    fn start(self, pattern: Pattern) -> (Self, Option<SessionEvent>) {
        if self.is_running() {
            return (self, None);
        }
        let next = Self {
            phase: Phase::Inhale,
            seconds_remaining: pattern.inhale_secs(),
            cycle_count: 1,
            active_pattern: Some(pattern),
        };
        (next, Some(SessionEvent::Started { pattern }))
    }

    fn stop(self) -> (Self, Option<SessionEvent>) {
        if !self.is_running() {
            return (Self::idle(), None);
        }
        (
            Self::idle(),
            Some(SessionEvent::Stopped {
                cycle: self.cycle_count,
            }),
        )
    }

    fn tick(self) -> (Self, Option<SessionEvent>) {
        let Some(pattern) = self.active_pattern else {
            return (self, None);
        };
        if self.phase.is_idle() {
            return (self, None);
        }

        // The tick that consumes the last second of a phase also enters the next.
        if self.seconds_remaining > 1 {
            let seconds_remaining = self.seconds_remaining - 1;
            let next = Self {
                seconds_remaining,
                ..self
            };
            return (
                next,
                Some(SessionEvent::Countdown {
                    phase: self.phase,
                    seconds_remaining,
                }),
            );
        }

        let (phase, seconds_remaining, cycle_count) = match self.phase {
            Phase::Inhale if pattern.has_hold() => {
                (Phase::Hold, pattern.hold_secs(), self.cycle_count)
            }
            Phase::Inhale | Phase::Hold => {
                (Phase::Exhale, pattern.exhale_secs(), self.cycle_count)
            }
            Phase::Exhale => (
                Phase::Inhale,
                pattern.inhale_secs(),
                self.cycle_count.saturating_add(1),
            ),
            Phase::Idle => return (self, None),
        };

        let next = Self {
            phase,
            seconds_remaining,
            cycle_count,
            active_pattern: self.active_pattern,
        };
        (
            next,
            Some(SessionEvent::PhaseChanged {
                from: self.phase,
                to: phase,
                seconds_remaining,
                cycle: cycle_count,
            }),
        )
    }
}
