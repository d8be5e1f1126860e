//! Countdown timer for unguided meditation.

use tracing::info;

/// Durations offered by the UI, in minutes.
pub const MEDITATION_MINUTES: [u32; 4] = [5, 10, 20, 30];
pub const DEFAULT_MEDITATION_MINUTES: u32 = 10;
pub const MAX_MEDITATION_MINUTES: u32 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeditationEvent {
    Started { remaining_secs: u32 },
    Paused { remaining_secs: u32 },
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeditationTimer {
    duration_secs: u32,
    remaining_secs: u32,
    running: bool,
}

impl MeditationTimer {
    /// Timer of `minutes`, clamped to `1..=MAX_MEDITATION_MINUTES`.
    #[must_use]
    pub fn new(minutes: u32) -> Self {
        let duration_secs = minutes.clamp(1, MAX_MEDITATION_MINUTES) * 60;
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            running: false,
        }
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_secs / 60
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Fraction of the duration already elapsed.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration_secs == 0 {
            return 1.0;
        }
        let elapsed = self.duration_secs.saturating_sub(self.remaining_secs);
        (f64::from(elapsed) / f64::from(self.duration_secs)).clamp(0.0, 1.0)
    }

    /// Start or pause. A finished timer stays put until reset.
    pub fn toggle(&mut self) -> Option<MeditationEvent> {
        if self.running {
            self.running = false;
            return Some(MeditationEvent::Paused {
                remaining_secs: self.remaining_secs,
            });
        }
        if self.is_finished() {
            return None;
        }
        self.running = true;
        Some(MeditationEvent::Started {
            remaining_secs: self.remaining_secs,
        })
    }

    /// Stop and rewind to the full duration.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_secs = self.duration_secs;
    }

    /// Change the duration. Always pauses and rewinds.
    pub fn set_duration_minutes(&mut self, minutes: u32) {
        *self = Self::new(minutes);
    }

    pub fn tick(&mut self) -> Option<MeditationEvent> {
        if !self.running || self.remaining_secs == 0 {
            return None;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            self.running = false;
            info!(minutes = self.duration_minutes(), "Meditation finished");
            return Some(MeditationEvent::Finished);
        }
        None
    }
}

impl Default for MeditationTimer {
    fn default() -> Self {
        Self::new(DEFAULT_MEDITATION_MINUTES)
    }
}

/// `MM:SS`, minutes unbounded.
#[must_use]
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::{MeditationEvent, MeditationTimer, format_clock};

    #[test]
    fn format_pads_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(600), "10:00");
        assert_eq!(format_clock(7_200), "120:00");
    }

    #[test]
    fn paused_timer_ignores_ticks() {
        let mut timer = MeditationTimer::new(5);
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining_secs(), 300);
    }

    #[test]
    fn runs_down_and_finishes() {
        let mut timer = MeditationTimer::new(1);
        timer.toggle();
        for _ in 0..59 {
            assert_eq!(timer.tick(), None);
        }
        assert_eq!(timer.tick(), Some(MeditationEvent::Finished));
        assert!(!timer.is_running());
        assert!(timer.is_finished());
        assert_eq!(timer.tick(), None);
        assert!((timer.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn finished_timer_does_not_restart_until_reset() {
        let mut timer = MeditationTimer::new(1);
        timer.toggle();
        for _ in 0..60 {
            timer.tick();
        }
        assert_eq!(timer.toggle(), None);
        timer.reset();
        assert_eq!(timer.remaining_secs(), 60);
        let started = timer.toggle();
        assert!(matches!(started, Some(MeditationEvent::Started { .. })));
    }

    #[test]
    fn changing_duration_pauses_and_rewinds() {
        let mut timer = MeditationTimer::default();
        timer.toggle();
        timer.tick();
        timer.set_duration_minutes(20);
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_secs(), 1_200);
        assert_eq!(timer.duration_minutes(), 20);
    }

    #[test]
    fn minutes_are_clamped() {
        assert_eq!(MeditationTimer::new(0).duration_minutes(), 1);
        assert_eq!(MeditationTimer::new(10_000).duration_minutes(), 180);
    }

    #[test]
    fn toggle_pauses_running_timer() {
        let mut timer = MeditationTimer::new(5);
        timer.toggle();
        timer.tick();
        assert_eq!(
            timer.toggle(),
            Some(MeditationEvent::Paused {
                remaining_secs: 299
            })
        );
    }
}
