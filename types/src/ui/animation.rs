use std::time::Duration;

use crate::Phase;

/// Circle scale while the lungs are empty.
pub const CIRCLE_REST_SCALE: f32 = 1.0;
/// Circle scale while the lungs are full.
pub const CIRCLE_FULL_SCALE: f32 = 1.5;

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub(crate) struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub(crate) fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }
}

/// Eased growth/shrink of the breathing circle across one phase.
///
/// A new animation starts from wherever the previous one currently is, so a
/// stop in the middle of an inhale shrinks from the partial size.
#[derive(Debug, Clone)]
pub struct BreathCircle {
    from: f32,
    to: f32,
    timer: EffectTimer,
}

impl BreathCircle {
    #[must_use]
    pub fn at_rest() -> Self {
        Self {
            from: CIRCLE_REST_SCALE,
            to: CIRCLE_REST_SCALE,
            timer: EffectTimer::new(Duration::ZERO),
        }
    }

    /// Retarget the circle for `phase`, easing over `duration`.
    ///
    /// Hold keeps the full size and Idle snaps back quickly.
    pub fn retarget(&mut self, phase: Phase, duration: Duration, reduced_motion: bool) {
        let to = if phase.is_expanded() {
            CIRCLE_FULL_SCALE
        } else {
            CIRCLE_REST_SCALE
        };
        let duration = if reduced_motion {
            Duration::ZERO
        } else {
            duration
        };
        *self = Self {
            from: self.scale(),
            to,
            timer: EffectTimer::new(duration),
        };
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    /// Current scale factor in `[CIRCLE_REST_SCALE, CIRCLE_FULL_SCALE]`.
    #[must_use]
    pub fn scale(&self) -> f32 {
        let t = ease_in_out(self.timer.progress());
        self.from + (self.to - self.from) * t
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }
}

impl Default for BreathCircle {
    fn default() -> Self {
        Self::at_rest()
    }
}

// Approximates cubic-bezier(0.4, 0.0, 0.2, 1).
fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
