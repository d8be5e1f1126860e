//! View state for rendering.
//!
//! Groups state that only affects how things are drawn, separating it from
//! the session engines that drive the app.

use std::time::Instant;

use super::BreathCircle;

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

/// Top-level screens. Leaving a screen ends whatever it was running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Breathe,
    Meditate,
    Feel,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Breathe, Screen::Meditate, Screen::Feel];

    /// Next tab, wrapping.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Screen::Breathe => Screen::Meditate,
            Screen::Meditate => Screen::Feel,
            Screen::Feel => Screen::Breathe,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Screen::Breathe => Screen::Feel,
            Screen::Meditate => Screen::Breathe,
            Screen::Feel => Screen::Meditate,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Screen::Breathe => "Breathe",
            Screen::Meditate => "Meditate",
            Screen::Feel => "Feel",
        }
    }
}

#[derive(Debug)]
pub struct ViewState {
    pub screen: Screen,
    /// UI options (theme, motion, glyphs).
    pub ui_options: UiOptions,
    pub circle: BreathCircle,
    /// Timestamp of last frame (for animation timing).
    pub last_frame: Instant,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            screen: Screen::default(),
            ui_options: UiOptions::default(),
            circle: BreathCircle::at_rest(),
            last_frame: Instant::now(),
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Screen;

    #[test]
    fn next_and_prev_cycle_through_every_screen() {
        let mut screen = Screen::default();
        for expected in [Screen::Meditate, Screen::Feel, Screen::Breathe] {
            screen = screen.next();
            assert_eq!(screen, expected);
        }
        for screen in Screen::ALL {
            assert_eq!(screen.next().prev(), screen);
        }
    }
}
