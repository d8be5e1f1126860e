//! Color theme and glyphs for Lavender TUI.
//!
//! A soft lavender palette by default with an optional high-contrast override.
//! Each breathing phase and each emotion family has its own accent.

use ratatui::style::{Color, Modifier, Style};

use lavender_types::ui::UiOptions;
use lavender_types::{EmotionFamily, Phase};

/// Lavender palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(24, 22, 34);
    pub const BG_PANEL: Color = Color::Rgb(34, 31, 48);
    pub const BG_POPUP: Color = Color::Rgb(46, 42, 64);
    pub const BG_BORDER: Color = Color::Rgb(88, 82, 118);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(232, 228, 244);
    pub const TEXT_SECONDARY: Color = Color::Rgb(196, 190, 216);
    pub const TEXT_MUTED: Color = Color::Rgb(128, 122, 150);
    pub const TEXT_DISABLED: Color = Color::Rgb(84, 80, 100);

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(167, 139, 250); // violet-400
    pub const PRIMARY_DIM: Color = Color::Rgb(124, 105, 186);

    // === Phase accents ===
    pub const INHALE: Color = Color::Rgb(56, 189, 248); // sky-400
    pub const HOLD: Color = Color::Rgb(167, 139, 250); // violet-400
    pub const EXHALE: Color = Color::Rgb(232, 121, 249); // fuchsia-400
    pub const IDLE: Color = Color::Rgb(148, 163, 184); // slate-400

    // === Emotion families ===
    pub const JOY: Color = Color::Rgb(250, 204, 21); // yellow-400
    pub const SADNESS: Color = Color::Rgb(96, 165, 250); // blue-400
    pub const ANGER: Color = Color::Rgb(248, 113, 113); // red-400
    pub const FEAR: Color = Color::Rgb(192, 132, 252); // purple-400
    pub const SURPRISE: Color = Color::Rgb(251, 146, 60); // orange-400
    pub const DISGUST: Color = Color::Rgb(74, 222, 128); // green-400

    // === Semantic ===
    pub const SUCCESS: Color = Color::Rgb(134, 239, 172);
    pub const WARNING: Color = Color::Rgb(253, 224, 71);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_popup: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub inhale: Color,
    pub hold: Color,
    pub exhale: Color,
    pub idle: Color,
    pub joy: Color,
    pub sadness: Color,
    pub anger: Color,
    pub fear: Color,
    pub surprise: Color,
    pub disgust: Color,
    pub success: Color,
    pub warning: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_popup: colors::BG_POPUP,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            primary: colors::PRIMARY,
            primary_dim: colors::PRIMARY_DIM,
            inhale: colors::INHALE,
            hold: colors::HOLD,
            exhale: colors::EXHALE,
            idle: colors::IDLE,
            joy: colors::JOY,
            sadness: colors::SADNESS,
            anger: colors::ANGER,
            fear: colors::FEAR,
            surprise: colors::SURPRISE,
            disgust: colors::DISGUST,
            success: colors::SUCCESS,
            warning: colors::WARNING,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_popup: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            text_disabled: Color::DarkGray,
            primary: Color::White,
            primary_dim: Color::Gray,
            inhale: Color::Cyan,
            hold: Color::Magenta,
            exhale: Color::LightMagenta,
            idle: Color::White,
            joy: Color::Yellow,
            sadness: Color::LightBlue,
            anger: Color::LightRed,
            fear: Color::Magenta,
            surprise: Color::LightYellow,
            disgust: Color::Green,
            success: Color::Green,
            warning: Color::Yellow,
        }
    }

    /// Accent for the breathing circle and instruction in `phase`.
    #[must_use]
    pub fn phase(&self, phase: Phase) -> Color {
        match phase {
            Phase::Idle => self.idle,
            Phase::Inhale => self.inhale,
            Phase::Hold => self.hold,
            Phase::Exhale => self.exhale,
        }
    }

    #[must_use]
    pub fn family(&self, family: EmotionFamily) -> Color {
        match family {
            EmotionFamily::Joy => self.joy,
            EmotionFamily::Sadness => self.sadness,
            EmotionFamily::Anger => self.anger,
            EmotionFamily::Fear => self.fear,
            EmotionFamily::Surprise => self.surprise,
            EmotionFamily::Disgust => self.disgust,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub selected: &'static str,
    pub unselected: &'static str,
    pub current: &'static str,
    pub step_down: &'static str,
    pub step_up: &'static str,
    pub play: &'static str,
    pub pause: &'static str,
    pub settings: &'static str,
    pub separator: &'static str,
    pub custom: &'static str,
    pub keys_vertical: &'static str,
    pub keys_horizontal: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            selected: ">",
            unselected: " ",
            current: "*",
            step_down: "v",
            step_up: "^",
            play: ">",
            pause: "||",
            settings: "*",
            separator: "|",
            custom: "@",
            keys_vertical: "j/k",
            keys_horizontal: "h/l",
        }
    } else {
        Glyphs {
            selected: "▸",
            unselected: " ",
            current: "●",
            step_down: "▾",
            step_up: "▴",
            play: "▶",
            pause: "⏸",
            settings: "⚙",
            separator: "│",
            custom: "◇",
            keys_vertical: "↑↓",
            keys_horizontal: "←→",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn tab_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn tab_inactive(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn selected_row(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.bg_border)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn disabled(palette: &Palette) -> Style {
        Style::default().fg(palette.text_disabled)
    }
}
