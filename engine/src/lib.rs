//! App orchestration for Lavender.
//!
//! [`App`] owns the breathing engine, the meditation timer, one
//! [`TickDriver`] per timer, the emotion explorer and the view state. It has
//! no TUI dependencies; the `tui` crate reads it to draw and calls its
//! commands on input.
//!
//! Each screen owns a session. Leaving a screen ends its session and disarms
//! its driver, or clears the emotion selection; [`App::shutdown`] ends every
//! session. Dropping the `App` drops the drivers, which disarm themselves.

use std::time::{Duration, Instant};

use chrono::{Datelike, Local};
use tracing::{debug, info};

mod config;
mod driver;
mod settings;

pub use config::{
    AppConfig, BreathingConfig, CONFIG_ENV_VAR, ConfigError, CustomPatternConfig, LavenderConfig,
    MeditationConfig, config_path,
};
pub use driver::{TICK_PERIOD, TickDriver};
pub use settings::{SettingsEntry, SettingsModal, settings_entries, settings_entry_count};

pub use lavender_core::{
    MEDITATION_MINUTES, MeditationEvent, MeditationTimer, SessionEngine, SessionEvent,
    SessionState, format_clock,
};
pub use lavender_types::ui::{Screen, UiOptions, ViewState};
pub use lavender_types::{CustomPattern, Pattern, PatternField, PatternSelection, Phase, Preset};
pub use lavender_types::{Emotion, EmotionExplorer, EmotionFamily};

/// Time for the circle to settle back when a session ends.
const CIRCLE_SETTLE: Duration = Duration::from_millis(800);

#[derive(Debug)]
pub struct App {
    breathing: SessionEngine,
    breath_driver: TickDriver,
    meditation: MeditationTimer,
    meditation_driver: TickDriver,
    settings: Option<SettingsModal>,
    emotions: EmotionExplorer,
    affirmation: &'static str,
    view: ViewState,
    status_message: Option<String>,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: Option<&LavenderConfig>) -> Self {
        let (ui_options, selection, custom, minutes) = match config {
            Some(config) => (
                config.ui_options(),
                config.selection(),
                config.custom_pattern(),
                config.meditation_minutes(),
            ),
            None => (
                UiOptions::default(),
                PatternSelection::default(),
                CustomPattern::default(),
                lavender_core::DEFAULT_MEDITATION_MINUTES,
            ),
        };

        let today = Local::now().date_naive();
        let affirmation = lavender_types::daily_affirmation(today.num_days_from_ce());

        Self {
            breathing: SessionEngine::new(selection, custom),
            breath_driver: TickDriver::new("breathing", TICK_PERIOD),
            meditation: MeditationTimer::new(minutes),
            meditation_driver: TickDriver::new("meditation", TICK_PERIOD),
            settings: None,
            emotions: EmotionExplorer::new(),
            affirmation,
            view: ViewState::new(ui_options),
            status_message: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    pub fn screen(&self) -> Screen {
        self.view.screen
    }

    pub fn breathing(&self) -> &SessionEngine {
        &self.breathing
    }

    pub fn session(&self) -> &SessionState {
        self.breathing.state()
    }

    pub fn meditation(&self) -> &MeditationTimer {
        &self.meditation
    }

    pub fn settings(&self) -> Option<&SettingsModal> {
        self.settings.as_ref()
    }

    pub fn emotions(&self) -> &EmotionExplorer {
        &self.emotions
    }

    /// Today's affirmation, fixed for the life of the app.
    pub fn affirmation(&self) -> &'static str {
        self.affirmation
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Current breathing circle scale for rendering.
    pub fn circle_scale(&self) -> f32 {
        self.view.circle.scale()
    }

    /// Whether any driver is currently armed.
    pub fn is_ticking(&self) -> bool {
        self.breath_driver.is_armed() || self.meditation_driver.is_armed()
    }

    /// Per-frame update: advance animations and apply elapsed driver ticks.
    pub fn tick(&mut self) {
        let elapsed = self.frame_elapsed();
        self.view.circle.advance(elapsed);

        for _ in 0..self.breath_driver.drain() {
            let event = self.breathing.tick();
            self.on_session_event(event);
        }

        for _ in 0..self.meditation_driver.drain() {
            if let Some(MeditationEvent::Finished) = self.meditation.tick() {
                self.meditation_driver.disarm();
                self.set_status("Meditation complete");
            }
        }
    }

    /// Get elapsed time since last frame and update timing.
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;
        elapsed
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// End every session and disarm every driver.
    pub fn shutdown(&mut self) {
        self.stop_breathing();
        self.meditation_driver.disarm();
        self.meditation.reset();
        self.emotions.reset();
    }

    // ========================================================================
    // Screens
    // ========================================================================

    pub fn switch_screen(&mut self) {
        self.show_screen(self.view.screen.next());
    }

    pub fn switch_screen_back(&mut self) {
        self.show_screen(self.view.screen.prev());
    }

    pub fn show_screen(&mut self, screen: Screen) {
        if screen == self.view.screen {
            return;
        }
        match self.view.screen {
            Screen::Breathe => {
                self.close_settings();
                self.stop_breathing();
            }
            Screen::Meditate => {
                self.meditation_driver.disarm();
                self.meditation.reset();
            }
            Screen::Feel => self.emotions.reset(),
        }
        self.clear_status();
        self.view.screen = screen;
        debug!(screen = screen.title(), "Screen changed");
    }

    // ========================================================================
    // Breathing
    // ========================================================================

    /// Begin a session with the selected pattern. Must run inside a tokio runtime.
    pub fn start_breathing(&mut self) {
        let event = self.breathing.start();
        if event.is_none() {
            return;
        }
        self.settings = None;
        self.clear_status();
        self.breath_driver.arm();
        self.on_session_event(event);
    }

    pub fn stop_breathing(&mut self) {
        self.breath_driver.disarm();
        let event = self.breathing.stop();
        self.on_session_event(event);
    }

    pub fn toggle_breathing(&mut self) {
        if self.breathing.is_running() {
            self.stop_breathing();
        } else {
            self.start_breathing();
        }
    }

    pub fn select_preset(&mut self, id: &str) -> bool {
        self.breathing.select_preset(id)
    }

    pub fn select_custom(&mut self) {
        self.breathing.select_custom();
    }

    pub fn adjust_custom(&mut self, field: PatternField, delta: i32) -> u32 {
        self.breathing.adjust_custom(field, delta)
    }

    fn on_session_event(&mut self, event: Option<SessionEvent>) {
        let reduced_motion = self.view.ui_options.reduced_motion;
        match event {
            Some(SessionEvent::Started { pattern }) => {
                self.view.circle.retarget(
                    Phase::Inhale,
                    Duration::from_secs(u64::from(pattern.inhale_secs())),
                    reduced_motion,
                );
            }
            Some(SessionEvent::PhaseChanged {
                to,
                seconds_remaining,
                ..
            }) => {
                self.view.circle.retarget(
                    to,
                    Duration::from_secs(u64::from(seconds_remaining)),
                    reduced_motion,
                );
            }
            Some(SessionEvent::Stopped { .. }) => {
                self.view
                    .circle
                    .retarget(Phase::Idle, CIRCLE_SETTLE, reduced_motion);
            }
            Some(SessionEvent::Countdown { .. }) | None => {}
        }
    }

    // ========================================================================
    // Pattern picker
    // ========================================================================

    /// Open the picker. Only available between sessions.
    pub fn open_settings(&mut self) {
        if self.breathing.is_running() || self.view.screen != Screen::Breathe {
            return;
        }
        self.settings = Some(SettingsModal::new(self.breathing.selection()));
    }

    pub fn close_settings(&mut self) {
        self.settings = None;
    }

    pub fn settings_move_up(&mut self) {
        if let Some(settings) = self.settings.as_mut() {
            settings.move_up();
        }
    }

    pub fn settings_move_down(&mut self) {
        if let Some(settings) = self.settings.as_mut() {
            settings.move_down();
        }
    }

    /// Select the entry under the cursor.
    pub fn settings_activate(&mut self) {
        let Some(entry) = self.settings.as_ref().map(SettingsModal::entry) else {
            return;
        };
        match entry {
            SettingsEntry::Preset(preset) => {
                self.breathing.select_preset(preset.id());
            }
            SettingsEntry::Custom => self.breathing.select_custom(),
        }
    }

    pub fn settings_next_field(&mut self) {
        if let Some(settings) = self.settings.as_mut() {
            settings.next_field();
        }
    }

    pub fn settings_prev_field(&mut self) {
        if let Some(settings) = self.settings.as_mut() {
            settings.prev_field();
        }
    }

    /// Step the focused custom field. Only while the custom entry is selected.
    pub fn settings_adjust(&mut self, delta: i32) {
        if !self.breathing.selection().is_custom() {
            return;
        }
        let Some(field) = self.settings.as_ref().map(SettingsModal::field) else {
            return;
        };
        self.breathing.adjust_custom(field, delta);
    }

    // ========================================================================
    // Emotions
    // ========================================================================

    pub fn emotion_move_up(&mut self) {
        self.emotions.move_up();
    }

    pub fn emotion_move_down(&mut self) {
        self.emotions.move_down();
    }

    pub fn emotion_select(&mut self) {
        self.emotions.select();
        if let Some(emotion) = self.emotions.named() {
            debug!(emotion = emotion.name(), "Emotion named");
        }
    }

    pub fn emotion_back(&mut self) {
        self.emotions.back();
    }

    // ========================================================================
    // Meditation
    // ========================================================================

    /// Start or pause the meditation timer. Must run inside a tokio runtime.
    pub fn toggle_meditation(&mut self) {
        match self.meditation.toggle() {
            Some(MeditationEvent::Started { remaining_secs }) => {
                self.clear_status();
                self.meditation_driver.arm();
                info!(remaining_secs, "Meditation started");
            }
            Some(MeditationEvent::Paused { remaining_secs }) => {
                self.meditation_driver.disarm();
                info!(remaining_secs, "Meditation paused");
            }
            Some(MeditationEvent::Finished) | None => {}
        }
    }

    pub fn reset_meditation(&mut self) {
        self.meditation_driver.disarm();
        self.meditation.reset();
        self.clear_status();
    }

    pub fn set_meditation_minutes(&mut self, minutes: u32) {
        self.meditation_driver.disarm();
        self.meditation.set_duration_minutes(minutes);
        self.clear_status();
    }
}
