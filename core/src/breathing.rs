//! The breathing session engine: reducer plus pattern selection.

use lavender_types::{CustomPattern, Pattern, PatternField, PatternSelection, Preset};
use tracing::{debug, info};

use crate::session::{SessionEvent, SessionInput, SessionState};

/// Owns one breathing session and the pattern the next session will use.
///
/// Selection commands only touch the candidate pattern. A running session
/// keeps the pattern it captured at [`SessionEngine::start`].
#[derive(Debug, Clone, Default)]
pub struct SessionEngine {
    state: SessionState,
    selection: PatternSelection,
    custom: CustomPattern,
}

impl SessionEngine {
    #[must_use]
    pub fn new(selection: PatternSelection, custom: CustomPattern) -> Self {
        Self {
            state: SessionState::idle(),
            selection,
            custom,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn selection(&self) -> PatternSelection {
        self.selection
    }

    #[must_use]
    pub fn custom(&self) -> &CustomPattern {
        &self.custom
    }

    /// Pattern `start` would capture right now.
    #[must_use]
    pub fn selected_pattern(&self) -> Pattern {
        self.selection.resolve(&self.custom)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn start(&mut self) -> Option<SessionEvent> {
        let pattern = self.selected_pattern();
        let event = self.apply(SessionInput::Start(pattern));
        if event.is_some() {
            info!(
                pattern = %pattern,
                selection = self.selection.id(),
                "Breathing session started"
            );
        }
        event
    }

    pub fn stop(&mut self) -> Option<SessionEvent> {
        let event = self.apply(SessionInput::Stop);
        if let Some(SessionEvent::Stopped { cycle }) = event {
            info!(cycle, "Breathing session stopped");
        }
        event
    }

    pub fn tick(&mut self) -> Option<SessionEvent> {
        let event = self.apply(SessionInput::Tick);
        if let Some(SessionEvent::PhaseChanged {
            from,
            to,
            seconds_remaining,
            cycle,
        }) = event
        {
            debug!(
                from = from.as_str(),
                to = to.as_str(),
                seconds_remaining,
                cycle,
                "Breathing phase changed"
            );
        }
        event
    }

    /// Select a catalog preset by id. Unknown ids leave the selection as is.
    pub fn select_preset(&mut self, id: &str) -> bool {
        match Preset::find(id) {
            Some(preset) => {
                self.selection = PatternSelection::Preset(preset);
                debug!(id, "Preset selected");
                true
            }
            None => {
                debug!(id, "Ignoring unknown preset id");
                false
            }
        }
    }

    pub fn select_custom(&mut self) {
        self.selection = PatternSelection::Custom;
        debug!(pattern = %self.custom.pattern(), "Custom pattern selected");
    }

    /// Nudge one custom field by `delta`, clamped, and select the custom pattern.
    pub fn adjust_custom(&mut self, field: PatternField, delta: i32) -> u32 {
        let value = self.custom.adjust(field, delta);
        self.selection = PatternSelection::Custom;
        debug!(field = field.label(), value, "Custom pattern adjusted");
        value
    }

    fn apply(&mut self, input: SessionInput) -> Option<SessionEvent> {
        let (next, event) = self.state.reduce(input);
        self.state = next;
        event
    }
}
