//! Pattern picker modal state.

use lavender_types::{PRESETS, PatternField, PatternSelection, Preset};

/// One row of the picker: each catalog preset, then the custom rhythm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsEntry {
    Preset(&'static Preset),
    Custom,
}

impl SettingsEntry {
    #[must_use]
    pub fn selection(self) -> PatternSelection {
        match self {
            SettingsEntry::Preset(preset) => PatternSelection::Preset(preset),
            SettingsEntry::Custom => PatternSelection::Custom,
        }
    }
}

pub fn settings_entries() -> impl Iterator<Item = SettingsEntry> {
    PRESETS
        .iter()
        .map(SettingsEntry::Preset)
        .chain(std::iter::once(SettingsEntry::Custom))
}

#[must_use]
pub fn settings_entry_count() -> usize {
    PRESETS.len() + 1
}

/// Cursor state while the picker is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsModal {
    cursor: usize,
    field: PatternField,
}

impl SettingsModal {
    /// Open with the cursor on the current selection.
    #[must_use]
    pub fn new(selection: PatternSelection) -> Self {
        let cursor = settings_entries()
            .position(|entry| entry.selection() == selection)
            .unwrap_or(0);
        Self {
            cursor,
            field: PatternField::Inhale,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn entry(&self) -> SettingsEntry {
        settings_entries()
            .nth(self.cursor)
            .unwrap_or(SettingsEntry::Custom)
    }

    /// Custom field targeted by the steppers.
    #[must_use]
    pub fn field(&self) -> PatternField {
        self.field
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1).min(settings_entry_count() - 1);
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }
}
