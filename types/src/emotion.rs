//! Emotion catalog and the labelling flow over it.
//!
//! Six families, each with a handful of named feelings. [`EmotionExplorer`]
//! walks the two levels: pick a family, then a feeling within it.

use crate::NonEmptyStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmotionFamily {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
}

impl EmotionFamily {
    pub const ALL: [EmotionFamily; 6] = [
        EmotionFamily::Joy,
        EmotionFamily::Sadness,
        EmotionFamily::Anger,
        EmotionFamily::Fear,
        EmotionFamily::Surprise,
        EmotionFamily::Disgust,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EmotionFamily::Joy => "Joy",
            EmotionFamily::Sadness => "Sadness",
            EmotionFamily::Anger => "Anger",
            EmotionFamily::Fear => "Fear",
            EmotionFamily::Surprise => "Surprise",
            EmotionFamily::Disgust => "Disgust",
        }
    }

    #[must_use]
    pub const fn emotions(self) -> &'static [Emotion] {
        match self {
            EmotionFamily::Joy => JOY,
            EmotionFamily::Sadness => SADNESS,
            EmotionFamily::Anger => ANGER,
            EmotionFamily::Fear => FEAR,
            EmotionFamily::Surprise => SURPRISE,
            EmotionFamily::Disgust => DISGUST,
        }
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|family| *family == self)
            .unwrap_or(0)
    }
}

/// A named feeling with a one-sentence definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Emotion {
    name: NonEmptyStaticStr,
    definition: NonEmptyStaticStr,
}

impl Emotion {
    const fn new(name: &'static str, definition: &'static str) -> Self {
        Self {
            name: NonEmptyStaticStr::new(name),
            definition: NonEmptyStaticStr::new(definition),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name.as_str()
    }

    #[must_use]
    pub const fn definition(&self) -> &'static str {
        self.definition.as_str()
    }

    /// Line shown once the feeling has been named.
    #[must_use]
    pub fn acknowledgement(&self) -> String {
        format!(
            "It's okay to feel {}. Acknowledging this emotion allows it to pass through you like a wave.",
            self.name().to_lowercase()
        )
    }
}

const JOY: &[Emotion] = &[
    Emotion::new("Excited", "Feeling very enthusiastic and eager."),
    Emotion::new(
        "Grateful",
        "Feeling or showing an appreciation of kindness.",
    ),
    Emotion::new("Peaceful", "Free from disturbance; tranquil."),
    Emotion::new(
        "Proud",
        "Feeling deep pleasure or satisfaction as a result of one's own achievements.",
    ),
    Emotion::new("Optimistic", "Hopeful and confident about the future."),
    Emotion::new("Playful", "Fond of games and amusement; lighthearted."),
];

const SADNESS: &[Emotion] = &[
    Emotion::new("Lonely", "Sad because one has no friends or company."),
    Emotion::new(
        "Depressed",
        "In a state of general unhappiness or despondency.",
    ),
    Emotion::new(
        "Guilty",
        "A feeling of having done wrong or failed in an obligation.",
    ),
    Emotion::new(
        "Disappointed",
        "Sad or displeased because someone or something has failed to fulfill one's hopes.",
    ),
    Emotion::new("Hurt", "Distress or offense caused by another person."),
];

const ANGER: &[Emotion] = &[
    Emotion::new(
        "Frustrated",
        "Feeling or expressing distress and annoyance.",
    ),
    Emotion::new("Annoyed", "Slightly angry; irritated."),
    Emotion::new("Defensive", "Very anxious to challenge or avoid criticism."),
    Emotion::new("Furious", "Extremely angry."),
    Emotion::new(
        "Jealous",
        "Feeling or showing envy of someone or their achievements.",
    ),
];

const FEAR: &[Emotion] = &[
    Emotion::new("Anxious", "Experiencing worry, unease, or nervousness."),
    Emotion::new(
        "Insecure",
        "Not confident or assured; uncertain and anxious.",
    ),
    Emotion::new("Overwhelmed", "Buried or drowned beneath a huge mass."),
    Emotion::new("Scared", "Fearful; frightened."),
];

const SURPRISE: &[Emotion] = &[
    Emotion::new("Confused", "Unable to think clearly; bewildered."),
    Emotion::new("Amazed", "Greatly surprised; astonished."),
    Emotion::new("Shocked", "Caused to feel surprised and upset."),
];

const DISGUST: &[Emotion] = &[
    Emotion::new(
        "Disapproving",
        "Possessing or displaying a lack of approval.",
    ),
    Emotion::new(
        "Disappointed",
        "Displeased because someone has failed to fulfill one's hopes.",
    ),
    Emotion::new("Awful", "Very bad or unpleasant."),
];

/// Two-level selection over the catalog.
///
/// With no family chosen the cursor moves over [`EmotionFamily::ALL`];
/// afterwards it moves over that family's feelings. Choosing a family always
/// clears the named feeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmotionExplorer {
    family: Option<EmotionFamily>,
    named: Option<usize>,
    cursor: usize,
}

impl EmotionExplorer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn family(&self) -> Option<EmotionFamily> {
        self.family
    }

    /// The feeling the user settled on, if any.
    #[must_use]
    pub fn named(&self) -> Option<&'static Emotion> {
        let family = self.family?;
        family.emotions().get(self.named?)
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Rows the cursor currently moves over.
    #[must_use]
    pub fn row_count(&self) -> usize {
        match self.family {
            Some(family) => family.emotions().len(),
            None => EmotionFamily::ALL.len(),
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1).min(self.row_count() - 1);
    }

    pub fn choose_family(&mut self, family: EmotionFamily) {
        self.family = Some(family);
        self.named = None;
        self.cursor = 0;
    }

    /// Choose the row under the cursor.
    pub fn select(&mut self) {
        match self.family {
            None => {
                if let Some(&family) = EmotionFamily::ALL.get(self.cursor) {
                    self.choose_family(family);
                }
            }
            Some(family) => {
                if self.cursor < family.emotions().len() {
                    self.named = Some(self.cursor);
                }
            }
        }
    }

    /// Return to the family list with the cursor on the family just left.
    /// No-op at the top level.
    pub fn back(&mut self) {
        if let Some(family) = self.family.take() {
            self.named = None;
            self.cursor = family.index();
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{Emotion, EmotionExplorer, EmotionFamily};

    #[test]
    fn every_family_has_feelings() {
        for family in EmotionFamily::ALL {
            assert!(!family.emotions().is_empty(), "{} is empty", family.name());
        }
        assert_eq!(EmotionFamily::Joy.emotions().len(), 6);
        assert_eq!(EmotionFamily::Surprise.emotions().len(), 3);
    }

    #[test]
    fn selecting_family_then_feeling() {
        let mut explorer = EmotionExplorer::new();
        explorer.move_down();
        explorer.select();
        assert_eq!(explorer.family(), Some(EmotionFamily::Sadness));
        assert_eq!(explorer.cursor(), 0);
        assert!(explorer.named().is_none());

        explorer.move_down();
        explorer.select();
        let named = explorer.named().expect("feeling selected");
        assert_eq!(named.name(), "Depressed");
        assert_eq!(
            named.definition(),
            "In a state of general unhappiness or despondency."
        );
    }

    #[test]
    fn choosing_a_family_clears_the_feeling() {
        let mut explorer = EmotionExplorer::new();
        explorer.choose_family(EmotionFamily::Fear);
        explorer.select();
        assert_eq!(explorer.named().map(Emotion::name), Some("Anxious"));

        explorer.choose_family(EmotionFamily::Anger);
        assert!(explorer.named().is_none());
        assert_eq!(explorer.family(), Some(EmotionFamily::Anger));
    }

    #[test]
    fn cursor_stays_within_the_current_list() {
        let mut explorer = EmotionExplorer::new();
        for _ in 0..20 {
            explorer.move_down();
        }
        assert_eq!(explorer.cursor(), EmotionFamily::ALL.len() - 1);
        explorer.select();
        assert_eq!(explorer.family(), Some(EmotionFamily::Disgust));
        for _ in 0..20 {
            explorer.move_down();
        }
        assert_eq!(explorer.cursor(), 2);
        explorer.move_up();
        explorer.move_up();
        explorer.move_up();
        assert_eq!(explorer.cursor(), 0);
    }

    #[test]
    fn back_returns_to_the_family_row() {
        let mut explorer = EmotionExplorer::new();
        explorer.choose_family(EmotionFamily::Surprise);
        explorer.move_down();
        explorer.select();
        explorer.back();
        assert_eq!(explorer.family(), None);
        assert!(explorer.named().is_none());
        assert_eq!(explorer.cursor(), 4);

        explorer.back();
        assert_eq!(explorer.cursor(), 4);
    }

    #[test]
    fn reset_clears_family_and_feeling() {
        let mut explorer = EmotionExplorer::new();
        explorer.choose_family(EmotionFamily::Joy);
        explorer.move_down();
        explorer.select();
        explorer.reset();
        assert_eq!(explorer, EmotionExplorer::default());
        assert!(explorer.named().is_none());
    }

    #[test]
    fn acknowledgement_lowercases_the_feeling() {
        let mut explorer = EmotionExplorer::new();
        explorer.choose_family(EmotionFamily::Fear);
        explorer.move_down();
        explorer.move_down();
        explorer.select();
        let line = explorer.named().map(Emotion::acknowledgement);
        let line = line.expect("feeling selected");
        assert!(line.starts_with("It's okay to feel overwhelmed. "));
        assert!(line.ends_with("pass through you like a wave."));
    }
}
