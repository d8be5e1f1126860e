//! Static affirmations, one per day.

pub const AFFIRMATIONS: [&str; 25] = [
    "The best time for new beginnings is now.",
    "Breathe. Let go directly. Remind yourself that this very moment is the only one you know you have for sure.",
    "You don't have to control your thoughts. You just have to stop letting them control you.",
    "Feelings come and go like clouds in a windy sky. Conscious breathing is my anchor.",
    "Peace comes from within. Do not seek it without.",
    "Wherever you go, go with all your heart.",
    "What you think, you become.",
    "Realize deeply that the present moment is all you have.",
    "To understand the immeasurable, the mind must be extraordinarily quiet, still.",
    "Happiness is not something ready made. It comes from your own actions.",
    "Walk as if you are kissing the Earth with your feet.",
    "Smile, breathe and go slowly.",
    "The only way out is through.",
    "Nothing can bring you peace but yourself.",
    "With every breath, I release the anxiety that no longer serves me.",
    "Your calm mind is the ultimate weapon against your challenges.",
    "Nature does not hurry, yet everything is accomplished.",
    "Quiet the mind, and the soul will speak.",
    "Don't believe everything you think.",
    "You are enough just as you are.",
    "Inhale the future, exhale the past.",
    "The present moment is filled with joy and happiness. If you are attentive, you will see it.",
    "Just for today, I will not worry.",
    "Let it be.",
    "Act as if what you do makes a difference. It does.",
];

/// Affirmation for a day number. Consecutive days get consecutive entries,
/// so the line stays fixed for a whole day and changes at midnight.
#[must_use]
pub fn daily_affirmation(day: i32) -> &'static str {
    let len = i32::try_from(AFFIRMATIONS.len()).unwrap_or(i32::MAX);
    let index = usize::try_from(day.rem_euclid(len)).unwrap_or(0);
    AFFIRMATIONS[index]
}
