//! Core domain logic for Lavender.
//!
//! Deterministic state machines with no clock of their own: a breathing
//! session engine and a meditation countdown. Callers feed them one tick per
//! elapsed second.

mod breathing;
mod meditation;
mod session;

pub use breathing::SessionEngine;
pub use meditation::{
    DEFAULT_MEDITATION_MINUTES, MAX_MEDITATION_MINUTES, MEDITATION_MINUTES, MeditationEvent,
    MeditationTimer, format_clock,
};
pub use session::{SessionEvent, SessionInput, SessionState};
