//! Breathing sessions driven through the public engine API.

use lavender_core::{SessionEngine, SessionEvent, SessionInput, SessionState};
use lavender_types::{CustomPattern, Pattern, PatternField, PatternSelection, Phase, Preset};

fn snapshot(s: &SessionState) -> (Phase, u32, u32) {
    (s.phase(), s.seconds_remaining(), s.cycle_count())
}

fn run(pattern: Pattern, ticks: usize) -> Vec<(Phase, u32, u32)> {
    let (mut state, _) = SessionState::idle().reduce(SessionInput::Start(pattern));
    let mut trace = vec![snapshot(&state)];
    for _ in 0..ticks {
        (state, _) = state.reduce(SessionInput::Tick);
        trace.push(snapshot(&state));
    }
    trace
}

#[test]
fn box_breathing_walks_every_phase() {
    let trace = run(Pattern::from_static(4, 4, 4), 12);
    assert_eq!(trace[0], (Phase::Inhale, 4, 1));
    assert_eq!(trace[3], (Phase::Inhale, 1, 1));
    assert_eq!(trace[4], (Phase::Hold, 4, 1));
    assert_eq!(trace[8], (Phase::Exhale, 4, 1));
    assert_eq!(trace[11], (Phase::Exhale, 1, 1));
    assert_eq!(trace[12], (Phase::Inhale, 4, 2));
}

#[test]
fn zero_hold_goes_straight_to_exhale() {
    let trace = run(Pattern::from_static(4, 0, 8), 40);
    assert!(trace.iter().all(|(phase, _, _)| *phase != Phase::Hold));
    assert_eq!(trace[4], (Phase::Exhale, 8, 1));
    assert_eq!(trace[12], (Phase::Inhale, 4, 2));
}

#[test]
fn running_countdown_is_never_zero() {
    for preset in &lavender_types::PRESETS {
        let trace = run(preset.pattern(), 3 * preset.pattern().cycle_secs() as usize);
        assert!(
            trace.iter().all(|(_, remaining, _)| *remaining >= 1),
            "{} reached zero",
            preset.id()
        );
    }
}

#[test]
fn stop_returns_to_idle_from_anywhere() {
    for ticks in 0..16 {
        let start = SessionInput::Start(Pattern::from_static(4, 7, 8));
        let (mut state, _) = SessionState::idle().reduce(start);
        for _ in 0..ticks {
            (state, _) = state.reduce(SessionInput::Tick);
        }
        let (state, event) = state.reduce(SessionInput::Stop);
        assert_eq!(state, SessionState::idle());
        assert!(matches!(event, Some(SessionEvent::Stopped { .. })));
    }
}

#[test]
fn engine_keeps_the_pattern_it_started_with() {
    let mut engine = SessionEngine::default();
    engine.start();
    let started = engine.state().active_pattern();
    assert_eq!(started, Some(Pattern::from_static(4, 4, 7)));

    assert!(engine.select_preset("box"));
    engine.adjust_custom(PatternField::Hold, 20);
    for _ in 0..10 {
        engine.tick();
    }
    assert_eq!(engine.state().active_pattern(), started);

    engine.stop();
    engine.start();
    assert_eq!(
        engine.state().active_pattern(),
        Some(Pattern::from_static(4, 24, 4))
    );
}

#[test]
fn selecting_a_preset_by_id() {
    let mut engine = SessionEngine::new(PatternSelection::default(), CustomPattern::default());
    assert_eq!(engine.selection().id(), "4-4-7");
    assert!(engine.select_preset("balance"));
    let balance = Preset::find("balance").expect("balance preset");
    assert_eq!(engine.selected_pattern(), balance.pattern());
    assert!(!engine.select_preset("does-not-exist"));
    assert_eq!(engine.selection().id(), "balance");
}
