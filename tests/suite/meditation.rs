use lavender_core::{MEDITATION_MINUTES, MeditationEvent, MeditationTimer, format_clock};

#[test]
fn five_minute_sit_runs_to_completion() {
    let mut timer = MeditationTimer::new(MEDITATION_MINUTES[0]);
    assert_eq!(format_clock(timer.remaining_secs()), "05:00");

    let started = timer.toggle();
    assert!(matches!(started, Some(MeditationEvent::Started { .. })));
    let mut finished = 0;
    for _ in 0..(5 * 60 + 10) {
        if let Some(MeditationEvent::Finished) = timer.tick() {
            finished += 1;
        }
    }
    assert_eq!(finished, 1);
    assert!(timer.is_finished());
    assert!(!timer.is_running());
    assert_eq!(format_clock(timer.remaining_secs()), "00:00");
    assert!((timer.progress() - 1.0).abs() < f64::EPSILON);

    // Finished timers need a reset before they run again.
    assert_eq!(timer.toggle(), None);
    timer.reset();
    assert!(timer.toggle().is_some());
}

#[test]
fn pause_holds_the_remaining_time() {
    let mut timer = MeditationTimer::default();
    timer.toggle();
    for _ in 0..90 {
        timer.tick();
    }
    assert_eq!(
        timer.toggle(),
        Some(MeditationEvent::Paused {
            remaining_secs: 510
        })
    );
    for _ in 0..30 {
        timer.tick();
    }
    assert_eq!(format_clock(timer.remaining_secs()), "08:30");
}

#[test]
fn changing_duration_rewinds_and_pauses() {
    let mut timer = MeditationTimer::default();
    timer.toggle();
    timer.tick();
    timer.set_duration_minutes(MEDITATION_MINUTES[3]);
    assert!(!timer.is_running());
    assert_eq!(timer.remaining_secs(), 30 * 60);
    assert!(timer.progress().abs() < f64::EPSILON);
}
