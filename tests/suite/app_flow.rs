//! End-to-end `App` flows with paused tokio time standing in for the clock.

use std::time::Duration;

use lavender_engine::{App, Phase, Screen};

async fn advance(app: &mut App, millis: u64) {
    tokio::time::sleep(Duration::from_millis(millis)).await;
    app.tick();
}

#[tokio::test(start_paused = true)]
async fn relax_breathing_session_over_two_cycles() {
    let mut app = App::new(None);
    assert!(app.select_preset("4-7-8"));
    app.start_breathing();
    assert_eq!(app.session().phase(), Phase::Inhale);
    assert_eq!(app.session().seconds_remaining(), 4);

    advance(&mut app, 4_100).await;
    assert_eq!(app.session().phase(), Phase::Hold);
    assert_eq!(app.session().seconds_remaining(), 7);

    advance(&mut app, 7_000).await;
    assert_eq!(app.session().phase(), Phase::Exhale);
    assert_eq!(app.session().seconds_remaining(), 8);

    advance(&mut app, 8_000).await;
    assert_eq!(app.session().phase(), Phase::Inhale);
    assert_eq!(app.session().cycle_count(), 2);

    app.toggle_breathing();
    assert_eq!(app.session().phase(), Phase::Idle);
    assert_eq!(app.session().cycle_count(), 0);

    // Ticks that were queued before the stop are gone with the driver.
    advance(&mut app, 5_000).await;
    assert_eq!(app.session().phase(), Phase::Idle);
}

#[tokio::test(start_paused = true)]
async fn meditation_pause_and_resume() {
    let mut app = App::new(None);
    app.switch_screen();
    assert_eq!(app.screen(), Screen::Meditate);

    app.set_meditation_minutes(5);
    app.toggle_meditation();
    advance(&mut app, 10_500).await;
    assert_eq!(app.meditation().remaining_secs(), 290);

    app.toggle_meditation();
    assert!(!app.is_ticking());
    advance(&mut app, 30_000).await;
    assert_eq!(app.meditation().remaining_secs(), 290);

    app.toggle_meditation();
    advance(&mut app, 1_500).await;
    assert_eq!(app.meditation().remaining_secs(), 289);
}

#[tokio::test]
async fn shutdown_stops_everything() {
    let mut app = App::new(None);
    app.start_breathing();
    app.shutdown();
    assert!(!app.session().is_running());
    assert!(!app.is_ticking());
}
