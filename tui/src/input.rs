//! Input handling for Lavender TUI.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tracing::debug;

use lavender_engine::{App, MEDITATION_MINUTES, Screen};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and queues them for the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(&stop2, &tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close first so a sender blocked on capacity wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: &AtomicBool, tx: &mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued input and apply it. Returns `true` when the app should exit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };
        processed += 1;

        if apply_event(app, ev) {
            return Ok(true);
        }
    }
    Ok(app.should_quit())
}

pub(crate) fn apply_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }

            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.request_quit();
                return true;
            }

            if app.settings().is_some() {
                handle_settings_keys(app, key);
            } else {
                match app.screen() {
                    Screen::Breathe => handle_breathe_keys(app, key),
                    Screen::Meditate => handle_meditate_keys(app, key),
                    Screen::Feel => handle_feel_keys(app, key),
                }
            }
            app.should_quit()
        }
        Event::Resize(width, height) => {
            debug!(width, height, "Terminal resized");
            app.should_quit()
        }
        _ => app.should_quit(),
    }
}

fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            app.request_quit();
            true
        }
        KeyCode::Tab => {
            app.switch_screen();
            true
        }
        KeyCode::BackTab => {
            app.switch_screen_back();
            true
        }
        _ => false,
    }
}

fn handle_breathe_keys(app: &mut App, key: KeyEvent) {
    if handle_global_keys(app, key) {
        return;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_breathing(),
        KeyCode::Char('s') => app.open_settings(),
        _ => {}
    }
}

fn handle_settings_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Esc | KeyCode::Char('s') => app.close_settings(),
        KeyCode::Up | KeyCode::Char('k') => app.settings_move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.settings_move_down(),
        KeyCode::Enter | KeyCode::Char(' ') => app.settings_activate(),
        KeyCode::Left | KeyCode::Char('h') => app.settings_prev_field(),
        KeyCode::Right | KeyCode::Char('l') => app.settings_next_field(),
        KeyCode::Char('-' | '_') => app.settings_adjust(-1),
        KeyCode::Char('+' | '=') => app.settings_adjust(1),
        _ => {}
    }
}

fn handle_meditate_keys(app: &mut App, key: KeyEvent) {
    if handle_global_keys(app, key) {
        return;
    }
    match key.code {
        KeyCode::Char(' ') => app.toggle_meditation(),
        KeyCode::Char('r') => app.reset_meditation(),
        KeyCode::Char(c @ '1'..='4') => {
            let index = (c as usize) - ('1' as usize);
            if let Some(&minutes) = MEDITATION_MINUTES.get(index) {
                app.set_meditation_minutes(minutes);
            }
        }
        _ => {}
    }
}

fn handle_feel_keys(app: &mut App, key: KeyEvent) {
    if handle_global_keys(app, key) {
        return;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.emotion_move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.emotion_move_down(),
        KeyCode::Enter | KeyCode::Char(' ') => app.emotion_select(),
        KeyCode::Esc | KeyCode::Backspace => app.emotion_back(),
        _ => {}
    }
}
