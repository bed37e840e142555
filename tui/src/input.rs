//! Input handling for the Mayajalam TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use mayajalam_engine::{ActiveScene, App, SceneId, StudentMode};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

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

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close first so a backpressured send in the input thread unblocks.
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
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
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

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Primary,
    Advance,
    Reset,
    Jump(SceneId),
    StudentMode(StudentMode),
    ToggleNarration,
    ToggleAiMode,
    Gesture(usize),
    Quit,
}

/// Maps a key press to an action for the scene currently on screen.
///
/// Student controls only resolve while the student scene is active, and
/// manual gestures only in hearing mode.
#[must_use]
pub fn key_action(scene: &ActiveScene, key: KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(KeyAction::Quit),
            _ => None,
        };
    }

    let global = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::Primary),
        KeyCode::Char('n') | KeyCode::Right | KeyCode::Tab => Some(KeyAction::Advance),
        KeyCode::Char('r') => Some(KeyAction::Reset),
        KeyCode::F(n @ 1..=4) => SceneId::JUMP_TARGETS
            .get(usize::from(n - 1))
            .copied()
            .map(KeyAction::Jump),
        _ => None,
    };
    if global.is_some() {
        return global;
    }

    let ActiveScene::Student(student) = scene else {
        return None;
    };
    match key.code {
        KeyCode::Char('v') => Some(KeyAction::StudentMode(StudentMode::Visual)),
        KeyCode::Char('h') => Some(KeyAction::StudentMode(StudentMode::Hearing)),
        KeyCode::Char('p') => Some(KeyAction::ToggleNarration),
        KeyCode::Char('a') => Some(KeyAction::ToggleAiMode),
        KeyCode::Char(c @ '1'..='5') if student.mode() == StudentMode::Hearing => {
            Some(KeyAction::Gesture(usize::from(c as u8 - b'1')))
        }
        _ => None,
    }
}

pub fn apply_action(app: &mut App, action: KeyAction) {
    debug!(?action, scene = %app.current_scene(), "Key action");
    match action {
        KeyAction::Primary => app.primary_action(),
        KeyAction::Advance => app.advance(),
        KeyAction::Reset => app.reset(),
        KeyAction::Jump(target) => app.jump(target),
        KeyAction::StudentMode(mode) => app.set_student_mode(mode),
        KeyAction::ToggleNarration => app.toggle_narration(),
        KeyAction::ToggleAiMode => app.toggle_ai_mode(),
        KeyAction::Gesture(index) => {
            app.trigger_gesture(index);
        }
        KeyAction::Quit => app.request_quit(),
    }
}

/// Drains pending terminal events into `app`. Returns `true` once quit was requested.
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

        if let Event::Key(key) = ev
            && let Some(action) = key_action(app.scene(), key)
        {
            apply_action(app, action);
            if app.quit_requested() {
                return Ok(true);
            }
        }

        processed += 1;
    }
    Ok(app.quit_requested())
}
