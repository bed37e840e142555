//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mayajalam_engine::{App, AppSettings, SceneId, UiOptions};
use mayajalam_tui::{apply_action, key_action};

/// Settings with deterministic rendering: ASCII glyphs, no motion.
pub fn demo_settings() -> AppSettings {
    AppSettings {
        ui_options: UiOptions {
            ascii_only: true,
            high_contrast: false,
            reduced_motion: true,
        },
        ..AppSettings::default()
    }
}

/// Feeds a key press through the same path the terminal input uses.
///
/// Returns whether the key was bound in the current scene.
pub fn press(app: &mut App, code: KeyCode) -> bool {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    match key_action(app.scene(), key) {
        Some(action) => {
            apply_action(app, action);
            true
        }
        None => false,
    }
}

/// Sleeps on the (paused) tokio clock and lets the app collect fired timers.
pub async fn wait(app: &mut App, ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    app.tick();
}

/// Records the scene after every step, starting with the current one.
pub struct Trail {
    scenes: Vec<SceneId>,
}

impl Trail {
    pub fn start(app: &App) -> Self {
        Self {
            scenes: vec![app.current_scene()],
        }
    }

    pub fn record(&mut self, app: &App) {
        let scene = app.current_scene();
        if self.scenes.last() != Some(&scene) {
            self.scenes.push(scene);
        }
    }

    pub fn render(&self) -> String {
        self.scenes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}
