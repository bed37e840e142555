//! Key bindings resolved against live scenes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mayajalam_engine::{App, SceneId};
use mayajalam_tui::{KeyAction, key_action};

use crate::common::{demo_settings, press};

#[tokio::test]
async fn advance_wraps_after_analytics() {
    let mut app = App::new(demo_settings());
    let mut visited = Vec::new();
    for _ in 0..SceneId::ALL.len() {
        press(&mut app, KeyCode::Char('n'));
        visited.push(app.current_scene());
    }
    assert_eq!(
        visited,
        [
            SceneId::Dashboard,
            SceneId::Pipeline,
            SceneId::Student,
            SceneId::Vr,
            SceneId::Analytics,
            SceneId::Splash,
        ]
    );
}

#[tokio::test]
async fn function_keys_reach_each_jump_target() {
    let mut app = App::new(demo_settings());
    for (index, target) in SceneId::JUMP_TARGETS.into_iter().enumerate() {
        let f = u8::try_from(index + 1).unwrap();
        assert!(press(&mut app, KeyCode::F(f)));
        assert_eq!(app.current_scene(), target);
    }
}

#[tokio::test]
async fn primary_on_analytics_restarts() {
    let mut app = App::new(demo_settings());
    press(&mut app, KeyCode::F(4));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_scene(), SceneId::Splash);
}

#[tokio::test]
async fn primary_on_dashboard_only_uploads() {
    let mut app = App::new(demo_settings());
    press(&mut app, KeyCode::F(2));
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_scene(), SceneId::Dashboard);
}

#[tokio::test]
async fn gesture_digits_are_unbound_in_visual_mode() {
    let mut app = App::new(demo_settings());
    press(&mut app, KeyCode::F(3));
    assert!(!press(&mut app, KeyCode::Char('1')));
    assert!(press(&mut app, KeyCode::Char('h')));
    assert!(press(&mut app, KeyCode::Char('1')));
}

#[tokio::test]
async fn student_keys_are_unbound_elsewhere() {
    let mut app = App::new(demo_settings());
    for code in ['v', 'h', 'p', 'a', '1'] {
        assert!(!press(&mut app, KeyCode::Char(code)));
    }
    assert_eq!(app.current_scene(), SceneId::Splash);
}

#[tokio::test]
async fn quit_keys() {
    let app = App::new(demo_settings());
    for key in [
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
        KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        assert_eq!(key_action(app.scene(), key), Some(KeyAction::Quit));
    }
}
