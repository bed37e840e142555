//! End-to-end walkthroughs driven through key bindings and the paused tokio clock.

use crossterm::event::KeyCode;
use mayajalam_engine::{ActiveScene, App, SceneId, catalog};

use crate::common::{Trail, demo_settings, press, wait};

/// Upload dwell plus slack so the test never wakes on the timer deadline.
const DWELL_WAIT_MS: u64 = 2100;
const STEP_WAIT_MS: u64 = 1600;

fn student(app: &App) -> &mayajalam_engine::StudentScene {
    match app.scene() {
        ActiveScene::Student(student) => student,
        other => panic!("expected student scene, got {:?}", other.id()),
    }
}

#[tokio::test(start_paused = true)]
async fn scripted_walkthrough_visits_every_scene_once() {
    let mut app = App::new(demo_settings());
    let mut trail = Trail::start(&app);

    press(&mut app, KeyCode::Enter); // enter experience
    trail.record(&app);

    press(&mut app, KeyCode::Enter); // upload lesson
    assert_eq!(app.current_scene(), SceneId::Dashboard);
    wait(&mut app, DWELL_WAIT_MS).await;
    trail.record(&app);

    for _ in 0..catalog::PIPELINE_STEPS.len() {
        wait(&mut app, STEP_WAIT_MS).await;
        trail.record(&app);
    }
    assert_eq!(app.current_scene(), SceneId::Pipeline);
    wait(&mut app, DWELL_WAIT_MS).await;
    trail.record(&app);

    press(&mut app, KeyCode::Enter); // next scene
    trail.record(&app);
    press(&mut app, KeyCode::Enter); // exit VR
    trail.record(&app);
    press(&mut app, KeyCode::Enter); // restart experience
    trail.record(&app);

    insta::assert_snapshot!(
        trail.render(),
        @"splash -> dashboard -> pipeline -> student -> vr -> analytics -> splash"
    );
}

#[tokio::test(start_paused = true)]
async fn leaving_dashboard_cancels_upload_dwell() {
    let mut app = App::new(demo_settings());
    app.jump(SceneId::Dashboard);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.current_scene(), SceneId::Pipeline);

    wait(&mut app, DWELL_WAIT_MS).await;
    assert_eq!(
        app.current_scene(),
        SceneId::Pipeline,
        "the dashboard dwell must not advance the pipeline"
    );
    match app.scene() {
        ActiveScene::Pipeline(pipeline) => assert_eq!(pipeline.active_step(), 1),
        other => panic!("expected pipeline, got {:?}", other.id()),
    }
}

#[tokio::test(start_paused = true)]
async fn jumping_away_from_pipeline_silences_its_timers() {
    let mut app = App::new(demo_settings());
    app.jump(SceneId::Pipeline);
    press(&mut app, KeyCode::F(3));
    assert_eq!(app.current_scene(), SceneId::Student);

    wait(&mut app, 10_000).await;
    assert_eq!(app.current_scene(), SceneId::Student);
}

#[tokio::test(start_paused = true)]
async fn reset_returns_to_splash_from_every_scene() {
    let mut app = App::new(demo_settings());
    for scene in SceneId::ALL {
        app.jump(scene);
        assert_eq!(app.current_scene(), scene);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.current_scene(), SceneId::Splash);
    }
}

#[tokio::test(start_paused = true)]
async fn reset_during_dwell_drops_the_pending_advance() {
    let mut app = App::new(demo_settings());
    app.jump(SceneId::Dashboard);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('r'));

    wait(&mut app, DWELL_WAIT_MS).await;
    assert_eq!(app.current_scene(), SceneId::Splash);
}

#[tokio::test(start_paused = true)]
async fn manual_gesture_clears_after_hold() {
    let mut app = App::new(demo_settings());
    app.jump(SceneId::Student);
    press(&mut app, KeyCode::Char('h'));
    assert!(press(&mut app, KeyCode::Char('3')));
    assert_eq!(
        student(&app).gesture().map(|g| g.id),
        Some(catalog::GESTURES[2].id)
    );

    wait(&mut app, 1000).await;
    assert!(press(&mut app, KeyCode::Char('1')));
    wait(&mut app, 1500).await;
    assert_eq!(
        student(&app).gesture().map(|g| g.id),
        Some("hello"),
        "re-triggering replaces the pending clear"
    );

    wait(&mut app, 600).await;
    assert_eq!(student(&app).gesture(), None);
}

#[tokio::test(start_paused = true)]
async fn ai_feed_runs_only_in_hearing_mode() {
    let mut app = App::new(demo_settings());
    app.jump(SceneId::Student);
    press(&mut app, KeyCode::Char('a'));
    assert!(student(&app).is_ai_mode());
    assert!(!student(&app).ai_feed_active());

    wait(&mut app, 4100).await;
    assert_eq!(student(&app).gesture(), None);

    press(&mut app, KeyCode::Char('h'));
    assert!(student(&app).ai_feed_active());
    wait(&mut app, 4100).await;
    assert!(student(&app).gesture().is_some());

    press(&mut app, KeyCode::Char('v'));
    assert!(!student(&app).ai_feed_active());
}

#[tokio::test(start_paused = true)]
async fn narration_toggle_drives_caption() {
    let mut app = App::new(demo_settings());
    app.jump(SceneId::Student);
    assert!(!student(&app).is_playing());

    press(&mut app, KeyCode::Char('p'));
    assert!(student(&app).is_playing());
    assert_eq!(student(&app).caption(), mayajalam_engine::Caption::Narration);

    press(&mut app, KeyCode::Char('p'));
    assert_eq!(student(&app).caption(), mayajalam_engine::Caption::Idle);
}
