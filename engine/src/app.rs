//! Top-level application state driven by the frame loop.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use mayajalam_types::SceneId;
use mayajalam_types::SceneTimings;
use mayajalam_types::ui::{AnimPhase, EntryEffect, UiOptions};

use crate::config::AppSettings;
use crate::scene::{ActiveScene, SceneOutcome, StudentMode};
use crate::sequencer::{ActivationId, SceneSequencer};
use crate::timer::{TimerEvent, TimerScope};

/// Timer events handled per tick; the rest wait for the next frame.
const MAX_TIMER_EVENTS_PER_TICK: usize = 32;
const UI_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Why the current scene changed. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cause {
    Advance,
    Timer,
    Reset,
    Jump,
}

/// Owns the sequencer, the live scene and its timers.
///
/// Every scene change goes through [`App::enter`], which rebinds the timer
/// scope to the new activation and drops the previous scene together with
/// its timers.
pub struct App {
    sequencer: SceneSequencer,
    scene: ActiveScene,
    scope: TimerScope,
    timer_tx: mpsc::UnboundedSender<TimerEvent>,
    timer_rx: mpsc::UnboundedReceiver<TimerEvent>,
    timings: SceneTimings,
    ui_options: UiOptions,
    entry_effect: Option<EntryEffect>,
    last_frame: Instant,
    last_ui_tick: Instant,
    tick: usize,
    quit_requested: bool,
}

impl App {
    /// Must be called from within a tokio runtime; scenes arm timers on entry.
    #[must_use]
    pub fn new(settings: AppSettings) -> Self {
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let sequencer = SceneSequencer::new();
        let mut scope = TimerScope::new(timer_tx.clone(), sequencer.activation());
        let scene = ActiveScene::enter(sequencer.current(), &mut scope, &settings.timings);
        let now = Instant::now();

        let mut app = Self {
            sequencer,
            scene,
            scope,
            timer_tx,
            timer_rx,
            timings: settings.timings,
            ui_options: settings.ui_options,
            entry_effect: None,
            last_frame: now,
            last_ui_tick: now,
            tick: 0,
            quit_requested: false,
        };
        app.start_entry_effect();

        if let Some(start) = settings.start_scene
            && start != SceneId::Splash
        {
            app.jump(start);
        }
        app
    }

    #[must_use]
    pub fn current_scene(&self) -> SceneId {
        self.sequencer.current()
    }

    #[must_use]
    pub fn scene(&self) -> &ActiveScene {
        &self.scene
    }

    #[must_use]
    pub fn activation(&self) -> ActivationId {
        self.sequencer.activation()
    }

    #[must_use]
    pub fn timings(&self) -> &SceneTimings {
        &self.timings
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn entry_effect(&self) -> Option<&EntryEffect> {
        self.entry_effect.as_ref()
    }

    /// Coarse animation counter (~10Hz), independent of render FPS.
    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    // ------------------------------------------------------------------------
    // Sequencer operations
    // ------------------------------------------------------------------------

    pub fn advance(&mut self) {
        self.transition(Cause::Advance, SceneSequencer::advance);
    }

    pub fn reset(&mut self) {
        self.transition(Cause::Reset, SceneSequencer::reset);
    }

    pub fn jump(&mut self, target: SceneId) {
        self.transition(Cause::Jump, |seq| seq.jump(target));
    }

    /// The current scene's primary "proceed" control.
    pub fn primary_action(&mut self) {
        let outcome = self.scene.primary(&mut self.scope, &self.timings);
        self.apply_outcome(outcome, Cause::Advance);
    }

    // ------------------------------------------------------------------------
    // Student scene controls (no-ops elsewhere)
    // ------------------------------------------------------------------------

    pub fn set_student_mode(&mut self, mode: StudentMode) {
        if let ActiveScene::Student(student) = &mut self.scene {
            student.set_mode(mode, &mut self.scope, &self.timings);
        }
    }

    pub fn toggle_narration(&mut self) {
        if let ActiveScene::Student(student) = &mut self.scene {
            student.toggle_playing();
        }
    }

    pub fn toggle_ai_mode(&mut self) {
        if let ActiveScene::Student(student) = &mut self.scene {
            student.toggle_ai_mode(&mut self.scope, &self.timings);
        }
    }

    pub fn trigger_gesture(&mut self, index: usize) -> bool {
        match &mut self.scene {
            ActiveScene::Student(student) => {
                student.trigger_gesture(index, &mut self.scope, &self.timings)
            }
            _ => false,
        }
    }

    // ------------------------------------------------------------------------
    // Frame loop
    // ------------------------------------------------------------------------

    /// Advances animations and delivers fired timers to the current scene.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if let Some(effect) = &mut self.entry_effect {
            effect.advance(delta);
            if effect.phase() == AnimPhase::Completed {
                self.entry_effect = None;
            }
        }

        if now.duration_since(self.last_ui_tick) >= UI_TICK_INTERVAL {
            self.last_ui_tick = now;
            self.tick = self.tick.wrapping_add(1);
        }

        self.poll_timers();
    }

    fn poll_timers(&mut self) {
        for _ in 0..MAX_TIMER_EVENTS_PER_TICK {
            let Ok(event) = self.timer_rx.try_recv() else {
                break;
            };
            self.dispatch_timer(event);
        }
    }

    fn dispatch_timer(&mut self, event: TimerEvent) {
        if event.token.activation() != self.sequencer.activation() {
            tracing::debug!(
                cue = ?event.cue,
                event_activation = event.token.activation().get(),
                current_activation = self.sequencer.activation().get(),
                "Dropping stale timer event"
            );
            return;
        }
        let outcome = self.scene.on_timer(&event, &mut self.scope, &self.timings);
        self.apply_outcome(outcome, Cause::Timer);
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn apply_outcome(&mut self, outcome: SceneOutcome, cause: Cause) {
        match outcome {
            SceneOutcome::Stay => {}
            SceneOutcome::Advance => self.transition(cause, SceneSequencer::advance),
            SceneOutcome::Reset => self.transition(Cause::Reset, SceneSequencer::reset),
        }
    }

    fn transition<F>(&mut self, cause: Cause, step: F)
    where
        F: FnOnce(&mut SceneSequencer) -> SceneId,
    {
        let from = self.sequencer.current();
        let to = step(&mut self.sequencer);
        tracing::info!(%from, %to, ?cause, "Scene transition");
        self.enter(to);
    }

    fn enter(&mut self, scene: SceneId) {
        // Rebind first so nothing armed below carries the old activation.
        self.scope = TimerScope::new(self.timer_tx.clone(), self.sequencer.activation());
        self.scene = ActiveScene::enter(scene, &mut self.scope, &self.timings);
        self.start_entry_effect();
    }

    fn start_entry_effect(&mut self) {
        self.entry_effect = if self.ui_options.reduced_motion {
            None
        } else {
            Some(EntryEffect::for_scene(
                self.sequencer.current(),
                self.timings.entry_effect,
            ))
        };
    }

    #[cfg(test)]
    pub(crate) fn inject_timer_event(&mut self, event: TimerEvent) {
        self.dispatch_timer(event);
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::config::AppSettings;
    use crate::scene::{ActiveScene, StudentMode};
    use crate::timer::{Cue, TimerScope};
    use mayajalam_types::SceneId;
    use mayajalam_types::ui::UiOptions;
    use std::time::Duration;

    fn app() -> App {
        App::new(AppSettings::default())
    }

    async fn wait(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn starts_at_splash() {
        assert_eq!(app().current_scene(), SceneId::Splash);
    }

    #[tokio::test(start_paused = true)]
    async fn start_scene_setting_jumps() {
        let app = App::new(AppSettings {
            start_scene: Some(SceneId::Student),
            ..AppSettings::default()
        });
        assert_eq!(app.current_scene(), SceneId::Student);
    }

    #[tokio::test(start_paused = true)]
    async fn splash_primary_advances() {
        let mut app = app();
        app.primary_action();
        assert_eq!(app.current_scene(), SceneId::Dashboard);
    }

    #[tokio::test(start_paused = true)]
    async fn upload_advances_after_dwell() {
        let mut app = app();
        app.jump(SceneId::Dashboard);
        app.primary_action();
        assert_eq!(app.current_scene(), SceneId::Dashboard);

        wait(1900).await;
        app.tick();
        assert_eq!(app.current_scene(), SceneId::Dashboard);

        wait(200).await;
        app.tick();
        assert_eq!(app.current_scene(), SceneId::Pipeline);
    }

    #[tokio::test(start_paused = true)]
    async fn dashboard_without_upload_never_advances() {
        let mut app = app();
        app.jump(SceneId::Dashboard);
        wait(10_000).await;
        app.tick();
        assert_eq!(app.current_scene(), SceneId::Dashboard);
    }

    #[tokio::test(start_paused = true)]
    async fn jump_cancels_pending_dwell() {
        let mut app = app();
        app.jump(SceneId::Dashboard);
        app.primary_action();

        wait(500).await;
        app.jump(SceneId::Student);

        wait(5000).await;
        app.tick();
        assert_eq!(app.current_scene(), SceneId::Student);
    }

    #[tokio::test(start_paused = true)]
    async fn jump_to_same_scene_restarts_it() {
        let mut app = app();
        app.jump(SceneId::Dashboard);
        app.primary_action();

        wait(1500).await;
        app.jump(SceneId::Dashboard);
        let ActiveScene::Dashboard(dashboard) = app.scene() else {
            panic!("expected dashboard");
        };
        assert!(!dashboard.is_uploaded(), "re-entry resets scene state");

        wait(5000).await;
        app.tick();
        assert_eq!(app.current_scene(), SceneId::Dashboard);
    }

    #[tokio::test(start_paused = true)]
    async fn pipeline_runs_steps_then_advances() {
        let mut app = app();
        app.jump(SceneId::Pipeline);

        for expected in 1..=4 {
            wait(1600).await;
            app.tick();
            let ActiveScene::Pipeline(pipeline) = app.scene() else {
                panic!("expected pipeline");
            };
            assert_eq!(pipeline.completed_steps(), expected);
        }

        let ActiveScene::Pipeline(pipeline) = app.scene() else {
            panic!("expected pipeline");
        };
        assert!(pipeline.is_finished());
        assert!(pipeline.step_progress().is_none());

        wait(2100).await;
        app.tick();
        assert_eq!(app.current_scene(), SceneId::Student);
    }

    #[tokio::test(start_paused = true)]
    async fn leaving_pipeline_early_stops_its_timers() {
        let mut app = app();
        app.jump(SceneId::Pipeline);
        wait(1600).await;
        app.tick();

        app.jump(SceneId::Analytics);
        wait(20_000).await;
        app.tick();
        assert_eq!(app.current_scene(), SceneId::Analytics);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_event_is_dropped() {
        let mut app = app();
        app.jump(SceneId::Dashboard);

        // Arm a dwell under the current activation, then move on.
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let mut old_scope = TimerScope::new(tx, app.activation());
        let old = old_scope.once(Cue::Dwell, Duration::from_secs(1));
        let stale = crate::timer::TimerEvent {
            token: old.token(),
            cue: Cue::Dwell,
        };

        app.jump(SceneId::Vr);
        app.inject_timer_event(stale);
        assert_eq!(app.current_scene(), SceneId::Vr);
    }

    #[tokio::test(start_paused = true)]
    async fn analytics_primary_resets() {
        let mut app = app();
        app.jump(SceneId::Analytics);
        app.primary_action();
        assert_eq!(app.current_scene(), SceneId::Splash);
    }

    #[tokio::test(start_paused = true)]
    async fn full_cycle_with_manual_advance() {
        let mut app = app();
        let mut visited = Vec::new();
        for _ in 0..6 {
            app.advance();
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

    #[tokio::test(start_paused = true)]
    async fn gesture_clears_after_hold() {
        let mut app = app();
        app.jump(SceneId::Student);
        app.set_student_mode(StudentMode::Hearing);
        assert!(app.trigger_gesture(0));

        wait(1000).await;
        app.tick();
        // Re-trigger replaces the pending clear.
        assert!(app.trigger_gesture(1));

        wait(1500).await;
        app.tick();
        let ActiveScene::Student(student) = app.scene() else {
            panic!("expected student");
        };
        assert_eq!(student.gesture_index(), Some(1));

        wait(600).await;
        app.tick();
        let ActiveScene::Student(student) = app.scene() else {
            panic!("expected student");
        };
        assert_eq!(student.gesture_index(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn ai_feed_shows_gestures_in_hearing_mode() {
        let mut app = app();
        app.jump(SceneId::Student);
        app.set_student_mode(StudentMode::Hearing);
        app.toggle_ai_mode();

        wait(4100).await;
        app.tick();
        let ActiveScene::Student(student) = app.scene() else {
            panic!("expected student");
        };
        assert!(student.gesture().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn student_state_resets_on_reentry() {
        let mut app = app();
        app.jump(SceneId::Student);
        app.set_student_mode(StudentMode::Hearing);
        app.toggle_narration();
        app.toggle_ai_mode();

        app.advance();
        app.jump(SceneId::Student);
        let ActiveScene::Student(student) = app.scene() else {
            panic!("expected student");
        };
        assert_eq!(student.mode(), StudentMode::Visual);
        assert!(!student.is_playing());
        assert!(!student.is_ai_mode());
        assert!(!student.ai_feed_active());
    }

    #[tokio::test(start_paused = true)]
    async fn student_controls_ignored_elsewhere() {
        let mut app = app();
        assert!(!app.trigger_gesture(0));
        app.toggle_ai_mode();
        app.set_student_mode(StudentMode::Hearing);
        assert_eq!(app.current_scene(), SceneId::Splash);
    }

    #[tokio::test(start_paused = true)]
    async fn reduced_motion_skips_entry_effect() {
        let mut app = App::new(AppSettings {
            ui_options: UiOptions {
                reduced_motion: true,
                ..UiOptions::default()
            },
            ..AppSettings::default()
        });
        assert!(app.entry_effect().is_none());
        app.advance();
        assert!(app.entry_effect().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn entry_effect_runs_on_scene_change() {
        let mut app = app();
        app.advance();
        assert!(app.entry_effect().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn quit_request_is_sticky() {
        let mut app = app();
        assert!(!app.quit_requested());
        app.request_quit();
        app.tick();
        assert!(app.quit_requested());
    }
}
