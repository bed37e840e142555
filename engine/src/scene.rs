//! Per-scene ephemeral state.
//!
//! An [`ActiveScene`] is built fresh every time a scene is entered and dropped
//! when it is left. Timers live inside the scene state, so leaving a scene
//! cancels everything it armed.

use mayajalam_types::catalog::{GESTURES, Gesture, PIPELINE_STEPS};
use mayajalam_types::{SceneId, SceneTimings};

use crate::timer::{Cue, DwellTimer, TimerEvent, TimerScope};

/// What the sequencer should do after a scene handled an input or timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneOutcome {
    Stay,
    Advance,
    Reset,
}

#[derive(Debug)]
pub enum ActiveScene {
    Splash,
    Dashboard(DashboardScene),
    Pipeline(PipelineScene),
    Student(StudentScene),
    Vr,
    Analytics,
}

impl ActiveScene {
    pub(crate) fn enter(scene: SceneId, scope: &mut TimerScope, timings: &SceneTimings) -> Self {
        match scene {
            SceneId::Splash => ActiveScene::Splash,
            SceneId::Dashboard => ActiveScene::Dashboard(DashboardScene::default()),
            SceneId::Pipeline => ActiveScene::Pipeline(PipelineScene::start(scope, timings)),
            SceneId::Student => ActiveScene::Student(StudentScene::default()),
            SceneId::Vr => ActiveScene::Vr,
            SceneId::Analytics => ActiveScene::Analytics,
        }
    }

    #[must_use]
    pub fn id(&self) -> SceneId {
        match self {
            ActiveScene::Splash => SceneId::Splash,
            ActiveScene::Dashboard(_) => SceneId::Dashboard,
            ActiveScene::Pipeline(_) => SceneId::Pipeline,
            ActiveScene::Student(_) => SceneId::Student,
            ActiveScene::Vr => SceneId::Vr,
            ActiveScene::Analytics => SceneId::Analytics,
        }
    }

    /// The scene's primary "proceed" control.
    pub(crate) fn primary(&mut self, scope: &mut TimerScope, timings: &SceneTimings) -> SceneOutcome {
        match self {
            ActiveScene::Dashboard(dashboard) => {
                dashboard.upload(scope, timings);
                SceneOutcome::Stay
            }
            ActiveScene::Analytics => SceneOutcome::Reset,
            ActiveScene::Splash
            | ActiveScene::Pipeline(_)
            | ActiveScene::Student(_)
            | ActiveScene::Vr => SceneOutcome::Advance,
        }
    }

    pub(crate) fn on_timer(
        &mut self,
        event: &TimerEvent,
        scope: &mut TimerScope,
        timings: &SceneTimings,
    ) -> SceneOutcome {
        match self {
            ActiveScene::Dashboard(dashboard) => dashboard.on_timer(event),
            ActiveScene::Pipeline(pipeline) => pipeline.on_timer(event, scope, timings),
            ActiveScene::Student(student) => {
                student.on_timer(event, scope, timings);
                SceneOutcome::Stay
            }
            ActiveScene::Splash | ActiveScene::Vr | ActiveScene::Analytics => SceneOutcome::Stay,
        }
    }
}

// ============================================================================
// Teacher dashboard
// ============================================================================

#[derive(Debug, Default)]
pub struct DashboardScene {
    uploaded: bool,
    dwell: Option<DwellTimer>,
}

impl DashboardScene {
    #[must_use]
    pub fn is_uploaded(&self) -> bool {
        self.uploaded
    }

    /// Marks the lesson uploaded and arms the dwell timer once.
    fn upload(&mut self, scope: &mut TimerScope, timings: &SceneTimings) {
        if self.uploaded {
            return;
        }
        self.uploaded = true;
        self.dwell = Some(scope.once(Cue::Dwell, timings.upload_dwell));
        tracing::info!("Lesson upload simulated");
    }

    fn on_timer(&mut self, event: &TimerEvent) -> SceneOutcome {
        match self.dwell.take() {
            Some(dwell) if dwell.owns(event) => SceneOutcome::Advance,
            other => {
                self.dwell = other;
                SceneOutcome::Stay
            }
        }
    }
}

// ============================================================================
// Processing pipeline
// ============================================================================

#[derive(Debug)]
pub struct PipelineScene {
    /// Index of the running step; equals the step count once all are done.
    active_step: usize,
    timer: DwellTimer,
}

impl PipelineScene {
    fn start(scope: &mut TimerScope, timings: &SceneTimings) -> Self {
        Self {
            active_step: 0,
            timer: scope.once(Cue::PipelineStep, timings.pipeline_step),
        }
    }

    #[must_use]
    pub fn active_step(&self) -> usize {
        self.active_step
    }

    #[must_use]
    pub fn is_step_complete(&self, index: usize) -> bool {
        index < self.active_step
    }

    #[must_use]
    pub fn is_step_active(&self, index: usize) -> bool {
        index == self.active_step
    }

    #[must_use]
    pub fn completed_steps(&self) -> usize {
        self.active_step.min(PIPELINE_STEPS.len())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.active_step >= PIPELINE_STEPS.len()
    }

    /// Progress of the running step, `None` once every step is done.
    #[must_use]
    pub fn step_progress(&self) -> Option<f32> {
        (!self.is_finished()).then(|| self.timer.progress())
    }

    fn on_timer(
        &mut self,
        event: &TimerEvent,
        scope: &mut TimerScope,
        timings: &SceneTimings,
    ) -> SceneOutcome {
        if !self.timer.owns(event) {
            return SceneOutcome::Stay;
        }

        match event.cue {
            Cue::PipelineStep => {
                if let Some(step) = PIPELINE_STEPS.get(self.active_step) {
                    tracing::debug!(step = step.id, "Pipeline step complete");
                }
                self.active_step += 1;
                self.timer = if self.is_finished() {
                    scope.once(Cue::Dwell, timings.pipeline_dwell)
                } else {
                    scope.once(Cue::PipelineStep, timings.pipeline_step)
                };
                SceneOutcome::Stay
            }
            Cue::Dwell => SceneOutcome::Advance,
            Cue::GestureExpired | Cue::AiGesture => SceneOutcome::Stay,
        }
    }
}

// ============================================================================
// Student experience
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentMode {
    #[default]
    Visual,
    Hearing,
}

/// Text shown in the caption panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caption {
    Gesture(&'static Gesture),
    Narration,
    Idle,
}

#[derive(Debug, Default)]
pub struct StudentScene {
    mode: StudentMode,
    playing: bool,
    gesture: Option<usize>,
    gesture_timer: Option<DwellTimer>,
    ai_mode: bool,
    ai_feed: Option<DwellTimer>,
}

impl StudentScene {
    #[must_use]
    pub fn mode(&self) -> StudentMode {
        self.mode
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn is_ai_mode(&self) -> bool {
        self.ai_mode
    }

    /// Whether the simulated AI gesture feed is running.
    #[must_use]
    pub fn ai_feed_active(&self) -> bool {
        self.ai_feed.is_some()
    }

    #[must_use]
    pub fn gesture_index(&self) -> Option<usize> {
        self.gesture
    }

    #[must_use]
    pub fn gesture(&self) -> Option<&'static Gesture> {
        self.gesture.and_then(|index| GESTURES.get(index))
    }

    /// Avatar and waveform animate while narrating or signing.
    #[must_use]
    pub fn is_signing(&self) -> bool {
        self.playing || self.gesture.is_some()
    }

    #[must_use]
    pub fn caption(&self) -> Caption {
        match self.gesture() {
            Some(gesture) => Caption::Gesture(gesture),
            None if self.playing => Caption::Narration,
            None => Caption::Idle,
        }
    }

    pub(crate) fn set_mode(
        &mut self,
        mode: StudentMode,
        scope: &mut TimerScope,
        timings: &SceneTimings,
    ) {
        self.mode = mode;
        self.sync_ai_feed(scope, timings);
    }

    pub(crate) fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    pub(crate) fn toggle_ai_mode(&mut self, scope: &mut TimerScope, timings: &SceneTimings) {
        self.ai_mode = !self.ai_mode;
        self.sync_ai_feed(scope, timings);
    }

    /// Shows gesture `index` for the hold time. Re-triggering replaces the
    /// pending clear.
    pub(crate) fn trigger_gesture(
        &mut self,
        index: usize,
        scope: &mut TimerScope,
        timings: &SceneTimings,
    ) -> bool {
        if index >= GESTURES.len() {
            return false;
        }
        self.gesture = Some(index);
        self.gesture_timer = Some(scope.once(Cue::GestureExpired, timings.gesture_hold));
        true
    }

    /// The AI feed runs only while AI mode is on in hearing mode.
    fn sync_ai_feed(&mut self, scope: &mut TimerScope, timings: &SceneTimings) {
        let wanted = self.ai_mode && self.mode == StudentMode::Hearing;
        match (wanted, self.ai_feed.is_some()) {
            (true, false) => {
                self.ai_feed = Some(scope.every(Cue::AiGesture, timings.ai_gesture_period));
            }
            (false, true) => self.ai_feed = None,
            _ => {}
        }
    }

    fn on_timer(&mut self, event: &TimerEvent, scope: &mut TimerScope, timings: &SceneTimings) {
        match event.cue {
            Cue::GestureExpired
                if self.gesture_timer.as_ref().is_some_and(|t| t.owns(event)) =>
            {
                self.gesture = None;
                self.gesture_timer = None;
            }
            Cue::AiGesture if self.ai_feed.as_ref().is_some_and(|t| t.owns(event)) => {
                let index = pick_gesture();
                tracing::debug!(gesture = GESTURES[index].id, "AI gesture");
                self.trigger_gesture(index, scope, timings);
            }
            _ => {}
        }
    }
}

fn pick_gesture() -> usize {
    let scaled = rand::random::<f64>() * GESTURES.len() as f64;
    (scaled as usize).min(GESTURES.len() - 1)
}
