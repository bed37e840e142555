//! Dwell and animation durations for the scripted scenes.

use std::time::Duration;

/// Fixed delays that drive the autonomous parts of the demo.
///
/// Defaults mirror the scripted presentation; the engine's config layer may
/// override individual values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneTimings {
    /// Dashboard: upload confirmation shown before advancing.
    pub upload_dwell: Duration,
    /// Pipeline: time spent on each processing step.
    pub pipeline_step: Duration,
    /// Pipeline: completion banner shown before advancing.
    pub pipeline_dwell: Duration,
    /// Student: how long a triggered gesture stays on screen.
    pub gesture_hold: Duration,
    /// Student: period of the simulated AI gesture feed.
    pub ai_gesture_period: Duration,
    /// Fade-in played when any scene is entered.
    pub entry_effect: Duration,
}

impl SceneTimings {
    pub const DEFAULT: SceneTimings = SceneTimings {
        upload_dwell: Duration::from_millis(2000),
        pipeline_step: Duration::from_millis(1500),
        pipeline_dwell: Duration::from_millis(2000),
        gesture_hold: Duration::from_millis(2000),
        ai_gesture_period: Duration::from_millis(4000),
        entry_effect: Duration::from_millis(400),
    };
}

impl Default for SceneTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}
