//! Core engine for Mayajalam - scene sequencing and orchestration.
//!
//! This crate contains the App state machine without TUI dependencies.
//!
//! ```text
//! App ── SceneSequencer   (current scene, activation id)
//!     ├─ ActiveScene      (per-scene state, owns its DwellTimers)
//!     └─ TimerScope ──► tokio task ──► mpsc ──► App::tick()
//! ```

mod app;
mod config;
mod scene;
mod sequencer;
mod timer;

pub use app::App;
pub use config::{AppConfig, AppSettings, ConfigError, MayajalamConfig, TimingConfig, config_path};
pub use scene::{
    ActiveScene, Caption, DashboardScene, PipelineScene, SceneOutcome, StudentMode, StudentScene,
};
pub use sequencer::{ActivationId, SceneSequencer};
pub use timer::{Cue, DwellTimer, TimerEvent, TimerScope, TimerToken};

pub use mayajalam_types::ui::{AnimPhase, EntryEffect, EntryEffectKind, UiOptions};
pub use mayajalam_types::{SceneId, SceneTimings, catalog};
