//! Core domain types for Mayajalam.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

pub mod catalog;
mod timing;
pub mod ui;

pub use timing::SceneTimings;

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Scene identity
// ============================================================================

/// One of the six mutually exclusive full-screen scenes of the demo.
///
/// The set is closed: renderers and the engine dispatch on it exhaustively, so
/// adding or removing a scene is a compile-time change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum SceneId {
    #[default]
    Splash,
    Dashboard,
    Pipeline,
    Student,
    Vr,
    Analytics,
}

impl SceneId {
    /// All scenes in cycle order, starting at [`SceneId::Splash`].
    pub const ALL: [SceneId; 6] = [
        SceneId::Splash,
        SceneId::Dashboard,
        SceneId::Pipeline,
        SceneId::Student,
        SceneId::Vr,
        SceneId::Analytics,
    ];

    /// Scenes reachable through the direct-jump controls.
    pub const JUMP_TARGETS: [SceneId; 4] = [
        SceneId::Splash,
        SceneId::Dashboard,
        SceneId::Student,
        SceneId::Analytics,
    ];

    /// The scene that follows `self` in the fixed cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            SceneId::Splash => SceneId::Dashboard,
            SceneId::Dashboard => SceneId::Pipeline,
            SceneId::Pipeline => SceneId::Student,
            SceneId::Student => SceneId::Vr,
            SceneId::Vr => SceneId::Analytics,
            SceneId::Analytics => SceneId::Splash,
        }
    }

    /// Zero-based position in the cycle.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            SceneId::Splash => 0,
            SceneId::Dashboard => 1,
            SceneId::Pipeline => 2,
            SceneId::Student => 3,
            SceneId::Vr => 4,
            SceneId::Analytics => 5,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SceneId::Splash => "splash",
            SceneId::Dashboard => "dashboard",
            SceneId::Pipeline => "pipeline",
            SceneId::Student => "student",
            SceneId::Vr => "vr",
            SceneId::Analytics => "analytics",
        }
    }

    /// Human-readable scene name for chrome and logs.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            SceneId::Splash => "Splash",
            SceneId::Dashboard => "Teacher Dashboard",
            SceneId::Pipeline => "Processing Pipeline",
            SceneId::Student => "Student Experience",
            SceneId::Vr => "VR Classroom",
            SceneId::Analytics => "Analytics",
        }
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scene id: {0:?}")]
pub struct ParseSceneIdError(String);

impl FromStr for SceneId {
    type Err = ParseSceneIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        SceneId::ALL
            .into_iter()
            .find(|scene| scene.as_str() == normalized)
            .ok_or_else(|| ParseSceneIdError(s.to_string()))
    }
}

impl TryFrom<String> for SceneId {
    type Error = ParseSceneIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
