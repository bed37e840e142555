use serde::Deserialize;
use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use mayajalam_types::ui::UiOptions;
use mayajalam_types::{SceneId, SceneTimings};

const ENV_REDUCED_MOTION: &str = "MAYAJALAM_REDUCED_MOTION";
const ENV_ASCII: &str = "MAYAJALAM_ASCII";
const ENV_HIGH_CONTRAST: &str = "MAYAJALAM_HIGH_CONTRAST";

/// Contents of `~/.mayajalam/config.toml`.
///
/// ```toml
/// [app]
/// reduced_motion = true
/// start_scene = "student"
///
/// [timing]
/// pipeline_step_ms = 800
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct MayajalamConfig {
    pub app: Option<AppConfig>,
    pub timing: Option<TimingConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable scene entry effects and decorative motion.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Scene shown at startup. Reset still returns to the splash.
    pub start_scene: Option<SceneId>,
}

/// Millisecond overrides for [`SceneTimings`]. Unset fields keep the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct TimingConfig {
    pub upload_dwell_ms: Option<u64>,
    pub pipeline_step_ms: Option<u64>,
    pub pipeline_dwell_ms: Option<u64>,
    pub gesture_hold_ms: Option<u64>,
    pub ai_gesture_period_ms: Option<u64>,
    pub entry_effect_ms: Option<u64>,
}

impl TimingConfig {
    #[must_use]
    pub fn apply(&self, base: SceneTimings) -> SceneTimings {
        let ms = |value: Option<u64>, fallback: Duration| {
            value.map_or(fallback, Duration::from_millis)
        };
        SceneTimings {
            upload_dwell: ms(self.upload_dwell_ms, base.upload_dwell),
            pipeline_step: ms(self.pipeline_step_ms, base.pipeline_step),
            pipeline_dwell: ms(self.pipeline_dwell_ms, base.pipeline_dwell),
            gesture_hold: ms(self.gesture_hold_ms, base.gesture_hold),
            ai_gesture_period: ms(self.ai_gesture_period_ms, base.ai_gesture_period),
            entry_effect: ms(self.entry_effect_ms, base.entry_effect),
        }
    }
}

impl MayajalamConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn timings(&self) -> SceneTimings {
        self.timing
            .as_ref()
            .map_or(SceneTimings::default(), |timing| {
                timing.apply(SceneTimings::default())
            })
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn start_scene(&self) -> Option<SceneId> {
        self.app.as_ref().and_then(|app| app.start_scene)
    }
}

/// Resolved startup settings for [`crate::App`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AppSettings {
    pub timings: SceneTimings,
    pub ui_options: UiOptions,
    pub start_scene: Option<SceneId>,
}

impl AppSettings {
    /// Merges the config file (if any) with `MAYAJALAM_*` environment overrides.
    #[must_use]
    pub fn resolve(config: Option<&MayajalamConfig>) -> Self {
        Self::resolve_with(config, |key| env::var(key).ok())
    }

    pub(crate) fn resolve_with<F>(config: Option<&MayajalamConfig>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut ui_options = config.map(MayajalamConfig::ui_options).unwrap_or_default();
        let flag = |key: &str| lookup(key).is_some_and(|raw| is_truthy(&raw));
        ui_options.reduced_motion |= flag(ENV_REDUCED_MOTION);
        ui_options.ascii_only |= flag(ENV_ASCII);
        ui_options.high_contrast |= flag(ENV_HIGH_CONTRAST);

        Self {
            timings: config.map(MayajalamConfig::timings).unwrap_or_default(),
            ui_options,
            start_scene: config.and_then(MayajalamConfig::start_scene),
        }
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".mayajalam").join("config.toml"))
}
