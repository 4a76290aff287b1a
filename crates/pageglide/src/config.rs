//! Motion tuning knobs, loadable from a TOML file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::easing::EasingType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Interpolated motion duration in milliseconds
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: u64,
    /// Easing curve for interpolated motions
    #[serde(default)]
    pub easing: EasingType,
    /// Fling friction coefficient, per second of decay
    #[serde(default = "default_fling_friction")]
    pub fling_friction: f32,
    /// Speed below which a fling is considered at rest, in px/s
    #[serde(default = "default_min_fling_velocity")]
    pub min_fling_velocity: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: default_animation_duration_ms(),
            easing: EasingType::default(),
            fling_friction: default_fling_friction(),
            min_fling_velocity: default_min_fling_velocity(),
        }
    }
}

fn default_animation_duration_ms() -> u64 {
    400
}

fn default_fling_friction() -> f32 {
    4.5
}

fn default_min_fling_velocity() -> f32 {
    50.0
}

impl MotionConfig {
    /// Get the interpolated motion duration as a [`Duration`].
    #[inline]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or return defaults if it is absent
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pageglide/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pageglide")
            .join("config.toml")
    }
}
