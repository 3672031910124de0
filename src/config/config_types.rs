// src/config/config_types.rs
//
// Config types for the app.
// Every section is optional in config.toml and falls back to these defaults.

use serde::Deserialize;

use crate::config::ConfigError;
use crate::models::Breakpoints;

pub const DEFAULT_TRANSITION_SPEED: f32 = 0.1;
pub const DEFAULT_SNAP_DISTANCE: f32 = 1.0;
pub const DEFAULT_MAX_SPEED: f32 = 0.25;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "driftgallery".to_string(),
            width: 1024,
            height: 768,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    pub transition_speed: f32, // fraction of the remaining distance covered per frame
    pub snap_distance: f32,    // distance below which a transition lands on its target
    pub max_speed: f32,        // drift speed bound per axis, in pixels per frame
    pub seed: Option<u64>,     // fixes initial placement when set
    pub breakpoints: Breakpoints,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            transition_speed: DEFAULT_TRANSITION_SPEED,
            snap_distance: DEFAULT_SNAP_DISTANCE,
            max_speed: DEFAULT_MAX_SPEED,
            seed: None,
            breakpoints: Breakpoints::default(),
        }
    }
}

impl GalleryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.transition_speed > 0.0 && self.transition_speed <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "transition_speed",
                reason: format!("{} is outside (0, 1]", self.transition_speed),
            });
        }
        if !(self.snap_distance > 0.0) {
            return Err(ConfigError::Invalid {
                field: "snap_distance",
                reason: format!("{} is not positive", self.snap_distance),
            });
        }
        if !(self.max_speed >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "max_speed",
                reason: format!("{} is negative", self.max_speed),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ImagesConfig {
    pub sources: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    pub background: [f32; 3],
    pub placeholder: [f32; 3],
    pub active_outline: [f32; 3],
    pub active_outline_weight: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: [0.06, 0.06, 0.08],
            placeholder: [0.25, 0.25, 0.3],
            active_outline: [1.0, 1.0, 1.0],
            active_outline_weight: 2.0,
        }
    }
}
