// src/models/sizing.rs
//
// Breakpoint-driven image sizing.
// A container width selects one SizeProfile, which gives both the drifting
// size and the enlarged (active) size of every image.

use nannou::prelude::*;
use serde::Deserialize;

use crate::config::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SizeProfile {
    /// Inclusive upper bound on container width. `None` matches any width.
    #[serde(default)]
    pub max_container_width: Option<f32>,
    pub width: f32,
    pub height: f32,
    pub active_width: f32,
    pub active_height: f32,
}

impl SizeProfile {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            size: vec2(self.width, self.height),
            active_size: vec2(self.active_width, self.active_height),
        }
    }

    fn matches(&self, container_width: f32) -> bool {
        self.max_container_width
            .map_or(true, |max| container_width <= max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub size: Vec2,
    pub active_size: Vec2,
}

/// An ordered list of size profiles.
/// Thresholds ascend and the last profile always matches.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<SizeProfile>")]
pub struct Breakpoints {
    profiles: Vec<SizeProfile>,
}

impl Breakpoints {
    pub fn new(profiles: Vec<SizeProfile>) -> Result<Self, ConfigError> {
        let Some(last) = profiles.last() else {
            return Err(ConfigError::Breakpoints("no size profiles given".into()));
        };
        if last.max_container_width.is_some() {
            return Err(ConfigError::Breakpoints(
                "the last size profile must not set max_container_width".into(),
            ));
        }

        let mut previous: Option<f32> = None;
        for profile in &profiles[..profiles.len() - 1] {
            let Some(max) = profile.max_container_width else {
                return Err(ConfigError::Breakpoints(
                    "only the last size profile may omit max_container_width".into(),
                ));
            };
            if previous.is_some_and(|prev| max <= prev) {
                return Err(ConfigError::Breakpoints(format!(
                    "max_container_width values must ascend, found {} after {}",
                    max,
                    previous.unwrap_or_default()
                )));
            }
            previous = Some(max);
        }

        for profile in &profiles {
            if profile.width <= 0.0
                || profile.height <= 0.0
                || profile.active_width <= 0.0
                || profile.active_height <= 0.0
            {
                return Err(ConfigError::Breakpoints(format!(
                    "size profile has a non-positive size: {:?}",
                    profile
                )));
            }
        }

        Ok(Self { profiles })
    }

    pub fn profiles(&self) -> &[SizeProfile] {
        &self.profiles
    }

    pub fn dimensions_for(&self, container_width: f32) -> Dimensions {
        self.profiles
            .iter()
            .find(|profile| profile.matches(container_width))
            .or(self.profiles.last())
            .map(SizeProfile::dimensions)
            .unwrap_or_else(|| default_profiles()[2].dimensions())
    }
}

impl TryFrom<Vec<SizeProfile>> for Breakpoints {
    type Error = ConfigError;

    fn try_from(profiles: Vec<SizeProfile>) -> Result<Self, Self::Error> {
        Self::new(profiles)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            profiles: default_profiles().to_vec(),
        }
    }
}

pub fn default_profiles() -> [SizeProfile; 3] {
    [
        SizeProfile {
            max_container_width: Some(480.0),
            width: 80.0,
            height: 60.0,
            active_width: 160.0,
            active_height: 120.0,
        },
        SizeProfile {
            max_container_width: Some(768.0),
            width: 100.0,
            height: 75.0,
            active_width: 200.0,
            active_height: 150.0,
        },
        SizeProfile {
            max_container_width: None,
            width: 150.0,
            height: 100.0,
            active_width: 300.0,
            active_height: 200.0,
        },
    ]
}
