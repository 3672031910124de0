// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ConfigError, GalleryConfig, ImagesConfig, StyleConfig, WindowConfig};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub gallery: GalleryConfig,
    pub images: ImagesConfig,
    pub style: StyleConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        // First try the executable's directory
        if let Some(exe_path) = exe_dir().map(|dir| dir.join(CONFIG_FILE)) {
            if exe_path.exists() {
                return Self::load_from_path(&exe_path);
            }
        }

        // Fallback to the current working directory
        Self::load_from_path(Path::new(CONFIG_FILE))
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from(CONFIG_FILE),
            source,
        })?;
        config.gallery.validate()?;
        Ok(config)
    }

    /// Resolves a configured image source to a local path.
    /// Relative paths prefer the executable's directory when the file exists there.
    pub fn resolve_source(&self, source: &str) -> PathBuf {
        let path = Path::new(source);
        if path.is_absolute() {
            return path.to_path_buf();
        }

        exe_dir()
            .map(|dir| dir.join(path))
            .filter(|candidate| candidate.exists())
            .unwrap_or_else(|| path.to_path_buf())
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Breakpoints;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.gallery.transition_speed, 0.1);
        assert_eq!(config.gallery.snap_distance, 1.0);
        assert_eq!(config.gallery.max_speed, 0.25);
        assert_eq!(config.gallery.breakpoints, Breakpoints::default());
        assert!(config.images.sources.is_empty());
    }

    #[test]
    fn test_partial_config() {
        let content = r#"
            [gallery]
            seed = 7
            transition_speed = 0.2

            [images]
            sources = ["a.png", "b.png"]
        "#;
        let config = Config::from_toml_str(content).unwrap();
        assert_eq!(config.gallery.seed, Some(7));
        assert_eq!(config.gallery.transition_speed, 0.2);
        assert_eq!(config.gallery.max_speed, 0.25);
        assert_eq!(config.images.sources, vec!["a.png", "b.png"]);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_custom_breakpoints() {
        let content = r#"
            [[gallery.breakpoints]]
            max_container_width = 600.0
            width = 50.0
            height = 50.0
            active_width = 100.0
            active_height = 100.0

            [[gallery.breakpoints]]
            width = 120.0
            height = 90.0
            active_width = 240.0
            active_height = 180.0
        "#;
        let config = Config::from_toml_str(content).unwrap();
        let breakpoints = &config.gallery.breakpoints;
        assert_eq!(breakpoints.profiles().len(), 2);
        assert_eq!(breakpoints.dimensions_for(600.0).size.x, 50.0);
        assert_eq!(breakpoints.dimensions_for(601.0).size.x, 120.0);
    }

    #[test]
    fn test_invalid_breakpoints_fail_to_parse() {
        let content = r#"
            [[gallery.breakpoints]]
            max_container_width = 600.0
            width = 50.0
            height = 50.0
            active_width = 100.0
            active_height = 100.0
        "#;
        assert!(matches!(
            Config::from_toml_str(content),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_invalid_transition_speed() {
        let tests = vec!["0.0", "1.5", "-0.1"];
        for value in tests {
            let content = format!("[gallery]\ntransition_speed = {}", value);
            let result = Config::from_toml_str(&content);
            assert!(
                matches!(
                    result,
                    Err(ConfigError::Invalid {
                        field: "transition_speed",
                        ..
                    })
                ),
                "Failed for transition_speed = {}",
                value
            );
        }
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = Config::load_from_path(Path::new("does/not/exist/config.toml")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_resolve_absolute_source() {
        let config = Config::default();
        let absolute = std::env::temp_dir().join("photo.jpg");
        assert_eq!(
            config.resolve_source(absolute.to_str().unwrap()),
            absolute
        );
    }

    #[test]
    fn test_resolve_missing_relative_source() {
        let config = Config::default();
        assert_eq!(
            config.resolve_source("assets/not-there.jpg"),
            PathBuf::from("assets/not-there.jpg")
        );
    }
}
