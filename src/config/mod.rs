pub mod config_load;
pub mod config_types;
pub mod error;

pub use config_load::Config;
pub use config_types::{
    GalleryConfig, ImagesConfig, StyleConfig, WindowConfig, DEFAULT_MAX_SPEED,
    DEFAULT_SNAP_DISTANCE, DEFAULT_TRANSITION_SPEED,
};
pub use error::ConfigError;
