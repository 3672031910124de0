// src/views/mod.rs

pub mod floating_image;
pub mod gallery;

pub use floating_image::{FloatingImage, ImageId, MotionSettings};
pub use gallery::{ClickEvent, Gallery, GalleryState};
