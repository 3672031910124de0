// src/render/mod.rs
// The display layer: the Surface capability and its nannou implementation

pub mod image_fetch;
pub mod nannou_surface;
pub mod surface;

pub use image_fetch::{FetchError, ImageFetcher};
pub use nannou_surface::NannouSurface;
pub use surface::{ElementId, Surface, VisualClass};
