// src/views/gallery.rs
//
// The Gallery owns every FloatingImage, the container size and the single
// active selection. The host calls `tick` once per frame and forwards resize
// and click events; everything runs on one thread.

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    config::GalleryConfig,
    models::Container,
    render::{ElementId, Surface},
    views::{FloatingImage, ImageId, MotionSettings},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryState {
    /// Constructed; images are built on the first tick.
    Pending,
    Running,
}

/// A pointer click in gallery space, with the topmost clickable element under it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    pub point: Point2,
    pub target: Option<ElementId>,
}

pub struct Gallery<S: Surface> {
    config: GalleryConfig,
    sources: Vec<String>,
    surface: S,

    images: Vec<FloatingImage>,
    active: Option<ImageId>,
    container: Container,

    rng: StdRng,
    state: GalleryState,
    frame: u64,
}

impl<S: Surface> Gallery<S> {
    pub fn new(config: GalleryConfig, sources: Vec<String>, surface: S) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            sources,
            surface,
            images: Vec::new(),
            active: None,
            container: Container::default(),
            rng,
            state: GalleryState::Pending,
            frame: 0,
        }
    }

    /// Measures the container and builds one image per source.
    /// Runs once; `tick` calls it on the first frame.
    pub fn initialize(&mut self) {
        if self.state == GalleryState::Running {
            return;
        }

        self.container = self.surface.measure();
        let motion = MotionSettings::from(&self.config);

        self.images = self
            .sources
            .iter()
            .enumerate()
            .map(|(index, source)| {
                FloatingImage::new(
                    ImageId(index),
                    source,
                    self.container,
                    &self.config.breakpoints,
                    motion,
                    &mut self.rng,
                    &mut self.surface,
                )
            })
            .collect();

        self.state = GalleryState::Running;
        tracing::info!(
            "Gallery started with {} images in a {}x{} container",
            self.images.len(),
            self.container.width,
            self.container.height
        );
    }

    /// Advances every image by one frame, in collection order.
    pub fn tick(&mut self) {
        if self.state == GalleryState::Pending {
            self.initialize();
        }

        for image in self.images.iter_mut() {
            image.update(&mut self.surface);
        }
        self.frame += 1;
        tracing::trace!(frame = self.frame, "Gallery tick");
    }

    /// Click on an image: activates it, swaps the selection to it, or, when it
    /// is already the active image, deactivates it and clears the selection.
    pub fn activate_image(&mut self, id: ImageId) {
        if id.0 >= self.images.len() {
            tracing::warn!("Ignoring activation of unknown image {:?}", id);
            return;
        }

        match self.active {
            Some(current) if current == id => {
                self.images[id.0].deactivate(&mut self.surface);
                self.active = None;
                tracing::debug!("Image {} deactivated", id.0);
            }
            Some(current) => {
                self.images[current.0].deactivate(&mut self.surface);
                self.images[id.0].activate(&mut self.surface);
                self.active = Some(id);
                tracing::debug!("Active image changed from {} to {}", current.0, id.0);
            }
            None => {
                self.images[id.0].activate(&mut self.surface);
                self.active = Some(id);
                tracing::debug!("Image {} activated", id.0);
            }
        }
    }

    /// Re-measures the container and redistributes it to every image.
    pub fn handle_resize(&mut self) {
        if self.state == GalleryState::Pending {
            return;
        }

        self.container = self.surface.measure();
        for image in self.images.iter_mut() {
            image.resize(self.container, &self.config.breakpoints, &mut self.surface);
        }
        tracing::debug!(
            "Gallery resized to {}x{}",
            self.container.width,
            self.container.height
        );
    }

    /// Deactivates the active image when `point` falls outside its rendered bounds.
    pub fn handle_document_click(&mut self, point: Point2) {
        let Some(active) = self.active else {
            return;
        };

        let image = &mut self.images[active.0];
        if !image.bounds().contains(point) {
            image.deactivate(&mut self.surface);
            self.active = None;
            tracing::debug!("Image {} deactivated by outside click", active.0);
        }
    }

    /// Routes a pointer click: the image's own handler runs first, then the
    /// outside-click check against whatever is active afterwards.
    pub fn handle_click(&mut self, event: ClickEvent) {
        if let Some(id) = event.target.and_then(|element| self.image_for_element(element)) {
            self.activate_image(id);
        }
        self.handle_document_click(event.point);
    }

    pub fn image_for_element(&self, element: ElementId) -> Option<ImageId> {
        self.images
            .iter()
            .find(|image| image.element() == element)
            .map(FloatingImage::id)
    }

    pub fn images(&self) -> &[FloatingImage] {
        &self.images
    }

    pub fn image(&self, id: ImageId) -> Option<&FloatingImage> {
        self.images.get(id.0)
    }

    pub fn active_image_id(&self) -> Option<ImageId> {
        self.active
    }

    pub fn active_image(&self) -> Option<&FloatingImage> {
        self.active.and_then(|id| self.images.get(id.0))
    }

    pub fn container(&self) -> Container {
        self.container
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
