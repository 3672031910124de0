// src/render/nannou_surface.rs
//
// Surface implementation backed by a nannou window.
// Keeps the last state written for every element and draws it each frame.
// nannou's origin is the window center with y up; gallery space is top-left
// with y down, so every draw and hit test goes through the conversions below.

use nannou::prelude::*;

use crate::{
    config::StyleConfig,
    models::{Bounds, Container},
    render::{image_fetch::ImageFetcher, ElementId, Surface, VisualClass},
};

enum ImageState {
    Pending,
    Fetching,
    Loaded(wgpu::Texture),
    Failed,
}

struct ElementView {
    source: String,
    image: ImageState,
    size: Vec2,
    position: Point2,
    class: VisualClass,
    clickable: bool,
}

pub struct NannouSurface {
    container: Container,
    elements: Vec<ElementView>,
    style: StyleConfig,

    // started on the first remote source
    fetcher: Option<ImageFetcher>,
}

impl NannouSurface {
    pub fn new(container: Container, style: StyleConfig) -> Self {
        Self {
            container,
            elements: Vec::new(),
            style,
            fetcher: None,
        }
    }

    /// Records the new window size; the gallery picks it up on `measure`.
    pub fn set_container(&mut self, container: Container) {
        self.container = container;
    }

    /// Loads textures for elements created since the last call and picks up
    /// finished downloads. Local files load inline; http(s) sources go to the
    /// fetch worker. Failures are logged and drawn as placeholders.
    pub fn load_images(&mut self, app: &App) {
        self.receive_fetched(app);

        for (index, element) in self.elements.iter_mut().enumerate() {
            if !matches!(element.image, ImageState::Pending) {
                continue;
            }
            element.image = if is_remote(&element.source) {
                request_remote(&mut self.fetcher, index, &element.source)
            } else {
                load_local(app, &element.source)
            };
        }
    }

    fn receive_fetched(&mut self, app: &App) {
        let Some(fetcher) = self.fetcher.as_ref() else {
            return;
        };

        for result in fetcher.drain() {
            let Some(element) = self.elements.get_mut(result.key) else {
                continue;
            };
            element.image = match result.image {
                Ok(image) => {
                    tracing::debug!("Fetched {}", result.url);
                    ImageState::Loaded(wgpu::Texture::from_image(app, &image))
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to fetch image {}", result.url);
                    ImageState::Failed
                }
            };
        }
    }

    /// Topmost clickable element under `point` (gallery space).
    /// Active elements sit above idle ones; later elements above earlier ones.
    pub fn element_at(&self, point: Point2) -> Option<ElementId> {
        self.draw_order()
            .rev()
            .filter(|(_, element)| element.clickable)
            .find(|(_, element)| Bounds::new(element.position, element.size).contains(point))
            .map(|(id, _)| id)
    }

    /// Converts a nannou window point to gallery space.
    pub fn to_gallery_point(&self, point: Point2) -> Point2 {
        from_window_point(self.container, point)
    }

    pub fn draw(&self, draw: &Draw) {
        let [r, g, b] = self.style.background;
        draw.background().color(rgb(r, g, b));

        for (_, element) in self.draw_order() {
            let center = to_window_center(self.container, element.position, element.size);

            match &element.image {
                ImageState::Loaded(texture) => {
                    draw.texture(texture)
                        .x_y(center.x, center.y)
                        .w_h(element.size.x, element.size.y);
                }
                ImageState::Pending | ImageState::Fetching | ImageState::Failed => {
                    let [r, g, b] = self.style.placeholder;
                    draw.rect()
                        .x_y(center.x, center.y)
                        .w_h(element.size.x, element.size.y)
                        .color(rgb(r, g, b));
                }
            }

            if element.class == VisualClass::Active {
                let [r, g, b] = self.style.active_outline;
                draw.rect()
                    .x_y(center.x, center.y)
                    .w_h(element.size.x, element.size.y)
                    .stroke(rgb(r, g, b))
                    .stroke_weight(self.style.active_outline_weight)
                    .no_fill();
            }
        }
    }

    fn draw_order(&self) -> impl DoubleEndedIterator<Item = (ElementId, &ElementView)> + '_ {
        let idle = self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.class == VisualClass::Idle);
        let active = self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.class == VisualClass::Active);

        idle.chain(active)
            .map(|(index, element)| (ElementId(index), element))
    }
}

impl Surface for NannouSurface {
    fn measure(&self) -> Container {
        self.container
    }

    fn create(&mut self, source: &str) -> ElementId {
        self.elements.push(ElementView {
            source: source.to_string(),
            image: ImageState::Pending,
            size: Vec2::ZERO,
            position: Point2::ZERO,
            class: VisualClass::Idle,
            clickable: false,
        });
        ElementId(self.elements.len() - 1)
    }

    fn set_bounds(&mut self, element: ElementId, size: Vec2) {
        if let Some(view) = self.elements.get_mut(element.0) {
            view.size = size;
        }
    }

    fn set_transform(&mut self, element: ElementId, position: Point2) {
        if let Some(view) = self.elements.get_mut(element.0) {
            view.position = position;
        }
    }

    fn set_visual_class(&mut self, element: ElementId, class: VisualClass) {
        if let Some(view) = self.elements.get_mut(element.0) {
            view.class = class;
        }
    }

    fn subscribe_click(&mut self, element: ElementId) {
        if let Some(view) = self.elements.get_mut(element.0) {
            view.clickable = true;
        }
    }
}

fn load_local(app: &App, path: &str) -> ImageState {
    match wgpu::Texture::from_path(app, path) {
        Ok(texture) => {
            tracing::debug!("Loaded texture {}", path);
            ImageState::Loaded(texture)
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to load image {}", path);
            ImageState::Failed
        }
    }
}

fn request_remote(fetcher: &mut Option<ImageFetcher>, key: usize, url: &str) -> ImageState {
    if fetcher.is_none() {
        match ImageFetcher::spawn() {
            Ok(spawned) => *fetcher = Some(spawned),
            Err(err) => {
                tracing::warn!(error = %err, "Cannot fetch remote image {}", url);
                return ImageState::Failed;
            }
        }
    }

    match fetcher.as_ref() {
        Some(fetcher) if fetcher.request(key, url) => ImageState::Fetching,
        _ => ImageState::Failed,
    }
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Center of a gallery-space box in nannou window coordinates.
pub fn to_window_center(container: Container, position: Point2, size: Vec2) -> Point2 {
    pt2(
        -container.width / 2.0 + position.x + size.x / 2.0,
        container.height / 2.0 - position.y - size.y / 2.0,
    )
}

/// A nannou window point in gallery space.
pub fn from_window_point(container: Container, point: Point2) -> Point2 {
    pt2(
        point.x + container.width / 2.0,
        container.height / 2.0 - point.y,
    )
}
