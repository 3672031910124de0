// src/render/surface.rs
//
// The display capability the gallery draws through.
// Coordinates are in gallery space: origin at the container's top-left, y down.

use nannou::prelude::*;

use crate::models::Container;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualClass {
    #[default]
    Idle,
    Active,
}

pub trait Surface {
    /// Current size of the container the elements live in.
    fn measure(&self) -> Container;

    /// Creates a display element for an image source.
    fn create(&mut self, source: &str) -> ElementId;

    fn set_bounds(&mut self, element: ElementId, size: Vec2);

    /// Places the element's top-left corner.
    fn set_transform(&mut self, element: ElementId, position: Point2);

    fn set_visual_class(&mut self, element: ElementId, class: VisualClass);

    /// Marks the element as a click target.
    fn subscribe_click(&mut self, element: ElementId);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Debug, Clone, Default)]
    pub struct RecordedElement {
        pub source: String,
        pub size: Vec2,
        pub position: Point2,
        pub class: VisualClass,
        pub clickable: bool,
        pub transform_writes: usize,
    }

    /// Keeps the last value written for every element.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub container: Container,
        pub elements: Vec<RecordedElement>,
        pub measure_calls: std::cell::Cell<usize>,
    }

    impl RecordingSurface {
        pub fn new(width: f32, height: f32) -> Self {
            Self {
                container: Container::new(width, height),
                ..Default::default()
            }
        }

        pub fn element(&self, element: ElementId) -> &RecordedElement {
            &self.elements[element.0]
        }
    }

    impl Surface for RecordingSurface {
        fn measure(&self) -> Container {
            self.measure_calls.set(self.measure_calls.get() + 1);
            self.container
        }

        fn create(&mut self, source: &str) -> ElementId {
            self.elements.push(RecordedElement {
                source: source.to_string(),
                ..Default::default()
            });
            ElementId(self.elements.len() - 1)
        }

        fn set_bounds(&mut self, element: ElementId, size: Vec2) {
            self.elements[element.0].size = size;
        }

        fn set_transform(&mut self, element: ElementId, position: Point2) {
            let recorded = &mut self.elements[element.0];
            recorded.position = position;
            recorded.transform_writes += 1;
        }

        fn set_visual_class(&mut self, element: ElementId, class: VisualClass) {
            self.elements[element.0].class = class;
        }

        fn subscribe_click(&mut self, element: ElementId) {
            self.elements[element.0].clickable = true;
        }
    }
}
