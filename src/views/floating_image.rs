// src/views/floating_image.rs
//
// FloatingImage holds the geometry of one gallery image and advances it one
// step per frame: free drift while idle, eased motion while entering or
// leaving the active (enlarged, centered) state.

use nannou::prelude::*;
use rand::Rng;

use crate::{
    animation::{
        centered_target, drift, random_position, random_velocity, steps_to_settle, EaseTransition,
        TransitionStep,
    },
    config::GalleryConfig,
    models::{Bounds, Breakpoints, Container, Dimensions},
    render::{ElementId, Surface, VisualClass},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSettings {
    pub transition_speed: f32,
    pub snap_distance: f32,
    pub max_speed: f32,
}

impl From<&GalleryConfig> for MotionSettings {
    fn from(config: &GalleryConfig) -> Self {
        Self {
            transition_speed: config.transition_speed,
            snap_distance: config.snap_distance,
            max_speed: config.max_speed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FloatingImage {
    id: ImageId,
    element: ElementId,
    source: String,
    motion: MotionSettings,

    // cached container and the size profile chosen for it
    container: Container,
    dimensions: Dimensions,

    position: Point2,
    original_position: Point2,
    velocity: Vec2,

    is_active: bool,
    transition: Option<EaseTransition>,
}

impl FloatingImage {
    /// Creates the display element, sizes it for `container` and drops it at a
    /// random spot with a random drift velocity.
    pub fn new<S: Surface, R: Rng + ?Sized>(
        id: ImageId,
        source: &str,
        container: Container,
        breakpoints: &Breakpoints,
        motion: MotionSettings,
        rng: &mut R,
        surface: &mut S,
    ) -> Self {
        let element = surface.create(source);
        let dimensions = breakpoints.dimensions_for(container.width);
        surface.set_bounds(element, dimensions.size);

        let position = random_position(rng, container.max_position(dimensions.size));
        let velocity = random_velocity(rng, motion.max_speed);

        surface.set_transform(element, position);
        surface.subscribe_click(element);

        Self {
            id,
            element,
            source: source.to_string(),
            motion,
            container,
            dimensions,
            position,
            original_position: position,
            velocity,
            is_active: false,
            transition: None,
        }
    }

    /// One frame: ease while active or transitioning, drift otherwise.
    pub fn update<S: Surface>(&mut self, surface: &mut S) {
        if self.is_active || self.transition.is_some() {
            self.handle_active_state();
        } else {
            self.move_freely();
        }
        surface.set_transform(self.element, self.position);
    }

    fn handle_active_state(&mut self) {
        let Some(transition) = self.transition else {
            return;
        };
        if transition.step(&mut self.position) == TransitionStep::Settled {
            self.transition = None;
        }
    }

    fn move_freely(&mut self) {
        let max_position = self.container.max_position(self.dimensions.size);
        drift(&mut self.position, &mut self.velocity, max_position);
        self.original_position = self.position;
    }

    pub fn activate<S: Surface>(&mut self, surface: &mut S) {
        self.is_active = true;
        surface.set_visual_class(self.element, VisualClass::Active);
        surface.set_bounds(self.element, self.dimensions.active_size);
        self.start_transition(self.active_target());
    }

    pub fn deactivate<S: Surface>(&mut self, surface: &mut S) {
        self.is_active = false;
        surface.set_visual_class(self.element, VisualClass::Idle);
        surface.set_bounds(self.element, self.dimensions.size);
        let home = self.clamp_to_container(self.original_position);
        self.start_transition(home);
    }

    pub fn resize<S: Surface>(
        &mut self,
        container: Container,
        breakpoints: &Breakpoints,
        surface: &mut S,
    ) {
        self.container = container;
        self.dimensions = breakpoints.dimensions_for(container.width);
        surface.set_bounds(self.element, self.rendered_size());

        if self.is_active {
            self.original_position = self.clamp_to_container(self.original_position);
            self.start_transition(self.active_target());
        } else {
            self.position = self.clamp_to_container(self.position);
            self.original_position = self.position;

            // a return in flight must land inside the new bounds
            if let Some(target) = self.target() {
                let target = self.clamp_to_container(target);
                if let Some(transition) = self.transition.as_mut() {
                    transition.retarget(target);
                }
            }
        }

        surface.set_transform(self.element, self.position);
    }

    fn start_transition(&mut self, target: Point2) {
        let frames = steps_to_settle(
            (target - self.position).length(),
            self.motion.transition_speed,
            self.motion.snap_distance,
        );
        tracing::debug!(
            image = self.id.0,
            frames,
            "Easing toward ({:.1}, {:.1})",
            target.x,
            target.y
        );
        self.transition = Some(EaseTransition::new(
            target,
            self.motion.transition_speed,
            self.motion.snap_distance,
        ));
    }

    /// Clamps a top-left position into `[0, container - size]` per axis.
    fn clamp_to_container(&self, position: Point2) -> Point2 {
        position
            .min(self.container.max_position(self.dimensions.size))
            .max(Vec2::ZERO)
    }

    fn active_target(&self) -> Point2 {
        centered_target(self.container.as_vec2(), self.dimensions.active_size)
    }

    pub fn rendered_size(&self) -> Vec2 {
        if self.is_active {
            self.dimensions.active_size
        } else {
            self.dimensions.size
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.rendered_size())
    }

    pub fn id(&self) -> ImageId {
        self.id
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn container(&self) -> Container {
        self.container
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn position(&self) -> Point2 {
        self.position
    }

    pub fn original_position(&self) -> Point2 {
        self.original_position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    pub fn target(&self) -> Option<Point2> {
        self.transition.map(|transition| transition.target())
    }
}
