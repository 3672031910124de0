// src/animation/transition.rs
//
// Eased transition toward a target position.
//
// Each step covers a fixed fraction of the remaining distance, so the
// distance decays geometrically: after k steps it is D * (1 - speed)^k.
// There is no duration; the transition ends once it is within the snap
// distance, at which point it lands exactly on the target.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStep {
    Moving,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EaseTransition {
    target: Point2,
    speed: f32,
    snap_distance: f32,
}

impl EaseTransition {
    pub fn new(target: Point2, speed: f32, snap_distance: f32) -> Self {
        Self {
            target,
            speed,
            snap_distance,
        }
    }

    pub fn target(&self) -> Point2 {
        self.target
    }

    pub fn retarget(&mut self, target: Point2) {
        self.target = target;
    }

    /// Moves `position` one step toward the target.
    /// Returns `Settled` on the step that snaps onto the target.
    pub fn step(&self, position: &mut Point2) -> TransitionStep {
        let delta = self.target - *position;
        if delta.length() < self.snap_distance {
            *position = self.target;
            TransitionStep::Settled
        } else {
            *position += delta * self.speed;
            TransitionStep::Moving
        }
    }
}

/// Number of easing steps needed to bring `distance` below `snap_distance`,
/// not counting the final snapping step.
pub fn steps_to_settle(distance: f32, speed: f32, snap_distance: f32) -> u32 {
    if distance < snap_distance {
        return 0;
    }
    let decay = 1.0 / (1.0 - speed);
    ((distance / snap_distance).ln() / decay.ln()).ceil() as u32
}

/// Top-left position that centers a box of `size` in `container`, clamped so
/// the box never overflows the container's right or bottom edge, nor its
/// top-left corner.
pub fn centered_target(container: Vec2, size: Vec2) -> Point2 {
    let centered = container / 2.0 - size / 2.0;
    let max = container - size;
    pt2(
        centered.x.min(max.x).max(0.0),
        centered.y.min(max.y).max(0.0),
    )
}
