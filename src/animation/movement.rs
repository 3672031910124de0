// src/animation/movement.rs
//
// Free drift: constant velocity with elastic reflection off the container edges.

use nannou::prelude::*;
use rand::Rng;

/// Advances `position` by one frame of `velocity`, reflecting off the
/// rectangle `[0, max_position]` on each axis.
///
/// An axis that touches or passes either edge has its velocity negated and its
/// position clamped back inside. When `max_position` is negative on an axis
/// (image larger than the container) the position is pinned to 0 there.
pub fn drift(position: &mut Vec2, velocity: &mut Vec2, max_position: Vec2) {
    *position += *velocity;

    if position.x <= 0.0 || position.x >= max_position.x {
        velocity.x = -velocity.x;
        position.x = position.x.min(max_position.x).max(0.0);
    }
    if position.y <= 0.0 || position.y >= max_position.y {
        velocity.y = -velocity.y;
        position.y = position.y.min(max_position.y).max(0.0);
    }
}

/// Uniform position in `[0, max_position)` per axis; collapsed axes give 0.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, max_position: Vec2) -> Vec2 {
    vec2(
        rng.gen::<f32>() * max_position.x.max(0.0),
        rng.gen::<f32>() * max_position.y.max(0.0),
    )
}

/// Uniform velocity in `[-max_speed, max_speed)` per axis, axes independent.
pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R, max_speed: f32) -> Vec2 {
    vec2(
        (rng.gen::<f32>() - 0.5) * 2.0 * max_speed,
        (rng.gen::<f32>() - 0.5) * 2.0 * max_speed,
    )
}
