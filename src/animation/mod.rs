pub mod movement;
pub mod transition;

pub use movement::{drift, random_position, random_velocity};
pub use transition::{centered_target, steps_to_settle, EaseTransition, TransitionStep};
