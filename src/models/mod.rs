pub mod geometry;
pub mod sizing;

pub use geometry::{Bounds, Container};
pub use sizing::{default_profiles, Breakpoints, Dimensions, SizeProfile};
