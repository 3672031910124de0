// src/models/geometry.rs
// Container and bounds types in gallery space: origin top-left, y grows downward

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Container {
    pub width: f32,
    pub height: f32,
}

impl Container {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn as_vec2(&self) -> Vec2 {
        vec2(self.width, self.height)
    }

    /// Largest top-left position at which a box of `size` still fits.
    /// Negative on an axis where the box is larger than the container.
    pub fn max_position(&self, size: Vec2) -> Vec2 {
        self.as_vec2() - size
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub position: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    // edges count as inside
    pub fn contains(&self, point: Point2) -> bool {
        point.x >= self.position.x
            && point.x <= self.right()
            && point.y >= self.position.y
            && point.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_position() {
        let container = Container::new(800.0, 600.0);
        assert_eq!(container.max_position(vec2(150.0, 100.0)), vec2(650.0, 500.0));

        // oversized boxes report a negative limit
        let small = Container::new(100.0, 50.0);
        assert_eq!(small.max_position(vec2(150.0, 100.0)), vec2(-50.0, -50.0));
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::new(vec2(10.0, 20.0), vec2(100.0, 50.0));
        assert_eq!(bounds.right(), 110.0);
        assert_eq!(bounds.bottom(), 70.0);

        let tests = vec![
            (pt2(50.0, 40.0), true),
            (pt2(10.0, 20.0), true),
            (pt2(110.0, 70.0), true),
            (pt2(9.9, 40.0), false),
            (pt2(50.0, 70.1), false),
            (pt2(200.0, 200.0), false),
        ];

        for (point, expected) in tests {
            assert_eq!(bounds.contains(point), expected, "Failed for {:?}", point);
        }
    }
}
