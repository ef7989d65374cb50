//! Circle entity
//!
//! A circle has a fixed center, a radius that only ever shrinks, and a
//! `clicked` flag used to defer removal until after an iteration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A shrinking disc on the field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center in window pixel coordinates
    pub center: Vec2,
    /// Current radius (pixels)
    pub radius: f32,
    /// Set the instant the circle is hit
    #[serde(default)]
    pub clicked: bool,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            clicked: false,
        }
    }

    /// Hit test: the edge counts as inside
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.distance_squared(self.center) <= self.radius * self.radius
    }

    /// Shrink by `amount`, returning true once the circle has expired
    pub fn shrink(&mut self, amount: f32) -> bool {
        self.radius -= amount;
        self.is_expired()
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.radius <= 0.0
    }

    /// Whether the whole disc lies inside `[0, width] x [0, height]`
    pub fn fits_within(&self, width: f32, height: f32) -> bool {
        self.center.x - self.radius >= 0.0
            && self.center.y - self.radius >= 0.0
            && self.center.x + self.radius <= width
            && self.center.y + self.radius <= height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point() {
        let circle = Circle::new(Vec2::new(100.0, 100.0), 20.0);

        assert!(circle.contains_point(Vec2::new(100.0, 100.0)));
        assert!(circle.contains_point(Vec2::new(110.0, 110.0)));
        // On the edge counts as a hit
        assert!(circle.contains_point(Vec2::new(120.0, 100.0)));
        assert!(!circle.contains_point(Vec2::new(121.0, 100.0)));
        assert!(!circle.contains_point(Vec2::new(115.0, 115.0)));
    }

    #[test]
    fn test_shrink_until_expired() {
        let mut circle = Circle::new(Vec2::new(50.0, 50.0), 1.0);
        assert!(!circle.shrink(0.25));
        assert_eq!(circle.radius, 0.75);
        assert!(circle.shrink(0.75));
        assert!(circle.is_expired());
    }

    #[test]
    fn test_fits_within() {
        let circle = Circle::new(Vec2::new(80.0, 80.0), 80.0);
        assert!(circle.fits_within(160.0, 160.0));
        assert!(!circle.fits_within(159.0, 160.0));

        let off_edge = Circle::new(Vec2::new(10.0, 500.0), 20.0);
        assert!(!off_edge.fits_within(1000.0, 1000.0));
    }
}
