//! Axis-aligned bounding boxes
//!
//! Every entity in the game is boxy: birds, enemies and shields all collide
//! as center-anchored axis-aligned rectangles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A center-anchored axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Center position
    pub center: Vec2,
    /// Full extents (width, height)
    pub size: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Left edge x
    #[inline]
    pub fn min_x(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    /// Right edge x
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    /// Top edge y (y grows downward)
    #[inline]
    pub fn min_y(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    /// Bottom edge y
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// Overlap test. Edge-touching boxes count as overlapping.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min_x() <= other.max_x()
            && self.max_x() >= other.min_x()
            && self.min_y() <= other.max_y()
            && self.max_y() >= other.min_y()
    }

    /// Check if a point lies inside the box (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlapping() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_disjoint() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(30.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_intersects_edge_touching() {
        // Right edge of a exactly meets left edge of b
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_intersects_one_axis_only() {
        // Overlap in x, separated in y
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(2.0, 50.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contains_point() {
        let a = Aabb::new(Vec2::new(100.0, 100.0), Vec2::new(40.0, 20.0));
        assert!(a.contains_point(Vec2::new(100.0, 100.0)));
        assert!(a.contains_point(Vec2::new(80.0, 90.0))); // corner
        assert!(!a.contains_point(Vec2::new(79.9, 100.0)));
    }
}
