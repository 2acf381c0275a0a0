//! Collision primitives in screen space
//!
//! Screen coordinates: origin at the top-left, y grows downward.

use glam::Vec2;
use serde::Serialize;

/// A circle given by its center and radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Point-in-rect test, inclusive on every edge (used for button hits)
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.pos.x && point.x <= max.x && point.y >= self.pos.y && point.y <= max.y
    }

    /// Closest point inside the rectangle to `point`
    ///
    /// A degenerate (negative size) rect resolves to its origin.
    #[inline]
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        let (min, max) = (self.min(), self.max());
        Vec2::new(point.x.min(max.x).max(min.x), point.y.min(max.y).max(min.y))
    }
}
