//! Axis-aligned box geometry for bricks and paddle
//!
//! Screen space: origin at the top-left of the field, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    /// Bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Strict horizontal containment (edges excluded)
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x > self.min.x && x < self.right()
    }
}
