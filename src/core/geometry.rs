//! Axis-aligned rectangles in screen space.
//!
//! Screen space has its origin at the top-left corner with `y` growing
//! downward, so "raising" a card means a negative `y` offset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its top-left corner and size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[must_use]
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Build a rectangle of `size` centered on `center`.
    #[must_use]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size * 0.5,
            size,
        }
    }

    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Same size, moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            pos: self.pos + offset,
            size: self.size,
        }
    }

    /// Same size, top-left moved to `pos`.
    #[must_use]
    pub fn with_pos(&self, pos: Vec2) -> Self {
        Self { pos, size: self.size }
    }

    /// Point containment. Left/top edges are inclusive, right/bottom exclusive.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x < self.right()
            && point.y >= self.pos.y
            && point.y < self.bottom()
    }

    /// Whether two rectangles share any area.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && other.pos.x < self.right()
            && self.pos.y < other.bottom()
            && other.pos.y < self.bottom()
    }
}
