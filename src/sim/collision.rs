//! Collision tests for axis-aligned geometry
//!
//! Everything in the world is a box or a circle in screen space (Y grows
//! downward). Landing uses a swept test on the actor's bottom edge so that a
//! fast fall can never skip over a thin surface between two ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w.max(0.0), h.max(0.0)),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap (touching edges do not count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Do two horizontal spans overlap (strictly)?
#[inline]
pub fn spans_overlap(a_left: f32, a_right: f32, b_left: f32, b_right: f32) -> bool {
    a_left < b_right && a_right > b_left
}

/// Circle vs box, using the closest point on the box to the circle center
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = center.clamp(rect.pos, rect.pos + rect.size);
    center.distance_squared(closest) < radius * radius
}

/// Swept landing test for a bottom edge moving downward
///
/// True when the edge was at or above `top` (give or take `tolerance`) on the
/// previous tick and is at or below it now. A plain overlap test would miss a
/// thin surface once the per-tick displacement exceeds its thickness.
#[inline]
pub fn crossed_top(prev_bottom: f32, new_bottom: f32, top: f32, tolerance: f32) -> bool {
    prev_bottom <= top + tolerance && new_bottom >= top
}
