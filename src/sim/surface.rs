//! Standable surfaces and the registry that answers height queries
//!
//! A surface is only its top edge as far as the actor is concerned. Ground
//! segments are solid down to the world floor; platforms are thin ledges
//! that can be jumped through from below.

use serde::{Deserialize, Serialize};

use super::collision::{crossed_top, spans_overlap};
use crate::consts::*;

/// What kind of surface this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceKind {
    Ground,
    Platform,
}

/// A standable segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    /// Left edge
    pub x: f32,
    /// Horizontal extent (never negative)
    pub width: f32,
    /// Y the actor's feet rest on
    pub top_y: f32,
    pub kind: SurfaceKind,
}

impl Surface {
    pub fn new(x: f32, width: f32, top_y: f32, kind: SurfaceKind) -> Self {
        Self {
            x,
            width: width.max(0.0),
            top_y,
            kind,
        }
    }

    pub fn ground(x: f32, width: f32, top_y: f32) -> Self {
        Self::new(x, width, top_y, SurfaceKind::Ground)
    }

    pub fn platform(x: f32, width: f32, top_y: f32) -> Self {
        Self::new(x, width, top_y, SurfaceKind::Platform)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Half-open containment: [x, right)
    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.x && x < self.right()
    }

    /// How far below the top an incoming bottom edge may be and still land
    fn landing_tolerance(&self) -> f32 {
        match self.kind {
            SurfaceKind::Ground => STEP_UP_TOLERANCE,
            SurfaceKind::Platform => 0.0,
        }
    }
}

/// All live surfaces, ordered by left edge
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurfaceRegistry {
    surfaces: Vec<Surface>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert keeping the left-edge ordering
    pub fn push(&mut self, surface: Surface) {
        let idx = self.surfaces.partition_point(|s| s.x <= surface.x);
        self.surfaces.insert(idx, surface);
    }

    pub fn all(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Top Y of the surface spanning `x`, or None over a gap
    ///
    /// Where a platform hangs over ground, the higher of the two wins.
    pub fn height_at(&self, x: f32) -> Option<f32> {
        self.surfaces
            .iter()
            .filter(|s| s.contains_x(x))
            .map(|s| s.top_y)
            .min_by(f32::total_cmp)
    }

    /// Rightmost X covered by any surface
    pub fn rightmost_edge(&self) -> Option<f32> {
        self.surfaces.iter().map(Surface::right).max_by(f32::total_cmp)
    }

    /// Move every surface left by `dx`
    pub fn scroll(&mut self, dx: f32) {
        for surface in &mut self.surfaces {
            surface.x -= dx;
        }
    }

    /// Drop surfaces that have fully left the trailing edge. Returns how many.
    pub fn prune(&mut self, trailing_edge: f32) -> usize {
        let before = self.surfaces.len();
        self.surfaces.retain(|s| s.right() >= trailing_edge);
        before - self.surfaces.len()
    }

    /// Swept landing query for a bottom edge moving from `prev_bottom` to `new_bottom`
    ///
    /// Returns the top Y of the first surface crossed (the highest one) among
    /// those horizontally overlapping `[left, right)`.
    pub fn landing_top(&self, left: f32, right: f32, prev_bottom: f32, new_bottom: f32) -> Option<f32> {
        self.surfaces
            .iter()
            .filter(|s| spans_overlap(left, right, s.x, s.right()))
            .filter(|s| crossed_top(prev_bottom, new_bottom, s.top_y, s.landing_tolerance()))
            .map(|s| s.top_y)
            .min_by(f32::total_cmp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SurfaceRegistry {
        let mut reg = SurfaceRegistry::new();
        reg.push(Surface::ground(0.0, 200.0, 620.0));
        reg.push(Surface::ground(300.0, 200.0, 580.0));
        reg.push(Surface::platform(100.0, 80.0, 450.0));
        reg
    }

    #[test]
    fn test_registry_keeps_order() {
        let reg = registry();
        let xs: Vec<f32> = reg.all().iter().map(|s| s.x).collect();
        assert_eq!(xs, vec![0.0, 100.0, 300.0]);
    }

    #[test]
    fn test_height_at() {
        let reg = registry();
        assert_eq!(reg.height_at(50.0), Some(620.0));
        // Platform above ground: platform wins
        assert_eq!(reg.height_at(120.0), Some(450.0));
        // Gap
        assert_eq!(reg.height_at(250.0), None);
        assert_eq!(reg.height_at(350.0), Some(580.0));
        // Right edge is exclusive
        assert_eq!(reg.height_at(500.0), None);
    }

    #[test]
    fn test_scroll_and_prune() {
        let mut reg = registry();
        reg.scroll(250.0);
        assert_eq!(reg.all()[0].x, -250.0);
        // Ground [−250, −50) and platform [−150, −70) are gone
        assert_eq!(reg.prune(0.0), 2);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.rightmost_edge(), Some(250.0));
    }

    #[test]
    fn test_landing_prefers_highest_crossed() {
        let reg = registry();
        // Falling from above the platform through both it and the ground
        let top = reg.landing_top(110.0, 160.0, 440.0, 640.0);
        assert_eq!(top, Some(450.0));
        // Below the platform already: only the ground is crossed
        let top = reg.landing_top(110.0, 160.0, 600.0, 625.0);
        assert_eq!(top, Some(620.0));
    }

    #[test]
    fn test_ground_step_up_tolerance() {
        let reg = registry();
        // Feet 8px below a ground top still snap up
        assert_eq!(reg.landing_top(320.0, 370.0, 588.0, 588.8), Some(580.0));
        // A 40px step does not
        assert_eq!(reg.landing_top(320.0, 370.0, 620.0, 620.8), None);
    }

    #[test]
    fn test_surface_width_never_negative() {
        let s = Surface::platform(10.0, -4.0, 400.0);
        assert_eq!(s.width, 0.0);
    }
}
