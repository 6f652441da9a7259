//! Hazard and pickup placement with fairness rules
//!
//! The terrain builders decide *where* something could go; the spawner
//! decides whether it may. Two rules hold for every hazard it places, across
//! pattern boundaries as well as inside one pattern:
//! - the clear gap to the previous hazard is at least `min_hazard_spacing(speed)`
//! - two must-shoot hazards never follow each other

use glam::Vec2;

use super::collision::Rect;
use super::rng::GenRng;
use super::state::{Hazard, HazardKind, World};
use crate::consts::*;

/// Ground hazard size ranges (width, height)
const GROUND_HAZARD_WIDTH: (f32, f32) = (30.0, 50.0);
const GROUND_HAZARD_HEIGHT: (f32, f32) = (40.0, 80.0);
/// Flying hazards hover just above a crouched actor
const FLYING_HAZARD_SIZE: Vec2 = Vec2::new(40.0, 30.0);
const FLYING_CLEARANCE: f32 = CROUCH_HEIGHT + 10.0;
/// Scope hazards stand twice the actor's height
const SCOPE_HAZARD_SIZE: Vec2 = Vec2::new(40.0, ACTOR_HEIGHT * 2.0);

/// Pickups float this far above the surface they belong to
const PICKUP_LIFT: (f32, f32) = (60.0, 110.0);

/// Minimum clear gap between consecutive hazards at a given scroll speed
///
/// Grows linearly with speed so the time to react never shrinks.
pub fn min_hazard_spacing(speed: f32) -> f32 {
    HAZARD_BASE_SPACING + speed.max(0.0) * HAZARD_SPACING_PER_SPEED
}

/// Which edge of the hazard a placement is anchored to
#[derive(Debug, Clone, Copy)]
pub enum Anchor {
    /// Hazard's left edge at this X
    Start(f32),
    /// Hazard's right edge at this X
    End(f32),
}

/// A candidate hazard placement on one surface
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub kind: HazardKind,
    pub anchor: Anchor,
    /// Horizontal span the hazard must fit inside
    pub span: (f32, f32),
    /// Top Y of the surface under it
    pub surface_top: f32,
}

/// Fairness cursor shared by every pattern builder
#[derive(Debug, Clone)]
pub struct Spawner {
    /// Right edge of the most recently placed hazard
    last_hazard_x: f32,
    last_kind: Option<HazardKind>,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            last_hazard_x: f32::NEG_INFINITY,
            last_kind: None,
        }
    }
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_hazard_x(&self) -> f32 {
        self.last_hazard_x
    }

    /// Keep the cursor in screen space as the world scrolls
    pub fn scroll(&mut self, dx: f32) {
        self.last_hazard_x -= dx;
    }

    /// Leftmost X the next hazard may start at
    pub fn earliest_hazard_x(&self, speed: f32) -> f32 {
        self.last_hazard_x + min_hazard_spacing(speed)
    }

    /// Swap out kinds that may not follow the previous hazard
    pub fn resolve_kind(&self, wanted: HazardKind) -> HazardKind {
        match (self.last_kind, wanted) {
            (Some(HazardKind::Scope), HazardKind::Scope) => HazardKind::Ground,
            _ => wanted,
        }
    }

    fn hazard_size(kind: HazardKind, rng: &mut GenRng) -> Vec2 {
        match kind {
            HazardKind::Ground => Vec2::new(
                rng.range(GROUND_HAZARD_WIDTH.0, GROUND_HAZARD_WIDTH.1),
                rng.range(GROUND_HAZARD_HEIGHT.0, GROUND_HAZARD_HEIGHT.1),
            ),
            HazardKind::Flying => FLYING_HAZARD_SIZE,
            HazardKind::Scope => SCOPE_HAZARD_SIZE,
        }
    }

    /// Try to place a hazard; returns its right edge when placed
    ///
    /// The hazard is pushed right as far as the spacing rule requires, and
    /// refused if it would then stick out of its span.
    pub fn place_hazard(&mut self, world: &mut World, rng: &mut GenRng, placement: Placement, speed: f32) -> Option<f32> {
        let kind = self.resolve_kind(placement.kind);
        let size = Self::hazard_size(kind, rng);

        let wanted_x = match placement.anchor {
            Anchor::Start(x) => x,
            Anchor::End(x) => x - size.x,
        };
        let x = wanted_x.max(self.earliest_hazard_x(speed));
        let (span_start, span_end) = placement.span;
        if x < span_start || x + size.x > span_end {
            return None;
        }

        let y = match kind {
            HazardKind::Ground | HazardKind::Scope => placement.surface_top - size.y,
            HazardKind::Flying => placement.surface_top - FLYING_CLEARANCE - size.y,
        };
        let id = world.next_entity_id();
        world.hazards.push(Hazard {
            id,
            kind,
            rect: Rect::new(x, y, size.x, size.y),
        });

        self.last_hazard_x = x + size.x;
        self.last_kind = Some(kind);
        Some(x + size.x)
    }

    /// Drop an ammo or thrust pickup above a surface point
    pub fn place_pickup(&mut self, world: &mut World, rng: &mut GenRng, x: f32, surface_top: f32, booster_share: f32) {
        let center = Vec2::new(x, surface_top - rng.range(PICKUP_LIFT.0, PICKUP_LIFT.1));
        if rng.chance(booster_share) {
            world.spawn_booster(center);
        } else {
            world.spawn_collectible(center);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_ground(kind: HazardKind, x: f32) -> Placement {
        Placement {
            kind,
            anchor: Anchor::Start(x),
            span: (0.0, 10_000.0),
            surface_top: GROUND_Y,
        }
    }

    #[test]
    fn test_spacing_grows_with_speed() {
        assert_eq!(min_hazard_spacing(0.0), HAZARD_BASE_SPACING);
        assert!(min_hazard_spacing(15.0) > min_hazard_spacing(6.0));
    }

    #[test]
    fn test_second_hazard_pushed_right() {
        let mut world = World::new();
        let mut rng = GenRng::seeded(5);
        let mut spawner = Spawner::new();
        let speed = 6.0;

        let first_end = spawner
            .place_hazard(&mut world, &mut rng, on_ground(HazardKind::Ground, 100.0), speed)
            .unwrap();
        spawner
            .place_hazard(&mut world, &mut rng, on_ground(HazardKind::Ground, 120.0), speed)
            .unwrap();

        let second = &world.hazards[1];
        assert!((second.rect.left() - (first_end + min_hazard_spacing(speed))).abs() < 1e-3);
    }

    #[test]
    fn test_refused_when_pushed_out_of_span() {
        let mut world = World::new();
        let mut rng = GenRng::seeded(5);
        let mut spawner = Spawner::new();
        spawner.place_hazard(&mut world, &mut rng, on_ground(HazardKind::Ground, 100.0), 6.0);

        let tight = Placement {
            span: (120.0, 300.0),
            ..on_ground(HazardKind::Ground, 120.0)
        };
        assert_eq!(spawner.place_hazard(&mut world, &mut rng, tight, 6.0), None);
        assert_eq!(world.hazards.len(), 1);
    }

    #[test]
    fn test_no_back_to_back_scope() {
        let mut world = World::new();
        let mut rng = GenRng::seeded(5);
        let mut spawner = Spawner::new();
        spawner.place_hazard(&mut world, &mut rng, on_ground(HazardKind::Scope, 0.0), 6.0);
        spawner.place_hazard(&mut world, &mut rng, on_ground(HazardKind::Scope, 0.0), 6.0);
        assert_eq!(world.hazards[0].kind, HazardKind::Scope);
        assert_eq!(world.hazards[1].kind, HazardKind::Ground);
    }

    #[test]
    fn test_hazard_geometry() {
        let mut world = World::new();
        let mut rng = GenRng::seeded(5);
        let mut spawner = Spawner::new();
        spawner.place_hazard(&mut world, &mut rng, on_ground(HazardKind::Flying, 0.0), 6.0);
        spawner.place_hazard(&mut world, &mut rng, on_ground(HazardKind::Ground, 0.0), 6.0);

        // Flying hazard clears a crouched actor but not a standing one
        let flying = world.hazards[0].rect;
        assert!(flying.bottom() < GROUND_Y - CROUCH_HEIGHT);
        assert!(flying.bottom() > GROUND_Y - ACTOR_HEIGHT);

        // Ground hazard sits on the surface
        let ground = world.hazards[1].rect;
        assert!((ground.bottom() - GROUND_Y).abs() < 1e-3);
    }

    #[test]
    fn test_end_anchor() {
        let mut world = World::new();
        let mut rng = GenRng::seeded(5);
        let mut spawner = Spawner::new();
        let placement = Placement {
            anchor: Anchor::End(500.0),
            ..on_ground(HazardKind::Scope, 0.0)
        };
        assert_eq!(spawner.place_hazard(&mut world, &mut rng, placement, 6.0), Some(500.0));
        assert_eq!(world.hazards[0].rect.left(), 500.0 - SCOPE_HAZARD_SIZE.x);
    }
}
