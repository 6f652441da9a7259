//! Just-in-time terrain generation
//!
//! The world is built in chunks ahead of the visible right edge. Each chunk
//! is one of four patterns, never the same one twice in a row, and every
//! pattern after the first is preceded by a flat, hazard-free connector.
//!
//! Gaps are sized from the actor's exact jump arc (`jump_reach`) at the
//! speed active when the chunk is built. Speed only ever increases, so a gap
//! that was reachable when generated stays reachable.

use serde::{Deserialize, Serialize};

use super::actor::jump_reach;
use super::rng::GenRng;
use super::spawner::{Anchor, Placement, Spawner};
use super::state::{HazardKind, World};
use super::surface::Surface;
use crate::consts::*;

/// Connector between patterns
const CONNECTOR_WIDTH: f32 = 320.0;
const CONNECTOR_PICKUP_CHANCE: f32 = 0.2;

/// Share of pickups that refill thrust instead of ammo
const BOOSTER_SHARE: f32 = 0.35;

// Sprint
const SPRINT_SEGMENTS: (u32, u32) = (4, 5);
const SPRINT_SEGMENT_WIDTH: (f32, f32) = (260.0, 380.0);
const SPRINT_STEP: f32 = 36.0;
const SPRINT_ENTRY_BUFFER: f32 = 90.0;
const SPRINT_EXIT_BUFFER: f32 = 40.0;
const SPRINT_SECOND_HAZARD_MIN_WIDTH: f32 = 320.0;
const SPRINT_SECOND_HAZARD_CHANCE: f32 = 0.45;
const SPRINT_ROTATION: [HazardKind; 4] = [
    HazardKind::Ground,
    HazardKind::Flying,
    HazardKind::Ground,
    HazardKind::Scope,
];

// Island hopping
const ISLAND_COUNT: (u32, u32) = (4, 5);
const ISLAND_WIDTH: (f32, f32) = (150.0, 230.0);
const ISLAND_HEIGHT_JITTER: f32 = 40.0;
/// Gap width as a fraction of the jump reach
const ISLAND_GAP_REACH: (f32, f32) = (0.5, 0.8);
const ISLAND_MIN_GAP: f32 = 50.0;
const HELPER_CHANCE: f32 = 0.3;
const HELPER_MIN_GAP: f32 = 140.0;
const HELPER_WIDTH: f32 = 70.0;
const HELPER_LIFT: f32 = 50.0;
const ISLAND_HAZARD_CHANCE: f32 = 0.45;
const FAR_EDGE_BUFFER: f32 = 20.0;
/// Room to land before an island hazard
const LANDING_ROOM: f32 = 90.0;
/// Slack kept between hazard-plus-gap and the jump reach
const JUMP_MARGIN: f32 = 10.0;
const ISLAND_END_PICKUP_CHANCE: f32 = 0.35;

// High road
const HIGH_ROAD_COUNT: (u32, u32) = (5, 6);
const HIGH_ROAD_WIDTH: (f32, f32) = (130.0, 200.0);
const HIGH_ROAD_DROP_WEIGHT: f32 = 0.3;
const HIGH_ROAD_RISE_WEIGHT: f32 = 0.25;
const HIGH_ROAD_DROP: (f32, f32) = (60.0, 140.0);
const HIGH_ROAD_BIG_RISE: (f32, f32) = (80.0, 120.0);
const HIGH_ROAD_JITTER: f32 = 30.0;
const HIGH_ROAD_GAP_REACH: (f32, f32) = (0.35, 0.6);
const HIGH_ROAD_MIN_GAP: f32 = 40.0;
const HIGH_ROAD_HAZARD_CHANCE: f32 = 0.3;
const HIGH_ROAD_HAZARD_MIN_WIDTH: f32 = 150.0;
const HIGH_ROAD_PICKUP_CHANCE: f32 = 0.6;

// Risk & reward
const LOW_PATH_LENGTH: (f32, f32) = (900.0, 1200.0);
const LOW_PATH_LEAD: f32 = 120.0;
const LOW_PATH_TAIL: f32 = 60.0;
const HIGH_PATH_LIFT: f32 = 130.0;
const HIGH_PATH_MARGIN: f32 = 150.0;
const HIGH_PATH_WIDTH: (f32, f32) = (130.0, 170.0);
const HIGH_PATH_GAP: (f32, f32) = (70.0, 130.0);
const HIGH_PATH_HAZARD_CHANCE: f32 = 0.25;
const HIGH_PATH_PICKUP_CHANCE: f32 = 0.6;
const LOW_PATH_PICKUP_CHANCE: f32 = 0.15;
/// How far to slide a slot when a placement is refused
const SLOT_NUDGE: f32 = 40.0;
const LOW_PATH_KINDS: [HazardKind; 4] = [
    HazardKind::Ground,
    HazardKind::Flying,
    HazardKind::Scope,
    HazardKind::Ground,
];

/// The four chunk layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternKind {
    Sprint,
    IslandHopping,
    HighRoad,
    RiskReward,
}

impl PatternKind {
    pub const ALL: [PatternKind; 4] = [
        PatternKind::Sprint,
        PatternKind::IslandHopping,
        PatternKind::HighRoad,
        PatternKind::RiskReward,
    ];
}

/// Generator state threaded through every chunk
#[derive(Debug, Clone)]
pub struct TerrainGenerator {
    last_pattern: Option<PatternKind>,
    pending_connector: bool,
    /// Rightmost generated X (screen space, scrolls with the world)
    frontier_x: f32,
    /// Top Y of the last surface laid, where the next chunk continues from
    last_top_y: f32,
    sprint_rotation: usize,
    spawner: Spawner,
    rng: GenRng,
}

impl TerrainGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            last_pattern: None,
            pending_connector: false,
            frontier_x: 0.0,
            last_top_y: GROUND_Y,
            sprint_rotation: 0,
            spawner: Spawner::new(),
            rng: GenRng::seeded(seed),
        }
    }

    pub fn frontier_x(&self) -> f32 {
        self.frontier_x
    }

    pub fn last_pattern(&self) -> Option<PatternKind> {
        self.last_pattern
    }

    pub fn pending_connector(&self) -> bool {
        self.pending_connector
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    /// Flat, hazard-free runway the actor starts on
    pub fn lay_opening(&mut self, world: &mut World) {
        world
            .surfaces
            .push(Surface::ground(self.frontier_x, OPENING_RUNWAY, GROUND_Y));
        self.frontier_x += OPENING_RUNWAY;
        self.last_top_y = GROUND_Y;
    }

    /// Move the generator's cursors along with the scrolling world
    pub fn scroll(&mut self, dx: f32) {
        self.frontier_x -= dx;
        self.spawner.scroll(dx);
    }

    pub fn needs_extension(&self) -> bool {
        self.frontier_x < WORLD_WIDTH + GENERATION_LOOKAHEAD
    }

    /// Extend until the lookahead is covered. Returns how many chunks were built.
    pub fn fill_ahead(&mut self, world: &mut World, speed: f32) -> usize {
        let mut built = 0;
        while self.needs_extension() {
            self.extend(world, speed);
            built += 1;
        }
        built
    }

    /// Build one chunk (plus an owed connector) and return the new frontier
    ///
    /// Never removes anything and never moves the frontier left.
    pub fn extend(&mut self, world: &mut World, speed: f32) -> f32 {
        if self.pending_connector {
            self.build_connector(world);
            self.pending_connector = false;
        }

        let kind = self.choose_pattern();
        let start = self.frontier_x;
        let end = match kind {
            PatternKind::Sprint => self.build_sprint(world, speed),
            PatternKind::IslandHopping => self.build_island_hopping(world, speed),
            PatternKind::HighRoad => self.build_high_road(world, speed),
            PatternKind::RiskReward => self.build_risk_reward(world, speed),
        };
        self.frontier_x = self.frontier_x.max(end);
        self.last_pattern = Some(kind);
        self.pending_connector = true;

        log::debug!(
            "Generated {:?} from {:.0} to {:.0} at speed {:.1}",
            kind,
            start,
            self.frontier_x,
            speed
        );
        self.frontier_x
    }

    /// Uniform over every kind except the previous one
    fn choose_pattern(&mut self) -> PatternKind {
        let candidates: Vec<PatternKind> = PatternKind::ALL
            .into_iter()
            .filter(|kind| Some(*kind) != self.last_pattern)
            .collect();
        self.rng.pick(&candidates)
    }

    fn build_connector(&mut self, world: &mut World) {
        let top = self.last_top_y.clamp(GROUND_MIN_Y, GROUND_MAX_Y);
        let x = self.frontier_x;
        world.surfaces.push(Surface::ground(x, CONNECTOR_WIDTH, top));

        if self.rng.chance(CONNECTOR_PICKUP_CHANCE) {
            self.spawner
                .place_pickup(world, &mut self.rng, x + CONNECTOR_WIDTH / 2.0, top, BOOSTER_SHARE);
        }

        self.frontier_x = x + CONNECTOR_WIDTH;
        self.last_top_y = top;
    }

    /// Stepped ground run with a hazard near each entry
    fn build_sprint(&mut self, world: &mut World, speed: f32) -> f32 {
        let count = self.rng.count(SPRINT_SEGMENTS.0, SPRINT_SEGMENTS.1);
        let mut x = self.frontier_x;
        let mut top = self.last_top_y.clamp(GROUND_MIN_Y, GROUND_MAX_Y);

        for _ in 0..count {
            let direction = if self.rng.chance(0.5) { 1.0 } else { -1.0 };
            let mut next = (top + direction * SPRINT_STEP).clamp(GROUND_MIN_Y, GROUND_MAX_Y);
            if next == top {
                next = (top - direction * SPRINT_STEP).clamp(GROUND_MIN_Y, GROUND_MAX_Y);
            }
            top = next;

            let width = self.rng.range(SPRINT_SEGMENT_WIDTH.0, SPRINT_SEGMENT_WIDTH.1);
            world.surfaces.push(Surface::ground(x, width, top));

            let kind = SPRINT_ROTATION[self.sprint_rotation % SPRINT_ROTATION.len()];
            self.sprint_rotation += 1;
            self.spawner.place_hazard(
                world,
                &mut self.rng,
                Placement {
                    kind,
                    anchor: Anchor::Start(x + SPRINT_ENTRY_BUFFER),
                    span: (x, x + width),
                    surface_top: top,
                },
                speed,
            );

            if width >= SPRINT_SECOND_HAZARD_MIN_WIDTH && self.rng.chance(SPRINT_SECOND_HAZARD_CHANCE) {
                let kind = self.rng.pick(&[HazardKind::Ground, HazardKind::Flying]);
                self.spawner.place_hazard(
                    world,
                    &mut self.rng,
                    Placement {
                        kind,
                        anchor: Anchor::End(x + width - SPRINT_EXIT_BUFFER),
                        span: (x, x + width),
                        surface_top: top,
                    },
                    speed,
                );
            }

            x += width;
        }

        self.last_top_y = top;
        x
    }

    /// Short islands over gaps near the edge of jump range
    fn build_island_hopping(&mut self, world: &mut World, speed: f32) -> f32 {
        let count = self.rng.count(ISLAND_COUNT.0, ISLAND_COUNT.1);
        let mut x = self.frontier_x;
        let mut prev_top = self.last_top_y;
        // Horizontal room the previous island's hazard takes out of the next jump
        let mut hazard_clearance = 0.0;

        for _ in 0..count {
            let top = (prev_top + self.rng.range(-ISLAND_HEIGHT_JITTER, ISLAND_HEIGHT_JITTER))
                .clamp(GROUND_MIN_Y, GROUND_MAX_Y);
            let reach = jump_reach(prev_top - top, speed);
            let max_gap = (reach * ISLAND_GAP_REACH.1 - hazard_clearance).max(ISLAND_MIN_GAP);
            let min_gap = (reach * ISLAND_GAP_REACH.0).clamp(ISLAND_MIN_GAP, max_gap);
            let gap = self.rng.range(min_gap, max_gap);

            if gap >= HELPER_MIN_GAP && self.rng.chance(HELPER_CHANCE) {
                let helper_x = x + (gap - HELPER_WIDTH) / 2.0;
                let helper_top =
                    (prev_top.min(top) - HELPER_LIFT).clamp(PLATFORM_MIN_Y, PLATFORM_MAX_Y);
                world.surfaces.push(Surface::platform(helper_x, HELPER_WIDTH, helper_top));
            }
            x += gap;

            let width = self.rng.range(ISLAND_WIDTH.0, ISLAND_WIDTH.1);
            world.surfaces.push(Surface::ground(x, width, top));

            hazard_clearance = 0.0;
            if self.rng.chance(ISLAND_HAZARD_CHANCE) {
                let kind = self.rng.pick(&[HazardKind::Ground, HazardKind::Flying]);
                let placed = self.spawner.place_hazard(
                    world,
                    &mut self.rng,
                    Placement {
                        kind,
                        anchor: Anchor::End(x + width - FAR_EDGE_BUFFER),
                        span: (x + LANDING_ROOM, x + width),
                        surface_top: top,
                    },
                    speed,
                );
                if let Some(right) = placed {
                    let left = world.hazards.last().map_or(right, |h| h.rect.left());
                    hazard_clearance = (x + width - left) + JUMP_MARGIN;
                }
            }

            x += width;
            prev_top = top;
        }

        if self.rng.chance(ISLAND_END_PICKUP_CHANCE) {
            self.spawner
                .place_pickup(world, &mut self.rng, x - ISLAND_WIDTH.0 / 2.0, prev_top, BOOSTER_SHARE);
        }

        self.last_top_y = prev_top;
        x
    }

    /// Floating platforms climbing and dropping through the platform band
    fn build_high_road(&mut self, world: &mut World, speed: f32) -> f32 {
        let count = self.rng.count(HIGH_ROAD_COUNT.0, HIGH_ROAD_COUNT.1);
        let mut x = self.frontier_x;
        let mut prev_top = self.last_top_y;
        let mut highest: Option<Surface> = None;

        for _ in 0..count {
            let roll = self.rng.unit();
            let offset = if roll < HIGH_ROAD_DROP_WEIGHT {
                self.rng.range(HIGH_ROAD_DROP.0, HIGH_ROAD_DROP.1)
            } else if roll < HIGH_ROAD_DROP_WEIGHT + HIGH_ROAD_RISE_WEIGHT {
                -self.rng.range(HIGH_ROAD_BIG_RISE.0, HIGH_ROAD_BIG_RISE.1)
            } else {
                self.rng.range(-HIGH_ROAD_JITTER, HIGH_ROAD_JITTER)
            };
            let top = (prev_top + offset).clamp(PLATFORM_MIN_Y, PLATFORM_MAX_Y);

            let reach = jump_reach(prev_top - top, speed);
            let gap = (reach * self.rng.range(HIGH_ROAD_GAP_REACH.0, HIGH_ROAD_GAP_REACH.1))
                .max(HIGH_ROAD_MIN_GAP);
            x += gap;

            let width = self.rng.range(HIGH_ROAD_WIDTH.0, HIGH_ROAD_WIDTH.1);
            let platform = Surface::platform(x, width, top);
            world.surfaces.push(platform);

            // Flying hazards sit mid-platform so the landing edge stays clear
            if width >= HIGH_ROAD_HAZARD_MIN_WIDTH && self.rng.chance(HIGH_ROAD_HAZARD_CHANCE) {
                self.spawner.place_hazard(
                    world,
                    &mut self.rng,
                    Placement {
                        kind: HazardKind::Flying,
                        anchor: Anchor::Start(x + width / 2.0 - 20.0),
                        span: (x + width / 2.0 - 20.0, x + width),
                        surface_top: top,
                    },
                    speed,
                );
            }

            if highest.is_none_or(|h| top < h.top_y) {
                highest = Some(platform);
            }

            x += width;
            prev_top = top;
        }

        if let Some(peak) = highest {
            if self.rng.chance(HIGH_ROAD_PICKUP_CHANCE) {
                self.spawner.place_pickup(
                    world,
                    &mut self.rng,
                    peak.x + peak.width / 2.0,
                    peak.top_y,
                    BOOSTER_SHARE,
                );
            }
        }

        self.last_top_y = prev_top;
        x
    }

    /// Dense low road under a sparse, pickup-rich row of platforms
    fn build_risk_reward(&mut self, world: &mut World, speed: f32) -> f32 {
        let start = self.frontier_x;
        let length = self.rng.range(LOW_PATH_LENGTH.0, LOW_PATH_LENGTH.1);
        let end = start + length;
        let low_top = self.last_top_y.clamp(GROUND_MIN_Y, GROUND_MAX_Y);
        let high_top = low_top - HIGH_PATH_LIFT;
        world.surfaces.push(Surface::ground(start, length, low_top));

        // High path
        let mut high_path = Vec::new();
        let mut x = start + HIGH_PATH_MARGIN;
        loop {
            let width = self.rng.range(HIGH_PATH_WIDTH.0, HIGH_PATH_WIDTH.1);
            if x + width > end - HIGH_PATH_MARGIN {
                break;
            }
            let platform = Surface::platform(x, width, high_top);
            world.surfaces.push(platform);
            high_path.push(platform);
            x += width + self.rng.range(HIGH_PATH_GAP.0, HIGH_PATH_GAP.1);
        }

        // One hazard per rhythm slot, on the low road unless the high path takes it
        let mut slot = start + LOW_PATH_LEAD;
        while slot < end - LOW_PATH_TAIL {
            let above = high_path.iter().find(|p| p.contains_x(slot)).copied();
            let placement = match above {
                Some(platform) if self.rng.chance(HIGH_PATH_HAZARD_CHANCE) => Placement {
                    kind: self.rng.pick(&[HazardKind::Ground, HazardKind::Flying]),
                    anchor: Anchor::Start(slot),
                    span: (platform.x, platform.right()),
                    surface_top: platform.top_y,
                },
                _ => Placement {
                    kind: self.rng.pick(&LOW_PATH_KINDS),
                    anchor: Anchor::Start(slot),
                    span: (start, end - LOW_PATH_TAIL),
                    surface_top: low_top,
                },
            };

            slot = match self.spawner.place_hazard(world, &mut self.rng, placement, speed) {
                Some(_) => self.spawner.earliest_hazard_x(speed),
                None => slot.max(self.spawner.earliest_hazard_x(speed)) + SLOT_NUDGE,
            };
        }

        for platform in &high_path {
            if self.rng.chance(HIGH_PATH_PICKUP_CHANCE) {
                self.spawner.place_pickup(
                    world,
                    &mut self.rng,
                    platform.x + platform.width / 2.0,
                    platform.top_y,
                    BOOSTER_SHARE,
                );
            }
        }
        if self.rng.chance(LOW_PATH_PICKUP_CHANCE) {
            let px = self.rng.range(start + LOW_PATH_LEAD, end - LOW_PATH_TAIL);
            self.spawner
                .place_pickup(world, &mut self.rng, px, low_top, BOOSTER_SHARE);
        }

        self.last_top_y = low_top;
        end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawner::min_hazard_spacing;
    use crate::sim::surface::SurfaceKind;
    use proptest::prelude::*;

    /// Build a long stretch of terrain at a fixed speed
    fn generate(seed: u64, speed: f32, chunks: usize) -> (TerrainGenerator, World) {
        let mut world = World::new();
        let mut generator = TerrainGenerator::new(seed);
        generator.lay_opening(&mut world);
        for _ in 0..chunks {
            generator.extend(&mut world, speed);
        }
        (generator, world)
    }

    /// Rounding allowance for f32 coordinates far from the origin
    fn slack(x: f32) -> f32 {
        1e-3 + x.abs() * f32::EPSILON * 4.0
    }

    fn grounds(world: &World) -> Vec<Surface> {
        world
            .surfaces
            .all()
            .iter()
            .filter(|s| s.kind == SurfaceKind::Ground)
            .copied()
            .collect()
    }

    #[test]
    fn test_opening_runway() {
        let (generator, world) = generate(1, BASE_SPEED, 0);
        assert_eq!(world.surfaces.len(), 1);
        assert_eq!(generator.frontier_x(), OPENING_RUNWAY);
        assert!(world.hazards.is_empty());
        assert!(!generator.pending_connector());
    }

    #[test]
    fn test_connector_between_patterns() {
        let (mut generator, mut world) = generate(3, BASE_SPEED, 1);
        assert!(generator.pending_connector());
        let frontier = generator.frontier_x();
        let hazards_before = world.hazards.len();

        generator.extend(&mut world, BASE_SPEED);
        let connector = world
            .surfaces
            .all()
            .iter()
            .find(|s| s.x == frontier)
            .copied()
            .unwrap();
        assert_eq!(connector.kind, SurfaceKind::Ground);
        assert_eq!(connector.width, CONNECTOR_WIDTH);
        // No hazard lands on the connector
        assert!(
            world.hazards[hazards_before..]
                .iter()
                .all(|h| h.rect.left() >= connector.right() || h.rect.right() <= connector.x)
        );
    }

    #[test]
    fn test_fill_ahead_covers_lookahead() {
        let mut world = World::new();
        let mut generator = TerrainGenerator::new(11);
        generator.lay_opening(&mut world);
        generator.fill_ahead(&mut world, BASE_SPEED);
        assert!(!generator.needs_extension());
        assert_eq!(world.surfaces.rightmost_edge(), Some(generator.frontier_x()));
    }

    #[test]
    fn test_same_seed_same_terrain() {
        let (_, a) = generate(77, 8.0, 12);
        let (_, b) = generate(77, 8.0, 12);
        assert_eq!(a.surfaces.all(), b.surfaces.all());
        assert_eq!(a.hazards.len(), b.hazards.len());
    }

    #[test]
    fn test_scroll_moves_cursors() {
        let (mut generator, _) = generate(5, BASE_SPEED, 2);
        let frontier = generator.frontier_x();
        let last = generator.spawner().last_hazard_x();
        generator.scroll(10.0);
        assert_eq!(generator.frontier_x(), frontier - 10.0);
        assert_eq!(generator.spawner().last_hazard_x(), last - 10.0);
    }

    proptest! {
        #[test]
        fn prop_island_gaps_within_reach(seed in any::<u64>(), speed in BASE_SPEED..=MAX_SPEED) {
            let (_, world) = generate(seed, speed, 16);
            let grounds = grounds(&world);
            for pair in grounds.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if b.x <= a.right() {
                    continue;
                }
                let bridged = world
                    .surfaces
                    .all()
                    .iter()
                    .any(|s| s.kind == SurfaceKind::Platform && s.x < b.x && s.right() > a.right());
                let gap = b.x - a.right();
                let reach = jump_reach(a.top_y - b.top_y, speed);
                prop_assert!(bridged || gap <= reach, "gap {} > reach {}", gap, reach);
            }
        }

        #[test]
        fn prop_hazard_spacing(seed in any::<u64>(), speed in BASE_SPEED..=MAX_SPEED) {
            let (_, world) = generate(seed, speed, 16);
            let mut hazards = world.hazards.clone();
            hazards.sort_by(|a, b| a.rect.left().total_cmp(&b.rect.left()));
            for pair in hazards.windows(2) {
                let gap = pair[1].rect.left() - pair[0].rect.right();
                prop_assert!(gap >= min_hazard_spacing(speed) - slack(pair[1].rect.left()));
                prop_assert!(
                    !(pair[0].kind == HazardKind::Scope && pair[1].kind == HazardKind::Scope)
                );
            }
        }

        #[test]
        fn prop_patterns_never_repeat(seed in any::<u64>()) {
            let mut world = World::new();
            let mut generator = TerrainGenerator::new(seed);
            generator.lay_opening(&mut world);
            let mut previous = None;
            let mut frontier = generator.frontier_x();
            for _ in 0..20 {
                let surfaces_before = world.surfaces.len();
                let next = generator.extend(&mut world, BASE_SPEED);
                prop_assert!(next > frontier);
                prop_assert!(world.surfaces.len() > surfaces_before);
                prop_assert!(generator.last_pattern() != previous);
                previous = generator.last_pattern();
                frontier = next;
            }
        }

        #[test]
        fn prop_surfaces_stay_in_bands(seed in any::<u64>(), speed in BASE_SPEED..=MAX_SPEED) {
            let (_, world) = generate(seed, speed, 12);
            for surface in world.surfaces.all() {
                prop_assert!(surface.width > 0.0);
                match surface.kind {
                    SurfaceKind::Ground => {
                        prop_assert!((GROUND_MIN_Y..=GROUND_MAX_Y).contains(&surface.top_y));
                    }
                    SurfaceKind::Platform => {
                        prop_assert!((PLATFORM_MIN_Y..=PLATFORM_MAX_Y).contains(&surface.top_y));
                    }
                }
            }
        }

        #[test]
        fn prop_hazards_rest_on_surfaces(seed in any::<u64>()) {
            let (_, world) = generate(seed, BASE_SPEED, 12);
            for hazard in &world.hazards {
                let supported = world.surfaces.all().iter().any(|s| {
                    hazard.rect.left() >= s.x && hazard.rect.right() <= s.right() + slack(s.right())
                });
                prop_assert!(supported);
            }
        }
    }
}
