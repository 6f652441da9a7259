//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here, owned by one `GameState`.
//! Presentation code only ever reads it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorPose};
use super::collision::Rect;
use super::surface::SurfaceRegistry;
use super::terrain::TerrainGenerator;
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; world is frozen until restart
    GameOver,
}

/// What a hazard demands from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    JumpOrShoot,
    DuckOrShoot,
    MustShoot,
}

/// Hazard types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    /// Sits on a surface; jump it or shoot it
    Ground,
    /// Hovers at head height; duck under it or shoot it
    Flying,
    /// Tall blocker; shoot it
    Scope,
}

impl HazardKind {
    pub fn response(self) -> Response {
        match self {
            HazardKind::Ground => Response::JumpOrShoot,
            HazardKind::Flying => Response::DuckOrShoot,
            HazardKind::Scope => Response::MustShoot,
        }
    }

    /// Score for destroying this hazard with a projectile
    pub fn shot_bonus(self) -> u64 {
        match self.response() {
            Response::MustShoot => MUST_SHOOT_BONUS,
            Response::JumpOrShoot | Response::DuckOrShoot => SHOT_BONUS,
        }
    }
}

/// An obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub kind: HazardKind,
    pub rect: Rect,
}

impl Hazard {
    pub fn response(&self) -> Response {
        self.kind.response()
    }
}

/// Ammo refill (circle)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub center: Vec2,
    pub radius: f32,
}

/// Thrust refill (box)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booster {
    pub id: u32,
    pub rect: Rect,
}

/// Actor-fired shot travelling right
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub rect: Rect,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOverCause {
    HitHazard(HazardKind),
    FellOut,
}

/// Transient feedback for the presentation layer, cleared every tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired { pos: Vec2 },
    HazardShot { kind: HazardKind, pos: Vec2, bonus: u64 },
    AmmoCollected { pos: Vec2, ammo: u32, bonus: u64 },
    ThrustCollected { pos: Vec2, thrust: f32, bonus: u64 },
    RunOver { cause: RunOverCause, score: u64 },
    NewBestScore { score: u64 },
}

/// Score, speed and the bounded resources of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    pub score: u64,
    pub best_score: u64,
    /// Scroll speed in pixels per tick
    pub speed: f32,
    pub ammo: u32,
    /// Thrust resource, 0..=THRUST_MAX
    pub thrust: f32,
    /// Score at which the next speed step happens
    next_speed_score: u64,
}

impl RunState {
    pub fn new(best_score: u64) -> Self {
        Self {
            score: 0,
            best_score,
            speed: BASE_SPEED,
            ammo: AMMO_START,
            thrust: THRUST_START,
            next_speed_score: SPEED_STEP_SCORE,
        }
    }

    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Step speed up for every threshold the score has passed. Never decreases.
    pub fn advance_speed(&mut self) {
        while self.score >= self.next_speed_score {
            self.speed = (self.speed + SPEED_STEP).min(MAX_SPEED);
            self.next_speed_score += SPEED_STEP_SCORE;
        }
    }

    pub fn add_ammo(&mut self, amount: u32) {
        self.ammo = self.ammo.saturating_add(amount).min(AMMO_MAX);
    }

    /// Spend one round; false when empty
    pub fn take_ammo(&mut self) -> bool {
        if self.ammo == 0 {
            return false;
        }
        self.ammo -= 1;
        true
    }

    pub fn add_thrust(&mut self, amount: f32) {
        self.thrust = (self.thrust + amount).clamp(0.0, THRUST_MAX);
    }

    /// Thrust resource as a 0..=100 percentage
    pub fn thrust_percent(&self) -> f32 {
        self.thrust / THRUST_MAX * 100.0
    }
}

/// Every live entity plus the surfaces they stand on
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    pub surfaces: SurfaceRegistry,
    pub hazards: Vec<Hazard>,
    pub collectibles: Vec<Collectible>,
    pub boosters: Vec<Booster>,
    pub projectiles: Vec<Projectile>,
    next_id: u32,
}

impl World {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn spawn_collectible(&mut self, center: Vec2) {
        let id = self.next_entity_id();
        self.collectibles.push(Collectible {
            id,
            center,
            radius: COLLECTIBLE_RADIUS,
        });
    }

    pub fn spawn_booster(&mut self, center: Vec2) {
        let id = self.next_entity_id();
        let half = BOOSTER_SIZE / 2.0;
        self.boosters.push(Booster {
            id,
            rect: Rect::new(center.x - half, center.y - half, BOOSTER_SIZE, BOOSTER_SIZE),
        });
    }

    pub fn spawn_projectile(&mut self, pos: Vec2) {
        let id = self.next_entity_id();
        self.projectiles.push(Projectile {
            id,
            rect: Rect::new(pos.x, pos.y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
        });
    }

    /// Keep entity lists sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.hazards.sort_by_key(|h| h.id);
        self.collectibles.sort_by_key(|c| c.id);
        self.boosters.sort_by_key(|b| b.id);
        self.projectiles.sort_by_key(|p| p.id);
    }
}

/// Complete run state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub run: RunState,
    pub actor: Actor,
    pub world: World,
    pub generator: TerrainGenerator,
    /// Feedback produced by the latest tick
    pub events: Vec<GameEvent>,
    pub over_cause: Option<RunOverCause>,
    last_shot_tick: Option<u64>,
}

impl GameState {
    /// Start a run with the given seed and the best score read at startup
    pub fn new(seed: u64, best_score: u64) -> Self {
        let mut world = World::new();
        let mut generator = TerrainGenerator::new(seed);
        generator.lay_opening(&mut world);

        let run = RunState::new(best_score);
        generator.fill_ahead(&mut world, run.speed);

        log::info!("Run started with seed {} (best {})", seed, best_score);

        Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::Running,
            run,
            actor: Actor::default(),
            world,
            generator,
            events: Vec::new(),
            over_cause: None,
            last_shot_tick: None,
        }
    }

    /// Throw everything away and start over, keeping only the best score
    pub fn restart(&mut self, seed: u64) {
        let best = self.run.best_score;
        *self = Self::new(seed, best);
        log::info!("Run restarted with seed {}", seed);
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u64 {
        self.run.score
    }

    pub fn best_score(&self) -> u64 {
        self.run.best_score
    }

    pub fn ammo(&self) -> u32 {
        self.run.ammo
    }

    pub fn thrust_percent(&self) -> f32 {
        self.run.thrust_percent()
    }

    pub fn actor_pose(&self) -> ActorPose {
        self.actor.pose()
    }

    /// Fire a projectile if there is ammo and the cooldown has elapsed
    pub fn try_shoot(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        if let Some(last) = self.last_shot_tick {
            if self.time_ticks.saturating_sub(last) < SHOOT_COOLDOWN_TICKS {
                return false;
            }
        }
        if !self.run.take_ammo() {
            return false;
        }

        let pos = Vec2::new(
            self.actor.right(),
            self.actor.top() + self.actor.size.y / 2.0 - PROJECTILE_HEIGHT / 2.0,
        );
        self.world.spawn_projectile(pos);
        self.last_shot_tick = Some(self.time_ticks);
        self.events.push(GameEvent::ShotFired { pos });
        true
    }

    /// Terminal condition: freeze the run and settle the best score
    pub fn end_run(&mut self, cause: RunOverCause) {
        if self.is_over() {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.over_cause = Some(cause);
        let score = self.run.score;
        self.events.push(GameEvent::RunOver { cause, score });
        log::info!("Run over ({:?}) at tick {} with score {}", cause, self.time_ticks, score);

        if score > self.run.best_score {
            self.run.best_score = score;
            self.events.push(GameEvent::NewBestScore { score });
            log::info!("New best score: {}", score);
        }
    }
}
