//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod lifecycle;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod surface;
pub mod terrain;
pub mod tick;

pub use actor::{Actor, ActorPose, jump_airtime, jump_apex, jump_reach};
pub use collision::Rect;
pub use spawner::min_hazard_spacing;
pub use state::{
    Booster, Collectible, GameEvent, GamePhase, GameState, Hazard, HazardKind, Projectile,
    Response, RunOverCause, RunState, World,
};
pub use surface::{Surface, SurfaceKind, SurfaceRegistry};
pub use terrain::{PatternKind, TerrainGenerator};
pub use tick::{TickInput, tick};
