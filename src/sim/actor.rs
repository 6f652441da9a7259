//! The player-controlled actor: vertical motion, hitbox states and landing
//!
//! The actor never moves horizontally; the world scrolls past it. Each tick
//! resolves, in order: dive hitbox, thrust eligibility, one set of vertical
//! dynamics, integration with the ceiling clamp, the swept landing check and
//! finally the crouch toggle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::surface::SurfaceRegistry;
use crate::consts::*;

/// Presentation-facing summary of what the actor is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorPose {
    Grounded,
    Crouching,
    Airborne,
    FastFalling,
    Thrusting,
}

/// Per-tick movement intents the actor cares about
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveIntent {
    pub crouch_held: bool,
    pub thrust_held: bool,
}

/// Result of one physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorStep {
    /// Still inside the playable world
    InBounds,
    /// Dropped past the bottom of the world
    FellOut,
}

/// The runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner
    pub pos: Vec2,
    /// Hitbox size; height shrinks while crouching or diving
    pub size: Vec2,
    /// Vertical velocity (negative is up)
    pub vel_y: f32,
    pub grounded: bool,
    pub crouching: bool,
    pub fast_falling: bool,
    pub thrusting: bool,
}

impl Default for Actor {
    fn default() -> Self {
        Self::standing_on(GROUND_Y)
    }
}

impl Actor {
    /// A standing actor resting on a surface at `top_y`
    pub fn standing_on(top_y: f32) -> Self {
        Self {
            pos: Vec2::new(ACTOR_X, top_y - ACTOR_HEIGHT),
            size: Vec2::new(ACTOR_WIDTH, ACTOR_HEIGHT),
            vel_y: 0.0,
            grounded: true,
            crouching: false,
            fast_falling: false,
            thrusting: false,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    pub fn pose(&self) -> ActorPose {
        if self.thrusting {
            ActorPose::Thrusting
        } else if self.fast_falling {
            ActorPose::FastFalling
        } else if self.crouching {
            ActorPose::Crouching
        } else if self.grounded {
            ActorPose::Grounded
        } else {
            ActorPose::Airborne
        }
    }

    /// Start a jump. Only allowed when grounded and standing.
    pub fn jump(&mut self) -> bool {
        if !self.grounded || self.crouching {
            return false;
        }
        self.vel_y = JUMP_VELOCITY;
        self.grounded = false;
        true
    }

    /// Change hitbox height keeping the top edge where it is
    fn resize_keep_top(&mut self, height: f32) {
        self.size.y = height.max(0.0);
    }

    /// Change hitbox height keeping the feet where they are
    fn resize_keep_feet(&mut self, height: f32) {
        let height = height.max(0.0);
        let bottom = self.bottom();
        self.size.y = height;
        self.pos.y = bottom - height;
    }

    /// Advance one tick against the given surfaces
    ///
    /// `thrust` is the shared thrust resource; it is burned here while
    /// thrusting and never drops below zero.
    pub fn update(&mut self, intent: MoveIntent, thrust: &mut f32, surfaces: &SurfaceRegistry) -> ActorStep {
        let prev_bottom = self.bottom();

        // Dive: airborne with down held shrinks the hitbox from the bottom up
        let wants_fast_fall = !self.grounded && intent.crouch_held;
        if wants_fast_fall {
            if !self.fast_falling {
                self.resize_keep_top(CROUCH_HEIGHT);
                self.crouching = false;
                self.fast_falling = true;
            }
        } else {
            self.fast_falling = false;
        }

        // Diving always suppresses thrust
        let wants_thrust = intent.thrust_held && *thrust > 0.0 && !self.fast_falling;
        self.thrusting = wants_thrust;

        if self.fast_falling {
            self.vel_y = self.vel_y.max(FAST_FALL_MIN_VELOCITY);
            self.vel_y += GRAVITY + FAST_FALL_ACCEL;
        } else if wants_thrust {
            self.vel_y = (self.vel_y - THRUST_ACCEL).max(-THRUST_MAX_RISE_SPEED);
            *thrust = (*thrust - THRUST_BURN_PER_TICK).max(0.0);
            self.grounded = false;
        } else {
            self.vel_y += GRAVITY;
        }
        self.vel_y = self.vel_y.min(MAX_FALL_SPEED);

        self.pos.y += self.vel_y;
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel_y = 0.0;
        }

        // Swept landing: only while falling or resting
        self.grounded = false;
        if self.vel_y >= 0.0 {
            if let Some(top) = surfaces.landing_top(self.left(), self.right(), prev_bottom, self.bottom()) {
                self.pos.y = top - self.size.y;
                self.vel_y = 0.0;
                self.grounded = true;
                self.fast_falling = false;
            }
        }

        if !self.fast_falling {
            let crouch = self.grounded && intent.crouch_held;
            let height = if crouch { CROUCH_HEIGHT } else { ACTOR_HEIGHT };
            if self.size.y != height {
                self.resize_keep_feet(height);
            }
            self.crouching = crouch;
        }

        if self.top() > WORLD_HEIGHT {
            ActorStep::FellOut
        } else {
            ActorStep::InBounds
        }
    }
}

/// Ticks from take-off until a jump arc comes back down to `rise` above the take-off height
///
/// Simulated with the same per-tick integration as [`Actor::update`], so the
/// result is exact for this physics. None when `rise` is above the apex.
pub fn jump_airtime(rise: f32) -> Option<u32> {
    let mut vel = JUMP_VELOCITY;
    let mut height = 0.0_f32;
    let mut apex = 0.0_f32;
    for tick in 1..=1000u32 {
        vel = (vel + GRAVITY).min(MAX_FALL_SPEED);
        height -= vel;
        apex = apex.max(height);
        if vel >= 0.0 && height <= rise {
            return (apex >= rise).then_some(tick);
        }
    }
    None
}

/// Horizontal distance the world scrolls during a jump that lands `rise` higher
///
/// Zero when the rise is out of reach.
pub fn jump_reach(rise: f32, speed: f32) -> f32 {
    jump_airtime(rise.max(0.0)).map_or(0.0, |t| t as f32 * speed)
}

/// Highest a jump can lift the actor's feet
pub fn jump_apex() -> f32 {
    let mut vel = JUMP_VELOCITY;
    let mut height = 0.0_f32;
    loop {
        vel += GRAVITY;
        if vel >= 0.0 {
            return height;
        }
        height -= vel;
    }
}
