//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::actor::{ActorStep, MoveIntent};
use super::state::{GameState, Response, RunOverCause};
use crate::consts::*;

/// Autopilot jumps this many ticks of travel before a hazard
const PILOT_JUMP_LEAD_TICKS: f32 = 8.0;
/// Autopilot starts ducking this many ticks of travel before a flying hazard
const PILOT_DUCK_LEAD_TICKS: f32 = 4.0;
/// Autopilot probes for gaps this many ticks of travel ahead
const PILOT_GAP_PROBE_TICKS: f32 = 2.0;
const PILOT_SHOOT_RANGE: f32 = 420.0;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (edge-triggered)
    pub jump_pressed: bool,
    /// Down: crouch on the ground, dive in the air
    pub crouch_held: bool,
    pub thrust_held: bool,
    /// Fire (edge-triggered)
    pub shoot_pressed: bool,
    /// Start a new run once the current one is over
    pub restart: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Feedback lives for exactly one tick, frozen ones included
    state.events.clear();

    // A finished run stays frozen until restarted
    if state.is_over() {
        if input.restart {
            let seed = state.seed.wrapping_add(1);
            state.restart(seed);
        }
        return;
    }

    let input = if input.idle_mode {
        pilot_input(state, input)
    } else {
        input.clone()
    };

    state.time_ticks += 1;
    let speed = state.run.speed;

    // Terrain (and the entities that come with it) before anything moves
    state.generator.fill_ahead(&mut state.world, speed);

    state.world.surfaces.scroll(speed);
    state.world.surfaces.prune(TRAILING_EDGE);
    state.generator.scroll(speed);

    // Actor
    if input.jump_pressed {
        state.actor.jump();
    }
    if input.shoot_pressed {
        state.try_shoot();
    }
    let intent = MoveIntent {
        crouch_held: input.crouch_held,
        thrust_held: input.thrust_held,
    };
    if state.actor.update(intent, &mut state.run.thrust, &state.world.surfaces) == ActorStep::FellOut {
        state.end_run(RunOverCause::FellOut);
        return;
    }

    // Entities
    if let Some(cause) = state
        .world
        .advance_entities(&state.actor, &mut state.run, &mut state.events)
    {
        state.end_run(cause);
        return;
    }

    state.run.add_score(1);
    state.run.advance_speed();

    // Ensure deterministic ordering
    state.world.normalize_order();
}

/// Choose intents from what is visible ahead of the actor
fn pilot_input(state: &GameState, input: &TickInput) -> TickInput {
    let actor = &state.actor;
    let speed = state.run.speed;
    let mut out = TickInput {
        restart: input.restart,
        idle_mode: true,
        ..Default::default()
    };

    // Nearest hazard in the actor's standing band
    let band_top = actor.bottom() - ACTOR_HEIGHT;
    let ahead = state
        .world
        .hazards
        .iter()
        .filter(|h| h.rect.right() > actor.left())
        .filter(|h| h.rect.bottom() > band_top && h.rect.top() < actor.bottom())
        .min_by(|a, b| a.rect.left().total_cmp(&b.rect.left()));

    if let Some(hazard) = ahead {
        let distance = hazard.rect.left() - actor.right();
        match hazard.response() {
            Response::MustShoot if state.run.ammo > 0 => {
                out.shoot_pressed = distance < PILOT_SHOOT_RANGE;
            }
            Response::DuckOrShoot => {
                out.crouch_held = distance < speed * PILOT_DUCK_LEAD_TICKS;
            }
            Response::JumpOrShoot | Response::MustShoot => {
                out.jump_pressed = distance > 0.0 && distance < speed * PILOT_JUMP_LEAD_TICKS;
            }
        }
    }

    if actor.grounded {
        let probe = actor.right() + speed * PILOT_GAP_PROBE_TICKS;
        let step_too_high = |top: f32| top < actor.bottom() - STEP_UP_TOLERANCE;
        if state.world.surfaces.height_at(probe).is_none_or(step_too_high) {
            out.jump_pressed = true;
            out.crouch_held = false;
        }
    } else if actor.vel_y > 0.0 {
        let below = state.world.surfaces.height_at(actor.left());
        let landing = state
            .world
            .surfaces
            .height_at(actor.right() + speed * PILOT_GAP_PROBE_TICKS);
        out.thrust_held = below.is_none() && landing.is_none();
    }

    out
}
