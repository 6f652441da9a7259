//! Per-tick entity movement, collision effects and pruning

use super::actor::Actor;
use super::collision::circle_overlaps_rect;
use super::state::{GameEvent, RunOverCause, RunState, World};
use crate::consts::*;

impl World {
    /// Advance every entity collection by one tick
    ///
    /// Hazards and pickups scroll with the world, projectiles fly right.
    /// Shots are resolved before the actor so a hazard destroyed this tick
    /// cannot end the run. Returns the cause if the actor touched a hazard.
    pub fn advance_entities(
        &mut self,
        actor: &Actor,
        run: &mut RunState,
        events: &mut Vec<GameEvent>,
    ) -> Option<RunOverCause> {
        let speed = run.speed;
        for hazard in &mut self.hazards {
            hazard.rect.pos.x -= speed;
        }
        for collectible in &mut self.collectibles {
            collectible.center.x -= speed;
        }
        for booster in &mut self.boosters {
            booster.rect.pos.x -= speed;
        }
        for projectile in &mut self.projectiles {
            projectile.rect.pos.x += PROJECTILE_SPEED;
        }

        self.resolve_shots(run, events);
        self.collect_pickups(actor, run, events);

        let actor_rect = actor.rect();
        let hit = self
            .hazards
            .iter()
            .find(|h| h.rect.overlaps(&actor_rect))
            .map(|h| RunOverCause::HitHazard(h.kind));

        self.prune();
        hit
    }

    /// Projectile against hazard: both go, the hazard's bonus is awarded
    fn resolve_shots(&mut self, run: &mut RunState, events: &mut Vec<GameEvent>) {
        let mut spent = Vec::new();
        for projectile in &self.projectiles {
            let Some(idx) = self
                .hazards
                .iter()
                .position(|h| h.rect.overlaps(&projectile.rect))
            else {
                continue;
            };

            let hazard = self.hazards.remove(idx);
            let bonus = hazard.kind.shot_bonus();
            run.add_score(bonus);
            spent.push(projectile.id);
            log::trace!("Projectile {} destroyed {:?} hazard {}", projectile.id, hazard.kind, hazard.id);
            events.push(GameEvent::HazardShot {
                kind: hazard.kind,
                pos: hazard.rect.center(),
                bonus,
            });
        }
        self.projectiles.retain(|p| !spent.contains(&p.id));
    }

    fn collect_pickups(&mut self, actor: &Actor, run: &mut RunState, events: &mut Vec<GameEvent>) {
        let actor_rect = actor.rect();

        self.collectibles.retain(|c| {
            if !circle_overlaps_rect(c.center, c.radius, &actor_rect) {
                return true;
            }
            run.add_ammo(1);
            run.add_score(AMMO_PICKUP_BONUS);
            log::trace!("Collected ammo {} (ammo {})", c.id, run.ammo);
            events.push(GameEvent::AmmoCollected {
                pos: c.center,
                ammo: run.ammo,
                bonus: AMMO_PICKUP_BONUS,
            });
            false
        });

        self.boosters.retain(|b| {
            if !b.rect.overlaps(&actor_rect) {
                return true;
            }
            run.add_thrust(BOOSTER_REFILL);
            run.add_score(THRUST_PICKUP_BONUS);
            log::trace!("Collected booster {} (thrust {:.0})", b.id, run.thrust);
            events.push(GameEvent::ThrustCollected {
                pos: b.rect.center(),
                thrust: run.thrust,
                bonus: THRUST_PICKUP_BONUS,
            });
            false
        });
    }

    /// Drop everything fully past the trailing edge, and shots past the right edge
    fn prune(&mut self) {
        self.hazards.retain(|h| h.rect.right() >= TRAILING_EDGE);
        self.collectibles
            .retain(|c| c.center.x + c.radius >= TRAILING_EDGE);
        self.boosters.retain(|b| b.rect.right() >= TRAILING_EDGE);
        self.projectiles.retain(|p| p.rect.left() <= WORLD_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::Rect;
    use crate::sim::state::{Hazard, HazardKind};
    use glam::Vec2;

    fn hazard(world: &mut World, kind: HazardKind, x: f32, y: f32) {
        let id = world.next_entity_id();
        world.hazards.push(Hazard {
            id,
            kind,
            rect: Rect::new(x, y, 40.0, 40.0),
        });
    }

    #[test]
    fn test_entities_scroll_and_projectiles_fly() {
        let mut world = World::new();
        let mut run = RunState::new(0);
        let mut events = Vec::new();
        hazard(&mut world, HazardKind::Ground, 900.0, 100.0);
        world.spawn_collectible(Vec2::new(800.0, 100.0));
        world.spawn_projectile(Vec2::new(200.0, 400.0));

        world.advance_entities(&Actor::default(), &mut run, &mut events);
        assert_eq!(world.hazards[0].rect.left(), 900.0 - BASE_SPEED);
        assert_eq!(world.collectibles[0].center.x, 800.0 - BASE_SPEED);
        assert_eq!(world.projectiles[0].rect.left(), 200.0 + PROJECTILE_SPEED);
        assert!(events.is_empty());
    }

    #[test]
    fn test_must_shoot_awards_higher_bonus() {
        let mut world = World::new();
        let mut run = RunState::new(0);
        let mut events = Vec::new();
        hazard(&mut world, HazardKind::Scope, 600.0, 380.0);
        world.spawn_projectile(Vec2::new(600.0, 400.0));

        world.advance_entities(&Actor::default(), &mut run, &mut events);
        assert!(world.hazards.is_empty());
        assert!(world.projectiles.is_empty());
        assert_eq!(run.score, MUST_SHOOT_BONUS);
        assert!(matches!(
            events[0],
            GameEvent::HazardShot { kind: HazardKind::Scope, bonus: MUST_SHOOT_BONUS, .. }
        ));
    }

    #[test]
    fn test_one_projectile_one_hazard() {
        let mut world = World::new();
        let mut run = RunState::new(0);
        let mut events = Vec::new();
        hazard(&mut world, HazardKind::Ground, 600.0, 380.0);
        hazard(&mut world, HazardKind::Flying, 610.0, 380.0);
        world.spawn_projectile(Vec2::new(600.0, 400.0));

        world.advance_entities(&Actor::default(), &mut run, &mut events);
        assert_eq!(world.hazards.len(), 1);
        assert_eq!(run.score, SHOT_BONUS);
    }

    #[test]
    fn test_pickups_apply_and_disappear() {
        let mut world = World::new();
        let mut run = RunState::new(0);
        run.ammo = AMMO_MAX;
        let mut events = Vec::new();
        let actor = Actor::default();
        let center = actor.rect().center();
        // Placed one tick's scroll ahead so they land on the actor
        world.spawn_collectible(center + Vec2::new(BASE_SPEED, 0.0));
        world.spawn_booster(center + Vec2::new(BASE_SPEED, 0.0));

        world.advance_entities(&actor, &mut run, &mut events);
        assert!(world.collectibles.is_empty());
        assert!(world.boosters.is_empty());
        assert_eq!(run.ammo, AMMO_MAX);
        assert_eq!(run.thrust, THRUST_START + BOOSTER_REFILL);
        assert_eq!(run.score, AMMO_PICKUP_BONUS + THRUST_PICKUP_BONUS);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_hazard_contact_reports_cause() {
        let mut world = World::new();
        let mut run = RunState::new(0);
        let mut events = Vec::new();
        let actor = Actor::default();
        hazard(&mut world, HazardKind::Flying, actor.left() + BASE_SPEED, actor.top());

        let cause = world.advance_entities(&actor, &mut run, &mut events);
        assert_eq!(cause, Some(RunOverCause::HitHazard(HazardKind::Flying)));
    }

    #[test]
    fn test_prune_past_edges() {
        let mut world = World::new();
        let mut run = RunState::new(0);
        let mut events = Vec::new();
        hazard(&mut world, HazardKind::Ground, -40.0 + BASE_SPEED / 2.0, 0.0);
        world.spawn_projectile(Vec2::new(WORLD_WIDTH - 5.0, 0.0));

        world.advance_entities(&Actor::default(), &mut run, &mut events);
        assert!(world.hazards.is_empty());
        assert!(world.projectiles.is_empty());
    }
}
