use shared::{BehaviorState, PheromoneKind};
use tracing::debug;

use super::spatial::seek;
use super::{Ant, FoodKey, RoleState, World};

/// What the simulation must do for an ant after it acted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntEffect {
    /// The ant spent itself and must be removed.
    Consumed,
    /// A nurse turned one unit of nest food into a stack.
    Stacked,
    /// An alarmed forager made it home; guards should be sent to the alert.
    RaisedAlarm,
}

impl Ant {
    /// Runs one tick of this ant's role: detect, act, move.
    pub fn act(&mut self, world: &mut World, dt: f32) -> Option<AntEffect> {
        match self.role {
            RoleState::Forager { .. } => self.act_forager(world, dt),
            RoleState::Nurse { .. } => self.act_nurse(world, dt),
            RoleState::Guard { .. } => self.act_guard(world),
        }
    }

    fn act_forager(&mut self, world: &mut World, dt: f32) -> Option<AntEffect> {
        // Alerts inside the nest do not send a forager home again.
        let at_home = self.pos.distance(world.nest.pos) < world.nest.radius;
        if !at_home && world.pheromones.alert_at(self.pos) {
            self.role = RoleState::Forager { alarmed: true };
            if !self.has_food {
                self.target_food = None;
            }
        }

        match self.behavior_state() {
            BehaviorState::Searching => {
                self.search(world, dt);
                None
            }
            BehaviorState::GoingToFood => {
                self.go_to_food(world);
                None
            }
            BehaviorState::ReturningToNest => self.return_to_nest(world),
            BehaviorState::Attacking => None,
        }
    }

    /// Follow a trail if one is in range, otherwise wander and look for food.
    fn search(&mut self, world: &mut World, dt: f32) {
        let trail = world
            .pheromones
            .first_within(
                self.pos,
                world.config.pheromone_detect_radius,
                PheromoneKind::FoodTrail,
            )
            .and_then(|p| p.food);
        if let Some(food) = trail {
            self.target_food = Some(food);
            return;
        }

        let step = self.walk.advance(&mut world.rng, dt);
        self.pos = world.bounds.clamp(self.pos + step);

        if let Some(key) = world.first_food_within(self.pos, world.config.food_detect_radius) {
            self.collect_found(world, key);
        }
    }

    /// Collects from a source stumbled upon while searching. The first collector claims
    /// the source and lays a trail on the way home.
    fn collect_found(&mut self, world: &mut World, key: FoodKey) {
        let Some(food) = world.foods.get_mut(key) else {
            return;
        };
        if food.is_empty() {
            return;
        }

        if food.claim_trail() {
            self.emitting_trail = true;
            self.last_trail_pos = None;
            debug!(food = food.id, "trail claimed");
        }
        food.take_resource();
        self.has_food = true;
        self.target_food = Some(key);

        let emptied = food.is_empty();
        if emptied {
            // The target stays set; it dangles until the ant next looks for it.
            world.exhaust_food(key);
        }
    }

    fn go_to_food(&mut self, world: &mut World) {
        let Some(key) = self.target_food else {
            return;
        };
        let Some(food) = world.foods.get_mut(key) else {
            // Source is gone: fall back to searching next tick.
            self.target_food = None;
            return;
        };

        let step = world.config.base_step / world.config.speed_divisor;
        let distance = self.pos.distance(food.pos);
        self.pos = world.bounds.clamp(seek(self.pos, food.pos, step));

        if distance < world.config.food_detect_radius && !food.is_empty() {
            food.take_resource();
            self.has_food = true;
            let emptied = food.is_empty();
            if emptied {
                world.exhaust_food(key);
                self.target_food = None;
            }
        }
    }

    fn return_to_nest(&mut self, world: &mut World) -> Option<AntEffect> {
        let step = world.config.base_step / world.config.speed_divisor;
        let distance = self.pos.distance(world.nest.pos);
        self.pos = world.bounds.clamp(seek(self.pos, world.nest.pos, step));

        if self.emitting_trail {
            self.lay_trail(world);
        }

        if distance >= world.nest.radius {
            return None;
        }

        if self.has_food {
            world.nest.add_resource();
            self.has_food = false;
            self.stop_trail();
        }
        if self.is_alarmed() {
            self.role = RoleState::Forager { alarmed: false };
            return Some(AntEffect::RaisedAlarm);
        }
        None
    }

    fn lay_trail(&mut self, world: &mut World) {
        let live_target = self.target_food.filter(|key| world.foods.contains_key(*key));
        let Some(food) = live_target else {
            // Nothing left to lead anyone to.
            self.stop_trail();
            return;
        };
        if world
            .pheromones
            .deposit_trail(self.pos, food, self.last_trail_pos, world.now)
        {
            self.last_trail_pos = Some(self.pos);
        }
    }

    /// Nurses pace inside the nest and turn stored food into stacks. A nurse found
    /// outside the nest walks straight back.
    fn act_nurse(&mut self, world: &mut World, dt: f32) -> Option<AntEffect> {
        let direction = self.walk.advance(&mut world.rng, dt);
        if self.pos.distance(world.nest.pos) > world.nest.radius {
            let step = world.config.nurse_speed / world.config.speed_divisor;
            self.pos = world.bounds.clamp(seek(self.pos, world.nest.pos, step));
        } else {
            let candidate = self.pos + direction * world.config.nurse_speed;
            if candidate.distance(world.nest.pos) <= world.nest.radius {
                self.pos = world.bounds.clamp(candidate);
            }
        }

        let RoleState::Nurse { stack, stack_timer } = &mut self.role else {
            return None;
        };
        stack_timer.update(dt);
        if stack_timer.is_ready() && world.nest.take_resource() {
            *stack += 1;
            stack_timer.reset();
            debug!(stack = *stack, nest = world.nest.resources, "nurse stacked");
            return Some(AntEffect::Stacked);
        }
        None
    }

    /// Guards idle until they sense an alert, then rush it. Touching a threat costs the
    /// guard its life and the threat one point of power.
    fn act_guard(&mut self, world: &mut World) -> Option<AntEffect> {
        let RoleState::Guard { target } = &mut self.role else {
            return None;
        };

        if target.is_none() {
            *target = world
                .pheromones
                .first_within(
                    self.pos,
                    world.config.pheromone_detect_radius,
                    PheromoneKind::Alert,
                )
                .map(|p| p.pos);
        }

        let mut arrived = false;
        if let Some(goal) = *target {
            let step = world.config.guard_step;
            if self.pos.distance(goal) <= step {
                self.pos = goal;
                arrived = true;
            } else {
                self.pos = world.bounds.clamp(seek(self.pos, goal, step));
            }
        }

        if let Some(threat) = world.first_threat_at(self.pos) {
            let destroyed = world
                .threats
                .get_mut(threat)
                .is_some_and(|t| t.take_hit());
            debug!(x = self.pos.x, y = self.pos.y, destroyed, "guard struck a threat");
            if destroyed {
                world.destroy_threat(threat);
            }
            return Some(AntEffect::Consumed);
        }

        if arrived {
            *target = None;
        }
        None
    }
}
