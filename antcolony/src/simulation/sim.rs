use macroquad::prelude::Vec2;
use rand::{Rng, SeedableRng};
use shared::{
    AgentRole, AgentView, FoodView, NestView, PheromoneView, ThreatView, WorldSnapshot,
};
use slotmap::SlotMap;
use tracing::{debug, info, warn};

use super::ant::{Ant, AntKey, RoleState};
use super::behavior::AntEffect;
use super::spatial::within;
use super::{FoodKey, SimRng, ThreatKey, Timer, World};
use crate::config::{ConfigError, SimulationConfig};

/// The whole colony. The host calls `tick` once per frame and draws `snapshot`.
pub struct Simulation {
    pub world: World,
    pub ants: SlotMap<AntKey, Ant>,
    pub threat_spawn_timer: Timer,
    pub victory: bool,
    pub tick: u64,
}

impl Simulation {
    /// Validates `config` and builds the starting colony from `config.seed`, or from a
    /// fresh seed that is logged so the run can be replayed.
    pub fn initialize(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        info!(seed, "seeding simulation");
        Self::with_rng(config, SimRng::seed_from_u64(seed))
    }

    /// Same as `initialize` with an injected random source.
    pub fn with_rng(config: SimulationConfig, rng: SimRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let ant_count = config.ant_count;
        let threat_interval = config.threat_spawn_interval;

        let mut sim = Self {
            world: World::new(config, rng),
            ants: SlotMap::with_capacity_and_key(ant_count as usize),
            threat_spawn_timer: Timer::new(threat_interval, 0.0),
            victory: false,
            tick: 0,
        };

        for _ in 0..ant_count {
            let pos = sim.random_nest_pos();
            let role = sim.roll_role();
            sim.spawn_ant(role, pos);
        }

        info!(
            ants = sim.ants.len(),
            foods = sim.world.foods.len(),
            nest_x = sim.world.nest.pos.x,
            nest_y = sim.world.nest.pos.y,
            "colony initialized"
        );
        Ok(sim)
    }

    /// Advances the simulation to the clock reading `now`.
    pub fn tick(&mut self, now: f32) {
        let mut dt = now - self.world.now;
        if dt < 0.0 {
            warn!(now, last = self.world.now, "clock went backwards, ignoring delta");
            dt = 0.0;
        } else {
            self.world.now = now;
        }
        self.tick += 1;

        self.advance_ants(dt);
        self.advance_threats(dt);
        self.reconcile_pheromones();
        self.check_victory();
    }

    /// Every ant alive at the start of the tick acts exactly once.
    fn advance_ants(&mut self, dt: f32) {
        let keys: Vec<AntKey> = self.ants.keys().collect();
        for key in keys {
            let Some(ant) = self.ants.get_mut(key) else {
                continue;
            };
            match ant.act(&mut self.world, dt) {
                Some(AntEffect::Consumed) => {
                    self.ants.remove(key);
                }
                Some(AntEffect::Stacked) => {
                    self.try_spawn_from_stacks();
                }
                Some(AntEffect::RaisedAlarm) => self.alarm_guards(),
                None => {}
            }
        }
    }

    /// Once nurses hold enough stacks between them, they are spent on one new ant.
    fn try_spawn_from_stacks(&mut self) -> Option<AntKey> {
        let total: u32 = self.ants.values().map(Ant::stack).sum();
        if total < self.world.config.nurse_stack_threshold {
            return None;
        }

        for ant in self.ants.values_mut() {
            if let RoleState::Nurse { stack, .. } = &mut ant.role {
                *stack = 0;
            }
        }

        let role = self.roll_role();
        let key = self.spawn_ant(role, self.world.nest.pos);
        debug!(?role, population = self.ants.len(), "nurses raised a new ant");
        Some(key)
    }

    /// Sends every guard to the most recent alert.
    fn alarm_guards(&mut self) {
        let Some(alert) = self.world.pheromones.latest_alert().map(|p| p.pos) else {
            return;
        };
        for ant in self.ants.values_mut() {
            ant.assign_guard_target(alert);
        }
        debug!(x = alert.x, y = alert.y, "guards alarmed");
    }

    fn advance_threats(&mut self, dt: f32) {
        self.threat_spawn_timer.update(dt);
        if self.threat_spawn_timer.is_ready()
            && self.world.threats.len() < self.world.config.max_threats as usize
        {
            let pos = self.world.bounds.random_pos(&mut self.world.rng);
            let power = self.world.roll(self.world.config.threat_power);
            self.world.spawn_threat(pos, power);
            self.threat_spawn_timer.reset();
            info!(
                x = pos.x,
                y = pos.y,
                power,
                active = self.world.threats.len(),
                "threat appeared"
            );
        }

        for threat in self.world.threats.values_mut() {
            let direction = threat.walk.advance(&mut self.world.rng, dt);
            threat.pos = self.world.bounds.clamp(threat.pos + direction * threat.speed);
        }

        let mut threat_keys: Vec<ThreatKey> = self.world.threats.keys().collect();
        threat_keys.sort_by_key(|key| self.world.threats[*key].id);
        for threat_key in threat_keys {
            let Some(threat) = self.world.threats.get(threat_key) else {
                continue;
            };
            let (pos, radius) = (threat.pos, threat.radius);

            let victims: Vec<AntKey> = self
                .ants
                .iter()
                .filter(|(_, ant)| within(ant.pos, pos, radius))
                .map(|(key, _)| key)
                .collect();
            for victim in victims {
                if let Some(ant) = self.ants.remove(victim) {
                    self.world.pheromones.deposit_alert(ant.pos, self.world.now);
                    debug!(role = ?ant.kind(), x = ant.pos.x, y = ant.pos.y, "ant killed by threat");
                }
            }
        }
    }

    /// Drops expired alerts and anything still tied to an exhausted source.
    fn reconcile_pheromones(&mut self) {
        let expired = self.world.pheromones.expire(self.world.now);
        if expired > 0 {
            debug!(expired, remaining = self.world.pheromones.len(), "alerts faded");
        }
        self.world.sweep_empty_food();
    }

    fn check_victory(&mut self) {
        if !self.victory && self.world.nest.is_full() {
            self.victory = true;
            info!(
                time = self.world.now,
                resources = self.world.nest.resources,
                "nest is full, colony wins"
            );
        }
    }

    /// Adds an ant of `role` at `pos` (clamped to the world).
    pub fn spawn_ant(&mut self, role: AgentRole, pos: Vec2) -> AntKey {
        if !self.world.bounds.contains(pos) {
            debug!(x = pos.x, y = pos.y, ?role, "spawn position clamped into the world");
        }
        let pos = self.world.bounds.clamp(pos);
        let ant = Ant::new(role, pos, &self.world.config, &mut self.world.rng);
        self.ants.insert(ant)
    }

    pub fn spawn_food(&mut self, pos: Vec2, resources: u32) -> FoodKey {
        self.world.spawn_food(pos, resources)
    }

    pub fn spawn_threat(&mut self, pos: Vec2, power: u32) -> ThreatKey {
        self.world.spawn_threat(pos, power)
    }

    /// Weighted draw of a role for a new ant.
    pub fn roll_role(&mut self) -> AgentRole {
        let weights = &self.world.config.role_weights;
        let total = weights.nurse + weights.guard + weights.forager;
        let roll = self.world.rng.random::<f32>() * total;
        if roll < weights.nurse {
            AgentRole::Nurse
        } else if roll < weights.nurse + weights.guard {
            AgentRole::Guard
        } else {
            AgentRole::Forager
        }
    }

    /// Uniform random point inside the nest disc.
    fn random_nest_pos(&mut self) -> Vec2 {
        let radius = self.world.nest.radius;
        let angle = self.world.rng.random_range(0.0..std::f32::consts::TAU);
        let distance = radius * self.world.rng.random::<f32>().sqrt();
        let offset = Vec2::from_angle(angle) * distance;
        self.world.bounds.clamp(self.world.nest.pos + offset)
    }

    /// Sum of every nurse's stack.
    pub fn nurse_stacks(&self) -> u32 {
        self.ants.values().map(Ant::stack).sum()
    }

    pub fn now(&self) -> f32 {
        self.world.now
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.world.config
    }

    /// Read-only copy of the state for drawing.
    pub fn snapshot(&self) -> WorldSnapshot {
        let world = &self.world;

        let mut foods: Vec<FoodView> = world
            .foods
            .values()
            .map(|food| FoodView {
                id: food.id,
                pos: (food.pos.x, food.pos.y),
                radius: world.config.food_detect_radius,
                resources: food.resources,
            })
            .collect();
        foods.sort_by_key(|food| food.id);

        let pheromones = world
            .pheromones
            .iter()
            .map(|p| PheromoneView {
                pos: (p.pos.x, p.pos.y),
                kind: p.kind,
                radius: p.radius,
                food_id: p.food.and_then(|key| world.food_id(key)),
                created_at: p.created_at,
            })
            .collect();

        let agents = self
            .ants
            .values()
            .map(|ant| AgentView {
                pos: (ant.pos.x, ant.pos.y),
                role: ant.kind(),
                state: ant.behavior_state(),
                has_food: ant.has_food,
            })
            .collect();

        let mut threats: Vec<(u32, ThreatView)> = world
            .threats
            .values()
            .map(|threat| {
                let view = ThreatView {
                    pos: (threat.pos.x, threat.pos.y),
                    radius: threat.radius,
                    power: threat.power,
                };
                (threat.id, view)
            })
            .collect();
        threats.sort_by_key(|(id, _)| *id);

        WorldSnapshot {
            time: world.now,
            width: world.bounds.width,
            height: world.bounds.height,
            victory: self.victory,
            queen: (world.queen.pos.x, world.queen.pos.y),
            nest: NestView {
                pos: (world.nest.pos.x, world.nest.pos.y),
                radius: world.nest.radius,
                resources: world.nest.resources,
                capacity: world.nest.capacity,
            },
            foods,
            pheromones,
            agents,
            threats: threats.into_iter().map(|(_, view)| view).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::BehaviorState;

    fn config() -> SimulationConfig {
        SimulationConfig {
            seed: Some(99),
            ..Default::default()
        }
    }

    #[test]
    fn test_initialize_builds_population() {
        let sim = Simulation::initialize(config()).unwrap();
        assert_eq!(sim.ants.len(), 20);
        assert_eq!(sim.world.foods.len(), 5);
        assert!(sim.world.threats.is_empty());
        assert!(!sim.victory);

        let nest = sim.world.nest.pos;
        for ant in sim.ants.values() {
            assert!(ant.pos.distance(nest) <= sim.world.nest.radius + 1e-3);
        }
        for food in sim.world.foods.values() {
            assert!((10..=50).contains(&food.resources));
            assert!(food.trail_open);
        }
        let mut ids: Vec<u32> = sim.world.foods.values().map(|f| f.id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_nurses_start_inside_nest_and_stay() {
        for seed in 0..20 {
            let mut sim = Simulation::initialize(SimulationConfig {
                seed: Some(seed),
                ant_count: 60,
                ..Default::default()
            })
            .unwrap();
            sim.world.threats.clear();
            let (nest, radius) = (sim.world.nest.pos, sim.world.nest.radius);

            let nurses = sim.ants.values().filter(|a| a.kind() == AgentRole::Nurse).count();
            assert!(nurses > 0, "Seed {seed} rolled no nurses");
            for i in 0..=200 {
                sim.tick(i as f32 * 0.05);
                for ant in sim.ants.values().filter(|a| a.kind() == AgentRole::Nurse) {
                    assert!(
                        ant.pos.distance(nest) <= radius + 1e-3,
                        "Seed {seed}: nurse at {} outside the nest",
                        ant.pos
                    );
                }
            }
        }
    }

    #[test]
    fn test_initialize_rejects_bad_config() {
        let bad = SimulationConfig {
            ant_count: 0,
            ..config()
        };
        assert!(matches!(
            Simulation::initialize(bad),
            Err(ConfigError::NonPositiveCount { name: "ant_count" })
        ));
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = Simulation::initialize(config()).unwrap();
        let mut b = Simulation::initialize(config()).unwrap();
        for i in 1..=300 {
            let now = i as f32 * 0.1;
            a.tick(now);
            b.tick(now);
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_threat_spawns_on_interval_up_to_cap() {
        let mut sim = Simulation::initialize(config()).unwrap();
        sim.ants.clear();

        sim.tick(59.0);
        assert!(sim.world.threats.is_empty());
        sim.tick(60.0);
        assert_eq!(sim.world.threats.len(), 1);
        let power = sim.world.threats.values().next().map(|t| t.power).unwrap();
        assert!((3..=5).contains(&power));

        for i in 2..=8 {
            sim.tick(60.0 * i as f32);
        }
        assert_eq!(sim.world.threats.len(), 4, "Never more than four threats");
    }

    #[test]
    fn test_threat_kills_and_leaves_alert() {
        let mut sim = Simulation::initialize(config()).unwrap();
        sim.ants.clear();
        let pos = Vec2::new(300.0, 300.0);
        let victim = sim.spawn_ant(AgentRole::Forager, pos);
        sim.spawn_threat(pos, 4);

        sim.tick(1.0);
        assert!(sim.ants.get(victim).is_none());
        let alert = sim.world.pheromones.latest_alert().unwrap();
        assert_eq!(alert.expires_at, Some(31.0));
        assert!(alert.pos.distance(pos) < 1.0);
    }

    #[test]
    fn test_alarm_sends_guards_to_latest_alert() {
        let mut sim = Simulation::initialize(config()).unwrap();
        sim.ants.clear();
        let nest = sim.world.nest.pos;
        let away = if nest.x > sim.world.bounds.width / 2.0 {
            -200.0
        } else {
            200.0
        };
        let far = nest + Vec2::new(away, 0.0);
        sim.world.pheromones.deposit_alert(far, 0.0);

        let guard = sim.spawn_ant(AgentRole::Guard, nest);
        let forager = sim.spawn_ant(AgentRole::Forager, nest);
        sim.ants[forager].role = RoleState::Forager { alarmed: true };

        sim.tick(0.1);
        assert_eq!(sim.ants[guard].behavior_state(), BehaviorState::Attacking);
        assert_eq!(sim.ants[forager].behavior_state(), BehaviorState::Searching);
    }

    #[test]
    fn test_roll_role_follows_weights() {
        let mut sim = Simulation::initialize(config()).unwrap();
        sim.world.config.role_weights.nurse = 0.0;
        sim.world.config.role_weights.forager = 0.0;
        sim.world.config.role_weights.guard = 1.0;
        for _ in 0..50 {
            assert_eq!(sim.roll_role(), AgentRole::Guard);
        }
    }

    #[test]
    fn test_clock_going_backwards_is_ignored() {
        let mut sim = Simulation::initialize(config()).unwrap();
        sim.tick(10.0);
        sim.tick(5.0);
        assert_eq!(sim.now(), 10.0);
        assert_eq!(sim.tick, 2);
    }
}
