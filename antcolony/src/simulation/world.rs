use macroquad::prelude::Vec2;
use rand::Rng;
use slotmap::SlotMap;
use tracing::{debug, info};

use super::spatial::within;
use super::{
    Bounds, Food, FoodKey, Nest, PheromoneTrails, Queen, RandomWalk, SimRng, Threat, ThreatKey,
    THREAT_WALK_DURATION,
};
use crate::config::SimulationConfig;

/// Everything an agent can see and change while it acts: the store, the food arena,
/// the pheromone trails, the threats, the clock and the random source.
pub struct World {
    pub config: SimulationConfig,
    pub bounds: Bounds,
    pub now: f32,
    pub rng: SimRng,
    pub nest: Nest,
    pub queen: Queen,
    pub foods: SlotMap<FoodKey, Food>,
    pub pheromones: PheromoneTrails,
    pub threats: SlotMap<ThreatKey, Threat>,
    next_food_id: u32,
    next_threat_id: u32,
}

impl World {
    /// Places the nest at random and seeds `food_count` sources. Config must be validated.
    pub fn new(config: SimulationConfig, mut rng: SimRng) -> Self {
        let bounds = Bounds::new(config.width, config.height);
        let nest_pos = bounds.random_pos(&mut rng);
        let queen_pos = bounds.clamp(nest_pos + Vec2::splat(config.queen_offset));
        let pheromones = PheromoneTrails::new(
            config.min_pheromone_spacing,
            config.trail_marker_radius,
            config.alert_marker_radius,
            config.alert_lifetime,
        );

        let mut world = Self {
            bounds,
            now: 0.0,
            nest: Nest::new(nest_pos, config.nest_radius, config.nest_capacity),
            queen: Queen { pos: queen_pos },
            foods: SlotMap::with_capacity_and_key(config.food_count as usize),
            pheromones,
            threats: SlotMap::with_key(),
            next_food_id: 1,
            next_threat_id: 1,
            rng,
            config,
        };

        for _ in 0..world.config.food_count {
            let pos = world.bounds.random_pos(&mut world.rng);
            let amount = world.roll(world.config.food_resources);
            world.spawn_food(pos, amount);
        }
        world
    }

    /// Uniform draw from an inclusive range.
    pub fn roll(&mut self, (min, max): (u32, u32)) -> u32 {
        self.rng.random_range(min..=max.max(min))
    }

    /// Adds a food source with the next free id.
    pub fn spawn_food(&mut self, pos: Vec2, resources: u32) -> FoodKey {
        let id = self.next_food_id;
        self.next_food_id += 1;
        self.foods
            .insert(Food::new(id, self.bounds.clamp(pos), resources))
    }

    /// Adds a threat with its own random walk.
    pub fn spawn_threat(&mut self, pos: Vec2, power: u32) -> ThreatKey {
        let id = self.next_threat_id;
        self.next_threat_id += 1;
        let walk = RandomWalk::new(&mut self.rng, THREAT_WALK_DURATION, self.config.speed_divisor);
        self.threats.insert(Threat {
            id,
            pos: self.bounds.clamp(pos),
            power,
            radius: self.config.threat_radius,
            speed: self.config.threat_speed,
            walk,
        })
    }

    /// Removes a food source and every trail leading to it.
    pub fn exhaust_food(&mut self, key: FoodKey) -> bool {
        match self.foods.remove(key) {
            Some(food) => {
                let dropped = self.pheromones.invalidate_food(key);
                debug_assert!(!self.pheromones.references(key));
                debug!(food = food.id, trails = dropped, "food source exhausted");
                true
            }
            None => false,
        }
    }

    /// Exhausts every source already at zero. Returns how many were removed.
    pub fn sweep_empty_food(&mut self) -> usize {
        let empty: Vec<FoodKey> = self
            .foods
            .iter()
            .filter(|(_, food)| food.is_empty())
            .map(|(key, _)| key)
            .collect();
        for key in &empty {
            self.exhaust_food(*key);
        }
        empty.len()
    }

    /// Removes a beaten threat and drops a fresh food source where it stood.
    pub fn destroy_threat(&mut self, key: ThreatKey) -> Option<FoodKey> {
        let threat = self.threats.remove(key)?;
        let amount = self.roll(self.config.threat_food_resources);
        let food = self.spawn_food(threat.pos, amount);
        info!(
            threat = threat.id,
            x = threat.pos.x,
            y = threat.pos.y,
            food = amount,
            "threat destroyed"
        );
        Some(food)
    }

    /// Earliest-created food source strictly within `radius` of `pos`.
    pub fn first_food_within(&self, pos: Vec2, radius: f32) -> Option<FoodKey> {
        self.foods
            .iter()
            .filter(|(_, food)| within(pos, food.pos, radius))
            .min_by_key(|(_, food)| food.id)
            .map(|(key, _)| key)
    }

    /// Earliest-spawned threat whose body covers `pos`.
    pub fn first_threat_at(&self, pos: Vec2) -> Option<ThreatKey> {
        self.threats
            .iter()
            .filter(|(_, threat)| within(pos, threat.pos, threat.radius))
            .min_by_key(|(_, threat)| threat.id)
            .map(|(key, _)| key)
    }

    /// Public id of a live food source.
    pub fn food_id(&self, key: FoodKey) -> Option<u32> {
        self.foods.get(key).map(|food| food.id)
    }
}
