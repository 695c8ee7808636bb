use macroquad::prelude::Conf;
use serde::Deserialize;
use thiserror::Error;

use crate::simulation::{
    ALERT_LIFETIME, ALERT_MARKER_RADIUS, BASE_STEP, DEFAULT_ANT_COUNT, DEFAULT_FOOD_COUNT,
    DEFAULT_WORLD_HEIGHT, DEFAULT_WORLD_WIDTH, FOOD_DETECT_RADIUS, FOOD_RESOURCES,
    FORAGER_SPAWN_WEIGHT, GUARD_SPAWN_WEIGHT, GUARD_STEP, MAX_THREATS, MIN_PHEROMONE_SPACING,
    NEST_CAPACITY, NEST_RADIUS, NURSE_SPAWN_WEIGHT, NURSE_SPEED, NURSE_STACK_INTERVAL,
    NURSE_STACK_THRESHOLD, PHEROMONE_DETECT_RADIUS, QUEEN_OFFSET, SPEED_DIVISOR,
    THREAT_FOOD_RESOURCES, THREAT_POWER, THREAT_RADIUS, THREAT_SPAWN_INTERVAL, THREAT_SPEED,
    TRAIL_MARKER_RADIUS,
};

/// Rejected configuration, reported once by `Simulation::initialize`.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be greater than zero")]
    NonPositiveCount { name: &'static str },
    #[error("{name} must be a positive radius, got {value}")]
    NonPositiveRadius { name: &'static str, value: f32 },
    #[error("world dimensions must be positive, got {width}x{height}")]
    NonPositiveDimension { width: f32, height: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositiveRate { name: &'static str, value: f32 },
    #[error("{name} range [{min}, {max}] is invalid")]
    InvalidRange { name: &'static str, min: u32, max: u32 },
    #[error("role weights must be non-negative with a positive sum")]
    InvalidRoleWeights,
}

/// Relative odds of each role when an agent is created.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RoleWeights {
    pub nurse: f32,
    pub guard: f32,
    pub forager: f32,
}

impl Default for RoleWeights {
    fn default() -> Self {
        Self {
            nurse: NURSE_SPAWN_WEIGHT,
            guard: GUARD_SPAWN_WEIGHT,
            forager: FORAGER_SPAWN_WEIGHT,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub width: f32,
    pub height: f32,
    pub food_count: u32,
    pub ant_count: u32,
    pub speed_divisor: f32,
    pub base_step: f32,
    pub guard_step: f32,
    pub nurse_speed: f32,
    pub threat_speed: f32,
    pub pheromone_detect_radius: f32,
    pub min_pheromone_spacing: f32,
    pub trail_marker_radius: f32,
    pub alert_marker_radius: f32,
    pub alert_lifetime: f32,
    pub nest_capacity: u32,
    pub nest_radius: f32,
    pub food_detect_radius: f32,
    pub food_resources: (u32, u32),        // Inclusive range for starting sources
    pub threat_food_resources: (u32, u32), // Inclusive range for food dropped by threats
    pub threat_spawn_interval: f32,
    pub max_threats: u32,
    pub threat_power: (u32, u32),
    pub threat_radius: f32,
    pub nurse_stack_interval: f32,
    pub nurse_stack_threshold: u32,
    pub role_weights: RoleWeights,
    pub queen_offset: f32,
    pub seed: Option<u64>, // Fresh random seed when absent
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WORLD_WIDTH,
            height: DEFAULT_WORLD_HEIGHT,
            food_count: DEFAULT_FOOD_COUNT,
            ant_count: DEFAULT_ANT_COUNT,
            speed_divisor: SPEED_DIVISOR,
            base_step: BASE_STEP,
            guard_step: GUARD_STEP,
            nurse_speed: NURSE_SPEED,
            threat_speed: THREAT_SPEED,
            pheromone_detect_radius: PHEROMONE_DETECT_RADIUS,
            min_pheromone_spacing: MIN_PHEROMONE_SPACING,
            trail_marker_radius: TRAIL_MARKER_RADIUS,
            alert_marker_radius: ALERT_MARKER_RADIUS,
            alert_lifetime: ALERT_LIFETIME,
            nest_capacity: NEST_CAPACITY,
            nest_radius: NEST_RADIUS,
            food_detect_radius: FOOD_DETECT_RADIUS,
            food_resources: FOOD_RESOURCES,
            threat_food_resources: THREAT_FOOD_RESOURCES,
            threat_spawn_interval: THREAT_SPAWN_INTERVAL,
            max_threats: MAX_THREATS,
            threat_power: THREAT_POWER,
            threat_radius: THREAT_RADIUS,
            nurse_stack_interval: NURSE_STACK_INTERVAL,
            nurse_stack_threshold: NURSE_STACK_THRESHOLD,
            role_weights: RoleWeights::default(),
            queen_offset: QUEEN_OFFSET,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Checks every precondition the engine relies on after `initialize`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::NonPositiveDimension {
                width: self.width,
                height: self.height,
            });
        }

        let counts = [
            ("food_count", self.food_count),
            ("ant_count", self.ant_count),
            ("nest_capacity", self.nest_capacity),
            ("max_threats", self.max_threats),
            ("nurse_stack_threshold", self.nurse_stack_threshold),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(ConfigError::NonPositiveCount { name });
            }
        }

        let radii = [
            ("pheromone_detect_radius", self.pheromone_detect_radius),
            ("trail_marker_radius", self.trail_marker_radius),
            ("alert_marker_radius", self.alert_marker_radius),
            ("nest_radius", self.nest_radius),
            ("food_detect_radius", self.food_detect_radius),
            ("threat_radius", self.threat_radius),
        ];
        for (name, value) in radii {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveRadius { name, value });
            }
        }

        let rates = [
            ("speed_divisor", self.speed_divisor),
            ("base_step", self.base_step),
            ("guard_step", self.guard_step),
            ("nurse_speed", self.nurse_speed),
            ("threat_speed", self.threat_speed),
            ("min_pheromone_spacing", self.min_pheromone_spacing),
            ("alert_lifetime", self.alert_lifetime),
            ("threat_spawn_interval", self.threat_spawn_interval),
            ("nurse_stack_interval", self.nurse_stack_interval),
        ];
        for (name, value) in rates {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveRate { name, value });
            }
        }

        let ranges = [
            ("food_resources", self.food_resources),
            ("threat_food_resources", self.threat_food_resources),
            ("threat_power", self.threat_power),
        ];
        for (name, (min, max)) in ranges {
            if min == 0 || min > max {
                return Err(ConfigError::InvalidRange { name, min, max });
            }
        }

        let RoleWeights {
            nurse,
            guard,
            forager,
        } = self.role_weights;
        let all_valid = [nurse, guard, forager]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0);
        if !all_valid || !(nurse + guard + forager > 0.0) {
            return Err(ConfigError::InvalidRoleWeights);
        }

        Ok(())
    }
}

pub fn window_conf(config: &SimulationConfig) -> Conf {
    Conf {
        window_title: "Ant Colony".to_owned(),
        window_width: config.width as i32,
        window_height: config.height as i32,
        high_dpi: true,
        ..Default::default()
    }
}
