mod ant;
mod behavior;
mod food;
mod nest;
mod pheromone;
mod sim;
mod spatial;
mod threat;
mod timer;
mod walk;
mod world;

// Re-export key types for easier imports
pub use ant::{Ant, AntKey, RoleState};
pub use behavior::AntEffect;
pub use food::{Food, FoodKey};
pub use nest::{Nest, Queen};
pub use pheromone::{Pheromone, PheromoneTrails};
pub use shared::{AgentRole, BehaviorState, PheromoneKind, WorldSnapshot};
pub use sim::Simulation;
pub use spatial::{Bounds, random_direction, seek, within};
pub use threat::{Threat, ThreatKey};
pub use timer::Timer;
pub use walk::RandomWalk;
pub use world::World;

/// Random source used by the engine. Any seeded generator gives a reproducible run.
pub type SimRng = rand_chacha::ChaCha8Rng;

// World size defaults
pub const DEFAULT_WORLD_WIDTH: f32 = 1366.0;
pub const DEFAULT_WORLD_HEIGHT: f32 = 768.0;

// Population defaults
pub const DEFAULT_FOOD_COUNT: u32 = 5;
pub const DEFAULT_ANT_COUNT: u32 = 20;

// Movement constants
pub const SPEED_DIVISOR: f32 = 30.0; // Every per-tick displacement is divided by this
pub const BASE_STEP: f32 = 5.0; // Straight-line step toward nest or food, before the divisor
pub const GUARD_STEP: f32 = 2.0; // Guards rush toward alerts, no divisor
pub const NURSE_SPEED: f32 = 0.5;
pub const THREAT_SPEED: f32 = 1.0;
pub const ANT_WALK_DURATION: (f32, f32) = (0.5, 1.5);
pub const NURSE_WALK_DURATION: (f32, f32) = (0.5, 2.0);
pub const THREAT_WALK_DURATION: (f32, f32) = (1.0, 3.0);

// Detection radii
pub const PHEROMONE_DETECT_RADIUS: f32 = 15.0;
pub const FOOD_DETECT_RADIUS: f32 = 20.0;
pub const NEST_RADIUS: f32 = 50.0;

// Pheromone constants
pub const MIN_PHEROMONE_SPACING: f32 = 30.0;
pub const TRAIL_MARKER_RADIUS: f32 = 5.0;
pub const ALERT_MARKER_RADIUS: f32 = 15.0; // Alerts are drawn and sensed larger than trails
pub const ALERT_LIFETIME: f32 = 30.0;

// Resource economy
pub const NEST_CAPACITY: u32 = 100;
pub const FOOD_RESOURCES: (u32, u32) = (10, 50);
pub const THREAT_FOOD_RESOURCES: (u32, u32) = (10, 20);
pub const NURSE_STACK_INTERVAL: f32 = 15.0;
pub const NURSE_STACK_THRESHOLD: u32 = 3;
pub const NURSE_SPAWN_WEIGHT: f32 = 0.25;
pub const GUARD_SPAWN_WEIGHT: f32 = 0.25;
pub const FORAGER_SPAWN_WEIGHT: f32 = 0.5;
pub const QUEEN_OFFSET: f32 = 10.0;

// Threat constants
pub const THREAT_SPAWN_INTERVAL: f32 = 60.0;
pub const MAX_THREATS: u32 = 4;
pub const THREAT_POWER: (u32, u32) = (3, 5);
pub const THREAT_RADIUS: f32 = 20.0;
