use macroquad::prelude::Vec2;
use rand::Rng;
use shared::{AgentRole, BehaviorState};
use slotmap::new_key_type;

use super::{ANT_WALK_DURATION, FoodKey, NURSE_WALK_DURATION, RandomWalk, Timer};
use crate::config::SimulationConfig;

new_key_type! {
    /// Key for ant slotmap.
    pub struct AntKey;
}

/// Role tag plus the data only that role carries.
#[derive(Debug, Clone)]
pub enum RoleState {
    Forager {
        /// Set by an alert marker: drop the current task and head home.
        alarmed: bool,
    },
    Nurse {
        stack: u32,
        stack_timer: Timer,
    },
    Guard {
        /// Where the guard is heading to fight, if anywhere.
        target: Option<Vec2>,
    },
}

impl RoleState {
    pub fn new(role: AgentRole, config: &SimulationConfig) -> Self {
        match role {
            AgentRole::Forager => RoleState::Forager { alarmed: false },
            AgentRole::Nurse => RoleState::Nurse {
                stack: 0,
                stack_timer: Timer::new(config.nurse_stack_interval, 0.0),
            },
            AgentRole::Guard => RoleState::Guard { target: None },
        }
    }

    pub fn role(&self) -> AgentRole {
        match self {
            RoleState::Forager { .. } => AgentRole::Forager,
            RoleState::Nurse { .. } => AgentRole::Nurse,
            RoleState::Guard { .. } => AgentRole::Guard,
        }
    }
}

/// State of an ant.
#[derive(Debug, Clone)]
pub struct Ant {
    pub pos: Vec2,
    pub role: RoleState,
    pub has_food: bool,
    pub target_food: Option<FoodKey>,
    pub emitting_trail: bool,
    /// Where this ant last laid a trail marker on the current trip.
    pub last_trail_pos: Option<Vec2>,
    pub walk: RandomWalk,
}

impl Ant {
    /// Create a new ant.
    pub fn new(role: AgentRole, pos: Vec2, config: &SimulationConfig, rng: &mut impl Rng) -> Self {
        let duration = match role {
            AgentRole::Nurse => NURSE_WALK_DURATION,
            _ => ANT_WALK_DURATION,
        };
        Self {
            pos,
            role: RoleState::new(role, config),
            has_food: false,
            target_food: None,
            emitting_trail: false,
            last_trail_pos: None,
            walk: RandomWalk::new(rng, duration, config.speed_divisor),
        }
    }

    pub fn kind(&self) -> AgentRole {
        self.role.role()
    }

    /// The one reading of "what is this ant doing" used for a whole tick.
    pub fn behavior_state(&self) -> BehaviorState {
        match &self.role {
            RoleState::Forager { alarmed } => {
                if *alarmed || self.has_food {
                    BehaviorState::ReturningToNest
                } else if self.target_food.is_some() {
                    BehaviorState::GoingToFood
                } else {
                    BehaviorState::Searching
                }
            }
            RoleState::Nurse { .. } => BehaviorState::Searching,
            RoleState::Guard { target } => match target {
                Some(_) => BehaviorState::Attacking,
                None => BehaviorState::Searching,
            },
        }
    }

    /// Stack count for nurses, zero for every other role.
    pub fn stack(&self) -> u32 {
        match &self.role {
            RoleState::Nurse { stack, .. } => *stack,
            _ => 0,
        }
    }

    pub fn is_alarmed(&self) -> bool {
        matches!(self.role, RoleState::Forager { alarmed: true })
    }

    /// Sends a guard toward `pos`. No effect on other roles.
    pub fn assign_guard_target(&mut self, pos: Vec2) {
        if let RoleState::Guard { target } = &mut self.role {
            *target = Some(pos);
        }
    }

    pub(crate) fn stop_trail(&mut self) {
        self.emitting_trail = false;
        self.last_trail_pos = None;
    }
}
