use serde::Serialize;

/// Role tag of an agent. The per-role data lives in the engine.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentRole {
    Forager,
    Nurse,
    Guard,
}

/// Behavior state of an agent, computed once per tick.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BehaviorState {
    Searching,
    GoingToFood,
    ReturningToNest,
    Attacking,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PheromoneKind {
    FoodTrail,
    Alert,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct NestView {
    pub pos: (f32, f32),
    pub radius: f32,
    pub resources: u32,
    pub capacity: u32,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct FoodView {
    pub id: u32,
    pub pos: (f32, f32),
    pub radius: f32,
    pub resources: u32,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PheromoneView {
    pub pos: (f32, f32),
    pub kind: PheromoneKind,
    pub radius: f32,
    pub food_id: Option<u32>, // id of the source a trail leads to
    pub created_at: f32,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct AgentView {
    pub pos: (f32, f32),
    pub role: AgentRole,
    pub state: BehaviorState,
    pub has_food: bool,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ThreatView {
    pub pos: (f32, f32),
    pub radius: f32,
    pub power: u32,
}

/// Read-only copy of everything the host needs to draw one frame.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WorldSnapshot {
    pub time: f32,
    pub width: f32,
    pub height: f32,
    pub victory: bool,
    pub queen: (f32, f32),
    pub nest: NestView,
    pub foods: Vec<FoodView>,
    pub pheromones: Vec<PheromoneView>,
    pub agents: Vec<AgentView>,
    pub threats: Vec<ThreatView>,
}

impl WorldSnapshot {
    /// Number of agents with the given role.
    pub fn count_role(&self, role: AgentRole) -> usize {
        self.agents.iter().filter(|a| a.role == role).count()
    }

    /// Number of markers of the given kind.
    pub fn count_pheromones(&self, kind: PheromoneKind) -> usize {
        self.pheromones.iter().filter(|p| p.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(role: AgentRole) -> AgentView {
        AgentView {
            pos: (0.0, 0.0),
            role,
            state: BehaviorState::Searching,
            has_food: false,
        }
    }

    #[test]
    fn test_count_role() {
        let snapshot = WorldSnapshot {
            time: 0.0,
            width: 10.0,
            height: 10.0,
            victory: false,
            queen: (0.0, 0.0),
            nest: NestView {
                pos: (5.0, 5.0),
                radius: 1.0,
                resources: 0,
                capacity: 10,
            },
            foods: Vec::new(),
            pheromones: vec![PheromoneView {
                pos: (1.0, 1.0),
                kind: PheromoneKind::Alert,
                radius: 3.0,
                food_id: None,
                created_at: 0.0,
            }],
            agents: vec![
                agent(AgentRole::Forager),
                agent(AgentRole::Guard),
                agent(AgentRole::Forager),
            ],
            threats: Vec::new(),
        };

        assert_eq!(snapshot.count_role(AgentRole::Forager), 2);
        assert_eq!(snapshot.count_role(AgentRole::Nurse), 0);
        assert_eq!(snapshot.count_pheromones(PheromoneKind::Alert), 1);
        assert_eq!(snapshot.count_pheromones(PheromoneKind::FoodTrail), 0);
    }
}
