use std::collections::HashMap;

use antcolony::config::SimulationConfig;
use antcolony::simulation::{AgentRole, BehaviorState, PheromoneKind, Simulation};
use macroquad::prelude::Vec2;

fn seeded(seed: u64) -> Simulation {
    let config = SimulationConfig {
        seed: Some(seed),
        ..Default::default()
    };
    Simulation::initialize(config).unwrap()
}

/// A world with the nest and nothing else in it.
fn empty_world(seed: u64) -> Simulation {
    let mut sim = seeded(seed);
    sim.ants.clear();
    sim.world.foods.clear();
    sim.world.threats.clear();
    sim
}

/// A point `distance` away from the nest along x, on whichever side has room.
fn beside_nest(sim: &Simulation, distance: f32) -> Vec2 {
    let nest = sim.world.nest.pos;
    if nest.x > sim.world.bounds.width / 2.0 {
        nest - Vec2::new(distance, 0.0)
    } else {
        nest + Vec2::new(distance, 0.0)
    }
}

#[test]
fn forager_on_last_unit_collects_and_source_disappears() {
    let mut sim = empty_world(1);
    let pos = beside_nest(&sim, 300.0);
    let food = sim.spawn_food(pos, 1);
    let forager = sim.spawn_ant(AgentRole::Forager, pos);

    sim.tick(0.1);

    let ant = &sim.ants[forager];
    assert!(ant.has_food);
    assert_eq!(ant.target_food, Some(food), "Target dangles until next looked up");
    assert!(sim.world.foods.get(food).is_none());
    assert!(sim.snapshot().foods.is_empty());
    assert!(!sim.world.pheromones.references(food));

    sim.tick(0.2);
    let ant = &sim.ants[forager];
    assert!(!ant.emitting_trail, "No trail is laid toward a source that is gone");
    assert!(sim.world.pheromones.is_empty());
}

#[test]
fn delivery_fills_nest_and_flags_victory_same_tick() {
    let mut sim = empty_world(2);
    let capacity = sim.world.nest.capacity;
    sim.world.nest.resources = capacity - 1;
    let nest = sim.world.nest.pos;
    let forager = sim.spawn_ant(AgentRole::Forager, nest);
    sim.ants[forager].has_food = true;

    sim.tick(0.1);

    assert_eq!(sim.world.nest.resources, capacity);
    assert!(sim.world.nest.is_full());
    assert!(sim.victory);
    assert!(!sim.ants[forager].has_food);

    // Victory is only a flag; ants keep acting.
    sim.tick(0.2);
    assert!(sim.victory);
    assert_eq!(sim.ants.len(), 1);
}

#[test]
fn three_nurse_stacks_raise_exactly_one_ant() {
    let mut sim = empty_world(3);
    let nest = sim.world.nest.pos;
    for _ in 0..3 {
        sim.spawn_ant(AgentRole::Nurse, nest);
    }

    sim.world.nest.resources = 1;
    sim.tick(15.0);
    assert_eq!(sim.nurse_stacks(), 1);
    assert_eq!(sim.ants.len(), 3);

    sim.world.nest.resources = 1;
    sim.tick(15.1);
    assert_eq!(sim.nurse_stacks(), 2);
    assert_eq!(sim.ants.len(), 3);

    sim.world.nest.resources = 1;
    sim.tick(15.2);
    assert_eq!(sim.nurse_stacks(), 0, "All stacks are spent on the new ant");
    assert_eq!(sim.ants.len(), 4);
    assert_eq!(sim.world.nest.resources, 0);
    assert!(sim.ants.values().any(|ant| ant.pos == nest));
}

#[test]
fn guard_finishes_weak_threat_and_leaves_food() {
    let mut sim = empty_world(4);
    let pos = beside_nest(&sim, 250.0);
    let threat = sim.spawn_threat(pos, 1);
    let guard = sim.spawn_ant(AgentRole::Guard, pos + Vec2::new(0.0, 5.0));

    sim.tick(0.1);

    assert!(sim.world.threats.get(threat).is_none());
    assert!(sim.ants.get(guard).is_none(), "Guard is spent by the attack");
    let foods = sim.snapshot().foods;
    assert_eq!(foods.len(), 1);
    assert_eq!(foods[0].pos, (pos.x, pos.y));
    assert!((10..=20).contains(&foods[0].resources));
}

#[test]
fn alert_lives_thirty_time_units() {
    let mut sim = empty_world(5);
    let pos = beside_nest(&sim, 300.0);
    sim.tick(5.0);
    sim.spawn_ant(AgentRole::Forager, pos);
    sim.spawn_threat(pos, 5);

    sim.tick(5.0);
    assert!(sim.ants.is_empty(), "Threat kills on contact");
    assert_eq!(sim.snapshot().count_pheromones(PheromoneKind::Alert), 1);

    sim.tick(34.0);
    assert_eq!(sim.snapshot().count_pheromones(PheromoneKind::Alert), 1);

    sim.tick(36.0);
    assert_eq!(sim.snapshot().count_pheromones(PheromoneKind::Alert), 0);
}

#[test]
fn forager_harvests_source_until_exhausted() {
    let mut sim = empty_world(6);
    let pos = beside_nest(&sim, 100.0);
    let food = sim.spawn_food(pos, 3);
    let forager = sim.spawn_ant(AgentRole::Forager, pos);

    let mut saw_trail = false;
    for i in 1..=10_000 {
        sim.tick(i as f32 * 0.001);
        saw_trail |= sim.world.pheromones.references(food);
        if sim.world.nest.resources == 3 {
            break;
        }
    }

    assert_eq!(sim.world.nest.resources, 3);
    assert!(saw_trail, "The first trip home lays a trail");
    assert!(sim.world.foods.is_empty());
    assert!(sim.world.pheromones.is_empty());
    assert_eq!(sim.ants[forager].behavior_state(), BehaviorState::Searching);
}

#[test]
fn long_run_keeps_invariants() {
    let mut sim = seeded(7);
    let capacity = sim.world.nest.capacity;
    let mut last_seen: HashMap<u32, u32> = HashMap::new();
    let mut victory = false;

    for i in 1..=3_000 {
        sim.tick(i as f32 * 0.1);

        let nest = &sim.world.nest;
        assert!(nest.resources <= capacity);
        assert_eq!(nest.is_full(), nest.resources == capacity);
        assert!(!victory || sim.victory, "Victory never resets");
        victory = sim.victory;

        for food in sim.world.foods.values() {
            assert!(!food.is_empty(), "Empty sources are removed within the tick");
            if let Some(previous) = last_seen.insert(food.id, food.resources) {
                assert!(food.resources <= previous, "Food {} grew", food.id);
            }
        }
        for pheromone in sim.world.pheromones.iter() {
            if let Some(key) = pheromone.food {
                assert!(sim.world.foods.contains_key(key), "Trail to a removed source");
            }
            if pheromone.kind == PheromoneKind::Alert {
                assert!(pheromone.expires_at.is_some_and(|t| t > sim.now()));
            }
        }
        for ant in sim.ants.values() {
            assert!(sim.world.bounds.contains(ant.pos));
        }
        for threat in sim.world.threats.values() {
            assert!(sim.world.bounds.contains(threat.pos));
            assert!(threat.power > 0);
        }
        assert!(sim.world.threats.len() <= 4);
    }
}
