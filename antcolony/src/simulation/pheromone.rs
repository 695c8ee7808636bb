use macroquad::prelude::Vec2;
use shared::PheromoneKind;

use super::FoodKey;
use super::spatial::within;

/// A single chemical marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Pheromone {
    pub pos: Vec2,
    pub kind: PheromoneKind,
    pub food: Option<FoodKey>,
    pub radius: f32,
    pub created_at: f32,
    pub expires_at: Option<f32>,
}

impl Pheromone {
    pub fn is_expired(&self, now: f32) -> bool {
        self.expires_at.is_some_and(|t| now >= t)
    }
}

/// Owns every marker in creation order. Agents only read through it.
#[derive(Debug, Clone)]
pub struct PheromoneTrails {
    markers: Vec<Pheromone>,
    pub min_spacing: f32,
    pub trail_radius: f32,
    pub alert_radius: f32,
    pub alert_lifetime: f32,
}

impl PheromoneTrails {
    pub fn new(min_spacing: f32, trail_radius: f32, alert_radius: f32, alert_lifetime: f32) -> Self {
        Self {
            markers: Vec::new(),
            min_spacing,
            trail_radius,
            alert_radius,
            alert_lifetime,
        }
    }

    /// Lays a trail marker toward `food` unless the depositor's previous marker is
    /// within `min_spacing`. Exactly at the spacing is still too close.
    pub fn deposit_trail(
        &mut self,
        pos: Vec2,
        food: FoodKey,
        last_deposit: Option<Vec2>,
        now: f32,
    ) -> bool {
        if let Some(last) = last_deposit {
            if last.distance(pos) <= self.min_spacing {
                return false;
            }
        }
        self.markers.push(Pheromone {
            pos,
            kind: PheromoneKind::FoodTrail,
            food: Some(food),
            radius: self.trail_radius,
            created_at: now,
            expires_at: None,
        });
        true
    }

    /// Lays a time-bounded alert marker.
    pub fn deposit_alert(&mut self, pos: Vec2, now: f32) {
        self.markers.push(Pheromone {
            pos,
            kind: PheromoneKind::Alert,
            food: None,
            radius: self.alert_radius,
            created_at: now,
            expires_at: Some(now + self.alert_lifetime),
        });
    }

    /// First marker of `kind`, in creation order, strictly within `radius` of `pos`.
    pub fn first_within(&self, pos: Vec2, radius: f32, kind: PheromoneKind) -> Option<&Pheromone> {
        self.markers
            .iter()
            .find(|p| p.kind == kind && within(pos, p.pos, radius))
    }

    /// True if `pos` lies inside the footprint of any alert marker.
    pub fn alert_at(&self, pos: Vec2) -> bool {
        self.markers
            .iter()
            .any(|p| p.kind == PheromoneKind::Alert && within(pos, p.pos, p.radius))
    }

    /// Most recently laid alert marker.
    pub fn latest_alert(&self) -> Option<&Pheromone> {
        self.markers
            .iter()
            .rev()
            .find(|p| p.kind == PheromoneKind::Alert)
    }

    /// Drops every trail leading to `food`. Returns the number removed.
    pub fn invalidate_food(&mut self, food: FoodKey) -> usize {
        let before = self.markers.len();
        self.markers.retain(|p| p.food != Some(food));
        before - self.markers.len()
    }

    /// Drops markers whose expiry has passed. Returns the number removed.
    pub fn expire(&mut self, now: f32) -> usize {
        let before = self.markers.len();
        self.markers.retain(|p| !p.is_expired(now));
        before - self.markers.len()
    }

    pub fn references(&self, food: FoodKey) -> bool {
        self.markers.iter().any(|p| p.food == Some(food))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pheromone> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
