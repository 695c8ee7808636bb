use macroquad::prelude::Vec2;
use slotmap::new_key_type;

use super::RandomWalk;

new_key_type! {
    /// Key for the threat slotmap.
    pub struct ThreatKey;
}

/// A mobile hostile that kills agents on contact.
#[derive(Debug, Clone)]
pub struct Threat {
    pub id: u32,
    pub pos: Vec2,
    pub power: u32,
    pub radius: f32,
    pub speed: f32,
    pub walk: RandomWalk,
}

impl Threat {
    /// Takes one hit. Returns true when the threat is destroyed.
    pub fn take_hit(&mut self) -> bool {
        self.power = self.power.saturating_sub(1);
        self.is_destroyed()
    }

    pub fn is_destroyed(&self) -> bool {
        self.power == 0
    }
}
