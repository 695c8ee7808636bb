use macroquad::prelude::Vec2;

/// The colony's store. Holds at most `capacity` units.
#[derive(Debug, Clone, PartialEq)]
pub struct Nest {
    pub pos: Vec2,
    pub radius: f32,
    pub resources: u32,
    pub capacity: u32,
}

impl Nest {
    pub fn new(pos: Vec2, radius: f32, capacity: u32) -> Self {
        Self {
            pos,
            radius,
            resources: 0,
            capacity,
        }
    }

    /// Adds one unit, saturating at capacity.
    pub fn add_resource(&mut self) {
        self.resources = self.resources.saturating_add(1).min(self.capacity);
    }

    /// Removes one unit for nurse use. Returns false when the store is empty.
    pub fn take_resource(&mut self) -> bool {
        if self.resources == 0 {
            return false;
        }
        self.resources -= 1;
        true
    }

    pub fn is_full(&self) -> bool {
        self.resources >= self.capacity
    }
}

/// Decorative queen marker. No behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Queen {
    pub pos: Vec2,
}
