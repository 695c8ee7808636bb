use macroquad::prelude::Vec2;
use slotmap::new_key_type;

new_key_type! {
    /// Key for the food slotmap. Stays dangling once the source is removed.
    pub struct FoodKey;
}

/// A depleting food source.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub id: u32,
    pub pos: Vec2,
    pub resources: u32,
    /// True until the first forager collects here and starts laying a trail back.
    pub trail_open: bool,
}

impl Food {
    pub fn new(id: u32, pos: Vec2, resources: u32) -> Self {
        Self {
            id,
            pos,
            resources,
            trail_open: true,
        }
    }

    /// Takes one unit. No-op on an empty source.
    pub fn take_resource(&mut self) {
        self.resources = self.resources.saturating_sub(1);
    }

    pub fn is_empty(&self) -> bool {
        self.resources == 0
    }

    /// Marks the trail to this source as laid. Returns true for the first claimer only.
    pub fn claim_trail(&mut self) -> bool {
        std::mem::replace(&mut self.trail_open, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_resource_decrements() {
        let mut food = Food::new(1, Vec2::ZERO, 2);
        food.take_resource();
        assert_eq!(food.resources, 1);
        assert!(!food.is_empty());
        food.take_resource();
        assert!(food.is_empty());
    }

    #[test]
    fn test_take_resource_on_empty_is_idempotent() {
        let mut food = Food::new(1, Vec2::ZERO, 0);
        for _ in 0..5 {
            food.take_resource();
            assert_eq!(food.resources, 0);
        }
        assert!(food.is_empty());
    }

    #[test]
    fn test_trail_claimed_once() {
        let mut food = Food::new(3, Vec2::ZERO, 10);
        assert!(food.trail_open);
        assert!(food.claim_trail());
        assert!(!food.claim_trail());
        assert!(!food.trail_open);
    }
}
