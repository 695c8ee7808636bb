use macroquad::prelude::Vec2;
use rand::Rng;

/// The bounded rectangle every position lives in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamps a position to `[0, width] x [0, height]`.
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        Vec2::new(pos.x.clamp(0.0, self.width), pos.y.clamp(0.0, self.height))
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }

    /// Uniformly random position inside the rectangle.
    pub fn random_pos(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.random_range(0.0..=self.width),
            rng.random_range(0.0..=self.height),
        )
    }
}

/// Strict proximity test: a point exactly on the radius is outside.
#[inline(always)]
pub fn within(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}

/// One straight-line step of length `step` from `from` toward `to`.
/// Returns `from` unchanged when the two points coincide.
pub fn seek(from: Vec2, to: Vec2, step: f32) -> Vec2 {
    let delta = to - from;
    let distance = delta.length();
    if distance == 0.0 {
        return from;
    }
    from + delta / distance * step
}

/// Random grid direction with each axis in {-1, 0, 1}, divided by `divisor`.
pub fn random_direction(rng: &mut impl Rng, divisor: f32) -> Vec2 {
    let dx = rng.random_range(-1..=1) as f32;
    let dy = rng.random_range(-1..=1) as f32;
    Vec2::new(dx / divisor, dy / divisor)
}
