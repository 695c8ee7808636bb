use macroquad::prelude::Vec2;
use rand::Rng;

use super::Timer;
use super::spatial::random_direction;

/// Bounded random walk: keeps one grid direction for a random duration, then resamples.
#[derive(Debug, Clone)]
pub struct RandomWalk {
    pub direction: Vec2,
    pub timer: Timer,
    duration: (f32, f32),
    divisor: f32,
}

impl RandomWalk {
    /// `duration` is the half-open range the hold time is drawn from.
    pub fn new(rng: &mut impl Rng, duration: (f32, f32), divisor: f32) -> Self {
        let hold = sample_duration(rng, duration);
        Self {
            direction: random_direction(rng, divisor),
            timer: Timer::new(hold, 0.0),
            duration,
            divisor,
        }
    }

    /// Advances the walk clock by `dt` and returns the per-tick displacement (unit speed).
    pub fn advance(&mut self, rng: &mut impl Rng, dt: f32) -> Vec2 {
        self.timer.update(dt);
        if self.timer.is_ready() {
            self.direction = random_direction(rng, self.divisor);
            self.timer = Timer::new(sample_duration(rng, self.duration), 0.0);
        }
        self.direction
    }
}

fn sample_duration(rng: &mut impl Rng, (min, max): (f32, f32)) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_direction_held_until_timer_fires() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut walk = RandomWalk::new(&mut rng, (0.5, 1.5), 30.0);
        let hold = walk.timer.max_value;
        assert!((0.5..1.5).contains(&hold));

        let first = walk.direction;
        // Many tiny steps that stay below the hold time never resample.
        let steps = ((hold - 0.01) / 0.01) as usize;
        for _ in 0..steps.saturating_sub(1) {
            assert_eq!(walk.advance(&mut rng, 0.01), first);
        }
    }

    #[test]
    fn test_resample_draws_new_hold_time() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut walk = RandomWalk::new(&mut rng, (1.0, 3.0), 30.0);
        walk.advance(&mut rng, 10.0);
        assert_eq!(walk.timer.value, 0.0);
        assert!((1.0..3.0).contains(&walk.timer.max_value));
        assert!(walk.direction.x.abs() <= 1.0 / 30.0 + 1e-6);
    }
}
