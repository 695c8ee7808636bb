// Count-up timer driven by the clock deltas handed to `tick`.
// Counts up from 0 to max_value

#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    pub max_value: f32,
    pub value: f32,
}

impl Timer {
    /// Create a new timer with a max value and an initial value
    pub fn new(max_value: f32, initial_value: f32) -> Self {
        Self {
            max_value,
            value: initial_value,
        }
    }

    /// Returns true if the timer has gone past the max value
    pub fn is_ready(&self) -> bool {
        self.value >= self.max_value
    }

    /// Update the timer by dt (delta time)
    pub fn update(&mut self, dt: f32) {
        self.value += dt;
    }

    /// Restart counting from zero, dropping any overshoot.
    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    /// Time left before the timer is ready.
    pub fn remaining(&self) -> f32 {
        (self.max_value - self.value).max(0.0)
    }
}
