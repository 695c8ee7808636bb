use antcolony::simulation::Simulation;
use macroquad::prelude::*;

use crate::engine::Renderer;

/// Window front end: feeds the clock to the simulation and draws its snapshot.
pub struct ColonyApp {
    simulation: Simulation, // Core colony logic, owned for the whole run.
    renderer: Renderer,     // Draws one snapshot per frame.
    time_scale: f32,        // Simulation time units per wall-clock second.
    clock: f32,             // Monotonic clock handed to `tick`; frozen while paused.
    is_paused: bool,
}

impl ColonyApp {
    pub fn new(simulation: Simulation, time_scale: f32) -> Self {
        Self {
            simulation,
            renderer: Renderer::new(),
            time_scale,
            clock: 0.0,
            is_paused: false,
        }
    }

    /// Runs the main application loop until Escape is pressed or the window closes.
    pub async fn run(&mut self) {
        let mut last_time = get_time(); // wall-clock seconds

        loop {
            let now = get_time();
            let dt = (now - last_time) as f32;
            last_time = now;

            if is_key_pressed(KeyCode::Escape) {
                break;
            }
            if is_key_pressed(KeyCode::Space) {
                self.is_paused = !self.is_paused;
            }

            if !self.is_paused {
                self.clock += dt * self.time_scale;
                self.simulation.tick(self.clock);
            }

            let snapshot = self.simulation.snapshot();
            self.renderer.render(&snapshot, self.is_paused);

            // Yield back to Macroquad (swap buffers, poll events, vsync)
            next_frame().await;
        }
    }
}
