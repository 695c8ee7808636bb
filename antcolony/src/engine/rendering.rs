use macroquad::prelude::*;
use shared::{
    AgentRole, AgentView, FoodView, NestView, PheromoneKind, PheromoneView, ThreatView,
    WorldSnapshot,
};

use super::{
    ALERT_COLOR, ALERT_FADE_TIME, ANT_SIZE, BACKGROUND_COLOR, BANNER_FONT_SIZE, FOOD_COLOR,
    FORAGER_COLOR, GUARD_COLOR, GUARD_SIZE, LABEL_FONT_SIZE, NEST_COLOR, NURSE_COLOR,
    QUEEN_COLOR, QUEEN_SIZE, TEXT_COLOR, THREAT_COLOR, TRAIL_COLOR,
};

/// Draws a `WorldSnapshot`, scaled from world units to the window.
pub struct Renderer {
    scale: Vec2,
}

impl Renderer {
    pub fn new() -> Self {
        Self { scale: Vec2::ONE }
    }

    pub fn render(&mut self, snapshot: &WorldSnapshot, is_paused: bool) {
        self.scale = Vec2::new(
            screen_width() / snapshot.width,
            screen_height() / snapshot.height,
        );

        clear_background(BACKGROUND_COLOR);
        self.draw_nest(&snapshot.nest);
        self.draw_food(&snapshot.foods);
        self.draw_pheromones(&snapshot.pheromones, snapshot.time);
        self.circle(snapshot.queen, QUEEN_SIZE, QUEEN_COLOR);
        self.draw_ants(&snapshot.agents);
        self.draw_threats(&snapshot.threats);

        if snapshot.victory {
            self.draw_banner("Simulation complete.");
        } else if is_paused {
            self.draw_banner("Paused");
        }
    }

    fn to_screen(&self, (x, y): (f32, f32)) -> Vec2 {
        Vec2::new(x * self.scale.x, y * self.scale.y)
    }

    fn circle(&self, pos: (f32, f32), radius: f32, color: Color) {
        let p = self.to_screen(pos);
        draw_circle(p.x, p.y, radius * self.scale.min_element(), color);
    }

    fn draw_nest(&self, nest: &NestView) {
        self.circle(nest.pos, nest.radius, NEST_COLOR);
        let p = self.to_screen(nest.pos);
        let label = format!("Nest: {}/{}", nest.resources, nest.capacity);
        draw_text(&label, p.x - 50.0, p.y - 40.0, LABEL_FONT_SIZE, TEXT_COLOR);
    }

    fn draw_food(&self, foods: &[FoodView]) {
        for food in foods {
            self.circle(food.pos, food.radius, FOOD_COLOR);
            let p = self.to_screen(food.pos);
            let label = format!("{} ({})", food.id, food.resources);
            draw_text(&label, p.x - 10.0, p.y - 10.0, LABEL_FONT_SIZE, BLACK);
        }
    }

    fn draw_pheromones(&self, pheromones: &[PheromoneView], now: f32) {
        for pheromone in pheromones {
            let color = match pheromone.kind {
                PheromoneKind::FoodTrail => TRAIL_COLOR,
                PheromoneKind::Alert => {
                    // Alerts fade as they age
                    let age = (now - pheromone.created_at) / ALERT_FADE_TIME;
                    let mut color = ALERT_COLOR;
                    color.a *= (1.0 - age).clamp(0.2, 1.0);
                    color
                }
            };
            self.circle(pheromone.pos, pheromone.radius, color);
        }
    }

    fn draw_ants(&self, agents: &[AgentView]) {
        for agent in agents {
            let (size, color) = match agent.role {
                AgentRole::Forager => (ANT_SIZE, FORAGER_COLOR),
                AgentRole::Nurse => (ANT_SIZE, NURSE_COLOR),
                AgentRole::Guard => (GUARD_SIZE, GUARD_COLOR),
            };
            self.circle(agent.pos, size, color);
            if agent.has_food {
                self.circle(agent.pos, size / 2.0, FOOD_COLOR);
            }
        }
    }

    fn draw_threats(&self, threats: &[ThreatView]) {
        for threat in threats {
            self.circle(threat.pos, threat.radius, THREAT_COLOR);
            let p = self.to_screen(threat.pos);
            draw_text(
                &threat.power.to_string(),
                p.x - 5.0,
                p.y + 5.0,
                LABEL_FONT_SIZE,
                TEXT_COLOR,
            );
        }
    }

    fn draw_banner(&self, text: &str) {
        let dims = measure_text(text, None, BANNER_FONT_SIZE as u16, 1.0);
        draw_text(
            text,
            screen_width() / 2.0 - dims.width / 2.0,
            screen_height() / 2.0 - dims.height / 2.0,
            BANNER_FONT_SIZE,
            TEXT_COLOR,
        );
    }
}
