mod rendering;

pub use rendering::Renderer;

use macroquad::prelude::Color;

// Palette
pub const BACKGROUND_COLOR: Color = Color::new(0.71, 0.40, 0.11, 1.0);
pub const NEST_COLOR: Color = Color::new(0.40, 0.26, 0.13, 1.0);
pub const FOOD_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
pub const TRAIL_COLOR: Color = Color::new(0.78, 0.78, 1.0, 1.0);
pub const ALERT_COLOR: Color = Color::new(1.0, 0.47, 0.47, 0.6);
pub const QUEEN_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const FORAGER_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const NURSE_COLOR: Color = Color::new(1.0, 0.41, 0.71, 1.0); // pink
pub const GUARD_COLOR: Color = Color::new(0.0, 0.0, 1.0, 1.0);
pub const THREAT_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const TEXT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

// Sizes in world units
pub const ANT_SIZE: f32 = 4.0;
pub const GUARD_SIZE: f32 = ANT_SIZE + 2.0;
pub const QUEEN_SIZE: f32 = 10.0;
pub const LABEL_FONT_SIZE: f32 = 24.0;
pub const BANNER_FONT_SIZE: f32 = 72.0;

// Time units over which an alert fades to its faintest
pub const ALERT_FADE_TIME: f32 = 30.0;
