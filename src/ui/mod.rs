mod button;
mod slider;

pub use button::{Button, ButtonAction};
pub use slider::Slider;

// UI constants - functions for responsive layout
use macroquad::prelude::{Rect, screen_width, screen_height};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const SLIDER_Y: f32 = 200.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    (screen_width() - PANEL_WIDTH).max(0.0)
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Create UI buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    vec![
        Button::new(Rect::new(px, 20.0, PANEL_WIDTH, BUTTON_HEIGHT), ButtonAction::Start),
        Button::new(Rect::new(px, 70.0, PANEL_WIDTH, BUTTON_HEIGHT), ButtonAction::Stop),
        Button::new(Rect::new(px, 120.0, PANEL_WIDTH, BUTTON_HEIGHT), ButtonAction::Reset),
    ]
}
