use macroquad::prelude::*;

/// Horizontal integer slider, dragged with the left mouse button
#[derive(Clone)]
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    label: String,
    max: u32,
    value: u32,
    dragging: bool,
}

impl Slider {
    const TRACK_HEIGHT: f32 = 6.0;
    const KNOB_RADIUS: f32 = 8.0;

    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, max: u32, value: u32) -> Self {
        Self {
            x,
            y,
            width,
            label: label.into(),
            max: max.max(1),
            value: value.min(max),
            dragging: false,
        }
    }

    /// Move the knob without reporting a change (keyboard shortcuts)
    pub fn set_value(&mut self, value: u32) {
        self.value = value.min(self.max);
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn knob_x(&self) -> f32 {
        self.x + self.width * self.value as f32 / self.max as f32
    }

    /// Value under a screen x coordinate, clamped to the track
    fn value_at(&self, mouse_x: f32) -> u32 {
        let t = ((mouse_x - self.x) / self.width).clamp(0.0, 1.0);
        (t * self.max as f32).round() as u32
    }

    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x - Self::KNOB_RADIUS
            && mouse_pos.0 <= self.x + self.width + Self::KNOB_RADIUS
            && (mouse_pos.1 - self.y).abs() <= Self::KNOB_RADIUS
    }

    /// Handle dragging and return the new value if it changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<u32> {
        if is_mouse_button_pressed(MouseButton::Left) && self.is_hovered(mouse_pos) {
            self.dragging = true;
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }
        if !self.dragging {
            return None;
        }

        let value = self.value_at(mouse_pos.0);
        (value != self.value).then(|| {
            self.value = value;
            value
        })
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(
            &format!("{}: {}", self.label, self.value),
            self.x,
            self.y - 14.0,
            16.0,
            WHITE,
        );

        draw_rectangle(
            self.x,
            self.y - Self::TRACK_HEIGHT / 2.0,
            self.width,
            Self::TRACK_HEIGHT,
            Color::from_rgba(80, 80, 80, 255),
        );
        draw_rectangle(
            self.x,
            self.y - Self::TRACK_HEIGHT / 2.0,
            self.knob_x() - self.x,
            Self::TRACK_HEIGHT,
            Color::from_rgba(231, 76, 60, 255),
        );

        let knob_color = if self.dragging || self.is_hovered(mouse_pos) {
            WHITE
        } else {
            Color::from_rgba(200, 200, 200, 255)
        };
        draw_circle(self.knob_x(), self.y, Self::KNOB_RADIUS, knob_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_at_clamps() {
        let slider = Slider::new(100.0, 50.0, 200.0, "Speed", 100, 50);
        assert_eq!(slider.value_at(0.0), 0);
        assert_eq!(slider.value_at(200.0), 50);
        assert_eq!(slider.value_at(1000.0), 100);
    }

    #[test]
    fn test_set_value_clamps_to_max() {
        let mut slider = Slider::new(0.0, 0.0, 100.0, "Speed", 100, 500);
        assert_eq!(slider.value, 100);
        slider.set_value(30);
        assert_eq!(slider.value, 30);
    }
}
