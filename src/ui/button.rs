use macroquad::prelude::*;

/// Control-panel command a button issues
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Start,
    Stop,
    Reset,
}

impl ButtonAction {
    pub const fn label(self) -> &'static str {
        match self {
            ButtonAction::Start => "Start",
            ButtonAction::Stop => "Stop",
            ButtonAction::Reset => "Reset",
        }
    }

    /// Start only makes sense while stopped and Stop while running
    pub const fn is_enabled(self, running: bool) -> bool {
        match self {
            ButtonAction::Start => !running,
            ButtonAction::Stop => running,
            ButtonAction::Reset => true,
        }
    }
}

const FILL: Color = Color::new(0.17, 0.24, 0.31, 1.0);
const FILL_HOVER: Color = Color::new(0.20, 0.29, 0.37, 1.0);
const FILL_DISABLED: Color = Color::new(0.25, 0.25, 0.25, 1.0);

/// Panel button bound to one [`ButtonAction`]
#[derive(Clone)]
pub struct Button {
    bounds: Rect,
    action: ButtonAction,
}

impl Button {
    pub fn new(bounds: Rect, action: ButtonAction) -> Self {
        Self { bounds, action }
    }

    pub fn action(&self) -> ButtonAction {
        self.action
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.bounds.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Disabled buttons are greyed out and ignore hover
    pub fn draw(&self, mouse_pos: (f32, f32), running: bool) {
        let enabled = self.action.is_enabled(running);
        let (fill, text_color) = match (enabled, self.is_hovered(mouse_pos)) {
            (false, _) => (FILL_DISABLED, GRAY),
            (true, true) => (FILL_HOVER, WHITE),
            (true, false) => (FILL, WHITE),
        };

        let Rect { x, y, w, h } = self.bounds;
        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, text_color);

        let label = self.action.label();
        let size = measure_text(label, None, 20, 1.0);
        draw_text(label, x + (w - size.width) / 2.0, y + (h + size.height) / 2.0, 20.0, text_color);
    }

    /// Left click on an enabled button this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32), running: bool) -> bool {
        self.action.is_enabled(running)
            && self.is_hovered(mouse_pos)
            && is_mouse_button_pressed(MouseButton::Left)
    }
}
