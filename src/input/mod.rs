use macroquad::prelude::*;
use crate::application::ControlPort;
use crate::config::MAX_SPEED;
use crate::ui::{Button, ButtonAction, Slider};

const SPEED_STEP: u32 = 10;

/// Forward clicked buttons to the control port
pub fn process_button_clicks(
    port: &mut impl ControlPort,
    buttons: &[Button],
    mouse_pos: (f32, f32)
) {
    let running = port.is_running();
    let clicked = buttons
        .iter()
        .find(|btn| btn.is_clicked(mouse_pos, running))
        .map(Button::action);
    if let Some(action) = clicked {
        apply_action(port, action);
    }
}

pub fn apply_action(port: &mut impl ControlPort, action: ButtonAction) {
    match action {
        ButtonAction::Start => port.start(),
        ButtonAction::Stop => port.stop(),
        ButtonAction::Reset => port.reset(),
    }
}

/// Speed slider drags take effect on the next tick
pub fn process_slider(port: &mut impl ControlPort, slider: &mut Slider, mouse_pos: (f32, f32)) {
    if let Some(value) = slider.update(mouse_pos) {
        port.set_speed(value);
    }
}

/// Keyboard shortcuts: Space start/stop, R reset, Up/Down speed
pub fn process_keyboard_input(port: &mut impl ControlPort, slider: &mut Slider) {
    if is_key_pressed(KeyCode::Space) {
        port.toggle();
    }
    if is_key_pressed(KeyCode::R) {
        port.reset();
    }

    let speed = port.speed();
    let adjusted = if is_key_pressed(KeyCode::Up) {
        Some(nudge_speed(speed, true))
    } else if is_key_pressed(KeyCode::Down) {
        Some(nudge_speed(speed, false))
    } else {
        None
    };

    if let Some(value) = adjusted {
        port.set_speed(value);
        slider.set_value(value);
    }
}

/// One keyboard notch up or down, kept on the slider's range
pub fn nudge_speed(speed: u32, up: bool) -> u32 {
    if up {
        speed.saturating_add(SPEED_STEP).min(MAX_SPEED.max(speed))
    } else {
        speed.saturating_sub(SPEED_STEP)
    }
}
