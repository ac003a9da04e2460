mod surface;
mod framebuffer;
mod renderer;
mod screen;

pub use surface::{Surface, Region, Rgba, TRAIL_COLOR, ANT_COLOR, BACKGROUND_COLOR};
pub use framebuffer::FrameBuffer;
pub use renderer::Renderer;
pub use screen::Screen;

use macroquad::prelude::*;
use crate::application::{AnimationDriver, ControlPort};
use crate::ui::{Button, Slider, panel_x, PANEL_WIDTH};

/// Format large numbers with K/M/B suffixes
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255)
    );
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel with buttons, the speed slider and counters
pub fn draw_controls<S: Surface>(
    driver: &AnimationDriver<S>,
    buttons: &[Button],
    slider: &Slider,
    notice: Option<&str>,
    mouse_pos: (f32, f32)
) {
    draw_panel_background();

    let running = driver.is_running();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos, running));
    slider.draw(mouse_pos);

    let px = panel_x();
    let (cols, rows) = driver.simulation().grid().dimensions();

    let labels = [
        ("Steps:", px, 260.0, 16.0, WHITE),
        (
            &format_number(driver.step_count()),
            px, 280.0, 20.0,
            Color::from_rgba(231, 76, 60, 255)
        ),
        ("Updates/tick:", px, 315.0, 16.0, WHITE),
        (
            &format!("{}", driver.updates_per_tick()),
            px, 335.0, 14.0,
            Color::from_rgba(180, 180, 180, 255)
        ),
        ("Status:", px, 370.0, 16.0, WHITE),
        (
            if running { "Running" } else { "Stopped" },
            px, 390.0, 16.0,
            if running {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            }
        ),
        ("Grid:", px, 425.0, 14.0, WHITE),
        (
            &format!("{}x{}, {} filled", cols, rows, format_number(driver.simulation().grid().filled_count() as u64)),
            px, 442.0, 12.0,
            Color::from_rgba(150, 150, 150, 255)
        ),
    ];

    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });

    let controls = [
        ("Keys:", px, 480.0, 14.0, WHITE),
        ("Space: Start/Stop", px, 495.0, 12.0, GRAY),
        ("R: Reset", px, 508.0, 12.0, GRAY),
        ("Up/Down: Speed", px, 521.0, 12.0, GRAY),
    ];

    controls.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });

    if let Some(notice) = notice {
        draw_text_label(notice, px, 555.0, 12.0, Color::from_rgba(255, 120, 100, 255));
    }
}
