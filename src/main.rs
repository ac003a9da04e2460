use clap::Parser;
use macroquad::prelude::*;
use langtons_ant::{
    AnimationDriver, ConfigError, ControlPort, Screen, Settings,
    config::MAX_SPEED,
    ui::{self, Slider},
    rendering, input,
};

/// Langton's Ant on a toroidal grid
#[derive(Parser, Debug)]
#[command(name = "langtons_ant", version, about)]
struct Cli {
    /// Initial grid area width in pixels
    #[arg(long, default_value_t = Settings::default().width)]
    width: u32,

    /// Initial grid area height in pixels
    #[arg(long, default_value_t = Settings::default().height)]
    height: u32,

    /// Edge length of one cell in pixels
    #[arg(long, default_value_t = Settings::default().cell_size)]
    cell_size: u32,

    /// Initial speed; each tick runs speed/10 + 1 steps
    #[arg(long, default_value_t = Settings::default().speed)]
    speed: u32,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            width: cli.width,
            height: cli.height,
            cell_size: cli.cell_size,
            speed: cli.speed,
        }
    }
}

fn window_conf() -> Conf {
    let settings = Settings::from(Cli::parse());
    Conf {
        window_title: "Langton's Ant".to_owned(),
        window_width: (settings.width as f32 + ui::PANEL_WIDTH) as i32,
        window_height: settings.height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

/// Grid area in whole pixels
fn grid_area() -> (u32, u32) {
    (ui::grid_area_width() as u32, ui::grid_area_height() as u32)
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt::init();
    let settings = Settings::from(Cli::parse());

    let (width, height) = grid_area();
    let mut driver = match AnimationDriver::new(Screen::new(width, height), settings.cell_size, settings.speed) {
        Ok(driver) => driver,
        Err(err) => {
            tracing::error!(%err, "cannot start simulation");
            std::process::exit(2);
        }
    };

    let mut slider = Slider::new(ui::panel_x() + 10.0, ui::SLIDER_Y, ui::PANEL_WIDTH - 20.0, "Speed", MAX_SPEED, settings.speed);
    let mut last_area = (width, height);
    let mut notice: Option<String> = None;

    loop {
        let mouse_pos = mouse_position();
        slider.set_position(ui::panel_x() + 10.0, ui::SLIDER_Y);
        let buttons = ui::create_buttons();

        // Window resizes rebuild the grid; a rejected size keeps the old
        // grid on screen and says why until the next successful resize
        let area = grid_area();
        if area != last_area {
            last_area = area;
            notice = match driver.on_resize(area.0, area.1) {
                Ok(()) => None,
                Err(ConfigError::DegenerateSurface { .. }) => Some("Window too small".to_owned()),
                Err(err) => Some(err.to_string()),
            };
        }

        input::process_button_clicks(&mut driver, &buttons, mouse_pos);
        input::process_slider(&mut driver, &mut slider, mouse_pos);
        input::process_keyboard_input(&mut driver, &mut slider);

        driver.on_frame();

        clear_background(Color::from_rgba(236, 240, 241, 255));
        driver.surface_mut().present(0.0, 0.0);
        rendering::draw_controls(&driver, &buttons, &slider, notice.as_deref(), mouse_pos);

        next_frame().await;
    }
}
