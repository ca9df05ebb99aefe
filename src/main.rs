use macroquad::prelude::*;
use growth_life::{
    Camera, Config, GameState,
    input, rendering,
    ui::{self, lattice_area_height, lattice_area_width},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Growth Lattice".to_owned(),
        window_width: 980,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Config from the first argument, defaults when absent or unreadable
fn load_config() -> Config {
    match std::env::args().nth(1) {
        Some(path) => Config::from_file(&path).unwrap_or_else(|err| {
            log::error!("Could not load config {path}: {err}; using defaults");
            Config::default()
        }),
        None => Config::default(),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config();
    let cell_size = config.viewer.cell_size;
    let mut state = GameState::new(&config);
    let mut camera = Camera::centered(lattice_area_width(), lattice_area_height());

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(state.seed_kind);

        // Input
        state = input::process_button_clicks(state, &buttons, mouse_pos);
        input::handle_zoom(&mut camera);
        input::handle_pan(&mut camera, mouse_pos);
        input::handle_mouse_paint(&mut state, &camera, mouse_pos, cell_size);
        state = input::process_keyboard_input(state, &mut camera);

        // Simulation
        state = state.tick(get_frame_time());

        // Render (with timing)
        let render_start = std::time::Instant::now();
        clear_background(Color::from_rgba(8, 8, 8, 255));
        rendering::draw_lattice(&state.lattice, &camera, cell_size);
        rendering::draw_controls(&state, &camera, &buttons, mouse_pos);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
