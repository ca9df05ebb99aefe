use macroquad::prelude::*;

use crate::application::{Camera, GameState};
use crate::domain::MAX_VITALITY;
use crate::ui::{Button, ButtonAction, lattice_area_height, lattice_area_width};

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Handle pan with middle mouse button drag
pub fn handle_pan(camera: &mut Camera, mouse_pos: (f32, f32)) {
    camera.drag(is_mouse_button_down(MouseButton::Middle), mouse_pos);
}

/// Paint with LMB (full vitality) or erase with RMB while paused
pub fn handle_mouse_paint(state: &mut GameState, camera: &Camera, mouse_pos: (f32, f32), cell_size: f32) {
    if state.is_running || mouse_pos.0 >= lattice_area_width() {
        return;
    }

    let at = camera.screen_to_lattice(mouse_pos.0, mouse_pos.1, cell_size);
    if is_mouse_button_down(MouseButton::Left) {
        state.paint(at, MAX_VITALITY);
    } else if is_mouse_button_down(MouseButton::Right) {
        state.paint(at, 0);
    }
}

fn apply(state: GameState, action: ButtonAction) -> GameState {
    match action {
        ButtonAction::PlayPause => state.toggle_running(),
        ButtonAction::Step => state.step(),
        ButtonAction::Reseed => state.reseed(),
        ButtonAction::NextSeed => state.next_seed(),
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState, camera: &mut Camera) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 6] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::N, GameState::step),
        (KeyCode::R, GameState::reseed),
        (KeyCode::S, GameState::next_seed),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    let new_state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset(lattice_area_width(), lattice_area_height());
    }

    new_state
}

/// Process button clicks functionally
pub fn process_button_clicks(state: GameState, buttons: &[Button], mouse_pos: (f32, f32)) -> GameState {
    buttons
        .iter()
        .filter_map(|btn| btn.clicked(mouse_pos))
        .fold(state, apply)
}
