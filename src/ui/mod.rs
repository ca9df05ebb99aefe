mod button;

pub use button::{Button, ButtonAction};

use macroquad::prelude::{screen_height, screen_width};

use crate::domain::SeedKind;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the lattice area
pub fn lattice_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the lattice area
pub fn lattice_area_height() -> f32 {
    screen_height()
}

/// Panel buttons, top to bottom
pub fn create_buttons(seed_kind: SeedKind) -> Vec<Button> {
    let px = panel_x();
    [
        ("Play/Pause".to_string(), ButtonAction::PlayPause),
        ("Step".to_string(), ButtonAction::Step),
        ("Reseed".to_string(), ButtonAction::Reseed),
        (format!("Seed: {}", seed_kind.name()), ButtonAction::NextSeed),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (label, action))| {
        let y = 20.0 + i as f32 * (BUTTON_HEIGHT + 10.0);
        Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, label, action)
    })
    .collect()
}
