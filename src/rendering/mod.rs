use macroquad::prelude::*;

use crate::application::{Camera, GameState};
use crate::domain::{Lattice, MAX_VITALITY};
use crate::ui::{Button, PANEL_WIDTH, lattice_area_height, lattice_area_width, panel_x};

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Red channel proportional to vitality, black when dead
pub fn vitality_color(vitality: u8) -> Color {
    let red = (255 * u32::from(vitality.min(MAX_VITALITY)) / u32::from(MAX_VITALITY)) as u8;
    Color::from_rgba(red, 0, 0, 255)
}

/// Draw every visible cell of the lattice
pub fn draw_lattice(lattice: &Lattice, camera: &Camera, cell_size: f32) {
    let area_width = lattice_area_width();
    let area_height = lattice_area_height();
    let px = camera.cell_pixels(cell_size) as f32;
    let (min, max) = camera.visible_bounds(area_width, area_height, cell_size);

    // Dead placeholders are only worth drawing when cells are big enough to tell apart
    let placeholder = Color::from_rgba(28, 28, 28, 255);
    let show_placeholders = px >= 3.0;

    for (at, vitality) in lattice.iter() {
        if at.x() < min.x() || at.x() > max.x() || at.y() < min.y() || at.y() > max.y() {
            continue;
        }
        let (x, y) = camera.lattice_to_screen(at, cell_size);
        if vitality > 0 {
            draw_rectangle(x, y, px, px, vitality_color(vitality));
        } else if show_placeholders {
            draw_rectangle(x, y, px, px, placeholder);
        }
    }
}

fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255)
    );
}

/// Draw the control panel with buttons and run info
pub fn draw_controls(state: &GameState, camera: &Camera, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();
    let help = [
        "Controls:",
        "LMB: Paint  RMB: Erase",
        "Space: Play  N: Step",
        "R: Reseed  S: Next seed",
        "Wheel: Zoom  Mid: Pan",
        "H: Home",
    ];
    for (i, line) in help.iter().enumerate() {
        let (size, color) = if i == 0 { (14.0, WHITE) } else { (12.0, GRAY) };
        draw_text(line, px, 215.0 + i as f32 * 14.0, size, color);
    }

    let tick_ms = state.last_tick_time_ms;
    let tick_color = if tick_ms < 5.0 {
        Color::from_rgba(0, 255, 0, 255)
    } else if tick_ms < 33.0 {
        Color::from_rgba(255, 255, 0, 255)
    } else {
        Color::from_rgba(255, 0, 0, 255)
    };

    let lines: [(String, f32, Color); 8] = [
        ("Generation:".to_string(), 16.0, WHITE),
        (format!("{}", state.generation()), 20.0, Color::from_rgba(255, 80, 80, 255)),
        (format!("Alive: {}", format_number(state.lattice.population())), 14.0, LIGHTGRAY),
        (format!("Cells: {}", format_number(state.lattice.len())), 14.0, LIGHTGRAY),
        (format!("Tick: {:.1}ms", tick_ms), 13.0, tick_color),
        (format!("Render: {:.1}ms | FPS: {}", state.last_render_time_ms, get_fps()), 12.0, GRAY),
        (format!("{:.0} gen/s  Zoom {:.1}x", state.updates_per_second, camera.zoom), 12.0, GRAY),
        (
            match (&state.status, state.is_running) {
                (Some(status), _) => status.clone(),
                (None, true) => "Running".to_string(),
                (None, false) => "Paused".to_string(),
            },
            14.0,
            if state.is_running { GREEN } else { ORANGE },
        ),
    ];
    for (i, (text, size, color)) in lines.iter().enumerate() {
        draw_text(text, px, 330.0 + i as f32 * 24.0, *size, *color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vitality_color_scale() {
        assert_eq!(vitality_color(0), Color::from_rgba(0, 0, 0, 255));
        assert_eq!(vitality_color(5), Color::from_rgba(255, 0, 0, 255));
        assert_eq!(vitality_color(2), Color::from_rgba(102, 0, 0, 255));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(12_500), "12.5K");
        assert_eq!(format_number(3_000_000), "3.0M");
    }
}
