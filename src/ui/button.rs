use macroquad::prelude::*;

/// What a panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    PlayPause,
    Step,
    Reseed,
    NextSeed,
}

/// Panel button bound to one action
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    label: String,
    pub action: ButtonAction,
}

impl Button {
    const IDLE: Color = Color::new(0.45, 0.12, 0.12, 1.0);
    const HOVER: Color = Color::new(0.65, 0.2, 0.2, 1.0);

    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>, action: ButtonAction) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            label: label.into(),
            action,
        }
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = if self.is_hovered(mouse_pos) { Self::HOVER } else { Self::IDLE };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, LIGHTGRAY);

        let size = measure_text(&self.label, None, 18, 1.0);
        draw_text(&self.label, x + (w - size.width) / 2.0, y + (h + size.height) / 2.0, 18.0, WHITE);
    }

    /// The action, if the button was clicked this frame
    pub fn clicked(&self, mouse_pos: (f32, f32)) -> Option<ButtonAction> {
        (self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)).then_some(self.action)
    }
}
