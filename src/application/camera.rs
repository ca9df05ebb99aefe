use crate::domain::Coordinate;

/// Camera maps the unbounded lattice onto the screen.
/// `offset_x`/`offset_y` is where the lattice origin lands in pixels.
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32,  // 1.0 = normal, 2.0 = 2x zoomed in
    drag_anchor: Option<(f32, f32)>,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
            drag_anchor: None,
        }
    }

    /// Camera with the lattice origin in the middle of a viewport
    pub fn centered(viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self::new();
        camera.center_on(viewport_width, viewport_height);
        camera
    }

    pub fn center_on(&mut self, viewport_width: f32, viewport_height: f32) {
        self.offset_x = (viewport_width / 2.0).round();
        self.offset_y = (viewport_height / 2.0).round();
    }

    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(0.2, 20.0);
    }

    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(0.2, 20.0);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Feed the pointer position while a drag button is held (or not).
    /// Pans by the movement since the previous held frame.
    pub fn drag(&mut self, held: bool, mouse_pos: (f32, f32)) {
        if !held {
            self.drag_anchor = None;
            return;
        }
        if let Some((last_x, last_y)) = self.drag_anchor {
            self.pan(mouse_pos.0 - last_x, mouse_pos.1 - last_y);
        }
        self.drag_anchor = Some(mouse_pos);
    }

    /// Whole pixels per cell, never below one
    pub fn cell_pixels(&self, cell_size: f32) -> i32 {
        (cell_size * self.zoom).round().max(1.0) as i32
    }

    /// Convert screen coordinates to the lattice point under them
    pub fn screen_to_lattice(&self, screen_x: f32, screen_y: f32, cell_size: f32) -> Coordinate {
        let px = self.cell_pixels(cell_size) as f32;
        Coordinate::new(
            ((screen_x - self.offset_x) / px).floor() as i32,
            ((screen_y - self.offset_y) / px).floor() as i32,
        )
    }

    /// Top-left pixel of a lattice point
    pub fn lattice_to_screen(&self, at: Coordinate, cell_size: f32) -> (f32, f32) {
        let pixel = at.scale(self.cell_pixels(cell_size));
        (pixel.x() as f32 + self.offset_x, pixel.y() as f32 + self.offset_y)
    }

    /// Lattice corners visible in a viewport, for culling
    pub fn visible_bounds(&self, viewport_width: f32, viewport_height: f32, cell_size: f32) -> (Coordinate, Coordinate) {
        (
            self.screen_to_lattice(0.0, 0.0, cell_size),
            self.screen_to_lattice(viewport_width, viewport_height, cell_size),
        )
    }

    /// Reset zoom and put the origin back in the middle
    pub fn reset(&mut self, viewport_width: f32, viewport_height: f32) {
        self.zoom = 1.0;
        self.drag_anchor = None;
        self.center_on(viewport_width, viewport_height);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
