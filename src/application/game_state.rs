use log::{info, warn};

use crate::config::{Config, SeedConfig};
use crate::domain::{Coordinate, Lattice, Limits, SeedKind};

/// GameState orchestrates the viewer's simulation.
/// It owns the lattice and only talks to it through its public surface.
pub struct GameState {
    pub lattice: Lattice,
    pub seed_kind: SeedKind,
    pub seed: SeedConfig,
    pub limits: Limits,
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_tick_time_ms: f32,   // Tick performance metric
    pub last_render_time_ms: f32, // Render performance metric
    /// Why the run stopped on its own, if it did
    pub status: Option<String>,
}

impl GameState {
    /// Create new state seeded from config
    pub fn new(config: &Config) -> Self {
        Self {
            lattice: config.build_lattice(),
            seed_kind: config.seed.kind,
            seed: config.seed.clone(),
            limits: config.limits(),
            is_running: false,
            update_timer: 0.0,
            updates_per_second: config.viewer.updates_per_second,
            last_tick_time_ms: 0.0,
            last_render_time_ms: 0.0,
            status: None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.lattice.generation()
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        if self.is_running {
            self.status = None;
        }
        self
    }

    /// Advance exactly one tick, running or not
    pub fn step(mut self) -> Self {
        self.advance();
        self
    }

    /// Rebuild the lattice from the selected seed
    pub fn reseed(mut self) -> Self {
        self.lattice = self.seed.pattern(self.seed_kind).to_lattice(self.limits);
        self.is_running = false;
        self.update_timer = 0.0;
        self.status = None;
        info!("Reseeded with {}", self.seed_kind.name());
        self
    }

    /// Select the next seed preset and reseed with it
    pub fn next_seed(mut self) -> Self {
        self.seed_kind = self.seed_kind.next();
        self.reseed()
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Paint a cell while paused
    pub fn paint(&mut self, at: Coordinate, vitality: u8) {
        if !self.is_running {
            self.lattice.set_vitality(at, vitality);
        }
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.advance();
            self.update_timer = 0.0;
        }

        self
    }

    fn advance(&mut self) {
        // A dead lattice would revive on its own, the run is over
        if self.lattice.population() == 0 {
            self.is_running = false;
            self.status = Some("Extinct".to_string());
            return;
        }

        let start = std::time::Instant::now();
        let outcome = self.lattice.try_tick();
        self.last_tick_time_ms = start.elapsed().as_secs_f32() * 1000.0;

        match outcome {
            Err(err) => {
                warn!("Stopping at generation {}: {}", self.generation(), err);
                self.is_running = false;
                self.status = Some(err.to_string());
            }
            Ok(_) if self.lattice.population() == 0 => {
                info!("Extinct at generation {}", self.generation());
                self.is_running = false;
                self.status = Some("Extinct".to_string());
            }
            Ok(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_seed_config() -> Config {
        let mut config = Config::default();
        config.seed.kind = SeedKind::Single;
        config.seed.max_vitality = 1;
        config
    }

    #[test]
    fn test_paused_state_does_not_tick() {
        let state = GameState::new(&single_seed_config()).tick(10.0);
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn test_running_state_ticks_after_interval() {
        let state = GameState::new(&single_seed_config())
            .with_running(true)
            .tick(0.5);
        assert_eq!(state.generation(), 0);
        let state = state.tick(0.6);
        assert_eq!(state.generation(), 1);
        assert_eq!(state.lattice.len(), 9);
    }

    #[test]
    fn test_limit_breach_pauses_with_status() {
        let mut config = single_seed_config();
        config.limits.max_cells = Some(20);
        let state = GameState::new(&config).step();
        assert!(state.status.is_none());

        let state = state.with_running(true).step();
        assert!(!state.is_running);
        assert!(state.status.unwrap().contains("limit"));
    }

    #[test]
    fn test_next_seed_reseeds() {
        let state = GameState::new(&single_seed_config()).step().next_seed();
        assert_eq!(state.seed_kind, SeedKind::Cross);
        assert_eq!(state.generation(), 0);
        assert_eq!(state.lattice.len(), 5);
    }

    #[test]
    fn test_extinct_lattice_is_not_ticked() {
        let mut state = GameState::new(&single_seed_config());
        state.lattice = Lattice::new([(Coordinate::new(0, 0), 0), (Coordinate::new(1, 0), 0)]);

        let state = state.step();
        assert_eq!(state.generation(), 0);
        assert_eq!(state.lattice.population(), 0);
        assert_eq!(state.status.as_deref(), Some("Extinct"));

        let state = state.toggle_running().tick(5.0);
        assert!(!state.is_running);
        assert_eq!(state.generation(), 0);
        assert_eq!(state.lattice.population(), 0);
    }

    #[test]
    fn test_paint_only_while_paused() {
        let mut state = GameState::new(&single_seed_config());
        state.paint(Coordinate::new(4, 4), 5);
        assert_eq!(state.lattice.vitality(Coordinate::new(4, 4)), Some(5));

        let mut state = state.with_running(true);
        state.paint(Coordinate::new(6, 6), 5);
        assert_eq!(state.lattice.vitality(Coordinate::new(6, 6)), None);
    }
}
