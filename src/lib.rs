// Domain layer - Lattice, cells and the growth rule
pub mod domain;

// Ambient - configuration and errors
pub mod config;
pub mod error;

// Application layer - Viewer state and camera
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Coordinate, Lattice, Limits, RunSummary, HaltReason, SeedKind, SeedPattern, presets};
pub use config::Config;
pub use error::{Error, Result};
pub use application::{GameState, Camera};
pub use ui::Button;
