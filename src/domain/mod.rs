mod coordinate;
mod cell;
mod lattice;
mod seeds;

pub use coordinate::{Coordinate, NEIGHBOR_OFFSETS};
pub use cell::{Cell, MAX_VITALITY, growth_favoured};
pub use lattice::{HaltReason, Lattice, Limits, MAX_TEXT_AREA, RunSummary};
pub use seeds::{SeedKind, SeedPattern, presets};
