use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{Coordinate, Lattice, Limits, MAX_VITALITY};

/// Represents a set of cells to start a lattice from
#[derive(Clone, Debug)]
pub struct SeedPattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: Vec<(Coordinate, u8)>,  // Relative coordinates and vitality
}

impl SeedPattern {
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(Coordinate, u8)>) -> Self {
        Self { name, description, cells }
    }

    /// Paint the pattern onto a lattice, shifted by `origin`
    pub fn place_on(&self, lattice: &mut Lattice, origin: Coordinate) {
        for (at, vitality) in &self.cells {
            lattice.set_vitality(origin + *at, *vitality);
        }
    }

    /// Build a fresh lattice holding exactly this pattern
    pub fn to_lattice(&self, limits: Limits) -> Lattice {
        Lattice::with_limits(self.cells.iter().copied(), limits)
    }
}

/// Which preset to seed from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedKind {
    #[default]
    Random,
    Single,
    Cross,
    Ring,
    Block,
}

impl SeedKind {
    pub fn all() -> Vec<SeedKind> {
        vec![
            SeedKind::Random,
            SeedKind::Single,
            SeedKind::Cross,
            SeedKind::Ring,
            SeedKind::Block,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SeedKind::Random => "Random",
            SeedKind::Single => "Single",
            SeedKind::Cross => "Cross",
            SeedKind::Ring => "Ring",
            SeedKind::Block => "Block",
        }
    }

    /// The kind after this one, wrapping around
    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|k| *k == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Build the pattern. `half_extent` sizes the random square and the ring,
    /// `max_vitality` caps random vitality, `rng_seed` makes it reproducible.
    pub fn build(self, half_extent: i32, max_vitality: u8, rng_seed: Option<u64>) -> SeedPattern {
        match self {
            SeedKind::Random => match rng_seed {
                Some(seed) => {
                    let mut rng = StdRng::seed_from_u64(seed);
                    presets::random_square(&mut rng, half_extent, max_vitality)
                }
                None => presets::random_square(&mut rand::rng(), half_extent, max_vitality),
            },
            SeedKind::Single => presets::single(max_vitality.max(1)),
            SeedKind::Cross => presets::cross(),
            SeedKind::Ring => presets::ring(half_extent.max(1)),
            SeedKind::Block => presets::block(),
        }
    }
}

/// Seed pattern library
pub mod presets {
    use super::*;

    /// Square of cells with `-h <= x, y < h`, each uniform in `0..=max_vitality`
    pub fn random_square<R: Rng + ?Sized>(rng: &mut R, half_extent: i32, max_vitality: u8) -> SeedPattern {
        let max_vitality = max_vitality.min(MAX_VITALITY);
        let side = -half_extent..half_extent;
        let cells = side
            .clone()
            .flat_map(|x| side.clone().map(move |y| Coordinate::new(x, y)))
            .map(|at| (at, rng.random_range(0..=max_vitality)))
            .collect();
        SeedPattern::new("Random", "Random vitality square", cells)
    }

    /// One living cell at the origin
    pub fn single(vitality: u8) -> SeedPattern {
        SeedPattern::new(
            "Single",
            "Lone cell at the origin",
            vec![(Coordinate::new(0, 0), vitality)],
        )
    }

    /// Plus sign, full centre and weaker arms
    pub fn cross() -> SeedPattern {
        SeedPattern::new(
            "Cross",
            "Plus sign with a saturated centre",
            vec![
                (Coordinate::new(0, 0), 5),
                (Coordinate::new(1, 0), 2),
                (Coordinate::new(-1, 0), 2),
                (Coordinate::new(0, 1), 2),
                (Coordinate::new(0, -1), 2),
            ],
        )
    }

    /// Hollow square outline of the given radius
    pub fn ring(radius: i32) -> SeedPattern {
        let cells = (-radius..=radius)
            .flat_map(|x| (-radius..=radius).map(move |y| Coordinate::new(x, y)))
            .filter(|at| at.x().abs() == radius || at.y().abs() == radius)
            .map(|at| (at, 1))
            .collect();
        SeedPattern::new("Ring", "Hollow square outline", cells)
    }

    /// 2x2 block at mid vitality
    pub fn block() -> SeedPattern {
        SeedPattern::new(
            "Block",
            "2x2 block",
            vec![
                (Coordinate::new(0, 0), 3), (Coordinate::new(1, 0), 3),
                (Coordinate::new(0, 1), 3), (Coordinate::new(1, 1), 3),
            ],
        )
    }

    /// Get all fixed-shape patterns
    pub fn all_patterns() -> Vec<SeedPattern> {
        vec![single(1), cross(), ring(3), block()]
    }
}
