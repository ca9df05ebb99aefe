//! Sparse, ever-growing lattice of vitality cells.
//!
//! The lattice is the only owner of its cells and addresses them by
//! coordinate, so "the same cell" always means "the same key". A tick is
//! split into a staging pass that reads committed values only and a commit
//! pass that publishes every staged value at once.

use std::collections::{BTreeMap, HashMap, HashSet};

use log::{debug, info, warn};

use super::{Cell, Coordinate};
use crate::error::{Error, Result};

/// Largest bounding box `Lattice::to_text` will print
pub const MAX_TEXT_AREA: i64 = 1 << 20;

/// Optional ceilings on lattice growth. `None` means unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_cells: Option<usize>,
    pub max_population: Option<usize>,
}

impl Limits {
    pub const fn unbounded() -> Self {
        Self {
            max_cells: None,
            max_population: None,
        }
    }
}

/// Why `Lattice::run` stopped without an error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HaltReason {
    /// No living cell was left
    Extinct,
    /// The caller's tick cap was reached
    TickLimit,
}

/// Outcome of a successful `Lattice::run`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub population: usize,
    pub cells: usize,
    pub halt: HaltReason,
}

pub struct Lattice {
    cells: HashMap<Coordinate, Cell>,
    limits: Limits,
    generation: u64,
}

impl Lattice {
    /// Build a lattice from `(coordinate, vitality)` seed entries.
    /// A repeated coordinate keeps its last entry.
    pub fn new<I>(seed: I) -> Self
    where
        I: IntoIterator<Item = (Coordinate, u8)>,
    {
        Self::with_limits(seed, Limits::unbounded())
    }

    pub fn with_limits<I>(seed: I, limits: Limits) -> Self
    where
        I: IntoIterator<Item = (Coordinate, u8)>,
    {
        let cells: HashMap<_, _> = seed
            .into_iter()
            .map(|(at, vitality)| (at, Cell::new(at, vitality)))
            .collect();
        let lattice = Self {
            cells,
            limits,
            generation: 0,
        };
        info!(
            "Lattice seeded: cells={} population={}",
            lattice.len(),
            lattice.population()
        );
        lattice
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn set_limits(&mut self, limits: Limits) {
        self.limits = limits;
    }

    /// Number of ticks applied so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of cells held, dead placeholders included
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, at: Coordinate) -> Option<&Cell> {
        self.cells.get(&at)
    }

    pub fn vitality(&self, at: Coordinate) -> Option<u8> {
        self.cells.get(&at).map(Cell::vitality)
    }

    /// Count of cells with committed vitality above zero
    pub fn population(&self) -> usize {
        self.cells.values().filter(|cell| cell.is_alive()).count()
    }

    /// Overwrite (or create) a cell's committed vitality between ticks
    pub fn set_vitality(&mut self, at: Coordinate, vitality: u8) {
        self.cells
            .entry(at)
            .and_modify(|cell| cell.set_vitality(vitality))
            .or_insert_with(|| Cell::new(at, vitality));
    }

    /// Discover the neighbors of `at`, growing the lattice where needed.
    ///
    /// Existing neighbors are returned unless they are pending. Absent
    /// coordinates get a fresh dead, non-pending cell which is returned too.
    pub fn neighbors(&mut self, at: Coordinate) -> Vec<Coordinate> {
        at.neighbors()
            .filter(|next| match self.cells.get(next) {
                Some(cell) => !cell.is_pending(),
                None => {
                    self.cells.insert(*next, Cell::new(*next, 0));
                    true
                }
            })
            .collect()
    }

    /// Sum of the committed vitality around `at`. Absent neighbors count as
    /// zero and a pending neighbor still contributes its committed value.
    pub fn growth_food(&self, at: Coordinate) -> u32 {
        at.neighbors()
            .filter_map(|next| self.cells.get(&next))
            .map(|cell| u32::from(cell.vitality()))
            .sum()
    }

    /// Advance one generation and return the population seen before it.
    pub fn tick(&mut self) -> usize {
        let alive = self.population();

        // Frontier expansion over a snapshot of the keys
        let snapshot: Vec<Coordinate> = self.cells.keys().copied().collect();
        let mut to_update: HashSet<Coordinate> = HashSet::with_capacity(snapshot.len() * 2);
        for at in snapshot {
            to_update.insert(at);
            to_update.extend(self.neighbors(at));
        }

        // Stage from committed values only
        for at in &to_update {
            let food = self.growth_food(*at);
            if let Some(cell) = self.cells.get_mut(at) {
                let grow = cell.can_grow(food);
                cell.stage(grow);
            }
        }

        self.cells.values_mut().for_each(Cell::commit);
        self.generation += 1;

        debug!(
            "Tick {}: alive before={} updated={} cells={}",
            self.generation,
            alive,
            to_update.len(),
            self.cells.len()
        );
        alive
    }

    /// Fail if the lattice has outgrown its limits
    pub fn check_limits(&self) -> Result<()> {
        if let Some(limit) = self.limits.max_cells {
            let cells = self.cells.len();
            if cells > limit {
                warn!("Cell limit exceeded: cells={cells} limit={limit}");
                return Err(Error::CellLimitExceeded { cells, limit });
            }
        }
        if let Some(limit) = self.limits.max_population {
            let population = self.population();
            if population > limit {
                warn!("Population limit exceeded: population={population} limit={limit}");
                return Err(Error::PopulationLimitExceeded { population, limit });
            }
        }
        Ok(())
    }

    /// Tick, then verify the lattice is still within its limits
    pub fn try_tick(&mut self) -> Result<usize> {
        let alive = self.tick();
        self.check_limits()?;
        Ok(alive)
    }

    /// Tick until extinction, the tick cap, or a limit breach.
    ///
    /// Without a cap and without limits this may never return: the growth
    /// rule can sustain a population indefinitely.
    pub fn run(&mut self, max_ticks: Option<u64>) -> Result<RunSummary> {
        self.run_with(max_ticks, |_, _| {})
    }

    /// Like `run`, calling `on_tick` with the pre-tick population and the
    /// updated lattice after every tick
    pub fn run_with<F>(&mut self, max_ticks: Option<u64>, mut on_tick: F) -> Result<RunSummary>
    where
        F: FnMut(usize, &Lattice),
    {
        let mut ticks = 0;
        let halt = loop {
            if self.population() == 0 {
                break HaltReason::Extinct;
            }
            if max_ticks.is_some_and(|cap| ticks >= cap) {
                break HaltReason::TickLimit;
            }
            let alive = self.try_tick()?;
            ticks += 1;
            on_tick(alive, self);
        };

        let summary = RunSummary {
            ticks,
            population: self.population(),
            cells: self.cells.len(),
            halt,
        };
        info!(
            "Run finished: ticks={} population={} cells={} halt={:?}",
            summary.ticks, summary.population, summary.cells, summary.halt
        );
        Ok(summary)
    }

    /// Iterate over `(coordinate, committed vitality)` in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, u8)> + '_ {
        self.cells.iter().map(|(at, cell)| (*at, cell.vitality()))
    }

    /// Sorted copy of the current state
    pub fn snapshot(&self) -> BTreeMap<Coordinate, u8> {
        self.iter().collect()
    }

    /// Smallest and largest corner covering every cell
    pub fn bounds(&self) -> Option<(Coordinate, Coordinate)> {
        let mut keys = self.cells.keys();
        let first = *keys.next()?;
        let (min, max) = keys.fold((first, first), |(min, max), at| {
            (
                Coordinate::new(min.x().min(at.x()), min.y().min(at.y())),
                Coordinate::new(max.x().max(at.x()), max.y().max(at.y())),
            )
        });
        Some((min, max))
    }

    /// Digit grid of the bounding box, top row first. Absent coordinates
    /// are blank. `None` when the box covers more than `MAX_TEXT_AREA`
    /// positions, which sparse lattices with far-apart cells easily do.
    pub fn to_text(&self) -> Option<String> {
        let Some((min, max)) = self.bounds() else {
            return Some(String::new());
        };
        let width = i64::from(max.x()) - i64::from(min.x()) + 1;
        let height = i64::from(max.y()) - i64::from(min.y()) + 1;
        if width.saturating_mul(height) > MAX_TEXT_AREA {
            return None;
        }
        let text = (min.y()..=max.y())
            .map(|y| {
                (min.x()..=max.x())
                    .map(|x| match self.cells.get(&Coordinate::new(x, y)) {
                        Some(cell) => cell.to_string(),
                        None => " ".to_string(),
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn test_single_seed_grows_frontier() {
        let mut lattice = Lattice::new([(c(0, 0), 1)]);
        assert_eq!(lattice.tick(), 1);

        assert_eq!(lattice.len(), 9);
        assert_eq!(lattice.vitality(c(0, 0)), Some(2));
        // Each neighbor only sees food 1, which is isolation
        for n in c(0, 0).neighbors() {
            assert_eq!(lattice.vitality(n), Some(1));
        }
        assert_eq!(lattice.population(), 9);
    }

    #[test]
    fn test_neighbors_skip_pending() {
        let mut lattice = Lattice::new([(c(0, 0), 1), (c(1, 0), 1)]);
        lattice.cells.get_mut(&c(1, 0)).unwrap().stage(true);

        let found = lattice.neighbors(c(0, 0));
        assert_eq!(found.len(), 7);
        assert!(!found.contains(&c(1, 0)));
        assert_eq!(lattice.len(), 9);

        // Discovered cells are dead and settled
        for at in found {
            let cell = lattice.get(at).unwrap();
            assert_eq!(cell.vitality(), 0);
            assert!(!cell.is_pending());
        }
    }

    #[test]
    fn test_growth_food_reads_committed_only() {
        let mut lattice = Lattice::new([(c(0, 0), 1), (c(1, 0), 1), (c(1, 1), 3)]);
        lattice.cells.get_mut(&c(1, 0)).unwrap().stage(true);

        assert_eq!(lattice.growth_food(c(0, 0)), 4);
        // Reading food never grows the lattice
        assert_eq!(lattice.len(), 3);
    }

    #[test]
    fn test_tick_leaves_nothing_pending() {
        let mut lattice = Lattice::new([(c(0, 0), 3), (c(2, 1), 1)]);
        lattice.tick();
        assert!(lattice.cells.values().all(|cell| !cell.is_pending()));
        assert_eq!(lattice.generation(), 1);
    }

    #[test]
    fn test_set_vitality_creates_and_clamps() {
        let mut lattice = Lattice::new([]);
        lattice.set_vitality(c(3, 3), 9);
        assert_eq!(lattice.vitality(c(3, 3)), Some(5));
        lattice.set_vitality(c(3, 3), 0);
        assert_eq!(lattice.vitality(c(3, 3)), Some(0));
        assert_eq!(lattice.len(), 1);
    }

    #[test]
    fn test_duplicate_seed_keeps_last() {
        let lattice = Lattice::new([(c(0, 0), 1), (c(0, 0), 4)]);
        assert_eq!(lattice.len(), 1);
        assert_eq!(lattice.vitality(c(0, 0)), Some(4));
    }

    #[test]
    fn test_bounds_and_text() {
        let mut lattice = Lattice::new([(c(0, 0), 2)]);
        assert_eq!(lattice.to_text().as_deref(), Some("2"));
        lattice.tick();
        assert_eq!(lattice.bounds(), Some((c(-1, -1), c(1, 1))));
        assert_eq!(lattice.to_text().as_deref(), Some("000\n030\n000"));
    }

    #[test]
    fn test_text_refuses_huge_bounding_box() {
        let mut lattice = Lattice::new([]);
        lattice.set_vitality(c(-1_000_000, 0), 1);
        lattice.set_vitality(c(1_000_000, 0), 1);
        assert_eq!(lattice.to_text(), None);

        // Full i32 span must not overflow the area computation
        let lattice = Lattice::new([(c(i32::MIN, i32::MIN), 1), (c(i32::MAX, i32::MAX), 1)]);
        assert_eq!(lattice.to_text(), None);
    }

    #[test]
    fn test_tick_at_coordinate_range_edge() {
        let mut lattice = Lattice::new([(c(i32::MAX, 0), 1)]);
        assert_eq!(lattice.tick(), 1);

        // Only the 5 representable neighbors are discovered
        assert_eq!(lattice.len(), 6);
        assert_eq!(lattice.vitality(c(i32::MAX, 0)), Some(2));
        assert_eq!(lattice.vitality(c(i32::MAX - 1, 1)), Some(1));

        let mut corner = Lattice::new([(c(i32::MIN, i32::MIN), 2)]);
        corner.tick();
        assert_eq!(corner.len(), 4);
        assert_eq!(corner.growth_food(c(i32::MIN, i32::MIN)), 0);
    }

    #[test]
    fn test_empty_lattice() {
        let lattice = Lattice::new([]);
        assert!(lattice.is_empty());
        assert_eq!(lattice.bounds(), None);
        assert_eq!(lattice.to_text().as_deref(), Some(""));
    }
}
