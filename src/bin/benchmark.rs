//! Tick throughput across seed sizes, each size averaged over an ensemble
//! of independently seeded lattices run in parallel.

use std::time::Instant;
use rayon::prelude::*;
use growth_life::{Error, Limits, SeedKind};

const ENSEMBLE: u64 = 8;
const CELL_CEILING: usize = 2_000_000;

struct Sample {
    ms_per_tick: f64,
    ticks: u64,
    cells: usize,
    population: usize,
    /// Stopped early at the cell ceiling
    capped: bool,
}

fn run_one(half_extent: i32, ticks: u64, rng_seed: u64, cell_ceiling: usize) -> Sample {
    let limits = Limits { max_cells: Some(cell_ceiling), max_population: None };
    let mut lattice = SeedKind::Random.build(half_extent, 2, Some(rng_seed)).to_lattice(limits);

    let start = Instant::now();
    let capped = match lattice.run(Some(ticks)) {
        Ok(_) => false,
        Err(Error::CellLimitExceeded { .. }) => true,
        Err(err) => panic!("unexpected benchmark failure: {err}"),
    };
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    Sample {
        ms_per_tick: elapsed_ms / lattice.generation().max(1) as f64,
        ticks: lattice.generation(),
        cells: lattice.len(),
        population: lattice.population(),
        capped,
    }
}

fn main() {
    println!("=== Growth Lattice Benchmark ===\n");

    let sizes = [5, 10, 20, 40, 80];
    let ticks = 40;

    println!("{:>10} {:>10} {:>12} {:>12} {:>12}",
        "Seed", "Ticks", "ms/tick", "Cells", "Alive");
    println!("{:-<60}", "");

    for half_extent in sizes {
        let samples: Vec<Sample> = (0..ENSEMBLE)
            .into_par_iter()
            .map(|rng_seed| run_one(half_extent, ticks, rng_seed, CELL_CEILING))
            .collect();

        let n = samples.len() as f64;
        let ms = samples.iter().map(|s| s.ms_per_tick).sum::<f64>() / n;
        let done = samples.iter().map(|s| s.ticks).sum::<u64>() as f64 / n;
        let cells = samples.iter().map(|s| s.cells).sum::<usize>() as f64 / n;
        let alive = samples.iter().map(|s| s.population).sum::<usize>() as f64 / n;
        let capped = samples.iter().filter(|s| s.capped).count();
        // Cut-short runs are flagged, their ms/tick covers fewer generations
        let note = if capped > 0 {
            format!("  [{capped}/{ENSEMBLE} hit the {CELL_CEILING}-cell ceiling]")
        } else {
            String::new()
        };

        println!(
            "{:>10} {:>10.1} {:>12.3} {:>12.0} {:>12.0}{}",
            format!("{}x{}", half_extent * 2, half_extent * 2),
            done,
            ms,
            cells,
            alive,
            note
        );
    }

    println!("\n=== Single-lattice growth (20x20 seed) ===\n");

    let mut lattice = SeedKind::Random.build(10, 2, Some(0)).to_lattice(Limits::unbounded());
    for checkpoint in 1..=5 {
        let start = Instant::now();
        for _ in 0..20 {
            lattice.tick();
        }
        let ms = start.elapsed().as_secs_f64() * 1000.0;
        println!(
            "Generation {:>4}: {:>8} cells, {:>8} alive, {:.3} ms/tick",
            checkpoint * 20,
            lattice.len(),
            lattice.population(),
            ms / 20.0
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_flags_ceiling() {
        // 10x10 seed grows to 12x12 on the first tick
        let sample = run_one(5, 40, 0, 120);
        assert!(sample.capped);
        assert_eq!(sample.ticks, 1);
        assert_eq!(sample.cells, 144);
    }

    #[test]
    fn test_sample_within_ceiling() {
        let sample = run_one(2, 3, 0, CELL_CEILING);
        assert!(!sample.capped);
        assert!(sample.ticks <= 3);
    }
}
