//! Console runner: ticks a lattice without a window and prints the
//! population each generation.

use clap::{Parser, Subcommand};
use growth_life::{Config, Result};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "headless")]
#[command(version)]
#[command(about = "Run the growth lattice without a window")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "growth.yaml")]
        config: PathBuf,

        /// Tick cap, overrides run.max_ticks from the config
        #[arg(short, long)]
        ticks: Option<u64>,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Quiet mode (summary only)
        #[arg(short, long)]
        quiet: bool,

        /// Print the final lattice as a digit grid
        #[arg(long)]
        print_final: bool,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "growth.yaml")]
        output: PathBuf,
    },
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            ticks,
            seed,
            quiet,
            print_final,
        } => run_simulation(config, ticks, seed, quiet, print_final)?,
        Commands::Init { output } => generate_config(output)?,
    }
    Ok(())
}

fn run_simulation(
    config_path: PathBuf,
    ticks: Option<u64>,
    seed: Option<u64>,
    quiet: bool,
    print_final: bool,
) -> Result<()> {
    let mut config = if config_path.exists() {
        println!("Loading config from: {:?}", config_path);
        Config::from_file(&config_path)?
    } else {
        println!("Using default configuration");
        Config::default()
    };
    if seed.is_some() {
        config.seed.rng_seed = seed;
    }
    let max_ticks = ticks.or(config.run.max_ticks);

    let mut lattice = config.build_lattice();
    println!("Seed: {} ({} cells)", config.seed.kind.name(), lattice.len());

    let start = Instant::now();
    let outcome = lattice.run_with(max_ticks, |alive, _| {
        if !quiet {
            println!("{alive} cells alive");
        }
    });
    let elapsed = start.elapsed();

    println!();
    println!("Generations: {}", lattice.generation());
    println!("Alive: {}  Cells: {}", lattice.population(), lattice.len());
    println!(
        "Time: {:.3} ms ({:.3} ms/tick)",
        elapsed.as_secs_f64() * 1000.0,
        elapsed.as_secs_f64() * 1000.0 / lattice.generation().max(1) as f64
    );
    match &outcome {
        Ok(summary) => println!("Stopped: {:?}", summary.halt),
        Err(err) => println!("Stopped: {}", err),
    }

    if print_final {
        println!();
        match lattice.to_text() {
            Some(text) => println!("{text}"),
            None => println!("(lattice too spread out to print)"),
        }
    }

    outcome.map(|_| ())
}

fn generate_config(output: PathBuf) -> Result<()> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}
