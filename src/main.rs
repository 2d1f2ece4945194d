use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use torus_life::{Algorithm, LifeLikeRule, Simulation, SimulationConfig, presets};

/// Run a toroidal Game of Life and print each generation as text.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Side length of the square grid.
    #[arg(short, long, default_value_t = 10)]
    size: usize,
    /// Chance that each cell starts alive.
    #[arg(short, long, value_name = "P", default_value_t = 0.5)]
    probability: f64,
    /// Seed for the random start. Omit for a fresh one.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of generations to advance.
    #[arg(short, long, default_value_t = 1)]
    generations: u64,
    /// Rule in B/S notation (B3/S23) or a preset name.
    #[arg(short, long, default_value = "B3/S23")]
    rule: LifeLikeRule,
    /// Step algorithm: serial or parallel.
    #[arg(short, long, default_value_t = Algorithm::default())]
    algorithm: Algorithm,
    /// Start from a named pattern instead of random noise.
    #[arg(long, conflicts_with_all = ["probability", "seed"])]
    pattern: Option<String>,
    /// Only print the last generation.
    #[arg(long)]
    final_only: bool,
    /// List the built-in patterns and exit.
    #[arg(long)]
    list_patterns: bool,
    /// List the step algorithms and exit.
    #[arg(long)]
    list_algorithms: bool,
}

fn print_generation(generation: u64, population: usize, grid: &impl std::fmt::Display) {
    println!("generation {generation} (population {population})");
    println!("{grid}");
    println!();
}

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    if args.list_patterns {
        for pattern in presets::all_patterns() {
            println!("{:<12} {}", pattern.name, pattern.description);
        }
        return Ok(());
    }
    if args.list_algorithms {
        for algorithm in Algorithm::all() {
            println!("{:<12} {}", algorithm.name(), algorithm.description());
        }
        return Ok(());
    }

    let config = SimulationConfig {
        size: args.size,
        live_probability: args.probability,
        seed: args.seed,
        rule: args.rule,
        algorithm: args.algorithm,
        pattern: args.pattern,
    };
    let mut simulation = Simulation::new(&config).context("invalid simulation settings")?;

    if args.seed.is_none() && config.pattern.is_none() {
        println!("seed {}", simulation.seed());
    }
    if !args.final_only {
        let grid = simulation.grid();
        print_generation(0, grid.population(), grid);
    }

    let final_only = args.final_only;
    simulation
        .run_for(args.generations, |generation, grid| {
            if !final_only {
                print_generation(generation, grid.population(), grid);
            }
        })
        .context("simulation step failed")?;

    if final_only {
        let grid = simulation.grid();
        print_generation(simulation.generation(), grid.population(), grid);
    }
    if simulation.grid().is_empty() {
        warn!("every cell is dead");
    }
    Ok(())
}
