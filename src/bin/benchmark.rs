//! Step throughput benchmark comparing the serial and parallel algorithms

use std::time::Instant;

use anyhow::Result;
use log::info;
use torus_life::{Algorithm, StepEngine, new_grid};

const SEED: u64 = 0x5EED;

fn benchmark(algorithm: Algorithm, size: usize, iterations: u64) -> Result<f64> {
    let grid = new_grid(size, 0.3, SEED)?;
    let mut engine = StepEngine::new(grid).with_algorithm(algorithm);

    // The first step allocates the spare buffer; keep it out of the timing.
    engine.step()?;

    let start = Instant::now();
    engine.run(iterations)?;
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<()> {
    env_logger::init();
    println!("=== Torus Life Step Benchmark ===\n");

    let sizes = [64, 256, 512, 1024, 2048];
    let iterations = 20;
    info!("{iterations} generations per measurement, seed {SEED:#x}");

    println!(
        "{:>10} {:>12} {:>12} {:>10} {:>14}",
        "Size", "Serial", "Parallel", "Speedup", "Mcells/sec"
    );
    println!("{:-<62}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations)?;
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;
        let cells = (size * size) as f64;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x {:>14.1}",
            format!("{size}x{size}"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms,
            cells / (parallel_ms / 1000.0) / 1_000_000.0
        );
    }
    Ok(())
}
