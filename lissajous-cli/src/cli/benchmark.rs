//! Benchmark command implementation.

use std::time::Instant;

use anyhow::Result;
use clap::Args;

use lissajous::{CurveParameters, Resolution};

#[derive(Args, Debug)]
pub struct BenchmarkArgs {
    /// Resolutions to time
    #[arg(short, long, value_delimiter = ',', default_values_t = [1_000usize, 10_000, 100_000, 1_000_000])]
    pub resolutions: Vec<usize>,

    /// Generations per resolution
    #[arg(short = 'n', long, default_value_t = 10)]
    pub iterations: u32,
}

/// Execute the benchmark command.
pub fn cmd_benchmark(args: BenchmarkArgs) -> Result<()> {
    let iterations = args.iterations.max(1);

    println!();
    println!("═══════════════════════════════════════════════");
    println!("  LISSAJOUS BENCHMARK ({} iterations)", iterations);
    println!("═══════════════════════════════════════════════");

    for &points in &args.resolutions {
        let params = CurveParameters::new(3.0, 4.0, 0.5, Resolution::new(points)?);

        let start = Instant::now();
        let mut total_points = 0;
        for _ in 0..iterations {
            total_points += params.generate()?.len();
        }
        let elapsed = start.elapsed();

        let secs = elapsed.as_secs_f64();
        let per_call_ms = secs * 1000.0 / iterations as f64;
        let rate = if secs > 0.0 { total_points as f64 / secs } else { f64::INFINITY };

        println!(
            "  {:>9} points: {:>9.3}ms/figure  {:>12.0} points/s",
            points, per_call_ms, rate
        );
    }

    println!("═══════════════════════════════════════════════");
    Ok(())
}
