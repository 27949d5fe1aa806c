//! Application entry point and mode dispatch.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use matcalc_core::exit_codes;
use matcalc_core::{Multiplier, NaiveMultiplier, StrassenMultiplier};
use tracing::debug;

use crate::config::{AppConfig, Mode};
use crate::generate::write_random_input;
use crate::matrix_io::{format_diagonal, load_pair, write_matrix};
use crate::triangles_demo;

/// Run the application. Returns the process exit code; hard failures
/// come back as errors and are mapped by [`crate::errors::handle_error`].
pub fn run(config: &AppConfig) -> Result<i32> {
    let engine = StrassenMultiplier::new(config.engine_options());
    debug!(
        cutoff = engine.options().base_cutoff,
        parallel_depth = engine.options().parallel_depth,
        "engine configured"
    );

    match &config.mode {
        Mode::Multiply {
            size,
            input,
            full,
            output,
        } => run_multiply(config, &engine, *size, input, *full, output.as_deref()),
        Mode::Check { size, input } => run_check(config, &engine, *size, input),
        Mode::Generate {
            size,
            output,
            seed,
            max_value,
        } => run_generate(config, *size, output, *seed, *max_value),
        Mode::Triangles {
            size,
            edge_prob,
            seed,
            expected,
        } => run_triangles(config, &engine, *size, *edge_prob, *seed, *expected),
    }
}

fn run_multiply(
    config: &AppConfig,
    engine: &StrassenMultiplier,
    size: usize,
    input: &str,
    full: bool,
    output: Option<&str>,
) -> Result<i32> {
    let (a, b) = load_pair(Path::new(input), size)
        .with_context(|| format!("loading {size}x{size} matrix pair from {input}"))?;

    let start = Instant::now();
    let c = engine.multiply(&a, &b)?;
    debug!(n = size, elapsed = ?start.elapsed(), "multiplication complete");

    if full {
        print!("{c}");
    } else {
        print!("{}", format_diagonal(&c));
    }

    if let Some(path) = output {
        write_matrix(Path::new(path), &c)
            .with_context(|| format!("writing result to {path}"))?;
        if !config.quiet {
            eprintln!("Result written to {path}");
        }
    }

    Ok(exit_codes::SUCCESS)
}

fn run_check(
    config: &AppConfig,
    engine: &StrassenMultiplier,
    size: usize,
    input: &str,
) -> Result<i32> {
    let (a, b) = load_pair(Path::new(input), size)
        .with_context(|| format!("loading {size}x{size} matrix pair from {input}"))?;

    let start = Instant::now();
    let c = engine.multiply(&a, &b)?;
    let elapsed = start.elapsed();

    let reference = NaiveMultiplier::new().multiply(&a, &b)?;

    if !config.quiet {
        println!("{} multiplied {size}x{size} in {elapsed:.3?}", engine.name());
    }

    if c == reference {
        println!("Correct!");
        Ok(exit_codes::SUCCESS)
    } else {
        println!("Incorrect!");
        Ok(exit_codes::ERROR_MISMATCH)
    }
}

fn run_generate(
    config: &AppConfig,
    size: usize,
    output: &str,
    seed: Option<u64>,
    max_value: i64,
) -> Result<i32> {
    anyhow::ensure!(size > 0, "matrix size must be positive");
    anyhow::ensure!(max_value >= 0, "max-value must be non-negative");

    write_random_input(Path::new(output), size, max_value, seed)
        .with_context(|| format!("writing test input to {output}"))?;
    if !config.quiet {
        println!("File created.");
    }
    Ok(exit_codes::SUCCESS)
}

fn run_triangles(
    config: &AppConfig,
    engine: &StrassenMultiplier,
    size: usize,
    edge_prob: f64,
    seed: Option<u64>,
    expected: Option<u64>,
) -> Result<i32> {
    anyhow::ensure!(
        (0.0..=1.0).contains(&edge_prob),
        "edge probability must be in [0, 1]"
    );

    let adj = triangles_demo::random_adjacency(size, edge_prob, seed);
    let start = Instant::now();
    let count = triangles_demo::run(&adj, engine)?;
    debug!(n = size, elapsed = ?start.elapsed(), "triangle count complete");

    if config.quiet {
        println!("{count}");
    } else {
        println!("{count} triangles in a {size}-vertex graph (edge probability {edge_prob})");
    }

    if let Some(expected) = expected {
        if count != expected {
            eprintln!("Expected {expected} triangles, counted {count}");
            return Ok(exit_codes::ERROR_MISMATCH);
        }
    }
    Ok(exit_codes::SUCCESS)
}
