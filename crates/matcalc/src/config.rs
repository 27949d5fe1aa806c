//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand};

/// MatCalc-rs: parallel Strassen matrix multiplication.
#[derive(Parser, Debug)]
#[command(name = "matcalc", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub mode: Mode,

    /// Base-case cutoff: matrix side at or below which the cubic path
    /// is used (0 = default).
    #[arg(long, default_value = "0", global = true, env = "MATCALC_CUTOFF")]
    pub cutoff: usize,

    /// Recursion levels that fan subproducts onto the thread pool
    /// (0 = default).
    #[arg(long, default_value = "0", global = true)]
    pub parallel_depth: usize,

    /// Quiet mode (only output the result values).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Operating mode.
#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Multiply the two matrices in an input file and print the result.
    Multiply {
        /// Matrix side length n; the file holds 2n^2 integers.
        #[arg(short = 'n', long)]
        size: usize,

        /// Input file: n^2 entries of A (row-major), then n^2 of B.
        #[arg(short, long)]
        input: String,

        /// Print the full matrix instead of only the diagonal.
        #[arg(long)]
        full: bool,

        /// Write the full result matrix to this file.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Timed multiplication verified against the cubic reference.
    Check {
        /// Matrix side length n; the file holds 2n^2 integers.
        #[arg(short = 'n', long)]
        size: usize,

        /// Input file: n^2 entries of A (row-major), then n^2 of B.
        #[arg(short, long)]
        input: String,
    },

    /// Generate a random test input file with 2n^2 entries.
    Generate {
        /// Matrix side length n.
        #[arg(short = 'n', long)]
        size: usize,

        /// Output file path.
        #[arg(short, long)]
        output: String,

        /// RNG seed for reproducible files.
        #[arg(long)]
        seed: Option<u64>,

        /// Largest entry value; entries are drawn from [0, max-value].
        #[arg(long, default_value = "9")]
        max_value: i64,
    },

    /// Count triangles in a random graph via the trace of A^3.
    Triangles {
        /// Number of vertices.
        #[arg(short = 'n', long)]
        size: usize,

        /// Probability of an edge between any two vertices.
        #[arg(long, default_value = "0.5")]
        edge_prob: f64,

        /// RNG seed for a reproducible graph.
        #[arg(long)]
        seed: Option<u64>,

        /// Fail (exit code 3) unless the count equals this value.
        #[arg(long)]
        expected: Option<u64>,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Engine options from the global flags, zeros normalized to
    /// defaults.
    #[must_use]
    pub fn engine_options(&self) -> matcalc_core::Options {
        matcalc_core::Options {
            base_cutoff: self.cutoff,
            parallel_depth: self.parallel_depth,
        }
        .normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_options_normalized() {
        let config = AppConfig::try_parse_from([
            "matcalc", "multiply", "-n", "4", "--input", "in.txt",
        ])
        .unwrap();
        let opts = config.engine_options();
        assert_eq!(opts.base_cutoff, matcalc_core::DEFAULT_BASE_CUTOFF);
        assert_eq!(opts.parallel_depth, matcalc_core::DEFAULT_PARALLEL_DEPTH);
    }

    #[test]
    fn explicit_cutoff_kept() {
        let config = AppConfig::try_parse_from([
            "matcalc", "multiply", "-n", "4", "--input", "in.txt", "--cutoff", "8",
        ])
        .unwrap();
        assert_eq!(config.engine_options().base_cutoff, 8);
    }

    #[test]
    fn generate_defaults() {
        let config = AppConfig::try_parse_from([
            "matcalc", "generate", "-n", "4", "--output", "out.txt",
        ])
        .unwrap();
        match config.mode {
            Mode::Generate {
                max_value, seed, ..
            } => {
                assert_eq!(max_value, 9);
                assert!(seed.is_none());
            }
            _ => panic!("wrong mode"),
        }
    }
}
