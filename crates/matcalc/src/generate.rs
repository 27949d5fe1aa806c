//! Random test-input generator.

use std::io::{BufWriter, Write};
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Write `2 * n^2` random integers in `[0, max_value]` to `path`, one
/// per line: inputs for an A/B pair of side `n`.
///
/// A fixed `seed` makes the file reproducible; `None` seeds from the OS.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_random_input(
    path: &Path,
    n: usize,
    max_value: i64,
    seed: Option<u64>,
) -> std::io::Result<()> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let mut file = BufWriter::new(std::fs::File::create(path)?);
    for _ in 0..2 * n * n {
        writeln!(file, "{}", rng.gen_range(0..=max_value))?;
    }
    file.flush()
}
