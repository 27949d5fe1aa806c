#![no_main]

use libfuzzer_sys::fuzz_target;

use matcalc_core::{Matrix, Multiplier, NaiveMultiplier, Options, StrassenMultiplier};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte picks the side length (capped for speed), the rest
    // fill the two matrices; missing entries wrap around the input.
    let n = (data[0] as usize % 12) + 1;
    let body = &data[1..];
    let entry = |i: usize| i64::from(body[i % body.len()] as i8);

    let a_data: Vec<i64> = (0..n * n).map(entry).collect();
    let b_data: Vec<i64> = (n * n..2 * n * n).map(entry).collect();
    let a = Matrix::from_vec(n, n, a_data).expect("length matches");
    let b = Matrix::from_vec(n, n, b_data).expect("length matches");

    let strassen = StrassenMultiplier::new(Options {
        base_cutoff: 2,
        parallel_depth: 1,
    });

    // Both engines must succeed and agree exactly.
    let reference = NaiveMultiplier::new().multiply(&a, &b).unwrap();
    let result = strassen.multiply(&a, &b).unwrap();
    assert_eq!(result, reference);
});
