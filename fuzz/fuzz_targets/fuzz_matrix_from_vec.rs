#![no_main]

use libfuzzer_sys::fuzz_target;

use matcalc_core::Matrix;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Arbitrary (rows, cols) against an arbitrary-length entry vector:
    // construction must either succeed with matching dimensions or
    // return an error, never panic.
    let rows = data[0] as usize;
    let cols = data[1] as usize;
    let entries: Vec<i64> = data[2..].iter().map(|&b| i64::from(b as i8)).collect();

    if let Ok(m) = Matrix::from_vec(rows, cols, entries) {
        assert_eq!(m.rows(), rows);
        assert_eq!(m.cols(), cols);
        let _ = m.diagonal();
    }
});
