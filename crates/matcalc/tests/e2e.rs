//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn matcalc() -> Command {
    Command::cargo_bin("matcalc").expect("binary not found")
}

fn write_input(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_owned()
}

#[test]
fn help_flag() {
    matcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Strassen"));
}

#[test]
fn version_flag() {
    matcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("matcalc"));
}

#[test]
fn multiply_prints_diagonal() {
    let dir = tempfile::TempDir::new().unwrap();
    // A = [[1,2],[3,4]], B = [[5,6],[7,8]] -> C = [[19,22],[43,50]]
    let input = write_input(&dir, "in.txt", "1\n2\n3\n4\n5\n6\n7\n8\n");
    matcalc()
        .args(["multiply", "-n", "2", "--input", &input])
        .assert()
        .success()
        .stdout("19\n50\n");
}

#[test]
fn multiply_full_output() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = write_input(&dir, "in.txt", "1 2 3 4 5 6 7 8");
    matcalc()
        .args(["multiply", "-n", "2", "--input", &input, "--full"])
        .assert()
        .success()
        .stdout("19 22\n43 50\n");
}

#[test]
fn multiply_writes_output_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = write_input(&dir, "in.txt", "1 2 3 4 5 6 7 8");
    let out = dir.path().join("result.txt");
    matcalc()
        .args([
            "multiply",
            "-n",
            "2",
            "--input",
            &input,
            "-q",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "19 22\n43 50\n");
}

#[test]
fn multiply_odd_size_identity() {
    let dir = tempfile::TempDir::new().unwrap();
    // A = I3, B = arbitrary; C == B so the diagonal is B's diagonal.
    let input = write_input(
        &dir,
        "in.txt",
        "1 0 0 0 1 0 0 0 1 9 8 7 6 5 4 3 2 1",
    );
    matcalc()
        .args(["multiply", "-n", "3", "--input", &input, "--cutoff", "1"])
        .assert()
        .success()
        .stdout("9\n5\n1\n");
}

#[test]
fn multiply_wrong_entry_count() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = write_input(&dir, "in.txt", "1 2 3");
    matcalc()
        .args(["multiply", "-n", "2", "--input", &input])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("expected 8 entries"));
}

#[test]
fn multiply_missing_file() {
    matcalc()
        .args(["multiply", "-n", "2", "--input", "/nonexistent/in.txt"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn check_mode_reports_correct() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = write_input(&dir, "in.txt", "1 2 3 4 5 6 7 8");
    matcalc()
        .args(["check", "-n", "2", "--input", &input, "--cutoff", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"));
}

#[test]
fn generate_then_check_roundtrip() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("gen.txt");
    let input = input.to_str().unwrap();

    matcalc()
        .args(["generate", "-n", "16", "--output", input, "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File created."));

    matcalc()
        .args(["check", "-n", "16", "--input", input, "--cutoff", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"));
}

#[test]
fn generate_is_seeded() {
    let dir = tempfile::TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    for path in [&a, &b] {
        matcalc()
            .args([
                "generate",
                "-n",
                "4",
                "--output",
                path.to_str().unwrap(),
                "--seed",
                "7",
                "-q",
            ])
            .assert()
            .success();
    }
    assert_eq!(
        std::fs::read_to_string(&a).unwrap(),
        std::fs::read_to_string(&b).unwrap()
    );
}

#[test]
fn triangles_empty_graph() {
    matcalc()
        .args([
            "triangles",
            "-n",
            "12",
            "--edge-prob",
            "0.0",
            "--seed",
            "1",
            "-q",
        ])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn triangles_complete_graph() {
    // K8 has C(8, 3) = 56 triangles.
    matcalc()
        .args([
            "triangles",
            "-n",
            "8",
            "--edge-prob",
            "1.0",
            "--seed",
            "1",
            "-q",
            "--expected",
            "56",
        ])
        .assert()
        .success()
        .stdout("56\n");
}

#[test]
fn triangles_expected_mismatch() {
    matcalc()
        .args([
            "triangles",
            "-n",
            "8",
            "--edge-prob",
            "0.0",
            "--seed",
            "1",
            "--expected",
            "3",
        ])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn env_var_cutoff() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = write_input(&dir, "in.txt", "1 2 3 4 5 6 7 8");
    matcalc()
        .env("MATCALC_CUTOFF", "1")
        .args(["multiply", "-n", "2", "--input", &input])
        .assert()
        .success()
        .stdout("19\n50\n");
}
