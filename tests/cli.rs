//! End-to-end tests for the `payout` binary.

use std::{io::Write, path::Path, process::Command};

use tempfile::NamedTempFile;

fn payout() -> Command {
    Command::new(env!("CARGO_BIN_EXE_payout"))
}

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn sample_files() -> (NamedTempFile, NamedTempFile) {
    (
        csv_file("id,name,department,hours_worked,hourly_rate\n1,John Doe,IT,160,50\n2,Jane Smith,IT,150,60"),
        csv_file("id,name,department,hours_worked,rate\n3,Bob Brown,HR,170,40\n4,Alice Green,HR,140,45"),
    )
}

fn run(files: &[&Path], report: &str) -> (i32, String) {
    let output = payout()
        .args(files)
        .args(["--report", report])
        .output()
        .expect("failed to run payout");
    (
        output.status.code().unwrap(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
    )
}

#[test]
fn payout_report_covers_all_files() {
    let (it, hr) = sample_files();
    let (code, out) = run(&[it.path(), hr.path()], "payout");
    assert_eq!(code, 0, "{out}");
    for want in [
        "IT",
        "HR",
        "John Doe",
        "Jane Smith",
        "Bob Brown",
        "Alice Green",
        "Total hours: 620",
        "Total payout: $30100",
    ] {
        assert!(out.contains(want), "missing {want:?} in:\n{out}");
    }
    assert!(out.find("\nHR\n").unwrap() < out.find("\nIT\n").unwrap());
}

#[test]
fn empty_input_prints_sentinel() {
    let empty = csv_file("");
    let (code, out) = run(&[empty.path()], "payout");
    assert_eq!(code, 0);
    assert_eq!(out, "No data available for report.\n");
}

#[test]
fn missing_file_fails_before_reading_anything() {
    let (it, _) = sample_files();
    let (code, out) = run(
        &[it.path(), Path::new("non_existent_file.csv")],
        "payout",
    );
    assert_eq!(code, 1);
    assert_eq!(out, "Error: File not found: non_existent_file.csv\n");
}

#[test]
fn unknown_report_type_fails() {
    let (it, hr) = sample_files();
    let (code, out) = run(&[it.path(), hr.path()], "invalid");
    assert_eq!(code, 1);
    assert_eq!(out, "Error: Unknown report type: invalid\n");
}

#[test]
fn missing_file_takes_precedence_over_unknown_report() {
    let (code, out) = run(&[Path::new("non_existent_file.csv")], "invalid");
    assert_eq!(code, 1);
    assert!(out.starts_with("Error: File not found"), "{out}");
}

#[test]
fn report_flag_is_required() {
    let (it, _) = sample_files();
    let output = payout().arg(it.path()).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn at_least_one_file_is_required() {
    let output = payout().args(["--report", "payout"]).output().unwrap();
    assert!(!output.status.success());
}
