#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn clg() -> Command {
    cargo_bin_cmd!("chargelog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_chargelog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB with one charge code and two entries in the week of
/// Thursday 2024-01-04
pub fn init_db_with_data(db_path: &str) {
    clg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // charge code #1
    clg()
        .args([
            "--db",
            db_path,
            "--test",
            "code",
            "add",
            "1234",
            "001",
            "Development",
        ])
        .assert()
        .success();

    clg()
        .args([
            "--db",
            db_path,
            "--test",
            "add",
            "2024-01-04",
            "1",
            "09:00",
            "10:30",
            "Morning work",
        ])
        .assert()
        .success();

    clg()
        .args([
            "--db",
            db_path,
            "--test",
            "add",
            "2024-01-05",
            "1",
            "13:00",
            "14:00",
            "Afternoon work",
        ])
        .assert()
        .success();
}
