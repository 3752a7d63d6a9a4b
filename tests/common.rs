#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn slg() -> Command {
    cargo_bin_cmd!("sitelogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sitelogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the schema for a test database
pub fn init_test_db(db_path: &str) {
    slg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize and punch in with a known photo and position
pub fn punch_in_at(db_path: &str, lat: &str, lon: &str) {
    slg()
        .args([
            "--db", db_path, "in", "--photo", "p1.jpg", "--lat", lat, "--lon", lon,
        ])
        .assert()
        .success();
}
