//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create an empty working directory for a run
pub fn create_test_project() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let project_root = temp_dir.path().to_path_buf();
    (temp_dir, project_root)
}

/// Write a CSV file with one row per entry
pub fn create_csv(project_root: &PathBuf, name: &str, rows: &[&str]) -> PathBuf {
    let path = project_root.join(name);
    let mut contents = rows.join("\n");
    contents.push('\n');
    fs::write(&path, contents).expect("Failed to write csv file");
    path
}

/// Write frobenius.toml into the project
pub fn create_config(project_root: &PathBuf, contents: &str) {
    fs::write(project_root.join("frobenius.toml"), contents).expect("Failed to write config");
}

/// The fifteen primes from 101 to 173
pub fn small_primes() -> Vec<u64> {
    vec![
        101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173,
    ]
}

/// Fifteen odd values just above one million
pub fn large_units() -> Vec<u64> {
    vec![
        1000001, 1000003, 1000007, 1000009, 1000013, 1000027, 1000031, 1000037, 1000039, 1000049,
        1000051, 1000057, 1000063, 1000067, 1000073,
    ]
}
