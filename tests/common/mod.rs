//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

pub fn fixtures_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path
}

pub fn fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).expect("fixture should be readable")
}
