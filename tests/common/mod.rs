//! Common test utilities for Architecture as Code integration tests

use assert_cmd::Command;
use tempfile::TempDir;

/// Build a command for the REAL arch binary
#[allow(deprecated)]
pub fn arch_cmd() -> Command {
    Command::cargo_bin("arch").expect("arch binary should build")
}

/// Create a throwaway output directory for discover runs
#[allow(dead_code)]
pub fn output_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}
