//! Test utilities for network definition parser testing
//!
//! This module provides fixture content and helper functions used across
//! the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;


/// Helper to create a small but complete network definition
pub fn create_test_inp() -> String {
    r#"[TITLE]
Test network

[JUNCTIONS]
;ID   X     Y
J1    10    20
J2    30    40    Demand  1.5
J3

[RESERVOIRS]
R1    0     0     120.0

[TANKS]
;ID  X  Y  Init  Min  Max  Diam
T1   5  5  10.0  2.0  20.0  15.0  Shape  Cyl

[PIPES]
P1   R1   J1   1000.0   12.0   Roughness  100
P2   J1   J2   abc      8.0
P3   J2   T1   500.0    6.0

[PUMPS]
PU1  R1   J1   HEAD  C1

[END]
"#
    .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

/// Helper to create a temporary file with given raw bytes
pub fn create_temp_bytes(bytes: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(bytes).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
