//! Test utilities for results parser testing
//!
//! Provides report fixtures and a builder for binary results files.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::constants::BINARY_MAGIC_NUMBER;


/// Helper to create a report with every section type
pub fn create_test_report() -> String {
    r#"  Page 1                                    Test Report
  *********************************************************

** Node Results for Period 0 **
  N1   100.0   5.0   95.0   10.0
  N2   90.0    2.5   85.0   
  N3   80.0    x     75.0   8.0

** Link Results for Period 0 **
  L1   12.5    0.8   0.02   1
  L2   -3.0    0.2   0.01   0

** System Wide Summary **
  Totals   150.0   72.5   4200.0
  Totals   160.0   73.5   4300.0

** Analysis ended **
  trailing text
"#
    .to_string()
}

/// Builder for little-endian binary results content
pub struct BinaryBuilder {
    bytes: Vec<u8>,
}

impl BinaryBuilder {
    /// Header with the expected magic number
    pub fn new(periods: i32, nodes: i32, links: i32) -> Self {
        Self::with_magic(BINARY_MAGIC_NUMBER, periods, nodes, links)
    }

    pub fn with_magic(magic: i32, periods: i32, nodes: i32, links: i32) -> Self {
        let mut builder = Self { bytes: Vec::new() };
        builder.push_i32(magic);
        builder.push_i32(2);
        builder.push_i32(periods);
        builder.push_i32(nodes);
        builder.push_i32(links);
        builder.push_f32(0.0);
        builder.push_f32(3600.0);
        builder
    }

    pub fn push_i32(&mut self, value: i32) -> &mut Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn push_f32(&mut self, value: f32) -> &mut Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Fill every period block with values derived from the period and index
    pub fn fill_periods(mut self, periods: usize, nodes: usize, links: usize) -> Self {
        for p in 0..periods {
            for n in 0..nodes {
                let base = (p * 100 + n) as f32;
                self.push_f32(base).push_f32(base + 0.25).push_f32(base + 0.5);
            }
            for l in 0..links {
                let base = (p * 100 + l) as f32;
                self.push_f32(-base)
                    .push_f32(base + 0.25)
                    .push_f32(base + 0.5)
                    .push_f32(1.0);
            }
        }
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// Helper to create a temporary file with given text content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    create_temp_binary(content.as_bytes())
}

/// Helper to create a temporary file with given raw bytes
pub fn create_temp_binary(bytes: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(bytes).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
