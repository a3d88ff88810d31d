//! Hydronet Library
//!
//! A Rust library for reading the artifacts of a water-distribution network
//! simulation into typed, in-memory collections.
//!
//! This library provides tools for:
//! - Parsing network definition files (`.inp`) into junctions, tanks, reservoirs,
//!   pipes and pumps
//! - Parsing text result reports (`.rpt`) section by section
//! - Decoding fixed-layout binary result files (`.out`) period by period
//! - Best-effort line handling: malformed lines are skipped and reported, never fatal
//! - Plain-text summaries of parsed networks and results

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod field_parsers;
        pub mod inp_parser;
        pub mod results_parser;
        pub mod stats;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    LinkResult, Network, Node, NodeKind, NodeResult, Pipe, Pump, ResultSource, ResultsDisplay,
    SimulationResults, SystemWideResult,
};
pub use app::services::inp_parser::InpParser;
pub use app::services::results_parser::ResultsParser;
pub use config::Config;

use std::path::{Path, PathBuf};

/// Result type alias for hydronet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for network and results parsing
///
/// Malformed text lines are deliberately absent here: they are recovered
/// per line and surface through [`app::services::stats::ParseStats`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file does not exist
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Binary results file does not follow the expected layout
    #[error("Invalid format in file '{}': {message}", path.display())]
    InvalidFormat { path: PathBuf, message: String },

    /// Binary results file ended before a complete field could be read
    #[error("Truncated file '{}': unexpected end of data at byte {offset} while reading {field}", path.display())]
    TruncatedFile {
        path: PathBuf,
        offset: u64,
        field: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        Self::FileNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Create a truncated file error
    pub fn truncated_file(path: impl AsRef<Path>, offset: u64, field: impl Into<String>) -> Self {
        Self::TruncatedFile {
            path: path.as_ref().to_path_buf(),
            offset,
            field: field.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

/// Read a text file, replacing invalid UTF-8 sequences with U+FFFD
///
/// Undecodable bytes only ever damage the lines they sit on; those lines are
/// then skipped like any other malformed line.
pub(crate) fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Fail fast with [`Error::FileNotFound`] when `path` does not exist
pub(crate) fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::file_not_found(path))
    }
}
