//! Configuration management and validation.
//!
//! Provides the settings shared by the parsers (diagnostic collection) and by
//! the display helpers (decimal precision).

use crate::constants::{DEFAULT_DISPLAY_PRECISION, DEFAULT_MAX_SKIPPED_LINES, MAX_DISPLAY_PRECISION};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parser and display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Keep a diagnostic entry for every skipped line
    pub collect_skipped_lines: bool,

    /// Upper bound on stored diagnostics; counters keep counting past it
    pub max_skipped_lines: usize,

    /// Decimal places used by summaries and result tables
    pub display_precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collect_skipped_lines: true,
            max_skipped_lines: DEFAULT_MAX_SKIPPED_LINES,
            display_precision: DEFAULT_DISPLAY_PRECISION,
        }
    }
}

impl Config {
    /// Set the display precision
    pub fn with_display_precision(mut self, precision: usize) -> Self {
        self.display_precision = precision;
        self
    }

    /// Set the maximum number of stored skip diagnostics
    pub fn with_max_skipped_lines(mut self, max: usize) -> Self {
        self.max_skipped_lines = max;
        self
    }

    /// Only count skipped lines, without storing diagnostics
    pub fn without_skipped_lines(mut self) -> Self {
        self.collect_skipped_lines = false;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.display_precision > MAX_DISPLAY_PRECISION {
            return Err(Error::configuration(format!(
                "display precision {} exceeds maximum of {}",
                self.display_precision, MAX_DISPLAY_PRECISION
            )));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
