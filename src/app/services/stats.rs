//! Per-line outcomes and parsing statistics shared by the text parsers
//!
//! Malformed lines never abort a parse. Each record handler returns a
//! [`LineResult`]; the parser counts skips here and optionally keeps a
//! diagnostic entry for each one.

use crate::config::Config;
use serde::{Deserialize, Serialize};

/// Outcome of turning one content line into a record
pub type LineResult<T> = std::result::Result<T, SkipReason>;

/// Why a content line produced no record
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkipReason {
    #[error("expected at least {expected} fields, found {found}")]
    TooFewTokens { expected: usize, found: usize },

    #[error("invalid number for {field}: '{value}'")]
    InvalidNumber { field: String, value: String },
}

/// Diagnostic entry for a skipped line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based line number in the source file
    pub line_number: usize,

    /// Section the line was read under
    pub section: String,

    /// Trimmed line content
    pub content: String,

    pub reason: SkipReason,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of lines read, including blanks and comments
    pub total_lines: usize,

    /// Number of records successfully created
    pub records_parsed: usize,

    /// Number of content lines dropped as malformed
    pub lines_skipped: usize,

    /// Number of content lines outside any recognised section
    pub lines_ignored: usize,

    /// Skipped-line diagnostics, capped by configuration
    pub skipped: Vec<SkippedLine>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a skipped line and keep its diagnostic if configuration allows
    pub fn record_skip(&mut self, skipped: SkippedLine, config: &Config) {
        self.lines_skipped += 1;
        if config.collect_skipped_lines && self.skipped.len() < config.max_skipped_lines {
            self.skipped.push(skipped);
        }
    }

    /// Percentage of section content lines that produced a record
    pub fn success_rate(&self) -> f64 {
        let attempted = self.records_parsed + self.lines_skipped;
        if attempted == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / attempted as f64) * 100.0
        }
    }

    /// True when no content line was dropped
    pub fn is_clean(&self) -> bool {
        self.lines_skipped == 0
    }
}
