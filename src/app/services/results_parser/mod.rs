//! Simulation results parser
//!
//! Combines a text report and a binary results file into one
//! [`SimulationResults`](crate::app::models::SimulationResults) value.
//!
//! ## Architecture
//!
//! - [`parser`] - Entry point tying both phases together
//! - [`section`] - Report section banner recognition
//! - [`report`] - Line-oriented report parsing
//! - [`binary`] - Fixed-layout little-endian results decoding
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hydronet::ResultsParser;
//!
//! # fn example() -> hydronet::Result<()> {
//! let results = ResultsParser::default().parse_files("net.rpt", "net.out")?;
//! results.display_results();
//! # Ok(())
//! # }
//! ```

pub mod binary;
pub mod parser;
pub mod report;
pub mod section;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use binary::{BinaryResults, read_binary_results};
pub use parser::ResultsParser;
pub use report::{ParsedReport, ReportParser};
pub use section::ReportSection;
