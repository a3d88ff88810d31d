//! Results parser entry point
//!
//! Runs the report phase and then the binary phase, appending binary records
//! after the report records in the same collections.

use std::path::Path;
use tracing::info;

use super::binary::read_binary_file;
use super::report::ReportParser;
use crate::app::models::SimulationResults;
use crate::app::services::stats::ParseStats;
use crate::config::Config;
use crate::{Result, ensure_exists};

/// Parser for a report file plus its binary results file
#[derive(Debug, Clone, Default)]
pub struct ResultsParser {
    config: Config,
}

impl ResultsParser {
    /// Create a new parser with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Parse both files into one result set
    ///
    /// Both paths are checked before anything is read. Any binary error
    /// discards the whole parse.
    pub fn parse_files(
        &self,
        report_path: impl AsRef<Path>,
        binary_path: impl AsRef<Path>,
    ) -> Result<SimulationResults> {
        self.parse_files_with_stats(report_path, binary_path)
            .map(|(results, _)| results)
    }

    /// Like [`ResultsParser::parse_files`], also returning the report's line statistics
    pub fn parse_files_with_stats(
        &self,
        report_path: impl AsRef<Path>,
        binary_path: impl AsRef<Path>,
    ) -> Result<(SimulationResults, ParseStats)> {
        let report_path = report_path.as_ref();
        let binary_path = binary_path.as_ref();
        ensure_exists(report_path)?;
        ensure_exists(binary_path)?;

        let report = ReportParser::new(self.config.clone()).parse_file(report_path)?;
        let binary = read_binary_file(binary_path)?;

        let mut node_results = report.node_results;
        node_results.extend(binary.node_results);
        let mut link_results = report.link_results;
        link_results.extend(binary.link_results);

        info!(
            "Results loaded: {} node results, {} link results, system wide {}",
            node_results.len(),
            link_results.len(),
            if report.system_wide.is_some() { "present" } else { "absent" }
        );

        let results = SimulationResults {
            node_results,
            link_results,
            system_wide: report.system_wide,
            binary_header: binary.header,
        };
        Ok((results, report.stats))
    }
}
