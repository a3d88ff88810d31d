//! Text report parsing
//!
//! Reads node, link and system-wide lines from a results report. Section
//! banners are matched by substring, so `** Node Results for Period 3 **`
//! opens the node section.

use std::path::Path;
use tracing::{debug, info, warn};

use super::section::ReportSection;
use crate::app::models::{LinkResult, NodeResult, ResultSource, SystemWideResult};
use crate::app::services::field_parsers::{
    is_blank_or_comment, parse_required_f64, require_tokens, strip_bom, tokenize,
};
use crate::app::services::stats::{LineResult, ParseStats, SkippedLine};
use crate::config::Config;
use crate::constants::min_tokens;
use crate::{Result, ensure_exists, read_text_lossy};

/// Records read from a report file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedReport {
    pub node_results: Vec<NodeResult>,
    pub link_results: Vec<LinkResult>,

    /// Values of the last system-wide line, if any
    pub system_wide: Option<SystemWideResult>,

    pub stats: ParseStats,
}

/// Parser for results report files
#[derive(Debug, Clone, Default)]
pub struct ReportParser {
    config: Config,
}

impl ReportParser {
    /// Create a new report parser with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Parse a report file
    pub fn parse_file(&self, file_path: impl AsRef<Path>) -> Result<ParsedReport> {
        let file_path = file_path.as_ref();
        ensure_exists(file_path)?;
        info!("Parsing report file: {}", file_path.display());

        let content = read_text_lossy(file_path)?;

        let report = self.parse_str(&content);

        info!(
            "Parsed {} node results and {} link results from report",
            report.node_results.len(),
            report.link_results.len()
        );
        if report.stats.lines_skipped > 0 {
            warn!(
                "Skipped {} malformed lines in {}",
                report.stats.lines_skipped,
                file_path.display()
            );
        }

        Ok(report)
    }

    /// Parse report text held in memory
    pub fn parse_str(&self, content: &str) -> ParsedReport {
        let mut report = ParsedReport::default();
        let mut section = ReportSection::None;

        for (index, line) in strip_bom(content).lines().enumerate() {
            report.stats.total_lines += 1;
            let trimmed = line.trim();

            if is_blank_or_comment(trimmed) {
                continue;
            }

            if let Some(next) = ReportSection::classify(trimmed) {
                debug!("Section '{}' at line {}", next, index + 1);
                section = next;
                continue;
            }

            let tokens = tokenize(trimmed);
            let outcome = match section {
                ReportSection::None => {
                    report.stats.lines_ignored += 1;
                    continue;
                }
                ReportSection::NodeResults => {
                    parse_node_result(&tokens).map(|r| report.node_results.push(r))
                }
                ReportSection::LinkResults => {
                    parse_link_result(&tokens).map(|r| report.link_results.push(r))
                }
                ReportSection::SystemWide => {
                    parse_system_wide(&tokens).map(|r| report.system_wide = Some(r))
                }
            };

            match outcome {
                Ok(()) => report.stats.records_parsed += 1,
                Err(reason) => {
                    debug!("Skipped line {} in '{}': {}", index + 1, section, reason);
                    report.stats.record_skip(
                        SkippedLine {
                            line_number: index + 1,
                            section: section.to_string(),
                            content: trimmed.to_string(),
                            reason,
                        },
                        &self.config,
                    );
                }
            }
        }

        report
    }
}

/// `id elevation demand head pressure`
pub fn parse_node_result(tokens: &[&str]) -> LineResult<NodeResult> {
    require_tokens(tokens, min_tokens::NODE_RESULT)?;

    Ok(NodeResult {
        id: tokens[0].to_string(),
        elevation: parse_required_f64(tokens, 1, "elevation")?,
        demand: parse_required_f64(tokens, 2, "demand")?,
        head: parse_required_f64(tokens, 3, "head")?,
        pressure: parse_required_f64(tokens, 4, "pressure")?,
        source: ResultSource::Report,
    })
}

/// `id flow velocity head_loss status`
pub fn parse_link_result(tokens: &[&str]) -> LineResult<LinkResult> {
    require_tokens(tokens, min_tokens::LINK_RESULT)?;

    Ok(LinkResult {
        id: tokens[0].to_string(),
        flow: parse_required_f64(tokens, 1, "flow")?,
        velocity: parse_required_f64(tokens, 2, "velocity")?,
        head_loss: parse_required_f64(tokens, 3, "head loss")?,
        status: parse_required_f64(tokens, 4, "status")?,
        source: ResultSource::Report,
    })
}

/// `label total_demand average_efficiency total_energy_consumption`
pub fn parse_system_wide(tokens: &[&str]) -> LineResult<SystemWideResult> {
    require_tokens(tokens, min_tokens::SYSTEM_WIDE)?;

    Ok(SystemWideResult {
        total_demand: parse_required_f64(tokens, 1, "total demand")?,
        average_efficiency: parse_required_f64(tokens, 2, "average efficiency")?,
        total_energy_consumption: parse_required_f64(tokens, 3, "total energy consumption")?,
    })
}
