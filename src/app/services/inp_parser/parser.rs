//! Core network definition parser implementation
//!
//! This module handles file reading, line classification and dispatch of
//! content lines to the per-section record handlers.

use std::path::Path;
use tracing::{debug, info, warn};

use super::record_parser::{InpRecord, parse_record};
use super::section::InpSection;
use crate::app::models::Network;
use crate::app::services::field_parsers::{is_blank_or_comment, strip_bom, tokenize};
use crate::app::services::stats::{ParseStats, SkippedLine};
use crate::config::Config;
use crate::constants::INP_SECTION_PREFIX;
use crate::{Result, ensure_exists, read_text_lossy};

/// Network read from a definition file, with parsing statistics
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedNetwork {
    pub network: Network,
    pub stats: ParseStats,
}

/// Parser for network definition files
///
/// Holds configuration only; each call produces a fresh [`ParsedNetwork`].
#[derive(Debug, Clone, Default)]
pub struct InpParser {
    config: Config,
}

impl InpParser {
    /// Create a new parser with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Parse a network definition file
    pub fn parse_file(&self, file_path: impl AsRef<Path>) -> Result<ParsedNetwork> {
        let file_path = file_path.as_ref();
        ensure_exists(file_path)?;
        info!("Parsing network file: {}", file_path.display());

        let content = read_text_lossy(file_path)?;

        let parsed = self.parse_str(&content);

        info!(
            "Parsed {} nodes, {} pipes, {} pumps from {} lines",
            parsed.network.nodes.len(),
            parsed.network.pipes.len(),
            parsed.network.pumps.len(),
            parsed.stats.total_lines
        );
        if parsed.stats.lines_skipped > 0 {
            warn!(
                "Skipped {} malformed lines in {}",
                parsed.stats.lines_skipped,
                file_path.display()
            );
        }

        Ok(parsed)
    }

    /// Parse network definition text held in memory
    pub fn parse_str(&self, content: &str) -> ParsedNetwork {
        let mut network = Network::default();
        let mut stats = ParseStats::new();
        let mut section = InpSection::None;

        for (index, line) in strip_bom(content).lines().enumerate() {
            stats.total_lines += 1;
            let trimmed = line.trim();

            if is_blank_or_comment(trimmed) {
                continue;
            }

            if trimmed.starts_with(INP_SECTION_PREFIX) {
                section = InpSection::from_header(trimmed);
                if section == InpSection::None {
                    debug!("Ignoring unknown section {} at line {}", trimmed, index + 1);
                }
                continue;
            }

            let tokens = tokenize(trimmed);
            match parse_record(section, &tokens) {
                None => stats.lines_ignored += 1,
                Some(Ok(record)) => {
                    match record {
                        InpRecord::Node(node) => network.nodes.push(node),
                        InpRecord::Pipe(pipe) => network.pipes.push(pipe),
                        InpRecord::Pump(pump) => network.pumps.push(pump),
                    }
                    stats.records_parsed += 1;
                }
                Some(Err(reason)) => {
                    debug!("Skipped line {} in [{}]: {}", index + 1, section, reason);
                    stats.record_skip(
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

        ParsedNetwork { network, stats }
    }
}
