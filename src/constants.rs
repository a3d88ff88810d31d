//! Application constants for hydronet
//!
//! This module contains the format markers, field counts and default values
//! shared by the network and results parsers.

// =============================================================================
// Text Format Markers
// =============================================================================

/// Prefix of comment lines in both text formats
pub const COMMENT_MARKER: &str = ";";

/// Prefix of section headers in network definition files
pub const INP_SECTION_PREFIX: &str = "[";

/// Prefix of free-form section banners in report files
pub const REPORT_SECTION_PREFIX: &str = "**";

/// Network definition section headers (matched case-insensitively)
pub mod inp_sections {
    pub const JUNCTIONS: &str = "[junctions]";
    pub const TANKS: &str = "[tanks]";
    pub const RESERVOIRS: &str = "[reservoirs]";
    pub const PIPES: &str = "[pipes]";
    pub const PUMPS: &str = "[pumps]";
}

/// Report section markers (matched case-sensitively by substring)
pub mod report_sections {
    pub const NODE_RESULTS: &str = "Node Results";
    pub const LINK_RESULTS: &str = "Link Results";
    pub const SYSTEM_WIDE: &str = "System Wide";
}

// =============================================================================
// Minimum Token Counts
// =============================================================================

/// Minimum whitespace-delimited tokens required per record type
pub mod min_tokens {
    pub const JUNCTION: usize = 2;
    pub const TANK: usize = 5;
    pub const RESERVOIR: usize = 3;
    pub const PIPE: usize = 5;
    pub const PUMP: usize = 3;
    pub const NODE_RESULT: usize = 5;
    pub const LINK_RESULT: usize = 5;
    pub const SYSTEM_WIDE: usize = 4;
}

// =============================================================================
// Binary Results Layout
// =============================================================================

/// Magic number opening every binary results file
pub const BINARY_MAGIC_NUMBER: i32 = 516_114_521;

/// Header size in bytes: five i32 fields followed by two f32 fields
pub const BINARY_HEADER_BYTES: u64 = 5 * 4 + 2 * 4;

/// Prefix of synthetic node ids assigned to binary records
pub const SYNTHETIC_NODE_PREFIX: &str = "Node_";

/// Prefix of synthetic link ids assigned to binary records
pub const SYNTHETIC_LINK_PREFIX: &str = "Link_";

// =============================================================================
// Defaults
// =============================================================================

/// Decimal places used when displaying summaries and results
pub const DEFAULT_DISPLAY_PRECISION: usize = 2;

/// Largest precision accepted by the configuration
pub const MAX_DISPLAY_PRECISION: usize = 10;

/// Maximum number of skipped-line diagnostics kept per parse
pub const DEFAULT_MAX_SKIPPED_LINES: usize = 1000;

/// Log target filter used when RUST_LOG is not set
pub const LOG_TARGET: &str = "hydronet";
