//! Network definition (`.inp`) parser
//!
//! Reads a line-oriented file of bracketed sections and turns each content
//! line into a typed element record.
//!
//! ## Architecture
//!
//! - [`parser`] - File reading, line classification and section dispatch
//! - [`section`] - Section header recognition
//! - [`record_parser`] - One handler per element category
//!
//! ## Usage
//!
//! ```rust
//! use hydronet::InpParser;
//!
//! let parsed = InpParser::default().parse_str("[JUNCTIONS]\nJ1 10 20\n");
//! assert_eq!(parsed.network.junction_count(), 1);
//! ```

pub mod parser;
pub mod record_parser;
pub mod section;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{InpParser, ParsedNetwork};
pub use section::InpSection;
