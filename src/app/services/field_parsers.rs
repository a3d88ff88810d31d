//! Field parsing utilities for whitespace-delimited text records
//!
//! This module provides the tokenizer and typed field helpers used by both
//! the network definition parser and the report parser.

use super::stats::{LineResult, SkipReason};
use crate::app::models::Attributes;
use crate::constants::COMMENT_MARKER;

/// Drop a leading UTF-8 byte-order mark
pub fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

/// Split a line on runs of spaces and tabs into non-empty tokens
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split([' ', '\t']).filter(|t| !t.is_empty()).collect()
}

/// True for blank lines and `;` comment lines
pub fn is_blank_or_comment(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER)
}

/// Reject a line with fewer than `expected` tokens
pub fn require_tokens(tokens: &[&str], expected: usize) -> LineResult<()> {
    if tokens.len() < expected {
        Err(SkipReason::TooFewTokens {
            expected,
            found: tokens.len(),
        })
    } else {
        Ok(())
    }
}

/// Parse a required float at `index`
pub fn parse_required_f64(tokens: &[&str], index: usize, field_name: &str) -> LineResult<f64> {
    match tokens.get(index) {
        Some(value) => parse_f64(value, field_name),
        None => Err(SkipReason::TooFewTokens {
            expected: index + 1,
            found: tokens.len(),
        }),
    }
}

/// Parse a float at `index`, defaulting to 0 when the token is absent
///
/// A present but unparseable token still rejects the line.
pub fn parse_optional_f64(tokens: &[&str], index: usize, field_name: &str) -> LineResult<f64> {
    match tokens.get(index) {
        Some(value) => parse_f64(value, field_name),
        None => Ok(0.0),
    }
}

/// Locale-independent decimal parse
///
/// `inf`, `infinity`, `nan` and values that overflow to infinity are
/// rejected: only finite numbers are valid field values.
pub fn parse_f64(value: &str, field_name: &str) -> LineResult<f64> {
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(SkipReason::InvalidNumber {
            field: field_name.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Pair the tokens from `start` onwards as (key, value); an odd trailing token is dropped
pub fn pair_attributes(tokens: &[&str], start: usize) -> Attributes {
    tokens
        .get(start..)
        .unwrap_or_default()
        .chunks_exact(2)
        .map(|pair| (pair[0].to_string(), pair[1].to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_mixed_whitespace() {
        assert_eq!(tokenize("J1 \t 10\t\t20  "), vec!["J1", "10", "20"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_blank_or_comment() {
        assert!(is_blank_or_comment(""));
        assert!(is_blank_or_comment(";ID  Elev"));
        assert!(!is_blank_or_comment("J1 10"));
    }

    #[test]
    fn test_require_tokens() {
        assert!(require_tokens(&["a", "b"], 2).is_ok());
        assert_eq!(
            require_tokens(&["a"], 3),
            Err(SkipReason::TooFewTokens {
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn test_parse_numbers() {
        let tokens = ["P1", "100.5", "1e2", "abc"];
        assert_eq!(parse_required_f64(&tokens, 1, "length"), Ok(100.5));
        assert_eq!(parse_required_f64(&tokens, 2, "diameter"), Ok(100.0));
        assert!(matches!(
            parse_required_f64(&tokens, 3, "roughness"),
            Err(SkipReason::InvalidNumber { .. })
        ));
        assert_eq!(parse_optional_f64(&tokens, 9, "head"), Ok(0.0));
        assert!(parse_optional_f64(&tokens, 3, "head").is_err());
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        for token in ["inf", "-Infinity", "INF", "NaN", "nan", "1e400"] {
            assert_eq!(
                parse_f64(token, "length"),
                Err(SkipReason::InvalidNumber {
                    field: "length".to_string(),
                    value: token.to_string(),
                }),
                "{token} should be rejected"
            );
        }
        assert_eq!(parse_f64("-0.5", "length"), Ok(-0.5));
    }

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}[JUNCTIONS]"), "[JUNCTIONS]");
        assert_eq!(strip_bom("[JUNCTIONS]"), "[JUNCTIONS]");
        // only a leading mark is removed
        assert_eq!(strip_bom("J1\u{feff}"), "J1\u{feff}");
    }

    #[test]
    fn test_pair_attributes() {
        let tokens = ["P1", "J1", "J2", "Roughness", "100", "Status", "Open", "Dangling"];
        let attrs = pair_attributes(&tokens, 3);
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("Roughness").map(String::as_str), Some("100"));
        assert_eq!(attrs.get("Status").map(String::as_str), Some("Open"));
        assert!(!attrs.contains_key("Dangling"));

        assert!(pair_attributes(&tokens, 20).is_empty());
    }
}
