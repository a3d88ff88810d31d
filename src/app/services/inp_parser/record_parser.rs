//! Element record handlers for network definition lines
//!
//! Every handler takes the line's tokens and either builds one record or
//! reports why the line was skipped.

use super::section::InpSection;
use crate::app::models::{Node, NodeKind, Pipe, Pump};
use crate::app::services::field_parsers::{
    pair_attributes, parse_optional_f64, parse_required_f64, require_tokens,
};
use crate::app::services::stats::LineResult;
use crate::constants::min_tokens;

/// A record produced from one content line
#[derive(Debug, Clone, PartialEq)]
pub enum InpRecord {
    Node(Node),
    Pipe(Pipe),
    Pump(Pump),
}

/// Dispatch tokens to the handler for `section`; `None` outside known sections
pub fn parse_record(section: InpSection, tokens: &[&str]) -> Option<LineResult<InpRecord>> {
    let result = match section {
        InpSection::None => return None,
        InpSection::Junctions => parse_junction(tokens).map(InpRecord::Node),
        InpSection::Tanks => parse_tank(tokens).map(InpRecord::Node),
        InpSection::Reservoirs => parse_reservoir(tokens).map(InpRecord::Node),
        InpSection::Pipes => parse_pipe(tokens).map(InpRecord::Pipe),
        InpSection::Pumps => parse_pump(tokens).map(InpRecord::Pump),
    };
    Some(result)
}

/// `id x [y] [key value]...`
pub fn parse_junction(tokens: &[&str]) -> LineResult<Node> {
    require_tokens(tokens, min_tokens::JUNCTION)?;

    Ok(Node {
        id: tokens[0].to_string(),
        x: parse_required_f64(tokens, 1, "x")?,
        y: parse_optional_f64(tokens, 2, "y")?,
        kind: NodeKind::Junction,
        attributes: pair_attributes(tokens, 3),
    })
}

/// `id x y initial_level minimum_level [maximum_level] [diameter] [key value]...`
pub fn parse_tank(tokens: &[&str]) -> LineResult<Node> {
    require_tokens(tokens, min_tokens::TANK)?;

    let kind = NodeKind::Tank {
        initial_level: parse_required_f64(tokens, 3, "initial level")?,
        minimum_level: parse_required_f64(tokens, 4, "minimum level")?,
        maximum_level: parse_optional_f64(tokens, 5, "maximum level")?,
        diameter: parse_optional_f64(tokens, 6, "diameter")?,
    };

    Ok(Node {
        id: tokens[0].to_string(),
        x: parse_required_f64(tokens, 1, "x")?,
        y: parse_required_f64(tokens, 2, "y")?,
        kind,
        attributes: pair_attributes(tokens, 7),
    })
}

/// `id x y [total_head] [key value]...`
pub fn parse_reservoir(tokens: &[&str]) -> LineResult<Node> {
    require_tokens(tokens, min_tokens::RESERVOIR)?;

    Ok(Node {
        id: tokens[0].to_string(),
        x: parse_required_f64(tokens, 1, "x")?,
        y: parse_required_f64(tokens, 2, "y")?,
        kind: NodeKind::Reservoir {
            total_head: parse_optional_f64(tokens, 3, "total head")?,
        },
        attributes: pair_attributes(tokens, 4),
    })
}

/// `id start end length diameter [key value]...`
pub fn parse_pipe(tokens: &[&str]) -> LineResult<Pipe> {
    require_tokens(tokens, min_tokens::PIPE)?;

    Ok(Pipe {
        id: tokens[0].to_string(),
        start_node_id: tokens[1].to_string(),
        end_node_id: tokens[2].to_string(),
        length: parse_required_f64(tokens, 3, "length")?,
        diameter: parse_required_f64(tokens, 4, "diameter")?,
        attributes: pair_attributes(tokens, 5),
    })
}

/// `id start end [key value]...`
pub fn parse_pump(tokens: &[&str]) -> LineResult<Pump> {
    require_tokens(tokens, min_tokens::PUMP)?;

    Ok(Pump {
        id: tokens[0].to_string(),
        start_node_id: tokens[1].to_string(),
        end_node_id: tokens[2].to_string(),
        attributes: pair_attributes(tokens, 3),
    })
}
