//! Data models for hydraulic network processing
//!
//! This module contains the element records read from network definition files
//! and the result records read from report and binary result files.

use crate::constants::DEFAULT_DISPLAY_PRECISION;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Extra `key value` fields found after an element's positional fields
pub type Attributes = BTreeMap<String, String>;

// =============================================================================
// Network Elements
// =============================================================================

/// Category-specific data carried by a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Plain coordinate node without storage
    Junction,

    /// Storage node with level limits
    Tank {
        initial_level: f64,
        minimum_level: f64,
        maximum_level: f64,
        diameter: f64,
    },

    /// Fixed-head boundary node
    Reservoir { total_head: f64 },
}

/// A network node: junction, tank or reservoir
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub kind: NodeKind,
    pub attributes: Attributes,
}

impl Node {
    /// Create a junction node
    pub fn junction(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            kind: NodeKind::Junction,
            attributes: Attributes::new(),
        }
    }

    pub fn is_junction(&self) -> bool {
        matches!(self.kind, NodeKind::Junction)
    }

    pub fn is_tank(&self) -> bool {
        matches!(self.kind, NodeKind::Tank { .. })
    }

    pub fn is_reservoir(&self) -> bool {
        matches!(self.kind, NodeKind::Reservoir { .. })
    }
}

/// A pipe connecting two node ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    pub id: String,
    pub start_node_id: String,
    pub end_node_id: String,
    pub length: f64,
    pub diameter: f64,
    pub attributes: Attributes,
}

/// A pump connecting two node ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pump {
    pub id: String,
    pub start_node_id: String,
    pub end_node_id: String,
    pub attributes: Attributes,
}

// =============================================================================
// Network Collection
// =============================================================================

/// Elements read from a network definition file, in file order
///
/// Ids are unique only by convention; link endpoints are free text and are
/// never resolved against the node list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    /// Junctions, tanks and reservoirs
    pub nodes: Vec<Node>,
    pub pipes: Vec<Pipe>,
    pub pumps: Vec<Pump>,
}

impl Network {
    pub fn junctions(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_junction())
    }

    pub fn tanks(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_tank())
    }

    pub fn reservoirs(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_reservoir())
    }

    pub fn junction_count(&self) -> usize {
        self.junctions().count()
    }

    pub fn tank_count(&self) -> usize {
        self.tanks().count()
    }

    pub fn reservoir_count(&self) -> usize {
        self.reservoirs().count()
    }

    /// First node (of any kind) with the given id
    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn find_pipe(&self, id: &str) -> Option<&Pipe> {
        self.pipes.iter().find(|p| p.id == id)
    }

    pub fn find_pump(&self, id: &str) -> Option<&Pump> {
        self.pumps.iter().find(|p| p.id == id)
    }

    /// Structural sanity check: at least one junction, one pipe and one
    /// storage node (tank or reservoir). Connectivity is not checked.
    pub fn validate(&self) -> bool {
        self.junction_count() > 0
            && !self.pipes.is_empty()
            && (self.tank_count() > 0 || self.reservoir_count() > 0)
    }

    /// Element counts as printable text
    pub fn summary(&self) -> String {
        self.to_string()
    }

    /// Print [`Network::summary`] to stdout
    pub fn print_summary(&self) {
        print!("{}", self);
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Network Summary:")?;
        writeln!(f, "  Junctions:  {}", self.junction_count())?;
        writeln!(f, "  Tanks:      {}", self.tank_count())?;
        writeln!(f, "  Reservoirs: {}", self.reservoir_count())?;
        writeln!(f, "  Pipes:      {}", self.pipes.len())?;
        writeln!(f, "  Pumps:      {}", self.pumps.len())
    }
}

// =============================================================================
// Simulation Results
// =============================================================================

/// Where a result record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultSource {
    /// A line of the text report
    Report,
    /// A block of the binary results file
    Binary { period: usize },
}

/// Hydraulic state of one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeResult {
    pub id: String,
    pub elevation: f64,
    pub demand: f64,
    pub head: f64,
    pub pressure: f64,
    pub source: ResultSource,
}

/// Hydraulic state of one link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkResult {
    pub id: String,
    pub flow: f64,
    pub velocity: f64,
    pub head_loss: f64,
    pub status: f64,
    pub source: ResultSource,
}

/// System-wide totals from the report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemWideResult {
    pub total_demand: f64,
    pub average_efficiency: f64,
    pub total_energy_consumption: f64,
}

/// Header of a binary results file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinaryHeader {
    pub magic: i32,
    pub version: i32,
    pub period_count: usize,
    pub node_count: usize,
    pub link_count: usize,
    pub report_start_time: f32,
    pub report_step: f32,
}

impl BinaryHeader {
    /// Simulation time at the start of `period`
    pub fn period_time(&self, period: usize) -> f64 {
        f64::from(self.report_start_time) + period as f64 * f64::from(self.report_step)
    }
}

/// Combined results of a report file and a binary file
///
/// Report-derived records precede binary-derived records in both collections;
/// use [`ResultSource`] to tell them apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResults {
    pub node_results: Vec<NodeResult>,
    pub link_results: Vec<LinkResult>,
    pub system_wide: Option<SystemWideResult>,
    pub binary_header: BinaryHeader,
}

impl SimulationResults {
    /// Node results that came from the text report
    pub fn report_node_results(&self) -> impl Iterator<Item = &NodeResult> {
        self.node_results
            .iter()
            .filter(|r| r.source == ResultSource::Report)
    }

    /// Link results that came from the text report
    pub fn report_link_results(&self) -> impl Iterator<Item = &LinkResult> {
        self.link_results
            .iter()
            .filter(|r| r.source == ResultSource::Report)
    }

    /// Binary node and link results of one period
    pub fn results_for_period(
        &self,
        period: usize,
    ) -> (
        impl Iterator<Item = &NodeResult>,
        impl Iterator<Item = &LinkResult>,
    ) {
        let source = ResultSource::Binary { period };
        (
            self.node_results.iter().filter(move |r| r.source == source),
            self.link_results.iter().filter(move |r| r.source == source),
        )
    }

    /// Displayable view of every result with `precision` decimals
    pub fn with_precision(&self, precision: usize) -> ResultsDisplay<'_> {
        ResultsDisplay {
            results: self,
            precision,
        }
    }

    /// All results as printable text with `precision` decimals
    pub fn display(&self, precision: usize) -> String {
        self.with_precision(precision).to_string()
    }

    /// Print [`SimulationResults::display`] to stdout with two decimals
    pub fn display_results(&self) {
        print!("{}", self.with_precision(DEFAULT_DISPLAY_PRECISION));
    }
}

/// [`SimulationResults`] rendered with a fixed number of decimals
#[derive(Debug, Clone, Copy)]
pub struct ResultsDisplay<'a> {
    results: &'a SimulationResults,
    precision: usize,
}

impl fmt::Display for ResultsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.precision;

        writeln!(f, "Node Results:")?;
        for r in &self.results.node_results {
            writeln!(
                f,
                "  {}: Elevation={:.p$}, Demand={:.p$}, Head={:.p$}, Pressure={:.p$}",
                r.id, r.elevation, r.demand, r.head, r.pressure
            )?;
        }

        writeln!(f, "Link Results:")?;
        for r in &self.results.link_results {
            writeln!(
                f,
                "  {}: Flow={:.p$}, Velocity={:.p$}, HeadLoss={:.p$}, Status={:.p$}",
                r.id, r.flow, r.velocity, r.head_loss, r.status
            )?;
        }

        writeln!(f, "System Wide Results:")?;
        match &self.results.system_wide {
            Some(s) => writeln!(
                f,
                "  Total Demand={:.p$}, Average Efficiency={:.p$}, Total Energy Consumption={:.p$}",
                s.total_demand, s.average_efficiency, s.total_energy_consumption
            ),
            None => writeln!(f, "  (none)"),
        }
    }
}
