//! Integration tests for the network definition parser
//!
//! These tests write realistic network files to a temporary directory and
//! exercise the public API end to end.

use hydronet::app::services::stats::SkipReason;
use hydronet::{Config, Error, InpParser, NodeKind};
use std::fs;
use tempfile::TempDir;

const NETWORK_INP: &str = r#"[TITLE]
 Two-loop distribution network

[JUNCTIONS]
;ID              	X           	Y           
 10              	20.00       	70.00       
 11              	30.00       	70.00       	Pattern 	1
 12              	50.00       	70.00       
 21              	30.00       	40.00       

[RESERVOIRS]
;ID              	X           	Y           	Head
 9               	10.00       	70.00       	800

[TANKS]
;ID              	X           	Y           	Init  	Min   	Max   	Diam
 2               	50.00       	90.00       	120   	100   	150   	50.5

[PIPES]
;ID              	Node1           	Node2           	Length      	Diameter
 10              	10              	11              	10530       	18
 11              	11              	12              	5280        	14  	Roughness	100
 110             	2               	12              	200         	18
 111             	11              	21              	5280        	ten

[PUMPS]
;ID              	Node1           	Node2           	Parameters
 9               	9               	10              	HEAD 1

[PATTERNS]
 1               	1.0         	1.2         	1.4

[END]
"#;

#[test]
fn test_parse_network_file_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("net.inp");
    fs::write(&path, NETWORK_INP).unwrap();

    let parsed = InpParser::default().parse_file(&path).unwrap();
    let network = &parsed.network;

    assert_eq!(network.junction_count(), 4);
    assert_eq!(network.reservoir_count(), 1);
    assert_eq!(network.tank_count(), 1);
    assert_eq!(network.pipes.len(), 3);
    assert_eq!(network.pumps.len(), 1);
    assert!(network.validate());

    let reservoir = network.find_node("9").unwrap();
    assert_eq!(reservoir.kind, NodeKind::Reservoir { total_head: 800.0 });

    let tank = network.find_node("2").unwrap();
    assert_eq!(
        tank.kind,
        NodeKind::Tank {
            initial_level: 120.0,
            minimum_level: 100.0,
            maximum_level: 150.0,
            diameter: 50.5,
        }
    );

    let junction = network.find_node("11").unwrap();
    assert_eq!(junction.attributes.get("Pattern").map(String::as_str), Some("1"));

    let pipe = network.find_pipe("11").unwrap();
    assert_eq!(pipe.start_node_id, "11");
    assert_eq!(pipe.end_node_id, "12");
    assert_eq!(pipe.length, 5280.0);
    assert_eq!(pipe.diameter, 14.0);
    assert_eq!(pipe.attributes.get("Roughness").map(String::as_str), Some("100"));

    let pump = network.find_pump("9").unwrap();
    assert_eq!(pump.attributes.get("HEAD").map(String::as_str), Some("1"));

    // pipe 111 has a non-numeric diameter; [PATTERNS] and [TITLE] lines are outside known sections
    assert_eq!(parsed.stats.lines_skipped, 1);
    assert!(matches!(
        parsed.stats.skipped[0].reason,
        SkipReason::InvalidNumber { .. }
    ));
    assert_eq!(parsed.stats.lines_ignored, 2);
}

#[test]
fn test_parse_is_repeatable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("net.inp");
    fs::write(&path, NETWORK_INP).unwrap();

    let parser = InpParser::new(Config::default());
    let first = parser.parse_file(&path).unwrap();
    let second = parser.parse_file(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_summary_output() {
    let parsed = InpParser::default().parse_str(NETWORK_INP);
    let summary = parsed.network.summary();
    assert!(summary.contains("Junctions:  4"));
    assert!(summary.contains("Pumps:      1"));
}

#[test]
fn test_missing_network_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = InpParser::default()
        .parse_file(temp_dir.path().join("absent.inp"))
        .unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
    assert!(err.to_string().contains("absent.inp"));
}
