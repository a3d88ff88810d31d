//! Command-line argument definitions for hydronet
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::Config;
use crate::constants::DEFAULT_DISPLAY_PRECISION;
use crate::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the hydronet reader
///
/// Reads network definitions and simulation results and prints what was found.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hydronet",
    version,
    about = "Read water-distribution network definitions and simulation results",
    long_about = "Parses network definition files (.inp), text result reports (.rpt) and \
                  binary result files (.out) and prints summaries of their contents. \
                  Malformed lines are skipped and can be listed with --show-skipped."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Decimal places for printed values
    #[arg(long, value_name = "DIGITS", global = true)]
    pub precision: Option<usize>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a network definition file and print its summary
    Network(NetworkArgs),
    /// Parse a report file and a binary results file and print the results
    Results(ResultsArgs),
}

/// Arguments for the network command
#[derive(Debug, Clone, Parser)]
pub struct NetworkArgs {
    /// Network definition file (.inp)
    #[arg(value_name = "INP")]
    pub input: PathBuf,

    /// List every skipped line
    #[arg(long)]
    pub show_skipped: bool,
}

/// Arguments for the results command
#[derive(Debug, Clone, Parser)]
pub struct ResultsArgs {
    /// Text results report (.rpt)
    #[arg(value_name = "RPT")]
    pub report: PathBuf,

    /// Binary results file (.out)
    #[arg(value_name = "OUT")]
    pub binary: PathBuf,

    /// List every skipped report line
    #[arg(long)]
    pub show_skipped: bool,
}

impl Args {
    /// Log level implied by -v / -q
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build and validate the configuration from defaults plus CLI overrides
    pub fn to_config(&self) -> Result<Config> {
        let config = Config::default()
            .with_display_precision(self.precision.unwrap_or(DEFAULT_DISPLAY_PRECISION));
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_network_command() {
        let args = Args::try_parse_from(["hydronet", "network", "net.inp", "--show-skipped"]).unwrap();
        match args.command {
            Commands::Network(network) => {
                assert_eq!(network.input, PathBuf::from("net.inp"));
                assert!(network.show_skipped);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_results_command() {
        let args =
            Args::try_parse_from(["hydronet", "-vv", "results", "net.rpt", "net.out", "--precision", "3"])
                .unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.precision, Some(3));
        match args.command {
            Commands::Results(results) => {
                assert_eq!(results.report, PathBuf::from("net.rpt"));
                assert_eq!(results.binary, PathBuf::from("net.out"));
                assert!(!results.show_skipped);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_results_requires_both_paths() {
        assert!(Args::try_parse_from(["hydronet", "results", "net.rpt"]).is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = Args::try_parse_from(["hydronet", "network", "net.inp"]).unwrap();

        // Default level
        assert_eq!(args.get_log_level(), "warn");

        // Verbose levels
        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        // Quiet mode
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_to_config() {
        let args = Args::try_parse_from(["hydronet", "network", "net.inp"]).unwrap();
        assert_eq!(args.to_config().unwrap().display_precision, 2);

        let args =
            Args::try_parse_from(["hydronet", "network", "net.inp", "--precision", "42"]).unwrap();
        assert!(args.to_config().is_err());
    }
}
