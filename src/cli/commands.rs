//! Command implementations for hydronet
//!
//! Each command parses its inputs with the library parsers and prints the
//! resulting collections. Parsing itself never prints.

use anyhow::Context;
use colored::Colorize;
use tracing::{debug, info};

use super::args::{Args, Commands, NetworkArgs, ResultsArgs};
use crate::app::services::inp_parser::InpParser;
use crate::app::services::results_parser::ResultsParser;
use crate::app::services::stats::ParseStats;
use crate::config::Config;
use crate::constants::LOG_TARGET;

/// Main command runner
pub fn run(args: Args) -> anyhow::Result<()> {
    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config()?;

    match &args.command {
        Commands::Network(network_args) => run_network(network_args, &config),
        Commands::Results(results_args) => run_results(results_args, &config),
    }
}

/// Parse a network file, print its summary and structural verdict
fn run_network(args: &NetworkArgs, config: &Config) -> anyhow::Result<()> {
    let parsed = InpParser::new(config.clone())
        .parse_file(&args.input)
        .with_context(|| format!("Failed to parse network file {}", args.input.display()))?;

    parsed.network.print_summary();

    let verdict = if parsed.network.validate() {
        "PASSED".green().bold()
    } else {
        "FAILED".red().bold()
    };
    println!("Structural check: {}", verdict);

    report_skipped(&parsed.stats, args.show_skipped);
    info!("Network command finished");
    Ok(())
}

/// Parse a report and binary results pair and print every record
fn run_results(args: &ResultsArgs, config: &Config) -> anyhow::Result<()> {
    let (results, stats) = ResultsParser::new(config.clone())
        .parse_files_with_stats(&args.report, &args.binary)
        .with_context(|| {
            format!(
                "Failed to parse results {} + {}",
                args.report.display(),
                args.binary.display()
            )
        })?;

    print!("{}", results.with_precision(config.display_precision));

    report_skipped(&stats, args.show_skipped);
    info!("Results command finished");
    Ok(())
}

fn report_skipped(stats: &ParseStats, show_all: bool) {
    if stats.lines_skipped == 0 {
        return;
    }

    println!(
        "{} {} malformed lines skipped ({:.1}% of content lines parsed)",
        "note:".yellow().bold(),
        stats.lines_skipped,
        stats.success_rate()
    );

    if show_all {
        for skipped in &stats.skipped {
            println!(
                "  line {} [{}] {}: {}",
                skipped.line_number, skipped.section, skipped.reason, skipped.content
            );
        }
    }
}

/// Set up structured logging based on CLI arguments
///
/// Quiet mode logs compact lines; otherwise each line carries the uptime.
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    // Each layer sits at a different depth of the stack, so each needs its
    // own builder (the builder's subscriber type parameter differs).
    let (compact, timed) = if args.quiet {
        let layer = fmt::layer()
            .with_target(false)
            .with_level(true)
            .with_writer(std::io::stderr)
            .compact();
        (Some(layer), None)
    } else {
        let layer = fmt::layer()
            .with_target(false)
            .with_level(true)
            .with_writer(std::io::stderr)
            .with_timer(fmt::time::uptime());
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(timed)
        .init();

    debug!("Logging initialized at level: {}", log_level);
}
