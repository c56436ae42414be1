//! Floorplan Augment command line front end
//!
//! Reads an edge list, makes the graph biconnected and chordal, and prints
//! the augmentation report as JSON.

use clap::{Arg, ArgAction, ArgMatches, Command};
use floorplan_augment::core::Config;
use floorplan_augment::graph::parse_edge_list;
use floorplan_augment::system::metrics::collect_metrics;
use floorplan_augment::{augment, init_logging, Result};
use std::io::Read;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    match run(cli().get_matches()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "augmentation failed");
            eprintln!("error: {}", e);
            // Bad input or configuration is the caller's to fix
            if e.is_client_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn cli() -> Command {
    Command::new("floorplan-augment")
        .version(floorplan_augment::VERSION)
        .about("Biconnect and triangulate a graph for rectangular floorplan synthesis.")
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .help("Edge list file (vertex count, edge count, then pairs); stdin when omitted")
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level (trace, debug, info, warn, error)")
        )
        .arg(
            Arg::new("no-biconnect")
                .long("no-biconnect")
                .action(ArgAction::SetTrue)
                .help("Skip the biconnectivity pass")
        )
        .arg(
            Arg::new("no-triangulate")
                .long("no-triangulate")
                .action(ArgAction::SetTrue)
                .help("Skip the triangulation pass")
        )
        .arg(
            Arg::new("euler-shortcut")
                .long("euler-shortcut")
                .action(ArgAction::SetTrue)
                .help("Accept T + V - E == 1 as chordal (maximal planar candidates only)")
        )
        .arg(
            Arg::new("metrics")
                .long("metrics")
                .action(ArgAction::SetTrue)
                .help("Print Prometheus metrics to stderr after the run")
        )
}

fn run(matches: ArgMatches) -> Result<()> {
    let config = resolve_config(&matches)?;
    init_logging(&config.logging)?;

    let text = match matches.get_one::<String>("input") {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let graph = parse_edge_list(&text)?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    let augmented = augment(&graph, &config)?;
    println!("{}", serde_json::to_string_pretty(&augmented.report)?);

    if config.metrics.enable_prometheus {
        eprint!("{}", collect_metrics()?);
    }
    Ok(())
}

/// File, then environment, then command line; validated once at the end
fn resolve_config(matches: &ArgMatches) -> Result<Config> {
    let mut config = if let Some(config_path) = matches.get_one::<String>("config") {
        let mut config = Config::from_file(config_path)?;
        config.apply_env_overrides()?;
        config
    } else {
        Config::load()?
    };

    apply_cli_overrides(&mut config, matches);
    config.validate()?;
    Ok(config)
}

/// Apply command line argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, matches: &ArgMatches) {
    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.clone();
    }
    if matches.get_flag("no-biconnect") {
        config.augment.biconnect = false;
    }
    if matches.get_flag("no-triangulate") {
        config.augment.triangulate = false;
    }
    if matches.get_flag("euler-shortcut") {
        config.triangulation.euler_shortcut = true;
    }
    if matches.get_flag("metrics") {
        config.metrics.enable_prometheus = true;
    }
}
