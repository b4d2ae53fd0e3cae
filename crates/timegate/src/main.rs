//! timegate - evaluate time-limited content catalogs
//!
//! Loads a catalog, then either reports which entities are available at an
//! instant or which ones changed availability between two instants.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use timegate_config::load_config;
use timegate_core::EntityCollection;
use timegate_util::{
    ContentId, Timestamp, config_path_without_env, format_duration, format_timestamp, now,
    parse_timestamp,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// timegate - availability of time-limited content
#[derive(Parser, Debug)]
#[command(name = "timegate")]
#[command(about = "Evaluate when time-limited content is available", long_about = None)]
struct Args {
    /// Catalog file path (default: ~/.config/timegate/catalog.toml)
    #[arg(short, long, env = "TIMEGATE_CONFIG", default_value_os_t = config_path_without_env())]
    config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every entity with its availability at an instant
    Check {
        /// Instant to evaluate (RFC 3339 or "YYYY-MM-DD HH:MM:SS"; default: now)
        #[arg(long, value_parser = parse_timestamp)]
        at: Option<Timestamp>,
    },

    /// Show entities whose availability changed between two instants
    Diff {
        /// Earlier instant
        #[arg(long, value_parser = parse_timestamp)]
        from: Timestamp,

        /// Later instant (default: now)
        #[arg(long, value_parser = parse_timestamp)]
        to: Option<Timestamp>,
    },
}

#[derive(Debug, Serialize)]
struct EntityStatus {
    identifier: ContentId,
    available: bool,
    current_intervals: Vec<String>,
    remaining: Option<String>,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    at: String,
    entities: Vec<EntityStatus>,
    next_boundary: Option<String>,
}

#[derive(Debug, Serialize)]
struct DiffReport {
    from: String,
    to: String,
    became_available: Vec<ContentId>,
    became_unavailable: Vec<ContentId>,
}

fn check_report(collection: &EntityCollection<ContentId>, at: Timestamp) -> CheckReport {
    let entities = collection
        .iter()
        .map(|entity| EntityStatus {
            identifier: entity.identifier().clone(),
            available: entity.is_available(at),
            current_intervals: entity
                .current_intervals(at)
                .map(|interval| interval.to_string())
                .collect(),
            remaining: entity
                .current_intervals(at)
                .find_map(|interval| interval.remaining(at))
                .map(format_duration),
        })
        .collect();

    CheckReport {
        at: format_timestamp(&at),
        entities,
        next_boundary: collection
            .next_boundary_after(at)
            .map(|ts| format_timestamp(&ts)),
    }
}

fn diff_report(
    collection: &EntityCollection<ContentId>,
    from: Timestamp,
    to: Timestamp,
) -> DiffReport {
    let diff = collection.diff(from, to);
    DiffReport {
        from: format_timestamp(&from),
        to: format_timestamp(&to),
        became_available: diff.became_available,
        became_unavailable: diff.became_unavailable,
    }
}

fn print_check(report: &CheckReport) {
    println!("Availability at {}:", report.at);
    for status in &report.entities {
        let marker = if status.available { "+" } else { "-" };
        match &status.remaining {
            Some(remaining) => println!("  {} {} ({} left)", marker, status.identifier, remaining),
            None => println!("  {} {}", marker, status.identifier),
        }
        for interval in &status.current_intervals {
            println!("      {}", interval);
        }
    }
    if let Some(next) = &report.next_boundary {
        println!();
        println!("Next change possible at {}", next);
    }
}

fn print_diff(report: &DiffReport) {
    println!("Changes from {} to {}:", report.from, report.to);
    if report.became_available.is_empty() && report.became_unavailable.is_empty() {
        println!("  (none)");
        return;
    }
    for id in &report.became_available {
        println!("  + {}", id);
    }
    for id in &report.became_unavailable {
        println!("  - {}", id);
    }
}

fn emit<T: Serialize>(json: bool, report: &T, print: impl FnOnce(&T)) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(report).context("Failed to serialize report")?
        );
    } else {
        print(report);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    debug!(version = env!("CARGO_PKG_VERSION"), "timegate starting");

    let catalog = load_config(&args.config)
        .with_context(|| format!("Failed to load catalog from {:?}", args.config))?;

    info!(
        config_path = %args.config.display(),
        entity_count = catalog.entities.len(),
        "Catalog loaded"
    );

    let collection = catalog
        .into_collection()
        .context("Failed to build entity collection")?;

    match args.command {
        Command::Check { at } => {
            let report = check_report(&collection, at.unwrap_or_else(now));
            emit(args.json, &report, print_check)
        }
        Command::Diff { from, to } => {
            let report = diff_report(&collection, from, to.unwrap_or_else(now));
            emit(args.json, &report, print_diff)
        }
    }
}
