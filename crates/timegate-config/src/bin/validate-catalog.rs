//! Catalog validation CLI tool
//!
//! Validates a timegate catalog file and reports any errors.

use std::path::PathBuf;
use std::process::ExitCode;
use timegate_util::{default_config_path, format_timestamp, now};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let config_path = match args.get(1) {
        Some(path) => PathBuf::from(path),
        None => {
            let default_path = default_config_path();
            eprintln!("Usage: validate-catalog [catalog-file]");
            eprintln!();
            eprintln!("Validates a timegate catalog file.");
            eprintln!();
            eprintln!("If no path is provided, uses: {}", default_path.display());
            eprintln!();
            eprintln!("Example:");
            eprintln!("  validate-catalog {}", default_path.display());
            eprintln!("  validate-catalog catalog.example.toml");
            return ExitCode::from(2);
        }
    };

    if !config_path.exists() {
        eprintln!("Error: Catalog file not found: {}", config_path.display());
        return ExitCode::from(1);
    }

    match timegate_config::load_config(&config_path) {
        Ok(catalog) => {
            let at = now();
            println!("✓ Catalog is valid");
            println!();
            println!("Summary:");
            println!("  Config version: {}", timegate_config::CURRENT_CONFIG_VERSION);
            println!("  Entities: {}", catalog.entities.len());
            println!(
                "  Defaults: without intervals = {}, outside intervals = {}",
                catalog.defaults.available_without_intervals,
                catalog.defaults.available_outside_intervals
            );

            if !catalog.entities.is_empty() {
                println!();
                println!("Entities (as of {}):", format_timestamp(&at));
                for entity in &catalog.entities {
                    let state = if entity.is_available(at) {
                        "available"
                    } else {
                        "unavailable"
                    };
                    println!(
                        "  - {} [{} interval(s)]: {}",
                        entity.identifier(),
                        entity.valid_intervals().count(),
                        state
                    );
                }
            }

            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ Catalog validation failed");
            eprintln!();
            match &e {
                timegate_config::ConfigError::ReadError(io_err) => {
                    eprintln!("Failed to read file: {}", io_err);
                }
                timegate_config::ConfigError::ParseError(parse_err) => {
                    eprintln!("TOML parse error:");
                    eprintln!("  {}", parse_err);
                }
                timegate_config::ConfigError::ValidationFailed { errors } => {
                    eprintln!("Validation errors ({}):", errors.len());
                    for err in errors {
                        eprintln!("  - {}", err);
                    }
                }
                timegate_config::ConfigError::UnsupportedVersion(ver) => {
                    eprintln!(
                        "Unsupported config version: {} (expected {})",
                        ver,
                        timegate_config::CURRENT_CONFIG_VERSION
                    );
                }
            }
            ExitCode::from(1)
        }
    }
}
