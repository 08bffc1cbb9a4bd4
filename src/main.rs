mod cli;
mod config;
mod engine;
mod error;
mod inventory;
mod report;
mod types;

use crate::error::RefereeError;
use crate::inventory::{CatalogInventory, Inventory};
use crate::types::config::RefereeConfig;
use crate::types::technology::UserConstraints;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const REJECTED: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("referee={default_level}")));
    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
    {
        eprintln!("warning: logging disabled: {err}");
    }
}

fn load_catalog(root: &Path) -> Result<RefereeConfig, RefereeError> {
    let loaded = config::load_config(root)?;
    loaded.validate()?;
    Ok(loaded)
}

fn run(cli: cli::Cli) -> Result<i32, RefereeError> {
    match cli.command {
        cli::Commands::Compare(cmd) => {
            let catalog = load_catalog(&cmd.root)?;
            let inventory = CatalogInventory::from_config(&catalog);
            let constraints = UserConstraints::new(
                catalog.default_priority_tags().iter().chain(&cmd.tags),
                cmd.project_type.as_deref(),
                cmd.team_size.as_deref(),
                cmd.timeline.as_deref(),
            );

            let mut result = engine::compare(&inventory, &cmd.technologies, constraints)?;
            if cmd.summary {
                let recommendation = engine::summary::summarize(&result);
                result = result.with_recommendation(recommendation);
            }

            let output_format = match cmd.format {
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                None => catalog
                    .default_format()
                    .and_then(report::OutputFormat::from_name)
                    .unwrap_or(report::OutputFormat::Md),
            };
            let rendered = report::render(&result, output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::List(cmd) => {
            let catalog = load_catalog(&cmd.root)?;
            let inventory = CatalogInventory::from_config(&catalog);
            if inventory.technologies().is_empty() {
                println!("list: no technologies");
                return Ok(exit_code::SUCCESS);
            }
            for (category, members) in inventory.by_category() {
                println!("{category}:");
                for technology in members {
                    println!("- {} ({})", technology.name, technology.id);
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Lint(cmd) => {
            let catalog = load_catalog(&cmd.root)?;
            let inventory = CatalogInventory::from_config(&catalog);
            let criteria = inventory.criteria();
            let mut warnings = 0;
            if criteria.is_empty() {
                println!("[WARN] no criteria defined; every overall score will be 0");
                warnings += 1;
            }
            for technology in inventory.technologies() {
                let matched = criteria
                    .iter()
                    .filter(|criterion| technology.metric(criterion.kind.metric_key()).is_some())
                    .count();
                if !criteria.is_empty() && matched == 0 {
                    println!(
                        "[WARN] {}: no metric matches any criterion",
                        technology.name
                    );
                    warnings += 1;
                }
            }
            println!(
                "lint: {} technologies, {} criteria, {} warning(s)",
                inventory.technologies().len(),
                criteria.len(),
                warnings
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_rejection() {
                exit_code::REJECTED
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
