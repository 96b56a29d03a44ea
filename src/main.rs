//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_scout` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

use domain_scout::config::{is_valid_tld, UNAVAILABLE_DISPLAY_CAP};
use domain_scout::initialization::init_logger_with;
use domain_scout::{build_controller, Config, SearchOutcome, SearchReport, SearchUpdate};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting registrar credentials in .env without exporting
    // them manually. Try the current directory first, then next to the
    // executable.
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if !is_valid_tld(&config.tld) {
        eprintln!(
            "domain_scout error: '{}' is not a bare TLD label (use e.g. 'com', not '.com')",
            config.tld
        );
        process::exit(1);
    }
    if config.description.trim().is_empty() {
        eprintln!("domain_scout error: please describe your application first");
        process::exit(1);
    }

    let controller =
        Arc::new(build_controller(&config).context("Failed to initialize providers")?);
    let stats = controller.stats();
    let mut search = controller.start(config.description.clone(), config.tld.clone());

    // Ctrl-C requests cooperative cancellation; partial results still print
    let cancel = search.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let mut final_report: Option<(SearchOutcome, SearchReport)> = None;
    while let Some(update) = search.next_update().await {
        match update {
            SearchUpdate::Generating { attempt } => {
                println!("✨ Round {attempt}: generating name ideas...");
            }
            SearchUpdate::DomainChecking { domain } => {
                println!("   ⏳ {}", domain.dimmed());
            }
            SearchUpdate::DomainResolved {
                domain,
                available,
                provider_failed,
            } => {
                if available {
                    println!("   ✅ {}", domain.green().bold());
                } else if provider_failed {
                    println!("   ❓ {} {}", domain.yellow(), "(unverified)".dimmed());
                } else {
                    println!("   ❌ {}", domain.red().strikethrough());
                }
            }
            SearchUpdate::Completed { outcome, report } => {
                final_report = Some((outcome, report));
            }
        }
    }

    let report = search.finish().await;
    stats.log_summary();

    if let Some((outcome, _)) = &final_report {
        print_summary(outcome, &report, &config.tld);
    }

    if !report.success {
        eprintln!(
            "domain_scout error: {}",
            report.error.as_deref().unwrap_or("unknown failure")
        );
        process::exit(1);
    }
    Ok(())
}

/// Prints the end-of-search summary: available names first, then a capped
/// list of taken names, then an outcome-specific hint.
fn print_summary(outcome: &SearchOutcome, report: &SearchReport, tld: &str) {
    let available: Vec<&str> = report
        .results
        .iter()
        .filter(|r| r.available)
        .map(|r| r.domain.as_str())
        .collect();
    let taken: Vec<&str> = report
        .results
        .iter()
        .filter(|r| !r.available)
        .map(|r| r.domain.as_str())
        .collect();

    println!();
    if !available.is_empty() {
        println!(
            "{} ({}):",
            "Available domains".green().bold(),
            available.len()
        );
        for name in &available {
            println!("  {}.{}", name.green(), tld.green());
        }
    }
    if !taken.is_empty() {
        println!("{} ({}):", "Taken".red(), taken.len());
        for name in taken.iter().take(UNAVAILABLE_DISPLAY_CAP) {
            println!("  {}.{}", name.dimmed(), tld.dimmed());
        }
        if taken.len() > UNAVAILABLE_DISPLAY_CAP {
            println!("  ... and {} more", taken.len() - UNAVAILABLE_DISPLAY_CAP);
        }
    }

    match outcome {
        SearchOutcome::Found => {}
        SearchOutcome::Partial => {
            println!(
                "{}",
                "Found some names, but fewer than requested. Try a more detailed description!"
                    .yellow()
            );
        }
        SearchOutcome::NoResults => {
            println!(
                "{}",
                "No available domains found in this batch. Try a more detailed description!"
                    .yellow()
            );
        }
        SearchOutcome::Cancelled => {
            println!("{}", "Search cancelled.".yellow());
        }
        SearchOutcome::Failed(_) => {}
    }
}
