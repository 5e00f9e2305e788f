//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Resolver initialization against the public nameserver pool
//! - Per-domain report output
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use dns_audit::{audit_domain, init_logger_with, init_resolver, report, Config, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let nameservers = config.resolved_nameservers();
    let timeout = Duration::from_secs(config.timeout_seconds);
    let resolver = match init_resolver(&nameservers, timeout) {
        Ok(resolver) => resolver,
        Err(e) => {
            eprintln!("dns_audit error: {e:#}");
            process::exit(1);
        }
    };

    info!(
        "Auditing {} domain{} against {} nameservers",
        config.domains.len(),
        if config.domains.len() == 1 { "" } else { "s" },
        nameservers.len()
    );

    for domain in &config.domains {
        let summary = audit_domain(resolver.as_ref(), domain, &config.selectors).await;
        match config.format {
            OutputFormat::Json => {
                println!("{}", report::render_json(&summary)?);
            }
            OutputFormat::Plain => {
                print!("{}", report::render_plain(domain, &summary));
            }
        }
    }

    Ok(())
}
