//! Report rendering.
//!
//! Formats a classified [`Summary`] for the terminal (colored section
//! per bucket) or as JSON in the legacy `*_records` map shape.

use anyhow::{Context, Result};
use colored::*;

use crate::dns::Summary;

/// Renders a summary as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails, which would indicate a bug
/// in the `Summary` type rather than bad input.
pub fn render_json(summary: &Summary) -> Result<String> {
    serde_json::to_string_pretty(summary).context("Failed to serialize summary")
}

/// Renders a human-readable report for one domain.
pub fn render_plain(domain: &str, summary: &Summary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", domain.bold().underline()));

    push_bucket(&mut out, "A", &summary.a);
    push_bucket(&mut out, "CNAME", &summary.cname);
    push_bucket(&mut out, "NS", &summary.ns);
    push_bucket(&mut out, "MX", &summary.mx);
    push_bucket(&mut out, "TXT", &summary.txt);
    push_bucket(&mut out, "SPF", &summary.spf);
    push_bucket(&mut out, "DMARC", &summary.dmarc);

    if summary.dkim.is_empty() {
        out.push_str(&format!("  {}: {}\n", "DKIM".cyan(), "(none)".dimmed()));
    } else {
        out.push_str(&format!("  {}:\n", "DKIM".cyan()));
        for dkim in &summary.dkim {
            out.push_str(&format!("    {}:\n", dkim.selector.yellow()));
            for record in &dkim.records {
                out.push_str(&format!("      {record}\n"));
            }
        }
    }

    out
}

fn push_bucket(out: &mut String, label: &str, records: &[String]) {
    if records.is_empty() {
        out.push_str(&format!("  {}: {}\n", label.cyan(), "(none)".dimmed()));
        return;
    }
    out.push_str(&format!("  {}:\n", label.cyan()));
    for record in records {
        out.push_str(&format!("    {record}\n"));
    }
}
