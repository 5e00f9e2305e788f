//! dns_audit library: concurrent DNS reconnaissance for a domain.
//!
//! Issues a fixed battery of lookups (A, MX, NS, CNAME, TXT, DMARC and
//! a list of candidate DKIM selectors) against a pool of public
//! resolvers, then classifies the answers into SPF / DMARC / DKIM and
//! standard record buckets.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use dns_audit::{audit_domain, init_resolver};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pool: Vec<std::net::IpAddr> = vec!["8.8.8.8".parse()?, "1.1.1.1".parse()?];
//! let resolver = init_resolver(&pool, Duration::from_secs(10))?;
//! let summary = audit_domain(resolver.as_ref(), "example.com", &[]).await;
//! println!("SPF: {:?}", summary.spf);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call library functions within an async context.

pub mod config;
mod dns;
mod error_handling;
pub mod initialization;
pub mod report;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use dns::{
    audit_domain, classify, dispatch_all, plan_queries, DkimRecord, Query, QueryOutcome,
    RecordKind, Resolve, Summary,
};
pub use error_handling::{InitializationError, QueryError, QueryErrorKind};
pub use initialization::{init_logger_with, init_resolver};
