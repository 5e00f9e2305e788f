use std::net::IpAddr;

use clap::{Parser, ValueEnum};

// constants (used as defaults)

/// DNS query timeout in seconds.
///
/// Generous enough for TXT lookups through the slower members of the
/// public pool while still failing fast on dead resolvers.
pub const DNS_TIMEOUT_SECS: u64 = 10;

/// Number of attempts the resolver makes per query before giving up.
/// Failover between pool members happens inside the resolver; the
/// dispatcher itself never retries.
pub const DNS_ATTEMPTS: usize = 2;

/// Fixed pool of public recursive resolvers queried for every lookup.
///
/// The list mixes the large anycast providers (Google, Cloudflare,
/// Verisign, OpenDNS) with a few regional resolvers. It is read-only
/// after startup and shared by every concurrent query. Override with
/// `--nameserver`.
pub const DEFAULT_NAMESERVERS: &[&str] = &[
    "8.8.4.4",
    "8.8.8.8",
    "1.0.0.1",
    "80.95.220.186",
    "94.200.27.186",
    "109.228.0.238",
    "1.1.1.1",
    "64.6.64.6",
    "208.67.220.220",
];

/// Well-known DKIM selector names probed when the caller does not supply
/// any.
///
/// Covers the common provider conventions: Google Workspace (`google`,
/// `google2048`, `google1024`, `20170208`), Microsoft 365 (`selector1`,
/// `selector2`), SendGrid (`smtpapi`, `s1`, `s2`), Mimecast
/// (`mimecast20170111`), and a handful of generic labels. Order matters
/// only for the append order of DKIM results, so keep it stable.
pub const DEFAULT_DKIM_SELECTORS: &[&str] = &[
    "default",
    "email",
    "20170208",
    "google",
    "google2048",
    "google1024",
    "mail",
    "selector",
    "selector1",
    "selector2",
    "selector3",
    "smtpapi",
    "s1024",
    "s2048",
    "s1",
    "s2",
    "out",
    "mimecast20170111",
    "mx",
    "664B7EFE-ECE5-11E8-BF34-050C4FD4A569",
    "fpkey3642-2",
];

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error)
/// to most verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Plain,
    Json,
}

/// Report output format for the audit results.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field
/// attributes. All options except the domain list have defaults.
///
/// # Examples
///
/// ```bash
/// # Audit a single domain
/// dns_audit example.com
///
/// # Several domains, machine-readable output
/// dns_audit example.com example.org --format json
///
/// # Probe only specific DKIM selectors
/// dns_audit example.com --selector google --selector selector1
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "dns_audit",
    about = "Audits a domain's DNS records: A, MX, NS, CNAME, TXT, SPF, DMARC and DKIM."
)]
pub struct Config {
    /// Domains to audit
    #[arg(value_parser, required = true)]
    pub domains: Vec<String>,

    /// DKIM selector to probe (repeatable; defaults to the built-in list)
    #[arg(long = "selector")]
    pub selectors: Vec<String>,

    /// Nameserver IP to query (repeatable; defaults to the built-in public pool)
    #[arg(long = "nameserver")]
    pub nameservers: Vec<IpAddr>,

    /// Per-query timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Report format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Resolves the nameserver pool: CLI overrides win, otherwise the
    /// built-in public pool is used.
    pub fn resolved_nameservers(&self) -> Vec<IpAddr> {
        if !self.nameservers.is_empty() {
            return self.nameservers.clone();
        }
        DEFAULT_NAMESERVERS
            .iter()
            .map(|ip| {
                ip.parse()
                    .expect("built-in nameserver list holds valid IPs")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selector_list_has_21_entries() {
        assert_eq!(DEFAULT_DKIM_SELECTORS.len(), 21);
    }

    #[test]
    fn test_default_nameservers_parse_as_ips() {
        for ns in DEFAULT_NAMESERVERS {
            assert!(
                ns.parse::<IpAddr>().is_ok(),
                "nameserver {} should be a valid IP",
                ns
            );
        }
    }

    #[test]
    fn test_cli_nameserver_override_takes_precedence() {
        let config =
            Config::parse_from(["dns_audit", "example.com", "--nameserver", "9.9.9.9"]);
        assert_eq!(
            config.resolved_nameservers(),
            vec!["9.9.9.9".parse::<IpAddr>().unwrap()]
        );
    }

    #[test]
    fn test_default_pool_used_without_override() {
        let config = Config::parse_from(["dns_audit", "example.com"]);
        assert_eq!(config.resolved_nameservers().len(), 9);
    }

    #[test]
    fn test_multiple_domains_and_selectors() {
        let config = Config::parse_from([
            "dns_audit",
            "example.com",
            "example.org",
            "--selector",
            "google",
            "--selector",
            "selector1",
        ]);
        assert_eq!(config.domains.len(), 2);
        assert_eq!(config.selectors, vec!["google", "selector1"]);
    }
}
