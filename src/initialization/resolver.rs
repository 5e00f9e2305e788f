//! DNS resolver initialization.
//!
//! Builds the shared resolver against the fixed pool of public
//! nameservers, with timeouts tuned to fail fast on dead pool members.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{NameServerConfig, ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::xfer::Protocol;
use hickory_resolver::{Resolver, TokioResolver};

use crate::config::DNS_ATTEMPTS;
use crate::error_handling::InitializationError;

/// Initializes the DNS resolver used by every query in a run.
///
/// Each nameserver is queried over UDP on port 53. `ndots` is forced to
/// 0 so bare names are never expanded with local search domains, and
/// `attempts` is kept low: per-query retry and pool failover policy
/// lives here in the resolver, never in the dispatcher.
///
/// # Arguments
///
/// * `nameservers` - The resolver pool, shared read-only by all queries
/// * `timeout` - Per-query timeout
///
/// # Returns
///
/// A configured `TokioResolver` wrapped in `Arc` for sharing across
/// tasks.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the pool is empty.
pub fn init_resolver(
    nameservers: &[IpAddr],
    timeout: Duration,
) -> Result<Arc<TokioResolver>, InitializationError> {
    if nameservers.is_empty() {
        return Err(InitializationError::DnsResolverError(
            "nameserver pool is empty".to_string(),
        ));
    }

    let mut config = ResolverConfig::new();
    for ip in nameservers {
        let socket_addr = SocketAddr::new(*ip, 53);
        config.add_name_server(NameServerConfig::new(socket_addr, Protocol::Udp));
    }

    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = DNS_ATTEMPTS;
    opts.ndots = 0;

    let resolver = Resolver::builder_with_config(config, TokioConnectionProvider::default())
        .with_options(opts)
        .build();

    Ok(Arc::new(resolver))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_resolver_with_pool() {
        let pool: Vec<IpAddr> = vec!["8.8.8.8".parse().unwrap(), "1.1.1.1".parse().unwrap()];
        let result = init_resolver(&pool, Duration::from_secs(5));
        assert!(result.is_ok());
    }

    #[test]
    fn test_init_resolver_rejects_empty_pool() {
        let result = init_resolver(&[], Duration::from_secs(5));
        assert!(matches!(
            result,
            Err(InitializationError::DnsResolverError(_))
        ));
    }
}
