//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver used by
//! the heuristic availability probe.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver for availability probes.
///
/// Uses the default resolver configuration with aggressive timeouts so the
/// probe fails fast on slow or unresponsive DNS servers.
///
/// `ndots` is pinned to 0 to prevent search-domain appending: a probe for
/// `fittrack.com` must never silently become `fittrack.com.corp.example`.
pub fn init_resolver() -> Arc<TokioAsyncResolver> {
    use hickory_resolver::config::{ResolverConfig, ResolverOpts};

    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(crate::config::DNS_TIMEOUT_SECS);
    opts.attempts = 2; // Reduce retry attempts to fail faster
    opts.ndots = 0;

    Arc::new(TokioAsyncResolver::tokio(ResolverConfig::default(), opts))
}
