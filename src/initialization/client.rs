//! HTTP client initialization.
//!
//! This module provides functions to initialize the two HTTP clients the
//! engine uses: one for registrar API calls and one for reachability
//! probes.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{API_TIMEOUT_SECS, PROBE_HTTP_TIMEOUT, USER_AGENT};

/// Initializes the HTTP client used for registrar API calls.
///
/// Configured with the crate User-Agent and the registrar request timeout;
/// redirects stay enabled (registrar endpoints occasionally move between
/// hosts).
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_api_client() -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(API_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the HTTP client used for HTTPS reachability probes.
///
/// Redirects are disabled: the probe only cares whether *anything* answers
/// at the apex, not where a site forwards to. The timeout is short; a
/// probe that hangs tells us nothing about availability.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_probe_client() -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(PROBE_HTTP_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(Arc::new(client))
}
