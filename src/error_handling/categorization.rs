//! Error categorization and retry strategy.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use super::types::ProviderError;

/// Creates the bounded exponential backoff used for the generator call.
///
/// Provider failures are never retried against the same provider (the
/// fallback chain handles them); this strategy exists only so a transient
/// generator hiccup does not immediately end the session.
pub fn get_retry_strategy() -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(crate::config::RETRY_INITIAL_DELAY_MS)
        .factor(crate::config::RETRY_FACTOR)
        .max_delay(Duration::from_secs(crate::config::RETRY_MAX_DELAY_SECS))
        .take(crate::config::RETRY_MAX_ATTEMPTS)
}

/// Categorizes a `reqwest::Error` into a [`ProviderError`].
///
/// Status-bearing errors map onto the auth/throttle variants; everything
/// else (connect failures, timeouts, body errors) is a transport failure.
pub fn categorize_reqwest_error(error: reqwest::Error) -> ProviderError {
    if let Some(status) = error.status() {
        match status.as_u16() {
            crate::config::HTTP_STATUS_UNAUTHORIZED | crate::config::HTTP_STATUS_FORBIDDEN => {
                return ProviderError::Unauthorized(format!("HTTP {status}"));
            }
            crate::config::HTTP_STATUS_TOO_MANY_REQUESTS => {
                return ProviderError::RateLimited(format!("HTTP {status}"));
            }
            _ => {}
        }
    }
    ProviderError::NetworkError(error.to_string())
}
