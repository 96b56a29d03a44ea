//! Error type definitions.
//!
//! This module defines the failure taxonomy used throughout the engine:
//! provider failures, name-generation failures, and initialization failures.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing an HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Failure from an availability provider.
///
/// Providers fail loudly with one of these variants rather than silently
/// returning wrong data. The resolver converts failures into fallback
/// attempts against the next provider in the chain.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Required credentials are absent or fail their format checks.
    ///
    /// Checked via `is_usable()` before invocation; reaching this from
    /// `check_batch` means the caller skipped that check.
    #[error("{0} credentials are not configured")]
    CredentialsMissing(&'static str),

    /// The provider rejected the configured credentials (401-class, or an
    /// API-level key/IP error). Terminal and user-actionable: retrying
    /// cannot help until the credentials are fixed.
    #[error("credentials rejected: {0}")]
    Unauthorized(String),

    /// The provider throttled the request (429-class).
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// A response arrived but did not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Transport-level failure: connect error, timeout, DNS infrastructure.
    #[error("network error: {0}")]
    NetworkError(String),
}

impl ProviderError {
    /// The stats bucket this failure is counted under.
    pub fn kind(&self) -> ProviderFailureKind {
        match self {
            ProviderError::CredentialsMissing(_) => ProviderFailureKind::CredentialsMissing,
            ProviderError::Unauthorized(_) => ProviderFailureKind::Unauthorized,
            ProviderError::RateLimited(_) => ProviderFailureKind::RateLimited,
            ProviderError::MalformedResponse(_) => ProviderFailureKind::MalformedResponse,
            ProviderError::NetworkError(_) => ProviderFailureKind::NetworkError,
        }
    }
}

/// Provider failure categories tracked by
/// [`ResolutionStats`](super::ResolutionStats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ProviderFailureKind {
    CredentialsMissing,
    Unauthorized,
    RateLimited,
    MalformedResponse,
    NetworkError,
}

impl ProviderFailureKind {
    /// Returns a human-readable label for summary output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderFailureKind::CredentialsMissing => "Credentials missing",
            ProviderFailureKind::Unauthorized => "Credentials rejected",
            ProviderFailureKind::RateLimited => "Rate limited",
            ProviderFailureKind::MalformedResponse => "Malformed response",
            ProviderFailureKind::NetworkError => "Network error",
        }
    }
}

impl std::fmt::Display for ProviderFailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure from the external name generator.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Generator credentials are absent or malformed.
    #[error("name generator credentials are not configured")]
    CredentialsMissing,

    /// The generator answered but produced no suggestions.
    #[error("name generator returned no suggestions")]
    EmptyResult,

    /// The upstream generation call failed.
    #[error("name generation failed: {0}")]
    Upstream(String),
}
