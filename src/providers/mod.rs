//! Availability provider adapters.
//!
//! One uniform capability contract over heterogeneous availability
//! backends:
//! - [`NamecheapProvider`]: primary registrar batch API (XML)
//! - [`GodaddyProvider`]: secondary registrar API (JSON)
//! - [`ProbeProvider`]: heuristic DNS + HTTPS reachability check
//! - [`MockProvider`]: deterministic stand-in for credential-less runs
//!
//! Every variant fails with a typed [`ProviderError`] rather than silently
//! returning wrong data, and `is_usable()` must be consulted before
//! `check_batch` so missing credentials never surface as the normal path.

mod godaddy;
mod mock;
mod namecheap;
mod probe;

pub use godaddy::GodaddyProvider;
pub use mock::MockProvider;
pub use namecheap::NamecheapProvider;
pub use probe::ProbeProvider;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::candidates::Candidate;
use crate::error_handling::ProviderError;

/// Identifies a provider variant. Declaration order is fallback priority
/// order: registrars first, then the heuristic probe, then the mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Namecheap,
    Godaddy,
    Probe,
    Mock,
}

impl ProviderKind {
    /// Returns a human-readable provider name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Namecheap => "Namecheap",
            ProviderKind::Godaddy => "GoDaddy",
            ProviderKind::Probe => "heuristic probe",
            ProviderKind::Mock => "mock checker",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform capability contract over availability backends.
#[async_trait]
pub trait AvailabilityProvider: Send + Sync {
    /// Which variant this is.
    fn kind(&self) -> ProviderKind;

    /// Whether required credentials are present and pass format checks.
    ///
    /// Must be consulted before `check_batch`; invoking an unusable
    /// provider fails with [`ProviderError::CredentialsMissing`].
    fn is_usable(&self) -> bool;

    /// Checks a batch of candidates against the target TLD.
    ///
    /// Returns per-candidate availability keyed by the bare candidate
    /// token. A failure is all-or-nothing: no partial verdicts survive a
    /// failed attempt.
    async fn check_batch(
        &self,
        candidates: &[Candidate],
        tld: &str,
    ) -> Result<HashMap<String, bool>, ProviderError>;
}
