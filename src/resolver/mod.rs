//! Availability resolution over a provider fallback chain.
//!
//! Drives the configured providers in priority order until one answers.
//! A provider failure is all-or-nothing: the next provider sees the same
//! full candidate list, and no partial verdicts leak across providers.
//! When the whole chain fails, every candidate fails closed: a name is
//! never reported available on foundationless data.

use std::sync::Arc;

use crate::candidates::Candidate;
use crate::error_handling::{ProviderError, ResolutionStats};
use crate::providers::{AvailabilityProvider, ProviderKind};

/// Availability verdict for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityVerdict {
    /// The candidate this verdict is for.
    pub candidate: Candidate,
    /// Whether the name can be registered.
    pub available: bool,
    /// True when no provider could answer and the fail-closed default was
    /// applied. Distinguishes "confirmed taken" from "unknown, treated as
    /// taken" for diagnostics; the default policy folds both into
    /// unavailable.
    pub provider_failed: bool,
}

/// Result of resolving one batch of candidates.
#[derive(Debug)]
pub struct Resolution {
    /// One verdict per input candidate, in input order.
    pub verdicts: Vec<AvailabilityVerdict>,
    /// The provider that produced the verdicts; `None` when the chain
    /// failed and the batch failed closed.
    pub source: Option<ProviderKind>,
    /// Set when the chain was exhausted *and* some provider rejected its
    /// credentials along the way. Terminal and user-actionable: retrying
    /// cannot help until the credentials are fixed.
    pub credentials_error: Option<String>,
}

/// Resolves candidate availability through an ordered provider chain.
///
/// Providers are constructor-injected so callers (and tests) control the
/// chain; priority is the vector order.
pub struct AvailabilityResolver {
    providers: Vec<Box<dyn AvailabilityProvider>>,
    stats: Arc<ResolutionStats>,
}

impl AvailabilityResolver {
    /// Creates a resolver over an ordered provider chain.
    pub fn new(providers: Vec<Box<dyn AvailabilityProvider>>, stats: Arc<ResolutionStats>) -> Self {
        Self { providers, stats }
    }

    /// The shared failure statistics.
    pub fn stats(&self) -> Arc<ResolutionStats> {
        Arc::clone(&self.stats)
    }

    /// Resolves availability for `candidates` under `tld`.
    ///
    /// Walks the usable providers in priority order; the first success
    /// supplies every verdict. Verdict order always matches candidate
    /// order, regardless of which provider answered or how its response
    /// was ordered. If no provider is usable, fails closed immediately
    /// without any network calls.
    pub async fn resolve(&self, candidates: &[Candidate], tld: &str) -> Resolution {
        if candidates.is_empty() {
            return Resolution {
                verdicts: Vec::new(),
                source: None,
                credentials_error: None,
            };
        }

        let usable: Vec<&dyn AvailabilityProvider> = self
            .providers
            .iter()
            .map(|p| p.as_ref())
            .filter(|p| p.is_usable())
            .collect();

        if usable.is_empty() {
            log::warn!(
                "No usable availability provider; failing closed for {} candidate(s)",
                candidates.len()
            );
            self.stats.record_fail_closed();
            return self.fail_closed(candidates, None);
        }

        let mut credentials_error = None;
        for (position, provider) in usable.iter().enumerate() {
            if position > 0 {
                self.stats.record_fallback();
            }
            log::debug!(
                "Checking {} candidate(s) against {}",
                candidates.len(),
                provider.kind()
            );
            match provider.check_batch(candidates, tld).await {
                Ok(availability) => {
                    if let Some(err) = &credentials_error {
                        log::warn!(
                            "{} answered after an earlier credentials rejection ({err}); \
                             continuing with its verdicts",
                            provider.kind()
                        );
                    }
                    let verdicts = candidates
                        .iter()
                        .map(|candidate| AvailabilityVerdict {
                            candidate: candidate.clone(),
                            // A candidate the provider omitted fails closed
                            // for that name alone
                            available: availability
                                .get(candidate.as_str())
                                .copied()
                                .unwrap_or(false),
                            provider_failed: false,
                        })
                        .collect();
                    return Resolution {
                        verdicts,
                        source: Some(provider.kind()),
                        credentials_error: None,
                    };
                }
                Err(error) => {
                    self.stats.record_failure(error.kind());
                    if let ProviderError::Unauthorized(message) = &error {
                        credentials_error
                            .get_or_insert_with(|| format!("{}: {message}", provider.kind()));
                    }
                    log::warn!(
                        "{} availability check failed ({error}); trying next provider",
                        provider.kind()
                    );
                }
            }
        }

        log::warn!(
            "All {} usable provider(s) failed; failing closed for {} candidate(s)",
            usable.len(),
            candidates.len()
        );
        self.stats.record_fail_closed();
        self.fail_closed(candidates, credentials_error)
    }

    fn fail_closed(
        &self,
        candidates: &[Candidate],
        credentials_error: Option<String>,
    ) -> Resolution {
        Resolution {
            verdicts: candidates
                .iter()
                .map(|candidate| AvailabilityVerdict {
                    candidate: candidate.clone(),
                    available: false,
                    provider_failed: true,
                })
                .collect(),
            source: None,
            credentials_error,
        }
    }
}
