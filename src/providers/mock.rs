//! Deterministic mock checker for development and demo runs.
//!
//! Stands in when no registrar credentials are configured so the whole
//! search flow can still be exercised. Availability is a pure function of
//! the candidate text: a hash-seeded RNG weighted by name length (short
//! names are rarely free), so repeated runs agree with each other. Never
//! used when real credentials exist.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{AvailabilityProvider, ProviderKind};
use crate::candidates::Candidate;
use crate::error_handling::ProviderError;

/// Simulated provider latency, so demo runs pace like real ones.
const MOCK_DELAY: Duration = Duration::from_millis(200);

/// Deterministic mock availability provider.
pub struct MockProvider {
    enabled: bool,
}

impl MockProvider {
    /// Creates the provider. Pass `enabled: false` when real registrar
    /// credentials exist; the chain then filters it out.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

/// Availability chance grows with name length: base 10%, up to 50% for
/// names of fifteen characters or more.
fn availability_chance(name: &str) -> f64 {
    let length_factor = (name.len() as f64 / 15.0).min(1.0);
    0.1 + length_factor * 0.4
}

/// Pure verdict function: same name, same answer, every run.
fn deterministic_available(name: &str) -> bool {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    let mut rng = StdRng::seed_from_u64(hasher.finish());
    rng.random_bool(availability_chance(name))
}

#[async_trait]
impl AvailabilityProvider for MockProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Mock
    }

    fn is_usable(&self) -> bool {
        self.enabled
    }

    async fn check_batch(
        &self,
        candidates: &[Candidate],
        tld: &str,
    ) -> Result<HashMap<String, bool>, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::CredentialsMissing("mock checker"));
        }
        tokio::time::sleep(MOCK_DELAY).await;

        let availability: HashMap<String, bool> = candidates
            .iter()
            .map(|c| (c.as_str().to_string(), deterministic_available(c.as_str())))
            .collect();
        log::debug!(
            "mock checker: {}/{} candidates available for .{tld}",
            availability.values().filter(|a| **a).count(),
            availability.len()
        );
        Ok(availability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::normalize_suggestions;

    #[tokio::test]
    async fn test_mock_verdicts_are_deterministic() {
        let provider = MockProvider::new(true);
        let candidates = normalize_suggestions(["fittrack", "trailforge", "nestkit"]);
        let first = provider.check_batch(&candidates, "com").await.unwrap();
        let second = provider.check_batch(&candidates, "com").await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_availability_chance_grows_with_length() {
        assert!(availability_chance("abc") < availability_chance("alongernamehere"));
        // Chance is clamped: very long names cap at 50%
        assert_eq!(
            availability_chance("fifteencharword"),
            availability_chance("averyverylongcandidatename")
        );
    }

    #[test]
    fn test_disabled_mock_is_unusable() {
        assert!(!MockProvider::new(false).is_usable());
        assert!(MockProvider::new(true).is_usable());
    }

    #[tokio::test]
    async fn test_disabled_mock_refuses_checks() {
        let provider = MockProvider::new(false);
        let candidates = normalize_suggestions(["fittrack"]);
        assert!(matches!(
            provider.check_batch(&candidates, "com").await,
            Err(ProviderError::CredentialsMissing(_))
        ));
    }
}
