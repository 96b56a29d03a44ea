// Shared test doubles for the provider and generator seams.
//
// These stand in for real backends so resolver and controller behavior can
// be exercised without network access or environment mutation.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use domain_scout::{
    AvailabilityProvider, Candidate, GenerationError, NameGenerator, ProviderError,
    ProviderFailureKind, ProviderKind,
};

/// Provider double that always answers with a fixed availability map.
#[allow(dead_code)] // Used by other test files
pub struct StaticProvider {
    kind: ProviderKind,
    usable: bool,
    availability: HashMap<String, bool>,
    /// Number of check_batch invocations.
    pub calls: Arc<AtomicUsize>,
    /// Candidate batches received, in call order.
    pub seen: Arc<Mutex<Vec<Vec<String>>>>,
}

#[allow(dead_code)]
impl StaticProvider {
    pub fn new(kind: ProviderKind, availability: &[(&str, bool)]) -> Self {
        Self {
            kind,
            usable: true,
            availability: availability
                .iter()
                .map(|(name, available)| (name.to_string(), *available))
                .collect(),
            calls: Arc::new(AtomicUsize::new(0)),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A provider whose `is_usable()` is false (missing credentials).
    pub fn unusable(kind: ProviderKind) -> Self {
        let mut provider = Self::new(kind, &[]);
        provider.usable = false;
        provider
    }
}

#[async_trait]
impl AvailabilityProvider for StaticProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn is_usable(&self) -> bool {
        self.usable
    }

    async fn check_batch(
        &self,
        candidates: &[Candidate],
        _tld: &str,
    ) -> Result<HashMap<String, bool>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push(candidates.iter().map(|c| c.as_str().to_string()).collect());
        Ok(self.availability.clone())
    }
}

/// Provider double that always fails with a given failure kind.
#[allow(dead_code)] // Used by other test files
pub struct FailingProvider {
    kind: ProviderKind,
    failure: ProviderFailureKind,
    /// Number of check_batch invocations.
    pub calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl FailingProvider {
    pub fn new(kind: ProviderKind, failure: ProviderFailureKind) -> Self {
        Self {
            kind,
            failure,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl AvailabilityProvider for FailingProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn is_usable(&self) -> bool {
        true
    }

    async fn check_batch(
        &self,
        _candidates: &[Candidate],
        _tld: &str,
    ) -> Result<HashMap<String, bool>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(match self.failure {
            ProviderFailureKind::CredentialsMissing => ProviderError::CredentialsMissing("test"),
            ProviderFailureKind::Unauthorized => {
                ProviderError::Unauthorized("API key is invalid".into())
            }
            ProviderFailureKind::RateLimited => ProviderError::RateLimited("HTTP 429".into()),
            ProviderFailureKind::MalformedResponse => {
                ProviderError::MalformedResponse("unexpected body".into())
            }
            ProviderFailureKind::NetworkError => {
                ProviderError::NetworkError("connect timed out".into())
            }
        })
    }
}

/// Generator double returning scripted rounds. Once the script runs out it
/// either repeats the last round (the default, which exercises cross-round
/// deduplication) or fails.
#[allow(dead_code)] // Used by other test files
pub struct ScriptedGenerator {
    rounds: Mutex<VecDeque<Vec<String>>>,
    last: Mutex<Option<Vec<String>>>,
    fail_when_exhausted: bool,
    /// Number of generate invocations (retries included).
    pub calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl ScriptedGenerator {
    pub fn new(rounds: &[&[&str]]) -> Self {
        Self {
            rounds: Mutex::new(
                rounds
                    .iter()
                    .map(|round| round.iter().map(|s| s.to_string()).collect())
                    .collect(),
            ),
            last: Mutex::new(None),
            fail_when_exhausted: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Fails with an upstream error once the script is exhausted.
    pub fn failing_when_exhausted(rounds: &[&[&str]]) -> Self {
        let mut generator = Self::new(rounds);
        generator.fail_when_exhausted = true;
        generator
    }
}

#[async_trait]
impl NameGenerator for ScriptedGenerator {
    async fn generate(&self, _description: &str) -> Result<Vec<String>, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(round) = self.rounds.lock().unwrap().pop_front() {
            *self.last.lock().unwrap() = Some(round.clone());
            return Ok(round);
        }
        if self.fail_when_exhausted {
            return Err(GenerationError::Upstream(
                "suggestion service is down".into(),
            ));
        }
        match self.last.lock().unwrap().clone() {
            Some(round) => Ok(round),
            None => Err(GenerationError::EmptyResult),
        }
    }
}

/// Generator double that stalls forever once its scripted rounds run out.
/// Lets cancellation tests park the controller at a suspension point
/// deterministically.
#[allow(dead_code)] // Used by other test files
pub struct StallingGenerator {
    rounds: Mutex<VecDeque<Vec<String>>>,
    stall: tokio::sync::Notify,
}

#[allow(dead_code)]
impl StallingGenerator {
    pub fn new(rounds: &[&[&str]]) -> Self {
        Self {
            rounds: Mutex::new(
                rounds
                    .iter()
                    .map(|round| round.iter().map(|s| s.to_string()).collect())
                    .collect(),
            ),
            stall: tokio::sync::Notify::new(),
        }
    }
}

#[async_trait]
impl NameGenerator for StallingGenerator {
    async fn generate(&self, _description: &str) -> Result<Vec<String>, GenerationError> {
        let next = self.rounds.lock().unwrap().pop_front();
        match next {
            Some(round) => Ok(round),
            None => {
                // Never notified; only cancellation gets the caller out
                self.stall.notified().await;
                Err(GenerationError::Upstream("unreachable".into()))
            }
        }
    }
}
