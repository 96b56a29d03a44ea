//! Search controller: iterative generate → normalize → resolve rounds.
//!
//! One logical task owns the round loop and all session mutation. The loop
//! suspends only at the generator call, the provider calls, and the staged
//! reveal delays, and cancellation is observable at every one of those
//! points.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_retry::Retry;
use tokio_util::sync::CancellationToken;

use crate::candidates::normalize_suggestions;
use crate::config::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_DOMAINS_CHECKED, DEFAULT_REQUIRED_AVAILABLE, REVEAL_STAGGER,
};
use crate::error_handling::{get_retry_strategy, GenerationError, ResolutionStats};
use crate::generator::NameGenerator;
use crate::resolver::{AvailabilityResolver, AvailabilityVerdict};
use crate::search::events::{SearchOutcome, SearchReport, SearchUpdate};
use crate::search::session::SearchSession;

/// Termination bounds for one search session.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    /// Stop once this many available names have been found.
    pub required_available: usize,
    /// Safety bound on generation rounds.
    pub max_attempts: usize,
    /// Safety bound on domains checked across the session.
    pub max_domains_checked: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            required_available: DEFAULT_REQUIRED_AVAILABLE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_domains_checked: DEFAULT_MAX_DOMAINS_CHECKED,
        }
    }
}

/// Handle to a running search: progress events, cancellation, and the
/// final report.
pub struct SearchHandle {
    updates: mpsc::UnboundedReceiver<SearchUpdate>,
    cancel: CancellationToken,
    join: JoinHandle<SearchReport>,
}

impl SearchHandle {
    /// A clone of the cancellation token, e.g. for signal handlers.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Requests cooperative cancellation. In-flight provider calls finish;
    /// their unrevealed results are discarded.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Next progress event, or `None` once the search task is done and the
    /// channel has drained.
    pub async fn next_update(&mut self) -> Option<SearchUpdate> {
        self.updates.recv().await
    }

    /// Waits for the search to finish and returns the final report.
    pub async fn finish(self) -> SearchReport {
        match self.join.await {
            Ok(report) => report,
            Err(e) => {
                log::error!("Search task panicked: {e:?}");
                SearchReport {
                    success: false,
                    results: Vec::new(),
                    error: Some("search task failed unexpectedly".into()),
                }
            }
        }
    }
}

/// Drives search sessions: repeated {generate → normalize → resolve}
/// rounds with progressive reveals, bounds enforcement, and cooperative
/// cancellation.
pub struct SearchController {
    generator: Arc<dyn NameGenerator>,
    resolver: AvailabilityResolver,
    limits: SearchLimits,
}

impl SearchController {
    /// Creates a controller over an injected generator and resolver.
    pub fn new(
        generator: Arc<dyn NameGenerator>,
        resolver: AvailabilityResolver,
        limits: SearchLimits,
    ) -> Self {
        Self {
            generator,
            resolver,
            limits,
        }
    }

    /// The resolver's shared failure statistics.
    pub fn stats(&self) -> Arc<ResolutionStats> {
        self.resolver.stats()
    }

    /// Spawns a search task and returns its handle.
    pub fn start(self: Arc<Self>, description: String, tld: String) -> SearchHandle {
        let (updates, receiver) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();
        let join = tokio::spawn(async move {
            self.run(&description, &tld, &updates, &task_cancel).await
        });
        SearchHandle {
            updates: receiver,
            cancel,
            join,
        }
    }

    /// Runs one search session to completion on the caller's task.
    ///
    /// Reveal policy (deterministic): each round's new candidates are
    /// announced as checking in candidate order; verdicts are then revealed
    /// unavailable-before-available, candidate order within each group,
    /// with a fixed stagger between items. The pacing is cosmetic; a
    /// cancel request is honored between every staged event.
    ///
    /// Update sends are best-effort: a consumer that dropped its receiver
    /// does not abort the search.
    pub async fn run(
        &self,
        description: &str,
        tld: &str,
        updates: &mpsc::UnboundedSender<SearchUpdate>,
        cancel: &CancellationToken,
    ) -> SearchReport {
        let mut session = SearchSession::new();

        let outcome = loop {
            // Termination checks: enough names, bounds exhausted, or cancel
            if session.available().len() >= self.limits.required_available {
                break SearchOutcome::Found;
            }
            if session.attempts() >= self.limits.max_attempts
                || session.domains_checked() >= self.limits.max_domains_checked
            {
                let bounded = if session.available().is_empty() {
                    SearchOutcome::NoResults
                } else {
                    SearchOutcome::Partial
                };
                break bounded;
            }
            if cancel.is_cancelled() {
                break SearchOutcome::Cancelled;
            }

            // Generating
            let attempt = session.attempts() + 1;
            let _ = updates.send(SearchUpdate::Generating { attempt });
            log::info!("Round {attempt}: generating name ideas");

            let raw = tokio::select! {
                _ = cancel.cancelled() => break SearchOutcome::Cancelled,
                result = self.generate_round(description) => match result {
                    Ok(raw) => raw,
                    Err(e) => {
                        log::error!("Name generation failed: {e}");
                        break SearchOutcome::Failed(format!(
                            "Could not generate name ideas: {e}"
                        ));
                    }
                },
            };

            // Normalize, then drop anything already processed this session
            let fresh = session.admit(normalize_suggestions(&raw));
            if fresh.is_empty() {
                log::info!("Round {attempt}: no new candidates after normalization");
                session.note_round(0);
                continue;
            }

            // Checking
            if cancel.is_cancelled() {
                break SearchOutcome::Cancelled;
            }
            for candidate in &fresh {
                let _ = updates.send(SearchUpdate::DomainChecking {
                    domain: candidate.fqdn(tld),
                });
            }
            log::info!("Round {attempt}: checking {} candidate(s)", fresh.len());

            let resolution = self.resolver.resolve(&fresh, tld).await;
            session.note_round(fresh.len());

            if !self
                .reveal_round(&resolution.verdicts, tld, &mut session, updates, cancel)
                .await
            {
                break SearchOutcome::Cancelled;
            }

            if let Some(message) = resolution.credentials_error {
                log::error!("Availability providers rejected their credentials: {message}");
                break SearchOutcome::Failed(format!(
                    "Provider credentials were rejected ({message}). \
                     Fix your credentials and try again."
                ));
            }
        };

        session.stop();
        log::info!(
            "Search done after {} round(s), {} domain(s) checked: {} available, {} taken",
            session.attempts(),
            session.domains_checked(),
            session.available().len(),
            session.unavailable().len()
        );

        let report = SearchReport {
            success: !matches!(outcome, SearchOutcome::Failed(_)),
            results: session.results().to_vec(),
            error: match &outcome {
                SearchOutcome::Failed(message) => Some(message.clone()),
                _ => None,
            },
        };
        let _ = updates.send(SearchUpdate::Completed {
            outcome,
            report: report.clone(),
        });
        report
    }

    /// One generator invocation with a bounded retry for transient
    /// failures. An empty suggestion list counts as a failure.
    async fn generate_round(&self, description: &str) -> Result<Vec<String>, GenerationError> {
        let generator = self.generator.as_ref();
        Retry::spawn(get_retry_strategy(), move || async move {
            let suggestions = generator.generate(description).await?;
            if suggestions.is_empty() {
                return Err(GenerationError::EmptyResult);
            }
            Ok(suggestions)
        })
        .await
    }

    /// Stages this round's verdict reveals. Verdicts are recorded into the
    /// session as they are revealed, so a cancel mid-reveal discards the
    /// rest of the round. Returns false when cancelled.
    async fn reveal_round(
        &self,
        verdicts: &[AvailabilityVerdict],
        tld: &str,
        session: &mut SearchSession,
        updates: &mpsc::UnboundedSender<SearchUpdate>,
        cancel: &CancellationToken,
    ) -> bool {
        let ordered = verdicts
            .iter()
            .filter(|v| !v.available)
            .chain(verdicts.iter().filter(|v| v.available));

        for verdict in ordered {
            tokio::select! {
                _ = cancel.cancelled() => return false,
                _ = tokio::time::sleep(REVEAL_STAGGER) => {}
            }
            session.record(verdict);
            let _ = updates.send(SearchUpdate::DomainResolved {
                domain: verdict.candidate.fqdn(tld),
                available: verdict.available,
                provider_failed: verdict.provider_failed,
            });
        }
        true
    }
}
