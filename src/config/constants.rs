//! Configuration constants.
//!
//! This module defines the operational parameters used throughout the
//! engine: batch sizes, timeouts, pacing delays, and search bounds.

use std::time::Duration;

// Candidate rules
/// Minimum candidate length after normalization; shorter tokens are crust
pub const MIN_CANDIDATE_LEN: usize = 3;

// Provider batching and pacing
/// Maximum domains per registrar batch call
/// Namecheap caps domains.check batches well below 100; 50 keeps requests
/// comfortably inside the documented limits
pub const MAX_PROVIDER_BATCH: usize = 50;
/// Candidates probed concurrently by the heuristic checker
/// Small width plus a pause between batches keeps the probe polite; this is
/// throughput control, not correctness
pub const PROBE_BATCH_WIDTH: usize = 3;
/// Pause between heuristic probe batches
pub const PROBE_BATCH_DELAY: Duration = Duration::from_millis(250);

// Network operation timeouts
/// DNS query timeout in seconds
/// Most queries complete in <1s; 3s fails fast on unresponsive servers
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Registrar API request timeout in seconds
pub const API_TIMEOUT_SECS: u64 = 10;
/// HTTPS reachability probe timeout
/// A probe that takes longer than this tells us nothing useful
pub const PROBE_HTTP_TIMEOUT: Duration = Duration::from_secs(5);

/// User-Agent sent on provider API calls and probes
pub const USER_AGENT: &str = concat!("domain_scout/", env!("CARGO_PKG_VERSION"));

// Progressive reveal
/// Fixed inter-item delay between staged verdict reveals
/// Cosmetic pacing only; cancellation is observed between every item
pub const REVEAL_STAGGER: Duration = Duration::from_millis(150);

// Retry strategy (generator call only; providers fall through the chain)
/// Initial delay in milliseconds before first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 500;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 5;
/// Maximum retry attempts for the generator call
pub const RETRY_MAX_ATTEMPTS: usize = 2;

// Search bounds (defaults; CLI-overridable)
/// Stop once this many available names have been found
pub const DEFAULT_REQUIRED_AVAILABLE: usize = 5;
/// Safety bound on generation rounds per session
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;
/// Safety bound on domains checked per session
pub const DEFAULT_MAX_DOMAINS_CHECKED: usize = 60;
/// Default target TLD
pub const DEFAULT_TLD: &str = "com";

// Presentation
/// Cap on taken names listed in the CLI summary
/// All verdicts stay in the report; this only trims the rendered list
pub const UNAVAILABLE_DISPLAY_CAP: usize = 10;

// Credential format checks
/// Registrar API keys shorter than this fail the format check
pub const MIN_API_KEY_LEN: usize = 11;

// HTTP status codes (for clarity and consistency)
pub const HTTP_STATUS_UNAUTHORIZED: u16 = 401;
pub const HTTP_STATUS_FORBIDDEN: u16 = 403;
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
