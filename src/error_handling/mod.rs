//! Error handling and resolution statistics.
//!
//! This module provides:
//! - The failure taxonomy (provider, generation, initialization errors)
//! - Transport-error categorization onto that taxonomy
//! - Bounded retry strategy configuration
//! - Resolution statistics tracking (failures, fallbacks, fail-closed)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, get_retry_strategy};
pub use stats::ResolutionStats;
pub use types::{GenerationError, InitializationError, ProviderError, ProviderFailureKind};
