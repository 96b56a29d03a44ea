//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (batch sizes, timeouts, search bounds)
//! - CLI option types and parsing
//! - Provider credential loading with format checks

mod constants;
mod credentials;
mod types;

// Re-export all constants
pub use constants::*;
pub use credentials::{GodaddyCredentials, NamecheapCredentials};
pub use types::{is_valid_tld, Config, LogFormat, LogLevel};
