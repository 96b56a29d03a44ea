//! domain_scout library: domain candidate discovery and availability
//! resolution.
//!
//! Turns a free-text application description into a short list of
//! registrable domain names. Name ideas come from a pluggable generator,
//! get normalized into valid candidate tokens, and are checked against a
//! fallback chain of availability providers (registrar batch APIs, a
//! heuristic DNS/HTTPS probe, and a deterministic mock for credential-less
//! runs). A search controller repeats generate→check rounds until enough
//! available names are found or a safety bound is hit, revealing progress
//! to the caller as it goes.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use domain_scout::{build_controller, Config, SearchUpdate};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     description: "a fitness tracking app with social sharing".into(),
//!     offline: true,
//!     ..Default::default()
//! };
//!
//! let controller = Arc::new(build_controller(&config)?);
//! let mut search = controller.start(config.description.clone(), config.tld.clone());
//! while let Some(update) = search.next_update().await {
//!     if let SearchUpdate::DomainResolved { domain, available, .. } = update {
//!         println!("{domain}: {}", if available { "available" } else { "taken" });
//!     }
//! }
//! let report = search.finish().await;
//! println!("{} name(s) checked", report.results.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod candidates;
pub mod config;
mod error_handling;
mod generator;
pub mod initialization;
mod providers;
mod resolver;
mod search;

// Re-export public API
pub use candidates::{normalize_suggestions, Candidate};
pub use config::{Config, GodaddyCredentials, LogFormat, LogLevel, NamecheapCredentials};
pub use error_handling::{
    GenerationError, InitializationError, ProviderError, ProviderFailureKind, ResolutionStats,
};
pub use generator::{BlendGenerator, NameGenerator};
pub use providers::{
    AvailabilityProvider, GodaddyProvider, MockProvider, NamecheapProvider, ProbeProvider,
    ProviderKind,
};
pub use resolver::{AvailabilityResolver, AvailabilityVerdict, Resolution};
pub use search::{
    DomainResult, SearchController, SearchHandle, SearchLimits, SearchOutcome, SearchReport,
    SearchUpdate,
};

use std::sync::Arc;

/// Assembles a [`SearchController`] from configuration and the process
/// environment.
///
/// Registrar providers become usable only when their credentials are
/// present and well-formed; with no usable registrar the deterministic
/// mock joins the chain behind the heuristic probe, so a credential-less
/// environment degrades gracefully instead of crashing. `--offline` skips
/// the real providers entirely.
pub fn build_controller(config: &Config) -> Result<SearchController, InitializationError> {
    let stats = Arc::new(ResolutionStats::new());

    let providers: Vec<Box<dyn AvailabilityProvider>> = if config.offline {
        log::info!("Offline mode: using the deterministic mock checker");
        vec![Box::new(MockProvider::new(true))]
    } else {
        let api_client = initialization::init_api_client()?;
        let probe_client = initialization::init_probe_client()?;
        let dns = initialization::init_resolver();

        let namecheap =
            NamecheapProvider::new(Arc::clone(&api_client), NamecheapCredentials::from_env());
        let godaddy = GodaddyProvider::new(Arc::clone(&api_client), GodaddyCredentials::from_env());

        // The mock only joins the chain when no registrar is usable
        let mock_enabled = !namecheap.is_usable() && !godaddy.is_usable();
        if mock_enabled {
            log::warn!(
                "No registrar credentials configured; falling back to the heuristic \
                 probe and the deterministic mock checker"
            );
        }

        vec![
            Box::new(namecheap),
            Box::new(godaddy),
            Box::new(ProbeProvider::new(dns, probe_client)),
            Box::new(MockProvider::new(mock_enabled)),
        ]
    };

    let resolver = AvailabilityResolver::new(providers, stats);
    let generator = Arc::new(BlendGenerator::new());
    let limits = SearchLimits {
        required_available: config.required_available,
        max_attempts: config.max_attempts,
        max_domains_checked: config.max_domains_checked,
    };
    Ok(SearchController::new(generator, resolver, limits))
}
