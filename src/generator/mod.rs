//! Name generation seam.
//!
//! The engine treats name generation as an external collaborator behind a
//! narrow contract: given a non-empty description, return a non-empty list
//! of raw name ideas. An AI-backed implementation plugs in through
//! [`NameGenerator`]; [`BlendGenerator`] is a deterministic offline
//! implementation that keeps the search flow usable in development and
//! demo runs, the same role the mock availability checker plays for
//! providers.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error_handling::GenerationError;

/// External name-generation collaborator.
///
/// Contract: given a non-empty description, `generate` returns a non-empty
/// list of raw suggestions on success. Suggestions may be arbitrarily messy
/// (mixed case, punctuation, attached TLDs); normalization is the engine's
/// job, not the generator's.
#[async_trait]
pub trait NameGenerator: Send + Sync {
    /// Produces raw name suggestions for an application description.
    async fn generate(&self, description: &str) -> Result<Vec<String>, GenerationError>;
}

/// Deterministic offline generator.
///
/// Blends keywords from the description with common naming affixes.
/// Successive calls rotate through different pairings, so later rounds
/// surface fresh ideas the way repeated calls to a real generator do,
/// which is what exercises the controller's cross-round deduplication.
pub struct BlendGenerator {
    round: AtomicUsize,
}

const PREFIXES: &[&str] = &["get", "try", "my", "go", "use"];
const SUFFIXES: &[&str] = &[
    "ly", "hub", "hq", "app", "base", "kit", "spot", "nest", "lab", "forge",
];
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "for", "and", "with", "that", "this", "app", "application", "of", "to",
    "in", "on", "my", "our", "your",
];

impl BlendGenerator {
    pub fn new() -> Self {
        Self {
            round: AtomicUsize::new(0),
        }
    }

    /// Extracts up to four usable keywords from the description.
    fn keywords(description: &str) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        description
            .split(|c: char| !c.is_ascii_alphanumeric())
            .map(|w| w.to_lowercase())
            .filter(|w| w.len() >= 3 && !STOPWORDS.contains(&w.as_str()))
            .filter(|w| seen.insert(w.clone()))
            .take(4)
            .collect()
    }
}

impl Default for BlendGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameGenerator for BlendGenerator {
    async fn generate(&self, description: &str) -> Result<Vec<String>, GenerationError> {
        let words = Self::keywords(description);
        if words.is_empty() {
            return Err(GenerationError::EmptyResult);
        }
        let round = self.round.fetch_add(1, Ordering::Relaxed);

        let mut suggestions = Vec::new();
        // Adjacent keyword compounds first; they read most like product names
        for pair in words.windows(2) {
            suggestions.push(format!("{}{}", pair[0], pair[1]));
        }
        for (i, word) in words.iter().enumerate() {
            let suffix = SUFFIXES[(round + i) % SUFFIXES.len()];
            suggestions.push(format!("{word}{suffix}"));
            let prefix = PREFIXES[(round + i) % PREFIXES.len()];
            suggestions.push(format!("{prefix}{word}"));
        }
        suggestions.truncate(6);
        Ok(suggestions)
    }
}
