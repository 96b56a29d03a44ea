//! Candidate name normalization.
//!
//! Raw suggestions arrive as free text from the name generator: mixed case,
//! stray punctuation, sometimes with a TLD already attached ("FitTrack.com").
//! This module turns them into valid, deduplicated candidate tokens.
//!
//! Normalization is pure and total: no I/O, no state, and a malformed
//! suggestion simply yields no candidate rather than an error.

use std::collections::HashSet;

use crate::config::MIN_CANDIDATE_LEN;

/// A normalized domain-name token (without TLD), eligible for an
/// availability check.
///
/// Invariants, upheld by construction in [`normalize_suggestions`]:
/// lowercase, charset `[a-z0-9-]`, no leading or trailing hyphen, at least
/// three characters. Candidates are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate(String);

impl Candidate {
    /// Returns the bare candidate token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the fully-qualified name for a TLD, e.g. `fittrack` + `com`
    /// → `fittrack.com`.
    pub fn fqdn(&self, tld: &str) -> String {
        format!("{}.{}", self.0, tld)
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes raw suggestions into an ordered, deduplicated candidate set.
///
/// Applied per suggestion, in order: lowercase; keep only the part before
/// the first `.` (strips an accidental TLD); drop every character outside
/// `[a-z0-9-]`; trim leading and trailing hyphen runs; discard what is left
/// if shorter than three characters. Duplicates collapse to the first
/// occurrence, so output order is first-seen order.
///
/// Dedup operates on the normalized form, which makes it case- and
/// TLD-insensitive: `FitTrack.com` and `fit_track!` are one candidate.
pub fn normalize_suggestions<I, S>(raw: I) -> Vec<Candidate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    for suggestion in raw {
        if let Some(token) = normalize_one(suggestion.as_ref()) {
            if seen.insert(token.clone()) {
                candidates.push(Candidate(token));
            }
        }
    }
    candidates
}

/// Normalizes a single raw suggestion, or `None` if nothing valid remains.
fn normalize_one(raw: &str) -> Option<String> {
    let lowered = raw.to_lowercase();
    // Anything after the first dot is an accidental TLD (or worse); the
    // target TLD is supplied separately at check time.
    let stem = lowered.split('.').next().unwrap_or("");
    let cleaned: String = stem
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();
    let trimmed = cleaned.trim_matches('-');
    if trimmed.len() < MIN_CANDIDATE_LEN {
        return None;
    }
    Some(trimmed.to_string())
}
