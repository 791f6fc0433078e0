//! Line validity checks.
//!
//! A line is accepted by the first applicable rule:
//! duplicate suppression when enabled, otherwise a user validator when
//! configured, otherwise unconditionally.

use std::fmt;

use ahash::{AHashSet, RandomState};

/// Trait for user-supplied line validators.
pub trait LineValidator: Send + Sync {
    /// Return `true` to keep the raw line.
    fn is_valid(&self, line: &str) -> bool;
}

/// A validator backed by a plain function or closure.
pub struct FnValidator<F> {
    func: F,
}

impl<F> FnValidator<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    /// Wrap a predicate as a validator.
    pub fn new(func: F) -> Self {
        FnValidator { func }
    }
}

impl<F> LineValidator for FnValidator<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid(&self, line: &str) -> bool {
        (self.func)(line)
    }
}

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}

/// Per-traversal set of line hashes.
///
/// Only 64-bit hashes are stored, so memory stays proportional to the number
/// of distinct lines rather than their length. Two distinct lines with equal
/// hashes are treated as duplicates.
#[derive(Debug, Clone)]
pub struct LineDeduplicator {
    state: RandomState,
    seen: AHashSet<u64>,
}

impl LineDeduplicator {
    /// Create an empty deduplicator.
    pub fn new() -> Self {
        LineDeduplicator {
            state: RandomState::new(),
            seen: AHashSet::new(),
        }
    }

    /// Record a line; returns `true` the first time it is seen.
    pub fn insert(&mut self, line: &str) -> bool {
        self.seen.insert(self.state.hash_one(line))
    }

    /// Check whether a line was already recorded.
    pub fn contains(&self, line: &str) -> bool {
        self.seen.contains(&self.state.hash_one(line))
    }

    /// Number of distinct lines recorded.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check if no line was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl Default for LineDeduplicator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduplicator() {
        let mut dedup = LineDeduplicator::new();

        assert!(dedup.insert("il gatto"));
        assert!(dedup.insert("il cane"));
        assert!(!dedup.insert("il gatto"));
        assert!(dedup.contains("il cane"));
        assert!(!dedup.contains("la casa"));
        assert_eq!(dedup.len(), 2);
    }

    #[test]
    fn test_deduplicator_is_exact() {
        let mut dedup = LineDeduplicator::new();

        assert!(dedup.insert("Il gatto"));
        assert!(dedup.insert("il gatto"));
        assert!(dedup.insert("il gatto "));
    }

    #[test]
    fn test_fn_validator() {
        let validator = FnValidator::new(|line: &str| line.split_whitespace().count() > 2);

        assert!(validator.is_valid("uno due tre"));
        assert!(!validator.is_valid("uno due"));
    }
}
