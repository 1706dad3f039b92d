//! # Fuzzy Index
//!
//! A case-insensitive fuzzy matcher over one string key per dataset row.
//! Matching is the Skim V2 subsequence algorithm from `fuzzy-matcher`:
//! `"fra"` matches `"France"` and also `"South Africa"`.
//!
//! Results are row indices in ascending (dataset) order, never sorted by
//! score, so two result sets can be intersected without re-sorting.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

pub struct FuzzyIndex {
    keys: Vec<String>,
    matcher: SkimMatcherV2,
}

impl FuzzyIndex {
    /// Builds an index from the key of each row, in dataset order.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Returns the indices of every row whose key fuzzy-matches `pattern`.
    ///
    /// Callers handle the empty pattern themselves; Skim matches it against
    /// everything.
    pub fn search(&self, pattern: &str) -> Vec<usize> {
        self.keys
            .iter()
            .enumerate()
            .filter(|(_, key)| self.matcher.fuzzy_match(key, pattern).is_some())
            .map(|(index, _)| index)
            .collect()
    }
}
