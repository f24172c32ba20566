//! Fragment index: inverted index from fragment to the words containing it
//!
//! Built once from a `Lexicon`, then read-only. Every word of length L contributes
//! one entry per window position: L-1 two-character entries and max(0, L-2)
//! three-character entries. A word therefore appears more than once in a list when
//! the fragment repeats inside it (BANANA under AN). List length, duplicates
//! included, is what the difficulty threshold is compared against.

mod builder;

pub use builder::WordId;

use crate::core::{Fragment, Word};
use crate::lexicon::Lexicon;
use builder::Entries;
use rustc_hash::FxHashSet;
use std::time::Instant;
use tracing::info;

/// Immutable fragment → words index
///
/// Safe to share between threads behind an `Arc`; no method mutates it.
#[derive(Debug, Clone)]
pub struct FragmentIndex {
    words: Vec<Word>,
    entries: Entries,
    total_entries: usize,
}

/// Size summary of an index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    pub words: usize,
    pub fragments: usize,
    pub entries: usize,
}

impl FragmentIndex {
    /// Build the index for a lexicon
    ///
    /// # Examples
    /// ```
    /// use word_bomb::core::Fragment;
    /// use word_bomb::index::FragmentIndex;
    /// use word_bomb::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_entries(["cat", "catalog", "scatter"]);
    /// let index = FragmentIndex::build(&lexicon);
    ///
    /// assert_eq!(index.candidate_count(&Fragment::new("cat").unwrap()), 3);
    /// ```
    #[must_use]
    pub fn build(lexicon: &Lexicon) -> Self {
        let start = Instant::now();

        let words = lexicon.words().to_vec();
        let entries = builder::build_entries(&words);
        let total_entries = entries.values().map(Vec::len).sum();

        let index = Self {
            words,
            entries,
            total_entries,
        };

        info!(
            words = index.words.len(),
            fragments = index.entries.len(),
            entries = index.total_entries,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "fragment index built"
        );
        index
    }

    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of distinct fragment keys
    #[inline]
    #[must_use]
    pub fn fragment_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all list lengths
    #[inline]
    #[must_use]
    pub const fn total_entries(&self) -> usize {
        self.total_entries
    }

    #[must_use]
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            words: self.word_count(),
            fragments: self.fragment_count(),
            entries: self.total_entries,
        }
    }

    /// Length of the fragment's list, duplicates included
    ///
    /// Returns 0 for fragments that never occur.
    #[must_use]
    pub fn candidate_count(&self, fragment: &Fragment) -> usize {
        self.entries.get(fragment).map_or(0, Vec::len)
    }

    /// Words listed under the fragment, one item per occurrence
    pub fn entry<'a>(&'a self, fragment: &Fragment) -> impl Iterator<Item = &'a Word> + use<'a> {
        self.entries
            .get(fragment)
            .into_iter()
            .flatten()
            .map(|&id| &self.words[id as usize])
    }

    /// Deduplicated set of words containing the fragment
    #[must_use]
    pub fn accepted_words(&self, fragment: &Fragment) -> FxHashSet<Word> {
        self.entry(fragment).cloned().collect()
    }

    /// Check whether the fragment is a key of the index
    #[must_use]
    pub fn contains_fragment(&self, fragment: &Fragment) -> bool {
        self.entries.contains_key(fragment)
    }

    /// Fragments whose list holds at least `min_candidates` entries, sorted
    ///
    /// Sorting makes the result independent of hash-map iteration order, so a
    /// seeded random pick over it is reproducible.
    #[must_use]
    pub fn eligible_fragments(&self, min_candidates: usize) -> Vec<Fragment> {
        let mut eligible: Vec<Fragment> = self
            .entries
            .iter()
            .filter(|(_, ids)| ids.len() >= min_candidates)
            .map(|(&fragment, _)| fragment)
            .collect();

        eligible.sort_unstable();
        eligible
    }

    /// All indexed words, sorted
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}
