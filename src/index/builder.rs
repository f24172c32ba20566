//! Parallel fragment index construction
//!
//! Each rayon worker folds a contiguous run of the lexicon into its own map, then
//! the partial maps are merged in lexicon order. The merged lists are identical to
//! those of a sequential scan.

use crate::core::{Fragment, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Word identifier: position in the sorted lexicon
pub type WordId = u32;

pub(super) type Entries = FxHashMap<Fragment, Vec<WordId>>;

/// Map every fragment window of every word to the words containing it
pub(super) fn build_entries(words: &[Word]) -> Entries {
    words
        .par_iter()
        .enumerate()
        .fold(Entries::default, |mut entries, (id, word)| {
            record_word(&mut entries, id as WordId, word);
            entries
        })
        .reduce(Entries::default, merge)
}

fn record_word(entries: &mut Entries, id: WordId, word: &Word) {
    for fragment in word.fragments() {
        entries.entry(fragment).or_default().push(id);
    }
}

// `right` always covers lexicon positions after `left`
fn merge(mut left: Entries, right: Entries) -> Entries {
    for (fragment, mut ids) in right {
        left.entry(fragment).or_default().append(&mut ids);
    }
    left
}

#[cfg(test)]
pub(super) fn build_entries_sequential(words: &[Word]) -> Entries {
    let mut entries = Entries::default();
    for (id, word) in words.iter().enumerate() {
        record_word(&mut entries, id as WordId, word);
    }
    entries
}
