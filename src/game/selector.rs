//! Challenge selection
//!
//! Two phases: the eligible fragment keys are collected once per selector, sorted,
//! then every turn picks one of them uniformly with the supplied random source.
//! Each eligible fragment is equally likely regardless of how many words it has.

use super::difficulty::DifficultyProfile;
use crate::core::{Fragment, Word};
use crate::index::FragmentIndex;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// The active turn's fragment and the words that answer it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    fragment: Fragment,
    accepted_words: FxHashSet<Word>,
}

impl Challenge {
    /// Challenge for a given fragment, or `None` if the index has no such key
    #[must_use]
    pub fn from_index(index: &FragmentIndex, fragment: Fragment) -> Option<Self> {
        if !index.contains_fragment(&fragment) {
            return None;
        }

        Some(Self {
            fragment,
            accepted_words: index.accepted_words(&fragment),
        })
    }

    #[inline]
    #[must_use]
    pub const fn fragment(&self) -> Fragment {
        self.fragment
    }

    /// Deduplicated accepted words
    #[inline]
    #[must_use]
    pub const fn accepted_words(&self) -> &FxHashSet<Word> {
        &self.accepted_words
    }

    /// Check a normalized (trimmed, uppercase) submission
    #[must_use]
    pub fn accepts(&self, word: &str) -> bool {
        self.accepted_words.contains(word)
    }
}

/// Picks fragments meeting a profile's feasibility threshold
#[derive(Debug, Clone)]
pub struct ChallengeSelector {
    index: Arc<FragmentIndex>,
    profile: DifficultyProfile,
    eligible: Vec<Fragment>,
}

impl ChallengeSelector {
    #[must_use]
    pub fn new(index: Arc<FragmentIndex>, profile: DifficultyProfile) -> Self {
        let eligible = index.eligible_fragments(profile.min_candidate_words());

        tracing::debug!(
            difficulty = profile.name(),
            min_candidates = profile.min_candidate_words(),
            eligible = eligible.len(),
            "challenge selector ready"
        );

        Self {
            index,
            profile,
            eligible,
        }
    }

    /// Pick a challenge, or `None` when no fragment meets the threshold
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Challenge> {
        let &fragment = self.eligible.choose(rng)?;
        Challenge::from_index(&self.index, fragment)
    }

    #[inline]
    #[must_use]
    pub const fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    #[inline]
    #[must_use]
    pub fn eligible_count(&self) -> usize {
        self.eligible.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Difficulty;
    use crate::lexicon::Lexicon;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn example_index() -> Arc<FragmentIndex> {
        Arc::new(FragmentIndex::build(&Lexicon::from_entries([
            "cat", "catalog", "scatter",
        ])))
    }

    fn profile(min: usize) -> DifficultyProfile {
        DifficultyProfile::new("Test", min, 5.0).unwrap()
    }

    #[test]
    fn strict_threshold_limits_choice() {
        let selector = ChallengeSelector::new(example_index(), profile(3));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let challenge = selector.select(&mut rng).unwrap();
            let text = challenge.fragment().to_string();
            assert!(["AT", "CA", "CAT"].contains(&text.as_str()), "picked {text}");
            assert_eq!(challenge.accepted_words().len(), 3);
        }
    }

    #[test]
    fn cat_challenge_accepts_all_three_words() {
        let index = example_index();
        let challenge = Challenge::from_index(&index, Fragment::new("cat").unwrap()).unwrap();

        assert!(challenge.accepts("CAT"));
        assert!(challenge.accepts("CATALOG"));
        assert!(challenge.accepts("SCATTER"));
        assert!(!challenge.accepts("DOG"));
    }

    #[test]
    fn unreachable_threshold_returns_none() {
        let selector = ChallengeSelector::new(example_index(), profile(4));
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(selector.eligible_count(), 0);
        assert!(selector.select(&mut rng).is_none());
        assert!(selector.select(&mut rng).is_none());
    }

    #[test]
    fn easy_tier_on_small_lexicon_is_infeasible() {
        let selector = ChallengeSelector::new(example_index(), Difficulty::Easy.profile());
        assert!(selector.select(&mut StdRng::seed_from_u64(0)).is_none());
    }

    #[test]
    fn min_one_makes_every_fragment_eligible() {
        let index = example_index();
        let selector = ChallengeSelector::new(Arc::clone(&index), profile(1));
        assert_eq!(selector.eligible_count(), index.fragment_count());
    }

    #[test]
    fn same_seed_same_sequence() {
        let selector = ChallengeSelector::new(
            Arc::new(FragmentIndex::build(&Lexicon::starter())),
            Difficulty::Hard.profile(),
        );

        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| selector.select(&mut rng).map(|c| c.fragment()))
                .collect::<Vec<_>>()
        };

        assert_eq!(picks(99), picks(99));
    }

    #[test]
    fn selection_is_uniform_over_fragments() {
        // BB and BBB reach the threshold through repeats inside a single word
        let index = Arc::new(FragmentIndex::build(&Lexicon::from_entries([
            "cat", "catalog", "scatter", "bbbbb",
        ])));
        let selector = ChallengeSelector::new(index, profile(3));
        let eligible = selector.eligible_count();
        let mut rng = StdRng::seed_from_u64(2024);

        let mut counts = rustc_hash::FxHashMap::default();
        let draws = 4000;
        for _ in 0..draws {
            let fragment = selector.select(&mut rng).unwrap().fragment();
            *counts.entry(fragment).or_insert(0usize) += 1;
        }

        assert_eq!(counts.len(), eligible);
        let expected = draws / eligible;
        for (&fragment, &count) in &counts {
            assert!(
                count.abs_diff(expected) < expected / 4,
                "{fragment} drawn {count} times, expected about {expected}"
            );
        }
    }
}
