//! Fragment coverage report
//!
//! Shows how much of the index each difficulty tier can draw from.

use crate::core::Fragment;
use crate::game::{Difficulty, DifficultyProfile};
use crate::index::{FragmentIndex, IndexStats};

/// Number of most common fragments listed in the report
pub const TOP_FRAGMENTS: usize = 10;

/// Eligible fragment count for one profile
#[derive(Debug, Clone)]
pub struct TierCoverage {
    pub profile: DifficultyProfile,
    pub eligible: usize,
}

impl TierCoverage {
    /// Share of all fragments the tier can pick, in [0, 1]
    #[must_use]
    pub fn share(&self, total_fragments: usize) -> f64 {
        if total_fragments == 0 {
            0.0
        } else {
            self.eligible as f64 / total_fragments as f64
        }
    }

    /// A tier with nothing eligible can never offer a fragment
    #[must_use]
    pub const fn is_feasible(&self) -> bool {
        self.eligible > 0
    }
}

#[derive(Debug, Clone)]
pub struct FragmentReport {
    pub stats: IndexStats,
    pub tiers: Vec<TierCoverage>,
    /// Fragments with the most entries, largest first
    pub top_fragments: Vec<(Fragment, usize)>,
}

/// Build the coverage report for the built-in tiers plus an optional custom profile
#[must_use]
pub fn fragment_report(index: &FragmentIndex, custom: Option<&DifficultyProfile>) -> FragmentReport {
    let tiers = Difficulty::ALL
        .iter()
        .map(|difficulty| difficulty.profile())
        .chain(custom.cloned())
        .map(|profile| TierCoverage {
            eligible: index.eligible_fragments(profile.min_candidate_words()).len(),
            profile,
        })
        .collect();

    let mut top_fragments: Vec<(Fragment, usize)> = index
        .eligible_fragments(1)
        .into_iter()
        .map(|fragment| (fragment, index.candidate_count(&fragment)))
        .collect();
    top_fragments.sort_by(|(a, a_count), (b, b_count)| b_count.cmp(a_count).then_with(|| a.cmp(b)));
    top_fragments.truncate(TOP_FRAGMENTS);

    FragmentReport {
        stats: index.stats(),
        tiers,
        top_fragments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    fn example_index() -> FragmentIndex {
        FragmentIndex::build(&Lexicon::from_entries(["cat", "catalog", "scatter"]))
    }

    #[test]
    fn small_lexicon_only_feeds_expert() {
        let report = fragment_report(&example_index(), None);

        assert_eq!(report.tiers.len(), 4);
        let feasible: Vec<&str> = report
            .tiers
            .iter()
            .filter(|tier| tier.is_feasible())
            .map(|tier| tier.profile.name())
            .collect();
        assert_eq!(feasible, vec!["Expert"]);

        let expert = &report.tiers[3];
        assert_eq!(expert.eligible, report.stats.fragments);
        assert!((expert.share(report.stats.fragments) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn custom_profile_is_appended() {
        let custom = DifficultyProfile::new("Custom", 3, 4.0).unwrap();
        let report = fragment_report(&example_index(), Some(&custom));

        assert_eq!(report.tiers.len(), 5);
        assert_eq!(report.tiers[4].profile.name(), "Custom");
        assert_eq!(report.tiers[4].eligible, 3);
    }

    #[test]
    fn top_fragments_sorted_by_count() {
        let report = fragment_report(&example_index(), None);

        assert_eq!(report.top_fragments.len(), TOP_FRAGMENTS);
        let leaders: Vec<String> = report.top_fragments[..3]
            .iter()
            .map(|(fragment, _)| fragment.to_string())
            .collect();
        assert_eq!(leaders, vec!["AT", "CA", "CAT"]);
        assert!(
            report
                .top_fragments
                .windows(2)
                .all(|pair| pair[0].1 >= pair[1].1)
        );
    }

    #[test]
    fn empty_index_share_is_zero() {
        let report = fragment_report(&FragmentIndex::build(&Lexicon::default()), None);
        assert_eq!(report.stats.fragments, 0);
        assert!(report.tiers[0].share(0).abs() < f64::EPSILON);
        assert!(report.top_fragments.is_empty());
    }
}
