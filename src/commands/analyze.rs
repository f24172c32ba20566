//! Fragment analysis command
//!
//! Reports how many index entries a fragment has and which difficulty tiers could
//! offer it as a challenge.

use crate::core::{Fragment, FragmentError};
use crate::game::Difficulty;
use crate::index::FragmentIndex;

/// How many sample words the report carries
pub const SAMPLE_SIZE: usize = 10;

/// Result of analyzing one fragment
#[derive(Debug, Clone)]
pub struct FragmentAnalysis {
    pub fragment: Fragment,
    /// Index entries, duplicates included; this is what thresholds compare against
    pub candidate_count: usize,
    pub distinct_words: usize,
    /// Each tier with whether the fragment meets its threshold
    pub tiers: Vec<(Difficulty, bool)>,
    /// Shortest accepted words first
    pub sample_words: Vec<String>,
    pub lexicon_size: usize,
}

impl FragmentAnalysis {
    /// Tiers that could pick this fragment
    pub fn eligible_tiers(&self) -> impl Iterator<Item = Difficulty> + '_ {
        self.tiers
            .iter()
            .filter(|(_, eligible)| *eligible)
            .map(|(difficulty, _)| *difficulty)
    }
}

/// Analyze a fragment against the index
///
/// # Errors
///
/// Returns an error if `text` is not a 2 or 3 character fragment.
pub fn analyze_fragment(index: &FragmentIndex, text: &str) -> Result<FragmentAnalysis, FragmentError> {
    let fragment = Fragment::new(text)?;
    let candidate_count = index.candidate_count(&fragment);
    let accepted = index.accepted_words(&fragment);

    let tiers = Difficulty::ALL
        .iter()
        .map(|&difficulty| (difficulty, candidate_count >= difficulty.min_candidate_words()))
        .collect();

    let mut sample_words: Vec<String> = accepted.iter().map(|word| word.text().to_string()).collect();
    sample_words.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    sample_words.truncate(SAMPLE_SIZE);

    Ok(FragmentAnalysis {
        fragment,
        candidate_count,
        distinct_words: accepted.len(),
        tiers,
        sample_words,
        lexicon_size: index.word_count(),
    })
}
