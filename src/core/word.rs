//! Lexicon word representation
//!
//! A Word is a trimmed, uppercased dictionary entry of at least two characters.

use super::fragment::{Fragment, MAX_FRAGMENT_LEN, MIN_FRAGMENT_LEN};
use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

/// Shortest word accepted into a lexicon
pub const MIN_WORD_LEN: usize = 2;

/// A normalized dictionary word
///
/// Length is counted in characters, not bytes. Equality and hashing are those of
/// the underlying text, so a `HashSet<Word>` can be queried with a `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be at least {MIN_WORD_LEN} letters, got {0}")]
    TooShort(usize),
}

impl Word {
    /// Create a new Word from raw text
    ///
    /// Surrounding whitespace is trimmed and the text is uppercased. No other
    /// filtering is applied.
    ///
    /// # Errors
    /// Returns `WordError::TooShort` if fewer than two characters remain.
    ///
    /// # Examples
    /// ```
    /// use word_bomb::core::Word;
    ///
    /// let word = Word::new("  catalog ").unwrap();
    /// assert_eq!(word.text(), "CATALOG");
    ///
    /// assert!(Word::new("a").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_uppercase();

        let len = text.chars().count();
        if len < MIN_WORD_LEN {
            return Err(WordError::TooShort(len));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Every 3- and 2-character window of the word, one per offset
    ///
    /// A word of length L yields `max(0, L-2)` three-character fragments followed
    /// by `L-1` two-character fragments. Repeated substrings are yielded once per
    /// position.
    #[must_use]
    pub fn fragments(&self) -> Vec<Fragment> {
        let chars: Vec<char> = self.text.chars().collect();

        (MIN_FRAGMENT_LEN..=MAX_FRAGMENT_LEN)
            .rev()
            .flat_map(|width| chars.windows(width).map(Fragment::from_window))
            .collect()
    }

    /// Distinct letters of the word, in first-occurrence order
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<char> {
        let mut letters = Vec::with_capacity(self.text.len());
        for ch in self.text.chars() {
            if !letters.contains(&ch) {
                letters.push(ch);
            }
        }
        letters
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        let word = Word::new(" scatter\r").unwrap();
        assert_eq!(word.text(), "SCATTER");

        let word2 = Word::new("CaTaLoG").unwrap();
        assert_eq!(word2.text(), "CATALOG");
    }

    #[test]
    fn word_creation_rejects_short_entries() {
        assert!(matches!(Word::new(""), Err(WordError::TooShort(0))));
        assert!(matches!(Word::new("a"), Err(WordError::TooShort(1))));
        assert!(matches!(Word::new("  x  "), Err(WordError::TooShort(1))));
        assert!(Word::new("it").is_ok());
    }

    #[test]
    fn word_length_counts_characters() {
        let word = Word::new("café").unwrap();
        assert_eq!(word.char_len(), 4);
    }

    #[test]
    fn two_letter_word_has_single_fragment() {
        let word = Word::new("it").unwrap();
        let fragments = word.fragments();
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].to_string(), "IT");
    }

    #[test]
    fn fragments_cover_every_offset() {
        let word = Word::new("catalog").unwrap();
        let texts: Vec<String> = word.fragments().iter().map(ToString::to_string).collect();

        // 5 three-letter windows, then 6 two-letter windows
        assert_eq!(
            texts,
            vec![
                "CAT", "ATA", "TAL", "ALO", "LOG", "CA", "AT", "TA", "AL", "LO", "OG"
            ]
        );
    }

    #[test]
    fn fragments_keep_repeated_substrings() {
        let word = Word::new("banana").unwrap();
        let an_count = word
            .fragments()
            .iter()
            .filter(|f| f.to_string() == "AN")
            .count();
        assert_eq!(an_count, 2);
    }

    #[test]
    fn distinct_letters_deduplicates() {
        let word = Word::new("scatter").unwrap();
        assert_eq!(word.distinct_letters(), vec!['S', 'C', 'A', 'T', 'E', 'R']);
    }

    #[test]
    fn word_display() {
        let word = Word::new("cat").unwrap();
        assert_eq!(format!("{word}"), "CAT");
    }

    #[test]
    fn word_set_lookup_by_str() {
        let mut set = rustc_hash::FxHashSet::default();
        set.insert(Word::new("cat").unwrap());
        assert!(set.contains("CAT"));
        assert!(!set.contains("cat"));
    }
}
