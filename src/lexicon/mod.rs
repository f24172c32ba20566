//! Lexicon: the validated set of playable words
//!
//! Ingestion trims and uppercases every line, drops entries shorter than two
//! characters and deduplicates. The resulting set is read-only and is the sole
//! input to fragment index construction.

mod embedded;
pub mod loader;

pub use embedded::{STARTER, STARTER_COUNT};
pub use loader::{DEFAULT_REMOTE_URL, LexiconError, LexiconSource};

use crate::core::Word;

/// An immutable, deduplicated, sorted set of words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<Word>,
}

impl Lexicon {
    /// Build a lexicon from raw newline-delimited text
    ///
    /// # Examples
    /// ```
    /// use word_bomb::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_text("cat\nCAT\n a \nscatter\n");
    /// assert_eq!(lexicon.len(), 2);
    /// assert_eq!(lexicon.words()[1].text(), "SCATTER");
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_entries(text.lines())
    }

    /// Build a lexicon from individual entries, skipping any that are too short
    #[must_use]
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<Word> = entries
            .into_iter()
            .filter_map(|entry| Word::new(entry).ok())
            .collect();

        words.sort_unstable();
        words.dedup();

        Self { words }
    }

    /// The bundled starter list
    #[must_use]
    pub fn starter() -> Self {
        Self::from_entries(STARTER)
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, sorted
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
