//! Challenge fragment representation
//!
//! A Fragment is a 2- or 3-character uppercase substring. It is stored inline so it
//! can be used as a cheap `Copy` key in the fragment index.

use std::fmt;
use thiserror::Error;

/// Shortest fragment length
pub const MIN_FRAGMENT_LEN: usize = 2;

/// Longest fragment length
pub const MAX_FRAGMENT_LEN: usize = 3;

/// A 2- or 3-character challenge fragment
///
/// Unused trailing slots hold `'\0'`, which sorts before every letter, so the
/// derived ordering is lexicographic (`"AB" < "ABA" < "AC"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fragment {
    chars: [char; MAX_FRAGMENT_LEN],
    len: u8,
}

/// Error type for invalid fragments
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    #[error("Fragment must be {MIN_FRAGMENT_LEN} or {MAX_FRAGMENT_LEN} characters, got {0}")]
    InvalidLength(usize),
}

impl Fragment {
    /// Parse a fragment from user text
    ///
    /// # Errors
    /// Returns `FragmentError::InvalidLength` unless the trimmed text has 2 or 3
    /// characters.
    ///
    /// # Examples
    /// ```
    /// use word_bomb::core::Fragment;
    ///
    /// let fragment = Fragment::new("cat").unwrap();
    /// assert_eq!(fragment.to_string(), "CAT");
    /// assert!(Fragment::new("cats").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, FragmentError> {
        let chars: Vec<char> = text.trim().to_uppercase().chars().collect();

        if !(MIN_FRAGMENT_LEN..=MAX_FRAGMENT_LEN).contains(&chars.len()) {
            return Err(FragmentError::InvalidLength(chars.len()));
        }

        Ok(Self::from_window(&chars))
    }

    /// Build a fragment from an already-normalized window of a word
    ///
    /// The window must hold 2 or 3 characters.
    pub(crate) fn from_window(window: &[char]) -> Self {
        debug_assert!((MIN_FRAGMENT_LEN..=MAX_FRAGMENT_LEN).contains(&window.len()));

        let mut chars = ['\0'; MAX_FRAGMENT_LEN];
        chars[..window.len()].copy_from_slice(window);

        Self {
            chars,
            len: window.len() as u8,
        }
    }

    /// Number of characters (2 or 3)
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Never empty by construction
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// The fragment's characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars[..self.len()]
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars() {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_creation_uppercases() {
        let fragment = Fragment::new("ca").unwrap();
        assert_eq!(fragment.to_string(), "CA");
        assert_eq!(fragment.len(), 2);
    }

    #[test]
    fn fragment_creation_invalid_length() {
        assert!(matches!(
            Fragment::new("c"),
            Err(FragmentError::InvalidLength(1))
        ));
        assert!(matches!(
            Fragment::new("cats"),
            Err(FragmentError::InvalidLength(4))
        ));
        assert!(matches!(
            Fragment::new("   "),
            Err(FragmentError::InvalidLength(0))
        ));
    }

    #[test]
    fn fragment_equality_ignores_input_case() {
        assert_eq!(Fragment::new("cat").unwrap(), Fragment::new("CAT").unwrap());
        assert_ne!(Fragment::new("ca").unwrap(), Fragment::new("cat").unwrap());
    }

    #[test]
    fn fragment_ordering_is_lexicographic() {
        let mut fragments = vec![
            Fragment::new("AC").unwrap(),
            Fragment::new("ABA").unwrap(),
            Fragment::new("AB").unwrap(),
        ];
        fragments.sort();

        let texts: Vec<String> = fragments.iter().map(ToString::to_string).collect();
        assert_eq!(texts, vec!["AB", "ABA", "AC"]);
    }

    #[test]
    fn fragment_chars_excludes_padding() {
        let fragment = Fragment::new("og").unwrap();
        assert_eq!(fragment.chars(), &['O', 'G']);
    }
}
