//! Core domain types for the fragment game
//!
//! This module contains the fundamental value types shared by the lexicon, the
//! fragment index and the round state machine. All types here are pure and testable.

mod fragment;
mod word;

pub use fragment::{Fragment, FragmentError, MAX_FRAGMENT_LEN, MIN_FRAGMENT_LEN};
pub use word::{MIN_WORD_LEN, Word, WordError};
