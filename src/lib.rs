//! Word Bomb
//!
//! A timed word-fragment game: type a word containing the shown fragment before the
//! fuse burns down. Lives run out on timeouts; using every tracked letter earns one back.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use word_bomb::game::{Difficulty, GameConfig, GameSession};
//! use word_bomb::index::FragmentIndex;
//! use word_bomb::lexicon::Lexicon;
//!
//! // Build the index once and share it
//! let index = Arc::new(FragmentIndex::build(&Lexicon::starter()));
//!
//! let mut session = GameSession::seeded(index, GameConfig::default(), 7);
//! if let Some(challenge) = session.start_game(Difficulty::Hard.profile()) {
//!     println!("Fragment: {}", challenge.fragment());
//! }
//!
//! let result = session.submit_word("catalog").unwrap();
//! println!("Accepted: {}", result.is_accepted());
//! ```

// Core domain types
pub mod core;

// Word list ingestion
pub mod lexicon;

// Fragment index
pub mod index;

// Round state machine and sessions
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
