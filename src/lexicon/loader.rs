//! Lexicon loading utilities
//!
//! Loads a word list from the bundled starter list, a local file, or an HTTP(S)
//! download. Failures are reported as `LexiconError` so callers can keep the game
//! unavailable without crashing.

use super::Lexicon;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Word list fetched when no other source is given
pub const DEFAULT_REMOTE_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/master/words_alpha.txt";

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Reasons a lexicon could not be ingested
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to download word list from {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("word list from {0} contains no words of two or more letters")]
    Empty(String),
}

/// Where a lexicon comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    /// The list compiled into the binary
    Starter,
    /// An HTTP(S) URL
    Remote(String),
    /// A local newline-delimited file
    File(PathBuf),
}

impl LexiconSource {
    /// Interpret a `--wordlist` argument
    ///
    /// `starter` selects the bundled list, `remote` the default download, anything
    /// starting with `http://` or `https://` a custom download, and everything else
    /// a file path.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "starter" => Self::Starter,
            "remote" => Self::Remote(DEFAULT_REMOTE_URL.to_string()),
            url if url.starts_with("http://") || url.starts_with("https://") => {
                Self::Remote(url.to_string())
            }
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load and parse the lexicon from this source
    ///
    /// # Errors
    ///
    /// Returns `LexiconError` if the source cannot be read or downloaded, or if it
    /// yields no playable words.
    pub fn load(&self) -> Result<Lexicon, LexiconError> {
        let start = Instant::now();

        let lexicon = match self {
            Self::Starter => Lexicon::starter(),
            Self::Remote(url) => fetch_from_url(url)?,
            Self::File(path) => load_from_file(path)?,
        };

        if lexicon.is_empty() {
            return Err(LexiconError::Empty(self.to_string()));
        }

        info!(
            source = %self,
            words = lexicon.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "lexicon loaded"
        );
        Ok(lexicon)
    }
}

impl fmt::Display for LexiconSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Starter => write!(f, "starter list"),
            Self::Remote(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load a lexicon from a newline-delimited file
///
/// # Errors
///
/// Returns `LexiconError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use word_bomb::lexicon::loader::load_from_file;
///
/// let lexicon = load_from_file("data/starter.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon, LexiconError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading word list");

    let content = fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Lexicon::from_text(&content))
}

/// Download a lexicon over HTTP(S)
///
/// # Errors
///
/// Returns `LexiconError::Http` on connection failures, non-success status codes
/// or an unreadable body.
pub fn fetch_from_url(url: &str) -> Result<Lexicon, LexiconError> {
    debug!(url, "downloading word list");

    let http_error = |source| LexiconError::Http {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .build()
        .map_err(http_error)?;

    let text = client
        .get(url)
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(reqwest::blocking::Response::text)
        .map_err(http_error)?;

    Ok(Lexicon::from_text(&text))
}
