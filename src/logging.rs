//! Logging initialization
//!
//! Structured logging via `tracing`, with verbosity taken from the `-v` flag and an
//! environment override via `WORD_BOMB_LOG`. Output goes to stderr, or to a file
//! when a full-screen front end owns the terminal.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity flag
pub const LOG_ENV: &str = "WORD_BOMB_LOG";

/// Map a verbosity level to a tracing directive
///
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"`
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)))
}

/// Install the global subscriber writing to stderr
///
/// Uses `try_init`, so repeated calls are harmless.
pub fn init_logging(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_target(verbosity >= 2)
        .with_writer(io::stderr)
        .try_init();
}

/// Install the global subscriber appending plain text to `path`
///
/// Unlike [`init_logging`], an already installed subscriber is an error.
///
/// # Errors
/// Returns an error if the log file cannot be opened, or one of kind
/// `AlreadyExists` if a global subscriber is already set.
pub fn init_file_logging(verbosity: u8, path: &Path) -> io::Result<()> {
    let file = File::options().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_ansi(false)
        .with_target(verbosity >= 2)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| io::Error::new(io::ErrorKind::AlreadyExists, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(verbosity_to_directive(0), "warn");
        assert_eq!(verbosity_to_directive(1), "info");
        assert_eq!(verbosity_to_directive(2), "debug");
        assert_eq!(verbosity_to_directive(3), "trace");
        assert_eq!(verbosity_to_directive(u8::MAX), "trace");
    }

    #[test]
    fn init_logging_is_repeatable() {
        init_logging(0);
        init_logging(3);
    }

    #[test]
    fn file_logging_after_existing_subscriber_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.log");

        init_logging(0);
        let err = init_file_logging(1, &path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert!(path.exists());
    }

    #[test]
    fn file_logging_reports_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("game.log");
        assert!(init_file_logging(1, &path).is_err());
    }
}
