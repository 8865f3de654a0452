//! Error types for the game and its configuration.

use derive_more::{Display, Error, From};
use tracing::instrument;

/// Unrecoverable error raised while playing.
///
/// Invalid guesses and unrecognized answers are not errors: they are
/// reported to the player and re-prompted. Only a broken console ends up here.
#[derive(Debug, Display, Error, From)]
pub enum GameError {
    /// Reading from or writing to the console failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),

    /// The input stream reached end of file while a prompt was waiting.
    #[display("Input stream closed while waiting for an answer")]
    #[from(ignore)]
    InputClosed,
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
