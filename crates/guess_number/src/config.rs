//! Game configuration: range bounds, attempt budget and answer vocabularies.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Smallest number the computer may pick.
pub const MIN_NUMBER: u32 = 1;

/// Largest number the computer may pick.
pub const MAX_NUMBER: u32 = 100;

/// Number of counted guesses allowed per round.
pub const MAX_ATTEMPTS: u32 = 7;

/// Words that end the current round early.
pub const EXIT_TOKENS: &[&str] = &["exit", "quit", "вихід"];

/// Answers that start another round.
pub const AFFIRMATIVE_TOKENS: &[&str] = &["так", "yes", "y", "т", "1"];

/// Answers that end the session.
pub const NEGATIVE_TOKENS: &[&str] = &["ні", "no", "n", "н", "0"];

/// Immutable configuration shared by every round of a session.
///
/// Token lists are compared case-insensitively after trimming, so they are
/// stored lowercase. Any key missing from a TOML file falls back to its
/// default. Deserializing always validates.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(try_from = "ConfigFile")]
pub struct GameConfig {
    /// Smallest valid guess and secret.
    min_number: u32,

    /// Largest valid guess and secret.
    max_number: u32,

    /// Counted guesses per round.
    max_attempts: u32,

    /// Words that abort the round.
    exit_tokens: Vec<String>,

    /// Answers meaning "play again".
    affirmative_tokens: Vec<String>,

    /// Answers meaning "stop".
    negative_tokens: Vec<String>,
}

fn owned(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_number: MIN_NUMBER,
            max_number: MAX_NUMBER,
            max_attempts: MAX_ATTEMPTS,
            exit_tokens: owned(EXIT_TOKENS),
            affirmative_tokens: owned(AFFIRMATIVE_TOKENS),
            negative_tokens: owned(NEGATIVE_TOKENS),
        }
    }
}

/// Unvalidated TOML shape of [`GameConfig`].
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    min_number: u32,
    max_number: u32,
    max_attempts: u32,
    exit_tokens: Vec<String>,
    affirmative_tokens: Vec<String>,
    negative_tokens: Vec<String>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        let defaults = GameConfig::default();
        Self {
            min_number: defaults.min_number,
            max_number: defaults.max_number,
            max_attempts: defaults.max_attempts,
            exit_tokens: defaults.exit_tokens,
            affirmative_tokens: defaults.affirmative_tokens,
            negative_tokens: defaults.negative_tokens,
        }
    }
}

impl TryFrom<ConfigFile> for GameConfig {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        Self {
            min_number: file.min_number,
            max_number: file.max_number,
            max_attempts: file.max_attempts,
            exit_tokens: file.exit_tokens,
            affirmative_tokens: file.affirmative_tokens,
            negative_tokens: file.negative_tokens,
        }
        .normalized()
        .validate()
    }
}

impl GameConfig {
    /// Creates a validated configuration with the default vocabularies.
    #[instrument]
    pub fn new(min_number: u32, max_number: u32, max_attempts: u32) -> Result<Self, ConfigError> {
        let config = Self {
            min_number,
            max_number,
            max_attempts,
            ..Self::default()
        };
        config.normalized().validate()
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            min = config.min_number,
            max = config.max_number,
            attempts = config.max_attempts,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Returns true if `value` lies in the inclusive guessing range.
    pub fn in_range(&self, value: i64) -> bool {
        (i64::from(self.min_number)..=i64::from(self.max_number)).contains(&value)
    }

    /// Returns true if `word` is one of the exit keywords.
    pub fn is_exit(&self, word: &str) -> bool {
        contains_token(&self.exit_tokens, word)
    }

    /// Returns true if `word` is an affirmative answer.
    pub fn is_affirmative(&self, word: &str) -> bool {
        contains_token(&self.affirmative_tokens, word)
    }

    /// Returns true if `word` is a negative answer.
    pub fn is_negative(&self, word: &str) -> bool {
        contains_token(&self.negative_tokens, word)
    }

    fn normalized(mut self) -> Self {
        for tokens in [
            &mut self.exit_tokens,
            &mut self.affirmative_tokens,
            &mut self.negative_tokens,
        ] {
            for token in tokens.iter_mut() {
                *token = token.trim().to_lowercase();
            }
        }
        self
    }

    #[instrument(skip(self))]
    fn validate(self) -> Result<Self, ConfigError> {
        if self.min_number > self.max_number {
            return Err(ConfigError::new(format!(
                "min_number {} is greater than max_number {}",
                self.min_number, self.max_number
            )));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::new("max_attempts must be at least 1"));
        }
        for (name, tokens) in [
            ("exit_tokens", &self.exit_tokens),
            ("affirmative_tokens", &self.affirmative_tokens),
            ("negative_tokens", &self.negative_tokens),
        ] {
            if tokens.is_empty() || tokens.iter().any(|t| t.is_empty()) {
                return Err(ConfigError::new(format!("{} must hold non-empty words", name)));
            }
        }
        if let Some(token) = self
            .affirmative_tokens
            .iter()
            .find(|t| self.negative_tokens.contains(t))
        {
            return Err(ConfigError::new(format!(
                "'{}' is both an affirmative and a negative answer",
                token
            )));
        }
        if let Some(token) = self
            .exit_tokens
            .iter()
            .find(|t| t.parse::<i64>().is_ok_and(|n| self.in_range(n)))
        {
            return Err(ConfigError::new(format!(
                "exit token '{}' would shadow a valid guess",
                token
            )));
        }
        Ok(self)
    }
}

fn contains_token(tokens: &[String], word: &str) -> bool {
    let word = word.trim().to_lowercase();
    tokens.iter().any(|t| *t == word)
}
