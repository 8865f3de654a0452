//! Guess and answer acquisition.
//!
//! Classification of a single line is pure; the `acquire_*`/`ask_*`
//! functions loop on the console until a line classifies as usable.

use crate::config::GameConfig;
use crate::console::Console;
use crate::display;
use crate::error::GameError;
use derive_more::Display;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Why a line was rejected as a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidGuess {
    /// Not a base-10 integer (includes empty and oversized text).
    #[display("not an integer")]
    NotAnInteger,
    /// An integer outside the configured range.
    #[display("{} is out of range", _0)]
    OutOfRange(i64),
}

/// Classification of one line typed at the guess prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessInput {
    /// An in-range guess.
    Valid(u32),
    /// Rejected text; the same attempt is prompted again.
    Invalid(InvalidGuess),
    /// An exit keyword.
    Abort,
}

/// Classifies one line typed at the guess prompt.
pub fn parse_guess(line: &str, config: &GameConfig) -> GuessInput {
    let line = line.trim();
    if config.is_exit(line) {
        return GuessInput::Abort;
    }

    let Ok(value) = line.parse::<i64>() else {
        return GuessInput::Invalid(InvalidGuess::NotAnInteger);
    };

    match u32::try_from(value) {
        Ok(guess) if config.in_range(value) => GuessInput::Valid(guess),
        _ => GuessInput::Invalid(InvalidGuess::OutOfRange(value)),
    }
}

/// Prompts until the player enters an in-range guess or an exit keyword.
///
/// Returns `None` when the player asked to leave; the farewell has already
/// been printed.
#[instrument(skip(console, config))]
pub fn acquire_guess<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &GameConfig,
    attempt: u32,
    max_attempts: u32,
) -> Result<Option<u32>, GameError> {
    loop {
        console.say(display::attempt_header(attempt, max_attempts))?;
        let line = console.prompt(display::guess_prompt(config))?;

        match parse_guess(&line, config) {
            GuessInput::Valid(guess) => return Ok(Some(guess)),
            GuessInput::Abort => {
                console.say(display::FAREWELL)?;
                return Ok(None);
            }
            GuessInput::Invalid(reason) => {
                debug!(%reason, "Rejected guess");
                match reason {
                    InvalidGuess::NotAnInteger => console.say(display::NOT_AN_INTEGER)?,
                    InvalidGuess::OutOfRange(_) => console.say(display::out_of_range(config))?,
                }
            }
        }
    }
}

/// Classifies a continuation answer: `Some(true)` to play again,
/// `Some(false)` to stop, `None` if unrecognized.
pub fn parse_answer(line: &str, config: &GameConfig) -> Option<bool> {
    if config.is_affirmative(line) {
        Some(true)
    } else if config.is_negative(line) {
        Some(false)
    } else {
        None
    }
}

/// Asks whether to play again, re-prompting until the answer is recognized.
#[instrument(skip_all)]
pub fn ask_play_again<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &GameConfig,
) -> Result<bool, GameError> {
    loop {
        let line = console.prompt(display::PLAY_AGAIN_PROMPT)?;
        if let Some(answer) = parse_answer(&line, config) {
            debug!(answer, "Continuation answered");
            return Ok(answer);
        }
        console.say(display::YES_OR_NO)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_non_integers() {
        let config = GameConfig::default();
        for line in ["", " ", "abc", "abc123", "12.5", "99999999999999999999999"] {
            assert_eq!(
                parse_guess(line, &config),
                GuessInput::Invalid(InvalidGuess::NotAnInteger),
                "line {:?}",
                line
            );
        }
    }

    #[test]
    fn test_parse_rejects_unicode_and_long_input() {
        let config = GameConfig::default();
        let long = "5".repeat(10_000);
        for line in ["🎯", "五十", "٥٠", "1_0", "５０", long.as_str()] {
            assert_eq!(
                parse_guess(line, &config),
                GuessInput::Invalid(InvalidGuess::NotAnInteger),
                "line {:?}",
                line
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        let config = GameConfig::default();
        assert_eq!(
            parse_guess("-50", &config),
            GuessInput::Invalid(InvalidGuess::OutOfRange(-50))
        );
        assert_eq!(
            parse_guess("101", &config),
            GuessInput::Invalid(InvalidGuess::OutOfRange(101))
        );
        assert_eq!(
            parse_guess("0", &config),
            GuessInput::Invalid(InvalidGuess::OutOfRange(0))
        );
    }

    #[test]
    fn test_parse_accepts_bounds_and_whitespace() {
        let config = GameConfig::default();
        assert_eq!(parse_guess("1", &config), GuessInput::Valid(1));
        assert_eq!(parse_guess("100", &config), GuessInput::Valid(100));
        assert_eq!(parse_guess("  42 ", &config), GuessInput::Valid(42));
    }

    #[test]
    fn test_parse_exit_keywords() {
        let config = GameConfig::default();
        for line in ["exit", "QUIT", "Вихід", " exit "] {
            assert_eq!(parse_guess(line, &config), GuessInput::Abort);
        }
    }

    #[test]
    fn test_parse_answer() {
        let config = GameConfig::default();
        assert_eq!(parse_answer("так", &config), Some(true));
        assert_eq!(parse_answer("Y", &config), Some(true));
        assert_eq!(parse_answer("1", &config), Some(true));
        assert_eq!(parse_answer("ні", &config), Some(false));
        assert_eq!(parse_answer(" no ", &config), Some(false));
        assert_eq!(parse_answer("maybe", &config), None);
    }
}
