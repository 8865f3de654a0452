//! Guess the Number - a console guessing game
//!
//! The computer picks a secret in a configured range and the player has a
//! fixed number of attempts to find it, guided by "too low" / "too high"
//! hints.
//!
//! # Architecture
//!
//! - **Round**: typestate state machine (`RoundSetup` → `RoundInProgress` → `RoundFinished`)
//! - **Input**: classifies typed lines as guesses, exit keywords or rejects
//! - **Game**: drives one round over a [`Console`]
//! - **Session**: repeats rounds until the player declines
//!
//! # Example
//!
//! ```no_run
//! use guess_number::{Console, GameConfig, RandomSecrets, Session};
//!
//! # fn example() -> Result<(), guess_number::GameError> {
//! let mut console = Console::stdio();
//! let mut session = Session::new(GameConfig::default(), RandomSecrets::from_entropy());
//! let summary = session.run(&mut console)?;
//! println!("Played {} rounds", summary.rounds_played());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod display;
mod error;
mod game;
mod input;
mod round;
mod secret;
mod session;

// Crate-level exports - Configuration
pub use config::{
    AFFIRMATIVE_TOKENS, EXIT_TOKENS, GameConfig, MAX_ATTEMPTS, MAX_NUMBER, MIN_NUMBER,
    NEGATIVE_TOKENS,
};

// Crate-level exports - Errors
pub use error::{ConfigError, GameError};

// Crate-level exports - Console I/O
pub use console::Console;

// Crate-level exports - Input acquisition
pub use input::{GuessInput, InvalidGuess, acquire_guess, ask_play_again, parse_answer, parse_guess};

// Crate-level exports - Round state machine
pub use round::{
    CommendationTier, GuessResult, Hint, RoundFinished, RoundInProgress, RoundOutcome, RoundSetup,
};

// Crate-level exports - Round driver and session
pub use game::{drive, play_round};
pub use secret::{RandomSecrets, ScriptedSecrets, SecretSource};
pub use session::{Session, SessionSummary};
