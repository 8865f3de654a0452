//! Typestate round state machine.
//!
//! Each phase is its own type. A `RoundFinished` ALWAYS has an outcome, and
//! only a `RoundInProgress` can accept guesses. No I/O happens here.

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::secret::SecretSource;
use derive_more::Display;
use strum::{EnumIter, IntoStaticStr};
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Feedback and outcomes
// ─────────────────────────────────────────────────────────────

/// Directional feedback for a wrong guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Hint {
    /// The guess is below the secret.
    #[display("too low")]
    TooLow,
    /// The guess is above the secret.
    #[display("too high")]
    TooHigh,
}

impl Hint {
    /// Compares a guess with the secret. Equal numbers give no hint.
    pub fn compare(guess: u32, secret: u32) -> Option<Self> {
        match guess.cmp(&secret) {
            std::cmp::Ordering::Less => Some(Hint::TooLow),
            std::cmp::Ordering::Greater => Some(Hint::TooHigh),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Praise level for a win, by number of attempts used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum CommendationTier {
    /// Guessed on the first attempt.
    Incredible,
    /// Guessed on the second or third attempt.
    Excellent,
    /// Guessed on the fourth or fifth attempt.
    Good,
    /// Guessed on the sixth attempt or later.
    NotBad,
}

impl CommendationTier {
    /// Returns the tier earned by winning on `attempt`.
    pub fn for_attempts(attempt: u32) -> Self {
        match attempt {
            0 | 1 => Self::Incredible,
            2..=3 => Self::Excellent,
            4..=5 => Self::Good,
            _ => Self::NotBad,
        }
    }
}

/// Terminal outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum RoundOutcome {
    /// The most recent guess matched the secret.
    Won(CommendationTier),
    /// Every attempt was used without a match.
    Exhausted,
    /// The player typed an exit keyword.
    Aborted,
}

impl RoundOutcome {
    /// Returns true for a win.
    pub fn is_win(&self) -> bool {
        matches!(self, RoundOutcome::Won(_))
    }

    /// Returns the snake_case outcome name used in logs.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Round with its secret drawn and no guesses yet.
#[derive(Debug, Clone)]
pub struct RoundSetup {
    secret: u32,
    max_attempts: u32,
}

impl RoundSetup {
    /// Draws a fresh secret from `source` within the configured range.
    ///
    /// A source that strays outside the range is clamped back into it.
    #[instrument(skip_all)]
    pub fn draw(config: &GameConfig, source: &mut impl SecretSource) -> Self {
        let (min, max) = (*config.min_number(), *config.max_number());
        let drawn = source.draw(min, max);
        let secret = drawn.clamp(min, max);
        if secret != drawn {
            warn!(drawn, min, max, "Secret source left the range, clamped");
        }
        Self {
            secret,
            max_attempts: *config.max_attempts(),
        }
    }

    /// Creates a round with a known secret, using the config's attempt budget.
    ///
    /// Fails if `secret` lies outside the configured range.
    #[instrument(skip(config))]
    pub fn with_secret(config: &GameConfig, secret: u32) -> Result<Self, ConfigError> {
        if !config.in_range(i64::from(secret)) {
            return Err(ConfigError::new(format!(
                "secret {} is outside {}..={}",
                secret,
                config.min_number(),
                config.max_number()
            )));
        }
        Ok(Self {
            secret,
            max_attempts: *config.max_attempts(),
        })
    }

    /// Returns the secret.
    pub fn secret(&self) -> u32 {
        self.secret
    }

    /// Starts accepting guesses (consumes setup, returns in-progress).
    #[instrument(skip(self))]
    pub fn start(self) -> RoundInProgress {
        debug!(max_attempts = self.max_attempts, "Round started");
        RoundInProgress {
            secret: self.secret,
            attempts_used: 0,
            max_attempts: self.max_attempts,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Round accepting guesses.
///
/// Invariant: `attempts_used < max_attempts`, so at least one guess remains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundInProgress {
    secret: u32,
    attempts_used: u32,
    max_attempts: u32,
}

impl RoundInProgress {
    /// Counts one validated guess, consuming self and transitioning.
    #[instrument(skip(self), fields(attempt = self.attempts_used + 1))]
    pub fn guess(self, guess: u32) -> GuessResult {
        let attempts_used = self.attempts_used + 1;

        let Some(hint) = Hint::compare(guess, self.secret) else {
            let tier = CommendationTier::for_attempts(attempts_used);
            info!(attempts_used, ?tier, "Secret guessed");
            return GuessResult::Finished(self.finish(
                attempts_used,
                RoundOutcome::Won(tier),
                None,
            ));
        };

        if attempts_used >= self.max_attempts {
            info!(attempts_used, "Attempts exhausted");
            return GuessResult::Finished(self.finish(
                attempts_used,
                RoundOutcome::Exhausted,
                Some(hint),
            ));
        }

        let next = RoundInProgress {
            attempts_used,
            ..self
        };
        next.assert_invariants();
        debug!(%hint, remaining = next.remaining(), "Wrong guess");
        GuessResult::Wrong { round: next, hint }
    }

    /// Ends the round on the player's request.
    #[instrument(skip(self))]
    pub fn abort(self) -> RoundFinished {
        info!(attempts_used = self.attempts_used, "Round aborted");
        let attempts_used = self.attempts_used;
        self.finish(attempts_used, RoundOutcome::Aborted, None)
    }

    /// One-based index of the next attempt.
    pub fn attempt(&self) -> u32 {
        self.attempts_used + 1
    }

    /// Counted guesses so far.
    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    /// Attempt budget for the round.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Guesses still available.
    pub fn remaining(&self) -> u32 {
        self.max_attempts - self.attempts_used
    }

    fn finish(
        self,
        attempts_used: u32,
        outcome: RoundOutcome,
        last_hint: Option<Hint>,
    ) -> RoundFinished {
        let finished = RoundFinished {
            secret: self.secret,
            attempts_used,
            outcome,
            last_hint,
        };
        finished.assert_invariants(self.max_attempts);
        finished
    }

    fn assert_invariants(&self) {
        debug_assert!(
            self.attempts_used < self.max_attempts,
            "In-progress round has no attempts left"
        );
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Round over, outcome determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundFinished {
    secret: u32,
    attempts_used: u32,
    outcome: RoundOutcome,
    last_hint: Option<Hint>,
}

impl RoundFinished {
    /// Returns the secret, revealed.
    pub fn secret(&self) -> u32 {
        self.secret
    }

    /// Counted guesses, including the winning one.
    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    /// Returns the outcome. Never `None`.
    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// Feedback for the final guess when it missed.
    pub fn last_hint(&self) -> Option<Hint> {
        self.last_hint
    }

    fn assert_invariants(&self, max_attempts: u32) {
        debug_assert!(self.attempts_used <= max_attempts);
        debug_assert!(
            !matches!(self.outcome, RoundOutcome::Exhausted) || self.attempts_used == max_attempts,
            "Exhausted before the budget ran out"
        );
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of counting a guess.
#[derive(Debug)]
pub enum GuessResult {
    /// Wrong guess, attempts remain.
    Wrong {
        /// The round, one attempt further.
        round: RoundInProgress,
        /// Which way to go.
        hint: Hint,
    },
    /// Round over.
    Finished(RoundFinished),
}
