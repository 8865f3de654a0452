//! Session loop: rounds until the player declines to continue.

use crate::config::GameConfig;
use crate::console::Console;
use crate::display;
use crate::error::GameError;
use crate::game::play_round;
use crate::input::ask_play_again;
use crate::round::{RoundFinished, RoundOutcome};
use crate::secret::SecretSource;
use derive_getters::Getters;
use derive_new::new;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Tally of finished rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    /// Rounds played to completion.
    rounds_played: u32,
    /// Rounds won.
    won: u32,
    /// Rounds lost by exhausting attempts.
    exhausted: u32,
    /// Rounds left through an exit keyword.
    aborted: u32,
}

impl SessionSummary {
    fn record(&mut self, round: &RoundFinished) {
        self.rounds_played += 1;
        match round.outcome() {
            RoundOutcome::Won(_) => self.won += 1,
            RoundOutcome::Exhausted => self.exhausted += 1,
            RoundOutcome::Aborted => self.aborted += 1,
        }
    }
}

/// One play session over a console.
#[derive(Debug, new)]
pub struct Session<S> {
    config: GameConfig,
    secrets: S,
    #[new(default)]
    summary: SessionSummary,
}

impl<S: SecretSource> Session<S> {
    /// Returns the running tally.
    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Plays rounds until the player answers no.
    ///
    /// A round left through an exit keyword still asks whether to play
    /// again. Console failures end the session with an error.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<SessionSummary, GameError> {
        console.say(display::STARTING)?;

        loop {
            let round = play_round(console, &self.config, &mut self.secrets)?;
            self.summary.record(&round);

            if !ask_play_again(console, &self.config)? {
                console.say(format!("\n{}", display::FAREWELL))?;
                break;
            }
            console.say(display::new_round())?;
        }

        info!(
            rounds_played = self.summary.rounds_played,
            won = self.summary.won,
            exhausted = self.summary.exhausted,
            aborted = self.summary.aborted,
            "Session finished"
        );
        Ok(self.summary)
    }
}
