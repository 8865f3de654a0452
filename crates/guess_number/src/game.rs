//! Console driver for a single round.

use crate::config::GameConfig;
use crate::console::Console;
use crate::display;
use crate::error::GameError;
use crate::input::acquire_guess;
use crate::round::{GuessResult, RoundFinished, RoundOutcome, RoundSetup};
use crate::secret::SecretSource;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Plays one round to completion: draw, welcome, guesses, banner.
///
/// Invalid lines never count as attempts. An exit keyword ends the round
/// without a banner. Console failures propagate unchanged.
#[instrument(skip_all)]
pub fn play_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &GameConfig,
    secrets: &mut impl SecretSource,
) -> Result<RoundFinished, GameError> {
    let setup = RoundSetup::draw(config, secrets);
    console.say(display::welcome(config))?;
    let finished = drive(console, config, setup)?;

    info!(
        outcome = finished.outcome().name(),
        attempts_used = finished.attempts_used(),
        "Round finished"
    );
    Ok(finished)
}

/// Runs the guess loop for an already drawn round.
#[instrument(skip_all)]
pub fn drive<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &GameConfig,
    setup: RoundSetup,
) -> Result<RoundFinished, GameError> {
    let mut round = setup.start();

    loop {
        let Some(guess) = acquire_guess(console, config, round.attempt(), round.max_attempts())?
        else {
            return Ok(round.abort());
        };

        match round.guess(guess) {
            GuessResult::Wrong { round: next, hint } => {
                console.say(display::hint(hint))?;
                console.say(display::remaining(next.remaining()))?;
                round = next;
            }
            GuessResult::Finished(finished) => {
                match finished.outcome() {
                    RoundOutcome::Won(tier) => {
                        console.say(display::win_banner(&finished, tier))?;
                    }
                    RoundOutcome::Exhausted => {
                        if let Some(hint) = finished.last_hint() {
                            console.say(display::hint(hint))?;
                        }
                        console.say(display::loss_banner(&finished))?;
                    }
                    RoundOutcome::Aborted => {}
                }
                return Ok(finished);
            }
        }
    }
}
