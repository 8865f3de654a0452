//! Sources of secret numbers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Picks the secret for a new round.
pub trait SecretSource {
    /// Draws a number from the inclusive range `min..=max`.
    fn draw(&mut self, min: u32, max: u32) -> u32;
}

/// Uniform secrets from a general-purpose PRNG.
#[derive(Debug, Clone)]
pub struct RandomSecrets<R = StdRng> {
    rng: R,
}

impl RandomSecrets<StdRng> {
    /// Seeds from operating system entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeds deterministically, for reproducible sessions.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomSecrets<R> {
    /// Wraps an existing generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SecretSource for RandomSecrets<R> {
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        let secret = self.rng.random_range(min..=max);
        debug!(min, max, "Secret drawn");
        secret
    }
}

/// Replays a fixed list of secrets, clamped into the requested range.
///
/// Once the list runs out, the last secret repeats. An empty list always
/// yields `min`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSecrets {
    queue: VecDeque<u32>,
    last: Option<u32>,
}

impl ScriptedSecrets {
    /// Creates a source replaying `secrets` in order.
    pub fn new(secrets: impl IntoIterator<Item = u32>) -> Self {
        Self {
            queue: secrets.into_iter().collect(),
            last: None,
        }
    }
}

impl SecretSource for ScriptedSecrets {
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        if let Some(next) = self.queue.pop_front() {
            self.last = Some(next);
        }
        self.last.unwrap_or(min).clamp(min, max)
    }
}
