//! Player-facing text.

use crate::config::GameConfig;
use crate::round::{CommendationTier, Hint, RoundFinished};

const RULE: &str = "==================================================";

/// Welcome banner and rules for a new round.
pub fn welcome(config: &GameConfig) -> String {
    [
        RULE.to_string(),
        "🎯 Welcome to 'Guess the Number'! 🎯".to_string(),
        RULE.to_string(),
        "Rules:".to_string(),
        format!(
            "• The computer has picked a number from {} to {}",
            config.min_number(),
            config.max_number()
        ),
        format!("• You have {} attempts to guess it", config.max_attempts()),
        "• After each attempt you get a hint".to_string(),
        "• Good luck! 🍀".to_string(),
        RULE.to_string(),
    ]
    .join("\n")
}

/// Header shown before each guess prompt.
pub fn attempt_header(attempt: u32, max_attempts: u32) -> String {
    format!("\n📝 Attempt {}/{}", attempt, max_attempts)
}

/// Prompt text for a guess.
pub fn guess_prompt(config: &GameConfig) -> String {
    format!(
        "Enter your number ({}-{}): ",
        config.min_number(),
        config.max_number()
    )
}

/// Shown when a guess is not an integer.
pub const NOT_AN_INTEGER: &str = "❌ Error: enter a whole number!";

/// Shown when a guess falls outside the range.
pub fn out_of_range(config: &GameConfig) -> String {
    format!(
        "❌ Error: the number must be between {} and {}!",
        config.min_number(),
        config.max_number()
    )
}

/// Shown when the player leaves, mid-round or at the end of the session.
pub const FAREWELL: &str = "👋 Thanks for playing! Goodbye!";

/// Directional feedback line.
pub fn hint(hint: Hint) -> &'static str {
    match hint {
        Hint::TooLow => "📈 Too low! Try a bigger number.",
        Hint::TooHigh => "📉 Too high! Try a smaller number.",
    }
}

/// Remaining attempts after a wrong guess.
pub fn remaining(remaining: u32) -> String {
    format!("💡 Attempts left: {}", remaining)
}

/// Praise line for a tier.
pub fn commendation(tier: CommendationTier) -> &'static str {
    match tier {
        CommendationTier::Incredible => "🌟 Incredible luck!",
        CommendationTier::Excellent => "🌟 Excellent result!",
        CommendationTier::Good => "👍 Good result!",
        CommendationTier::NotBad => "👌 Not bad!",
    }
}

/// Win banner.
pub fn win_banner(round: &RoundFinished, tier: CommendationTier) -> String {
    let border = "🎉".repeat(20);
    [
        format!("\n{}", border),
        "🏆 CONGRATULATIONS! YOU GUESSED IT! 🏆".to_string(),
        format!("🎯 The secret number: {}", round.secret()),
        format!("⭐ Attempts used: {}", round.attempts_used()),
        commendation(tier).to_string(),
        border,
    ]
    .join("\n")
}

/// Loss banner revealing the secret.
pub fn loss_banner(round: &RoundFinished) -> String {
    let border = "💔".repeat(20);
    [
        format!("\n{}", border),
        "😔 OUT OF ATTEMPTS!".to_string(),
        format!("🎯 The secret number was: {}", round.secret()),
        "🔄 Try again!".to_string(),
        border,
    ]
    .join("\n")
}

/// Printed once when the program starts.
pub const STARTING: &str = "🎮 Starting 'Guess the Number'...";

/// Continuation prompt.
pub const PLAY_AGAIN_PROMPT: &str = "\n🔄 Play again? (yes/no): ";

/// Shown for an unrecognized continuation answer.
pub const YES_OR_NO: &str = "❌ Please answer 'yes' or 'no'";

/// Separator before a new round.
pub fn new_round() -> String {
    let border = "🔄".repeat(30);
    format!("\n{}\nA new game begins!\n{}", border, border)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_welcome_mentions_rules() {
        let text = welcome(&GameConfig::default());
        assert!(text.contains("Rules:"));
        assert!(text.contains("from 1 to 100"));
        assert!(text.contains("You have 7 attempts"));
        assert!(text.contains("Good luck!"));
    }

    #[test]
    fn test_commendations_distinct() {
        let lines: HashSet<_> = CommendationTier::iter().map(commendation).collect();
        assert_eq!(lines.len(), 4);
    }
}
