//! Tests for a single round played over an in-memory console.

use guess_number::{
    CommendationTier, Console, GameConfig, GameError, RoundFinished, RoundOutcome, ScriptedSecrets,
    play_round,
};
use std::io::Cursor;

/// Plays one round with a fixed secret, feeding `lines` as input.
fn run_round(secret: u32, lines: &[&str]) -> (Result<RoundFinished, GameError>, String) {
    let input = lines.iter().map(|l| format!("{}\n", l)).collect::<String>();
    let mut console = Console::new(Cursor::new(input), Vec::new());
    let mut secrets = ScriptedSecrets::new([secret]);
    let result = play_round(&mut console, &GameConfig::default(), &mut secrets);
    let output = String::from_utf8(console.into_output()).expect("UTF-8 output");
    (result, output)
}

#[test]
fn test_welcome_printed() {
    let (result, output) = run_round(50, &["50"]);
    result.expect("Round should finish");
    assert!(output.contains("Welcome to 'Guess the Number'!"));
    assert!(output.contains("Rules:"));
    assert!(output.contains("You have 7 attempts"));
}

#[test]
fn test_win_first_try() {
    let (result, output) = run_round(50, &["50"]);
    let finished = result.expect("Round should finish");

    assert_eq!(
        finished.outcome(),
        RoundOutcome::Won(CommendationTier::Incredible)
    );
    assert!(output.contains("CONGRATULATIONS! YOU GUESSED IT!"));
    assert!(output.contains("Incredible luck!"));
    assert!(output.contains("Attempts used: 1"));
    assert!(output.contains("Attempt 1/7"));
    assert!(!output.contains("Too low!"));
    assert!(!output.contains("Too high!"));
}

#[test]
fn test_win_third_try() {
    let (result, output) = run_round(50, &["30", "70", "50"]);
    let finished = result.expect("Round should finish");

    assert_eq!(finished.attempts_used(), 3);
    assert!(output.contains("Excellent result!"));
    assert!(output.contains("Too low!"));
    assert!(output.contains("Too high!"));
    assert!(output.contains("Attempts left: 6"));
    assert!(output.contains("Attempts left: 5"));
    assert!(output.contains("Attempt 3/7"));
}

#[test]
fn test_full_winning_scenario() {
    let (result, output) = run_round(57, &["50", "25", "75", "60", "55", "58", "57"]);
    let finished = result.expect("Round should finish");

    assert_eq!(finished.attempts_used(), 7);
    assert_eq!(output.matches("Too low!").count(), 3);
    assert_eq!(output.matches("Too high!").count(), 3);
    assert!(output.contains("The secret number: 57"));
    assert!(output.contains("Attempts used: 7"));
    assert!(output.contains("Not bad!"));
    assert!(!output.contains("OUT OF ATTEMPTS"));
}

#[test]
fn test_losing_scenario() {
    let (result, output) = run_round(50, &["1", "2", "3", "4", "5", "6", "7"]);
    let finished = result.expect("Round should finish");

    assert_eq!(finished.outcome(), RoundOutcome::Exhausted);
    assert!(output.contains("OUT OF ATTEMPTS!"));
    assert!(output.contains("The secret number was: 50"));
    assert_eq!(output.matches("Too low!").count(), 7);
    assert!(output.contains("Attempt 7/7"));
    assert!(!output.contains("Attempts left: 0"));
    assert!(!output.contains("CONGRATULATIONS"));
}

#[test]
fn test_invalid_input_does_not_count() {
    let (result, output) = run_round(50, &["", " ", "abc123", "12.5", "-50", "150", "50"]);
    let finished = result.expect("Round should finish");

    assert_eq!(finished.attempts_used(), 1);
    assert_eq!(output.matches("Attempt 1/7").count(), 7);
    assert!(!output.contains("Attempt 2/7"));
    assert_eq!(output.matches("enter a whole number!").count(), 4);
    assert_eq!(
        output.matches("the number must be between 1 and 100!").count(),
        2
    );
    assert!(output.contains("Incredible luck!"));
}

#[test]
fn test_out_of_range_then_valid() {
    let (result, output) = run_round(50, &["0", "101", "1000", "50"]);
    result.expect("Round should finish");
    assert_eq!(
        output.matches("the number must be between 1 and 100!").count(),
        3
    );
}

#[test]
fn test_exit_ends_round_without_banner() {
    for keyword in ["exit", "quit", "вихід", "EXIT"] {
        let (result, output) = run_round(50, &["30", keyword, "50"]);
        let finished = result.expect("Round should finish");

        assert_eq!(finished.outcome(), RoundOutcome::Aborted);
        assert_eq!(finished.attempts_used(), 1);
        assert!(output.contains("Thanks for playing! Goodbye!"));
        assert!(!output.contains("CONGRATULATIONS"));
        assert!(!output.contains("OUT OF ATTEMPTS"));
        assert!(!output.contains("Attempt 3/7"));
    }
}

#[test]
fn test_exit_on_first_prompt() {
    let (result, output) = run_round(50, &["quit"]);
    let finished = result.expect("Round should finish");
    assert_eq!(finished.outcome(), RoundOutcome::Aborted);
    assert_eq!(output.matches("Attempt ").count(), 1);
}

#[test]
fn test_closed_input_propagates() {
    let (result, _) = run_round(50, &["10", "20"]);
    assert!(matches!(result, Err(GameError::InputClosed)));
}

#[test]
fn test_custom_range_messages() {
    let config = GameConfig::new(1, 10, 3).expect("Valid config");
    let mut console = Console::new(Cursor::new("11\n2\n3\n4\n"), Vec::new());
    let mut secrets = ScriptedSecrets::new([9]);

    let finished = play_round(&mut console, &config, &mut secrets).expect("Round should finish");
    let output = String::from_utf8(console.into_output()).expect("UTF-8 output");

    assert_eq!(finished.outcome(), RoundOutcome::Exhausted);
    assert!(output.contains("from 1 to 10"));
    assert!(output.contains("You have 3 attempts"));
    assert!(output.contains("Enter your number (1-10): "));
    assert!(output.contains("the number must be between 1 and 10!"));
    assert!(output.contains("Attempt 3/3"));
    assert!(output.contains("The secret number was: 9"));
}
