//! Round and replay tests for the standard and timed variants.

use std::time::Duration;

use pig_dice::core::{GameConfig, GameError, PlayerId, PlayerPair, WIN_SCORE};
use pig_dice::dice::ScriptedDie;
use pig_dice::events::GameEvent;
use pig_dice::players::Player;
use pig_dice::prompt::ScriptedPrompt;
use pig_dice::rules::{Game, ManualClock, RoundEnd, RoundPolicy};

fn humans() -> PlayerPair<Player> {
    PlayerPair::new(|p| Player::human(p.to_string()))
}

fn computers() -> PlayerPair<Player> {
    PlayerPair::new(|p| Player::computer(p.to_string()))
}

// =============================================================================
// Configuration Tests
// =============================================================================

/// Unknown tags are rejected before any round can start.
#[test]
fn test_invalid_tag_rejected_at_construction() {
    for config in [
        GameConfig::new("robot", "human"),
        GameConfig::new("computer", "robot"),
        GameConfig::new("Human", "computer"),
    ] {
        match Game::from_config(&config) {
            Err(GameError::InvalidConfiguration { .. }) => {}
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("{:?} should be rejected", config.players),
        }
    }
}

/// The same seed plays the same computer-vs-computer game.
#[test]
fn test_seeded_games_repeat() {
    let config = GameConfig::new("computer", "computer").with_seed(2024);
    let mut prompt = ScriptedPrompt::default();

    let mut events_a: Vec<GameEvent> = Vec::new();
    let result_a = Game::from_config(&config)
        .unwrap()
        .play_round(&mut prompt, &mut events_a)
        .unwrap();

    let mut events_b: Vec<GameEvent> = Vec::new();
    let result_b = Game::from_config(&config)
        .unwrap()
        .play_round(&mut prompt, &mut events_b)
        .unwrap();

    assert_eq!(result_a, result_b);
    assert_eq!(events_a, events_b);
}

// =============================================================================
// Standard Round Tests
// =============================================================================

/// A standard round ends the moment someone crosses 100.
#[test]
fn test_standard_round_ends_at_target() {
    let config = GameConfig::new("computer", "computer").with_seed(11);
    let mut game = Game::from_config(&config).unwrap();
    let mut prompt = ScriptedPrompt::default();
    let mut events: Vec<GameEvent> = Vec::new();

    let result = game.play_round(&mut prompt, &mut events).unwrap();

    assert_eq!(result.end, RoundEnd::ReachedTarget);
    assert!(result.score >= WIN_SCORE);
    assert!(result.scores[result.winner.other()] < WIN_SCORE);
    assert_eq!(
        events.last(),
        Some(&GameEvent::Won {
            name: result.name.clone(),
            score: result.score,
        })
    );
    // Exactly one announcement per round
    assert_eq!(events.iter().filter(|e| e.ends_round()).count(), 1);
}

/// Turns strictly alternate, starting with Player 1.
#[test]
fn test_turns_alternate() {
    let config = GameConfig::new("computer", "computer").with_seed(5);
    let mut game = Game::from_config(&config).unwrap();
    let mut prompt = ScriptedPrompt::default();
    let mut events: Vec<GameEvent> = Vec::new();

    let result = game.play_round(&mut prompt, &mut events).unwrap();

    let starts: Vec<&str> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::TurnStarted { name } => Some(name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(starts.len() as u32, result.turns);
    for (i, name) in starts.iter().enumerate() {
        let expected = if i % 2 == 0 { "Player 1" } else { "Player 2" };
        assert_eq!(*name, expected);
    }
}

/// Scores reset between rounds, but the players are the same players.
#[test]
fn test_replay_resets_scores() {
    let mut game = Game::new(computers(), ScriptedDie::new([6, 6, 6, 6, 6, 1]), RoundPolicy::Standard);
    let mut prompt = ScriptedPrompt::new([], [true, true, false]);
    let mut events: Vec<GameEvent> = Vec::new();

    let results = game.play(&mut prompt, &mut events).unwrap();

    assert_eq!(results.len(), 3);
    for result in &results {
        assert!(result.score >= WIN_SCORE);
        assert!(result.score < 2 * WIN_SCORE);
    }
    assert_eq!(game.players()[PlayerId::FIRST].name(), "Player 1");
    assert_eq!(events.iter().filter(|e| e.ends_round()).count(), 3);
}

// =============================================================================
// Timed Round Tests
// =============================================================================

/// Scores {40, 40} at the limit: Player 1 wins the tie.
#[test]
fn test_timed_tie_goes_to_first_player() {
    let clock = ManualClock::stepping(Duration::from_secs(25));
    let mut game = Game::new(humans(), ScriptedDie::new([4]), RoundPolicy::timed()).with_clock(&clock);
    // Ten fours each, then hold
    let turn: Vec<bool> = std::iter::repeat(true).take(9).chain([false]).collect();
    let mut prompt = ScriptedPrompt::new(turn.iter().chain(turn.iter()).copied(), []);
    let mut events: Vec<GameEvent> = Vec::new();

    let result = game.play_round(&mut prompt, &mut events).unwrap();

    assert_eq!(result.end, RoundEnd::TimeUp);
    assert_eq!(result.scores, PlayerPair::from_array([40, 40]));
    assert_eq!(result.winner, PlayerId::FIRST);
    assert_eq!(
        events.last().map(ToString::to_string).as_deref(),
        Some("Time's up! Player 1 wins with the highest score of 40!")
    );
}

/// At the limit the strictly higher score wins, even from the second seat.
#[test]
fn test_timed_leader_wins() {
    let clock = ManualClock::stepping(Duration::from_secs(25));
    let mut game = Game::new(humans(), ScriptedDie::new([3]), RoundPolicy::timed()).with_clock(&clock);
    // Player 1 holds at 3, Player 2 holds at 6
    let mut prompt = ScriptedPrompt::new([false, true, false], []);
    let mut events: Vec<GameEvent> = Vec::new();

    let result = game.play_round(&mut prompt, &mut events).unwrap();

    assert_eq!(result.end, RoundEnd::TimeUp);
    assert_eq!(result.winner, PlayerId::SECOND);
    assert_eq!(result.score, 6);
}

/// The limit is checked between turns only; a turn in progress completes.
#[test]
fn test_timed_turn_in_progress_completes() {
    let clock = ManualClock::stepping(Duration::from_secs(50));
    let mut game = Game::new(computers(), ScriptedDie::new([6]), RoundPolicy::timed()).with_clock(&clock);
    let mut prompt = ScriptedPrompt::default();
    let mut events: Vec<GameEvent> = Vec::new();

    let result = game.play_round(&mut prompt, &mut events).unwrap();

    // One full turn of five sixes, then time is up
    assert_eq!(result.turns, 1);
    assert_eq!(result.scores, PlayerPair::from_array([30, 0]));
    assert_eq!(result.winner, PlayerId::FIRST);
}

/// A timed round still ends early when someone reaches 100.
#[test]
fn test_timed_round_can_reach_target() {
    let clock = ManualClock::new();
    let mut game = Game::new(computers(), ScriptedDie::new([6]), RoundPolicy::timed()).with_clock(&clock);
    let mut prompt = ScriptedPrompt::default();
    let mut events: Vec<GameEvent> = Vec::new();

    let result = game.play_round(&mut prompt, &mut events).unwrap();

    assert_eq!(result.end, RoundEnd::ReachedTarget);
    assert_eq!(result.winner, PlayerId::FIRST);
    assert_eq!(result.score, 102);
}

/// Each round gets its own start time.
#[test]
fn test_timed_limit_restarts_each_round() {
    let clock = ManualClock::stepping(Duration::from_secs(50));
    let mut game = Game::new(computers(), ScriptedDie::new([6]), RoundPolicy::timed()).with_clock(&clock);
    let mut prompt = ScriptedPrompt::new([], [true, false]);
    let mut events: Vec<GameEvent> = Vec::new();

    let results = game.play(&mut prompt, &mut events).unwrap();

    assert_eq!(results.len(), 2);
    for result in &results {
        assert_eq!(result.end, RoundEnd::TimeUp);
        assert_eq!(result.turns, 1);
    }
}

/// Time already past the limit: no turns, and the 0-0 tie goes to Player 1.
#[test]
fn test_timed_round_with_no_time() {
    let clock = ManualClock::stepping(Duration::from_secs(60));
    let mut game = Game::new(computers(), ScriptedDie::new([6]), RoundPolicy::timed()).with_clock(&clock);
    let mut prompt = ScriptedPrompt::default();
    let mut events: Vec<GameEvent> = Vec::new();

    let result = game.play_round(&mut prompt, &mut events).unwrap();

    assert_eq!(result.turns, 0);
    assert_eq!(result.winner, PlayerId::FIRST);
    assert_eq!(result.score, 0);
    assert_eq!(events, vec![GameEvent::TimeUp { name: "Player 1".into(), score: 0 }]);
}

// =============================================================================
// Input Fault Tests
// =============================================================================

/// A prompt fault mid-round aborts the whole game.
#[test]
fn test_prompt_fault_propagates_from_round() {
    let mut game = Game::new(humans(), ScriptedDie::new([2]), RoundPolicy::Standard);
    let mut prompt = ScriptedPrompt::new([true, false], [true]);
    let mut events: Vec<GameEvent> = Vec::new();

    let err = game.play(&mut prompt, &mut events).unwrap_err();

    assert!(matches!(err, GameError::InputClosed("roll decision")));
    assert_eq!(game.players()[PlayerId::FIRST].total_score(), 4);
}
