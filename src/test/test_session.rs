use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{Difficulty, GameConfig};
use crate::core::Direction::*;
use crate::core::*;

fn session_with(config: GameConfig, start: Instant) -> GameSession {
    GameSession::with_rng(config, StdRng::seed_from_u64(7), start)
}

/// A width of 1 cannot be generated, so every reset lands on the built-in level.
fn fallback_config(difficulty: Difficulty) -> GameConfig {
    GameConfig {
        width: 1,
        difficulty,
        ..GameConfig::default()
    }
}

fn playing_session(config: GameConfig, start: Instant) -> GameSession {
    let mut session = session_with(config, start);
    assert_eq!(
        session.handle_input(InputEvent::Confirm, start),
        SessionEvent::ScreenChanged(GameState::Playing)
    );
    session
}

#[test]
fn starts_on_menu() {
    let session = session_with(GameConfig::default(), Instant::now());
    assert_eq!(session.state(), GameState::Menu);
}

#[test]
fn menu_help_and_back() {
    let now = Instant::now();
    let mut session = session_with(GameConfig::default(), now);

    assert_eq!(
        session.handle_input(InputEvent::Help, now),
        SessionEvent::ScreenChanged(GameState::Controls)
    );
    assert_eq!(session.handle_input(InputEvent::Confirm, now), SessionEvent::Ignored);
    assert_eq!(session.state(), GameState::Controls);
    let grid_before = session.puzzle().grid.clone();

    assert_eq!(
        session.handle_input(InputEvent::Cancel, now),
        SessionEvent::ScreenChanged(GameState::Menu)
    );
    assert_ne!(session.puzzle().grid, grid_before);
    assert!(session.puzzle().history.is_empty());
}

#[test]
fn moves_are_ignored_outside_play() {
    let now = Instant::now();
    let mut session = session_with(GameConfig::default(), now);
    let grid_before = session.puzzle().grid.clone();

    assert_eq!(session.handle_input(InputEvent::Move(Up), now), SessionEvent::Ignored);
    assert_eq!(session.handle_input(InputEvent::Undo, now), SessionEvent::Ignored);
    assert_eq!(session.handle_input(InputEvent::Cancel, now), SessionEvent::Ignored);

    assert_eq!(session.puzzle().grid, grid_before);
    assert_eq!(session.state(), GameState::Menu);
}

#[test]
fn quit_is_accepted_on_every_screen() {
    let now = Instant::now();
    let mut session = session_with(GameConfig::default(), now);
    assert_eq!(session.handle_input(InputEvent::Quit, now), SessionEvent::Quit);

    session.handle_input(InputEvent::Help, now);
    assert_eq!(session.handle_input(InputEvent::Quit, now), SessionEvent::Quit);

    let mut session = playing_session(GameConfig::default(), now);
    assert_eq!(session.handle_input(InputEvent::Quit, now), SessionEvent::Quit);
}

#[test]
fn generation_failure_falls_back_to_built_in_level() {
    let session = session_with(fallback_config(Difficulty::Easy), Instant::now());
    let puzzle = session.puzzle();

    assert_eq!(puzzle.player, Vec2::new(2, 5));
    assert_eq!(puzzle.total_goals, 2);
    assert_eq!(puzzle.grid.count(Tile::Box), 2);
}

#[test]
fn zero_goals_falls_back_to_built_in_level() {
    let config = GameConfig {
        goals: 0,
        ..GameConfig::default()
    };
    let session = session_with(config, Instant::now());

    assert_eq!(session.puzzle().total_goals, 2);
    assert!(!session.puzzle().is_won());
}

#[test]
fn solving_the_level_ends_the_round() {
    let now = Instant::now();
    let mut session = playing_session(fallback_config(Difficulty::Easy), now);

    assert_eq!(
        session.handle_input(InputEvent::Move(Left), now),
        SessionEvent::Moved(GameChangeType::PlayerMove)
    );
    assert_eq!(
        session.handle_input(InputEvent::Move(Left), now),
        SessionEvent::Moved(GameChangeType::PlayerAndBoxMove)
    );
    assert_eq!(
        session.handle_input(InputEvent::Move(Down), now),
        SessionEvent::RoundOver(RoundOutcome::Won)
    );
    assert!(session.puzzle().is_won());

    session.reset_level(now);
    assert!(!session.puzzle().is_won());
    assert!(session.puzzle().history.is_empty());
    assert_eq!(session.state(), GameState::Playing);
}

#[test]
fn rejected_moves_are_reported_without_change() {
    let now = Instant::now();
    let mut session = playing_session(fallback_config(Difficulty::Easy), now);

    session.handle_input(InputEvent::Move(Up), now);
    let grid_before = session.puzzle().grid.clone();

    assert_eq!(
        session.handle_input(InputEvent::Move(Up), now),
        SessionEvent::Rejected(MoveRejection::Wall)
    );
    assert_eq!(session.puzzle().grid, grid_before);
    assert_eq!(session.puzzle().player, Vec2::new(1, 5));
}

#[test]
fn undo_in_play() {
    let now = Instant::now();
    let mut session = playing_session(fallback_config(Difficulty::Easy), now);

    session.handle_input(InputEvent::Move(Left), now);
    assert_eq!(session.handle_input(InputEvent::Undo, now), SessionEvent::Undone);
    assert_eq!(session.puzzle().player, Vec2::new(2, 5));
    assert_eq!(session.handle_input(InputEvent::Undo, now), SessionEvent::Ignored);
}

#[test]
fn leaving_play_resets_the_level() {
    let now = Instant::now();
    let mut session = playing_session(fallback_config(Difficulty::Easy), now);
    session.handle_input(InputEvent::Move(Left), now);
    session.handle_input(InputEvent::Move(Left), now);

    assert_eq!(
        session.handle_input(InputEvent::Cancel, now),
        SessionEvent::ScreenChanged(GameState::Menu)
    );
    assert!(session.puzzle().history.is_empty());
    assert_eq!(session.puzzle().player, Vec2::new(2, 5));
    assert_eq!(session.puzzle().remaining_goals, 2);
}

#[test]
fn timer_only_runs_while_playing() {
    let start = Instant::now();
    let mut session = session_with(GameConfig::default(), start);

    assert_eq!(session.tick(start + Duration::from_secs(120)), None);

    let entered = start + Duration::from_secs(100);
    session.handle_input(InputEvent::Confirm, entered);

    assert_eq!(session.tick(entered + Duration::from_secs(59)), None);
    assert_eq!(session.remaining_secs(entered + Duration::from_secs(59)), 1);
    assert_eq!(
        session.tick(entered + Duration::from_secs(60)),
        Some(RoundOutcome::TimeUp)
    );
}

#[test]
fn hard_gives_fifteen_seconds() {
    let start = Instant::now();
    let config = GameConfig {
        difficulty: Difficulty::Hard,
        ..GameConfig::default()
    };
    let mut session = playing_session(config, start);

    assert_eq!(session.remaining_secs(start), 15);
    assert_eq!(session.tick(start + Duration::from_millis(14_900)), None);
    assert_eq!(
        session.tick(start + Duration::from_secs(15)),
        Some(RoundOutcome::TimeUp)
    );

    let restarted = start + Duration::from_secs(16);
    session.reset_level(restarted);
    assert_eq!(session.tick(restarted + Duration::from_secs(10)), None);
    assert_eq!(session.state(), GameState::Playing);
}

#[test]
fn seeded_sessions_deal_the_same_levels() {
    let now = Instant::now();
    let config = GameConfig {
        seed: Some(99),
        ..GameConfig::default()
    };
    let mut first = GameSession::new(config.clone(), now);
    let mut second = GameSession::new(config, now);

    assert_eq!(first.puzzle().grid, second.puzzle().grid);
    first.reset_level(now);
    second.reset_level(now);
    assert_eq!(first.puzzle().grid, second.puzzle().grid);
}
