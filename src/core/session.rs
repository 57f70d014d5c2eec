use std::time::Instant;

use log::{debug, error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::core::generator::generate;
use crate::core::level_text::parse_level;
use crate::core::timer::LevelTimer;
use crate::core::update::{step, undo};
use crate::core::{Direction, GameChangeType, GameUpdate, MoveRejection, Puzzle};

/// Played when the configured size and goal count cannot produce a level.
const FALLBACK_LEVEL: &str = r#"
########
#      #
# .$ @ #
#  $   #
#  .   #
########
"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameState {
    Menu,
    Controls,
    Playing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Confirm,
    Help,
    Cancel,
    Move(Direction),
    Undo,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    Won,
    TimeUp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionEvent {
    Ignored,
    ScreenChanged(GameState),
    Moved(GameChangeType),
    Rejected(MoveRejection),
    Undone,
    RoundOver(RoundOutcome),
    Quit,
}

/// Everything one running game owns: the screen being shown, the level, and its countdown.
pub struct GameSession {
    config: GameConfig,
    rng: StdRng,
    state: GameState,
    puzzle: Puzzle,
    timer: LevelTimer,
}

impl GameSession {
    pub fn new(config: GameConfig, now: Instant) -> GameSession {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        GameSession::with_rng(config, rng, now)
    }

    pub fn with_rng(config: GameConfig, mut rng: StdRng, now: Instant) -> GameSession {
        let puzzle = new_level(&config, &mut rng);
        let timer = LevelTimer::new(config.difficulty.time_budget(), now);
        GameSession {
            config,
            rng,
            state: GameState::Menu,
            puzzle,
            timer,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn remaining_secs(&self, now: Instant) -> u64 {
        self.timer.remaining_secs(now)
    }

    /// Swaps in a freshly generated level, clears history and restarts the countdown.
    pub fn reset_level(&mut self, now: Instant) {
        self.puzzle = new_level(&self.config, &mut self.rng);
        self.timer.restart(now);
    }

    pub fn handle_input(&mut self, input: InputEvent, now: Instant) -> SessionEvent {
        match (self.state, input) {
            (_, InputEvent::Quit) => SessionEvent::Quit,
            (GameState::Menu, InputEvent::Confirm) => {
                self.reset_level(now);
                self.change_state(GameState::Playing)
            }
            (GameState::Menu, InputEvent::Help) => self.change_state(GameState::Controls),
            (GameState::Controls, InputEvent::Cancel) | (GameState::Playing, InputEvent::Cancel) => {
                self.reset_level(now);
                self.change_state(GameState::Menu)
            }
            (GameState::Playing, InputEvent::Move(direction)) => {
                match step(&mut self.puzzle, direction) {
                    GameUpdate::Moved(_) if self.puzzle.is_won() => {
                        info!("level solved with {} moves", self.puzzle.history.len());
                        SessionEvent::RoundOver(RoundOutcome::Won)
                    }
                    GameUpdate::Moved(change) => SessionEvent::Moved(change),
                    GameUpdate::Rejected(reason) => {
                        debug!("move {:?} rejected: {:?}", direction, reason);
                        SessionEvent::Rejected(reason)
                    }
                }
            }
            (GameState::Playing, InputEvent::Undo) => match undo(&mut self.puzzle) {
                Some(_) => SessionEvent::Undone,
                None => SessionEvent::Ignored,
            },
            _ => SessionEvent::Ignored,
        }
    }

    /// Per-frame check. Only a level being played can run out of time.
    pub fn tick(&mut self, now: Instant) -> Option<RoundOutcome> {
        if self.state == GameState::Playing && self.timer.is_expired(now) {
            info!("time is up after {:?}", self.timer.budget());
            return Some(RoundOutcome::TimeUp);
        }
        None
    }

    fn change_state(&mut self, state: GameState) -> SessionEvent {
        info!("screen {:?} -> {:?}", self.state, state);
        self.state = state;
        SessionEvent::ScreenChanged(state)
    }
}

fn new_level(config: &GameConfig, rng: &mut StdRng) -> Puzzle {
    match generate(config.width, config.height, config.goals, rng) {
        Ok(puzzle) => {
            info!(
                "new {}x{} level with {} goals",
                config.width, config.height, puzzle.total_goals
            );
            puzzle
        }
        Err(err) => {
            error!("level generation failed, using the built-in level: {}", err);
            parse_level(FALLBACK_LEVEL)
        }
    }
}
