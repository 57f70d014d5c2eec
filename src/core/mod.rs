mod errors;
mod generator;
mod grid;
mod level_text;
mod model_helpers;
mod models;
mod session;
mod timer;
mod update;

pub use errors::GenerationError;
pub use generator::generate;
pub use grid::Grid;
pub use level_text::{parse_level, render_level_to_string};
pub use models::{
    BoxPush, Direction, GameChangeType, GameUpdate, HistoryEntry, MoveRejection, Puzzle, Tile, Vec2,
};
pub use session::{GameSession, GameState, InputEvent, RoundOutcome, SessionEvent};
pub use update::{step, undo};
