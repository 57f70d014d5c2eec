/// Reasons a level cannot be generated for the requested size and goal count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("a {width}x{height} level is unusable; each side must be between 3 and 1024")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("a level needs at least one goal")]
    NoGoals,

    #[error("need {requested} floor cells for the player and goals but only {available} exist")]
    NotEnoughFloor { requested: usize, available: usize },

    #[error("need {requested} cells away from walls for boxes but only {available} remain")]
    NotEnoughBoxSpace { requested: usize, available: usize },
}
