use std::time::Instant;

use crate::core::{GameSession, RoundOutcome};

/// What the terminal needs to draw one frame.
pub struct GameRenderState<'a> {
    pub session: &'a GameSession,
    pub now: Instant,
    pub banner: Option<RoundOutcome>,
}
