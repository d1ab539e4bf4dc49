//! The agent seam between the match loop and its two player types.

use crate::board::Board;
use crate::common::GameError;
use crate::coord::Coord;

/// What an agent wants to do with its move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Fire at the given coordinate.
    Fire(Coord),
    /// Abandon the match.
    Quit,
}

/// A participant able to produce target coordinates against an opponent
/// board. Unusable input comes back as an error and the agent is re-asked
/// without losing the turn.
pub trait Agent {
    /// Display name used in turn announcements and the victory banner.
    fn name(&self) -> &'static str;

    /// Produce the next decision against `enemy`.
    fn request_target(&mut self, enemy: &Board) -> Result<Decision, GameError>;
}
