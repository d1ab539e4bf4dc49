//! Common types: shot outcomes and game errors.

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed on open water; the turn passes.
    Miss,
    /// Shot hit a vessel that still has unhit segments.
    Hit,
    /// Shot destroyed a vessel, other vessels remain afloat.
    Sunk(&'static str),
    /// Shot destroyed the last vessel on the board.
    GameOver(&'static str),
}

/// Errors returned by board operations and agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside the grid on either axis.
    OutOfBounds,
    /// Placement overlaps or touches another vessel.
    CellConflict,
    /// The targeted cell has already been fired at.
    AlreadyFired,
    /// Agent produced input that does not parse as a coordinate.
    MalformedInput,
    /// Random placement exceeded its retry budget.
    Unfillable,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds => write!(f, "Target is outside the board"),
            GameError::CellConflict => write!(f, "Placement overlaps or touches another vessel"),
            GameError::AlreadyFired => write!(f, "That cell has already been fired at"),
            GameError::MalformedInput => write!(f, "Expected two numbers from 1 to 6"),
            GameError::Unfillable => write!(f, "Could not fit the fleet onto the board"),
        }
    }
}
