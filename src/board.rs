//! Board state: occupancy, shot history, adjacency blocking, rendering.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;

use crate::cellset::CellSet;
use crate::common::{GameError, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::vessel::Vessel;

/// One player's grid: vessel occupancy, shot history, and the blocked halo
/// that keeps fleets from touching.
#[derive(Debug)]
pub struct Board {
    occupied: CellSet,
    fired: CellSet,
    blocked: CellSet,
    vessels: Vec<Vessel>,
    hidden: bool,
}

impl Board {
    /// Empty board. A hidden board conceals unhit vessel cells when rendered.
    pub fn new(hidden: bool) -> Self {
        Self {
            occupied: CellSet::new(),
            fired: CellSet::new(),
            blocked: CellSet::new(),
            vessels: Vec::new(),
            hidden,
        }
    }

    /// Place `vessel`. Every cell must be on the grid and clear of the
    /// blocked halo of earlier vessels; the checks precede any mutation.
    pub fn place(&mut self, vessel: Vessel) -> Result<(), GameError> {
        for &cell in vessel.cells() {
            if !cell.in_bounds() {
                return Err(GameError::OutOfBounds);
            }
            if self.blocked.contains(cell) {
                return Err(GameError::CellConflict);
            }
        }
        for &cell in vessel.cells() {
            self.occupied.insert(cell);
            self.blocked.insert(cell);
            for neighbor in cell.neighbors() {
                self.blocked.insert(neighbor);
            }
        }
        self.vessels.push(vessel);
        Ok(())
    }

    /// Resolve a shot at `target`. Bounds and repeat checks precede any
    /// mutation; after them the fired flag, hit bookkeeping, and any vessel
    /// removal land together.
    pub fn shoot(&mut self, target: Coord) -> Result<ShotOutcome, GameError> {
        if !target.in_bounds() {
            return Err(GameError::OutOfBounds);
        }
        if self.fired.contains(target) {
            return Err(GameError::AlreadyFired);
        }
        self.fired.insert(target);

        // A destroyed vessel's cells are all fired already, so scanning the
        // active list is enough to classify the shot.
        let hit = match self.vessels.iter().position(|v| v.spans(target)) {
            Some(i) => i,
            None => return Ok(ShotOutcome::Miss),
        };
        self.vessels[hit].take_hit();
        if !self.vessels[hit].is_destroyed() {
            return Ok(ShotOutcome::Hit);
        }

        let sunk = self.vessels.remove(hit);
        // Nothing sits next to a wreck; its halo counts as fired from now on.
        for &cell in sunk.cells() {
            for neighbor in cell.neighbors() {
                self.fired.insert(neighbor);
            }
        }
        if self.vessels.is_empty() {
            Ok(ShotOutcome::GameOver(sunk.name()))
        } else {
            Ok(ShotOutcome::Sunk(sunk.name()))
        }
    }

    /// True when a vessel segment, active or destroyed, occupies `cell`.
    pub fn has_vessel(&self, cell: Coord) -> bool {
        self.occupied.contains(cell)
    }

    /// True when `cell` has received a shot.
    pub fn is_fired(&self, cell: Coord) -> bool {
        self.fired.contains(cell)
    }

    /// Vessels still afloat.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn active_vessels(&self) -> usize {
        self.vessels.len()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

impl fmt::Display for Board {
    /// Column numbers across the top, each row prefixed with its number.
    /// Markers: `X` destroyed segment, `o` fired miss, `S` visible vessel,
    /// `.` empty or concealed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 1..=BOARD_SIZE {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;
        for row in 1..=BOARD_SIZE {
            write!(f, " {}", row)?;
            for col in 1..=BOARD_SIZE {
                let cell = Coord::new(col, row);
                let mark = if self.occupied.contains(cell) && self.fired.contains(cell) {
                    'X'
                } else if self.fired.contains(cell) {
                    'o'
                } else if self.occupied.contains(cell) && !self.hidden {
                    'S'
                } else {
                    '.'
                };
                write!(f, " {}", mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
