//! Random targeting for the computer player.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::BOARD_SIZE;
use crate::coord::Coord;

/// Every cell of the grid in random order, drawn without replacement, so
/// the computer never repeats a guess.
pub struct TargetQueue {
    moves: Vec<Coord>,
}

impl TargetQueue {
    /// Shuffle the full move list once up front.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut moves: Vec<Coord> = (1..=BOARD_SIZE)
            .flat_map(|col| (1..=BOARD_SIZE).map(move |row| Coord::new(col, row)))
            .collect();
        moves.shuffle(rng);
        Self { moves }
    }

    /// Next candidate, or `None` once the grid is exhausted.
    pub fn pop(&mut self) -> Option<Coord> {
        self.moves.pop()
    }

    /// Candidates left in the queue.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}
