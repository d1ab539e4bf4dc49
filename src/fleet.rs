//! Random fleet placement with a bounded retry budget.

use rand::Rng;

use crate::board::Board;
use crate::common::GameError;
use crate::config::{BOARD_SIZE, FLEET, PLACEMENT_BUDGET};
use crate::coord::Coord;
use crate::vessel::{Orientation, Vessel};

/// Fill `board` with the configured fleet, longest vessels first. Every
/// failed placement burns one unit of the shared budget; exhausting it
/// aborts the whole board with `Unfillable` so the caller can start over on
/// a fresh one.
pub fn populate<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Result<(), GameError> {
    let mut tries: u32 = 0;
    for (class, count) in FLEET {
        for _ in 0..count {
            loop {
                if tries > PLACEMENT_BUDGET {
                    return Err(GameError::Unfillable);
                }
                let bow = Coord::new(
                    rng.random_range(1..=BOARD_SIZE),
                    rng.random_range(1..=BOARD_SIZE),
                );
                let orientation = if rng.random() {
                    Orientation::Vertical
                } else {
                    Orientation::Horizontal
                };
                match board.place(Vessel::new(class, bow, orientation)) {
                    Ok(()) => break,
                    Err(_) => tries += 1,
                }
            }
        }
    }
    log::debug!("fleet placed after {} failed attempts", tries);
    Ok(())
}

/// Produce a fully populated board, restarting from an empty grid whenever
/// placement runs out of budget.
pub fn random_board<R: Rng + ?Sized>(hidden: bool, rng: &mut R) -> Board {
    loop {
        let mut board = Board::new(hidden);
        match populate(&mut board, rng) {
            Ok(()) => return board,
            Err(_) => log::debug!("placement budget exhausted, regenerating board"),
        }
    }
}
