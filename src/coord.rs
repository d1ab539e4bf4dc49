//! Grid coordinates, 1-indexed from the top-left corner.

use core::fmt;

use crate::config::BOARD_SIZE;

/// A column/row pair on the grid. Out-of-range values are representable so
/// raw user input can travel to the board, which rejects it as `OutOfBounds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    col: u8,
    row: u8,
}

impl Coord {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    /// True when both axes fall within 1..=BOARD_SIZE.
    pub const fn in_bounds(self) -> bool {
        self.col >= 1 && self.col <= BOARD_SIZE && self.row >= 1 && self.row <= BOARD_SIZE
    }

    /// Row-major bit index. Caller ensures `in_bounds`.
    pub(crate) const fn index(self) -> u32 {
        (self.row as u32 - 1) * BOARD_SIZE as u32 + (self.col as u32 - 1)
    }

    /// The in-bounds cells of the 8-neighborhood around this one.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        let (col, row) = (self.col as i16, self.row as i16);
        (-1i16..=1)
            .flat_map(move |dc| (-1i16..=1).map(move |dr| (col + dc, row + dr)))
            .filter(move |&(c, r)| (c, r) != (col, row))
            .filter(|&(c, r)| {
                (1..=BOARD_SIZE as i16).contains(&c) && (1..=BOARD_SIZE as i16).contains(&r)
            })
            .map(|(c, r)| Coord::new(c as u8, r as u8))
    }
}

impl fmt::Display for Coord {
    /// Row before column, matching the order players type coordinates in.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}
