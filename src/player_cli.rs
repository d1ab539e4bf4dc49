#![cfg(feature = "std")]
//! Human player: coordinates typed as "row column" on stdin.

use std::io::{self, Write};

use crate::board::Board;
use crate::common::GameError;
use crate::coord::Coord;
use crate::player::{Agent, Decision};
use crate::ui;

#[derive(Default)]
pub struct HumanAgent;

impl HumanAgent {
    pub fn new() -> Self {
        Self
    }
}

/// Interpret one line of input: `exit` quits, otherwise exactly two integer
/// tokens read as row then column.
pub fn parse_decision(input: &str) -> Result<Decision, GameError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.first().is_some_and(|t| t.eq_ignore_ascii_case("exit")) {
        return Ok(Decision::Quit);
    }
    match tokens.as_slice() {
        [row, col] => Ok(Decision::Fire(Coord::new(parse_axis(col)?, parse_axis(row)?))),
        _ => Err(GameError::MalformedInput),
    }
}

/// Any integer parses; values off the grid stay off the grid after clamping
/// into `u8`, leaving the range error to the board's bounds check.
fn parse_axis(token: &str) -> Result<u8, GameError> {
    let n: i64 = token.parse().map_err(|_| GameError::MalformedInput)?;
    Ok(n.clamp(0, u8::MAX as i64) as u8)
}

impl Agent for HumanAgent {
    fn name(&self) -> &'static str {
        "Player"
    }

    fn request_target(&mut self, _enemy: &Board) -> Result<Decision, GameError> {
        print!("Enter the row number and the column number: ");
        io::stdout().flush().unwrap();
        match ui::read_line() {
            Some(line) => parse_decision(&line),
            // Closed stdin reads as a request to leave.
            None => Ok(Decision::Quit),
        }
    }
}
