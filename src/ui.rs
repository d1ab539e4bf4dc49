#![cfg(feature = "std")]
//! Console presentation: banner, board display, line input.

use std::io::{self, IsTerminal};

use crate::board::Board;

pub fn banner() {
    println!(" ******************");
    println!(" *                *");
    println!(" *   SEA BATTLE   *");
    println!(" *                *");
    println!(" ******************");
}

/// Both boards from the human's side of the table: own fleet revealed on
/// top, enemy waters concealed below.
pub fn print_boards(own: &Board, enemy: &Board) {
    println!("Your fleet:\n{}", own);
    println!("Enemy waters:\n{}", enemy);
}

/// One trimmed line from stdin, or `None` at end of input.
pub fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Block until Enter, pacing the game between events. Skipped when input
/// is not a terminal so scripted games run straight through.
pub fn pause() {
    if io::stdin().is_terminal() {
        let _ = read_line();
    }
}
