#![cfg(feature = "std")]
//! Computer player: pre-shuffled targets, each announced before firing.

use std::io::{self, Write};

use rand::Rng;

use crate::ai::TargetQueue;
use crate::board::Board;
use crate::common::GameError;
use crate::player::{Agent, Decision};
use crate::ui;

pub struct AiAgent {
    targets: TargetQueue,
}

impl AiAgent {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            targets: TargetQueue::new(rng),
        }
    }
}

impl Agent for AiAgent {
    fn name(&self) -> &'static str {
        "Computer"
    }

    fn request_target(&mut self, _enemy: &Board) -> Result<Decision, GameError> {
        let target = match self.targets.pop() {
            Some(t) => t,
            // An empty queue means every cell is fired and the match is
            // already decided.
            None => return Ok(Decision::Quit),
        };
        print!("Computer fires at {}. Press Enter. ", target);
        io::stdout().flush().unwrap();
        match ui::read_line() {
            Some(ack) if ack.eq_ignore_ascii_case("exit") => Ok(Decision::Quit),
            _ => Ok(Decision::Fire(target)),
        }
    }
}
