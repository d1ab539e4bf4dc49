#![cfg(feature = "std")]
//! Turn controller: alternation, the hit-fires-again rule, match endings.

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::player::{Agent, Decision};
use crate::ui;

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The named agent destroyed the whole enemy fleet.
    Won(&'static str),
    /// An agent quit before either fleet fell.
    Aborted,
}

enum TurnEnd {
    Pass,
    Victory,
    Quit,
}

/// One match between two agents. `boards[i]` belongs to `agents[i]` and is
/// shot at by the other agent; the first agent moves first.
pub struct Game {
    agents: [Box<dyn Agent>; 2],
    boards: [Board; 2],
}

impl Game {
    pub fn new(agents: [Box<dyn Agent>; 2], boards: [Board; 2]) -> Self {
        Self { agents, boards }
    }

    /// Run the match to completion.
    pub fn run(&mut self) -> MatchOutcome {
        let mut turn = 0usize;
        loop {
            let attacker = turn % 2;
            println!("\n{} to move.", self.agents[attacker].name());
            self.print_state();
            match self.play_turn(attacker) {
                TurnEnd::Pass => turn += 1,
                TurnEnd::Victory => {
                    let winner = self.agents[attacker].name();
                    println!("\n{} wins!", winner);
                    return MatchOutcome::Won(winner);
                }
                TurnEnd::Quit => return MatchOutcome::Aborted,
            }
        }
    }

    fn print_state(&self) {
        ui::print_boards(&self.boards[0], &self.boards[1]);
    }

    /// One full turn for `attacker`. Rejected input re-asks the same agent,
    /// hits and sinks keep the turn, the first miss ends it.
    fn play_turn(&mut self, attacker: usize) -> TurnEnd {
        let enemy = 1 - attacker;
        loop {
            let decision = match self.agents[attacker].request_target(&self.boards[enemy]) {
                Ok(d) => d,
                Err(e) => {
                    println!("{}.", e);
                    continue;
                }
            };
            let target = match decision {
                Decision::Fire(t) => t,
                Decision::Quit => return TurnEnd::Quit,
            };
            log::debug!("{} fires at {}", self.agents[attacker].name(), target);
            match self.boards[enemy].shoot(target) {
                Err(e) => println!("{}.", e),
                Ok(ShotOutcome::Miss) => {
                    println!("Miss!");
                    ui::pause();
                    return TurnEnd::Pass;
                }
                Ok(ShotOutcome::Hit) => {
                    self.print_state();
                    println!("Hit! Fire again.");
                }
                Ok(ShotOutcome::Sunk(name)) => {
                    self.print_state();
                    println!("{} sunk! Fire again.", name);
                }
                Ok(ShotOutcome::GameOver(name)) => {
                    self.print_state();
                    println!("{} sunk! The enemy fleet is destroyed.", name);
                    return TurnEnd::Victory;
                }
            }
        }
    }
}
