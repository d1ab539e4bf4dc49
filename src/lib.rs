#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod board;
mod cellset;
mod common;
mod config;
mod coord;
mod fleet;
#[cfg(feature = "std")]
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
#[cfg(feature = "std")]
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
mod ui;
mod vessel;

pub use ai::*;
pub use board::*;
pub use cellset::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use fleet::*;
#[cfg(feature = "std")]
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
#[cfg(feature = "std")]
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use ui::*;
pub use vessel::*;
