#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use seabattle::{
    banner, init_logging, pause, random_board, read_line, Agent, AiAgent, Game, HumanAgent,
    MatchOutcome,
};

#[derive(Parser)]
#[command(author, version, about = "Console sea battle against the computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    banner();
    println!("On your turn, enter the row number and the column number");
    println!("separated by a space. Type \"exit\" at any prompt to quit.");
    println!("Press Enter to start.");
    match read_line() {
        None => return Ok(()),
        Some(line) if line.eq_ignore_ascii_case("exit") => return Ok(()),
        Some(_) => {}
    }

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let boards = [random_board(false, &mut rng), random_board(true, &mut rng)];
    let agents: [Box<dyn Agent>; 2] = [
        Box::new(HumanAgent::new()),
        Box::new(AiAgent::new(&mut rng)),
    ];
    let mut game = Game::new(agents, boards);

    if let MatchOutcome::Won(_) = game.run() {
        pause();
    }
    Ok(())
}
