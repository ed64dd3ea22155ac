use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use game_1024::{Game, GameConfig, GameStatus};
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[derive(Debug, Parser)]
#[command(author, version, about = "Play one self-driving game of the sliding-tile merge puzzle")]
struct Cli {
    /// TOML file with board size, winning value and spawn settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for both tile spawns and move choice (overrides the config seed)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Stop after this many moves
    #[arg(long, value_name = "N")]
    steps: Option<u64>,

    /// Only print the final summary
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut cfg = match &cli.config {
        Some(path) => GameConfig::from_toml(path)?,
        None => GameConfig::default(),
    };
    if cli.seed.is_some() {
        cfg.seed = cli.seed;
    }
    let mut policy_rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    };

    let mut game = Game::from_config(&cfg)?;
    game.reset()?;
    if !cli.quiet {
        println!("{}", game.board());
    }

    let mut move_count: u64 = 0;
    while game.status() == GameStatus::InProgress {
        if cli.steps.is_some_and(|limit| move_count >= limit) {
            break;
        }
        let moves = game.available_moves();
        let Some(&dir) = moves.choose(&mut policy_rng) else { break };
        game.slide(dir)?;
        move_count += 1;
        if !cli.quiet {
            println!("{dir}{}", game.board());
        }
    }

    info!(
        "Moves made: {}, status: {}, highest tile: {}",
        move_count,
        game.status(),
        game.board().highest_tile()
    );
    Ok(())
}
