use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};

use connect_four_search::arena::{play_game_with, MatchTally};
use connect_four_search::config::AppConfig;
use connect_four_search::game::{GameOutcome, Player};

/// Play Connect Four between two configured strategies.
#[derive(Parser)]
#[command(name = "connect-four", about = "Minimax vs alpha-beta Connect Four self-play")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the search depth of both players
    #[arg(long)]
    depth: Option<usize>,

    /// Override the number of games
    #[arg(long)]
    games: Option<usize>,

    /// Log every search at debug level
    #[arg(long)]
    verbose: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.player_one.search.depth = depth;
        config.player_two.search.depth = depth;
    }
    if let Some(games) = cli.games {
        config.games = games;
    }
    config.validate().context("validating overridden config")?;

    let mut tally = MatchTally::new();
    for game in 1..=config.games {
        let mut first = config.player(Player::One).build(Player::One);
        let mut second = config.player(Player::Two).build(Player::Two);
        info!(game, first = first.name(), second = second.name(), "starting game");

        let record = play_game_with(first.as_mut(), second.as_mut(), |player, state| {
            println!("{player}'s move:");
            println!("{}\n", state.board());
        })
        .with_context(|| format!("playing game {game}"))?;

        match record.outcome {
            GameOutcome::Winner(player) => println!("{player} wins!"),
            GameOutcome::Draw => println!("It's a tie!"),
        }
        tally.record(&record);
    }

    if config.games > 1 {
        println!(
            "Results over {} games: {} {} | {} {} | draws {} | avg length {:.1}",
            tally.total_games(),
            Player::One,
            tally.wins(Player::One),
            Player::Two,
            tally.wins(Player::Two),
            tally.draws(),
            tally.average_game_length()
        );
    }

    Ok(())
}
