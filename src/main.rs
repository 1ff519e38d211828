use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::ai::Strategy;
use connect_four::arena::play_series;
use connect_four::config::AppConfig;
use connect_four::game::Player;

/// Play Connect Four games between computer opponents.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four between computer agents")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override alpha-beta search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Strategy for Red: random, alpha_beta or learned
    #[arg(long)]
    red: Option<Strategy>,

    /// Strategy for Yellow: random, alpha_beta or learned
    #[arg(long)]
    yellow: Option<Strategy>,

    /// Seed for random agents
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final board of every game
    #[arg(long)]
    show_board: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        config.arena.games = games;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(red) = cli.red {
        config.arena.red = red;
    }
    if let Some(yellow) = cli.yellow {
        config.arena.yellow = yellow;
    }
    if cli.seed.is_some() {
        config.arena.seed = cli.seed;
    }
    config.validate().context("validating configuration")?;

    let board = config.board.build().context("building board")?;
    let depth = config.search.depth;
    let seed = config.arena.seed;
    let mut red = config.arena.red.build_agent(depth, seed);
    let mut yellow = config
        .arena
        .yellow
        .build_agent(depth, seed.map(|s| s.wrapping_add(1)));

    println!(
        "{} ({}) vs {} ({}) on a {}x{} board, {} in a row, {} game(s)",
        Player::Red.name(),
        red.name(),
        Player::Yellow.name(),
        yellow.name(),
        board.rows(),
        board.cols(),
        board.win_length(),
        config.arena.games
    );

    let stats = play_series(
        red.as_mut(),
        yellow.as_mut(),
        &board,
        config.arena.games,
        |game, record| {
            if cli.show_board {
                let result = match record.winner {
                    Some(player) => format!("{player} wins"),
                    None => "draw".to_string(),
                };
                println!("Game {game}: {result} after {} moves", record.game_length());
                print!("{}", record.final_state.board());
            }
        },
    )
    .context("playing games")?;

    println!("-------------------------------------------");
    println!(
        "Red wins: {} ({:.1}%)",
        stats.red_wins,
        stats.win_rate(Player::Red) * 100.0
    );
    println!(
        "Yellow wins: {} ({:.1}%)",
        stats.yellow_wins,
        stats.win_rate(Player::Yellow) * 100.0
    );
    println!(
        "Draws: {} ({:.1}%)",
        stats.draws,
        stats.draw_rate() * 100.0
    );
    println!("Average game length: {:.1} moves", stats.average_game_length());

    Ok(())
}
