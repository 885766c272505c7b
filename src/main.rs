#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sea_battle::{
    init_logging_with, parse_level, ui, AiPlayer, CliPlayer, Game, GameConfig, Player, BOARD_SIZE,
    LOG_ENV, MAX_BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        default_value_t = BOARD_SIZE,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=MAX_BOARD_SIZE as u64),
        help = "Board side length"
    )]
    size: usize,
    #[arg(long, help = "Log level (error, warn, info, debug, trace); overrides SEA_BATTLE_LOG")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer on this terminal.
    Play,
    /// Watch two computer players fight it out.
    Auto,
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn run_game<P: Player, C: Player>(mut game: Game<P, C>) -> anyhow::Result<()> {
    let mut out = io::stdout();
    ui::print_boards(&mut out, &game)?;
    ui::print_turn_banner(&mut out, game.to_move())?;
    let winner = game.run(|game, report| {
        let mut out = io::stdout();
        // stdout failures only lose the display, not the game state
        let _ = ui::print_report(&mut out, report)
            .and_then(|()| ui::print_boards(&mut out, game))
            .and_then(|()| ui::print_turn_banner(&mut out, game.to_move()));
    })?;
    ui::print_winner(&mut out, winner)?;
    out.flush()?;
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = cli.log_level.clone().or_else(|| std::env::var(LOG_ENV).ok());
    init_logging_with(parse_level(level.as_deref(), log::LevelFilter::Warn));
    let config = GameConfig::with_dimension(cli.size);
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng = seeded_rng(cli.seed);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut human = CliPlayer::stdio();
            human.greet()?;
            let game = Game::new(config, human, AiPlayer::new(), rng)?;
            if let Err(e) = run_game(game) {
                eprintln!("Game ended with an error: {}", e);
            }
        }
        Commands::Auto => {
            let game = Game::new(config, AiPlayer::new(), AiPlayer::new(), rng)?;
            run_game(game)?;
        }
    }
    Ok(())
}
