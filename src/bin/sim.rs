use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{
    create_random_board, init_logging, AiPlayer, Game, GameConfig, Side, TurnReport, FLEET,
};
use serde::Serialize;

#[derive(Serialize)]
struct SideSummary {
    shots: usize,
    sunk: usize,
}

#[derive(Serialize)]
struct Summary {
    player1: SideSummary,
    player2: SideSummary,
    winner: Side,
    final_shot: Option<TurnReport>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let config = GameConfig::default();
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let board1 = create_random_board(&mut rng1, &FLEET, config.dimension)?;
    let mut board2 = create_random_board(&mut rng2, &FLEET, config.dimension)?;
    board2.set_hidden(true);

    let rng = SmallRng::seed_from_u64(seed1 ^ seed2.rotate_left(32));
    let mut game = Game::with_boards(config, AiPlayer::new(), AiPlayer::new(), board1, board2, rng);
    let mut final_shot = None;
    let winner = game.run(|_, report| final_shot = Some(*report))?;

    let summary = |side: Side| SideSummary {
        shots: game.shots_fired(side),
        sunk: game.board(side.opponent()).sunk_count(),
    };
    let result = Summary {
        player1: summary(Side::Player),
        player2: summary(Side::Computer),
        winner,
        final_shot,
    };

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
