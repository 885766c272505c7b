use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    AiPlayer, Board, Coordinate, FleetError, Game, GameConfig, GameStatus, Orientation, Player,
    Ship, ShootError, ShotOutcome, Side, TurnReport, FLEET_SIZE,
};

/// Player firing a fixed list of targets.
struct Scripted {
    targets: VecDeque<Coordinate>,
    errors: Vec<ShootError>,
    outcomes: Vec<ShotOutcome>,
}

impl Scripted {
    fn new(targets: &[(i32, i32)]) -> Self {
        Self {
            targets: targets.iter().map(|&t| Coordinate::from(t)).collect(),
            errors: Vec::new(),
            outcomes: Vec::new(),
        }
    }
}

impl Player for Scripted {
    fn select_target(&mut self, _rng: &mut SmallRng, _dimension: usize) -> anyhow::Result<Coordinate> {
        self.targets
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn handle_shot_error(&mut self, _target: Coordinate, err: ShootError) {
        self.errors.push(err);
    }

    fn handle_outcome(&mut self, _target: Coordinate, outcome: ShotOutcome) {
        self.outcomes.push(outcome);
    }
}

fn board_with(ship: Ship) -> Board {
    let mut board = Board::new(6);
    board.add_ship(ship).unwrap();
    board.reset_exclusions();
    board
}

fn scripted_game(player: &[(i32, i32)], computer: &[(i32, i32)]) -> Game<Scripted, Scripted> {
    let config = GameConfig {
        fleet: vec![2],
        ..GameConfig::default()
    };
    let player_board = board_with(Ship::new(Coordinate::new(0, 0), 2, Orientation::Horizontal));
    let computer_board = board_with(Ship::new(Coordinate::new(5, 5), 1, Orientation::Horizontal));
    Game::with_boards(
        config,
        Scripted::new(player),
        Scripted::new(computer),
        player_board,
        computer_board,
        SmallRng::seed_from_u64(0),
    )
}

#[test]
fn test_miss_passes_turn_and_hits_keep_it() {
    let mut game = scripted_game(&[(6, 0), (3, 3)], &[(0, 0), (0, 0), (0, 1)]);
    assert_eq!(game.to_move(), Side::Player);

    let report = game.play_turn().unwrap();
    assert_eq!(report.side, Side::Player);
    assert_eq!(report.target, Coordinate::new(3, 3));
    assert_eq!(report.outcome, ShotOutcome::Miss);
    assert_eq!(report.rejected, 1);
    assert_eq!(
        game.player().errors,
        vec![ShootError::OutOfBounds(Coordinate::new(6, 0))]
    );
    assert_eq!(game.to_move(), Side::Computer);

    let report = game.play_turn().unwrap();
    assert_eq!(report.outcome, ShotOutcome::Hit);
    assert_eq!(game.to_move(), Side::Computer);
    assert_eq!(game.status(), GameStatus::InProgress);

    let report = game.play_turn().unwrap();
    assert_eq!(report.target, Coordinate::new(0, 1));
    assert_eq!(report.outcome, ShotOutcome::Sunk);
    assert_eq!(report.rejected, 1);
    assert_eq!(
        game.computer().errors,
        vec![ShootError::AlreadyShot(Coordinate::new(0, 0))]
    );
    assert_eq!(game.computer().outcomes, vec![ShotOutcome::Hit, ShotOutcome::Sunk]);

    assert_eq!(game.status(), GameStatus::Won(Side::Computer));
    assert_eq!(game.shots_fired(Side::Player), 1);
    assert_eq!(game.shots_fired(Side::Computer), 2);
    assert!(game.play_turn().is_err());
}

#[test]
fn test_run_reports_every_turn() {
    let mut game = scripted_game(&[(5, 5)], &[]);
    let mut reports = Vec::new();
    let winner = game.run(|_, r| reports.push(*r)).unwrap();
    assert_eq!(winner, Side::Player);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].outcome, ShotOutcome::Sunk);
}

#[test]
fn test_player_error_ends_game() {
    let mut game = scripted_game(&[(3, 3)], &[]);
    // player misses, then the computer has nothing to fire
    assert!(game.run(|_, _| {}).is_err());
}

#[test]
fn test_new_hides_computer_board() {
    let game = Game::new(
        GameConfig::default(),
        AiPlayer::new(),
        AiPlayer::new(),
        SmallRng::seed_from_u64(11),
    )
    .unwrap();
    assert!(!game.player_board().is_hidden());
    assert!(game.computer_board().is_hidden());
    assert_eq!(game.board(Side::Player).ships().len(), FLEET_SIZE);
    assert_eq!(game.board(Side::Computer).ships().len(), FLEET_SIZE);
}

#[test]
fn test_new_rejects_board_too_small() {
    let err = Game::new(
        GameConfig::with_dimension(2),
        AiPlayer::new(),
        AiPlayer::new(),
        SmallRng::seed_from_u64(0),
    )
    .err()
    .unwrap();
    assert_eq!(err, FleetError::ShipDoesNotFit { length: 3, dimension: 2 });
}

#[test]
fn test_ai_vs_ai_game() {
    for seed in [1u64, 2, 3, 123] {
        let mut game = Game::new(
            GameConfig::default(),
            AiPlayer::new(),
            AiPlayer::new(),
            SmallRng::seed_from_u64(seed),
        )
        .unwrap();
        let winner = game.run(|_, _| {}).unwrap();
        assert_eq!(game.status(), GameStatus::Won(winner));
        assert_eq!(game.board(winner.opponent()).sunk_count(), FLEET_SIZE);
        assert!(game.board(winner).sunk_count() < FLEET_SIZE);
        assert!(game.shots_fired(winner) >= FLEET_SIZE);
    }
}

#[test]
fn test_turn_report_serializes() {
    let report = TurnReport {
        side: Side::Computer,
        target: Coordinate::new(2, 5),
        outcome: ShotOutcome::Sunk,
        rejected: 3,
    };
    let value = serde_json::to_value(report).unwrap();
    assert_eq!(value["side"], "Computer");
    assert_eq!(value["target"]["row"], 2);
    assert_eq!(value["target"]["col"], 5);
    assert_eq!(value["outcome"], "Sunk");
    let back: TurnReport = serde_json::from_value(value).unwrap();
    assert_eq!(back, report);
}
