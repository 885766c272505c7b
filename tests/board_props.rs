use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use sea_battle::{
    create_random_board, Board, Coordinate, Orientation, Ship, ShootError, BOARD_SIZE, FLEET,
};

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cells_are_colinear_from_bow(
        row in -10i32..10,
        col in -10i32..10,
        length in 1usize..8,
        orient in orientation(),
    ) {
        let ship = Ship::new(Coordinate::new(row, col), length, orient);
        let cells: Vec<_> = ship.cells().collect();
        prop_assert_eq!(cells.len(), length);
        prop_assert_eq!(cells[0], Coordinate::new(row, col));
        for (i, c) in cells.iter().enumerate() {
            let i = i as i32;
            match orient {
                Orientation::Horizontal => {
                    prop_assert_eq!(*c, Coordinate::new(row, col + i));
                }
                Orientation::Vertical => {
                    prop_assert_eq!(*c, Coordinate::new(row + i, col));
                }
            }
        }
    }

    #[test]
    fn accepted_ships_never_touch(
        candidates in proptest::collection::vec(
            (0i32..6, 0i32..6, 1usize..4, orientation()),
            0..30,
        ),
    ) {
        let mut board = Board::new(6);
        for (row, col, length, orient) in candidates {
            let _ = board.add_ship(Ship::new(Coordinate::new(row, col), length, orient));
        }
        let ships = board.ships();
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                for ca in a.cells() {
                    for cb in b.cells() {
                        prop_assert!((ca.row - cb.row).abs() > 1 || (ca.col - cb.col).abs() > 1);
                    }
                }
            }
        }
    }

    #[test]
    fn shooting_twice_is_rejected(seed in any::<u64>(), row in 0..BOARD_SIZE as i32, col in 0..BOARD_SIZE as i32) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = create_random_board(&mut rng, &FLEET, BOARD_SIZE).unwrap();
        let target = Coordinate::new(row, col);
        board.shoot(target).unwrap();
        prop_assert_eq!(board.shoot(target).unwrap_err(), ShootError::AlreadyShot(target));
    }

    #[test]
    fn sunk_count_matches_simulated_health(seed in any::<u64>(), shots in 0usize..60) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = create_random_board(&mut rng, &FLEET, BOARD_SIZE).unwrap();
        let mut health: Vec<usize> = board.ships().iter().map(|s| s.length()).collect();
        let ships: Vec<Ship> = board.ships().to_vec();

        let n = BOARD_SIZE as i32;
        for _ in 0..shots {
            let target = Coordinate::new(rng.random_range(0..n), rng.random_range(0..n));
            if board.shoot(target).is_ok() {
                if let Some(i) = ships.iter().position(|s| s.is_hit_by(target)) {
                    health[i] -= 1;
                }
            }
        }
        let sunk = health.iter().filter(|&&h| h == 0).count();
        prop_assert_eq!(board.sunk_count(), sunk);
        for (ship, h) in board.ships().iter().zip(&health) {
            prop_assert_eq!(ship.health(), *h);
        }
    }
}
