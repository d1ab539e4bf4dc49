use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{populate, Board, Coord, GameError, BOARD_SIZE, TOTAL_VESSELS};

fn populated_board(seed: u64) -> Option<Board> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(false);
    // An unfillable draw is not a failure; real play just redraws.
    populate(&mut board, &mut rng).ok()?;
    Some(board)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleets_never_overlap_or_touch(seed in any::<u64>()) {
        let Some(board) = populated_board(seed) else { return Ok(()); };
        prop_assert_eq!(board.active_vessels(), TOTAL_VESSELS);

        let vessels = board.vessels();
        for (i, a) in vessels.iter().enumerate() {
            for b in vessels.iter().skip(i + 1) {
                for &ca in a.cells() {
                    for &cb in b.cells() {
                        let dc = (ca.col() as i16 - cb.col() as i16).abs();
                        let dr = (ca.row() as i16 - cb.row() as i16).abs();
                        prop_assert!(dc.max(dr) > 1, "{} touches {}", ca, cb);
                    }
                }
            }
        }
    }

    #[test]
    fn every_placed_cell_is_in_bounds(seed in any::<u64>()) {
        let Some(board) = populated_board(seed) else { return Ok(()); };
        for vessel in board.vessels() {
            for &cell in vessel.cells() {
                prop_assert!(cell.in_bounds());
            }
        }
    }

    #[test]
    fn shots_are_permanent(
        seed in any::<u64>(),
        col in 1..=BOARD_SIZE,
        row in 1..=BOARD_SIZE,
    ) {
        let Some(mut board) = populated_board(seed) else { return Ok(()); };
        let target = Coord::new(col, row);
        board.shoot(target).unwrap();
        prop_assert!(board.is_fired(target));
        prop_assert_eq!(board.shoot(target), Err(GameError::AlreadyFired));
        prop_assert!(board.is_fired(target));
    }
}
