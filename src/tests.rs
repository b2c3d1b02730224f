use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::definitions::StrategyKind;
use crate::engine::evaluator::{score_hole, CAPTURE_BONUS, DISRUPTION_BONUS};

use super::*;

fn twelve(own: [Seeds; 6], opponent: [Seeds; 6]) -> Board {
    Board::new(vec![own.to_vec(), opponent.to_vec()])
}

fn hint(board: &Board, player: Player, variant: Variant) -> Option<Suggestion> {
    suggest_move(board, player, variant, Stores::default()).unwrap()
}

#[test]
fn row_selection() {
    assert_eq!(Variant::TwelveHole.player_row(Player::First), 0);
    assert_eq!(Variant::TwelveHole.opponent_row(Player::First), 1);
    assert_eq!(Variant::TwelveHole.player_row(Player::Second), 1);
    assert_eq!(Variant::TwelveHole.opponent_row(Player::Second), 0);
    assert_eq!(Variant::EighteenHole.player_row(Player::First), 0);
    assert_eq!(Variant::EighteenHole.opponent_row(Player::First), 2);
    assert_eq!(Variant::EighteenHole.player_row(Player::Second), 2);
    assert_eq!(Variant::EighteenHole.opponent_row(Player::Second), 0);
}

#[test]
fn variant_and_player_parsing() {
    assert_eq!("12-hole".parse::<Variant>(), Ok(Variant::TwelveHole));
    assert_eq!("18-hole".parse::<Variant>(), Ok(Variant::EighteenHole));
    assert!("12".parse::<Variant>().is_err());
    assert_eq!(Player::try_from(1i64), Ok(Player::Second));
    assert!(Player::try_from(-1i64).is_err());
    assert_eq!(
        serde_json::from_str::<Variant>("\"18-hole\"").unwrap(),
        Variant::EighteenHole
    );
    assert!(serde_json::from_str::<Player>("3").is_err());
}

#[test]
fn simple_strategy_takes_first_fullest_hole() {
    let board = twelve([0, 5, 2, 5, 0, 1], [0; 6]);
    let sides = board.sides(Player::First, Variant::TwelveHole).unwrap();
    assert_eq!(SimpleStrategy.suggest(&sides), Some(1));

    let empty = twelve([0; 6], [3; 6]);
    let sides = empty.sides(Player::First, Variant::TwelveHole).unwrap();
    assert_eq!(SimpleStrategy.suggest(&sides), None);
}

#[test]
fn advanced_scores() {
    let board = twelve([1, 0, 0, 5, 0, 1], [0, 0, 0, 1, 0, 0]);
    let sides = board.sides(Player::First, Variant::TwelveHole).unwrap();
    // 1 < 6: no bonus, empty facing hole
    assert_eq!(score_hole(&sides, 0, 1), 1);
    assert_eq!(score_hole(&sides, 3, 5), 5 + CAPTURE_BONUS + DISRUPTION_BONUS);
    // last hole always reaches
    assert_eq!(score_hole(&sides, 5, 1), 1 + CAPTURE_BONUS);
}

#[test]
fn opening_position_prefers_first_reaching_hole() {
    let board = twelve([4; 6], [4; 6]);
    let suggestion = hint(&board, Player::First, Variant::TwelveHole).unwrap();
    assert_eq!(suggestion.hole, 2);
    assert_eq!(suggestion.seeds, 4);
    assert_eq!(suggestion.strategy, StrategyKind::Advanced);
    assert_eq!(suggestion.reasoning(), "Selected hole 2 with 4 seeds");
}

#[test]
fn lone_capture_move() {
    let board = twelve([0, 0, 0, 5, 0, 0], [1; 6]);
    let suggestion = hint(&board, Player::First, Variant::TwelveHole).unwrap();
    assert_eq!(suggestion.hole, 3);
    assert_eq!(suggestion.seeds, 5);
}

#[test]
fn empty_row_has_no_suggestion() {
    let board = twelve([0; 6], [4; 6]);
    assert_eq!(hint(&board, Player::First, Variant::TwelveHole), None);
    let sides = board.sides(Player::First, Variant::TwelveHole).unwrap();
    assert_eq!(AdvancedStrategy.suggest(&sides), None);
}

#[test]
fn advanced_ties_keep_earliest_hole() {
    // both score 3 + 2
    let board = twelve([3, 3, 0, 0, 0, 0], [1, 1, 0, 0, 0, 0]);
    assert_eq!(hint(&board, Player::First, Variant::TwelveHole).unwrap().hole, 0);
}

#[test]
fn capture_bonus_outweighs_bigger_hole() {
    let board = twelve([9, 0, 0, 0, 0, 1], [0; 6]);
    let suggestion = hint(&board, Player::First, Variant::TwelveHole).unwrap();
    // 9 + 10 beats 1 + 10
    assert_eq!(suggestion.hole, 0);

    // a single seed in the last hole still reaches
    let board = twelve([5, 0, 0, 0, 0, 1], [0; 6]);
    assert_eq!(hint(&board, Player::First, Variant::TwelveHole).unwrap().hole, 5);
}

#[test]
fn second_player_reads_own_row() {
    let board = twelve([9, 9, 9, 9, 9, 9], [0, 1, 0, 0, 0, 0]);
    let suggestion = hint(&board, Player::Second, Variant::TwelveHole).unwrap();
    assert_eq!(suggestion.hole, 1);
    assert_eq!(suggestion.seeds, 1);
}

#[test]
fn eighteen_hole_ignores_middle_row() {
    let board = Board::new(vec![
        vec![0, 0, 0, 0, 0, 0],
        vec![7, 7, 7, 7, 7, 7],
        vec![0, 0, 3, 0, 0, 0],
    ]);
    assert_eq!(hint(&board, Player::First, Variant::EighteenHole), None);
    let suggestion = hint(&board, Player::Second, Variant::EighteenHole).unwrap();
    assert_eq!(suggestion.hole, 2);
}

#[test]
fn missing_row_is_an_error() {
    let board = twelve([1; 6], [1; 6]);
    assert_eq!(
        suggest_move(&board, Player::Second, Variant::EighteenHole, Stores::default()),
        Err(BoardError::MissingRow { row: 2, rows: 2 })
    );
}

#[test]
fn short_opponent_row_counts_as_empty() {
    let board = Board::new(vec![vec![0, 0, 0, 0, 0, 0, 0, 1], vec![1; 6]]);
    let suggestion = hint(&board, Player::First, Variant::TwelveHole).unwrap();
    assert_eq!(suggestion.hole, 7);
}

#[test]
fn stores_do_not_change_the_suggestion() {
    let board = twelve([2, 0, 6, 1, 0, 3], [0, 4, 4, 0, 1, 1]);
    let plain = hint(&board, Player::First, Variant::TwelveHole);
    let with_stores = suggest_move(&board, Player::First, Variant::TwelveHole, Stores([20, 3]));
    assert_eq!(Ok(plain), with_stores);
}

#[test]
fn random_boards_suggest_playable_holes() {
    let mut rng = StdRng::seed_from_u64(0x6eb3_7a);
    for _ in 0..500 {
        let variant = if rng.gen_bool(0.5) {
            Variant::TwelveHole
        } else {
            Variant::EighteenHole
        };
        let rows = match variant {
            Variant::TwelveHole => 2,
            Variant::EighteenHole => 3,
        };
        let board = Board::new(
            (0..rows)
                .map(|_| {
                    (0..6)
                        .map(|_| if rng.gen_bool(0.4) { 0 } else { rng.gen_range(1..12) })
                        .collect()
                })
                .collect(),
        );
        let player = if rng.gen_bool(0.5) {
            Player::First
        } else {
            Player::Second
        };
        let own = board.row(variant.player_row(player)).unwrap();
        let suggestion = hint(&board, player, variant);
        match suggestion {
            Some(suggestion) => {
                assert!(own[suggestion.hole] > 0, "{:?} picked empty hole", board);
                assert_eq!(own[suggestion.hole], suggestion.seeds);
            }
            None => assert!(own.iter().all(|&seeds| seeds == 0)),
        }
        assert_eq!(hint(&board, player, variant), suggestion);
    }
}
