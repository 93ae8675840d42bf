mod common;
use common::*;

use hivemind::prelude::*;

#[test]
fn empty_board_has_not_started()
{
    let _ = setup::setup();
    templates::expect_state("", Options::default(), GameState::NotStarted);
}

#[test]
fn first_move_ok_white()
{
    let _ = setup::setup();
    let board = templates::replay("1. wA1", Options::default());
    assert_eq!(board.ply(), 1);
    assert_eq!(board.to_move(), Player::Black);
    assert_eq!(board.location(&Piece { player: Player::White, kind: Bug::Ant, num: 1 }), Some(Point::ORIGIN));
}

#[test]
fn first_move_ok_black()
{
    let _ = setup::setup();
    let board = templates::replay("1. wA1, 2. bS1 -wA1", Options::default());
    assert_eq!(board.ply(), 2);
    assert_eq!(board.to_move(), Player::White);
}

#[test]
fn no_expansion_bugs_without_opting_in()
{
    let _ = setup::setup();
    templates::expect_rejection("1. wL1", Options::default());
}

#[test]
fn expansion_bugs_are_available_once_enabled()
{
    let _ = setup::setup();
    let board = templates::replay("1. wL1", Options::all());
    assert_eq!(board.location(&Piece { player: Player::White, kind: Bug::Ladybug, num: 1 }), Some(Point::ORIGIN));
}

#[test]
fn cannot_place_directly_on_top_of_another_piece()
{
    let _ = setup::setup();
    templates::expect_rejection("1. wA1, 2. bS1 wA1", Options::default());
}

#[test]
fn placement_must_not_border_only_the_enemy_hive()
{
    let _ = setup::setup();
    // West of bS1 sits two hexes from wA1 and touches no friendly piece.
    templates::expect_rejection("1. wA1, 2. bS1 -wA1, 3. wA2 -bS1", Options::default());
}

#[test]
fn queen_cannot_be_placed_on_the_first_turn_white()
{
    let _ = setup::setup();
    templates::expect_rejection("1. wQ", Options::default());
}

#[test]
fn queen_cannot_be_placed_on_the_first_turn_black()
{
    let _ = setup::setup();
    templates::expect_rejection("1. wA1, 2. bQ -wA1", Options::default());
}

#[test]
fn queen_must_be_placed_by_the_fourth_turn()
{
    let _ = setup::setup();
    // White plays ants on turns 1-3 and tries a fourth non-queen placement with the
    // queen still in reserve; the fourth turn must be a queen placement.
    let moves = "1. wA1, 2. bA1 -wA1, 3. wA2 wA1/, 4. bA2 /bA1, 5. wA3 wA2/, 6. bA3 /bA2, 7. wG1 wA3/";
    templates::expect_rejection(moves, Options::default());
}

#[test]
fn pieces_cannot_move_before_the_queen_is_placed()
{
    let _ = setup::setup();
    let moves = "1. wA1, 2. bA1 -wA1, 3. wA1 bA1\\";
    templates::expect_rejection(moves, Options::default());
}

#[test]
fn make_then_unmake_restores_the_position_exactly()
{
    let _ = setup::setup();
    let mut board = templates::replay("1. wA1, 2. bS1 -wA1", Options::default());
    let before_hash = board.zobrist();
    let before_ply = board.ply();

    let movestr: MoveString = "wQ wA1/".parse().unwrap();
    let mv = Move::from(&movestr, &board).unwrap();
    board.play(mv).unwrap();
    assert_eq!(board.ply(), before_ply + 1);
    assert_ne!(board.zobrist(), before_hash);

    board.unmake().unwrap();
    assert_eq!(board.zobrist(), before_hash);
    assert_eq!(board.ply(), before_ply);
}
