mod common;
use common::*;

use hivemind::prelude::*;

#[test]
fn scenario_1_empty_input_plays_the_opening_book_move()
{
    let _ = setup::setup();
    let mut board = templates::replay("", Options::default());
    let mut engine = Engine::new();
    let mv = engine.decide(&mut board, Depth::new(2));
    assert_eq!(mv.to_string(), "wG1");
}

#[test]
fn scenario_2_replies_with_the_second_book_move()
{
    let _ = setup::setup();
    let mut board = templates::replay("1. wG1", Options::default());
    let mut engine = Engine::new();
    let mv = engine.decide(&mut board, Depth::new(2));
    assert_eq!(mv.to_string(), "bG1 -wG1");
}

#[test]
fn scenario_3_brings_the_queen_out_on_whites_second_turn()
{
    let _ = setup::setup();
    let mut board = templates::replay("1. wG1, 2. bG1 -wG1", Options::default());
    let mut engine = Engine::new();
    let mv = engine.decide(&mut board, Depth::new(2));
    assert_eq!(mv.to_string(), "wQ wG1/");
}

#[test]
fn scenario_4_black_has_a_legal_reply_once_the_queen_has_emerged()
{
    let _ = setup::setup();
    let mut board = templates::replay("1. wS1, 2. bG1 -wS1, 3. wQ wS1/", Options::default());
    assert_eq!(board.to_move(), Player::Black);
    assert!(!board.legal_moves().is_empty());

    let mut engine = Engine::new();
    let mv = engine.decide(&mut board, Depth::new(2));
    board.play(mv).expect("the engine's own choice must be a legal move");
    assert_eq!(board.winner(), GameState::InProgress);
}

#[test]
fn scenario_5_a_surrounded_queen_ends_the_game()
{
    let _ = setup::setup();
    // Constructed directly (bypassing turn-order legality) so the surround itself, not
    // the path to reach it, is what's under test: all six neighbours of white's queen
    // are occupied by black, and nothing else is.
    let mut board = Board::new(Options::default());

    let wq = Piece { player: Player::White, kind: Bug::Queen, num: 1 };
    board.play_unchecked(Move::Place(wq, None));

    let ring = [
        (Piece { player: Player::Black, kind: Bug::Ant, num: 1 }, Direction::Northeast),
        (Piece { player: Player::Black, kind: Bug::Ant, num: 2 }, Direction::East),
        (Piece { player: Player::Black, kind: Bug::Ant, num: 3 }, Direction::Southeast),
        (Piece { player: Player::Black, kind: Bug::Beetle, num: 1 }, Direction::Southwest),
        (Piece { player: Player::Black, kind: Bug::Beetle, num: 2 }, Direction::West),
        (Piece { player: Player::Black, kind: Bug::Grasshopper, num: 1 }, Direction::Northwest),
    ];

    for (piece, direction) in ring
    {
        board.play_unchecked(Move::Place(piece, Some(NextTo { piece: wq, direction: Some(direction) })));
    }

    assert_eq!(board.winner(), GameState::BlackWins);
}

#[test]
fn scenario_6_three_pairs_of_beetle_hops_draw_the_game_by_repetition()
{
    let _ = setup::setup();
    // Constructed directly so the repeating position itself is under test, not the path
    // to reach it: a queen each, with a beetle perched beside it free to hop on and off.
    let mut board = Board::new(Options::default());

    let wq = Piece { player: Player::White, kind: Bug::Queen, num: 1 };
    let bq = Piece { player: Player::Black, kind: Bug::Queen, num: 1 };
    let wb = Piece { player: Player::White, kind: Bug::Beetle, num: 1 };
    let bb = Piece { player: Player::Black, kind: Bug::Beetle, num: 1 };

    board.play_unchecked(Move::Place(wq, None));
    board.play_unchecked(Move::Place(bq, Some(NextTo { piece: wq, direction: Some(Direction::West) })));
    board.play_unchecked(Move::Place(wb, Some(NextTo { piece: wq, direction: Some(Direction::East) })));
    board.play_unchecked(Move::Place(bb, Some(NextTo { piece: bq, direction: Some(Direction::West) })));

    let cover_w = Move::Relocate(wb, NextTo { piece: wq, direction: None });
    let uncover_w = Move::Relocate(wb, NextTo { piece: wq, direction: Some(Direction::East) });
    let cover_b = Move::Relocate(bb, NextTo { piece: bq, direction: None });
    let uncover_b = Move::Relocate(bb, NextTo { piece: bq, direction: Some(Direction::West) });

    for _ in 0..2
    {
        board.play(cover_w).unwrap();
        board.play(cover_b).unwrap();
        board.play(uncover_w).unwrap();
        board.play(uncover_b).unwrap();
    }
    board.play(cover_w).unwrap();
    board.play(cover_b).unwrap();

    assert_eq!(board.winner(), GameState::Draw);
}
