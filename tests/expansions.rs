mod common;
use common::*;

use hivemind::prelude::*;

fn piece(player: Player, kind: Bug, num: u8) -> Piece
{
    Piece { player, kind, num }
}

#[test]
fn ladybug_is_unavailable_without_the_expansion_enabled()
{
    let _ = setup::setup();
    let mut board = Board::new(Options::default());
    let wl = piece(Player::White, Bug::Ladybug, 1);
    assert!(board.play(Move::Place(wl, None)).is_err());
}

#[test]
fn mosquito_is_unavailable_without_the_expansion_enabled()
{
    let _ = setup::setup();
    let mut board = Board::new(Options::default());
    let wm = piece(Player::White, Bug::Mosquito, 1);
    assert!(board.play(Move::Place(wm, None)).is_err());
}

#[test]
fn ladybug_crosses_the_hive_and_lands_on_open_ground()
{
    let _ = setup::setup();
    let mut board = Board::new(Options::all());

    let wq = piece(Player::White, Bug::Queen, 1);
    let bq = piece(Player::Black, Bug::Queen, 1);
    let wl = piece(Player::White, Bug::Ladybug, 1);

    board.play_unchecked(Move::Place(wq, None));
    board.play_unchecked(Move::Place(bq, Some(NextTo { piece: wq, direction: Some(Direction::West) })));
    board.play(Move::Place(wl, Some(NextTo { piece: wq, direction: Some(Direction::East) }))).unwrap();
    board
        .play(Move::Place(piece(Player::Black, Bug::Ant, 1), Some(NextTo { piece: bq, direction: Some(Direction::West) })))
        .unwrap();

    let destinations = board.legal_destinations(&wl);
    assert!(!destinations.is_empty());
    for at in destinations
    {
        assert_eq!(at.z, 0, "a ladybug's final step must always be onto open ground");
    }
}

#[test]
fn mosquito_at_ground_level_borrows_its_lone_neighbours_movement()
{
    let _ = setup::setup();
    let mut board = Board::new(Options::all());

    let wq = piece(Player::White, Bug::Queen, 1);
    let bq = piece(Player::Black, Bug::Queen, 1);
    let wm = piece(Player::White, Bug::Mosquito, 1);

    board.play_unchecked(Move::Place(wq, None));
    board.play_unchecked(Move::Place(bq, Some(NextTo { piece: wq, direction: Some(Direction::West) })));
    board.play(Move::Place(wm, Some(NextTo { piece: wq, direction: Some(Direction::East) }))).unwrap();
    board
        .play(Move::Place(piece(Player::Black, Bug::Ant, 1), Some(NextTo { piece: bq, direction: Some(Direction::West) })))
        .unwrap();

    // The mosquito's only neighbour is the queen, so it should borrow exactly the
    // queen's one-step sliding rule, pivoted from its own point.
    let destinations = board.legal_destinations(&wm);
    assert!(!destinations.is_empty());
    for at in destinations
    {
        assert_eq!(at.z, 0);
    }
}

#[test]
fn mosquito_perched_on_a_stack_moves_like_a_beetle()
{
    let _ = setup::setup();
    let mut board = Board::new(Options::all());

    let wq = piece(Player::White, Bug::Queen, 1);
    let bq = piece(Player::Black, Bug::Queen, 1);
    let wm = piece(Player::White, Bug::Mosquito, 1);

    board.play_unchecked(Move::Place(wq, None));
    board.play_unchecked(Move::Place(bq, Some(NextTo { piece: wq, direction: Some(Direction::West) })));
    board.play_unchecked(Move::Place(wm, Some(NextTo { piece: wq, direction: None })));

    let column = board.location(&wq).unwrap().column();
    assert_eq!(board.field().height(column), Some(2));

    let destinations = board.legal_destinations(&wm);
    assert!(!destinations.is_empty());
    for at in destinations
    {
        assert!(at.z <= 2);
    }
}
