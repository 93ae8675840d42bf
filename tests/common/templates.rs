use hivemind::prelude::*;

/// Replays a move list (the engine's own comma-separated "N. <move-notation>" format)
/// onto a fresh board for the given options, panicking with the parse/rule error if the
/// sequence isn't legal.
pub fn replay(moves: &str, options: Options) -> Board
{
    movelist::replay(moves, options).unwrap_or_else(|err| panic!("move list '{}' should replay cleanly\n\tdue to {}", moves, err))
}

/// Replays a move list and asserts the resulting game state.
pub fn expect_state(moves: &str, options: Options, expected: GameState)
{
    let board = replay(moves, options);
    assert_eq!(board.winner(), expected);
}

/// Asserts that a move list fails to replay: a parse failure, or a rule violation on
/// some entry partway through the sequence.
pub fn expect_rejection(moves: &str, options: Options)
{
    assert!(movelist::replay(moves, options).is_err(), "move list '{}' should have been rejected", moves);
}
