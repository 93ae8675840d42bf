use std::time::Instant;

use crate::prelude::*;

mod book;
mod depth;
mod evaluate;
mod scores;
mod search;
mod table;

pub use book::OpeningBook;
pub use depth::Depth;
pub use evaluate::evaluate;
pub use scores::*;
pub use search::Search;
pub use table::{Bound, TTEntry, TranspositionTable};

/// Decides a move for the side to move, consulting the opening book before falling back
/// to a fixed-depth negamax search. Owns the transposition table, so repeated calls
/// within one process reuse work across positions that recur.
pub struct Engine
{
    table: TranspositionTable,
}

impl Default for Engine
{
    fn default() -> Self
    {
        Engine::new()
    }
}

impl Engine
{
    pub fn new() -> Engine
    {
        Engine { table: TranspositionTable::new() }
    }

    /// Returns the move the engine chooses to play in the current position. The caller
    /// is responsible for checking that the game has not already ended.
    pub fn decide(&mut self, board: &mut Board, depth: Depth) -> Move
    {
        let legal = board.legal_moves();
        if legal.len() == 1 && legal[0] == Move::Pass
        {
            log::info!("no legal moves available; passing");
            return Move::Pass;
        }

        if let Some(mv) = OpeningBook::lookup(board)
        {
            log::info!("opening book move: {}", mv);
            return mv;
        }

        let start = Instant::now();
        let mut search = Search::new(&mut self.table);
        let (mv, value) = search.root(board, depth);
        let elapsed = start.elapsed();

        log::info!(
            "depth={} value={} move={} nodes={} evaluations={} elapsed={}cs",
            depth,
            value,
            mv,
            search.nodes(),
            search.evaluations(),
            elapsed.as_millis() / 10
        );

        mv
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn empty_position_plays_the_book_opening()
    {
        let mut board = Board::new(Options::default());
        let mut engine = Engine::new();
        let mv = engine.decide(&mut board, Depth::new(2));
        assert_eq!(mv, Move::Place(Piece { player: Player::White, kind: Bug::Grasshopper, num: 1 }, None));
    }

    #[test]
    fn decide_always_returns_a_legal_move() -> Result<()>
    {
        let mut board = Board::new(Options::default());
        let mut engine = Engine::new();

        for _ in 0..4
        {
            let mv = engine.decide(&mut board, Depth::new(1));
            board.play(mv)?;
        }

        Ok(())
    }
}
