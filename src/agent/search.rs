use crate::prelude::*;

/// Fixed-depth negamax with alpha-beta pruning, backed by a transposition table.
///
/// Single-threaded: the engine searches one position at a time with no shared mutable
/// state across threads, unlike the iterative-deepening, multi-threaded search this is
/// adapted from.
pub struct Search<'t>
{
    table:       &'t mut TranspositionTable,
    nodes:       u64,
    evaluations: u64,
}

impl<'t> Search<'t>
{
    pub fn new(table: &'t mut TranspositionTable) -> Search<'t>
    {
        Search { table, nodes: 0, evaluations: 0 }
    }

    pub fn nodes(&self) -> u64
    {
        self.nodes
    }

    pub fn evaluations(&self) -> u64
    {
        self.evaluations
    }

    /// Searches the position to `depth` and returns the move and value the root settled on.
    ///
    /// Assumes the caller has already ruled out a terminal position and an empty move
    /// list (pass-only positions are handled by the caller before search is reached).
    pub fn root(&mut self, board: &mut Board, depth: Depth) -> (Move, i32)
    {
        let mut moves = board.legal_moves();
        Self::order(&mut moves);

        let beta = WIN_SCORE + 1;
        let mut alpha = -beta;

        let mut best_move = moves[0];
        let mut best_value = alpha;

        for mv in moves
        {
            board.play_unchecked(mv);
            let value = -self.negamax(board, depth - 1, -beta, -alpha);
            board.unmake().expect("a move just made by search must be unmakeable");

            if value > best_value
            {
                best_value = value;
                best_move = mv;
            }
            if value > alpha
            {
                alpha = value;
            }
        }

        (best_move, best_value)
    }

    fn negamax(&mut self, board: &mut Board, depth: Depth, mut alpha: i32, beta: i32) -> i32
    {
        self.nodes += 1;

        let key = board.zobrist();
        if let Some(entry) = self.table.probe(key)
        {
            if entry.depth >= depth.get()
            {
                match entry.bound
                {
                    | Bound::Exact => return entry.value,
                    | Bound::Lower if entry.value >= beta => return beta,
                    | Bound::Upper if entry.value <= alpha => return alpha,
                    | _ => {}
                }
            }
        }

        let sign = if board.to_move() == Player::White { 1 } else { -1 };

        match board.winner()
        {
            | GameState::WhiteWins => return sign * (WIN_SCORE + depth.get()),
            | GameState::BlackWins => return -sign * (WIN_SCORE + depth.get()),
            | GameState::Draw => return DRAW_SCORE,
            | GameState::NotStarted | GameState::InProgress => {}
        }

        if depth <= Depth::NIL
        {
            self.evaluations += 1;
            let value = sign * evaluate(board);
            self.table.store(key, TTEntry { depth: depth.get(), value, bound: Bound::Exact, best_move: None });
            return value;
        }

        let mut moves = board.legal_moves();
        Self::order(&mut moves);

        let original_alpha = alpha;
        let mut best_move = None;

        for mv in moves
        {
            board.play_unchecked(mv);
            let value = -self.negamax(board, depth - 1, -beta, -alpha);
            board.unmake().expect("a move just made by search must be unmakeable");

            if value >= beta
            {
                self.table.store(key, TTEntry { depth: depth.get(), value: beta, bound: Bound::Lower, best_move: Some(mv) });
                return beta;
            }
            if value > alpha
            {
                alpha = value;
                best_move = Some(mv);
            }
        }

        let bound = if alpha > original_alpha { Bound::Exact } else { Bound::Upper };
        self.table.store(key, TTEntry { depth: depth.get(), value: alpha, bound, best_move });
        alpha
    }

    /// Orders moves with relocations first and fresh placements last, so that pieces
    /// already committed to the board are explored before bringing new ones into play.
    fn order(moves: &mut [Move])
    {
        moves.sort_by_key(|mv| matches!(mv, Move::Place(_, _)) as u8);
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn root_returns_a_legal_move_from_the_opening_position()
    {
        let mut board = Board::new(Options::default());
        let mut table = TranspositionTable::new();
        let mut search = Search::new(&mut table);

        let (mv, _) = search.root(&mut board, Depth::new(1));
        assert!(board.check(&mv).is_ok());
    }

    #[test]
    fn deeper_search_visits_at_least_as_many_nodes() -> Result<()>
    {
        let mut board = Board::new(Options::default());
        let wq = Piece { player: Player::White, kind: Bug::Queen, num: 1 };
        board.play_unchecked(Move::Place(wq, None));

        let mut shallow_table = TranspositionTable::new();
        let mut shallow = Search::new(&mut shallow_table);
        shallow.root(&mut board, Depth::new(1));

        let mut deep_table = TranspositionTable::new();
        let mut deep = Search::new(&mut deep_table);
        deep.root(&mut board, Depth::new(2));

        assert!(deep.nodes() >= shallow.nodes());
        Ok(())
    }

    #[test]
    fn a_forced_win_outscores_a_plain_evaluation()
    {
        let mut board = Board::new(Options::default());
        let mut table = TranspositionTable::new();
        let mut search = Search::new(&mut table);

        let value = search.negamax(&mut board, Depth::new(0), -WIN_SCORE - 1, WIN_SCORE + 1);
        assert!(value.abs() < WIN_SCORE);
    }
}
