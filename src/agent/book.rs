use crate::prelude::*;

/// A flat table of known-good replies for the first three half-moves, keyed by ply and,
/// past the opening placement, by whether the position still matches the book line. Once
/// a position falls outside the line, lookup returns `None` and the caller falls back to
/// search.
pub struct OpeningBook;

impl OpeningBook
{
    /// Returns the book's move for this position, if the position is still on a known line.
    pub fn lookup(board: &Board) -> Option<Move>
    {
        match board.ply()
        {
            | 0 => Some(Self::opening()),
            | 1 => Self::second_move(board),
            | 2 => Self::third_move(board),
            | _ => None,
        }
    }

    fn opening() -> Move
    {
        Move::Place(Piece { player: Player::White, kind: Bug::Grasshopper, num: 1 }, None)
    }

    /// Replies to white's opening grasshopper by placing black's grasshopper on its west side.
    fn second_move(board: &Board) -> Option<Move>
    {
        let wg1 = Piece { player: Player::White, kind: Bug::Grasshopper, num: 1 };
        if board.location(&wg1) != Some(Point::ORIGIN)
        {
            return None;
        }

        let bg1 = Piece { player: Player::Black, kind: Bug::Grasshopper, num: 1 };
        Some(Move::Place(bg1, Some(NextTo { piece: wg1, direction: Some(Direction::West) })))
    }

    /// Follows up the book line by bringing white's queen into play, northeast of its
    /// grasshopper, provided black answered with the book's second move.
    fn third_move(board: &Board) -> Option<Move>
    {
        let wg1 = Piece { player: Player::White, kind: Bug::Grasshopper, num: 1 };
        let bg1 = Piece { player: Player::Black, kind: Bug::Grasshopper, num: 1 };

        if board.location(&wg1) != Some(Point::ORIGIN)
        {
            return None;
        }

        let expected_bg1 = Direction::West.apply(Point::ORIGIN.column());
        if board.location(&bg1).map(|at| at.column()) != Some(expected_bg1)
        {
            return None;
        }

        let wq = Piece { player: Player::White, kind: Bug::Queen, num: 1 };
        Some(Move::Place(wq, Some(NextTo { piece: wg1, direction: Some(Direction::Northeast) })))
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn empty_board_plays_the_opening_grasshopper()
    {
        let board = Board::new(Options::default());
        assert_eq!(OpeningBook::lookup(&board), Some(OpeningBook::opening()));
    }

    #[test]
    fn second_move_answers_with_the_book_line() -> Result<()>
    {
        let mut board = Board::new(Options::default());
        board.play(OpeningBook::lookup(&board).unwrap())?;

        let mv = OpeningBook::lookup(&board).unwrap();
        assert_eq!(mv.to_string(), "bG1 -wG1");
        Ok(())
    }

    #[test]
    fn third_move_brings_the_queen_out() -> Result<()>
    {
        let mut board = Board::new(Options::default());
        board.play(OpeningBook::lookup(&board).unwrap())?;
        board.play(OpeningBook::lookup(&board).unwrap())?;

        let mv = OpeningBook::lookup(&board).unwrap();
        assert_eq!(mv.to_string(), "wQ wG1/");
        Ok(())
    }

    #[test]
    fn a_deviating_line_falls_through_to_none()
    {
        let mut board = Board::new(Options::default());
        let ws1 = Piece { player: Player::White, kind: Bug::Spider, num: 1 };
        board.play(Move::Place(ws1, None)).unwrap();

        assert_eq!(OpeningBook::second_move(&board), None);
    }

    #[test]
    fn book_never_fires_past_the_third_half_move()
    {
        let mut board = Board::new(Options::default());
        for _ in 0..3
        {
            let mv = OpeningBook::lookup(&board).unwrap();
            board.play(mv).unwrap();
        }
        assert_eq!(OpeningBook::lookup(&board), None);
    }
}
