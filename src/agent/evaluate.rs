use std::collections::HashSet;

use crate::prelude::*;

/// Returns a signed static score for the position, positive favoring White.
pub fn evaluate(board: &Board) -> i32
{
    eval_player(board, Player::White) - eval_player(board, Player::Black)
}

fn eval_player(board: &Board, player: Player) -> i32
{
    let mut score = entry_point_bonus(board, player) + queen_component(board, player);

    for kind in [Bug::Spider, Bug::Beetle, Bug::Grasshopper, Bug::Ant]
    {
        for num in 1..=kind.extent()
        {
            let piece = Piece { player, kind, num };
            if !board.placed(&piece)
            {
                continue;
            }

            if board.is_pinned(&piece)
            {
                score -= piece_value(kind);
            }

            if let Some(opp_queen) = board.queen(player.flip())
            {
                let at = board.location(&piece).unwrap();
                let distance = hex::distance(at.column(), opp_queen.column());
                score += tropism(kind, distance);
            }
        }
    }

    score
}

/// Entry points not already adjacent to a player's own queen are worth a small bonus, for
/// the mobility they keep open to bring reserve pieces into play. Skipped once the
/// reserve is empty, since there's nothing left to drop on them.
fn entry_point_bonus(board: &Board, player: Player) -> i32
{
    if board.pouch().hand(player).iter().all(|&remaining| remaining == 0)
    {
        return 0;
    }

    let queen_neighbours: HashSet<Point> = match board.queen(player)
    {
        | Some(at) => hex::neighbours(at.column()).into_iter().map(Point::at).collect(),
        | None => HashSet::new(),
    };

    let open = board.entry_points(player).iter().filter(|entry| !queen_neighbours.contains(entry)).count();

    open as i32 * ENTRY_POINT_SCORE
}

/// The queen's pin penalty, its safety score by occupied-neighbour count, and the bonus
/// for each neighbouring gate whose two flank columns are controlled (occupied by a
/// friendly or pinned piece).
fn queen_component(board: &Board, player: Player) -> i32
{
    let Some(at) = board.queen(player)
    else
    {
        return 0;
    };

    let mut score = 0;
    let queen = Piece { player, kind: Bug::Queen, num: 1 };

    if board.is_pinned(&queen)
    {
        score -= piece_value(Bug::Queen);
    }

    let occupied = board.neighbours(at.column()).len().min(6);
    score += QUEEN_SAFETY_SCORES[occupied];

    for neighbour in hex::neighbours(at.column())
    {
        if !board.is_in_gate(neighbour)
        {
            continue;
        }

        let Some((cw, ccw)) = hex::common_neighbours(at.column(), neighbour)
        else
        {
            continue;
        };

        let controlled = |column: Column| -> bool {
            board.top(column).map(|p| p.player == player || board.is_pinned(&p)).unwrap_or(false)
        };

        if controlled(cw) && controlled(ccw)
        {
            score += QUEEN_GATE_SCORE;
        }
    }

    score
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn empty_board_evaluates_to_zero()
    {
        let board = Board::new(Options::default());
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn reserve_entry_points_are_only_counted_while_pieces_remain() -> Result<()>
    {
        let mut board = Board::new(Options::default());
        let wq = Piece { player: Player::White, kind: Bug::Queen, num: 1 };
        board.play_unchecked(Move::Place(wq, None));

        assert!(board.pouch().hand(Player::White).iter().any(|&n| n > 0));
        assert!(entry_point_bonus(&board, Player::White) >= 0);
        Ok(())
    }

    #[test]
    fn a_pinned_queen_is_penalized() -> Result<()>
    {
        let mut board = Board::new(Options::default());
        let wq = Piece { player: Player::White, kind: Bug::Queen, num: 1 };
        let bq = Piece { player: Player::Black, kind: Bug::Queen, num: 1 };
        let wb = Piece { player: Player::White, kind: Bug::Beetle, num: 1 };
        let bg = Piece { player: Player::Black, kind: Bug::Grasshopper, num: 1 };

        board.play_unchecked(Move::Place(wq, None));
        board.play_unchecked(Move::Place(bq, Some(NextTo { piece: wq, direction: Some(Direction::West) })));
        board.play(Move::Place(wb, Some(NextTo { piece: wq, direction: Some(Direction::East) })))?;
        board.play(Move::Place(bg, Some(NextTo { piece: bq, direction: Some(Direction::West) })))?;
        board.play(Move::Relocate(wb, NextTo { piece: wq, direction: None }))?;

        assert!(board.is_pinned(&wq));
        assert!(eval_player(&board, Player::White) < 0);
        Ok(())
    }
}
