use std::collections::HashSet;

use crate::prelude::*;

impl Board
{
    /// Returns every legal destination for a piece, whether it is already on the board
    /// (a relocation) or still in the reserve (a placement).
    pub fn legal_destinations(&self, piece: &Piece) -> HashSet<Point>
    {
        if self.placed(piece)
        {
            if !self.on_top(piece) || self.is_pinned(piece)
            {
                return HashSet::new();
            }
            self.legal_destinations_as(piece, piece.kind)
        }
        else
        {
            self.entry_points(piece.player)
        }
    }

    /// Every legal move available to the side to move.
    pub fn legal_moves(&self) -> Vec<Move>
    {
        let to_move = self.to_move();
        let player_turn = self.ply() / 2 + 1;
        let must_place_queen_now = player_turn == 4 && self.queen(to_move).is_none();
        let may_move_pieces = self.queen(to_move).is_some();

        let mut moves = Vec::new();

        for piece in self.roster(to_move)
        {
            if self.placed(&piece)
            {
                if !may_move_pieces || must_place_queen_now
                {
                    continue;
                }
                for at in self.legal_destinations(&piece)
                {
                    moves.push(Move::Relocate(piece, self.reference(&piece, at.column())));
                }
            }
            else
            {
                if player_turn == 1 && piece.kind == Bug::Queen
                {
                    continue;
                }
                if must_place_queen_now && piece.kind != Bug::Queen
                {
                    continue;
                }
                if self.pouch.peek(piece.player, piece.kind) != Some(piece.num)
                {
                    continue;
                }

                for at in self.entry_points(to_move)
                {
                    if self.ply() == 0
                    {
                        moves.push(Move::Place(piece, None));
                    }
                    else
                    {
                        moves.push(Move::Place(piece, Some(self.reference(&piece, at.column()))));
                    }
                }
            }
        }

        if moves.is_empty() && self.ply() > 0
        {
            moves.push(Move::Pass);
        }

        moves
    }

    /// Reconstructs an anchor-and-direction reference for a destination column: climbing
    /// onto an occupied column references its current occupant directly, otherwise the
    /// first neighbouring piece (other than the mover itself) supplies an anchor and a
    /// direction marker.
    fn reference(&self, moving: &Piece, to: Column) -> NextTo
    {
        if let Some(top) = self.top(to)
        {
            if top != *moving
            {
                return NextTo { piece: top, direction: None };
            }
        }

        for neighbour in hex::neighbours(to)
        {
            if let Some(anchor) = self.top(neighbour)
            {
                if anchor == *moving
                {
                    continue;
                }
                if let Some(direction) = Direction::to(neighbour, to)
                {
                    return NextTo { piece: anchor, direction: Some(direction) };
                }
            }
        }

        unreachable!("every legal destination neighbours at least one other piece")
    }

    fn legal_destinations_as(&self, piece: &Piece, kind: Bug) -> HashSet<Point>
    {
        match kind
        {
            | Bug::Queen => self.queen_destinations(piece),
            | Bug::Spider => self.spider_destinations(piece),
            | Bug::Ant => self.ant_destinations(piece),
            | Bug::Grasshopper => self.grasshopper_destinations(piece),
            | Bug::Beetle => self.beetle_destinations(piece),
            | Bug::Ladybug => self.ladybug_destinations(piece),
            | Bug::Mosquito => self.mosquito_destinations(piece),
        }
    }

    fn queen_destinations(&self, piece: &Piece) -> HashSet<Point>
    {
        let from = self.location(piece).unwrap().column();
        self.field.find_crawls(from, Some(1)).into_iter().map(Point::at).collect()
    }

    fn spider_destinations(&self, piece: &Piece) -> HashSet<Point>
    {
        let from = self.location(piece).unwrap().column();
        self.field.find_crawls(from, Some(3)).into_iter().map(Point::at).collect()
    }

    fn ant_destinations(&self, piece: &Piece) -> HashSet<Point>
    {
        let from = self.location(piece).unwrap().column();
        self.field.find_crawls(from, None).into_iter().map(Point::at).collect()
    }

    /// A grasshopper jumps in a straight line over however many occupied columns sit in
    /// front of it (any height), landing on the ground at the first empty one.
    fn grasshopper_destinations(&self, piece: &Piece) -> HashSet<Point>
    {
        let from = self.location(piece).unwrap().column();
        let mut destinations = HashSet::new();

        for direction in Direction::all()
        {
            let mut cursor = direction.apply(from);
            if !self.field.contains(cursor)
            {
                continue;
            }
            while self.field.contains(cursor)
            {
                cursor = direction.apply(cursor);
            }
            destinations.insert(Point::at(cursor));
        }

        destinations
    }

    /// A beetle steps onto any neighbouring column, climbing or descending freely subject
    /// to the climb-gate rule, but a step onto empty ground must keep the hive connected.
    fn beetle_destinations(&self, piece: &Piece) -> HashSet<Point>
    {
        let from = self.location(piece).unwrap().column();
        let mut destinations = HashSet::new();

        for to in hex::neighbours(from)
        {
            if !self.field.contains(to) && !self.keeps_hive_contact(to, from)
            {
                continue;
            }
            if self.ensure_crawl(from, to, false).is_err()
            {
                continue;
            }
            let z = self.field.height(to).unwrap_or(0);
            destinations.insert(Point::new(to.0, to.1, z));
        }

        destinations
    }

    /// A ladybug climbs onto the hive, takes one further step across its top, then
    /// descends onto an empty ground hex. Only the third step is a real placement; the
    /// two climbing steps are simulated with `ghosting` since the piece hasn't physically
    /// moved onto the hive yet.
    fn ladybug_destinations(&self, piece: &Piece) -> HashSet<Point>
    {
        let from = self.location(piece).unwrap().column();
        let mut destinations = HashSet::new();

        for onto in hex::neighbours(from)
        {
            if !self.field.contains(onto) || self.ensure_crawl(from, onto, false).is_err()
            {
                continue;
            }

            for ontop in hex::neighbours(onto)
            {
                if ontop == from || !self.field.contains(ontop) || self.ensure_crawl(onto, ontop, true).is_err()
                {
                    continue;
                }

                for down in hex::neighbours(ontop)
                {
                    if down == from || down == onto || self.field.contains(down)
                    {
                        continue;
                    }
                    if self.ensure_crawl(ontop, down, true).is_err()
                    {
                        continue;
                    }
                    if !self.keeps_hive_contact(down, from)
                    {
                        continue;
                    }
                    destinations.insert(Point::at(down));
                }
            }
        }

        destinations
    }

    /// When perched atop a stack, a mosquito moves exactly like a beetle. Otherwise it
    /// moves as the union of every move available to the bug kinds occupying its
    /// ground-level neighbours, always pivoting from its own actual location.
    fn mosquito_destinations(&self, piece: &Piece) -> HashSet<Point>
    {
        let from = self.location(piece).unwrap().column();

        if self.field.height(from).unwrap_or(1) > 1
        {
            return self.beetle_destinations(piece);
        }

        let mut destinations = HashSet::new();
        for neighbour in self.neighbours(from)
        {
            if neighbour.kind == Bug::Mosquito
            {
                continue;
            }
            destinations.extend(self.legal_destinations_as(piece, neighbour.kind));
        }

        destinations
    }

    /// Whether `to` would still touch the rest of the hive after `departing` is vacated,
    /// as opposed to merely touching the piece that is about to leave it.
    fn keeps_hive_contact(&self, to: Column, departing: Column) -> bool
    {
        hex::neighbours(to).into_iter().any(|n| self.column_occupied_excluding(n, departing))
    }

    /// Whether `column` would remain occupied once `excluding` has lost exactly one
    /// occupant (its topmost piece is about to leave it).
    fn column_occupied_excluding(&self, column: Column, excluding: Column) -> bool
    {
        if column == excluding
        {
            self.field.height(column).unwrap_or(0) > 1
        }
        else
        {
            self.field.contains(column)
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn piece(player: Player, kind: Bug, num: u8) -> Piece
    {
        Piece { player, kind, num }
    }

    #[test]
    fn queen_destinations_are_adjacent_empty_ground_hexes()
    {
        let mut board = Board::new(Options::default());
        let wq = piece(Player::White, Bug::Queen, 1);
        let bq = piece(Player::Black, Bug::Queen, 1);
        board.play_unchecked(Move::Place(wq, None));
        board.play_unchecked(Move::Place(bq, Some(NextTo { piece: wq, direction: Some(Direction::West) })));

        let destinations = board.legal_destinations(&wq);
        assert!(!destinations.is_empty());
        for at in destinations
        {
            assert_eq!(at.z, 0);
        }
    }

    #[test]
    fn grasshopper_jumps_over_a_chain_to_the_first_gap()
    {
        let mut board = Board::new(Options::default());
        let wq = piece(Player::White, Bug::Queen, 1);
        let bq = piece(Player::Black, Bug::Queen, 1);
        let wg = piece(Player::White, Bug::Grasshopper, 1);

        board.play_unchecked(Move::Place(wq, None));
        board.play_unchecked(Move::Place(bq, Some(NextTo { piece: wq, direction: Some(Direction::West) })));
        board.play(Move::Place(wg, Some(NextTo { piece: wq, direction: Some(Direction::East) }))).unwrap();
        board
            .play(Move::Place(piece(Player::Black, Bug::Ant, 1), Some(NextTo { piece: bq, direction: Some(Direction::West) })))
            .unwrap();

        let from = board.location(&wg).unwrap().column();
        let over = Direction::West.apply(from);
        assert_eq!(over, board.location(&wq).unwrap().column());

        let destinations = board.legal_destinations(&wg);
        let landing = Direction::West.apply(over);
        assert!(destinations.contains(&Point::at(landing)));
    }

    #[test]
    fn beetle_can_climb_onto_an_adjacent_piece()
    {
        let mut board = Board::new(Options::default());
        let wq = piece(Player::White, Bug::Queen, 1);
        let bq = piece(Player::Black, Bug::Queen, 1);
        let wb = piece(Player::White, Bug::Beetle, 1);

        board.play_unchecked(Move::Place(wq, None));
        board.play_unchecked(Move::Place(bq, Some(NextTo { piece: wq, direction: Some(Direction::West) })));
        board.play(Move::Place(wb, Some(NextTo { piece: wq, direction: Some(Direction::East) }))).unwrap();
        board
            .play(Move::Place(piece(Player::Black, Bug::Ant, 1), Some(NextTo { piece: bq, direction: Some(Direction::West) })))
            .unwrap();

        let destinations = board.legal_destinations(&wb);
        let on_queen = board.location(&wq).unwrap();
        assert!(destinations.contains(&Point::new(on_queen.x, on_queen.y, 1)));
    }

    #[test]
    fn ant_destinations_never_include_its_own_starting_hex()
    {
        let mut board = Board::new(Options::default());
        let wq = piece(Player::White, Bug::Queen, 1);
        let bq = piece(Player::Black, Bug::Queen, 1);
        let wa = piece(Player::White, Bug::Ant, 1);

        board.play_unchecked(Move::Place(wq, None));
        board.play_unchecked(Move::Place(bq, Some(NextTo { piece: wq, direction: Some(Direction::West) })));
        board.play(Move::Place(wa, Some(NextTo { piece: wq, direction: Some(Direction::East) }))).unwrap();
        board
            .play(Move::Place(piece(Player::Black, Bug::Ant, 1), Some(NextTo { piece: bq, direction: Some(Direction::West) })))
            .unwrap();

        let from = board.location(&wa).unwrap();
        let destinations = board.legal_destinations(&wa);
        assert!(!destinations.is_empty());
        assert!(!destinations.contains(&from));
    }
}
