use crate::prelude::*;

impl Board
{
    #[inline]
    /// Ensures a played piece belongs to the player moving this turn.
    pub(super) fn ensure_correct_player(&self, piece: &Piece) -> Result<()>
    {
        let to_move = self.to_move();
        if piece.player != to_move
        {
            let err = Error::new(
                Kind::InvalidState,
                format!("Cannot place or directly move a {} bug on {}'s turn.", piece.player, to_move),
            );
            return Err(err);
        }
        Ok(())
    }

    #[inline]
    /// Ensures that a bug can crawl across a single edge, per the slide constraint.
    pub(super) fn ensure_crawl(&self, from: Column, to: Column, ghosting: bool) -> Result<()>
    {
        self.field
            .ensure_constant_contact(from, to, ghosting)
            .and_then(|_| self.field.ensure_freedom_to_move(from, to, ghosting))
    }

    #[inline]
    /// Ensures the piece can be dropped here.
    pub(super) fn ensure_drop(&self, piece: &Piece, column: Column) -> Result<()>
    {
        let neighbours = self.neighbours(column);

        if self.field.len() >= 2
        {
            let Some(_) = neighbours.iter().find(|neighbour| neighbour.player == piece.player)
            else
            {
                let err = Error::new(Kind::InvalidState, format!("Column {:?} does not neighbour a friendly piece.", column));
                return Err(err);
            };

            if let Some(offending) = neighbours.iter().find(|neighbour| neighbour.player != piece.player)
            {
                let err = Error::new(Kind::InvalidState, format!("Column {:?} neighbours opposing piece {}.", column, offending));
                return Err(err);
            }
            Ok(())
        }
        else if self.field.len() == 1 && !hex::neighbours(Point::ORIGIN.column()).contains(&column)
        {
            let err = Error::new(Kind::InvalidState, "Must neighbour the starting piece.".into());
            Err(err)
        }
        else
        {
            Ok(())
        }
    }

    #[inline]
    /// Ensures the game has not already been decided. Once a queen is surrounded or a
    /// draw has been recorded, no further move may be played.
    pub(super) fn ensure_in_progress(&self) -> Result<()>
    {
        match self.winner()
        {
            | GameState::NotStarted | GameState::InProgress => Ok(()),
            | state =>
            {
                let err = Error::new(Kind::InvalidState, format!("The game has already ended ({}).", state));
                Err(err)
            }
        }
    }

    #[inline]
    /// Ensures the movement both starts and ends on the ground, but makes no other guarantees.
    pub(super) fn ensure_ground_movement(&self, from: Column, to: Column) -> Result<()>
    {
        let base = Error::new(Kind::LogicError, "This movement is required to start and end on the ground.".into());

        let height_f = self.field.height(from).unwrap_or(0);
        let height_t = self.field.height(to).map(|height| height + 1).unwrap_or(1);

        if height_f > 1
        {
            let err = Error::new(Kind::LogicError, format!("Starting stack is {} bugs tall.", height_f));
            return Err(err.chain(base));
        }

        if height_t > 1
        {
            let err = Error::new(Kind::LogicError, format!("Ending stack height would be {}.", height_t));
            return Err(err.chain(base));
        }

        Ok(())
    }

    #[inline]
    /// Ensures the piece being played has a lower discriminator than any other unplayed piece of the same bug type.
    pub(super) fn ensure_lowest_discriminator(&self, piece: &Piece) -> Result<()>
    {
        let Some(real_num) = self.pouch.peek(piece.player, piece.kind)
        else
        {
            let err = Error::new(Kind::InvalidState, format!("There are no more {}s to play.", piece.kind.long()));
            return Err(err);
        };

        if real_num != piece.num
        {
            let err = Error::new(
                Kind::MismatchError,
                format!(
                    "The next {} to place is {}, but tried to place {}.",
                    piece.kind.long(),
                    Piece { num: real_num, ..*piece },
                    piece
                ),
            );
            return Err(err);
        }
        Ok(())
    }

    #[inline]
    /// Ensures the destination column has no stack, or tells us what is on top of that stack.
    pub(super) fn ensure_no_stack(&self, column: Column) -> Result<()>
    {
        if let Some(top) = self.top(column)
        {
            let err = Error::new(
                Kind::InvalidState,
                format!("Column {:?} is already occupied by the stack ending in {}.", column, top),
            );
            return Err(err);
        }
        Ok(())
    }

    #[inline]
    pub(super) fn ensure_one_hive(&self, piece: &Piece) -> Result<()>
    {
        if self.is_pinned(piece)
        {
            return Err(Error::new(
                Kind::OneHivePrinciple,
                format!("Piece {} is pinned by the one hive principle.", piece),
            ));
        }
        Ok(())
    }

    #[inline]
    /// Ensures the piece is on top, provided it is in the hive.
    pub(super) fn ensure_on_top(&self, piece: &Piece) -> Result<()>
    {
        if !self.on_top(piece)
        {
            Err(Error::new(Kind::InvalidState, format!("Piece {} is not on the top of its stack.", piece)))
        }
        else
        {
            Ok(())
        }
    }

    #[inline]
    /// Ensures the queen is already in the Hive before any other piece may move.
    pub(super) fn ensure_pieces_can_move(&self) -> Result<()>
    {
        if self.queen(self.to_move()).is_none()
        {
            let err = Error::new(Kind::InvalidState, "Pieces cannot move before the queen is placed.".into());
            return Err(err);
        }
        Ok(())
    }

    #[inline]
    /// Ensures the piece is placed.
    pub(super) fn ensure_placed(&self, piece: &Piece) -> Result<()>
    {
        if !self.placed(piece)
        {
            Err(Error::new(Kind::InvalidState, format!("Piece {} is not in the Hive.", piece)))
        }
        else
        {
            Ok(())
        }
    }

    #[inline]
    /// Ensures this placement follows the constraints on when a queen can be placed into the Hive.
    pub(super) fn ensure_queen_placement(&self, piece: &Piece) -> Result<()>
    {
        let player_turn = self.ply() / 2 + 1;

        if player_turn == 1 && piece.kind == Bug::Queen
        {
            let err = Error::new(Kind::InvalidState, "The queen cannot be placed on the 1st turn.".into());
            return Err(err);
        }

        if player_turn == 4 && piece.kind != Bug::Queen && self.queen(piece.player).is_none()
        {
            let err = Error::new(Kind::InvalidState, "The queen must be placed by the end of the 4th turn.".into());
            return Err(err);
        }
        Ok(())
    }

    #[inline]
    /// Ensures the piece is not in the hive.
    pub(super) fn ensure_unplaced(&self, piece: &Piece) -> Result<()>
    {
        if self.placed(piece)
        {
            let at = self.location(piece).unwrap();
            let err = Error::new(Kind::InvalidState, format!("Piece {} is already in the hive at {}.", piece, at));
            Err(err)
        }
        else
        {
            Ok(())
        }
    }
}
