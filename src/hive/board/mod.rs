use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use crate::prelude::*;

mod ensures;
mod generate;
mod history;
mod state;
mod zobrist;

use history::Patch;
pub use history::{Entry, History};
pub use state::GameState;
pub use zobrist::ZobristHash;
use zobrist::ZobristTable;

pub(crate) mod consts
{
    pub const PIECES: usize = crate::prelude::piece::consts::COUNT as usize;
}
use consts::*;

#[derive(Clone, Debug, Default)]
/// Per-player bookkeeping that rides alongside the board: the positions this player has
/// moved into (for threefold-repetition detection) and how much of its clock it has used.
pub struct PlayerState
{
    pub hive_state_history: Vec<ZobristHash>,
    pub time_used_ms:       u32,
}

impl PlayerState
{
    /// True iff the last five entries show the same position recurring at offsets -1, -3, -5.
    fn saw_threefold_repetition(&self) -> bool
    {
        let n = self.hive_state_history.len();
        if n < 5
        {
            return false;
        }
        let a = self.hive_state_history[n - 1];
        let b = self.hive_state_history[n - 3];
        let c = self.hive_state_history[n - 5];
        a == b && b == c
    }
}

#[derive(Clone)]
/// The hive board and the game controller fused into one owning type: an unbounded
/// hex board of stacked pieces, plus the turn/roster/history bookkeeping needed to
/// make and unmake moves and to decide a winner.
pub struct Board
{
    /// The height-sensitive occupancy map, used for gate/slide/articulation queries.
    field: Field,

    /// The actual piece stacks, bottom to top, keyed by column.
    stacks: HashMap<Column, Vec<Piece>>,

    /// Fast reverse lookup from a piece's identity to its current point, if played.
    locations: [Option<Point>; PIECES],

    /// The linear move history, which can undo back to the start of the game.
    history: History,

    /// The options that apply to this game: its enabled expansions.
    options: Options,

    /// Pieces not yet placed.
    pouch: Pouch,

    /// Per-player repetition/clock bookkeeping, indexed by `Player as usize`.
    players: [PlayerState; 2],

    /// A utility to calculate Zobrist hashes for this board.
    zobrist: ZobristTable,
}

impl Default for Board
{
    fn default() -> Self
    {
        Board::new(Options::default())
    }
}

impl std::fmt::Debug for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "Board(ply={}, to_move={})", self.ply(), self.to_move())
    }
}

impl std::fmt::Display for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "Board")?;
        let mut columns: Vec<&Column> = self.stacks.keys().collect();
        columns.sort();
        for column in columns
        {
            let stack = &self.stacks[column];
            let rendered = stack.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(",");
            write!(f, "\n\t{:?}: [{}]", column, rendered)?;
        }
        Ok(())
    }
}

impl std::hash::Hash for Board
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H)
    {
        self.zobrist.get().hash(state)
    }
}

impl Board
{
    /// Creates a new, empty board with the given options.
    pub fn new(options: Options) -> Board
    {
        Board {
            field: Field::default(),
            stacks: HashMap::new(),
            locations: [None; PIECES],
            history: History::default(),
            options,
            pouch: Pouch::new(options),
            players: [PlayerState::default(), PlayerState::default()],
            zobrist: ZobristTable::default(),
        }
    }

    /// Creates a new, empty board with a deterministic Zobrist seed, for reproducible tests.
    pub fn seeded(options: Options, seed: u64) -> Board
    {
        let mut board = Board::new(options);
        board.zobrist = ZobristTable::seeded(seed);
        board
    }

    /// Gets the options configured for this game.
    pub fn options(&self) -> Options
    {
        self.options
    }

    /// Gets the pouch of unplayed pieces for this game.
    pub fn pouch(&self) -> &Pouch
    {
        &self.pouch
    }

    /// Gets the move history of this game.
    pub fn history(&self) -> &History
    {
        &self.history
    }

    /// Gets this player's repetition/clock bookkeeping.
    pub fn player(&self, player: Player) -> &PlayerState
    {
        &self.players[player as usize]
    }

    /// The number of half-moves (plies) played so far. A fresh board is at ply 0.
    pub fn ply(&self) -> u32
    {
        self.history.len() as u32
    }

    /// The player to move.
    pub fn to_move(&self) -> Player
    {
        Player::new((self.ply() % 2) as u8)
    }

    /// Gets the key corresponding to the current position.
    pub fn zobrist(&self) -> ZobristHash
    {
        self.zobrist.get()
    }

    /// Returns the field backing this board's occupancy/gate/slide queries.
    pub fn field(&self) -> &Field
    {
        &self.field
    }

    /// Every piece identity that could ever appear for this game's enabled expansions.
    pub fn roster(&self, player: Player) -> impl Iterator<Item = Piece> + '_
    {
        Piece::all().filter(move |p| p.player == player && p.kind.enabled(&self.options))
    }

    /// Returns the piece at the top of the given column's stack, if any.
    pub fn top(&self, column: Column) -> Option<Piece>
    {
        self.stacks.get(&column).and_then(|s| s.last().copied())
    }

    /// Returns the full stack at a column, bottom to top.
    pub fn pieces_at(&self, column: Column) -> &[Piece]
    {
        self.stacks.get(&column).map(|s| s.as_slice()).unwrap_or(&[])
    }

    /// Returns the point a piece currently occupies, if it has been played.
    pub fn location(&self, piece: &Piece) -> Option<Point>
    {
        self.locations[piece.index() as usize]
    }

    /// Whether the piece has been played (point != NONE).
    pub fn placed(&self, piece: &Piece) -> bool
    {
        self.locations[piece.index() as usize].is_some()
    }

    /// Whether the piece is at the top of whichever stack it occupies.
    pub fn on_top(&self, piece: &Piece) -> bool
    {
        match self.location(piece)
        {
            | Some(at) => self.top(at.column()) == Some(*piece),
            | None => false,
        }
    }

    /// Whether this piece cannot legally move: it is buried under another piece, or it
    /// is the lone piece of its column and lifting it would disconnect the hive.
    pub fn is_pinned(&self, piece: &Piece) -> bool
    {
        let Some(at) = self.location(piece)
        else
        {
            return false;
        };

        if !self.on_top(piece)
        {
            return true;
        }

        if self.field.height(at.column()).unwrap_or(0) > 1
        {
            return false;
        }

        self.field.find_pins().contains(&at.column())
    }

    /// Returns the top pieces neighbouring a given column.
    pub fn neighbours(&self, column: Column) -> HashSet<Piece>
    {
        hex::neighbours(column).into_iter().filter_map(|c| self.top(c)).collect()
    }

    /// Finds the location of a player's queen, if it has been placed.
    pub fn queen(&self, player: Player) -> Option<Point>
    {
        self.location(&Piece {
            player,
            kind: Bug::Queen,
            num: 1,
        })
    }

    /// Queens whose six neighbouring columns are all occupied.
    pub fn surrounded_queen_colors(&self) -> Vec<Player>
    {
        [Player::White, Player::Black]
            .into_iter()
            .filter(|player| {
                self.queen(*player)
                    .map(|at| hex::neighbours(at.column()).iter().all(|c| self.field.contains(*c)))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Whether a ground-level column is locked behind a gate (5 or 6 occupied neighbours).
    pub fn is_in_gate(&self, column: Column) -> bool
    {
        self.field.is_gated(column)
    }

    /// Whether any two cyclically-consecutive neighbours of this column are both empty.
    /// A ground-sliding piece needs this to leave the column at all.
    pub fn has_two_empty_adjacent(&self, column: Column) -> bool
    {
        hex::neighbours(column)
            .into_iter()
            .circular_tuple_windows()
            .any(|(a, b)| !self.field.contains(a) && !self.field.contains(b))
    }

    /// The set of empty columns legal to receive a fresh placement for the given color:
    /// adjacent to at least one of that color's pieces, and adjacent to none of the
    /// opponent's, except the trivial empty-board and single-piece-board cases.
    pub fn entry_points(&self, player: Player) -> HashSet<Point>
    {
        if self.field.is_empty()
        {
            return HashSet::from([Point::ORIGIN]);
        }

        if self.field.len() == 1
        {
            let (&only, _) = self.stacks.iter().next().unwrap();
            return hex::neighbours(only).into_iter().map(Point::at).collect();
        }

        self.placement_columns(player).into_iter().map(Point::at).collect()
    }

    /// The columns a fresh placement of `player`'s color may land on, given >= 2 pieces
    /// already on the board. Shared by `entry_points` and the drop-legality check.
    pub(super) fn placement_columns(&self, player: Player) -> HashSet<Column>
    {
        let perimeter: HashSet<Column> = self.field.perimeter(None).0.into();
        perimeter
            .into_iter()
            .filter(|c| {
                let neighbours = self.neighbours(*c);
                neighbours.iter().any(|p| p.player == player) && neighbours.iter().all(|p| p.player == player)
            })
            .collect()
    }

    /// Validates a move against this position without applying it.
    pub fn check(&self, mv: &Move) -> Result<()>
    {
        self.ensure_in_progress()?;

        match mv
        {
            | Move::Place(piece, nextto) =>
            {
                let column = self.resolve(nextto.as_ref());
                self.can_place(piece, column)
            }
            | Move::Relocate(piece, nextto) =>
            {
                let column = self.resolve(Some(nextto));
                self.can_move(piece, column)
            }
            | Move::Pass => self.can_pass(),
        }
    }

    /// Validates and applies a move, appending it to the history.
    pub fn play(&mut self, mv: Move) -> Result<ZobristHash>
    {
        self.check(&mv)?;
        Ok(self.play_unchecked(mv))
    }

    /// Applies a move without validating it. Assumes `Board::check()`.
    pub fn play_unchecked(&mut self, mv: Move) -> ZobristHash
    {
        let patch = match mv
        {
            | Move::Place(piece, nextto) =>
            {
                let column = self.resolve(nextto.as_ref());
                self.pouch.take(piece.player, piece.kind);
                let at = self.settle(piece, column);
                Some(Patch { piece, from: None, to: at })
            }
            | Move::Relocate(piece, nextto) =>
            {
                let column = self.resolve(Some(&nextto));
                let from = self.lift(&piece);
                let to = self.settle(piece, column);
                Some(Patch { piece, from: Some(from), to })
            }
            | Move::Pass => None,
        };

        let mover = self.to_move();
        self.history.play(Entry { mv, patch });
        self.zobrist.next();
        self.players[mover as usize].hive_state_history.push(self.zobrist.get());

        self.zobrist.get()
    }

    /// Undoes the most recently played move, if one exists.
    pub fn unmake(&mut self) -> Result<ZobristHash>
    {
        let Some(entry) = self.history.prev()
        else
        {
            return Err(Error::new(Kind::InternalError, "No move to undo.".into()));
        };

        match entry.mv
        {
            | Move::Place(piece, _) =>
            {
                self.lift(&piece);
                self.pouch.put(piece);
            }
            | Move::Relocate(piece, _) =>
            {
                self.lift(&piece);
                let from = entry.patch.unwrap().from.unwrap();
                self.settle(piece, from.column());
            }
            | Move::Pass =>
            {}
        }

        self.zobrist.prev();
        let mover = Player::new(((self.ply() - 1) % 2) as u8);
        self.players[mover as usize].hive_state_history.pop();
        self.history.undo();

        Ok(self.zobrist.get())
    }

    /// Determines the winner, if any, of the current position.
    pub fn winner(&self) -> GameState
    {
        if self.ply() == 0
        {
            return GameState::NotStarted;
        }

        let surrounded = self.surrounded_queen_colors();
        match (surrounded.contains(&Player::White), surrounded.contains(&Player::Black))
        {
            | (true, true) => GameState::Draw,
            | (false, true) => GameState::WhiteWins,
            | (true, false) => GameState::BlackWins,
            | (false, false) =>
            {
                if self.players[self.to_move() as usize].saw_threefold_repetition()
                {
                    GameState::Draw
                }
                else
                {
                    GameState::InProgress
                }
            }
        }
    }
}

/// Private low-level mutation primitives.
impl Board
{
    /// Removes a piece from the top of its column, updating the field and Zobrist hash.
    /// Assumes the piece is played and on top. Returns its prior point.
    fn lift(&mut self, piece: &Piece) -> Point
    {
        let at = self.locations[piece.index() as usize].take().expect("lift of an unplayed piece");
        let column = at.column();

        let stack = self.stacks.get_mut(&column).expect("lift from an empty column");
        stack.pop();
        if stack.is_empty()
        {
            self.stacks.remove(&column);
        }

        self.field.pop(column);
        self.zobrist.hash(piece, at);

        at
    }

    /// Places a piece atop a column's stack, updating the field and Zobrist hash.
    fn settle(&mut self, piece: Piece, column: Column) -> Point
    {
        let z = self.field.height(column).unwrap_or(0);
        let at = Point::new(column.0, column.1, z);

        self.field.push(column);
        self.stacks.entry(column).or_default().push(piece);
        self.locations[piece.index() as usize] = Some(at);
        self.zobrist.hash(&piece, at);

        at
    }

    /// Resolves a move's destination reference into a column.
    fn resolve(&self, nextto: Option<&NextTo>) -> Column
    {
        match nextto
        {
            | Some(NextTo { piece, direction }) =>
            {
                let anchor = self.location(piece).expect("reference piece is not in the hive");
                match direction
                {
                    | Some(d) => d.apply(anchor.column()),
                    | None => anchor.column(),
                }
            }
            | None => Point::ORIGIN.column(),
        }
    }

    /// Passing is only legal when the side to move has no other legal move.
    fn can_pass(&self) -> Result<()>
    {
        if self.legal_moves().is_empty()
        {
            Ok(())
        }
        else
        {
            Err(Error::new(Kind::InvalidMove, "Cannot pass while a legal move exists.".into()))
        }
    }

    /// A piece can be placed if it is in the pouch, there is no lower-discriminator piece
    /// of the same kind unplaced, its target column is unoccupied, and (once two or more
    /// pieces are on the board) it touches only friendly pieces.
    fn can_place(&self, piece: &Piece, column: Column) -> Result<()>
    {
        let base = Error::new(Kind::InvalidMove, format!("Cannot place {} at {:?}.", piece, column));
        (|| {
            self.ensure_queen_placement(piece)?;
            self.ensure_correct_player(piece)?;
            self.ensure_unplaced(piece)?;
            self.ensure_lowest_discriminator(piece)?;
            self.ensure_no_stack(column)?;
            self.ensure_drop(piece, column)
        })()
        .map_err(|err: Error| err.chain(base))
    }

    /// A piece can move if it is in the hive, on top of its stack, not pinned, and the
    /// destination is one its kind can legally reach.
    fn can_move(&self, piece: &Piece, column: Column) -> Result<()>
    {
        let base = Error::new(Kind::InvalidMove, format!("Cannot move {} to {:?}.", piece, column));
        (|| {
            self.ensure_pieces_can_move()?;
            self.ensure_correct_player(piece)?;
            self.ensure_placed(piece)?;
            self.ensure_on_top(piece)?;
            self.ensure_one_hive(piece)?;

            let destinations = self.legal_destinations(piece);
            if destinations.contains(&Point::at(column)) || destinations.iter().any(|p| p.column() == column)
            {
                Ok(())
            }
            else
            {
                Err(Error::new(Kind::LogicError, format!("{:?} is not a legal destination for {}.", column, piece)))
            }
        })()
        .map_err(|err: Error| err.chain(base))
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
    fn empty_board_only_allows_origin_placement()
    {
        let board = Board::new(Options::default());
        let entries = board.entry_points(Player::White);
        assert_eq!(entries, HashSet::from([Point::ORIGIN]));
    }

    #[test]
    fn single_piece_hive_gives_all_six_neighbours_to_either_side()
    {
        let mut board = Board::new(Options::default());
        board.play(Move::Place(piece(Player::White, Bug::Grasshopper, 1), None)).unwrap();

        let expected: HashSet<Point> = hex::neighbours(Point::ORIGIN.column()).into_iter().map(Point::at).collect();
        assert_eq!(board.entry_points(Player::Black), expected);
        assert_eq!(board.entry_points(Player::White), expected);
    }

    #[test]
    fn make_then_unmake_restores_the_position_exactly()
    {
        let mut board = Board::new(Options::default());
        let wg1 = piece(Player::White, Bug::Grasshopper, 1);
        board.play(Move::Place(wg1, None)).unwrap();

        let before_hash = board.zobrist();
        let before_ply = board.ply();
        let before_location = board.location(&wg1);
        let before_white_history = board.players[Player::White as usize].hive_state_history.clone();
        let before_black_history = board.players[Player::Black as usize].hive_state_history.clone();

        let bg1 = piece(Player::Black, Bug::Grasshopper, 1);
        let mv = Move::Place(bg1, Some(NextTo { piece: wg1, direction: Some(Direction::West) }));
        board.play(mv).unwrap();
        board.unmake().unwrap();

        assert_eq!(board.zobrist(), before_hash);
        assert_eq!(board.ply(), before_ply);
        assert_eq!(board.location(&wg1), before_location);
        assert_eq!(board.placed(&bg1), false);
        assert_eq!(board.players[Player::White as usize].hive_state_history, before_white_history);
        assert_eq!(board.players[Player::Black as usize].hive_state_history, before_black_history);
    }

    #[test]
    fn pinned_piece_under_a_beetle_has_no_destinations()
    {
        let mut board = Board::new(Options::default());
        let wq = piece(Player::White, Bug::Queen, 1);
        let bq = piece(Player::Black, Bug::Queen, 1);
        let wb = piece(Player::White, Bug::Beetle, 1);

        board.play_unchecked(Move::Place(wq, None));
        board.play_unchecked(Move::Place(bq, Some(NextTo { piece: wq, direction: Some(Direction::West) })));
        board.play(Move::Place(wb, Some(NextTo { piece: wq, direction: Some(Direction::East) }))).unwrap();
        board.play(Move::Place(piece(Player::Black, Bug::Grasshopper, 1), Some(NextTo { piece: bq, direction: Some(Direction::West) }))).unwrap();
        board.play(Move::Relocate(wb, NextTo { piece: wq, direction: None })).unwrap();

        assert!(board.is_pinned(&wq));
        assert!(board.legal_destinations(&wq).is_empty());
        assert!(!board.legal_destinations(&wb).is_empty());
    }
}
