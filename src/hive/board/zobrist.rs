use std::collections::HashMap;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::prelude::*;

/// A rolling position hash: the XOR of every occupied piece's per-point key, plus the
/// side-to-move key when Black is to move.
pub type ZobristHash = u64;

#[derive(Clone, Debug)]
/// Lazily-allocated Zobrist keys for an unbounded board.
///
/// A fixed-size precomputed table (as the bounded board used) can't be sized up front
/// here, since the coordinate space has no upper bound. Instead each observed
/// `(color, kind, point)` triple is assigned a random 64-bit key the first time it is
/// seen, and that key is reused for the life of the table.
pub struct ZobristTable
{
    keys:     HashMap<(Player, Bug, Point), u64>,
    side_key: u64,
    current:  ZobristHash,
    rng:      StdRng,
}

impl Default for ZobristTable
{
    fn default() -> Self
    {
        ZobristTable::new()
    }
}

impl ZobristTable
{
    /// Creates a table seeded from OS entropy.
    pub fn new() -> ZobristTable
    {
        let mut rng = StdRng::from_entropy();
        let side_key = rng.gen();
        ZobristTable { keys: HashMap::new(), side_key, current: 0, rng }
    }

    /// Creates a table seeded deterministically, so tests can reproduce a given run.
    pub fn seeded(seed: u64) -> ZobristTable
    {
        let mut rng = StdRng::seed_from_u64(seed);
        let side_key = rng.gen();
        ZobristTable { keys: HashMap::new(), side_key, current: 0, rng }
    }

    /// Gets the hash associated with the current state.
    pub fn get(&self) -> ZobristHash
    {
        self.current
    }

    /// Hashes a piece into or out of its current point. The operation is symmetric.
    pub fn hash(&mut self, piece: &Piece, at: Point) -> &mut Self
    {
        let key = (piece.player, piece.kind, at);
        let bitstring = *self.keys.entry(key).or_insert_with(|| self.rng.gen());
        self.current ^= bitstring;
        self
    }

    #[allow(clippy::should_implement_trait)]
    /// Advances to the next player to move, by XOR-ing in the side key.
    pub fn next(&mut self) -> &mut Self
    {
        self.current ^= self.side_key;
        self
    }

    /// Reverses to the previous player to move. XOR is its own inverse.
    pub fn prev(&mut self) -> &mut Self
    {
        self.next()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn hashing_a_piece_twice_is_the_identity()
    {
        let mut table = ZobristTable::seeded(7);
        let piece = Piece { player: Player::White, kind: Bug::Queen, num: 1 };
        let point = Point::new(0, 0, 0);

        let before = table.get();
        table.hash(&piece, point);
        table.hash(&piece, point);
        assert_eq!(table.get(), before);
    }

    #[test]
    fn same_seed_produces_the_same_keys()
    {
        let mut a = ZobristTable::seeded(42);
        let mut b = ZobristTable::seeded(42);
        let piece = Piece { player: Player::Black, kind: Bug::Ant, num: 2 };
        let point = Point::new(3, -1, 0);

        a.hash(&piece, point);
        b.hash(&piece, point);
        assert_eq!(a.get(), b.get());
    }

    #[test]
    fn side_key_toggles_and_restores()
    {
        let mut table = ZobristTable::seeded(1);
        let before = table.get();
        table.next();
        assert_ne!(table.get(), before);
        table.prev();
        assert_eq!(table.get(), before);
    }
}
