use std::collections::HashMap;

use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which side of the search window a transposition entry's value bounds.
pub enum Bound
{
    Exact,
    Lower,
    Upper,
}

#[derive(Clone, Copy, Debug)]
/// A cached negamax result for a single position. Field order is fixed project-wide so
/// every construction site lists them the same way; it's easy to transpose `value` and
/// `depth` by accident otherwise, and that bug is silent until the bound logic goes wrong.
pub struct TTEntry
{
    pub depth:      i32,
    pub value:      i32,
    pub bound:      Bound,
    pub best_move:  Option<Move>,
}

#[derive(Debug, Default)]
/// A cache from a position's Zobrist key to a previously computed search result.
///
/// Unbounded, since the search horizon here is shallow enough that memory is never the
/// bottleneck. Replacement keeps whichever of the old and new entries searched deeper,
/// since a deeper result subsumes a shallower one recorded at the same key.
pub struct TranspositionTable
{
    entries: HashMap<ZobristHash, TTEntry>,
}

impl TranspositionTable
{
    pub fn new() -> TranspositionTable
    {
        TranspositionTable::default()
    }

    /// Looks up the entry recorded for this position, if any.
    pub fn probe(&self, key: ZobristHash) -> Option<TTEntry>
    {
        self.entries.get(&key).copied()
    }

    /// Records a result, keeping whichever of the old and new entries searched deeper.
    pub fn store(&mut self, key: ZobristHash, entry: TTEntry)
    {
        match self.entries.get(&key)
        {
            | Some(existing) if existing.depth > entry.depth => {}
            | _ =>
            {
                self.entries.insert(key, entry);
            }
        }
    }

    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }
}
