use crate::prelude::*;

/// Score magnitude assigned to a detected win, biased by the remaining search depth so
/// that a forced win found with more depth left (i.e. sooner) outranks a deeper one.
pub const WIN_SCORE: i32 = (1 << 15) - 1;

/// Fixed return value for a drawn position, taken from the mover's own perspective.
pub const DRAW_SCORE: i32 = 5;

/// Bonus per uncontested entry point still open to a player with pieces left in reserve.
pub const ENTRY_POINT_SCORE: i32 = 1;

/// Bonus for a gate neighbouring the queen whose flanks are both controlled.
pub const QUEEN_GATE_SCORE: i32 = 10;

/// Indexed by the number of occupied neighbours (0-6) a queen currently has.
pub const QUEEN_SAFETY_SCORES: [i32; 7] = [0, 10, 0, -5, -15, -30, 0];

/// Material weight per bug kind, charged as a penalty when that piece is pinned.
pub fn piece_value(kind: Bug) -> i32
{
    match kind
    {
        | Bug::Ant => 5,
        | Bug::Beetle => 5,
        | Bug::Grasshopper => 3,
        | Bug::Queen => 20,
        | Bug::Spider => 1,
        | Bug::Ladybug | Bug::Mosquito => 0,
    }
}

/// Bonus for closing distance to the opposing queen, by kind and clamped hex distance.
///
/// Ladybug and Mosquito have no entry here on purpose: the static evaluator only ever
/// consults this table for the Spider/Beetle/Grasshopper/Ant loop.
pub fn tropism(kind: Bug, distance: i32) -> i32
{
    let idx = distance.clamp(0, 7) as usize;
    match kind
    {
        | Bug::Ant => [0, 5, 0, 0, 0, 0, 0, 0][idx],
        | Bug::Spider => [0, 5, 1, 2, 3, 0, 0, 0][idx],
        | Bug::Beetle => [5, 3, 4, 1, 0, 0, 0, 0][idx],
        | Bug::Grasshopper => [0, 5, 1, 0, 0, 0, 0, 0][idx],
        | _ => 0,
    }
}
