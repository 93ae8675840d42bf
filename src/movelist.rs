use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Time-budget inputs from the external driver: `total_ms,white_used_ms,black_used_ms`.
///
/// The fixed-depth core never consults these fields; they are parsed and carried so an
/// iterative-deepening wrapper can read a deadline from the same CLI contract without a
/// breaking change to the invocation shape.
pub struct TimeControls
{
    pub total_ms:       u32,
    pub white_used_ms:  u32,
    pub black_used_ms:  u32,
}

impl FromStr for TimeControls
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        if fields.len() != 3
        {
            let msg = format!("Expected 3 comma-separated fields (total,white,black), found {}.", fields.len());
            return Err(Error::new(Kind::InvalidTime, msg).chain_parse::<Self>(s.into()));
        }

        let field = |raw: &str| -> Result<u32> {
            raw.parse::<u32>().map_err(|_| Error::new(Kind::InvalidTime, format!("'{}' is not a non-negative millisecond count.", raw)))
        };

        let total_ms = field(fields[0]).map_err(|err| err.chain_parse::<Self>(s.into()))?;
        let white_used_ms = field(fields[1]).map_err(|err| err.chain_parse::<Self>(s.into()))?;
        let black_used_ms = field(fields[2]).map_err(|err| err.chain_parse::<Self>(s.into()))?;

        Ok(TimeControls { total_ms, white_used_ms, black_used_ms })
    }
}

/// Replays a possibly-empty, comma-separated sequence of `N. <move-notation>` entries
/// onto a fresh board, in play order.
///
/// Each entry's turn-number prefix is checked for shape only (it is not cross-checked
/// against the board's own ply count, since the driver is trusted to hand us a
/// contiguous history). A mover's own piece may elide its color letter, which defaults to
/// whichever side is to move when that entry is replayed; a destination reference's piece
/// must always be fully qualified, since it may belong to either side.
pub fn replay(moves: &str, options: Options) -> Result<Board>
{
    let mut board = Board::new(options);

    for raw_entry in moves.split(',')
    {
        let entry = raw_entry.trim();
        if entry.is_empty()
        {
            continue;
        }

        let notation = strip_turn_prefix(entry)?;
        let normalized = normalize_entry(notation, board.to_move());
        let movestr: MoveString = normalized.parse().map_err(|err: Error| err.chain(Error::new(Kind::ParseError, format!("In move list entry '{}'.", entry))))?;
        let mv = Move::from(&movestr, &board)?;
        board.play(mv)?;
    }

    Ok(board)
}

/// Strips the leading `N.` turn marker from a move-list entry, validating that it is a
/// non-negative integer followed by a period.
fn strip_turn_prefix(entry: &str) -> Result<&str>
{
    let Some(dot) = entry.find('.')
    else
    {
        let msg = format!("Move list entry '{}' is missing its 'N.' turn prefix.", entry);
        return Err(Error::new(Kind::ParseError, msg));
    };

    let (prefix, rest) = entry.split_at(dot);
    if prefix.trim().parse::<u32>().is_err()
    {
        let msg = format!("Move list entry '{}' has a non-numeric turn prefix.", entry);
        return Err(Error::new(Kind::ParseError, msg));
    }

    Ok(rest[1..].trim())
}

/// Prepends the side-to-move's color letter onto a mover's piece token when it was
/// elided, leaving a fully-qualified destination reference untouched.
fn normalize_entry(notation: &str, mover: Player) -> String
{
    if notation == "pass"
    {
        return notation.to_owned();
    }

    let mut tokens = notation.split_whitespace();
    let Some(src) = tokens.next()
    else
    {
        return notation.to_owned();
    };

    let src = if src.starts_with('w') || src.starts_with('b')
    {
        src.to_owned()
    }
    else
    {
        format!("{}{}", mover.short(), src)
    };

    let rest: Vec<&str> = tokens.collect();
    if rest.is_empty()
    {
        src
    }
    else
    {
        format!("{} {}", src, rest.join(" "))
    }
}
