use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// A direction on a hexagonal grid, indexed NE, E, SE, SW, W, NW.
pub enum Direction
{
    Northeast,
    East,
    Southeast,
    Southwest,
    West,
    Northwest,
}

impl Direction
{
    #[inline]
    /// Returns all directions in index order (NE, E, SE, SW, W, NW).
    pub const fn all() -> [Direction; 6]
    {
        [Self::Northeast, Self::East, Self::Southeast, Self::Southwest, Self::West, Self::Northwest]
    }

    /// Returns the `(dx, dy)` offset of stepping one hex in this direction.
    pub const fn offset(&self) -> (i32, i32)
    {
        match self
        {
            | Self::Northeast => (1, 0),
            | Self::East => (1, 1),
            | Self::Southeast => (0, 1),
            | Self::Southwest => (-1, 0),
            | Self::West => (-1, -1),
            | Self::Northwest => (0, -1),
        }
    }

    /// Applies this direction to a column, returning the neighbouring column.
    pub fn apply(&self, column: Column) -> Column
    {
        let (dx, dy) = self.offset();
        (column.0 + dx, column.1 + dy)
    }

    /// Returns the direction counterclockwise to this one.
    pub fn counterclockwise(&self) -> Direction
    {
        match self
        {
            | Self::Northeast => Self::Northwest,
            | Self::Northwest => Self::West,
            | Self::West => Self::Southwest,
            | Self::Southwest => Self::Southeast,
            | Self::Southeast => Self::East,
            | Self::East => Self::Northeast,
        }
    }

    /// Returns the direction clockwise of this one.
    pub fn clockwise(&self) -> Direction
    {
        match self
        {
            | Self::Northeast => Self::East,
            | Self::East => Self::Southeast,
            | Self::Southeast => Self::Southwest,
            | Self::Southwest => Self::West,
            | Self::West => Self::Northwest,
            | Self::Northwest => Self::Northeast,
        }
    }

    /// Returns the inverse of this direction.
    pub fn inverse(&self) -> Direction
    {
        match self
        {
            | Self::Northeast => Self::Southwest,
            | Self::Southwest => Self::Northeast,
            | Self::East => Self::West,
            | Self::West => Self::East,
            | Self::Southeast => Self::Northwest,
            | Self::Northwest => Self::Southeast,
        }
    }

    /// Determines if this is a west-side direction (as opposed to an east-side one).
    pub fn is_west(&self) -> bool
    {
        matches!(self, Self::West | Self::Northwest | Self::Southwest)
    }

    pub fn long(&self) -> &'static str
    {
        match self
        {
            | Self::Northeast => "northeast",
            | Self::East => "east",
            | Self::Southeast => "southeast",
            | Self::Southwest => "southwest",
            | Self::West => "west",
            | Self::Northwest => "northwest",
        }
    }

    /// Parses a direction marker (`-`, `/`, `\`), disambiguated by which side of the anchor piece it sat on.
    pub fn parse(s: &str, on_left: bool) -> Result<Direction>
    {
        match s
        {
            | "-" => Ok(if on_left { Self::West } else { Self::East }),
            | "/" => Ok(if on_left { Self::Southwest } else { Self::Northeast }),
            | "\\" => Ok(if on_left { Self::Northwest } else { Self::Southeast }),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }

    #[inline]
    /// If the two columns are neighbours, returns the direction from the first to the second.
    pub fn to(from: Column, to: Column) -> Option<Direction>
    {
        Direction::all().into_iter().find(|direction| direction.apply(from) == to)
    }
}

impl std::fmt::Display for Direction
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::East | Self::West => "-",
            | Self::Southeast | Self::Northwest => "\\",
            | Self::Southwest | Self::Northeast => "/",
        };

        write!(f, "{repr}")
    }
}
