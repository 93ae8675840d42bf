/// A two-dimensional column key: the `(x, y)` part of a `Point`, ignoring stack height.
///
/// Every occupied column of the hive is keyed by one of these; several pieces may share
/// a column at different heights.
pub type Column = (i32, i32);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// An immutable `(x, y, z)` coordinate. `z = 0` is ground level; higher `z` stacks a
/// beetle or mosquito above whatever already occupies the column.
///
/// There is no `NONE` variant here: "not on the board" is modelled as `Option<Point>`,
/// which is the idiomatic Rust shape for the source's sentinel value.
pub struct Point
{
    pub x: i32,
    pub y: i32,
    pub z: u8,
}

impl Point
{
    pub const ORIGIN: Point = Point { x: 0, y: 0, z: 0 };

    pub fn new(x: i32, y: i32, z: u8) -> Point
    {
        Point { x, y, z }
    }

    /// The column this point sits in, discarding height.
    pub fn column(&self) -> Column
    {
        (self.x, self.y)
    }

    /// A ground-level point at the given column.
    pub fn at(column: Column) -> Point
    {
        Point {
            x: column.0,
            y: column.1,
            z: 0,
        }
    }
}

impl std::fmt::Display for Point
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

impl From<Column> for Point
{
    fn from(column: Column) -> Point
    {
        Point::at(column)
    }
}
