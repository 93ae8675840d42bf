mod direction;
mod field;
mod point;

pub use direction::Direction;
pub use field::{Field, Perimeter};
pub use point::{Column, Point};

#[inline]
/// Returns the two common neighbours between two adjacent columns, provided they are actually adjacent.
pub fn common_neighbours(a: Column, b: Column) -> Option<(Column, Column)>
{
    Direction::to(a, b).map(|direction| (direction.clockwise().apply(a), direction.counterclockwise().apply(a)))
}

#[inline]
/// Gets the six neighbours of this column in direction-index order (NE, E, SE, SW, W, NW).
pub fn neighbours(c: Column) -> [Column; 6]
{
    Direction::all().map(|d| d.apply(c))
}

#[inline]
/// The hex distance between two columns, per the pointy-top axial formula.
pub fn distance(a: Column, b: Column) -> i32
{
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx.abs() + dy.abs() + (dx - dy).abs()) / 2
}

#[inline]
/// Whether the two columns are hex-adjacent.
pub fn adjacent(a: Column, b: Column) -> bool
{
    distance(a, b) == 1
}
