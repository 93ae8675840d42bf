use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A ply count, typed so search code can't confuse it with an arbitrary `i32` score or
/// node count.
pub struct Depth(i32);

impl Depth
{
    pub const NIL: Depth = Depth(0);
    pub const PLY: Depth = Depth(1);

    pub const fn new(value: i32) -> Depth
    {
        Depth(value)
    }

    pub const fn get(&self) -> i32
    {
        self.0
    }
}

impl From<u8> for Depth
{
    fn from(value: u8) -> Self
    {
        Depth::new(value as i32)
    }
}

impl From<Depth> for i32
{
    fn from(value: Depth) -> Self
    {
        value.0
    }
}

impl Add<i32> for Depth
{
    type Output = Depth;
    fn add(self, rhs: i32) -> Depth
    {
        Depth(self.0 + rhs)
    }
}

impl AddAssign<i32> for Depth
{
    fn add_assign(&mut self, rhs: i32)
    {
        self.0 += rhs;
    }
}

impl Sub<i32> for Depth
{
    type Output = Depth;
    fn sub(self, rhs: i32) -> Depth
    {
        Depth(self.0 - rhs)
    }
}

impl SubAssign<i32> for Depth
{
    fn sub_assign(&mut self, rhs: i32)
    {
        self.0 -= rhs;
    }
}

impl Neg for Depth
{
    type Output = Depth;
    fn neg(self) -> Depth
    {
        Depth(-self.0)
    }
}

impl std::fmt::Display for Depth
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn subtracting_a_ply_steps_down_by_one()
    {
        assert_eq!(Depth::new(3) - 1, Depth::new(2));
    }

    #[test]
    fn nil_is_the_zero_depth()
    {
        assert!(Depth::new(0) <= Depth::NIL);
    }
}
