use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The types of bugs in Hive (the base game plus the Ladybug and Mosquito expansions).
pub enum Bug
{
    Ant         = 0,
    Beetle      = 1,
    Grasshopper = 2,
    Ladybug     = 3,
    Mosquito    = 4,
    Queen       = 5,
    Spider      = 6,
}

impl std::fmt::Display for Bug
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::Ant => "A",
            | Self::Beetle => "B",
            | Self::Grasshopper => "G",
            | Self::Ladybug => "L",
            | Self::Mosquito => "M",
            | Self::Queen => "Q",
            | Self::Spider => "S",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Bug
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "A" => Ok(Self::Ant),
            | "B" => Ok(Self::Beetle),
            | "G" => Ok(Self::Grasshopper),
            | "L" => Ok(Self::Ladybug),
            | "M" => Ok(Self::Mosquito),
            | "Q" => Ok(Self::Queen),
            | "S" => Ok(Self::Spider),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}

impl From<u8> for Bug
{
    fn from(value: u8) -> Self
    {
        let v = value.clamp(0, piece::consts::COUNT / 2 - 1);
        Bug::all().into_iter().rev().find(|kind| kind.offset() <= v).unwrap()
    }
}

impl Bug
{
    /// Returns the bugs in offset order.
    pub fn all() -> [Bug; 7]
    {
        [Self::Ant, Self::Beetle, Self::Grasshopper, Self::Ladybug, Self::Mosquito, Self::Queen, Self::Spider]
    }

    /// Gets the extent (maximum discriminator) of this bug.
    pub fn extent(&self) -> u8
    {
        match self
        {
            | Self::Ant => 3,
            | Self::Beetle => 2,
            | Self::Grasshopper => 3,
            | Self::Ladybug => 1,
            | Self::Mosquito => 1,
            | Self::Queen => 1,
            | Self::Spider => 2,
        }
    }

    pub fn long(&self) -> &'static str
    {
        match self
        {
            | Self::Ant => "Ant",
            | Self::Beetle => "Beetle",
            | Self::Grasshopper => "Grasshopper",
            | Self::Ladybug => "Ladybug",
            | Self::Mosquito => "Mosquito",
            | Self::Queen => "Queen",
            | Self::Spider => "Spider",
        }
    }

    /// Gets the starting offset for this bug within a player's piece range.
    pub fn offset(&self) -> u8
    {
        match self
        {
            | Self::Ant => 0,
            | Self::Beetle => 3,
            | Self::Grasshopper => 5,
            | Self::Ladybug => 8,
            | Self::Mosquito => 9,
            | Self::Queen => 10,
            | Self::Spider => 11,
        }
    }

    /// Whether this piece kind has only one copy per player.
    pub fn unique(&self) -> bool
    {
        matches!(self, Self::Ladybug | Self::Mosquito | Self::Queen)
    }

    /// Whether this bug is one of the two optional expansion pieces, and if so, whether
    /// it is enabled by the given options.
    pub fn enabled(&self, options: &Options) -> bool
    {
        match self
        {
            | Self::Ladybug => options.expansions.ladybug,
            | Self::Mosquito => options.expansions.mosquito,
            | _ => true,
        }
    }
}
