mod moves;

pub use moves::{Move, MoveString, NextTo};
