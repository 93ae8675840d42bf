pub(crate) mod board;
pub mod hex;
pub(crate) mod notation;
pub mod piece;

pub use board::{Board, GameState};
pub use hex::{Column, Direction, Field, Perimeter, Point};
pub use notation::{Move, MoveString, NextTo};
pub use piece::{Bug, Piece, Player, Pouch};
