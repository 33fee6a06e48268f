//! Core chess types.
//!
//! This module contains the value types used throughout the engine:
//! - `Piece` and `Color` - piece kinds and sides
//! - `Square` - board coordinate (rank, file)
//! - `Move` and `MoveList` - tagged move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveList};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
pub(crate) use square::{file_from_char, rank_from_char};
