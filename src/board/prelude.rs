//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use alphabeta_chess::board::prelude::*;
//!
//! let position = Position::new();
//! let result = best_move(&position, 1, 1).unwrap();
//! assert!(position.clone().legal_moves().contains(&result.best_move));
//! ```

pub use super::{
    best_move, evaluate, new_game, Color, FenError, Move, MoveError, MoveList, Piece, Position,
    PositionBuilder, SearchConfig, SearchResult, Square,
};
