//! Chess position representation and game logic.
//!
//! A 64-square grid with make/unmake move application, legal move
//! generation (check, pins, castling, en passant, promotion), a static
//! material and piece-square evaluator, and alpha-beta search.
//!
//! # Example
//! ```
//! use alphabeta_chess::board::Position;
//!
//! let mut position = Position::new();
//! let moves = position.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod builder;
mod error;
mod eval;
mod fen;
mod grid;
mod make_unmake;
mod movegen;
pub mod prelude;
mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::{FenError, MoveError, SquareError};
pub use eval::evaluate;
pub use fen::STARTING_FEN;
pub use grid::Board;
pub use state::{new_game, MoveDelta, Position};
pub use types::{CastlingRights, Color, Move, MoveList, Piece, Square};

// Public API - search functions and configuration
pub use search::{
    best_move, best_move_with_rng, minimax, order_moves, SearchConfig, SearchResult,
    DEFAULT_DEPTH,
};

pub(crate) use types::{file_from_char, rank_from_char, PROMOTION_PIECES};
