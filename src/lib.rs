pub mod board;
pub mod uci;

pub use board::{best_move, evaluate, Board, Color, Move, Piece, Position, Square};
