//! Error types for position and move parsing.

use std::fmt;

use super::{Piece, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string does not have exactly six whitespace-separated fields
    WrongFieldCount { found: usize },
    /// Board field does not have exactly eight ranks
    WrongRankCount { found: usize },
    /// A rank does not describe exactly eight squares
    WrongRankWidth { rank: usize, files: usize },
    /// Invalid piece or digit character in the board field
    InvalidBoardChar { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock is not a non-negative integer
    InvalidHalfmoveClock { found: String },
    /// Fullmove number is not a positive integer
    InvalidFullmoveNumber { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN board must have 8 ranks, found {found}")
            }
            FenError::WrongRankWidth { rank, files } => {
                write!(f, "FEN rank {rank} describes {files} squares, expected 8")
            }
            FenError::InvalidBoardChar { char } => {
                write!(f, "Invalid board character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "Invalid castling field '{found}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidHalfmoveClock { found } => {
                write!(f, "Invalid halfmove clock '{found}'")
            }
            FenError::InvalidFullmoveNumber { found } => {
                write!(f, "Invalid fullmove number '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for coordinate move lookup failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Move string is not of the form "e2e4" or "e7e8q"
    InvalidMoveSyntax { notation: String },
    /// Well-formed, but not exactly one legal move matches
    NoMatchingLegalMove {
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidMoveSyntax { notation } => {
                write!(f, "\"{notation}\" is not a valid move")
            }
            MoveError::NoMatchingLegalMove {
                from,
                to,
                promotion: Some(piece),
            } => write!(f, "No legal move from {from} to {to} promoting to {piece}"),
            MoveError::NoMatchingLegalMove { from, to, .. } => {
                write!(f, "No legal move from {from} to {to}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
