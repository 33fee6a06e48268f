//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// A chess move, one variant per kind of move.
///
/// Every variant records the moving side; the variants that need it also
/// record the captured and/or promoted piece kind so that a move can be
/// undone without consulting the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    /// A non-capturing move, including pawn double pushes
    Quiet {
        color: Color,
        piece: Piece,
        from: Square,
        to: Square,
    },
    Capture {
        color: Color,
        piece: Piece,
        from: Square,
        to: Square,
        captured: Piece,
    },
    Promotion {
        color: Color,
        from: Square,
        to: Square,
        promoted: Piece,
    },
    PromotionCapture {
        color: Color,
        from: Square,
        to: Square,
        captured: Piece,
        promoted: Piece,
    },
    /// Pawn capture onto the en-passant target square
    EnPassant { color: Color, from: Square, to: Square },
    CastleKingside { color: Color },
    CastleQueenside { color: Color },
    Resign { color: Color },
}

impl Move {
    /// The side making the move
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Move::Quiet { color, .. }
            | Move::Capture { color, .. }
            | Move::Promotion { color, .. }
            | Move::PromotionCapture { color, .. }
            | Move::EnPassant { color, .. }
            | Move::CastleKingside { color }
            | Move::CastleQueenside { color }
            | Move::Resign { color } => color,
        }
    }

    /// The kind of piece that moves (the king for castling and resignation)
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        match self {
            Move::Quiet { piece, .. } | Move::Capture { piece, .. } => piece,
            Move::Promotion { .. } | Move::PromotionCapture { .. } | Move::EnPassant { .. } => {
                Piece::Pawn
            }
            Move::CastleKingside { .. } | Move::CastleQueenside { .. } | Move::Resign { .. } => {
                Piece::King
            }
        }
    }

    /// Origin square; for castling and resignation, the king's home square.
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        match self {
            Move::Quiet { from, .. }
            | Move::Capture { from, .. }
            | Move::Promotion { from, .. }
            | Move::PromotionCapture { from, .. }
            | Move::EnPassant { from, .. } => from,
            Move::CastleKingside { color }
            | Move::CastleQueenside { color }
            | Move::Resign { color } => Square(color.back_rank(), 4),
        }
    }

    /// Destination square; for castling, where the king lands.
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        match self {
            Move::Quiet { to, .. }
            | Move::Capture { to, .. }
            | Move::Promotion { to, .. }
            | Move::PromotionCapture { to, .. }
            | Move::EnPassant { to, .. } => to,
            Move::CastleKingside { color } => Square(color.back_rank(), 6),
            Move::CastleQueenside { color } => Square(color.back_rank(), 2),
            Move::Resign { color } => Square(color.back_rank(), 4),
        }
    }

    /// The kind of piece captured, if any (a pawn for en passant)
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<Piece> {
        match self {
            Move::Capture { captured, .. } | Move::PromotionCapture { captured, .. } => {
                Some(captured)
            }
            Move::EnPassant { .. } => Some(Piece::Pawn),
            _ => None,
        }
    }

    /// The promotion piece, if this is a promotion
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        match self {
            Move::Promotion { promoted, .. } | Move::PromotionCapture { promoted, .. } => {
                Some(promoted)
            }
            _ => None,
        }
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(
            self,
            Move::Capture { .. } | Move::PromotionCapture { .. } | Move::EnPassant { .. }
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self, Move::EnPassant { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(self, Move::CastleKingside { .. } | Move::CastleQueenside { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        matches!(self, Move::Promotion { .. } | Move::PromotionCapture { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_resignation(self) -> bool {
        matches!(self, Move::Resign { .. })
    }

    /// True if this moves the king (castling included, resignation excluded)
    #[inline]
    #[must_use]
    pub const fn is_king_move(self) -> bool {
        !self.is_resignation() && matches!(self.piece(), Piece::King)
    }
}

/// Coordinate form: "e2e4", "e7e8q", "e1g1", and "0000" for resignation.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_resignation() {
            return write!(f, "0000");
        }
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Moves produced by the generator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(64),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub(crate) fn retain(&mut self, f: impl FnMut(&Move) -> bool) {
        self.moves.retain(f);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Move> {
        self.moves
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Extend<Move> for MoveList {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.moves.extend(iter);
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}
