//! Static evaluation: material plus piece-square tables, in pawn units.

use super::pst::square_value;
use super::{Board, Color, Piece, Position, Square};

/// Material and placement value of one piece, from its owner's side.
#[inline]
fn piece_value(color: Color, piece: Piece, sq: Square) -> f64 {
    piece.value() + square_value(color, piece, sq)
}

impl Board {
    /// Score from White's point of view: positive when White is ahead.
    ///
    /// Each side's pieces are summed walking the board from that side's own
    /// back rank, so mirror-image positions cancel to exactly zero.
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        let mut white = 0.0;
        let mut black = 0.0;
        for idx in 0..64 {
            let sq = Square::from_index(idx);
            if let Some((Color::White, piece)) = self.piece_at(sq) {
                white += piece_value(Color::White, piece, sq);
            }
            let mirrored = sq.flip_vertical();
            if let Some((Color::Black, piece)) = self.piece_at(mirrored) {
                black += piece_value(Color::Black, piece, mirrored);
            }
        }
        white - black
    }
}

impl Position {
    /// Static score of this position; see [`evaluate`].
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        self.board.evaluate()
    }
}

/// Static score in pawns, positive when White is ahead.
///
/// No mobility, king safety or pawn structure terms, and no special value
/// for checkmate or stalemate.
#[must_use]
pub fn evaluate(position: &Position) -> f64 {
    position.board.evaluate()
}
