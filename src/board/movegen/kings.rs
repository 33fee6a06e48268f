use super::super::attacks::KING_OFFSETS;
use super::super::{Color, Move, MoveList, Piece, Position, Square};

impl Position {
    /// Adjacent steps plus castling.
    ///
    /// Castling is gated only on rights, piece placement and empty squares
    /// between king and rook; attacked squares are left to the legality pass.
    pub(super) fn generate_king_moves(&self, color: Color, from: Square, moves: &mut MoveList) {
        for (dr, df) in KING_OFFSETS {
            if let Some(to) = from.offset(dr, df) {
                self.push_step(color, Piece::King, from, to, moves);
            }
        }

        let rank = color.back_rank();
        if from != Square(rank, 4) {
            return;
        }
        let rook = Some((color, Piece::Rook));
        let empty = |files: &[usize]| files.iter().all(|&f| self.board.is_empty(Square(rank, f)));

        if self.castling_rights.has(color, true)
            && self.board.piece_at(Square(rank, 7)) == rook
            && empty(&[5, 6])
        {
            moves.push(Move::CastleKingside { color });
        }
        if self.castling_rights.has(color, false)
            && self.board.piece_at(Square(rank, 0)) == rook
            && empty(&[1, 2, 3])
        {
            moves.push(Move::CastleQueenside { color });
        }
    }
}
