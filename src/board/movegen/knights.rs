use super::super::attacks::KNIGHT_OFFSETS;
use super::super::{Color, MoveList, Piece, Position, Square};

impl Position {
    pub(super) fn generate_knight_moves(&self, color: Color, from: Square, moves: &mut MoveList) {
        for (dr, df) in KNIGHT_OFFSETS {
            if let Some(to) = from.offset(dr, df) {
                self.push_step(color, Piece::Knight, from, to, moves);
            }
        }
    }
}
