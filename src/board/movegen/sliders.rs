use super::super::{Color, MoveList, Piece, Position, Square};

impl Position {
    /// Walk each ray until the edge or the first occupied square.
    pub(super) fn generate_sliding_moves(
        &self,
        color: Color,
        from: Square,
        piece: Piece,
        rays: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, df) in rays {
            let mut sq = from;
            while let Some(to) = sq.offset(dr, df) {
                if !self.push_step(color, piece, from, to, moves) {
                    break;
                }
                sq = to;
            }
        }
    }
}
