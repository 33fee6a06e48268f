//! Square attack detection.

use super::{Board, Color, Piece, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub(crate) const STRAIGHT_RAYS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const DIAGONAL_RAYS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// First occupied square along a ray, not counting `from` itself.
#[inline]
fn first_blocker(board: &Board, from: Square, (dr, df): (isize, isize)) -> Option<(Color, Piece)> {
    let mut sq = from;
    while let Some(next) = sq.offset(dr, df) {
        if let Some(occupant) = board.piece_at(next) {
            return Some(occupant);
        }
        sq = next;
    }
    None
}

impl Board {
    /// True if any piece of `attacker` attacks `square`.
    ///
    /// The occupant of `square` itself is ignored, so this answers both "is
    /// this piece attacked" and "would a king be attacked standing here".
    #[must_use]
    pub fn is_attacked(&self, square: Square, attacker: Color) -> bool {
        let knight = Some((attacker, Piece::Knight));
        if KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dr, df)| square.offset(dr, df))
            .any(|sq| self.piece_at(sq) == knight)
        {
            return true;
        }

        let slider_hit = |rays: &[(isize, isize)], diagonal: bool| {
            rays.iter().any(|&ray| match first_blocker(self, square, ray) {
                Some((color, piece)) if color == attacker => {
                    if diagonal {
                        piece.attacks_diagonally()
                    } else {
                        piece.attacks_straight()
                    }
                }
                _ => false,
            })
        };
        if slider_hit(&STRAIGHT_RAYS, false) || slider_hit(&DIAGONAL_RAYS, true) {
            return true;
        }

        let king = Some((attacker, Piece::King));
        if KING_OFFSETS
            .iter()
            .filter_map(|&(dr, df)| square.offset(dr, df))
            .any(|sq| self.piece_at(sq) == king)
        {
            return true;
        }

        // A pawn attacking `square` stands one step behind it, from the
        // attacker's point of view, on an adjacent file.
        let pawn = Some((attacker, Piece::Pawn));
        let back = -attacker.pawn_direction();
        [-1, 1]
            .iter()
            .filter_map(|&df| square.offset(back, df))
            .any(|sq| self.piece_at(sq) == pawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_attack() {
        let mut board = Board::empty();
        board.set_piece(Square(0, 1), Color::White, Piece::Knight);
        assert!(board.is_attacked(Square(2, 2), Color::White));
        assert!(board.is_attacked(Square(1, 3), Color::White));
        assert!(!board.is_attacked(Square(1, 1), Color::White));
        assert!(!board.is_attacked(Square(2, 2), Color::Black));
    }

    #[test]
    fn test_slider_blocked() {
        let mut board = Board::empty();
        board.set_piece(Square(0, 0), Color::Black, Piece::Rook);
        assert!(board.is_attacked(Square(7, 0), Color::Black));
        board.set_piece(Square(4, 0), Color::White, Piece::Pawn);
        assert!(board.is_attacked(Square(4, 0), Color::Black));
        assert!(!board.is_attacked(Square(7, 0), Color::Black));
    }

    #[test]
    fn test_rook_does_not_attack_diagonally() {
        let mut board = Board::empty();
        board.set_piece(Square(3, 3), Color::White, Piece::Rook);
        assert!(!board.is_attacked(Square(4, 4), Color::White));
        board.set_piece(Square(3, 3), Color::White, Piece::Queen);
        assert!(board.is_attacked(Square(4, 4), Color::White));
    }

    #[test]
    fn test_pawn_attack_direction() {
        let mut board = Board::empty();
        board.set_piece(Square(3, 4), Color::White, Piece::Pawn);
        assert!(board.is_attacked(Square(4, 3), Color::White));
        assert!(board.is_attacked(Square(4, 5), Color::White));
        assert!(!board.is_attacked(Square(2, 3), Color::White));
        assert!(!board.is_attacked(Square(4, 4), Color::White));

        board.set_piece(Square(5, 0), Color::Black, Piece::Pawn);
        assert!(board.is_attacked(Square(4, 1), Color::Black));
        assert!(!board.is_attacked(Square(6, 1), Color::Black));
    }

    #[test]
    fn test_king_adjacency() {
        let mut board = Board::empty();
        board.set_piece(Square(7, 7), Color::Black, Piece::King);
        assert!(board.is_attacked(Square(6, 6), Color::Black));
        assert!(!board.is_attacked(Square(5, 5), Color::Black));
    }
}
