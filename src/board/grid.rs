//! 64-square piece grid.

use std::fmt;

use super::{Color, Piece, Square};

/// Piece placement, indexed by `Square::index` (a1 = 0, h8 = 63).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<(Color, Piece)>; 64],
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Board {
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Standard starting arrangement.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            board.set_piece(Square(0, file), Color::White, *piece);
            board.set_piece(Square(7, file), Color::Black, *piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Place a piece, replacing whatever stood there.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.index()] = Some((color, piece));
    }

    /// Empty a square, returning what stood there.
    #[inline]
    pub fn clear(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()].take()
    }

    /// Location of `color`'s king, the first one in index order if there are several.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.squares
            .iter()
            .position(|p| *p == Some((color, Piece::King)))
            .map(Square::from_index)
    }

    /// All pieces belonging to `color`, in square-index order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(move |(idx, p)| match p {
                Some((c, piece)) if *c == color => Some((Square::from_index(idx), *piece)),
                _ => None,
            })
    }

    /// Every occupied square.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, p)| p.map(|(c, piece)| (Square::from_index(idx), c, piece)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

/// Eight text rows, rank 8 first, '.' for empty squares.
impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let c = self
                    .piece_at(Square(rank, file))
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_board_layout() {
        let board = Board::starting();
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.find_king(Color::White), Some(Square(0, 4)));
        assert_eq!(board.find_king(Color::Black), Some(Square(7, 4)));
        assert_eq!(
            board.piece_at(Square(0, 3)),
            Some((Color::White, Piece::Queen))
        );
        assert!(board.is_empty(Square(3, 3)));
    }

    #[test]
    fn test_set_and_clear() {
        let mut board = Board::empty();
        board.set_piece(Square(3, 4), Color::Black, Piece::Knight);
        assert_eq!(board.pieces(Color::Black).count(), 1);
        assert_eq!(board.pieces(Color::White).count(), 0);
        assert_eq!(
            board.clear(Square(3, 4)),
            Some((Color::Black, Piece::Knight))
        );
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn test_find_king_absent() {
        assert_eq!(Board::empty().find_king(Color::White), None);
    }
}
