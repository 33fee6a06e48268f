mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::{DIAGONAL_RAYS, STRAIGHT_RAYS};
use super::{Color, Move, MoveList, Piece, Position, Square};

impl Position {
    /// Moves that obey the movement rules but may leave the mover's king attacked.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let color = self.side_to_move;
        let mut moves = MoveList::new();
        for (from, piece) in self.board.pieces(color) {
            self.generate_piece_moves(color, from, piece, &mut moves);
        }
        moves
    }

    /// All legal moves for the side to move.
    ///
    /// Takes `&mut self` because pin and check candidates are verified by
    /// playing them out; the position is unchanged on return.
    pub fn legal_moves(&mut self) -> MoveList {
        let pseudo = self.pseudo_legal_moves();
        self.retain_legal(pseudo)
    }

    /// Legal moves of the side-to-move piece standing on `square`.
    ///
    /// Empty if the square is empty or holds an opponent piece.
    pub fn legal_moves_from(&mut self, square: Square) -> MoveList {
        let color = self.side_to_move;
        let mut pseudo = MoveList::new();
        if let Some((owner, piece)) = self.board.piece_at(square) {
            if owner == color {
                self.generate_piece_moves(color, square, piece, &mut pseudo);
            }
        }
        self.retain_legal(pseudo)
    }

    /// True if `color` has a king and it is attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board
            .find_king(color)
            .is_some_and(|king| self.board.is_attacked(king, color.opponent()))
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let delta = self.apply(mv);
            nodes += self.perft(depth - 1);
            self.unapply(delta);
        }
        nodes
    }

    fn generate_piece_moves(&self, color: Color, from: Square, piece: Piece, moves: &mut MoveList) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(color, from, moves),
            Piece::Knight => self.generate_knight_moves(color, from, moves),
            Piece::Bishop => self.generate_sliding_moves(color, from, piece, &DIAGONAL_RAYS, moves),
            Piece::Rook => self.generate_sliding_moves(color, from, piece, &STRAIGHT_RAYS, moves),
            Piece::Queen => {
                self.generate_sliding_moves(color, from, piece, &STRAIGHT_RAYS, moves);
                self.generate_sliding_moves(color, from, piece, &DIAGONAL_RAYS, moves);
            }
            Piece::King => self.generate_king_moves(color, from, moves),
        }
    }

    /// Quiet move onto an empty square or capture of an opponent piece.
    ///
    /// Returns `true` when `to` was empty, so sliders keep walking the ray.
    #[inline]
    fn push_step(
        &self,
        color: Color,
        piece: Piece,
        from: Square,
        to: Square,
        moves: &mut MoveList,
    ) -> bool {
        match self.board.piece_at(to) {
            None => {
                moves.push(Move::Quiet {
                    color,
                    piece,
                    from,
                    to,
                });
                true
            }
            Some((owner, captured)) => {
                if owner != color {
                    moves.push(Move::Capture {
                        color,
                        piece,
                        from,
                        to,
                        captured,
                    });
                }
                false
            }
        }
    }

    fn retain_legal(&mut self, mut moves: MoveList) -> MoveList {
        let color = self.side_to_move;
        let Some(king) = self.board.find_king(color) else {
            return moves;
        };
        let in_check = self.board.is_attacked(king, color.opponent());

        moves.retain(|&mv| self.is_legal(mv, king, in_check));
        moves
    }

    fn is_legal(&mut self, mv: Move, king: Square, in_check: bool) -> bool {
        if mv.is_resignation() {
            return true;
        }
        let opponent = mv.color().opponent();

        if mv.is_king_move() {
            if mv.is_castling() {
                if in_check {
                    return false;
                }
                let transit = Square(mv.from().0, (mv.from().1 + mv.to().1) / 2);
                if self.board.is_attacked(transit, opponent) {
                    return false;
                }
            }
            return !self.king_destination_attacked(mv.from(), mv.to(), opponent);
        }

        let from = mv.from();
        let pin_candidate =
            from.shares_rank(king) || from.shares_file(king) || from.shares_diagonal(king);
        if in_check || pin_candidate || mv.is_en_passant() {
            let delta = self.apply(mv);
            let exposed = self.board.is_attacked(king, opponent);
            self.unapply(delta);
            return !exposed;
        }
        true
    }

    /// Attack test for a king destination with the king itself lifted off
    /// its origin, so it cannot hide behind its own shadow on a checking ray.
    fn king_destination_attacked(&mut self, from: Square, to: Square, opponent: Color) -> bool {
        let lifted = self.board.clear(from);
        let attacked = self.board.is_attacked(to, opponent);
        if let Some((color, piece)) = lifted {
            self.board.set_piece(from, color, piece);
        }
        attacked
    }
}
