use super::{Color, Move, MoveDelta, Piece, Position, Square};

/// Rook origin and destination files for a castle.
#[inline]
const fn castle_rook_files(kingside: bool) -> (usize, usize) {
    if kingside {
        (7, 5)
    } else {
        (0, 3)
    }
}

/// Square of the pawn removed by an en-passant capture landing on `to`.
#[inline]
fn en_passant_victim(color: Color, to: Square) -> Square {
    match color {
        Color::White => Square(to.0 - 1, to.1),
        Color::Black => Square(to.0 + 1, to.1),
    }
}

impl Position {
    /// Play `mv` on this position, returning the record needed to take it back.
    ///
    /// The move is trusted: it must have been produced by the generator for
    /// this position (or be otherwise consistent with the board).
    pub fn apply(&mut self, mv: Move) -> MoveDelta {
        debug_assert_eq!(
            mv.color(),
            self.side_to_move,
            "apply: {mv} played out of turn"
        );

        let delta = MoveDelta {
            mv,
            previous_en_passant_target: self.en_passant_target,
            previous_castling_rights: self.castling_rights,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
        };

        let color = mv.color();
        match mv {
            Move::Quiet {
                piece, from, to, ..
            }
            | Move::Capture {
                piece, from, to, ..
            } => {
                self.board.clear(from);
                self.board.set_piece(to, color, piece);
            }
            Move::Promotion {
                from, to, promoted, ..
            }
            | Move::PromotionCapture {
                from, to, promoted, ..
            } => {
                self.board.clear(from);
                self.board.set_piece(to, color, promoted);
            }
            Move::EnPassant { from, to, .. } => {
                self.board.clear(from);
                self.board.clear(en_passant_victim(color, to));
                self.board.set_piece(to, color, Piece::Pawn);
            }
            Move::CastleKingside { .. } | Move::CastleQueenside { .. } => {
                let rank = color.back_rank();
                let (rook_from, rook_to) =
                    castle_rook_files(matches!(mv, Move::CastleKingside { .. }));
                self.board.clear(mv.from());
                self.board.clear(Square(rank, rook_from));
                self.board.set_piece(mv.to(), color, Piece::King);
                self.board.set_piece(Square(rank, rook_to), color, Piece::Rook);
            }
            Move::Resign { .. } => {}
        }

        self.en_passant_target = match mv {
            Move::Quiet {
                piece: Piece::Pawn,
                from,
                to,
                ..
            } if from.0.abs_diff(to.0) == 2 => Some(Square((from.0 + to.0) / 2, from.1)),
            _ => None,
        };

        if mv.is_capture() || mv.piece() == Piece::Pawn {
            self.halfmove_clock = 0;
        } else if !mv.is_resignation() {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.update_castling_rights(mv);
        self.side_to_move = color.opponent();
        delta
    }

    fn update_castling_rights(&mut self, mv: Move) {
        if self.castling_rights.is_empty() {
            return;
        }
        let color = mv.color();
        if mv.is_king_move() {
            self.castling_rights.remove_color(color);
        } else if mv.piece() == Piece::Rook {
            let home = color.back_rank();
            if mv.from() == Square(home, 0) {
                self.castling_rights.remove(color, false);
            } else if mv.from() == Square(home, 7) {
                self.castling_rights.remove(color, true);
            }
        }

        if mv.captured() == Some(Piece::Rook) {
            let opponent = color.opponent();
            let home = opponent.back_rank();
            if mv.to() == Square(home, 0) {
                self.castling_rights.remove(opponent, false);
            } else if mv.to() == Square(home, 7) {
                self.castling_rights.remove(opponent, true);
            }
        }
    }

    /// Take back the move recorded in `delta`.
    ///
    /// Deltas must be unapplied in the reverse order of the `apply` calls
    /// that produced them.
    pub fn unapply(&mut self, delta: MoveDelta) {
        let mv = delta.mv;
        let color = mv.color();
        let opponent = color.opponent();

        match mv {
            Move::Quiet {
                piece, from, to, ..
            } => {
                self.board.clear(to);
                self.board.set_piece(from, color, piece);
            }
            Move::Capture {
                piece,
                from,
                to,
                captured,
                ..
            } => {
                self.board.set_piece(to, opponent, captured);
                self.board.set_piece(from, color, piece);
            }
            Move::Promotion { from, to, .. } => {
                self.board.clear(to);
                self.board.set_piece(from, color, Piece::Pawn);
            }
            Move::PromotionCapture {
                from, to, captured, ..
            } => {
                self.board.set_piece(to, opponent, captured);
                self.board.set_piece(from, color, Piece::Pawn);
            }
            Move::EnPassant { from, to, .. } => {
                self.board.clear(to);
                self.board
                    .set_piece(en_passant_victim(color, to), opponent, Piece::Pawn);
                self.board.set_piece(from, color, Piece::Pawn);
            }
            Move::CastleKingside { .. } | Move::CastleQueenside { .. } => {
                let rank = color.back_rank();
                let (rook_from, rook_to) =
                    castle_rook_files(matches!(mv, Move::CastleKingside { .. }));
                self.board.clear(mv.to());
                self.board.clear(Square(rank, rook_to));
                self.board.set_piece(mv.from(), color, Piece::King);
                self.board.set_piece(Square(rank, rook_from), color, Piece::Rook);
            }
            Move::Resign { .. } => {}
        }

        self.side_to_move = color;
        self.en_passant_target = delta.previous_en_passant_target;
        self.castling_rights = delta.previous_castling_rights;
        self.halfmove_clock = delta.previous_halfmove_clock;
        self.fullmove_number = delta.previous_fullmove_number;
    }

    /// Copy of this position after `mv`.
    #[must_use]
    pub fn after(&self, mv: Move) -> Position {
        let mut next = self.clone();
        next.apply(mv);
        next
    }
}
