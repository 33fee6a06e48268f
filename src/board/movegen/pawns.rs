use super::super::{Color, Move, MoveList, Piece, Position, Square, PROMOTION_PIECES};

impl Position {
    pub(super) fn generate_pawn_moves(&self, color: Color, from: Square, moves: &mut MoveList) {
        // Pawns never stand on either back rank in a real game.
        if from.0 == 0 || from.0 == 7 {
            return;
        }
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        if let Some(one) = from.offset(dir, 0) {
            if self.board.is_empty(one) {
                if one.0 == promotion_rank {
                    for promoted in PROMOTION_PIECES {
                        moves.push(Move::Promotion {
                            color,
                            from,
                            to: one,
                            promoted,
                        });
                    }
                } else {
                    moves.push(Move::Quiet {
                        color,
                        piece: Piece::Pawn,
                        from,
                        to: one,
                    });
                    if from.0 == color.pawn_start_rank() {
                        if let Some(two) = one.offset(dir, 0).filter(|sq| self.board.is_empty(*sq)) {
                            moves.push(Move::Quiet {
                                color,
                                piece: Piece::Pawn,
                                from,
                                to: two,
                            });
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(to) = from.offset(dir, df) else {
                continue;
            };
            match self.board.piece_at(to) {
                Some((owner, captured)) if owner != color => {
                    if to.0 == promotion_rank {
                        for promoted in PROMOTION_PIECES {
                            moves.push(Move::PromotionCapture {
                                color,
                                from,
                                to,
                                captured,
                                promoted,
                            });
                        }
                    } else {
                        moves.push(Move::Capture {
                            color,
                            piece: Piece::Pawn,
                            from,
                            to,
                            captured,
                        });
                    }
                }
                None if self.en_passant_target == Some(to) && self.has_en_passant_victim(color, to) => {
                    moves.push(Move::EnPassant { color, from, to });
                }
                _ => {}
            }
        }
    }

    /// The pawn to be removed must actually be there; a hand-built FEN can
    /// name a target square with nothing behind it.
    fn has_en_passant_victim(&self, color: Color, target: Square) -> bool {
        target
            .offset(-color.pawn_direction(), 0)
            .and_then(|sq| self.board.piece_at(sq))
            == Some((color.opponent(), Piece::Pawn))
    }
}
