use std::str::FromStr;

use super::error::{FenError, MoveError};
use super::{
    file_from_char, rank_from_char, Board, CastlingRights, Color, Move, Piece, Position, Square,
};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn parse_board(field: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - row;
        let mut file = 0;
        for c in rank_str.chars() {
            match c {
                '1'..='8' => file += c as usize - '0' as usize,
                _ => {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidBoardChar { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file < 8 {
                        board.set_piece(Square(rank, file), color, piece);
                    }
                    file += 1;
                }
            }
        }
        if file != 8 {
            return Err(FenError::WrongRankWidth {
                rank: rank + 1,
                files: file,
            });
        }
    }
    Ok(board)
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    let invalid = || FenError::InvalidCastling {
        found: field.to_string(),
    };
    if field.is_empty() {
        return Err(invalid());
    }
    for c in field.chars() {
        let (color, kingside) = CastlingRights::from_fen_char(c).ok_or_else(invalid)?;
        if rights.has(color, kingside) {
            return Err(invalid());
        }
        rights.set(color, kingside);
    }
    Ok(rights)
}

fn parse_en_passant(field: &str) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    match field.parse::<Square>() {
        Ok(sq) if sq.0 == 2 || sq.0 == 5 => Ok(Some(sq)),
        _ => Err(FenError::InvalidEnPassant {
            found: field.to_string(),
        }),
    }
}

impl Position {
    /// Parse a position from six-field FEN notation.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let [placement, side, castling, en_passant, halfmove, fullmove] = fields[..] else {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        };

        let board = parse_board(placement)?;
        let side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };
        let castling_rights = parse_castling(castling)?;
        let en_passant_target = parse_en_passant(en_passant)?;
        let halfmove_clock = halfmove
            .parse::<u32>()
            .map_err(|_| FenError::InvalidHalfmoveClock {
                found: halfmove.to_string(),
            })?;
        let fullmove_number = fullmove
            .parse::<u32>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| FenError::InvalidFullmoveNumber {
                found: fullmove.to_string(),
            })?;

        Ok(Position {
            board,
            side_to_move,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Six-field FEN of this position.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.board.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights.to_fen(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Resolve a coordinate move ("e2e4", "e7e8q") against the legal moves.
    ///
    /// A from/to pair with a single legal match resolves to it; otherwise the
    /// promotion letter must narrow the candidates to exactly one.
    ///
    /// # Example
    /// ```
    /// use alphabeta_chess::board::Position;
    ///
    /// let mut position = Position::new();
    /// let mv = position.find_move("g1f3").unwrap();
    /// assert_eq!(mv.to_string(), "g1f3");
    /// ```
    pub fn find_move(&mut self, coordinate: &str) -> Result<Move, MoveError> {
        let (from, to, promotion) = parse_coordinate(coordinate)?;

        let candidates: Vec<Move> = self
            .legal_moves_from(from)
            .into_iter()
            .filter(|mv| mv.to() == to)
            .collect();
        if let [only] = candidates[..] {
            return Ok(only);
        }

        if promotion.is_some() {
            let promoted: Vec<Move> = candidates
                .into_iter()
                .filter(|mv| mv.promotion() == promotion)
                .collect();
            if let [only] = promoted[..] {
                return Ok(only);
            }
        }

        Err(MoveError::NoMatchingLegalMove {
            from,
            to,
            promotion,
        })
    }

    /// Resolve and play a sequence of coordinate moves.
    ///
    /// Stops at the first move that fails to resolve; the position is then
    /// left as it was before the call.
    pub fn apply_coordinate_moves<S: AsRef<str>>(&mut self, moves: &[S]) -> Result<(), MoveError> {
        let mut next = self.clone();
        for notation in moves {
            let mv = next.find_move(notation.as_ref())?;
            next.apply(mv);
        }
        *self = next;
        Ok(())
    }
}

/// Split "e7e8q" into origin, destination and optional promotion kind.
fn parse_coordinate(coordinate: &str) -> Result<(Square, Square, Option<Piece>), MoveError> {
    let invalid = || MoveError::InvalidMoveSyntax {
        notation: coordinate.to_string(),
    };
    let chars: Vec<char> = coordinate.chars().collect();
    if chars.len() != 4 && chars.len() != 5 {
        return Err(invalid());
    }

    let square = |f: char, r: char| match (file_from_char(f), rank_from_char(r)) {
        (Some(file), Some(rank)) => Some(Square(rank, file)),
        _ => None,
    };
    let from = square(chars[0], chars[1]).ok_or_else(invalid)?;
    let to = square(chars[2], chars[3]).ok_or_else(invalid)?;

    let promotion = match chars.get(4) {
        None => None,
        Some(&c) if matches!(c, 'n' | 'b' | 'r' | 'q') => Piece::from_char(c),
        Some(_) => return Err(invalid()),
    };
    Ok((from, to, promotion))
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
