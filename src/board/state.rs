use super::{Board, CastlingRights, Color, Move, Square};

/// Everything `Position::unapply` needs to reverse one `apply`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveDelta {
    pub(crate) mv: Move,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
}

impl MoveDelta {
    /// The move this delta reverses
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }
}

/// A chess position: piece placement plus the game-state flags.
///
/// Two positions compare equal when board, side to move, castling rights,
/// en-passant target and both move counters agree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Position {
            board: Board::starting(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// An empty board, White to move, no castling rights.
    #[must_use]
    pub fn empty() -> Self {
        Position {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// Standard starting position.
#[must_use]
pub fn new_game() -> Position {
    Position::new()
}
