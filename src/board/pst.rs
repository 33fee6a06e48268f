//! Piece-square tables in pawn units (Michniewski's simplified evaluation).
//!
//! Each table is laid out from White's side, index 0 = a1, one row per rank
//! from rank 1 up. Black reads the same table through `Square::flip_vertical`.

use super::{Color, Piece, Square};

#[rustfmt::skip]
const PAWN: [f64; 64] = [
     0.00,  0.00,  0.00,  0.00,  0.00,  0.00,  0.00,  0.00,
     0.05,  0.10,  0.10, -0.20, -0.20,  0.10,  0.10,  0.05,
     0.05, -0.05, -0.10,  0.00,  0.00, -0.10, -0.05,  0.05,
     0.00,  0.00,  0.00,  0.20,  0.20,  0.00,  0.00,  0.00,
     0.05,  0.05,  0.10,  0.25,  0.25,  0.10,  0.05,  0.05,
     0.10,  0.10,  0.20,  0.30,  0.30,  0.20,  0.10,  0.10,
     0.50,  0.50,  0.50,  0.50,  0.50,  0.50,  0.50,  0.50,
     0.00,  0.00,  0.00,  0.00,  0.00,  0.00,  0.00,  0.00,
];

#[rustfmt::skip]
const KNIGHT: [f64; 64] = [
    -0.50, -0.40, -0.30, -0.30, -0.30, -0.30, -0.40, -0.50,
    -0.40, -0.20,  0.00,  0.05,  0.05,  0.00, -0.20, -0.40,
    -0.30,  0.05,  0.10,  0.15,  0.15,  0.10,  0.05, -0.30,
    -0.30,  0.00,  0.15,  0.20,  0.20,  0.15,  0.00, -0.30,
    -0.30,  0.05,  0.15,  0.20,  0.20,  0.15,  0.05, -0.30,
    -0.30,  0.00,  0.10,  0.15,  0.15,  0.10,  0.00, -0.30,
    -0.40, -0.20,  0.00,  0.00,  0.00,  0.00, -0.20, -0.40,
    -0.50, -0.40, -0.30, -0.30, -0.30, -0.30, -0.40, -0.50,
];

#[rustfmt::skip]
const BISHOP: [f64; 64] = [
    -0.20, -0.10, -0.10, -0.10, -0.10, -0.10, -0.10, -0.20,
    -0.10,  0.05,  0.00,  0.00,  0.00,  0.00,  0.05, -0.10,
    -0.10,  0.10,  0.10,  0.10,  0.10,  0.10,  0.10, -0.10,
    -0.10,  0.00,  0.10,  0.10,  0.10,  0.10,  0.00, -0.10,
    -0.10,  0.05,  0.05,  0.10,  0.10,  0.05,  0.05, -0.10,
    -0.10,  0.00,  0.05,  0.10,  0.10,  0.05,  0.00, -0.10,
    -0.10,  0.00,  0.00,  0.00,  0.00,  0.00,  0.00, -0.10,
    -0.20, -0.10, -0.10, -0.10, -0.10, -0.10, -0.10, -0.20,
];

#[rustfmt::skip]
const ROOK: [f64; 64] = [
     0.00,  0.00,  0.00,  0.05,  0.05,  0.00,  0.00,  0.00,
    -0.05,  0.00,  0.00,  0.00,  0.00,  0.00,  0.00, -0.05,
    -0.05,  0.00,  0.00,  0.00,  0.00,  0.00,  0.00, -0.05,
    -0.05,  0.00,  0.00,  0.00,  0.00,  0.00,  0.00, -0.05,
    -0.05,  0.00,  0.00,  0.00,  0.00,  0.00,  0.00, -0.05,
    -0.05,  0.00,  0.00,  0.00,  0.00,  0.00,  0.00, -0.05,
     0.05,  0.10,  0.10,  0.10,  0.10,  0.10,  0.10,  0.05,
     0.00,  0.00,  0.00,  0.00,  0.00,  0.00,  0.00,  0.00,
];

#[rustfmt::skip]
const QUEEN: [f64; 64] = [
    -0.20, -0.10, -0.10, -0.05, -0.05, -0.10, -0.10, -0.20,
    -0.10,  0.00,  0.05,  0.00,  0.00,  0.00,  0.00, -0.10,
    -0.10,  0.05,  0.05,  0.05,  0.05,  0.05,  0.00, -0.10,
     0.00,  0.00,  0.05,  0.05,  0.05,  0.05,  0.00, -0.05,
    -0.05,  0.00,  0.05,  0.05,  0.05,  0.05,  0.00, -0.05,
    -0.10,  0.00,  0.05,  0.05,  0.05,  0.05,  0.00, -0.10,
    -0.10,  0.00,  0.00,  0.00,  0.00,  0.00,  0.00, -0.10,
    -0.20, -0.10, -0.10, -0.05, -0.05, -0.10, -0.10, -0.20,
];

/// Middlegame king table.
#[rustfmt::skip]
const KING: [f64; 64] = [
     0.20,  0.30,  0.10,  0.00,  0.00,  0.10,  0.30,  0.20,
     0.20,  0.20,  0.00,  0.00,  0.00,  0.00,  0.20,  0.20,
    -0.10, -0.20, -0.20, -0.20, -0.20, -0.20, -0.20, -0.10,
    -0.20, -0.30, -0.30, -0.40, -0.40, -0.30, -0.30, -0.20,
    -0.30, -0.40, -0.40, -0.50, -0.50, -0.40, -0.40, -0.30,
    -0.30, -0.40, -0.40, -0.50, -0.50, -0.40, -0.40, -0.30,
    -0.30, -0.40, -0.40, -0.50, -0.50, -0.40, -0.40, -0.30,
    -0.30, -0.40, -0.40, -0.50, -0.50, -0.40, -0.40, -0.30,
];

const TABLES: [[f64; 64]; 6] = [PAWN, KNIGHT, BISHOP, ROOK, QUEEN, KING];

/// Positional bonus for `color`'s `piece` standing on `sq`.
#[inline]
#[must_use]
pub(crate) fn square_value(color: Color, piece: Piece, sq: Square) -> f64 {
    let relative = match color {
        Color::White => sq,
        Color::Black => sq.flip_vertical(),
    };
    TABLES[piece.index()][relative.index()]
}
