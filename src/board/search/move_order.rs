//! Move ordering for alpha-beta search.

use super::super::Move;

/// Material value of the piece a move takes, zero for non-captures.
#[inline]
fn capture_value(mv: &Move) -> f64 {
    mv.captured().map_or(0.0, |piece| piece.value())
}

/// Sort captures ahead of quiet moves, most valuable victim first.
///
/// The sort is stable, so moves of equal rank keep generator order.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by(|a, b| capture_value(b).total_cmp(&capture_value(a)));
}
