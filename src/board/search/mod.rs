//! Minimax search with alpha-beta pruning.
//!
//! Features:
//! - Fixed-depth alpha-beta, White maximizing and Black minimizing
//! - Capture-first move ordering (most valuable victim first)
//! - Root moves fanned out over a bounded pool of scoped threads
//! - Random choice among equally scored root moves, from an injectable `Rng`
//!
//! There is no transposition table, quiescence or iterative deepening, and
//! positions without legal moves are scored statically like any other leaf.

mod move_order;
mod parallel;

use std::num::NonZeroUsize;
use std::thread;

use rand::Rng;

use super::{evaluate, Color, Move, Position};
pub use move_order::order_moves;

/// Default search depth in plies
pub const DEFAULT_DEPTH: usize = 3;

/// Outcome of a root search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The chosen move
    pub best_move: Move,
    /// Score of `best_move` in pawns, positive favoring White
    pub score: f64,
    /// Principal variation, starting with `best_move`
    pub pv: Vec<Move>,
}

/// Search depth and root parallelism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Depth in plies, counting the root move
    pub depth: usize,
    /// Upper bound on root subtrees searched at once
    pub concurrency: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            concurrency: thread::available_parallelism().map_or(1, NonZeroUsize::get),
        }
    }
}

impl SearchConfig {
    /// Set search depth
    #[must_use]
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Set root concurrency (at least one)
    #[must_use]
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Run a search on `position` with this configuration.
    #[must_use]
    pub fn search(&self, position: &Position) -> Option<SearchResult> {
        best_move(position, self.depth, self.concurrency)
    }
}

/// Best move for the side to move, or `None` if it has no legal moves.
///
/// Ties between equally scored root moves are broken with the thread-local
/// generator; use [`best_move_with_rng`] for reproducible results.
#[must_use]
pub fn best_move(position: &Position, depth: usize, concurrency: usize) -> Option<SearchResult> {
    best_move_with_rng(position, depth, concurrency, &mut rand::thread_rng())
}

/// Best move, breaking ties with `rng`.
///
/// Each root move is searched to `depth - 1` with a full window. The call
/// blocks until every root subtree is done.
pub fn best_move_with_rng<R: Rng + ?Sized>(
    position: &Position,
    depth: usize,
    concurrency: usize,
    rng: &mut R,
) -> Option<SearchResult> {
    let mut root = position.clone();
    let mut moves = root.legal_moves().into_vec();
    if moves.is_empty() {
        return None;
    }
    order_moves(&mut moves);

    let maximizing = position.side_to_move() == Color::White;
    let accumulator = parallel::search_root(
        position,
        &moves,
        depth.saturating_sub(1),
        concurrency,
        maximizing,
    );
    let result = accumulator.into_result(rng);
    if let Some(found) = &result {
        log::debug!(
            "searched {} root moves to depth {depth}: {} scores {:.2}",
            moves.len(),
            found.best_move,
            found.score
        );
    }
    result
}

/// Alpha-beta minimax from `position`, returning score and continuation.
///
/// The position is mutated during the search and restored before returning.
/// At `depth == 0`, or when the side to move has no legal moves, the static
/// evaluation is returned with an empty continuation.
pub fn minimax(position: &mut Position, depth: usize, alpha: f64, beta: f64) -> (f64, Vec<Move>) {
    if depth == 0 {
        return (evaluate(position), Vec::new());
    }

    let mut moves = position.legal_moves().into_vec();
    if moves.is_empty() {
        return (evaluate(position), Vec::new());
    }
    order_moves(&mut moves);

    let maximizing = position.side_to_move() == Color::White;
    let mut alpha = alpha;
    let mut beta = beta;
    let mut best_score = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut pv = Vec::new();

    for mv in moves {
        let delta = position.apply(mv);
        let (score, line) = minimax(position, depth - 1, alpha, beta);
        position.unapply(delta);

        let improved = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improved {
            best_score = score;
            pv = prepend(mv, line);
        }

        if maximizing {
            alpha = alpha.max(best_score);
        } else {
            beta = beta.min(best_score);
        }
        if beta <= alpha {
            break;
        }
    }

    (best_score, pv)
}

#[inline]
fn prepend(mv: Move, line: Vec<Move>) -> Vec<Move> {
    let mut pv = Vec::with_capacity(line.len() + 1);
    pv.push(mv);
    pv.extend(line);
    pv
}
