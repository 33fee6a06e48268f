//! Root fan-out over a bounded pool of scoped worker threads.
//!
//! Workers pull root moves from a shared cursor and search each subtree on
//! their own clone of the position. The accumulator behind a single mutex is
//! the only state they share.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use parking_lot::Mutex;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{minimax, prepend, Move, Position, SearchResult};

/// Search thread stack size (32 MB to handle deep recursion)
const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

/// One root move tied for the best score so far.
#[derive(Debug, Clone)]
struct Candidate {
    index: usize,
    mv: Move,
    pv: Vec<Move>,
}

/// Best score seen at the root and every move that reached it.
#[derive(Debug)]
pub(crate) struct RootAccumulator {
    maximizing: bool,
    best_score: Option<f64>,
    candidates: Vec<Candidate>,
}

impl RootAccumulator {
    pub(crate) fn new(maximizing: bool) -> Self {
        RootAccumulator {
            maximizing,
            best_score: None,
            candidates: Vec::new(),
        }
    }

    /// Fold in one finished root subtree.
    ///
    /// A strictly better score replaces the candidates; an equal one joins them.
    pub(crate) fn record(&mut self, index: usize, mv: Move, score: f64, line: Vec<Move>) {
        let candidate = Candidate {
            index,
            mv,
            pv: prepend(mv, line),
        };
        match self.best_score {
            Some(best) if score == best => self.candidates.push(candidate),
            Some(best) if (score > best) != self.maximizing => {}
            _ => {
                self.best_score = Some(score);
                self.candidates.clear();
                self.candidates.push(candidate);
            }
        }
    }

    /// Pick one of the tied candidates uniformly with `rng`.
    ///
    /// Candidates are put back in root order first so the pick does not
    /// depend on which worker finished first.
    pub(crate) fn into_result<R: Rng + ?Sized>(mut self, rng: &mut R) -> Option<SearchResult> {
        let score = self.best_score?;
        self.candidates.sort_by_key(|c| c.index);
        let chosen = self.candidates.choose(rng)?;
        Some(SearchResult {
            best_move: chosen.mv,
            score,
            pv: chosen.pv.clone(),
        })
    }
}

/// Search every root move to `child_depth`, at most `concurrency` at a time.
///
/// The calling thread works alongside `concurrency - 1` helpers and returns
/// once all root moves have been searched. If a helper cannot be spawned the
/// remaining threads drain the queue.
pub(crate) fn search_root(
    position: &Position,
    moves: &[Move],
    child_depth: usize,
    concurrency: usize,
    maximizing: bool,
) -> RootAccumulator {
    let cursor = AtomicUsize::new(0);
    let accumulator = Mutex::new(RootAccumulator::new(maximizing));

    let worker = || {
        let mut local = position.clone();
        loop {
            let index = cursor.fetch_add(1, Ordering::Relaxed);
            let Some(&mv) = moves.get(index) else {
                break;
            };
            let delta = local.apply(mv);
            let (score, line) = minimax(&mut local, child_depth, f64::NEG_INFINITY, f64::INFINITY);
            local.unapply(delta);
            accumulator.lock().record(index, mv, score, line);
        }
    };

    let helpers = concurrency.max(1).min(moves.len()).saturating_sub(1);
    thread::scope(|scope| {
        for worker_id in 1..=helpers {
            let spawned = thread::Builder::new()
                .name(format!("search-{worker_id}"))
                .stack_size(SEARCH_STACK_SIZE)
                .spawn_scoped(scope, &worker);
            if let Err(err) = spawned {
                log::warn!("could not spawn search-{worker_id}: {err}");
                break;
            }
        }
        worker();
    });

    accumulator.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Piece, Square};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pawn_push(file: usize) -> Move {
        Move::Quiet {
            color: Color::White,
            piece: Piece::Pawn,
            from: Square(1, file),
            to: Square(2, file),
        }
    }

    #[test]
    fn test_better_score_replaces_candidates() {
        let mut acc = RootAccumulator::new(true);
        acc.record(0, pawn_push(0), 0.5, Vec::new());
        acc.record(1, pawn_push(1), 0.5, Vec::new());
        acc.record(2, pawn_push(2), 0.75, Vec::new());
        acc.record(3, pawn_push(3), 0.25, Vec::new());

        let result = acc.into_result(&mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(result.best_move, pawn_push(2));
        assert_eq!(result.score, 0.75);
        assert_eq!(result.pv, vec![pawn_push(2)]);
    }

    #[test]
    fn test_minimizing_keeps_lowest() {
        let mut acc = RootAccumulator::new(false);
        acc.record(0, pawn_push(0), -0.5, Vec::new());
        acc.record(1, pawn_push(1), 1.0, Vec::new());
        acc.record(2, pawn_push(2), -2.0, vec![pawn_push(5)]);

        let result = acc.into_result(&mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(result.best_move, pawn_push(2));
        assert_eq!(result.pv, vec![pawn_push(2), pawn_push(5)]);
    }

    #[test]
    fn test_tie_pick_ignores_completion_order() {
        let mut forward = RootAccumulator::new(true);
        let mut backward = RootAccumulator::new(true);
        for i in 0..4 {
            forward.record(i, pawn_push(i), 0.0, Vec::new());
        }
        for i in (0..4).rev() {
            backward.record(i, pawn_push(i), 0.0, Vec::new());
        }

        let a = forward.into_result(&mut StdRng::seed_from_u64(42)).unwrap();
        let b = backward.into_result(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_accumulator() {
        let acc = RootAccumulator::new(true);
        assert!(acc.into_result(&mut StdRng::seed_from_u64(0)).is_none());
    }
}
