//! Search algorithm tests.
//!
//! Alpha-beta against a plain minimax, root fan-out and tie-breaking.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{
    best_move, best_move_with_rng, evaluate, minimax, Color, Position, SearchConfig,
};

/// Full-width minimax with no pruning.
fn plain_minimax(pos: &mut Position, depth: usize) -> f64 {
    if depth == 0 {
        return evaluate(pos);
    }
    let moves = pos.legal_moves();
    if moves.is_empty() {
        return evaluate(pos);
    }
    let maximizing = pos.side_to_move() == Color::White;
    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    for mv in moves {
        let delta = pos.apply(mv);
        let score = plain_minimax(pos, depth - 1);
        pos.unapply(delta);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

const MIDDLEGAME: &str = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";

// ============================================================================
// Alpha-beta
// ============================================================================

#[test]
fn alphabeta_matches_plain_minimax() {
    for (fen, depth) in [
        (MIDDLEGAME, 3),
        ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 3),
        ("4k3/8/8/3q4/4P3/8/8/4K3 b - - 0 1", 3),
    ] {
        let mut pos = Position::from_fen(fen);
        let expected = plain_minimax(&mut pos, depth);
        let (score, pv) = minimax(&mut pos, depth, f64::NEG_INFINITY, f64::INFINITY);
        assert_eq!(score, expected, "{fen}");
        assert!(!pv.is_empty());
        assert_eq!(pos.to_fen(), fen, "search must restore the position");
    }
}

#[test]
fn minimax_depth_zero_is_static_eval() {
    let mut pos = Position::from_fen(MIDDLEGAME);
    let (score, pv) = minimax(&mut pos, 0, f64::NEG_INFINITY, f64::INFINITY);
    assert_eq!(score, evaluate(&pos));
    assert!(pv.is_empty());
}

#[test]
fn minimax_without_moves_is_static_eval() {
    // Checkmated: no mate score, only material and placement
    let mut pos = Position::from_fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    let (score, pv) = minimax(&mut pos, 3, f64::NEG_INFINITY, f64::INFINITY);
    assert_eq!(score, evaluate(&pos));
    assert!(pv.is_empty());
}

#[test]
fn minimax_pv_replays_legally() {
    let mut pos = Position::from_fen(MIDDLEGAME);
    let (_, pv) = minimax(&mut pos, 3, f64::NEG_INFINITY, f64::INFINITY);
    assert_eq!(pv.len(), 3);
    for mv in pv {
        assert!(pos.legal_moves().contains(&mv), "{mv} is not legal");
        pos.apply(mv);
    }
}

// ============================================================================
// Root search
// ============================================================================

#[test]
fn finds_hanging_queen() {
    let pos = Position::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
    for depth in 1..=3 {
        let result = best_move(&pos, depth, 2).expect("white has moves");
        assert_eq!(result.best_move.to_string(), "e4d5", "depth {depth}");
        assert_eq!(result.pv[0], result.best_move);
    }
}

#[test]
fn black_minimizes() {
    let pos = Position::from_fen("4k3/8/8/4p3/3Q4/8/8/4K3 b - - 0 1");
    let result = best_move(&pos, 2, 1).expect("black has moves");
    assert_eq!(result.best_move.to_string(), "e5d4");
    assert!(result.score < 0.0);
}

#[test]
fn root_score_matches_minimax() {
    let pos = Position::from_fen(MIDDLEGAME);
    let mut rng = StdRng::seed_from_u64(7);
    let result = best_move_with_rng(&pos, 3, 4, &mut rng).expect("moves exist");

    let mut copy = pos.clone();
    let (expected, _) = minimax(&mut copy, 3, f64::NEG_INFINITY, f64::INFINITY);
    assert_eq!(result.score, expected);
}

#[test]
fn seeded_search_is_reproducible() {
    let pos = Position::new();
    let a = best_move_with_rng(&pos, 2, 1, &mut StdRng::seed_from_u64(99));
    let b = best_move_with_rng(&pos, 2, 1, &mut StdRng::seed_from_u64(99));
    assert_eq!(a, b);
}

#[test]
fn concurrency_does_not_change_result() {
    let pos = Position::from_fen(MIDDLEGAME);
    let single = best_move_with_rng(&pos, 3, 1, &mut StdRng::seed_from_u64(3));
    for concurrency in [2, 4, 64] {
        let parallel = best_move_with_rng(&pos, 3, concurrency, &mut StdRng::seed_from_u64(3));
        assert_eq!(single, parallel, "concurrency {concurrency}");
    }
}

#[test]
fn no_moves_returns_none() {
    let stalemate = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(best_move(&stalemate, 3, 2).is_none());
}

#[test]
fn search_leaves_input_untouched() {
    let pos = Position::from_fen(MIDDLEGAME);
    let _ = best_move(&pos, 2, 2);
    assert_eq!(pos.to_fen(), MIDDLEGAME);
}

#[test]
fn search_config_builder() {
    let config = SearchConfig::default().depth(2).concurrency(0);
    assert_eq!(config.depth, 2);
    assert_eq!(config.concurrency, 1);
    assert!(config.search(&Position::new()).is_some());
}
