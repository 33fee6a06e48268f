//! Apply/unapply tests.

use crate::board::{Color, Move, MoveDelta, Piece, Position, Square};
use rand::prelude::*;

fn find_move(pos: &mut Position, from: Square, to: Square, promotion: Option<Piece>) -> Move {
    for m in pos.legal_moves().iter() {
        if m.from() == from && m.to() == to && m.promotion() == promotion {
            return *m;
        }
    }
    panic!("Expected move not found");
}

fn assert_every_move_restores(fen: &str) {
    let mut pos = Position::from_fen(fen);
    let original = pos.clone();
    for mv in pos.legal_moves() {
        let delta = pos.apply(mv);
        assert_ne!(pos, original, "{mv} did not change the position");
        pos.unapply(delta);
        assert_eq!(pos, original, "{mv} was not undone in {fen}");
    }
}

#[test]
fn test_every_move_restores_position() {
    for fen in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b KQkq - 0 1",
        "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
    ] {
        assert_every_move_restores(fen);
    }
}

#[test]
fn test_en_passant_apply_unapply() {
    let mut pos =
        Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let original = pos.clone();
    let mv = find_move(&mut pos, Square(4, 4), Square(5, 5), None);
    assert!(mv.is_en_passant());

    let delta = pos.apply(mv);
    assert!(pos.board().is_empty(Square(4, 5)));
    assert_eq!(pos.en_passant_target(), None);
    assert_eq!(pos.halfmove_clock(), 0);

    pos.unapply(delta);
    assert_eq!(pos, original);
}

#[test]
fn test_promotion_apply_unapply() {
    let mut pos = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let original = pos.clone();
    let mv = find_move(&mut pos, Square(6, 0), Square(7, 0), Some(Piece::Queen));

    let delta = pos.apply(mv);
    assert_eq!(
        pos.board().piece_at(Square(7, 0)),
        Some((Color::White, Piece::Queen))
    );

    pos.unapply(delta);
    assert_eq!(pos, original);
    assert_eq!(
        pos.board().piece_at(Square(6, 0)),
        Some((Color::White, Piece::Pawn))
    );
}

#[test]
fn test_promotion_capture_restores_victim() {
    let mut pos = Position::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let original = pos.clone();
    let mv = find_move(&mut pos, Square(6, 0), Square(7, 1), Some(Piece::Knight));
    assert_eq!(mv.captured(), Some(Piece::Rook));

    let delta = pos.apply(mv);
    assert_eq!(
        pos.board().piece_at(Square(7, 1)),
        Some((Color::White, Piece::Knight))
    );
    pos.unapply(delta);
    assert_eq!(pos, original);
}

#[test]
fn test_resign_flips_side_only() {
    let mut pos = Position::new();
    let original = pos.clone();

    let delta = pos.apply(Move::Resign { color: Color::White });
    assert_eq!(pos.side_to_move(), Color::Black);
    assert_eq!(pos.board(), original.board());
    assert_eq!(pos.castling_rights(), original.castling_rights());

    pos.unapply(delta);
    assert_eq!(pos, original);
}

#[test]
fn test_after_leaves_original_untouched() {
    let pos = Position::new();
    let mv = Move::Quiet {
        color: Color::White,
        piece: Piece::Knight,
        from: Square(0, 1),
        to: Square(2, 2),
    };
    let next = pos.after(mv);
    assert_eq!(pos, Position::new());
    assert_eq!(next.side_to_move(), Color::Black);
    assert_eq!(
        next.to_fen(),
        "rnbqkbnr/pppppppp/8/8/8/2N5/PPPPPPPP/R1BQKBNR b KQkq - 1 1"
    );
}

#[test]
fn test_legal_moves_stable_after_apply_unapply() {
    let mut pos = Position::new();
    let initial_moves = pos.legal_moves();
    let mut initial_list: Vec<String> = initial_moves.iter().map(|m| m.to_string()).collect();
    initial_list.sort();

    for mv in initial_moves.iter() {
        let delta = pos.apply(*mv);
        pos.unapply(delta);
    }

    let mut after_list: Vec<String> = pos.legal_moves().iter().map(|m| m.to_string()).collect();
    after_list.sort();

    assert_eq!(initial_list, after_list);
}

#[test]
fn test_random_playout_round_trip_state() {
    let mut pos = Position::new();
    let initial = pos.clone();

    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut history: Vec<(Position, MoveDelta)> = Vec::new();

    for _ in 0..200 {
        let moves = pos.legal_moves();
        let Some(&mv) = moves.as_slice().choose(&mut rng) else {
            break;
        };
        let before = pos.clone();
        let delta = pos.apply(mv);
        history.push((before, delta));
    }

    while let Some((before, delta)) = history.pop() {
        pos.unapply(delta);
        assert_eq!(pos, before);
    }

    assert_eq!(pos, initial);
}
