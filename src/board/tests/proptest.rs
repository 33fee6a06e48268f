//! Property-based tests using proptest.

use crate::board::{Position, Square};
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves from the starting position.
fn random_position(seed: u64, num_moves: usize) -> Position {
    let mut pos = Position::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = pos.legal_moves();
        let Some(&mv) = moves.as_slice().choose(&mut rng) else {
            break;
        };
        pos.apply(mv);
    }
    pos
}

proptest! {
    /// Property: apply followed by unapply restores the position exactly
    #[test]
    fn prop_apply_unapply_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut pos = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = pos.clone();
        let mut history = Vec::new();

        for _ in 0..num_moves {
            let moves = pos.legal_moves();
            let Some(&mv) = moves.as_slice().choose(&mut rng) else {
                break;
            };
            history.push(pos.apply(mv));
        }

        while let Some(delta) = history.pop() {
            pos.unapply(delta);
        }

        prop_assert_eq!(pos, initial);
    }

    /// Property: FEN round-trip preserves the position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let pos = random_position(seed, num_moves);
        let fen = pos.to_fen();
        let restored = Position::try_from_fen(&fen);
        prop_assert_eq!(restored, Ok(pos));
    }

    /// Property: legal moves never leave the mover's king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut pos = random_position(seed, num_moves);
        let color = pos.side_to_move();
        let pseudo = pos.pseudo_legal_moves();

        for mv in pos.legal_moves() {
            prop_assert!(pseudo.contains(&mv), "{} is not pseudo-legal", mv);
            let after = pos.after(mv);
            prop_assert!(!after.is_in_check(color), "Legal move left king in check: {}", mv);
        }
    }

    /// Property: per-square generation partitions the full move list
    #[test]
    fn prop_moves_from_squares_cover_all(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut pos = random_position(seed, num_moves);
        let all = pos.legal_moves();

        let mut total = 0;
        for idx in 0..64 {
            let from_square = pos.legal_moves_from(Square::from_index(idx));
            for mv in from_square.iter() {
                prop_assert!(all.contains(mv));
            }
            total += from_square.len();
        }
        prop_assert_eq!(total, all.len());
    }

    /// Property: every legal move resolves from its coordinate text
    #[test]
    fn prop_coordinate_text_resolves(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut pos = random_position(seed, num_moves);
        for mv in pos.legal_moves() {
            prop_assert_eq!(pos.find_move(&mv.to_string()), Ok(mv));
        }
    }
}
