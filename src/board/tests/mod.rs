//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation
//! - `make_unmake.rs` - Apply/unapply correctness
//! - `edge_cases.rs` - Pins, checks, castling and en passant corner cases
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Minimax and root search
//! - `proptest.rs` - Property-based tests

mod make_unmake;
mod proptest;
mod search;
