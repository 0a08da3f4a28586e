//! Board test suite.
//!
//! Organized into focused test modules:
//! - `movegen.rs` - Legal move generation scenarios and attack detection
//! - `make_unmake.rs` - Make/unmake round-trip tests
//! - `perft.rs` - Perft node counts against reference values
//! - `search.rs` - Search behavior tests
//! - `proptest.rs` - Property-based tests


use crate::board::{Board, Color, Piece};

/// Invariants that hold for every position reachable by legal play.
pub(crate) fn assert_position_invariants(board: &Board) {
    // Exactly one king per side
    for color in [Color::White, Color::Black] {
        assert_eq!(
            board.pieces[color.index()][Piece::King.index()].popcount(),
            1,
            "{color} must have exactly one king"
        );
    }

    // The twelve piece bitboards are pairwise disjoint and union to the
    // occupancy boards
    let mut seen = 0u64;
    for color in [Color::White, Color::Black] {
        let mut color_union = 0u64;
        for piece in Piece::ALL {
            let bb = board.pieces[color.index()][piece.index()].0;
            assert_eq!(seen & bb, 0, "piece bitboards overlap");
            seen |= bb;
            color_union |= bb;
        }
        assert_eq!(color_union, board.occupied[color.index()].0);
    }
    assert_eq!(seen, board.all_occupied.0);

    // No more than 16 pawns in total per side
    for color in [Color::White, Color::Black] {
        assert!(board.pieces[color.index()][Piece::Pawn.index()].popcount() <= 16);
    }

    // The en-passant target sits on rank 6 (White to move) or rank 3 (Black)
    if let Some(ep) = board.en_passant_target() {
        let expected_rank = if board.white_to_move() { 5 } else { 2 };
        assert_eq!(ep.rank(), expected_rank);
    }
}
