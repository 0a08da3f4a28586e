//! Material evaluation.

use rand::Rng;

use super::{Board, Color, Piece};

/// Material value in centipawns. The king value is an ordering sentinel;
/// kings are never captured.
#[must_use]
pub(crate) const fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 100,
        Piece::Knight | Piece::Bishop => 300,
        Piece::Rook => 500,
        Piece::Queen => 900,
        Piece::King => i32::MAX / 2,
    }
}

/// Material balance from White's perspective: positive means White is up.
#[must_use]
pub fn material_balance(board: &Board) -> i32 {
    let mut eval = 0;
    for piece in [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
    ] {
        let value = piece_value(piece);
        eval += value * board.pieces[Color::White.index()][piece.index()].popcount() as i32;
        eval -= value * board.pieces[Color::Black.index()][piece.index()].popcount() as i32;
    }
    eval
}

/// Static evaluation: material plus a small uniform tie-break so the
/// engine varies its play among materially equal moves.
pub(crate) fn evaluate(board: &Board, rng: &mut impl Rng) -> i32 {
    material_balance(board) + rng.gen_range(-5..=5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_initial_position_is_balanced() {
        assert_eq!(material_balance(&Board::new()), 0);
    }

    #[test]
    fn test_material_balance_counts_pieces() {
        // White is up a queen for a knight
        let board = Board::from_fen("1k6/8/8/8/8/8/8/QK1n4 w - - 0 1");
        assert_eq!(material_balance(&board), 900 - 300);
    }

    #[test]
    fn test_evaluate_stays_within_tie_break_band() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let score = evaluate(&board, &mut rng);
            assert!((-5..=5).contains(&score));
        }
    }
}
