use super::super::attack_tables::{
    bishop_attacks, rook_attacks, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS,
};
use super::super::{Bitboard, Board, Color, Move, MoveList, Piece, Square};

// Squares that must be empty between king and rook
const WHITE_KINGSIDE_GAP: u64 = 0x60; // f1, g1
const WHITE_QUEENSIDE_GAP: u64 = 0x0E; // b1, c1, d1
const BLACK_KINGSIDE_GAP: u64 = WHITE_KINGSIDE_GAP << 56;
const BLACK_QUEENSIDE_GAP: u64 = WHITE_QUEENSIDE_GAP << 56;

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let own = self.occupied[color.index()].0;
        let targets = Bitboard(KING_ATTACKS[from.index()] & !own);
        for to in targets.iter() {
            moves.push(Move::new(from, to));
        }

        // Castling candidates: right still held, gap clear, rook at home.
        // The king-safety conditions are enforced by the legality filter.
        let back_rank = color.back_rank();
        if from != Square::new(back_rank, 4) {
            return;
        }
        let occ = self.all_occupied.0;
        let (kingside_gap, queenside_gap) = if color == Color::White {
            (WHITE_KINGSIDE_GAP, WHITE_QUEENSIDE_GAP)
        } else {
            (BLACK_KINGSIDE_GAP, BLACK_QUEENSIDE_GAP)
        };

        if self.castling_rights.has(color, true)
            && occ & kingside_gap == 0
            && self.piece_at(Square::new(back_rank, 7)) == Some((color, Piece::Rook))
        {
            moves.push(Move::new(from, Square::new(back_rank, 6)));
        }
        if self.castling_rights.has(color, false)
            && occ & queenside_gap == 0
            && self.piece_at(Square::new(back_rank, 0)) == Some((color, Piece::Rook))
        {
            moves.push(Move::new(from, Square::new(back_rank, 2)));
        }
    }

    /// The square of `color`'s king.
    pub(crate) fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces[color.index()][Piece::King.index()].iter().next()
    }

    /// True iff any piece of `attacker` attacks `square`.
    ///
    /// Pawn attacks are reciprocal: the squares from which an attacker's
    /// pawn reaches `square` are exactly the defender's pawn-attack set
    /// from `square`.
    pub(crate) fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        let target = square.index();
        let a_idx = attacker.index();

        let pawn_sources = PAWN_ATTACKS[attacker.opponent().index()][target];
        if self.pieces[a_idx][Piece::Pawn.index()].0 & pawn_sources != 0 {
            return true;
        }

        if self.pieces[a_idx][Piece::Knight.index()].0 & KNIGHT_ATTACKS[target] != 0 {
            return true;
        }

        if self.pieces[a_idx][Piece::King.index()].0 & KING_ATTACKS[target] != 0 {
            return true;
        }

        let rook_like =
            self.pieces[a_idx][Piece::Rook.index()].0 | self.pieces[a_idx][Piece::Queen.index()].0;
        if rook_attacks(target, self.all_occupied.0) & rook_like != 0 {
            return true;
        }

        let bishop_like = self.pieces[a_idx][Piece::Bishop.index()].0
            | self.pieces[a_idx][Piece::Queen.index()].0;
        if bishop_attacks(target, self.all_occupied.0) & bishop_like != 0 {
            return true;
        }

        false
    }

    /// True iff `color`'s king is attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color.opponent()),
            None => false,
        }
    }
}
