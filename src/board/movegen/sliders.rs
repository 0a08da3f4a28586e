use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::{Bitboard, Board, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_slider_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        let own = self.occupied[self.side_to_move.index()].0;
        let occ = self.all_occupied.0;
        let raw = match piece {
            Piece::Bishop => bishop_attacks(from.index(), occ),
            Piece::Rook => rook_attacks(from.index(), occ),
            _ => queen_attacks(from.index(), occ),
        };

        for to in Bitboard(raw & !own).iter() {
            moves.push(Move::new(from, to));
        }
    }
}
