use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::{Bitboard, Board, Move, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        let own = self.occupied[self.side_to_move.index()].0;
        let targets = Bitboard(KNIGHT_ATTACKS[from.index()] & !own);
        for to in targets.iter() {
            moves.push(Move::new(from, to));
        }
    }
}
