use super::super::attack_tables::{PAWN_ATTACKS, PAWN_PUSHES};
use super::super::{bit_for_square, Bitboard, Board, Color, Move, MoveList, PROMOTION_PIECES};
use super::super::Square;

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let c_idx = color.index();
        let from_idx = from.index();
        let occ = self.all_occupied.0;

        // The en-passant target counts as a capturable enemy piece
        let mut enemy = self.occupied[color.opponent().index()].0;
        if let Some(ep) = self.en_passant_target {
            enemy |= bit_for_square(ep);
        }

        let mut pushes = PAWN_PUSHES[c_idx][from_idx] & !occ;
        if pushes != 0 {
            // A double push is blocked when the skipped square is occupied
            let step = if color == Color::White {
                from_idx + 8
            } else {
                from_idx - 8
            };
            if occ & (1u64 << step) != 0 {
                pushes = 0;
            }
        }

        let captures = PAWN_ATTACKS[c_idx][from_idx] & enemy;
        let promotion_rank = color.pawn_promotion_rank();

        for to in Bitboard(pushes | captures).iter() {
            if to.rank() == promotion_rank {
                for promo in PROMOTION_PIECES {
                    moves.push(Move::promotion(from, to, promo));
                }
            } else {
                moves.push(Move::new(from, to));
            }
        }
    }
}
