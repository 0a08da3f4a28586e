//! Applying and reverting moves.
//!
//! `make_move` assumes the move is legal for the current position (the
//! UCI surface validates against generated moves first; the search only
//! feeds generated moves). Violations are programming errors, not
//! runtime conditions.

use super::{Board, Color, Move, Piece, Square, UnmakeInfo};

impl Board {
    /// Apply a legal move, returning the record needed to revert it.
    pub fn make_move(&mut self, m: Move) -> UnmakeInfo {
        let color = self.side_to_move;
        let enemy = color.opponent();

        let previous_en_passant_target = self.en_passant_target;
        let previous_castling_rights = self.castling_rights;
        let previous_halfmove_clock = self.halfmove_clock;

        let (_, moving_piece) = self
            .piece_at(m.from())
            .expect("make_move: 'from' square empty");

        // Capture at the destination square
        let captured_piece = self.piece_at(m.to()).map(|(_, piece)| piece);
        if let Some(captured) = captured_piece {
            self.remove_piece(m.to(), enemy, captured);
            // A rook captured on its corner takes the castling right with it
            if captured == Piece::Rook {
                let corner_rank = enemy.back_rank();
                if m.to() == Square::new(corner_rank, 0) {
                    self.castling_rights.remove(enemy, false);
                } else if m.to() == Square::new(corner_rank, 7) {
                    self.castling_rights.remove(enemy, true);
                }
            }
        }

        // En passant: the captured pawn sits behind the (empty) target square
        let is_en_passant = captured_piece.is_none()
            && moving_piece == Piece::Pawn
            && Some(m.to()) == self.en_passant_target;
        if is_en_passant {
            let capture_rank = if color == Color::White {
                m.to().rank() - 1
            } else {
                m.to().rank() + 1
            };
            self.remove_piece(Square::new(capture_rank, m.to().file()), enemy, Piece::Pawn);
        }

        // Move the piece, swapping in the promotion piece if any
        self.remove_piece(m.from(), color, moving_piece);
        self.set_piece(m.to(), color, m.promoted_to().unwrap_or(moving_piece));

        if moving_piece == Piece::King {
            self.castling_rights.remove_both(color);
            // Castling: shuttle the rook across the king
            if m.from().file() == 4 {
                let rank = m.from().rank();
                if m.to().file() == 6 {
                    self.remove_piece(Square::new(rank, 7), color, Piece::Rook);
                    self.set_piece(Square::new(rank, 5), color, Piece::Rook);
                } else if m.to().file() == 2 {
                    self.remove_piece(Square::new(rank, 0), color, Piece::Rook);
                    self.set_piece(Square::new(rank, 3), color, Piece::Rook);
                }
            }
        } else if moving_piece == Piece::Rook {
            let rank = color.back_rank();
            if m.from() == Square::new(rank, 0) {
                self.castling_rights.remove(color, false);
            } else if m.from() == Square::new(rank, 7) {
                self.castling_rights.remove(color, true);
            }
        }

        // A double push leaves the skipped square as the en-passant target
        self.en_passant_target =
            if moving_piece == Piece::Pawn && m.from().rank().abs_diff(m.to().rank()) == 2 {
                let skipped = usize::midpoint(m.from().rank(), m.to().rank());
                Some(Square::new(skipped, m.from().file()))
            } else {
                None
            };

        if color == Color::Black {
            self.fullmove_number += 1;
        }
        if moving_piece == Piece::Pawn || captured_piece.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        self.side_to_move = enemy;

        UnmakeInfo {
            captured_piece,
            previous_en_passant_target,
            previous_castling_rights,
            previous_halfmove_clock,
        }
    }

    /// Revert a move applied by `make_move`, restoring the position exactly.
    pub fn unmake_move(&mut self, m: Move, info: UnmakeInfo) {
        self.side_to_move = self.side_to_move.opponent();
        let color = self.side_to_move;
        let enemy = color.opponent();

        let (_, piece_at_to) = self
            .piece_at(m.to())
            .expect("unmake_move: 'to' square empty");

        // Undo the piece placement, demoting promotions back to a pawn
        self.remove_piece(m.to(), color, piece_at_to);
        if m.promoted_to().is_some() {
            self.set_piece(m.from(), color, Piece::Pawn);
        } else {
            self.set_piece(m.from(), color, piece_at_to);
        }

        // En passant is identified by a pawn landing on the prior target
        // square with nothing recorded as captured there
        let was_en_passant = piece_at_to == Piece::Pawn
            && info.captured_piece.is_none()
            && Some(m.to()) == info.previous_en_passant_target;
        if was_en_passant {
            let capture_rank = if color == Color::White {
                m.to().rank() - 1
            } else {
                m.to().rank() + 1
            };
            self.set_piece(Square::new(capture_rank, m.to().file()), enemy, Piece::Pawn);
        } else if let Some(captured) = info.captured_piece {
            self.set_piece(m.to(), enemy, captured);
        }

        // Undo the rook leg of castling
        if piece_at_to == Piece::King && m.from().file() == 4 {
            let rank = m.from().rank();
            if m.to().file() == 6 {
                self.remove_piece(Square::new(rank, 5), color, Piece::Rook);
                self.set_piece(Square::new(rank, 7), color, Piece::Rook);
            } else if m.to().file() == 2 {
                self.remove_piece(Square::new(rank, 3), color, Piece::Rook);
                self.set_piece(Square::new(rank, 0), color, Piece::Rook);
            }
        }

        self.castling_rights = info.previous_castling_rights;
        self.en_passant_target = info.previous_en_passant_target;
        self.halfmove_clock = info.previous_halfmove_clock;
        if color == Color::Black {
            self.fullmove_number -= 1;
        }
    }
}
