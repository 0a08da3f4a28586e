//! Move generation: pseudo-legal enumeration plus the legality filter.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Move, MoveList, Piece, Square};

impl Board {
    /// Enumerate pseudo-legal moves for the side to move: geometry and
    /// capture rules are respected, but the king may be left in check.
    pub(crate) fn generate_pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let c_idx = self.side_to_move.index();

        for from in self.pieces[c_idx][Piece::Pawn.index()].iter() {
            self.generate_pawn_moves(from, &mut moves);
        }
        for from in self.pieces[c_idx][Piece::Knight.index()].iter() {
            self.generate_knight_moves(from, &mut moves);
        }
        for piece in [Piece::Bishop, Piece::Rook, Piece::Queen] {
            for from in self.pieces[c_idx][piece.index()].iter() {
                self.generate_slider_moves(from, piece, &mut moves);
            }
        }
        for from in self.pieces[c_idx][Piece::King.index()].iter() {
            self.generate_king_moves(from, &mut moves);
        }

        moves
    }

    /// Generate all legal moves for the side to move.
    ///
    /// A pseudo-legal move survives iff the mover's king is not attacked
    /// after making it. Castling additionally requires the start, crossed,
    /// and destination squares to be safe before the move.
    #[must_use]
    pub fn generate_moves(&mut self) -> MoveList {
        let color = self.side_to_move;
        let opponent = color.opponent();
        let pseudo = self.generate_pseudo_moves();
        let mut legal = MoveList::new();

        for &m in &pseudo {
            if self.is_castle_move(m) {
                let mid = Square::new(
                    m.from().rank(),
                    usize::midpoint(m.from().file(), m.to().file()),
                );
                if self.is_square_attacked(m.from(), opponent)
                    || self.is_square_attacked(mid, opponent)
                    || self.is_square_attacked(m.to(), opponent)
                {
                    continue;
                }
            }

            let info = self.make_move(m);
            if !self.is_in_check(color) {
                legal.push(m);
            }
            self.unmake_move(m, info);
        }

        legal
    }

    /// A two-file king move is castling; nothing else moves a king that far.
    fn is_castle_move(&self, m: Move) -> bool {
        m.from().file().abs_diff(m.to().file()) == 2
            && matches!(self.piece_at(m.from()), Some((_, Piece::King)))
    }

    /// The side to move is in check with no legal reply.
    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check(self.side_to_move) && self.generate_moves().is_empty()
    }

    /// The side to move is not in check but has no legal reply.
    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check(self.side_to_move) && self.generate_moves().is_empty()
    }

    /// Count leaf nodes of the legal move tree to the given depth.
    #[must_use]
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for &m in &moves {
            let info = self.make_move(m);
            nodes += self.perft(depth - 1);
            self.unmake_move(m, info);
        }
        nodes
    }

    /// Perft split by root move: each legal move paired with the node
    /// count of its subtree. The sum equals `perft(depth)`.
    #[must_use]
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        let moves = self.generate_moves();
        let mut counts = Vec::with_capacity(moves.len());

        for &m in &moves {
            let info = self.make_move(m);
            let nodes = if depth > 1 { self.perft(depth - 1) } else { 1 };
            self.unmake_move(m, info);
            counts.push((m, nodes));
        }
        counts
    }
}
