//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! White maximizes and Black minimizes; scores are always from White's
//! perspective. Terminal positions score `±MATE_SCORE` (checkmate) or 0
//! (stalemate). Leaf nodes use the material evaluation.

mod move_order;

use rand::rngs::ThreadRng;

use super::eval::evaluate;
use super::{Board, Color, Move};
use move_order::order_moves;

/// Checkmate score sentinel. Finite so small offsets cannot overflow.
pub const MATE_SCORE: i32 = i32::MAX / 2;

/// Result of a search from the root position.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// The best move found, or `None` when the position is terminal
    pub best_move: Option<Move>,
    /// Score of the best move, from White's perspective
    pub score: i32,
    /// Nodes visited
    pub nodes: u64,
}

struct SearchContext<'a> {
    board: &'a mut Board,
    rng: ThreadRng,
    nodes: u64,
}

/// Search to the given depth and return the best root move with its score.
#[must_use]
pub fn search(board: &mut Board, depth: u32) -> SearchResult {
    let mut ctx = SearchContext {
        board,
        rng: rand::thread_rng(),
        nodes: 0,
    };
    ctx.search_root(depth.max(1))
}

/// Search to the given depth and return only the best move.
#[must_use]
pub fn find_best_move(board: &mut Board, depth: u32) -> Option<Move> {
    search(board, depth).best_move
}

impl SearchContext<'_> {
    fn search_root(&mut self, depth: u32) -> SearchResult {
        let white = self.board.side_to_move() == Color::White;
        let moves = self.board.generate_moves();
        let ordered = order_moves(self.board, &moves);

        let mut best_move = None;
        let mut best_score = if white { i32::MIN } else { i32::MAX };

        for m in ordered.iter() {
            let info = self.board.make_move(m);
            let score = self.alpha_beta(depth - 1, i32::MIN, i32::MAX);
            self.board.unmake_move(m, info);

            if best_move.is_none()
                || (white && score > best_score)
                || (!white && score < best_score)
            {
                best_score = score;
                best_move = Some(m);
            }
        }

        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        }
    }

    fn alpha_beta(&mut self, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return evaluate(self.board, &mut self.rng);
        }

        let side = self.board.side_to_move();
        let moves = self.board.generate_moves();
        if moves.is_empty() {
            if self.board.is_in_check(side) {
                // The side to move is checkmated
                return if side == Color::White {
                    -MATE_SCORE
                } else {
                    MATE_SCORE
                };
            }
            return 0;
        }

        let ordered = order_moves(self.board, &moves);
        let white = side == Color::White;
        let mut best = if white { i32::MIN } else { i32::MAX };

        for m in ordered.iter() {
            let info = self.board.make_move(m);
            let score = self.alpha_beta(depth - 1, alpha, beta);
            self.board.unmake_move(m, info);

            if white {
                best = best.max(score);
                if best >= beta {
                    return best;
                }
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                if best <= alpha {
                    return best;
                }
                beta = beta.min(best);
            }
        }

        best
    }
}
