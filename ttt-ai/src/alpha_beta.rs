//! Alpha-Beta 剪枝搜索
//!
//! 与 [`Minimax`](crate::Minimax) 的终局判定和递归结构相同，只是多带两个边界：
//! - `alpha`: 最大化一方已能保证的最好值
//! - `beta`: 最小化一方已能保证的最好值
//!
//! `beta <= alpha` 时剩余兄弟节点不再展开。剪枝只影响访问的节点数，不影响返回值。

use ttt_core::{Board, Player};

use crate::evaluate::Evaluator;
use crate::search::{Algorithm, Score, Search, INFINITY};

/// Alpha-Beta 搜索器
#[derive(Debug, Default)]
pub struct AlphaBeta {
    nodes_searched: u64,
}

impl AlphaBeta {
    /// 创建新的搜索器
    pub fn new() -> Self {
        Self::default()
    }

    /// 带显式边界的 Alpha-Beta 搜索
    pub fn evaluate_with_bounds(
        &mut self,
        board: &mut Board,
        maximizing: bool,
        mover: Player,
        opponent: Player,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.nodes_searched += 1;

        if let Some(score) = Evaluator::terminal(board, mover, opponent) {
            return score;
        }

        if maximizing {
            let mut best = -INFINITY;
            for mv in board.available_moves() {
                let score = board.with_move(mv, mover, |b| {
                    self.evaluate_with_bounds(b, false, mover, opponent, alpha, beta)
                });
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break; // Beta 剪枝
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for mv in board.available_moves() {
                let score = board.with_move(mv, opponent, |b| {
                    self.evaluate_with_bounds(b, true, mover, opponent, alpha, beta)
                });
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break; // Alpha 剪枝
                }
            }
            best
        }
    }
}

impl Search for AlphaBeta {
    fn evaluate(
        &mut self,
        board: &mut Board,
        maximizing: bool,
        mover: Player,
        opponent: Player,
    ) -> Score {
        self.evaluate_with_bounds(board, maximizing, mover, opponent, -INFINITY, INFINITY)
    }

    fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    fn reset_nodes(&mut self) {
        self.nodes_searched = 0;
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::AlphaBeta
    }
}
