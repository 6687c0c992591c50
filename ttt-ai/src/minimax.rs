//! 完整 Minimax 搜索
//!
//! 不做任何剪枝，遍历每一个合法后继，作为 Alpha-Beta 的对照基线。

use ttt_core::{Board, Player};

use crate::evaluate::Evaluator;
use crate::search::{Algorithm, Score, Search, INFINITY};

/// Minimax 搜索器
#[derive(Debug, Default)]
pub struct Minimax {
    nodes_searched: u64,
}

impl Minimax {
    /// 创建新的搜索器
    pub fn new() -> Self {
        Self::default()
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        maximizing: bool,
        mover: Player,
        opponent: Player,
    ) -> Score {
        self.nodes_searched += 1;

        if let Some(score) = Evaluator::terminal(board, mover, opponent) {
            return score;
        }

        // 非终局必有空格，下面的循环至少执行一次
        let to_move = if maximizing { mover } else { opponent };
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mv in board.available_moves() {
            let score = board.with_move(mv, to_move, |b| {
                self.minimax(b, !maximizing, mover, opponent)
            });
            best = if maximizing { best.max(score) } else { best.min(score) };
        }

        debug_assert!(best.abs() <= 1, "non-terminal position without moves");
        best
    }
}

impl Search for Minimax {
    fn evaluate(
        &mut self,
        board: &mut Board,
        maximizing: bool,
        mover: Player,
        opponent: Player,
    ) -> Score {
        self.minimax(board, maximizing, mover, opponent)
    }

    fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    fn reset_nodes(&mut self) {
        self.nodes_searched = 0;
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Minimax
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{DRAW, LOSS, WIN};

    #[test]
    fn test_empty_board_is_draw() {
        let mut board = Board::empty();
        let mut search = Minimax::new();

        let score = search.evaluate(&mut board, true, Player::X, Player::O);

        assert_eq!(score, DRAW);
        assert_eq!(search.nodes_searched(), 549_946);
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn test_terminal_counts_one_node() {
        let mut board: Board = "XOX/XOO/OXX".parse().unwrap();
        let mut search = Minimax::new();

        assert_eq!(search.evaluate(&mut board, true, Player::X, Player::O), DRAW);
        assert_eq!(search.nodes_searched(), 1);
    }

    #[test]
    fn test_forced_win_and_loss() {
        // O 走 (2,1) 完成中列
        let mut board: Board = "XOX/XOO/O.X".parse().unwrap();
        let mut search = Minimax::new();

        assert_eq!(search.evaluate(&mut board, true, Player::O, Player::X), WIN);
        // 同一局面若轮到 X 走，X 填入 (2,1) 后棋盘满且无人连线
        assert_eq!(search.evaluate(&mut board, false, Player::O, Player::X), DRAW);
        assert_eq!(search.evaluate(&mut board, true, Player::X, Player::O), DRAW);
        assert_eq!(search.evaluate(&mut board, false, Player::X, Player::O), LOSS);
    }

    #[test]
    fn test_reset_nodes() {
        let mut board: Board = "XO./.../...".parse().unwrap();
        let mut search = Minimax::new();

        search.evaluate(&mut board, true, Player::X, Player::O);
        assert_eq!(search.nodes_searched(), 8_232);

        search.reset_nodes();
        assert_eq!(search.nodes_searched(), 0);
    }
}
