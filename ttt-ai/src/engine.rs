//! 走法选择
//!
//! 对当前局面的每个合法走法调用搜索器，选出分数最高的走法。

use serde::{Deserialize, Serialize};
use tracing::debug;
use ttt_core::{Board, Move, Player};

use crate::alpha_beta::AlphaBeta;
use crate::minimax::Minimax;
use crate::search::{Algorithm, Score, Search, INFINITY};

/// AI 配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub algorithm: Algorithm,
}

impl AiConfig {
    pub fn from_algorithm(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_algorithm(Algorithm::AlphaBeta)
    }
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    searcher: Box<dyn Search + Send>,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        let searcher: Box<dyn Search + Send> = match config.algorithm {
            Algorithm::Minimax => Box::new(Minimax::new()),
            Algorithm::AlphaBeta => Box::new(AlphaBeta::new()),
        };
        Self { config, searcher }
    }

    /// 从算法创建
    pub fn from_algorithm(algorithm: Algorithm) -> Self {
        Self::new(AiConfig::from_algorithm(algorithm))
    }

    /// 搜索最佳走法
    ///
    /// 棋盘已满时返回 None。同分时保留枚举顺序中最先出现的走法。
    /// `board` 不会被修改，搜索在一份副本上进行。
    pub fn best_move(&mut self, board: &Board, mover: Player) -> Option<Move> {
        self.searcher.reset_nodes();

        let opponent = mover.opponent();
        let mut scratch = *board;
        let mut best_move = None;
        let mut best_score = -INFINITY;

        for mv in board.available_moves() {
            // 落子后轮到对手，因此 maximizing = false
            let searcher = &mut self.searcher;
            let score = scratch.with_move(mv, mover, |b| {
                searcher.evaluate(b, false, mover, opponent)
            });

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        debug!(
            "{} search for {}: best={:?}, score={}, nodes={}",
            self.config.algorithm,
            mover,
            best_move,
            best_score,
            self.searcher.nodes_searched()
        );

        best_move
    }

    /// 以 mover 先走评估整个局面
    pub fn evaluate_position(&mut self, board: &Board, mover: Player) -> Score {
        self.searcher.reset_nodes();
        let mut scratch = *board;
        let score = self.searcher.evaluate(&mut scratch, true, mover, mover.opponent());

        debug!(
            "{} evaluation for {}: score={}, nodes={}",
            self.config.algorithm,
            mover,
            score,
            self.searcher.nodes_searched()
        );

        score
    }

    /// 获取上一次搜索访问的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.searcher.nodes_searched()
    }

    /// 获取当前算法
    pub fn algorithm(&self) -> Algorithm {
        self.searcher.algorithm()
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::DRAW;

    const ALGORITHMS: [Algorithm; 2] = [Algorithm::Minimax, Algorithm::AlphaBeta];

    fn mv(row: u8, col: u8) -> Move {
        Move::new_unchecked(row, col)
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        for algorithm in ALGORITHMS {
            let mut engine = AiEngine::from_algorithm(algorithm);
            assert_eq!(engine.best_move(&board, Player::O), None);
            assert_eq!(engine.best_move(&board, Player::X), None);
        }
    }

    #[test]
    fn test_single_empty_cell() {
        let board: Board = "XOX/OXO/OX.".parse().unwrap();
        for algorithm in ALGORITHMS {
            let mut engine = AiEngine::from_algorithm(algorithm);
            assert_eq!(engine.best_move(&board, Player::X), Some(mv(2, 2)));
            assert_eq!(engine.best_move(&board, Player::O), Some(mv(2, 2)));
        }
    }

    #[test]
    fn test_completes_column() {
        let board: Board = "XOX/XOO/O.X".parse().unwrap();
        for algorithm in ALGORITHMS {
            let mut engine = AiEngine::from_algorithm(algorithm);
            assert_eq!(engine.best_move(&board, Player::O), Some(mv(2, 1)));
        }
    }

    #[test]
    fn test_takes_win_over_block() {
        // (0,2) 能挡住 X，但 (1,2) 直接获胜
        let board: Board = "XX./OO./X..".parse().unwrap();
        for algorithm in ALGORITHMS {
            let mut engine = AiEngine::from_algorithm(algorithm);
            assert_eq!(engine.best_move(&board, Player::O), Some(mv(1, 2)));
        }
    }

    #[test]
    fn test_tie_break_first_found() {
        // 空棋盘上每一步都是和棋，保留第一个
        for algorithm in ALGORITHMS {
            let mut engine = AiEngine::from_algorithm(algorithm);
            assert_eq!(engine.best_move(&Board::empty(), Player::X), Some(mv(0, 0)));
        }
    }

    #[test]
    fn test_engines_agree_on_openings() {
        let mut minimax = AiEngine::from_algorithm(Algorithm::Minimax);
        let mut alpha_beta = AiEngine::from_algorithm(Algorithm::AlphaBeta);

        for board in ["XO./.../...", "X../.O./...", ".../.X./...", "O../.X./..."] {
            let board: Board = board.parse().unwrap();
            let mover = board.side_to_move().unwrap();
            assert_eq!(
                minimax.best_move(&board, mover),
                alpha_beta.best_move(&board, mover),
                "{}",
                board.to_notation()
            );
            assert!(alpha_beta.nodes_searched() < minimax.nodes_searched());
        }
    }

    #[test]
    fn test_known_replies() {
        let mut engine = AiEngine::default();
        let board: Board = "XO./.../...".parse().unwrap();
        assert_eq!(engine.best_move(&board, Player::X), Some(mv(1, 0)));

        let board: Board = "X../.O./...".parse().unwrap();
        assert_eq!(engine.best_move(&board, Player::X), Some(mv(0, 1)));
    }

    #[test]
    fn test_board_not_mutated() {
        let board: Board = "X../.O./...".parse().unwrap();
        let before = board;
        let mut engine = AiEngine::default();
        engine.best_move(&board, Player::X);
        engine.evaluate_position(&board, Player::X);
        assert_eq!(board, before);
    }

    #[test]
    fn test_evaluate_position_nodes() {
        let mut minimax = AiEngine::from_algorithm(Algorithm::Minimax);
        assert_eq!(minimax.evaluate_position(&Board::empty(), Player::X), DRAW);
        assert_eq!(minimax.nodes_searched(), 549_946);

        let mut alpha_beta = AiEngine::from_algorithm(Algorithm::AlphaBeta);
        assert_eq!(alpha_beta.evaluate_position(&Board::empty(), Player::X), DRAW);
        assert_eq!(alpha_beta.nodes_searched(), 18_297);
    }

    #[test]
    fn test_config() {
        assert_eq!(AiConfig::default().algorithm, Algorithm::AlphaBeta);
        assert_eq!(AiEngine::default().algorithm(), Algorithm::AlphaBeta);

        let config: AiConfig = serde_json::from_str(r#"{"algorithm":"minimax"}"#).unwrap();
        assert_eq!(config.algorithm, Algorithm::Minimax);
        assert_eq!(
            serde_json::to_string(&AiConfig::default()).unwrap(),
            r#"{"algorithm":"alpha_beta"}"#
        );
    }
}
