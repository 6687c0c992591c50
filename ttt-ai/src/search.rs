//! 搜索接口
//!
//! Minimax 与 Alpha-Beta 共用同一个 [`Search`] 接口，便于互相替换和对比。

use serde::{Deserialize, Serialize};
use ttt_core::{Board, Player};

/// 搜索结果（以 mover 视角）
pub type Score = i32;

/// mover 获胜
pub const WIN: Score = 1;

/// 和棋
pub const DRAW: Score = 0;

/// mover 失败
pub const LOSS: Score = -1;

/// Alpha/Beta 的无穷边界
pub const INFINITY: Score = i32::MAX - 1;

/// 搜索算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// 完整 Minimax，无剪枝
    Minimax,
    /// Alpha-Beta 剪枝
    AlphaBeta,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "Minimax"),
            Algorithm::AlphaBeta => write!(f, "Alpha-Beta"),
        }
    }
}

/// 博弈树搜索
pub trait Search {
    /// 搜索 `board` 的博弈论值
    ///
    /// `maximizing` 为 true 时轮到 `mover` 走，否则轮到 `opponent` 走。
    /// 返回值取自 {-1, 0, 1}，始终以 `mover` 视角。
    /// 返回前棋盘恢复原状。
    fn evaluate(
        &mut self,
        board: &mut Board,
        maximizing: bool,
        mover: Player,
        opponent: Player,
    ) -> Score;

    /// 自上次重置以来访问的节点数
    fn nodes_searched(&self) -> u64;

    /// 重置节点计数
    fn reset_nodes(&mut self);

    /// 算法类型
    fn algorithm(&self) -> Algorithm;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_display() {
        assert_eq!(Algorithm::Minimax.to_string(), "Minimax");
        assert_eq!(Algorithm::AlphaBeta.to_string(), "Alpha-Beta");
    }

    #[test]
    fn test_score_bounds() {
        assert!(-INFINITY < LOSS);
        assert!(LOSS < DRAW && DRAW < WIN);
        assert!(WIN < INFINITY);
    }
}
