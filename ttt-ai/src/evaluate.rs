//! 终局评估函数

use ttt_core::{Board, Player};

use crate::search::{Score, DRAW, LOSS, WIN};

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 评估终局（mover 视角）
    ///
    /// 依次检查 mover 连线、opponent 连线、棋盘已满；都不满足时返回 None，
    /// 表示局面仍需继续搜索。
    pub fn terminal(board: &Board, mover: Player, opponent: Player) -> Option<Score> {
        if board.is_winner(mover) {
            Some(WIN)
        } else if board.is_winner(opponent) {
            Some(LOSS)
        } else if board.is_full() {
            Some(DRAW)
        } else {
            None
        }
    }
}
