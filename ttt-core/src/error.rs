//! 错误类型定义

use thiserror::Error;

/// 棋盘操作错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// 坐标越界
    #[error("Move ({row}, {col}) is outside the board")]
    OutOfBounds { row: u8, col: u8 },

    /// 目标格已有棋子
    #[error("Cell ({row}, {col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },

    /// 无效的棋盘记法
    #[error("Invalid board notation: {reason}")]
    InvalidNotation { reason: String },
}

/// 棋盘操作结果类型
pub type Result<T> = std::result::Result<T, BoardError>;
