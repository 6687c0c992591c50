//! 落子位置

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT};

/// 走法（落子的行列坐标，均在 0..3 之间）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 行 (0-2)
    pub row: u8,
    /// 列 (0-2)
    pub col: u8,
}

impl Move {
    /// 创建新走法（越界返回 None）
    pub fn new(row: u8, col: u8) -> Option<Self> {
        let mv = Self { row, col };
        mv.is_valid().then_some(mv)
    }

    /// 创建新走法（不检查边界，内部使用）
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查坐标是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// 转换为数组索引
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
