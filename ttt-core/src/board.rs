//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT, SEPARATOR, WIN_LINES};
use crate::error::{BoardError, Result};
use crate::moves::Move;
use crate::player::Player;

/// 棋盘
///
/// 3x3 格子按行优先存储，`None` 表示空格。棋盘是值类型，
/// 不校验 X/O 数量是否符合交替落子，由调用方负责。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// 索引为 row * 3 + col
    squares: [Option<Player>; CELL_COUNT],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: [None; CELL_COUNT],
        }
    }

    /// 获取指定位置的棋子
    pub fn get(&self, mv: Move) -> Option<Player> {
        if mv.is_valid() {
            self.squares[mv.to_index()]
        } else {
            None
        }
    }

    /// 设置指定位置的棋子（不检查规则）
    pub fn set(&mut self, mv: Move, cell: Option<Player>) {
        if mv.is_valid() {
            self.squares[mv.to_index()] = cell;
        }
    }

    /// 落子（坐标必须在棋盘内，目标格必须为空）
    pub fn place(&mut self, mv: Move, player: Player) -> Result<()> {
        if !mv.is_valid() {
            return Err(BoardError::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }
        if self.get(mv).is_some() {
            return Err(BoardError::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }
        self.set(mv, Some(player));
        Ok(())
    }

    /// 临时落子并执行 `f`，返回前一定会撤销该落子
    ///
    /// 搜索中所有假设走法都通过这里进行，保证调用方看到的棋盘不变。
    pub fn with_move<T>(
        &mut self,
        mv: Move,
        player: Player,
        f: impl FnOnce(&mut Board) -> T,
    ) -> T {
        debug_assert!(self.get(mv).is_none(), "hypothetical move on occupied cell {}", mv);
        self.set(mv, Some(player));
        let result = f(self);
        self.set(mv, None);
        result
    }

    /// 所有空格，按行优先顺序
    pub fn available_moves(&self) -> Vec<Move> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .filter_map(|(index, _)| Move::from_index(index))
            .collect()
    }

    /// 指定玩家是否已连成一线
    pub fn is_winner(&self, player: Player) -> bool {
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&index| self.squares[index] == Some(player)))
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|cell| cell.is_some())
    }

    /// 获胜方（X 优先检查）
    pub fn winner(&self) -> Option<Player> {
        [Player::X, Player::O]
            .into_iter()
            .find(|&player| self.is_winner(player))
    }

    /// 是否为终局（有人获胜或棋盘已满）
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// 指定玩家的棋子数
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&cell| cell == Some(player))
            .count()
    }

    /// 按交替落子推断当前走子方
    ///
    /// 数量相等时 X 走，X 多一子时 O 走，其余情况不是合法对局中的局面。
    pub fn side_to_move(&self) -> Option<Player> {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        if x == o {
            Some(Player::X)
        } else if x == o + 1 {
            Some(Player::O)
        } else {
            None
        }
    }

    /// 按行获取格子
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Player>]> {
        self.squares.chunks(BOARD_SIZE)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or(' ', |player| player.to_char()).to_string())
                .collect();
            writeln!(f, "{}", cells.join(" | "))?;
            writeln!(f, "{}", SEPARATOR)?;
        }
        Ok(())
    }
}
