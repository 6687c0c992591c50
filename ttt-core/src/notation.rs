//! 棋盘文本记法
//!
//! 三行以 `/` 分隔，每行三个字符：`X`、`O`，空格用 `.` 或空白表示。
//! 例如 `XOX/XOO/O.X`。

use std::str::FromStr;

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::error::BoardError;
use crate::moves::Move;
use crate::player::Player;

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim_matches('\n').split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::InvalidNotation {
                reason: format!("expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(BoardError::InvalidNotation {
                    reason: format!("row {} has {} cells", row, chars.len()),
                });
            }

            for (col, c) in chars.into_iter().enumerate() {
                let cell = match c {
                    '.' | ' ' => None,
                    _ => Some(Player::from_char(c).ok_or_else(|| BoardError::InvalidNotation {
                        reason: format!("unexpected character '{}'", c),
                    })?),
                };
                let mv = Move::new(row as u8, col as u8).ok_or_else(|| {
                    BoardError::InvalidNotation {
                        reason: format!("cell ({}, {}) is outside the board", row, col),
                    }
                })?;
                board.set(mv, cell);
            }
        }

        Ok(board)
    }
}

impl Board {
    /// 转换为文本记法
    pub fn to_notation(&self) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', |player| player.to_char()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}
