//! 玩家定义

use serde::{Deserialize, Serialize};

/// 玩家（棋子标记）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// X（先手）
    X,
    /// O（后手）
    O,
}

impl Player {
    /// 获取对手
    pub fn opponent(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// 获取显示字符
    pub fn to_char(&self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// 从字符解析（大小写均可）
    pub fn from_char(c: char) -> Option<Player> {
        match c {
            'X' | 'x' => Some(Player::X),
            'O' | 'o' => Some(Player::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
