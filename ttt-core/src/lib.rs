//! 井字棋共享规则库
//!
//! 包含:
//! - 玩家、落子位置、棋盘等核心数据结构
//! - 胜负判定与可用走法枚举
//! - 棋盘文本记法与控制台渲染

mod board;
mod constants;
mod error;
mod moves;
mod notation;
mod player;

pub use board::Board;
pub use constants::*;
pub use error::{BoardError, Result};
pub use moves::Move;
pub use player::Player;
