//! 井字棋命令行前端
//!
//! 包含:
//! - 搜索计时
//! - AI 自我对弈
//! - 对局记录的控制台输出

pub mod game;
pub mod render;
pub mod timing;

pub use game::{GameOutcome, GameRecord, PlyRecord, SelfPlay};
pub use timing::{measure, SearchReport};
