//! 井字棋 AI 引擎
//!
//! 包含:
//! - 终局评估
//! - 完整 Minimax 搜索
//! - Alpha-Beta 剪枝搜索（与 Minimax 结果一致，访问节点更少）
//! - 最佳走法选择

mod alpha_beta;
mod engine;
mod evaluate;
mod minimax;
mod search;

pub use alpha_beta::AlphaBeta;
pub use engine::{AiConfig, AiEngine};
pub use evaluate::Evaluator;
pub use minimax::Minimax;
pub use search::{Algorithm, Score, Search, DRAW, INFINITY, LOSS, WIN};
