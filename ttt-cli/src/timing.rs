//! 搜索计时

use std::time::{Duration, Instant};

use ttt_ai::{AiEngine, Algorithm, Score};
use ttt_core::{Board, Player};

/// 一次完整局面评估的统计
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub algorithm: Algorithm,
    pub score: Score,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// 以 mover 先走评估 `board`，记录耗时和节点数
pub fn measure(engine: &mut AiEngine, board: &Board, mover: Player) -> SearchReport {
    let start = Instant::now();
    let score = engine.evaluate_position(board, mover);
    let elapsed = start.elapsed();

    SearchReport {
        algorithm: engine.algorithm(),
        score,
        nodes: engine.nodes_searched(),
        elapsed,
    }
}

impl std::fmt::Display for SearchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> Time: {:.4}s, Nodes: {}",
            self.algorithm,
            self.elapsed.as_secs_f64(),
            self.nodes
        )
    }
}
