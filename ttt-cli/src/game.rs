//! AI 自我对弈
//!
//! X 先随机落一子，之后双方交替使用同一个引擎选择最佳走法，
//! 直到一方连线或棋盘下满。

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;
use ttt_ai::{AiEngine, Algorithm};
use ttt_core::{Board, Move, Player};

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// 一方获胜
    Win(Player),
    /// 和棋
    Tie,
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "{} wins!", player),
            GameOutcome::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// 单步记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlyRecord {
    pub player: Player,
    pub mv: Move,
    /// 是否为随机开局
    pub random: bool,
    /// 落子后的棋盘
    pub board: Board,
}

/// 完整对局记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub algorithm: Algorithm,
    pub plies: Vec<PlyRecord>,
    pub outcome: GameOutcome,
}

impl GameRecord {
    /// 终局棋盘
    pub fn final_board(&self) -> Board {
        self.plies.last().map(|ply| ply.board).unwrap_or_default()
    }
}

/// 自我对弈
pub struct SelfPlay<R: Rng> {
    engine: AiEngine,
    rng: R,
}

impl<R: Rng> SelfPlay<R> {
    pub fn new(engine: AiEngine, rng: R) -> Self {
        Self { engine, rng }
    }

    /// 下完一整局
    pub fn play(&mut self) -> ttt_core::Result<GameRecord> {
        let mut board = Board::empty();
        let mut plies = Vec::new();
        let mut current = Player::X;

        if let Some(&opening) = board.available_moves().choose(&mut self.rng) {
            board.place(opening, current)?;
            plies.push(PlyRecord {
                player: current,
                mv: opening,
                random: true,
                board,
            });
            current = current.opponent();
        }

        let outcome = loop {
            if let Some(mv) = self.engine.best_move(&board, current) {
                board.place(mv, current)?;
                plies.push(PlyRecord {
                    player: current,
                    mv,
                    random: false,
                    board,
                });
            }

            if board.is_winner(current) {
                break GameOutcome::Win(current);
            }
            if board.is_full() {
                break GameOutcome::Tie;
            }
            current = current.opponent();
        };

        let algorithm = self.engine.algorithm();
        info!("{} 自我对弈结束: {}（共 {} 步）", algorithm, outcome, plies.len());

        Ok(GameRecord {
            algorithm,
            plies,
            outcome,
        })
    }
}
