use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ttt_ai::{AiEngine, Algorithm};
use ttt_cli::{measure, SelfPlay};
use ttt_core::{Board, Player};

fn main() -> Result<()> {
    // 初始化日志（输出到 stderr，不干扰对局输出）
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("ttt_cli=info".parse()?))
        .init();

    info!("井字棋搜索对比启动");

    let algorithms = [Algorithm::Minimax, Algorithm::AlphaBeta];

    for algorithm in algorithms {
        let mut engine = AiEngine::from_algorithm(algorithm);
        let report = measure(&mut engine, &Board::empty(), Player::X);
        println!("{}", report);
    }

    for algorithm in algorithms {
        let engine = AiEngine::from_algorithm(algorithm);
        let record = SelfPlay::new(engine, rand::thread_rng()).play()?;
        print!("{}", record);
        info!("{} 终局棋盘: {}", algorithm, record.final_board().to_notation());
    }

    Ok(())
}
