//! 对局记录的控制台输出

use std::fmt;

use ttt_core::Board;

use crate::game::GameRecord;

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "--- {} AI vs AI ---", self.algorithm)?;
        writeln!(f)?;
        write!(f, "{}", Board::empty())?;
        writeln!(f)?;

        for ply in &self.plies {
            if ply.random {
                writeln!(f, "{} (random start) moves to {}", ply.player, ply.mv)?;
            } else {
                writeln!(f, "{} moves to {}", ply.player, ply.mv)?;
            }
            write!(f, "{}", ply.board)?;
            writeln!(f)?;
        }

        writeln!(f, "{}", self.outcome)
    }
}
