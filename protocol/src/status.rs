//! 对局状态

use serde::{Deserialize, Serialize};

use crate::cell::Player;
use crate::constants::WinningLine;

/// 对局状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// 进行中
    InProgress,
    /// 某方连成一线获胜
    Win { player: Player, line: WinningLine },
    /// 棋盘已满且无人获胜
    Draw,
}

impl GameStatus {
    /// 是否已终局
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// 获胜方
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// 需要高亮的获胜连线
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Win { player, .. } => write!(f, "{} wins!", player),
            GameStatus::Draw => write!(f, "It's a draw!"),
        }
    }
}
