//! 错误类型定义

use std::fmt;

use thiserror::Error;

/// 非法走法的具体原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// 索引超出 0-8
    OutOfRange,
    /// 格子已被占用
    Occupied,
    /// 游戏已结束
    GameOver,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IllegalMoveReason::OutOfRange => "index out of range",
            IllegalMoveReason::Occupied => "cell is already occupied",
            IllegalMoveReason::GameOver => "game is already over",
        };
        f.write_str(text)
    }
}

/// 游戏规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 非法走法
    #[error("Illegal move at index {index}: {reason}")]
    IllegalMove {
        index: usize,
        reason: IllegalMoveReason,
    },

    /// 在无子可下或已终局的棋盘上调用搜索
    #[error("Invalid search state: {reason}")]
    InvalidSearchState { reason: &'static str },

    /// 无效的局面记法
    #[error("Invalid notation: {reason}")]
    InvalidNotation { reason: String },
}

impl GameError {
    /// 构造非法走法错误
    pub fn illegal(index: usize, reason: IllegalMoveReason) -> Self {
        GameError::IllegalMove { index, reason }
    }
}

/// 协议错误类型（设置文件等 I/O 场景）
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 序列化错误
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// 无法定位配置目录
    #[error("Config directory unavailable")]
    NoConfigDir,

    /// 游戏规则错误
    #[error("Game error: {0}")]
    Game(#[from] GameError),
}

/// 协议操作结果类型
pub type Result<T> = std::result::Result<T, ProtocolError>;
