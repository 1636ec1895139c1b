//! 井字棋共享协议库
//!
//! 包含:
//! - 玩家、格子、位置等核心数据结构
//! - 棋盘、落子规则、胜负/和棋判定
//! - 对局会话 (GameSession)
//! - 错误类型
//! - 局面记法

mod board;
mod cell;
mod constants;
mod error;
mod moves;
mod notation;
mod session;
mod status;

pub use board::{new_game, play, Board};
pub use cell::{Cell, Player, Position};
pub use constants::*;
pub use error::{GameError, IllegalMoveReason, ProtocolError, Result};
pub use moves::Move;
pub use notation::{Notation, EMPTY_NOTATION};
pub use session::GameSession;
pub use status::GameStatus;
