//! 对局会话
//!
//! 棋盘、走子方、对局状态和走法历史集中在一个值里，由调用方持有。

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::cell::Player;
use crate::error::GameError;
use crate::moves::Move;
use crate::status::GameStatus;

/// 对局会话
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    current_turn: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameSession {
    /// 新对局：空棋盘，X 先手
    pub fn new() -> Self {
        Self::from_board(Board::empty(), Player::X)
    }

    /// 从给定棋盘创建会话，状态由棋面推导
    pub fn from_board(board: Board, current_turn: Player) -> Self {
        Self {
            status: board.status(),
            board,
            current_turn,
            history: Vec::new(),
        }
    }

    /// 当前走子方落子
    ///
    /// 失败时会话不变；未终局时轮到对方。
    pub fn play(&mut self, index: usize) -> Result<GameStatus, GameError> {
        let player = self.current_turn;
        let status = self.board.apply_move(index, player)?;

        self.history.push(Move::new(index, player));
        self.status = status;
        if !status.is_terminal() {
            self.current_turn = player.opponent();
        }

        debug!("{} 落子 {}，状态: {:?}", player, index, status);
        Ok(status)
    }

    /// 重新开始
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_turn = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// 本局已走的步（从会话创建或重置开始）
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
