//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, Player};
use crate::constants::{WinningLine, CELL_COUNT, WINNING_LINES};
use crate::error::{GameError, IllegalMoveReason};
use crate::status::GameStatus;

/// 棋盘
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// 3x3 棋盘，索引为 row * 3 + col
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// 从格子数组创建（不检查局面是否可达，测试与记法解析使用）
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// 清空棋盘
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// 获取指定格子，越界返回 None
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// 设置指定格子（不检查规则，越界忽略）
    ///
    /// 供搜索的落子/撤销使用；正常对局请走 [`Board::apply_move`]。
    pub fn set(&mut self, index: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
    }

    /// 全部格子
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// 空格索引（升序）
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// 指定玩家已下的子数
    pub fn mark_count(&self, player: Player) -> usize {
        let mark = player.cell();
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// 指定玩家是否已连成一线
    pub fn check_win(&self, player: Player) -> bool {
        self.winning_line(player).is_some()
    }

    /// 是否和棋：棋盘已满且双方都没有连线
    pub fn check_draw(&self) -> bool {
        self.is_full() && !self.check_win(Player::X) && !self.check_win(Player::O)
    }

    /// 指定玩家的第一条获胜连线（按行、列、对角线顺序）
    pub fn winning_line(&self, player: Player) -> Option<WinningLine> {
        let mark = player.cell();
        WINNING_LINES
            .iter()
            .find(|line| line.iter().all(|&index| self.cells[index] == mark))
            .copied()
    }

    /// 根据棋面推导对局状态（先检查 X，再检查 O）
    pub fn status(&self) -> GameStatus {
        for player in [Player::X, Player::O] {
            if let Some(line) = self.winning_line(player) {
                return GameStatus::Win { player, line };
            }
        }
        if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// 落子
    ///
    /// 越界、格子已占用或已终局时返回 `IllegalMove`，棋盘保持不变。
    /// 成功时返回落子后的状态；刚落子一方的连线优先于棋盘已满。
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<GameStatus, GameError> {
        let cell = self
            .get(index)
            .ok_or(GameError::illegal(index, IllegalMoveReason::OutOfRange))?;

        if self.status().is_terminal() {
            return Err(GameError::illegal(index, IllegalMoveReason::GameOver));
        }
        if !cell.is_empty() {
            return Err(GameError::illegal(index, IllegalMoveReason::Occupied));
        }

        self.cells[index] = player.cell();

        if let Some(line) = self.winning_line(player) {
            return Ok(GameStatus::Win { player, line });
        }
        if self.is_full() {
            return Ok(GameStatus::Draw);
        }
        Ok(GameStatus::InProgress)
    }
}

/// 创建新对局的空棋盘
pub fn new_game() -> Board {
    Board::empty()
}

/// 唯一的落子入口
pub fn play(board: &mut Board, index: usize, player: Player) -> Result<GameStatus, GameError> {
    board.apply_move(index, player)
}
