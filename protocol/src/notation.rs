//! 局面记法解析和生成
//!
//! 格式：`<第一行>/<第二行>/<第三行> [走子方]`
//!
//! 每行三个字符，`X` / `O` 为棋子（不区分大小写），`.` 为空格。
//! 走子方可省略，省略时按双方子数推断。
//!
//! 示例：`XX./OO./... o`

use crate::board::Board;
use crate::cell::{Cell, Player};
use crate::constants::{BOARD_SIZE, CELL_COUNT};
use crate::error::GameError;
use crate::session::GameSession;

/// 空棋盘记法
pub const EMPTY_NOTATION: &str = ".../.../... x";

/// 局面记法处理
pub struct Notation;

impl Notation {
    /// 解析为对局会话
    pub fn parse(text: &str) -> Result<GameSession, GameError> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        let Some(board_part) = parts.first() else {
            return Err(invalid("Empty notation string"));
        };
        if parts.len() > 2 {
            return Err(invalid(format!("Expected at most 2 fields, got {}", parts.len())));
        }

        let board = Self::parse_board(board_part)?;

        let current_turn = match parts.get(1) {
            Some(side) => {
                let mut chars = side.chars();
                match (chars.next().and_then(Player::from_char), chars.next()) {
                    (Some(player), None) => player,
                    _ => return Err(invalid(format!("Invalid side to move: {}", side))),
                }
            }
            None => Self::infer_turn(&board)?,
        };

        Ok(GameSession::from_board(board, current_turn))
    }

    /// 解析棋盘部分（不检查局面是否可达）
    pub fn parse_board(board_str: &str) -> Result<Board, GameError> {
        let rows: Vec<&str> = board_str.split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(invalid(format!(
                "Expected {} rows, got {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (row_idx, row) in rows.iter().enumerate() {
            let row_cells: Vec<Cell> = row
                .chars()
                .map(|c| Cell::from_char(c).ok_or_else(|| invalid(format!("Invalid cell character: {}", c))))
                .collect::<Result<_, _>>()?;

            if row_cells.len() != BOARD_SIZE {
                return Err(invalid(format!(
                    "Row {} has {} columns, expected {}",
                    row_idx,
                    row_cells.len(),
                    BOARD_SIZE
                )));
            }

            for (col, cell) in row_cells.into_iter().enumerate() {
                cells[row_idx * BOARD_SIZE + col] = cell;
            }
        }

        Ok(Board::from_cells(cells))
    }

    /// 将会话转换为记法
    pub fn to_string(session: &GameSession) -> String {
        format!(
            "{} {}",
            Self::board_to_string(session.board()),
            session.current_turn().to_char().to_ascii_lowercase()
        )
    }

    /// 将棋盘转换为记法的棋盘部分
    pub fn board_to_string(board: &Board) -> String {
        board
            .cells()
            .chunks(BOARD_SIZE)
            .map(|row| row.iter().map(Cell::to_char).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// 按子数推断走子方：子数相等 X 走，X 多一子 O 走
    fn infer_turn(board: &Board) -> Result<Player, GameError> {
        let x = board.mark_count(Player::X);
        let o = board.mark_count(Player::O);
        if x == o {
            Ok(Player::X)
        } else if x == o + 1 {
            Ok(Player::O)
        } else {
            Err(invalid(format!(
                "Cannot infer side to move from {} X and {} O",
                x, o
            )))
        }
    }
}

fn invalid(reason: impl Into<String>) -> GameError {
    GameError::InvalidNotation {
        reason: reason.into(),
    }
}
