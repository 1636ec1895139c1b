//! 文本渲染
//!
//! 只读取核心返回的状态值：棋盘、对局状态、获胜连线。

use protocol::{Board, Cell, GameSession, GameStatus, BOARD_SIZE};

/// 渲染棋盘：空格显示索引，获胜连线上的格子加方括号
pub fn render_board(board: &Board, status: &GameStatus) -> String {
    let highlight = status.winning_line();
    let is_highlighted = |index: usize| highlight.is_some_and(|line| line.contains(&index));

    let rows: Vec<String> = board
        .cells()
        .chunks(BOARD_SIZE)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let index = row * BOARD_SIZE + col;
                    let symbol = match cell {
                        Cell::Empty => char::from_digit(index as u32, 10).unwrap_or('?'),
                        _ => cell.to_char(),
                    };
                    if is_highlighted(index) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

/// 状态提示
pub fn status_message(session: &GameSession) -> String {
    match session.status() {
        GameStatus::InProgress => format!("{} to move", session.current_turn()),
        status => status.to_string(),
    }
}

/// 渲染完整画面
pub fn render(session: &GameSession) -> String {
    format!(
        "{}\n\n{}",
        render_board(session.board(), &session.status()),
        status_message(session)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use protocol::Notation;

    #[test]
    fn test_render_empty() {
        let session = GameSession::new();
        let text = render(&session);
        assert_eq!(
            text,
            " 0 | 1 | 2 \n---+---+---\n 3 | 4 | 5 \n---+---+---\n 6 | 7 | 8 \n\nX to move"
        );
    }

    #[test]
    fn test_render_highlights_winning_line() {
        let session = Notation::parse("XXX/OO./...").unwrap();
        let board = render_board(session.board(), &session.status());
        assert!(board.starts_with("[X]|[X]|[X]"));
        assert!(board.contains(" O | O | 5 "));
        assert_eq!(status_message(&session), "X wins!");
    }

    #[test]
    fn test_draw_message() {
        let session = Notation::parse("XOX/XOO/OXX").unwrap();
        assert_eq!(status_message(&session), "It's a draw!");
        assert!(!render(&session).contains('['));
    }
}
