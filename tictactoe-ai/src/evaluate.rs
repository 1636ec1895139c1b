//! 终局评估函数

use protocol::{Board, Player, WIN_SCORE};

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 终局分值（最大化方视角），未终局返回 None
    ///
    /// - 最小化方连线：`-10 + depth`
    /// - 最大化方连线：`10 - depth`
    /// - 棋盘已满且无连线：`0`
    ///
    /// 先检查最小化方。`depth` 为距离搜索根的步数。
    pub fn terminal_score(board: &Board, maximizer: Player, depth: u32) -> Option<i32> {
        let depth = depth as i32;

        if board.check_win(maximizer.opponent()) {
            Some(-WIN_SCORE + depth)
        } else if board.check_win(maximizer) {
            Some(WIN_SCORE - depth)
        } else if board.is_full() {
            Some(0)
        } else {
            None
        }
    }
}
