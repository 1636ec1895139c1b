//! 游戏常量定义

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 获胜连线，三格索引
pub type WinningLine = [usize; 3];

/// 全部 8 条获胜连线
///
/// 顺序固定：先三行，再三列，最后两条对角线。
/// `Board::winning_line` 依赖此顺序返回第一条匹配的连线。
pub const WINNING_LINES: [WinningLine; 8] = [
    // 行
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // 列
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // 对角线
    [0, 4, 8],
    [2, 4, 6],
];

/// 终局基础分值（胜 = WIN_SCORE - depth，负 = -WIN_SCORE + depth）
pub const WIN_SCORE: i32 = 10;
