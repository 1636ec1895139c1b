//! 井字棋 AI 引擎
//!
//! 包含:
//! - 终局评估函数
//! - 完整深度 Minimax 搜索
//! - Zobrist 哈希
//! - 置换表

mod evaluate;
mod search;
mod transposition;
mod zobrist;

pub use evaluate::Evaluator;
pub use search::{best_move, SearchConfig, SearchEngine};
pub use transposition::{TTStats, TranspositionTable};
pub use zobrist::ZobristTable;
