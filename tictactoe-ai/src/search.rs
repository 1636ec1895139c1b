//! 搜索引擎
//!
//! 完整深度的 Minimax 搜索，终局分值随深度衰减：
//! 能赢时选最快的赢法，必输时尽量拖延。

use protocol::{Board, Cell, GameError, Player, CELL_COUNT};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluate::Evaluator;
use crate::transposition::{TTStats, TranspositionTable};
use crate::zobrist::ZobristTable;

/// 搜索配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// 是否使用置换表（不影响选出的走法）
    pub use_transposition_table: bool,
    /// 置换表条目数
    pub table_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            use_transposition_table: true,
            table_size: 16 * 1024,
        }
    }
}

/// 搜索引擎
pub struct SearchEngine {
    zobrist: ZobristTable,
    table: Option<TranspositionTable>,
    nodes_searched: u64,
}

impl SearchEngine {
    /// 创建新的搜索引擎
    pub fn new(config: SearchConfig) -> Self {
        let table = config
            .use_transposition_table
            .then(|| TranspositionTable::new(config.table_size));
        Self {
            zobrist: ZobristTable::new(),
            table,
            nodes_searched: 0,
        }
    }

    /// 搜索 `player` 的最佳落子格
    ///
    /// 按索引升序枚举空格，取分值严格最高者；同分保留先找到的（索引最小）。
    /// 棋盘无空格或已终局时返回 `InvalidSearchState`。
    /// 搜索在棋盘副本上落子/撤销，调用方的棋盘不受影响。
    pub fn best_move(&mut self, board: &Board, player: Player) -> Result<usize, GameError> {
        let empty_cells = board.empty_cells();
        if empty_cells.is_empty() {
            return Err(GameError::InvalidSearchState {
                reason: "no empty cell",
            });
        }
        if board.status().is_terminal() {
            return Err(GameError::InvalidSearchState {
                reason: "game is already over",
            });
        }

        self.nodes_searched = 0;
        if let Some(table) = &mut self.table {
            table.new_search();
        }

        let mut buffer = *board;
        let root_hash = self.zobrist.hash(&buffer, player);
        let mut best: Option<(usize, i32)> = None;

        for index in empty_cells {
            buffer.set(index, player.cell());
            let hash = root_hash ^ self.zobrist.mark_hash(player, index) ^ self.zobrist.side_hash();
            let score = self.minimax(&mut buffer, hash, 0, false, player);
            buffer.set(index, Cell::Empty);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        let (index, score) = best.ok_or(GameError::InvalidSearchState {
            reason: "no empty cell",
        })?;
        let hit_rate = self.table_stats().map_or(0.0, |stats| stats.hit_rate());
        debug!(
            "{} 最佳落子: {}，分值 {}，搜索节点 {}，置换表命中率 {:.1}%",
            player,
            index,
            score,
            self.nodes_searched,
            hit_rate * 100.0
        );
        Ok(index)
    }

    /// Minimax 搜索
    ///
    /// `maximizer` 固定为发起搜索的一方；`maximizing` 表示当前轮到谁落子。
    fn minimax(
        &mut self,
        board: &mut Board,
        hash: u64,
        depth: u32,
        maximizing: bool,
        maximizer: Player,
    ) -> i32 {
        self.nodes_searched += 1;

        if let Some(score) = Evaluator::terminal_score(board, maximizer, depth) {
            return score;
        }

        if let Some(score) = self.table.as_ref().and_then(|table| table.probe(hash)) {
            return score;
        }

        let side = if maximizing {
            maximizer
        } else {
            maximizer.opponent()
        };
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for index in 0..CELL_COUNT {
            if board.get(index) != Some(Cell::Empty) {
                continue;
            }

            board.set(index, side.cell());
            let child_hash = hash ^ self.zobrist.mark_hash(side, index) ^ self.zobrist.side_hash();
            let score = self.minimax(board, child_hash, depth + 1, !maximizing, maximizer);
            board.set(index, Cell::Empty);

            best_score = if maximizing {
                best_score.max(score)
            } else {
                best_score.min(score)
            };
        }

        if let Some(table) = &mut self.table {
            table.store(hash, best_score);
        }

        best_score
    }

    /// 获取上次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// 置换表统计（未启用时为 None）
    pub fn table_stats(&self) -> Option<TTStats> {
        self.table.as_ref().map(TranspositionTable::stats)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// 唯一的搜索入口：使用默认配置为 `player` 选出最佳格子
pub fn best_move(board: &Board, player: Player) -> Result<usize, GameError> {
    SearchEngine::default().best_move(board, player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use protocol::{GameStatus, Notation};

    fn engine_without_table() -> SearchEngine {
        SearchEngine::new(SearchConfig {
            use_transposition_table: false,
            ..SearchConfig::default()
        })
    }

    #[test]
    fn test_takes_immediate_win() {
        // O 可在 5 直接连成中行
        let board = Notation::parse_board("XX./OO./...").unwrap();
        assert_eq!(best_move(&board, Player::O), Ok(5));
    }

    #[test]
    fn test_blocks_opponent() {
        // O 无法立即获胜，必须堵住 X 的第一行
        let board = Notation::parse_board("XX./.O./...").unwrap();
        assert_eq!(best_move(&board, Player::O), Ok(2));
    }

    #[test]
    fn test_prefers_fastest_win() {
        // O 在 2 立即获胜；其他走法最多在之后获胜
        let mut board = Notation::parse_board("OO./XX./X..").unwrap();
        let index = best_move(&board, Player::O).unwrap();
        assert_eq!(index, 2);
        assert_eq!(
            board.apply_move(index, Player::O),
            Ok(GameStatus::Win {
                player: Player::O,
                line: [0, 1, 2]
            })
        );
    }

    #[test]
    fn test_avoids_losing_corner() {
        // X 占对角、O 占中心：O 下角会被 X 双杀，应下边
        let board = Notation::parse_board("X../.O./..X").unwrap();
        let index = best_move(&board, Player::O).unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = Notation::parse_board("X../.O./..X").unwrap();
        let before = board;
        let mut engine = SearchEngine::default();
        engine.best_move(&board, Player::O).unwrap();
        assert_eq!(board, before);
        assert!(engine.nodes_searched() > 0);
    }

    #[test]
    fn test_invalid_search_state() {
        let full = Notation::parse_board("XOX/XOO/OXX").unwrap();
        assert!(matches!(
            best_move(&full, Player::X),
            Err(GameError::InvalidSearchState { .. })
        ));

        let won = Notation::parse_board("XXX/OO./...").unwrap();
        assert!(matches!(
            best_move(&won, Player::O),
            Err(GameError::InvalidSearchState { .. })
        ));
    }

    #[test]
    fn test_single_empty_cell() {
        let board = Notation::parse_board("XOX/XOO/OX.").unwrap();
        assert_eq!(best_move(&board, Player::X), Ok(8));
    }

    #[test]
    fn test_table_does_not_change_move() {
        let positions = [
            ".../.../...",
            "X../.../...",
            "X../.O./..X",
            "XX./.O./...",
            ".X./.O./X..",
        ];
        let mut with_table = SearchEngine::default();
        let mut without_table = engine_without_table();

        for text in positions {
            let session = Notation::parse(text).unwrap();
            let player = session.current_turn();
            assert_eq!(
                with_table.best_move(session.board(), player),
                without_table.best_move(session.board(), player),
                "局面 {}",
                text
            );
        }

        let stats = with_table.table_stats().unwrap();
        assert!(stats.hits > 0);
        assert!(stats.hit_rate() > 0.0 && stats.hit_rate() <= 1.0);
        assert!(without_table.table_stats().is_none());
    }

    #[test]
    fn test_table_prunes_nodes() {
        let board = Board::empty();
        let mut with_table = SearchEngine::default();
        let mut without_table = engine_without_table();

        with_table.best_move(&board, Player::X).unwrap();
        without_table.best_move(&board, Player::X).unwrap();
        assert!(with_table.nodes_searched() < without_table.nodes_searched());
    }

    #[test]
    fn test_config_serde() {
        let config = SearchConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
