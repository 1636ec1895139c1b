//! Zobrist 哈希
//!
//! 用于快速计算局面的哈希值，搜索中随落子/撤销增量更新

use protocol::{Board, Player, CELL_COUNT};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Zobrist 哈希表
///
/// 为每个格子上的每种标记生成唯一的随机值
pub struct ZobristTable {
    /// 标记哈希值 [player][cell]
    /// player: 0=X, 1=O
    marks: [[u64; CELL_COUNT]; 2],
    /// O 走子时异或的哈希值
    side_to_move: u64,
}

impl ZobristTable {
    /// 创建新的 Zobrist 表（使用固定种子保证确定性）
    pub fn new() -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(0x7171_7AC0_5EED_0003);

        let mut marks = [[0u64; CELL_COUNT]; 2];
        for player in marks.iter_mut() {
            for cell in player.iter_mut() {
                *cell = rng.gen();
            }
        }

        Self {
            marks,
            side_to_move: rng.gen(),
        }
    }

    /// 计算局面的完整哈希值
    pub fn hash(&self, board: &Board, to_move: Player) -> u64 {
        let mut hash = board
            .cells()
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.player().map(|p| self.mark_hash(p, index)))
            .fold(0u64, |acc, h| acc ^ h);

        if to_move == Player::O {
            hash ^= self.side_to_move;
        }

        hash
    }

    /// 某格上某方标记的哈希值
    #[inline]
    pub fn mark_hash(&self, player: Player, index: usize) -> u64 {
        self.marks[player.index()][index]
    }

    /// 走子方切换的哈希值
    #[inline]
    pub fn side_hash(&self) -> u64 {
        self.side_to_move
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}
