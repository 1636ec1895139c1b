//! 置换表
//!
//! 缓存本次搜索中已求得精确值的局面，避免重复展开。
//!
//! 搜索不做剪枝，缓存值都是精确的极小化极大值。同一次搜索里一个局面的
//! 子数固定，因而距离搜索根的深度也固定，带深度的分值可以直接复用；
//! 跨搜索则不行，所以每次搜索开始时调用 [`TranspositionTable::new_search`]
//! 让旧条目失效。

use std::sync::atomic::{AtomicU64, Ordering};

/// 置换表条目
#[derive(Debug, Clone, Copy)]
struct TTEntry {
    /// Zobrist 哈希的高 32 位（用于验证）
    pub key: u32,
    /// 精确分值
    pub score: i32,
    /// 写入时的搜索代数
    pub age: u32,
}

/// 置换表
pub struct TranspositionTable {
    /// 条目数组
    entries: Vec<Option<TTEntry>>,
    /// 表大小（条目数）
    size: usize,
    /// 当前搜索代数
    age: u32,
    /// 命中次数
    hits: AtomicU64,
    /// 查询次数
    probes: AtomicU64,
}

impl TranspositionTable {
    /// 创建指定条目数的置换表（至少 1 条）
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            entries: vec![None; size],
            size,
            age: 0,
            hits: AtomicU64::new(0),
            probes: AtomicU64::new(0),
        }
    }

    /// 计算索引
    #[inline]
    fn index(&self, hash: u64) -> usize {
        (hash as usize) % self.size
    }

    /// 提取验证键
    #[inline]
    fn verification_key(hash: u64) -> u32 {
        (hash >> 32) as u32
    }

    /// 查询本次搜索写入的条目
    pub fn probe(&self, hash: u64) -> Option<i32> {
        self.probes.fetch_add(1, Ordering::Relaxed);

        let key = Self::verification_key(hash);
        match self.entries[self.index(hash)] {
            Some(entry) if entry.key == key && entry.age == self.age => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.score)
            }
            _ => None,
        }
    }

    /// 存储条目（直接覆盖同槽旧条目）
    pub fn store(&mut self, hash: u64, score: i32) {
        let index = self.index(hash);
        self.entries[index] = Some(TTEntry {
            key: Self::verification_key(hash),
            score,
            age: self.age,
        });
    }

    /// 开始新的搜索，之前的条目全部失效
    pub fn new_search(&mut self) {
        self.age = self.age.wrapping_add(1);
        if self.age == 0 {
            // 代数回绕，残留条目可能被误认成当前代
            self.entries.fill(None);
        }
    }

    /// 获取统计信息
    pub fn stats(&self) -> TTStats {
        TTStats {
            entries: self.size,
            used: self.entries.iter().filter(|e| e.is_some()).count(),
            hits: self.hits.load(Ordering::Relaxed),
            probes: self.probes.load(Ordering::Relaxed),
        }
    }
}

/// 置换表统计信息
#[derive(Debug, Clone)]
pub struct TTStats {
    pub entries: usize,
    pub used: usize,
    pub hits: u64,
    pub probes: u64,
}

impl TTStats {
    pub fn hit_rate(&self) -> f64 {
        if self.probes == 0 {
            0.0
        } else {
            self.hits as f64 / self.probes as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tt_store_and_probe() {
        let mut tt = TranspositionTable::new(1024);

        let hash = 0x1234567890ABCDEF_u64;
        tt.store(hash, 7);

        assert_eq!(tt.probe(hash), Some(7));

        let stats = tt.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.probes, 1);
        assert_eq!(stats.used, 1);
    }

    #[test]
    fn test_tt_miss() {
        let tt = TranspositionTable::new(1024);
        assert_eq!(tt.probe(0x1234567890ABCDEF), None);
        assert_eq!(tt.stats().hit_rate(), 0.0);
    }

    #[test]
    fn test_tt_key_mismatch() {
        let mut tt = TranspositionTable::new(1);

        // 同槽不同高位：不能误命中
        tt.store(0x0000_0001_0000_0000, 3);
        assert_eq!(tt.probe(0x0000_0002_0000_0000), None);
    }

    #[test]
    fn test_tt_new_search_invalidates() {
        let mut tt = TranspositionTable::new(1024);

        let hash = 0xFEDC_BA98_7654_3210_u64;
        tt.store(hash, -9);
        tt.new_search();

        assert_eq!(tt.probe(hash), None, "上一次搜索的分值带着不同的深度，不能复用");
    }
}
