//! 走法

use serde::{Deserialize, Serialize};

use crate::cell::{Player, Position};

/// 走法：落子格子索引 + 落子方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 格子索引 (0-8)
    pub index: usize,
    /// 落子方
    pub player: Player,
}

impl Move {
    /// 创建新走法
    pub fn new(index: usize, player: Player) -> Self {
        Self { index, player }
    }

    /// 落子位置（索引越界时为 None）
    pub fn position(&self) -> Option<Position> {
        Position::from_index(self.index)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some(pos) => write!(f, "{} -> {} {}", self.player, self.index, pos),
            None => write!(f, "{} -> {}", self.player, self.index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mv = Move::new(5, Player::O);
        assert_eq!(mv.to_string(), "O -> 5 (1, 2)");
        assert_eq!(mv.position(), Position::new(1, 2));
    }
}
