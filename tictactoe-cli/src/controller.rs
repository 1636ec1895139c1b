//! 对局控制
//!
//! 持有对局会话，把玩家命令转成落子，并在轮到电脑时调用搜索引擎。

use protocol::{GameError, GameSession, Move, Player};
use tictactoe_ai::{SearchConfig, SearchEngine};
use tracing::{debug, info, warn};

use crate::input::Command;
use crate::settings::GameSettings;

/// 命令处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 局面已更新，附本次实际落下的子（玩家 + 电脑）
    Updated(Vec<Move>),
    /// 命令被规则拒绝，局面未变
    Rejected(GameError),
    /// 需要显示帮助
    Help,
    /// 退出
    Quit,
}

/// 对局控制器
pub struct GameController {
    session: GameSession,
    engine: SearchEngine,
    computer_enabled: bool,
    computer_mark: Player,
}

impl GameController {
    /// 按设置开始新对局
    pub fn new(settings: &GameSettings) -> Self {
        Self::with_session(GameSession::new(), settings)
    }

    /// 从已有局面开始（如命令行给出的记法）
    ///
    /// 若电脑已启用且轮到电脑，立即走一步。
    pub fn with_session(session: GameSession, settings: &GameSettings) -> Self {
        let engine = SearchEngine::new(SearchConfig {
            use_transposition_table: settings.use_transposition_table,
            ..SearchConfig::default()
        });
        let mut controller = Self {
            session,
            engine,
            computer_enabled: settings.computer_enabled,
            computer_mark: settings.computer_mark,
        };
        controller.run_computer();
        controller
    }

    /// 处理一条命令
    pub fn handle(&mut self, command: Command) -> Outcome {
        match command {
            Command::Play(index) => match self.play(index) {
                Ok(moves) => Outcome::Updated(moves),
                Err(e) => Outcome::Rejected(e),
            },
            Command::Reset => Outcome::Updated(self.reset()),
            Command::Toggle => Outcome::Updated(self.toggle_computer()),
            Command::Help => Outcome::Help,
            Command::Quit => Outcome::Quit,
        }
    }

    /// 当前走子方在 `index` 落子，必要时电脑随后应一手
    ///
    /// 只有玩家的落子被拒绝时才返回错误；电脑应手失败不撤销已落下的子。
    pub fn play(&mut self, index: usize) -> Result<Vec<Move>, GameError> {
        let player = self.session.current_turn();
        self.session.play(index)?;

        let mut moves = vec![Move::new(index, player)];
        moves.extend(self.run_computer());
        Ok(moves)
    }

    /// 重新开始；电脑执 X 时立即开局
    pub fn reset(&mut self) -> Vec<Move> {
        self.session.reset();
        info!("新对局开始");
        self.run_computer().into_iter().collect()
    }

    /// 切换电脑对手并重新开始
    pub fn toggle_computer(&mut self) -> Vec<Move> {
        self.computer_enabled = !self.computer_enabled;
        info!(
            "电脑对手: {}",
            if self.computer_enabled { "开启" } else { "关闭" }
        );
        self.reset()
    }

    /// 轮到电脑时让搜索引擎走一步，失败时记录日志并保持局面
    fn run_computer(&mut self) -> Option<Move> {
        if !self.is_computer_turn() {
            return None;
        }

        let player = self.computer_mark;
        let result = self
            .engine
            .best_move(self.session.board(), player)
            .and_then(|index| self.session.play(index).map(|_| index));
        let index = match result {
            Ok(index) => index,
            Err(e) => {
                warn!("电脑 {} 未能落子: {}", player, e);
                return None;
            }
        };
        debug!(
            "电脑 {} 落子 {}（搜索节点 {}）",
            player,
            index,
            self.engine.nodes_searched()
        );
        Some(Move::new(index, player))
    }

    /// 是否轮到电脑且对局未结束
    pub fn is_computer_turn(&self) -> bool {
        self.computer_enabled
            && !self.session.is_over()
            && self.session.current_turn() == self.computer_mark
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn computer_enabled(&self) -> bool {
        self.computer_enabled
    }
}
