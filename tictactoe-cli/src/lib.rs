//! 井字棋终端客户端
//!
//! 包含:
//! - 设置持久化
//! - 命令解析
//! - 对局控制（人人 / 人机）
//! - 文本渲染

pub mod controller;
pub mod input;
pub mod render;
pub mod settings;

pub use controller::{GameController, Outcome};
pub use input::{Command, CommandError, HELP};
pub use settings::{GameSettings, LoadNotice, LoadedSettings, LogLevel, SettingsOverrides};
