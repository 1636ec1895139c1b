//! 命令输入解析

use std::str::FromStr;

use thiserror::Error;

/// 玩家输入的命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 在指定格子落子（0-8，越界由规则层拒绝）
    Play(usize),
    /// 重新开始
    Reset,
    /// 切换电脑对手并重新开始
    Toggle,
    /// 显示帮助
    Help,
    /// 退出
    Quit,
}

/// 命令解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        if text.is_empty() {
            return Err(CommandError::Empty);
        }

        if let Ok(index) = text.parse::<usize>() {
            return Ok(Command::Play(index));
        }

        match text.as_str() {
            "r" | "reset" => Ok(Command::Reset),
            "t" | "toggle" => Ok(Command::Toggle),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(s.trim().to_string())),
        }
    }
}

/// 帮助文本
pub const HELP: &str = "\
commands:
  0-8        play that cell (row-major, 0 = top left)
  r, reset   start a new game
  t, toggle  switch the computer opponent on/off and restart
  h, help    show this help
  q, quit    exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("4".parse::<Command>(), Ok(Command::Play(4)));
        assert_eq!(" 12 ".parse::<Command>(), Ok(Command::Play(12)));
        assert_eq!("R".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("toggle".parse::<Command>(), Ok(Command::Toggle));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "move".parse::<Command>(),
            Err(CommandError::Unknown("move".to_string()))
        );
        assert!("-1".parse::<Command>().is_err());
    }
}
