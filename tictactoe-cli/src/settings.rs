//! 游戏设置模块
//!
//! 提供设置数据结构和 JSON 持久化

use std::path::{Path, PathBuf};

use protocol::{Player, ProtocolError};
use serde::{Deserialize, Serialize};

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

/// 受设置日志级别控制的日志目标（含二进制 `tictactoe` 自身）
pub const LOG_TARGETS: [&str; 4] = ["tictactoe", "tictactoe_cli", "tictactoe_ai", "protocol"];

impl LogLevel {
    /// 作为 `EnvFilter` 指令使用的名称
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// 为每个日志目标生成 `EnvFilter` 指令
    pub fn directives(&self) -> Vec<String> {
        LOG_TARGETS
            .iter()
            .map(|target| format!("{}={}", target, self.as_directive()))
            .collect()
    }
}

/// 游戏设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// 是否由电脑执一方
    pub computer_enabled: bool,
    /// 电脑执哪一方（默认后手 O）
    pub computer_mark: Player,
    /// 搜索是否使用置换表
    pub use_transposition_table: bool,
    /// 日志级别
    pub log_level: LogLevel,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            computer_enabled: false,
            computer_mark: Player::O,
            use_transposition_table: true,
            log_level: LogLevel::default(),
        }
    }
}

/// 命令行对设置的一次性覆盖，不写回设置文件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub computer: bool,
    pub computer_mark: Option<Player>,
    pub no_table: bool,
}

/// 设置加载结果
#[derive(Debug)]
pub enum LoadNotice {
    /// 已从文件加载
    Loaded(PathBuf),
    /// 文件不存在，使用默认设置
    Missing(PathBuf),
    /// 无法获取配置目录
    NoConfigDir,
    /// 文件无法读取或格式无效，使用默认设置
    Invalid { path: PathBuf, error: ProtocolError },
}

impl LoadNotice {
    /// 是否因文件无效而退回默认设置
    pub fn is_fallback(&self) -> bool {
        matches!(self, LoadNotice::Invalid { .. })
    }

    /// 输出加载结果日志，需在日志初始化之后调用
    pub fn log(&self) {
        match self {
            LoadNotice::Loaded(path) => tracing::info!("已加载设置: {:?}", path),
            LoadNotice::Missing(path) => {
                tracing::info!("设置文件不存在，使用默认设置: {:?}", path)
            }
            LoadNotice::NoConfigDir => tracing::warn!("无法获取配置目录，使用默认设置"),
            LoadNotice::Invalid { path, error } => {
                tracing::warn!("设置文件无效: {:?}: {}，使用默认设置", path, error)
            }
        }
    }
}

/// 从文件加载的设置及其来源
#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: GameSettings,
    pub notice: LoadNotice,
}

impl LoadedSettings {
    /// 记录电脑对手开关并写回加载时的文件
    ///
    /// 只保存文件中原有的设置，命令行覆盖不会落盘。
    /// 文件无效时不覆盖，返回 `Ok(false)`。
    pub fn save_computer_enabled(&mut self, enabled: bool) -> protocol::Result<bool> {
        self.settings.computer_enabled = enabled;
        match &self.notice {
            LoadNotice::Loaded(path) | LoadNotice::Missing(path) => {
                self.settings.save_to(path)?;
                Ok(true)
            }
            LoadNotice::NoConfigDir => Err(ProtocolError::NoConfigDir),
            LoadNotice::Invalid { .. } => Ok(false),
        }
    }
}

impl GameSettings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("tictactoe");
            path.push("settings.json");
            path
        })
    }

    /// 从默认位置加载设置，失败时使用默认设置
    pub fn load() -> LoadedSettings {
        match Self::settings_path() {
            Some(path) => Self::load_from(&path),
            None => LoadedSettings {
                settings: Self::default(),
                notice: LoadNotice::NoConfigDir,
            },
        }
    }

    /// 从指定文件加载设置，失败时使用默认设置
    pub fn load_from(path: &Path) -> LoadedSettings {
        if !path.exists() {
            return LoadedSettings {
                settings: Self::default(),
                notice: LoadNotice::Missing(path.to_path_buf()),
            };
        }

        match Self::read(path) {
            Ok(settings) => LoadedSettings {
                settings,
                notice: LoadNotice::Loaded(path.to_path_buf()),
            },
            Err(error) => LoadedSettings {
                settings: Self::default(),
                notice: LoadNotice::Invalid {
                    path: path.to_path_buf(),
                    error,
                },
            },
        }
    }

    fn read(path: &Path) -> protocol::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 应用命令行覆盖，返回本次运行使用的设置
    pub fn with_overrides(&self, overrides: &SettingsOverrides) -> Self {
        let mut settings = self.clone();
        if overrides.computer {
            settings.computer_enabled = true;
        }
        if let Some(mark) = overrides.computer_mark {
            settings.computer_mark = mark;
        }
        if overrides.no_table {
            settings.use_transposition_table = false;
        }
        settings
    }

    /// 保存设置到指定文件
    pub fn save_to(&self, path: &Path) -> protocol::Result<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }
}
