use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use protocol::{GameSession, Notation, Player};
use tictactoe_cli::render::render;
use tictactoe_cli::{Command, GameController, GameSettings, Outcome, SettingsOverrides, HELP};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe with an unbeatable computer opponent")]
struct Args {
    /// 开启电脑对手
    #[arg(long)]
    computer: bool,

    /// 电脑执哪一方（x 或 o）
    #[arg(long, value_parser = parse_player)]
    computer_mark: Option<Player>,

    /// 起始局面，如 "XX./OO./... o"
    #[arg(long)]
    position: Option<String>,

    /// 搜索时不使用置换表
    #[arg(long)]
    no_table: bool,
}

fn parse_player(s: &str) -> Result<Player, String> {
    let mut chars = s.chars();
    match (chars.next().and_then(Player::from_char), chars.next()) {
        (Some(player), None) => Ok(player),
        _ => Err(format!("expected x or o, got {:?}", s)),
    }
}

impl Args {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            computer: self.computer,
            computer_mark: self.computer_mark,
            no_table: self.no_table,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut stored = GameSettings::load();

    // 初始化日志（输出到 stderr，不干扰棋盘显示）
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in stored.settings.log_level.directives() {
        filter = filter.add_directive(directive.parse()?);
    }
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    // 设置加载早于日志初始化，结果在此补报
    stored.notice.log();

    // 命令行参数只覆盖本次运行
    let settings = stored.settings.with_overrides(&args.overrides());

    let session = match &args.position {
        Some(text) => Notation::parse(text).with_context(|| format!("invalid --position {:?}", text))?,
        None => GameSession::new(),
    };

    info!("井字棋启动，电脑对手: {}", settings.computer_enabled);
    let mut controller = GameController::with_session(session, &settings);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}\n\n{}", HELP, render(controller.session()))?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(stdout, "{}", e)?;
                continue;
            }
        };

        match controller.handle(command) {
            Outcome::Updated(_) => {
                if command == Command::Toggle {
                    match stored.save_computer_enabled(controller.computer_enabled()) {
                        Ok(true) => {}
                        Ok(false) => warn!("设置文件无效，未保存电脑对手开关"),
                        Err(e) => warn!("保存设置失败: {}", e),
                    }
                }
                writeln!(stdout, "{}", render(controller.session()))?;
            }
            Outcome::Rejected(e) => writeln!(stdout, "{}", e)?,
            Outcome::Help => writeln!(stdout, "{}", HELP)?,
            Outcome::Quit => break,
        }
        stdout.flush()?;
    }

    Ok(())
}
