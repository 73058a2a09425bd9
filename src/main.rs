mod config;
mod controller;
mod error;
mod gesture;
mod logging;
mod models;
mod storage;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{
        self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::prelude::*;
use tracing::info;

use crate::config::Config;
use crate::gesture::pixels_per_column;
use crate::logging::{default_log_dir, init_tracing};
use crate::storage::{load_deck, welcome_deck};
use crate::ui::actions::Action;
use crate::ui::{App, render};

/// 动画期间的刷新间隔
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// 终端幻灯片播放器
#[derive(Parser, Debug)]
#[command(name = "slidedeck", version)]
struct Args {
    /// 幻灯片文件 (TOML)，省略时显示内置欢迎页
    deck: Option<PathBuf>,

    /// 配置文件路径，默认 ~/.config/slidedeck/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// 起始页（从 1 开始）
    #[arg(long)]
    start: Option<usize>,

    /// 以全屏模式启动
    #[arg(long)]
    fullscreen: bool,

    /// 日志目录，默认 ~/.local/share/slidedeck/logs
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match args.config.clone().or_else(Config::default_path) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };

    let log_dir = args
        .log_dir
        .clone()
        .or_else(default_log_dir)
        .context("无法获取用户数据目录")?;
    let _log_guard = init_tracing(&log_dir, &config.log_level)
        .with_context(|| format!("无法创建日志目录 {}", log_dir.display()))?;

    // 加载幻灯片
    let deck = match &args.deck {
        Some(path) => load_deck(path)?,
        None => welcome_deck()?,
    };

    // 创建应用状态
    let mut app = App::new(deck, &config);
    if let Some(index) = args.start.and_then(|start| start.checked_sub(1)) {
        app.dispatch(Action::GoToSlide(index));
    }
    if args.fullscreen {
        app.fullscreen = true;
    }
    info!(
        slides = app.controller.total_slides(),
        start = app.controller.current_index(),
        "开始放映"
    );

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app, config.cell_width_px);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(last = app.controller.current_index(), "放映结束");
    result.context("终端事件循环出错")
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    cell_width_px: u16,
) -> io::Result<()> {
    app.px_per_column = measure_px_per_column(cell_width_px);

    loop {
        terminal.draw(|f| render(f, app))?;

        // 动画期间按帧刷新，否则阻塞等待下一个事件
        let animating = app
            .controller
            .renderer()
            .is_animating(std::time::Instant::now());
        if animating && !event::poll(FRAME_INTERVAL)? {
            continue;
        }

        let event = event::read()?;
        if let Event::Resize(..) = event {
            app.px_per_column = measure_px_per_column(cell_width_px);
        }
        if ui::handle_event(app, event) {
            break;
        }
    }
    Ok(())
}

fn measure_px_per_column(fallback: u16) -> f32 {
    match terminal::window_size() {
        Ok(size) => pixels_per_column(size.width, size.columns, fallback),
        Err(_) => f32::from(fallback.max(1)),
    }
}
