use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// 默认日志目录 (~/.local/share/slidedeck/logs/)
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("slidedeck").join("logs"))
}

/// 初始化日志，输出到按天滚动的文件，避免干扰终端界面。
///
/// `RUST_LOG` 优先于配置中的 `log_level`。返回的 guard 必须存活到程序结束。
pub fn init_tracing(log_dir: &Path, default_level: &str) -> io::Result<WorkerGuard> {
    fs::create_dir_all(log_dir)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let file_appender = tracing_appender::rolling::daily(log_dir, "slidedeck.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(non_blocking_file);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();

    Ok(guard)
}
