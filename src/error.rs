//! 错误类型
//!
//! 控制器和输入映射没有错误路径，只有加载阶段（幻灯片文件、配置文件）会失败。

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 加载幻灯片文件时的错误
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("无法读取幻灯片文件 {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("幻灯片文件 {origin} 格式错误: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("幻灯片文件 {origin} 中没有任何幻灯片")]
    Empty { origin: String },
}

/// 加载配置文件时的错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("无法读取配置文件 {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("配置文件 {} 格式错误: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
