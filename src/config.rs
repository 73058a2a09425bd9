//! 用户配置
//!
//! 配置文件位于 `~/.config/slidedeck/config.toml`，所有字段都可省略。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::gesture::DEFAULT_SWIPE_THRESHOLD;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 拖动翻页的最小水平位移（像素）
    pub swipe_threshold: f32,
    /// 终端不报告像素尺寸时使用的单元格宽度
    pub cell_width_px: u16,
    /// 切换动画时长，0 表示关闭动画
    pub transition_ms: u64,
    pub show_indicators: bool,
    pub start_fullscreen: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            cell_width_px: 8,
            transition_ms: 250,
            show_indicators: true,
            start_fullscreen: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// 默认配置路径 (~/.config/slidedeck/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("slidedeck").join("config.toml"))
    }

    /// 读取配置，文件不存在时返回默认值
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}
