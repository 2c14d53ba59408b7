//! 应用配置：可选的 JSON 配置文件，缺失字段使用默认值

use std::{env, fs, io, path::Path, time::Duration};

use serde::Deserialize;
use thiserror::Error;

use crate::utils::fs::DEFAULT_DOWNLOAD_SUFFIX;

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "BASE64_ZHUANHUAN_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("读取配置失败: {0}")]
    Io(#[from] io::Error),
    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("未知日志级别: {0}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// 状态消息显示时长（毫秒）
    pub status_display_ms: u64,
    pub download_suffix: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            status_display_ms: 3000,
            download_suffix: DEFAULT_DOWNLOAD_SUFFIX.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 从环境变量指定的路径加载；未设置或文件不存在时使用默认配置
    pub fn load() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        let config: Self = serde_json::from_str(&text)?;
        config.max_log_level()?;
        Ok(config)
    }

    pub fn status_display(&self) -> Duration {
        Duration::from_millis(self.status_display_ms)
    }

    pub fn max_log_level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
