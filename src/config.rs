use crate::cli::Cli;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 程序配置
///
/// 优先级（从低到高）：默认值 → 配置文件 → 环境变量 → 命令行参数
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题库 CSV 文件
    pub csv_path: PathBuf,
    /// 整个会话的时限（秒）
    pub time_limit_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("problems.csv"),
            time_limit_secs: 30,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 默认值 + 环境变量
    pub fn from_env() -> Self {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// 从 TOML 文件读取，缺省的键使用默认值
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::FileParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 按优先级合并所有配置来源
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let config = base
            .with_env(|key| std::env::var(key).ok())
            .with_cli(cli);
        config.validate()?;

        Ok(config)
    }

    /// 用环境变量覆盖；无法解析的值忽略
    pub fn with_env(self, var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            csv_path: var("QUIZ_CSV").map(PathBuf::from).unwrap_or(self.csv_path),
            time_limit_secs: var("QUIZ_TIME_LIMIT").and_then(|v| v.parse().ok()).unwrap_or(self.time_limit_secs),
            verbose_logging: var("QUIZ_VERBOSE").and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }

    /// 用命令行参数覆盖
    pub fn with_cli(self, cli: &Cli) -> Self {
        Self {
            csv_path: cli.csv.clone().unwrap_or(self.csv_path),
            time_limit_secs: cli.limit.unwrap_or(self.time_limit_secs),
            verbose_logging: self.verbose_logging || cli.verbose,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_limit_secs == 0 {
            return Err(ConfigError::invalid_value("time_limit_secs", self.time_limit_secs));
        }
        Ok(())
    }

    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_secs)
    }
}
