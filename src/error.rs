use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum QuizError {
    /// 题库解析错误（启动阶段致命）
    #[error("题库解析错误: {0}")]
    Parse(#[from] ParseError),
    /// 读取作答失败（会话阶段致命）
    #[error("读取作答失败: {0}")]
    Read(#[from] ReadFailure),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 会话只能运行一次
    #[error("会话已运行过，不能重新开始")]
    SessionAlreadyRun,
}

/// 题库解析错误
#[derive(Debug, Error)]
pub enum ParseError {
    /// 无法打开题库文件
    #[error("无法读取题库文件 {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// CSV 格式错误
    #[error("CSV 格式错误: {0}")]
    Csv(#[from] csv::Error),
    /// 字段数量不足（题目, 分隔符, 答案）
    #[error("第 {line} 行只有 {found} 个字段，至少需要 3 个")]
    MissingFields { line: u64, found: usize },
}

/// 读取作答失败
#[derive(Debug, Error)]
pub enum ReadFailure {
    /// 输入流已结束
    #[error("输入流已结束")]
    EndOfInput,
    /// 底层 I/O 错误
    #[error("读取输入失败: {0}")]
    Io(#[from] std::io::Error),
    /// 读取线程退出但未返回结果
    #[error("读取线程已退出，未返回结果")]
    Disconnected,
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("无法读取配置文件 {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 配置文件解析失败
    #[error("配置文件解析失败 {}: {source}", .path.display())]
    FileParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// 配置值不合法
    #[error("配置项 {key} 的值 '{value}' 不合法")]
    InvalidValue { key: String, value: String },
}

impl ConfigError {
    /// 创建配置值不合法错误
    pub fn invalid_value(key: impl Into<String>, value: impl ToString) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            value: value.to_string(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, QuizError>;
