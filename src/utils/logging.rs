//! 日志工具模块
//!
//! 提供日志初始化和输出的辅助函数。日志写到 stderr，stdout 只留给答题界面。

use crate::config::Config;
use crate::services::ScoreReport;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`；否则默认只输出警告，`verbose` 时输出调试日志。
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "timed_quiz=debug"
    } else {
        "timed_quiz=warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // 测试中可能重复初始化，忽略错误
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 答题程序启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📄 题库: {}", config.csv_path.display());
    info!("⏱️ 时限: {} 秒", config.time_limit_secs);
    info!("{}", "=".repeat(60));
}

/// 记录会话结束统计
pub fn log_session_summary(report: &ScoreReport) {
    info!("\n{}", "─".repeat(60));
    info!("📊 会话结束统计");
    info!("✅ 正确: {}/{}", report.correct, report.total);
    info!("✍️ 已作答: {}/{}", report.answered, report.total);
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
