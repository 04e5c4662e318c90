//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：输出启动信息、加载题库
//! 2. **资源装配**：把标准输入交给 `ResponseSource`，把标准输出作为题目显示
//! 3. **运行会话**：委托 `QuizRunner` 完成答题
//! 4. **输出成绩**：到时提示 + 成绩行；读取失败时不输出成绩

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::infrastructure::ResponseSource;
use crate::models::QuestionSet;
use crate::orchestrator::quiz_runner::{QuizRunner, SessionOutcome};
use crate::services::ScoreReport;
use crate::utils::logging::{log_session_summary, log_startup};

/// 到时提示
pub const TIME_UP_MESSAGE: &str = "Time is up!";

/// 一次会话的最终结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    pub outcome: SessionOutcome,
    pub report: ScoreReport,
}

/// 应用主结构
pub struct App {
    config: Config,
    questions: QuestionSet,
}

impl App {
    /// 初始化应用：输出启动信息并加载题库
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let questions = QuestionSet::load_path(&config.csv_path)
            .with_context(|| format!("无法加载题库: {}", config.csv_path.display()))?;

        if questions.is_empty() {
            warn!("⚠️ 题库中没有题目");
        } else {
            info!("✓ 找到 {} 道题目", questions.len());
        }

        Ok(Self::new(config, questions))
    }

    /// 使用已加载的题目创建应用
    pub fn new(config: Config, questions: QuestionSet) -> Self {
        Self { config, questions }
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    /// 在标准输入输出上运行会话
    pub async fn run(self) -> Result<SessionSummary> {
        let stdout = io::stdout();
        let mut display = stdout.lock();
        self.run_with(ResponseSource::stdin(), &mut display).await
    }

    /// 使用指定的输入和输出运行会话
    pub async fn run_with<W: Write>(
        self,
        responses: ResponseSource,
        display: &mut W,
    ) -> Result<SessionSummary> {
        let mut runner = QuizRunner::new(
            self.questions,
            responses,
            &mut *display,
            self.config.time_limit(),
        );

        let result = runner.run().await;
        let (questions, _) = runner.into_parts();

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                // 结束题目那一行，错误信息由调用方输出
                writeln!(display).ok();
                return Err(e).context("答题会话中止");
            }
        };

        let report = ScoreReport::from_questions(&questions);

        // 到时时光标仍停在题目行末尾，先换行
        if outcome == SessionOutcome::TimedOut {
            writeln!(display).context("输出失败")?;
            writeln!(display, "{}", TIME_UP_MESSAGE).context("输出失败")?;
        }
        writeln!(display, "{}", report).context("输出失败")?;
        display.flush().context("输出失败")?;

        log_session_summary(&report);

        Ok(SessionSummary { outcome, report })
    }
}
