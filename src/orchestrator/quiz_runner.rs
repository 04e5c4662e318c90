//! 答题会话 - 编排层
//!
//! ## 职责
//!
//! 按顺序处理题目集合中的每一道题，是会话级别的状态机。
//!
//! ## 状态流转
//!
//! ```text
//! NotStarted ──▶ Running ──┬──▶ Completed  (全部作答)
//!      │                   ├──▶ TimedOut   (会话到时)
//!      │                   └──▶ Aborted    (读取失败，致命)
//!      └──(空题目集合)────────▶ Completed
//! ```
//!
//! 每道题只有一个等待点：同时等待作答和会话计时器，先到者生效。
//! 到时后被放弃的读取线程会继续读完，但其结果不会再被观察到。

use std::io::Write;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::error::{AppResult, QuizError};
use crate::infrastructure::{ReadOutcome, ResponseSource, SessionTimer};
use crate::models::question::QuestionSet;
use crate::utils::logging::truncate_text;

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    Running,
    Completed,
    TimedOut,
    /// 读取失败导致的致命中止
    Aborted,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SessionState::Completed | SessionState::TimedOut | SessionState::Aborted
        )
    }
}

/// 正常结束的会话结果（读取失败通过 `Err` 返回）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed,
    TimedOut,
}

/// 单次等待的结果
enum Step {
    Answered(ReadOutcome),
    TimeUp,
}

/// 答题会话
///
/// 职责：
/// - 独占题目集合，是 `response` 的唯一写入者
/// - 显示题目、发起读取、等待作答或到时
/// - 不负责评分和输出成绩
pub struct QuizRunner<W: Write> {
    questions: QuestionSet,
    responses: ResponseSource,
    display: W,
    time_limit: Duration,
    state: SessionState,
}

impl<W: Write> QuizRunner<W> {
    /// 创建新的答题会话
    ///
    /// # 参数
    /// - `questions`: 题目集合
    /// - `responses`: 作答读取器
    /// - `display`: 题目输出目标
    /// - `time_limit`: 整个会话的时限
    pub fn new(
        questions: QuestionSet,
        responses: ResponseSource,
        display: W,
        time_limit: Duration,
    ) -> Self {
        Self {
            questions,
            responses,
            display,
            time_limit,
            state: SessionState::NotStarted,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn display(&self) -> &W {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut W {
        &mut self.display
    }

    /// 拆出题目集合和输出目标
    pub fn into_parts(self) -> (QuestionSet, W) {
        (self.questions, self.display)
    }

    /// 运行会话，直到全部作答、到时或读取失败
    ///
    /// # 返回
    /// - `Ok(SessionOutcome::Completed)`: 全部题目已作答
    /// - `Ok(SessionOutcome::TimedOut)`: 会话到时，当前及之后的题目未作答
    /// - `Err(QuizError::Read(_))`: 读取失败，会话中止
    pub async fn run(&mut self) -> AppResult<SessionOutcome> {
        if self.state != SessionState::NotStarted {
            return Err(QuizError::SessionAlreadyRun);
        }

        let total = self.questions.len();

        if total == 0 {
            info!("题目集合为空，直接结束会话");
            self.state = SessionState::Completed;
            return Ok(SessionOutcome::Completed);
        }

        let mut timer = SessionTimer::arm(self.time_limit);
        self.state = SessionState::Running;
        info!("⏱️ 会话开始: 共 {} 道题，时限 {:?}", total, self.time_limit);

        for index in 0..total {
            self.show_question(index, total);

            let pending = self.responses.request_read();

            // 已送达的作答优先于同时到时的计时器
            let step = tokio::select! {
                biased;
                outcome = pending => Step::Answered(outcome),
                _ = timer.fired() => Step::TimeUp,
            };

            match step {
                Step::Answered(Ok(response)) => {
                    debug!("第 {}/{} 题作答: {}", index + 1, total, response);
                    self.questions.record_response(index, response);
                }
                Step::Answered(Err(failure)) => {
                    timer.stop();
                    self.state = SessionState::Aborted;
                    error!("❌ 第 {}/{} 题读取失败: {}", index + 1, total, failure);
                    return Err(failure.into());
                }
                Step::TimeUp => {
                    timer.stop();
                    self.state = SessionState::TimedOut;
                    info!(
                        "⏰ 会话到时: 已作答 {}/{} 题",
                        self.questions.answered_count(),
                        total
                    );
                    return Ok(SessionOutcome::TimedOut);
                }
            }
        }

        timer.stop();
        self.state = SessionState::Completed;
        info!("✅ 全部 {} 道题已作答，剩余时间 {:?}", total, timer.remaining());

        Ok(SessionOutcome::Completed)
    }

    /// 显示题目；输出失败只记录日志，不中止会话
    fn show_question(&mut self, index: usize, total: usize) {
        let Some(record) = self.questions.get(index) else {
            return;
        };
        let prompt = record.prompt();

        debug!(
            "显示第 {}/{} 题: {}",
            index + 1,
            total,
            truncate_text(&prompt, 40)
        );

        if let Err(e) = write!(self.display, "{}", prompt).and_then(|_| self.display.flush()) {
            warn!("⚠️ 题目输出失败: {}", e);
        }
    }
}
