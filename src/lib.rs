//! # Timed Quiz
//!
//! 一个带总时限的命令行答题程序
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（输入流、计时器），只暴露能力
//! - `ResponseSource` - 唯一的输入流 owner，提供"读一行"能力
//! - `SessionTimer` - 整个会话唯一的倒计时
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `scorer` - 评分能力
//!
//! ### ③ 数据层（Models）
//! - `models/` - 题目记录与题目集合
//! - `models/loaders` - CSV 题库加载
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/quiz_runner` - 答题会话状态机
//! - `orchestrator/app` - 应用入口，装配资源并输出成绩
//!
//! ## 模块结构

pub mod cli;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use cli::Cli;
pub use config::Config;
pub use error::{AppResult, ConfigError, ParseError, QuizError, ReadFailure};
pub use infrastructure::{PendingRead, ReadOutcome, ResponseSource, SessionTimer, TimerState};
pub use models::{QuestionRecord, QuestionSet};
pub use orchestrator::{App, QuizRunner, SessionOutcome, SessionState, SessionSummary};
pub use services::{score, ScoreReport};
