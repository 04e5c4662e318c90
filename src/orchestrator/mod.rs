//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 加载题库（`QuestionSet`）
//! - 装配标准输入输出
//! - 输出到时提示和成绩
//!
//! ### `quiz_runner` - 答题会话
//! - 逐题显示、读取、等待
//! - 会话计时与状态流转
//!
//! ## 层次关系
//!
//! ```text
//! app (处理整个程序)
//!     ↓
//! quiz_runner (处理 QuestionSet)
//!     ↓
//! services (能力层：scorer)
//!     ↓
//! infrastructure (基础设施：ResponseSource / SessionTimer)
//! ```

pub mod app;
pub mod quiz_runner;

// 重新导出主要类型
pub use app::{App, SessionSummary, TIME_UP_MESSAGE};
pub use quiz_runner::{QuizRunner, SessionOutcome, SessionState};
