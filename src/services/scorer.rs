//! 评分服务 - 业务能力层
//!
//! 只负责"给一组题目打分"，不关心会话如何结束

use std::fmt;

use crate::models::question::QuestionSet;

/// 计算得分比例，范围 `[0.0, 1.0]`
///
/// 空题目集合得分为 `0.0`。
pub fn score(questions: &QuestionSet) -> f64 {
    ScoreReport::from_questions(questions).fraction()
}

/// 成绩报告
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreReport {
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
}

impl ScoreReport {
    pub fn from_questions(questions: &QuestionSet) -> Self {
        Self {
            correct: questions.correct_count(),
            answered: questions.answered_count(),
            total: questions.len(),
        }
    }

    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }

    pub fn percentage(&self) -> f64 {
        self.fraction() * 100.0
    }
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Your score: {:.2}%", self.percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::QuestionRecord;

    fn answered(answers: &[(&str, Option<&str>)]) -> QuestionSet {
        let records = answers
            .iter()
            .map(|(expected, response)| {
                let mut record = QuestionRecord::new("q", "?", *expected);
                record.response = response.map(str::to_string);
                record
            })
            .collect::<Vec<_>>();
        QuestionSet::new(records)
    }

    #[test]
    fn test_empty_set_scores_zero() {
        let set = QuestionSet::default();
        assert_eq!(score(&set), 0.0);
        assert_eq!(ScoreReport::from_questions(&set).to_string(), "Your score: 0.00%");
    }

    #[test]
    fn test_unanswered_count_as_wrong() {
        let set = answered(&[("4", Some("4")), ("Paris", Some("paris")), ("10", None)]);
        let report = ScoreReport::from_questions(&set);

        assert_eq!(report.correct, 2);
        assert_eq!(report.answered, 2);
        assert_eq!(report.total, 3);
        assert_eq!(report.to_string(), "Your score: 66.67%");
    }

    #[test]
    fn test_all_correct_is_full_score() {
        let set = answered(&[("4", Some("4")), ("Paris", Some("PARIS"))]);
        assert_eq!(score(&set), 1.0);
        assert_eq!(ScoreReport::from_questions(&set).to_string(), "Your score: 100.00%");
    }

    #[test]
    fn test_wrong_answers_score_zero() {
        let set = answered(&[("4", Some("5")), ("Paris", Some("rome"))]);
        assert_eq!(score(&set), 0.0);
    }
}
