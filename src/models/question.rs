/// 单道题目
///
/// `response` 只由答题流程按顺序写入，且最多写入一次。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub question: String,
    /// 题干与输入光标之间的文本，可以为空
    pub delimiter: String,
    pub expected_answer: String,
    pub response: Option<String>,
}

impl QuestionRecord {
    pub fn new(
        question: impl Into<String>,
        delimiter: impl Into<String>,
        expected_answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            delimiter: delimiter.into(),
            expected_answer: expected_answer.into(),
            response: None,
        }
    }

    /// 显示给用户的提示文本（题干 + 分隔符）
    pub fn prompt(&self) -> String {
        format!("{}{}", self.question, self.delimiter)
    }

    /// 是否回答正确（忽略大小写和首尾空白；未作答视为错误）
    pub fn is_correct(&self) -> bool {
        match &self.response {
            Some(response) => normalize(response) == normalize(&self.expected_answer),
            None => false,
        }
    }
}

/// 统一比较格式：去除首尾空白并转为小写
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// 有序题目集合
///
/// 解析后长度固定，会话期间只修改每道题的 `response`。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSet {
    records: Vec<QuestionRecord>,
}

impl QuestionSet {
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&QuestionRecord> {
        self.records.get(index)
    }

    /// 已作答的题目数
    pub fn answered_count(&self) -> usize {
        self.records.iter().filter(|r| r.response.is_some()).count()
    }

    /// 回答正确的题目数
    pub fn correct_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_correct()).count()
    }

    /// 记录第 `index` 题的作答
    ///
    /// 已有作答或越界时返回 `false`，不覆盖原值。
    pub(crate) fn record_response(&mut self, index: usize, response: String) -> bool {
        match self.records.get_mut(index) {
            Some(record) if record.response.is_none() => {
                record.response = Some(response);
                true
            }
            _ => false,
        }
    }
}

impl From<Vec<QuestionRecord>> for QuestionSet {
    fn from(records: Vec<QuestionRecord>) -> Self {
        Self::new(records)
    }
}
