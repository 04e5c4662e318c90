use crate::error::ParseError;
use crate::models::question::{QuestionRecord, QuestionSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 每行至少需要的字段数：题目, 分隔符, 答案
const REQUIRED_FIELDS: usize = 3;

/// 从 CSV 数据源加载题目集合
///
/// 不含表头，每行格式为 `题目,分隔符,答案`，多余字段忽略。
/// 空输入得到空集合。
pub fn load_questions<R: Read>(source: R) -> Result<QuestionSet, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;

        if row.len() < REQUIRED_FIELDS {
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            return Err(ParseError::MissingFields {
                line,
                found: row.len(),
            });
        }

        records.push(QuestionRecord::new(&row[0], &row[1], &row[2]));
    }

    tracing::debug!("成功解析 {} 道题目", records.len());

    Ok(QuestionSet::new(records))
}

/// 从 CSV 文件加载题目集合
pub fn load_questions_from_path(path: &Path) -> Result<QuestionSet, ParseError> {
    tracing::info!("正在加载题库: {}", path.display());

    let file = File::open(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load_questions(file)
}

impl QuestionSet {
    /// 见 [`load_questions`]
    pub fn load<R: Read>(source: R) -> Result<Self, ParseError> {
        load_questions(source)
    }

    /// 见 [`load_questions_from_path`]
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        load_questions_from_path(path.as_ref())
    }
}
