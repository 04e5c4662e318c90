pub mod loaders;
pub mod question;

pub use loaders::{load_questions, load_questions_from_path};
pub use question::{QuestionRecord, QuestionSet};
