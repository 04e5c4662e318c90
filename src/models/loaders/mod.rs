pub mod csv_loader;

pub use csv_loader::{load_questions, load_questions_from_path};
