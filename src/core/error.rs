use thiserror::Error;

#[derive(Error, Debug)]
pub enum TutorialError {
    #[error("Category '{0}' not found")]
    CategoryNotFound(String),
    #[error("Table '{0}' not found")]
    TableNotFound(String),
    #[error("Lesson '{0}' not found")]
    LessonNotFound(String),
    #[error("Lesson '{lesson}' has no step {step}")]
    StepNotFound { lesson: String, step: usize },
    #[error("Step {step} of lesson '{lesson}' is read-only (use \\show {step})")]
    StepNotEditable { lesson: String, step: usize },
    #[error("No lesson is open (use \\lesson <n>)")]
    NoLessonOpen,
    #[error("Lesson '{0}' has no exercise")]
    NoExercise(String),
    #[error("Duplicate category '{0}'")]
    DuplicateCategory(String),
    #[error("Duplicate item '{title}' in category '{category}'")]
    DuplicateItem { category: String, title: String },
    #[error("Duplicate glossary term '{0}'")]
    DuplicateTerm(String),
    #[error("Row {row} does not match result columns: {reason}")]
    RowShapeMismatch { row: usize, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Content error: {0}")]
    Content(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Logging setup failed: {0}")]
    Logging(String),
    #[error("Parse error: {0}")]
    Parse(String),
}
