// pgtutor - interactive PostgreSQL design tutorial
// Lesson content, canned query simulation and exercise grading behind a psql-like shell

// Clippy configuration
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::manual_let_else)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::format_push_string)]
#![allow(clippy::wildcard_enum_match_arm)]
#![allow(clippy::module_name_repetitions)]

// Shared types: values, result sets, errors
pub mod core;

// Static content: lessons, cookbook, tips, cheat sheets, schemas
pub mod content;

// Term definitions
pub mod glossary;

// Answer grading and hint progression
pub mod exercise;

// Canned query results per lesson page
pub mod simulator;

// Meta-command parser
pub mod parser;

// Terminal front end
pub mod shell;

pub mod config;
pub mod logging;

// Re-export commonly used types for convenience
pub use crate::core::{ResultRows, SimulatedResultSet, TutorialError, Value};
pub use content::{ContentLibrary, ContentRegistry, Curriculum, Lesson, LessonContentItem};
pub use exercise::{AnswerChecker, ExerciseAttempt, ExerciseSpec, check, normalize};
pub use glossary::{Glossary, GlossaryEntry};
pub use parser::{Command, parse_command};
pub use shell::{Reply, Tutor};
pub use simulator::{PageContext, simulate};
