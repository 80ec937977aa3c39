use super::{AnswerChecker, RequiredFragments, check};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// A practice prompt and its canonical answer.
#[derive(Clone)]
pub struct ExerciseSpec {
    pub title: String,
    pub description: String,
    pub instructions: String,
    pub solution_text: String,
    /// Revealed one at a time, in order.
    pub hints: Vec<String>,
    custom_checker: Option<Arc<dyn AnswerChecker>>,
}

impl ExerciseSpec {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        instructions: impl Into<String>,
        solution_text: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            instructions: instructions.into(),
            solution_text: solution_text.into(),
            hints: Vec::new(),
            custom_checker: None,
        }
    }

    #[must_use]
    pub fn with_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hints = hints.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_checker(mut self, checker: impl AnswerChecker + 'static) -> Self {
        self.custom_checker = Some(Arc::new(checker));
        self
    }

    #[must_use]
    pub fn custom_checker(&self) -> Option<&dyn AnswerChecker> {
        self.custom_checker.as_deref()
    }

    #[must_use]
    pub fn grade(&self, answer: &str) -> bool {
        check(answer, &self.solution_text, self.custom_checker())
    }
}

impl fmt::Debug for ExerciseSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExerciseSpec")
            .field("title", &self.title)
            .field("solution_text", &self.solution_text)
            .field("hints", &self.hints.len())
            .field("custom_checker", &self.custom_checker.is_some())
            .finish_non_exhaustive()
    }
}

/// Exercise as stored in lesson content files.
#[derive(Debug, Deserialize)]
pub(crate) struct ExerciseDef {
    title: String,
    #[serde(default)]
    description: String,
    instructions: String,
    solution: String,
    #[serde(default)]
    hints: Vec<String>,
    #[serde(default)]
    checker: Option<CheckerDef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum CheckerDef {
    RequiredFragments(Vec<String>),
}

impl From<ExerciseDef> for ExerciseSpec {
    fn from(def: ExerciseDef) -> Self {
        let spec = Self::new(def.title, def.description, def.instructions, def.solution).with_hints(def.hints);
        match def.checker {
            Some(CheckerDef::RequiredFragments(fragments)) => spec.with_checker(RequiredFragments::new(fragments)),
            None => spec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_uses_default_comparator() {
        let spec = ExerciseSpec::new("t", "d", "i", "SELECT * FROM users;");
        assert!(spec.custom_checker().is_none());
        assert!(spec.grade("select *   from USERS;"));
        assert!(!spec.grade("select id from users;"));
    }

    #[test]
    fn test_grade_uses_custom_checker() {
        let spec = ExerciseSpec::new("t", "d", "i", "SELECT 1;").with_checker(|a: &str| a.contains("42"));
        assert!(spec.grade("SELECT 42;"));
        assert!(!spec.grade("SELECT 1;"));
    }

    #[test]
    fn test_from_def_with_fragments() {
        let def: ExerciseDef = serde_json::from_str(
            r#"{
                "title": "Practice",
                "instructions": "Insert John",
                "solution": "INSERT INTO users (name) VALUES ('John Doe');",
                "hints": ["Start with INSERT INTO users"],
                "checker": { "required_fragments": ["insert into users", "john doe"] }
            }"#,
        )
        .unwrap();
        let spec = ExerciseSpec::from(def);

        assert_eq!(spec.hints.len(), 1);
        assert!(spec.custom_checker().is_some());
        assert!(spec.grade("insert into users (name, email) values ('John Doe', 'x')"));
        assert!(!spec.grade("insert into users (name) values ('Jane')"));
        assert!(format!("{spec:?}").contains("custom_checker: true"));
    }
}
