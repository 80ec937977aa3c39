// Static tutorial content: lessons, cookbook recipes, tips, glossary,
// cheat sheets and table schemas. Content files live in `content/` and are
// embedded at build time; a directory on disk can override any of them.

mod lesson;
mod reference;
mod registry;

pub use lesson::{Curriculum, Lesson, LessonStep, QueryExplanation};
pub use reference::{CheatSheet, CheatSheets, SchemaColumn, Schemas, TableSchema};
pub use registry::{ContentRegistry, LessonContentItem};

use crate::core::TutorialError;
use crate::glossary::Glossary;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

const LESSONS_JSON: &str = include_str!("../../content/lessons.json");
const COOKBOOK_JSON: &str = include_str!("../../content/cookbook.json");
const TIPS_JSON: &str = include_str!("../../content/tips.json");
const GLOSSARY_JSON: &str = include_str!("../../content/glossary.json");
const CHEATSHEETS_JSON: &str = include_str!("../../content/cheatsheets.json");
const SCHEMAS_JSON: &str = include_str!("../../content/schemas.json");

/// Everything the tutorial shows, loaded once and never mutated.
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    pub curriculum: Curriculum,
    pub cookbook: ContentRegistry,
    pub tips: ContentRegistry,
    pub glossary: Glossary,
    pub cheat_sheets: CheatSheets,
    pub schemas: Schemas,
}

impl ContentLibrary {
    /// Content compiled into the binary.
    pub fn embedded() -> Result<Self, TutorialError> {
        Self::load(None)
    }

    /// Content from `dir`; files missing there fall back to the embedded copy.
    pub fn from_dir(dir: &Path) -> Result<Self, TutorialError> {
        Self::load(Some(dir))
    }

    fn load(dir: Option<&Path>) -> Result<Self, TutorialError> {
        let library = Self {
            curriculum: Curriculum::from_json(&source(dir, "lessons.json", LESSONS_JSON)?)?,
            cookbook: ContentRegistry::from_json(&source(dir, "cookbook.json", COOKBOOK_JSON)?)?,
            tips: ContentRegistry::from_json(&source(dir, "tips.json", TIPS_JSON)?)?,
            glossary: Glossary::from_json(&source(dir, "glossary.json", GLOSSARY_JSON)?)?,
            cheat_sheets: CheatSheets::from_json(&source(dir, "cheatsheets.json", CHEATSHEETS_JSON)?)?,
            schemas: Schemas::from_json(&source(dir, "schemas.json", SCHEMAS_JSON)?)?,
        };

        info!(
            lessons = library.curriculum.lessons().len(),
            recipes = library.cookbook.item_count(),
            tips = library.tips.item_count(),
            terms = library.glossary.len(),
            "content loaded"
        );
        Ok(library)
    }
}

fn source(dir: Option<&Path>, file: &str, embedded: &'static str) -> Result<Cow<'static, str>, TutorialError> {
    match dir.map(|d| d.join(file)) {
        Some(path) if path.exists() => {
            debug!(path = %path.display(), "loading content file");
            Ok(Cow::Owned(std::fs::read_to_string(path)?))
        }
        _ => Ok(Cow::Borrowed(embedded)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let library = ContentLibrary::embedded().unwrap();
        assert_eq!(library.curriculum.lessons().len(), 8);
        assert_eq!(library.cookbook.list_categories().len(), 10);
        assert_eq!(library.tips.list_categories().len(), 5);
        assert_eq!(library.glossary.len(), 10);
        assert_eq!(library.schemas.tables().len(), 2);
        assert!(library.cheat_sheets.get("Data Types").is_some());
    }

    #[test]
    fn test_lesson_parts_are_in_order() {
        let library = ContentLibrary::embedded().unwrap();
        let parts: Vec<u8> = library.curriculum.lessons().iter().map(|l| l.part).collect();
        assert_eq!(parts, (1..=8).collect::<Vec<u8>>());
    }

    #[test]
    fn test_override_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("glossary.json"),
            r#"[{ "term": "CTE", "definition": "Common table expression" }]"#,
        )
        .unwrap();

        let library = ContentLibrary::from_dir(dir.path()).unwrap();
        assert_eq!(library.glossary.len(), 1);
        assert!(library.glossary.lookup("CTE").is_some());
        // Files not present in the directory come from the embedded set.
        assert_eq!(library.curriculum.lessons().len(), 8);
    }

    #[test]
    fn test_override_dir_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tips.json"), "{ not json").unwrap();
        assert!(matches!(ContentLibrary::from_dir(dir.path()), Err(TutorialError::Content(_))));
    }
}
