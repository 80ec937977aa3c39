use super::registry::{ContentRegistry, RegistryBuilder};
use crate::core::TutorialError;
use crate::exercise::{ExerciseDef, ExerciseSpec};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Annotated walkthrough of an example query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryExplanation {
    pub purpose: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonStep {
    pub title: String,
    pub sql: String,
    /// Editable steps can be run through the simulator.
    #[serde(default)]
    pub editable: bool,
    #[serde(default)]
    pub explanation: Option<QueryExplanation>,
}

#[derive(Debug, Clone)]
pub struct Lesson {
    pub slug: String,
    pub part: u8,
    pub title: String,
    pub summary: String,
    pub steps: Vec<LessonStep>,
    pub exercise: Option<ExerciseSpec>,
}

impl Lesson {
    /// Step by 1-based number.
    pub fn step(&self, number: usize) -> Result<&LessonStep, TutorialError> {
        number
            .checked_sub(1)
            .and_then(|idx| self.steps.get(idx))
            .ok_or_else(|| TutorialError::StepNotFound {
                lesson: self.slug.clone(),
                step: number,
            })
    }

    pub fn exercise(&self) -> Result<&ExerciseSpec, TutorialError> {
        self.exercise
            .as_ref()
            .ok_or_else(|| TutorialError::NoExercise(self.slug.clone()))
    }
}

#[derive(Debug, Deserialize)]
struct LessonDef {
    slug: String,
    part: u8,
    title: String,
    summary: String,
    steps: Vec<LessonStep>,
    #[serde(default)]
    exercise: Option<ExerciseDef>,
}

/// The ordered tutorial parts.
#[derive(Debug, Clone, Default)]
pub struct Curriculum {
    lessons: Vec<Lesson>,
}

impl Curriculum {
    pub fn from_json(json: &str) -> Result<Self, TutorialError> {
        let defs: Vec<LessonDef> = serde_json::from_str(json)?;

        let mut parts = HashSet::new();
        let mut slugs = HashSet::new();
        for def in &defs {
            if !parts.insert(def.part) {
                return Err(TutorialError::DuplicateItem {
                    category: "lessons".to_string(),
                    title: format!("part {}", def.part),
                });
            }
            if !slugs.insert(def.slug.to_ascii_lowercase()) {
                return Err(TutorialError::DuplicateItem {
                    category: "lessons".to_string(),
                    title: def.slug.clone(),
                });
            }
        }

        let lessons = defs
            .into_iter()
            .map(|def| Lesson {
                slug: def.slug,
                part: def.part,
                title: def.title,
                summary: def.summary,
                steps: def.steps,
                exercise: def.exercise.map(ExerciseSpec::from),
            })
            .collect();

        let curriculum = Self { lessons };
        // Step titles double as lookup keys, so they must be unique per lesson.
        curriculum.as_registry()?;
        Ok(curriculum)
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Finds a lesson by part number (`"3"`) or slug (`"part-3-package-requests"`).
    pub fn find(&self, key: &str) -> Result<&Lesson, TutorialError> {
        let key = key.trim();
        let found = match key.parse::<u8>() {
            Ok(part) => self.lessons.iter().find(|l| l.part == part),
            Err(_) => self.lessons.iter().find(|l| l.slug.eq_ignore_ascii_case(key)),
        };
        found.ok_or_else(|| TutorialError::LessonNotFound(key.to_string()))
    }

    /// Lessons as a searchable registry: one category per lesson title, one
    /// item per step described by its explanation's purpose.
    pub fn as_registry(&self) -> Result<ContentRegistry, TutorialError> {
        let mut builder = RegistryBuilder::default();
        for lesson in &self.lessons {
            let items = lesson
                .steps
                .iter()
                .map(|step| {
                    let description = step
                        .explanation
                        .as_ref()
                        .map(|e| e.purpose.clone())
                        .unwrap_or_default();
                    (step.title.clone(), description, step.sql.clone())
                })
                .collect();
            builder.category(lesson.title.clone(), items)?;
        }
        Ok(builder.build())
    }
}
