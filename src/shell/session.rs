use crate::content::Lesson;
use crate::core::SimulatedResultSet;
use crate::exercise::ExerciseAttempt;
use crate::simulator::{self, PageContext};
use tracing::debug;

/// State owned by the page currently on screen: the editor draft, the last
/// simulated result and the exercise attempt. Replaced wholesale when the
/// learner navigates, so nothing carries over between pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSession {
    lesson: Option<usize>,
    page: PageContext,
    draft: String,
    last_result: Option<SimulatedResultSet>,
    attempt: ExerciseAttempt,
}

impl Default for PageSession {
    fn default() -> Self {
        Self::general()
    }
}

impl PageSession {
    /// No lesson open.
    #[must_use]
    pub fn general() -> Self {
        Self {
            lesson: None,
            page: PageContext::General,
            draft: String::new(),
            last_result: None,
            attempt: ExerciseAttempt::new(),
        }
    }

    /// `index` is the lesson's position in the curriculum.
    #[must_use]
    pub fn for_lesson(index: usize, lesson: &Lesson) -> Self {
        Self {
            lesson: Some(index),
            page: PageContext::for_lesson(lesson),
            ..Self::general()
        }
    }

    #[must_use]
    pub const fn lesson_index(&self) -> Option<usize> {
        self.lesson
    }

    #[must_use]
    pub const fn page(&self) -> PageContext {
        self.page
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, sql: &str) {
        sql.clone_into(&mut self.draft);
    }

    #[must_use]
    pub const fn last_result(&self) -> Option<&SimulatedResultSet> {
        self.last_result.as_ref()
    }

    #[must_use]
    pub const fn attempt(&self) -> &ExerciseAttempt {
        &self.attempt
    }

    pub fn attempt_mut(&mut self) -> &mut ExerciseAttempt {
        &mut self.attempt
    }

    /// Runs the draft through the simulator. A blank draft is ignored and the
    /// previous result is kept.
    pub fn execute(&mut self) -> Option<&SimulatedResultSet> {
        if self.draft.trim().is_empty() {
            debug!(page = %self.page, "ignoring blank draft");
            return None;
        }
        let result = simulator::simulate(&self.draft, self.page);
        Some(&*self.last_result.insert(result))
    }
}
