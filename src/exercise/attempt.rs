use super::ExerciseSpec;

/// What the next hint request reveals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintStep<'a> {
    Hint { number: usize, total: usize, text: &'a str },
    Solution(&'a str),
}

/// A learner's in-progress work on one exercise: last answer, hint position
/// and last verdict. Owned by the page session that shows the exercise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseAttempt {
    answer: String,
    hint_index: Option<usize>,
    solution_revealed: bool,
    verdict: Option<bool>,
}

impl ExerciseAttempt {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, spec: &ExerciseSpec, answer: &str) -> bool {
        let correct = spec.grade(answer);
        self.answer = answer.to_string();
        self.verdict = Some(correct);
        correct
    }

    /// Reveals the next hint; asking past the last one reveals the solution.
    pub fn next_hint<'a>(&mut self, spec: &'a ExerciseSpec) -> HintStep<'a> {
        let total = spec.hints.len();
        let next = match self.hint_index {
            _ if self.solution_revealed => None,
            None if total > 0 => Some(0),
            Some(i) if i + 1 < total => Some(i + 1),
            _ => None,
        };

        match next.and_then(|i| spec.hints.get(i).map(|text| (i, text))) {
            Some((i, text)) => {
                self.hint_index = Some(i);
                HintStep::Hint {
                    number: i + 1,
                    total,
                    text,
                }
            }
            None => {
                self.solution_revealed = true;
                HintStep::Solution(&spec.solution_text)
            }
        }
    }

    pub fn reveal_solution<'a>(&mut self, spec: &'a ExerciseSpec) -> &'a str {
        self.solution_revealed = true;
        &spec.solution_text
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub const fn verdict(&self) -> Option<bool> {
        self.verdict
    }

    #[must_use]
    pub const fn hints_shown(&self) -> usize {
        match self.hint_index {
            Some(i) => i + 1,
            None => 0,
        }
    }

    #[must_use]
    pub const fn solution_revealed(&self) -> bool {
        self.solution_revealed
    }
}
