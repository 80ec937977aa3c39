//! Exercise grading.
//!
//! The default comparison is textual: both sides are lower-cased and their
//! whitespace collapsed, then compared for equality. It does not parse SQL,
//! so a correct query with a different column order or different aliases is
//! graded as wrong. Exercises that need a looser policy supply their own
//! `AnswerChecker`.

mod attempt;
mod spec;

pub use attempt::{ExerciseAttempt, HintStep};
pub use spec::ExerciseSpec;
pub(crate) use spec::ExerciseDef;

/// Lower-cases `sql`, collapses every whitespace run to one space and trims both ends.
#[must_use]
pub fn normalize(sql: &str) -> String {
    sql.to_lowercase()
        .split(is_sql_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whitespace as browsers see it in pasted answers: Unicode spaces plus the
/// byte-order mark, but not NEL (U+0085).
fn is_sql_space(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}

/// Grades `user_text`. A custom checker gets the raw, un-normalized answer and
/// its verdict is returned as is; otherwise both texts are compared after `normalize`.
#[must_use]
pub fn check(user_text: &str, solution_text: &str, custom_checker: Option<&dyn AnswerChecker>) -> bool {
    match custom_checker {
        Some(checker) => checker.check(user_text),
        None => normalize(user_text) == normalize(solution_text),
    }
}

/// Caller-supplied grading policy.
pub trait AnswerChecker: Send + Sync {
    fn check(&self, answer: &str) -> bool;
}

impl<F> AnswerChecker for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn check(&self, answer: &str) -> bool {
        self(answer)
    }
}

/// Accepts an answer when its normalized text contains every fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFragments {
    fragments: Vec<String>,
}

impl RequiredFragments {
    #[must_use]
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            fragments: fragments.into_iter().map(|f| normalize(f.as_ref())).collect(),
        }
    }

    #[must_use]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }
}

impl AnswerChecker for RequiredFragments {
    fn check(&self, answer: &str) -> bool {
        let answer = normalize(answer);
        self.fragments.iter().all(|f| answer.contains(f.as_str()))
    }
}
