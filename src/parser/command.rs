/// A line of shell input: a backslash meta-command or SQL for the simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    ListLessons,
    OpenLesson(String),
    /// Optional search over step titles and explanations
    ListSteps(Option<String>),
    ShowStep(usize),
    /// Loads the step's SQL into the draft and executes it
    RunStep(usize),
    ExplainStep(usize),
    ShowDraft,
    ShowExercise,
    NextHint,
    ShowSolution,
    CheckAnswer(String),
    Cookbook {
        category: Option<String>,
        search: Option<String>,
    },
    Tips {
        category: Option<String>,
        search: Option<String>,
    },
    Glossary(Option<String>),
    Define(String),
    CheatSheet(Option<String>),
    Schema(Option<String>),
    Sql(String),
}
