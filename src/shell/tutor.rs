use super::render::{HELP, Renderer};
use super::session::PageSession;
use crate::config::TableStyle;
use crate::content::{ContentLibrary, ContentRegistry, Lesson, LessonStep};
use crate::core::TutorialError;
use crate::parser::{Command, parse_command};
use tracing::{debug, info};

/// Result of feeding one line to the tutor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to print; empty while a statement is still being buffered.
    Output(String),
    Quit,
}

/// Interactive tutorial session: owns the content, the page on screen and
/// the partially typed SQL statement.
#[derive(Debug)]
pub struct Tutor {
    library: ContentLibrary,
    /// Lesson steps indexed for `\steps` search.
    steps_index: ContentRegistry,
    renderer: Renderer,
    session: PageSession,
    buffer: String,
}

impl Tutor {
    pub fn new(library: ContentLibrary, style: TableStyle) -> Result<Self, TutorialError> {
        let steps_index = library.curriculum.as_registry()?;
        Ok(Self {
            library,
            steps_index,
            renderer: Renderer::new(style),
            session: PageSession::general(),
            buffer: String::new(),
        })
    }

    #[must_use]
    pub const fn session(&self) -> &PageSession {
        &self.session
    }

    #[must_use]
    pub const fn library(&self) -> &ContentLibrary {
        &self.library
    }

    #[must_use]
    pub fn is_buffering(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// psql-style prompt naming the open page.
    #[must_use]
    pub fn prompt(&self) -> String {
        let marker = if self.is_buffering() { '-' } else { '=' };
        format!("pgtutor[{}]{marker}> ", self.session.page())
    }

    /// Feeds one line of input. Meta-commands run immediately, even while a
    /// statement is pending; SQL is buffered until a line ends with `;`.
    pub fn feed_line(&mut self, line: &str) -> Reply {
        let trimmed = line.trim();

        if trimmed.starts_with('\\') {
            return match parse_command(trimmed) {
                Ok(cmd) => self.dispatch(cmd),
                Err(e) => Reply::Output(format!("Error: {}\n", TutorialError::Parse(e))),
            };
        }
        if self.buffer.is_empty() && trimmed.is_empty() {
            return Reply::Output(String::new());
        }

        if !trimmed.is_empty() {
            if !self.buffer.is_empty() {
                self.buffer.push('\n');
            }
            self.buffer.push_str(trimmed);
        }

        if trimmed.ends_with(';') {
            let sql = std::mem::take(&mut self.buffer);
            return self.dispatch(Command::Sql(sql));
        }
        Reply::Output(String::new())
    }

    /// Drops a partially typed statement.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    pub fn dispatch(&mut self, cmd: Command) -> Reply {
        debug!(?cmd, page = %self.session.page(), "dispatching");
        match cmd {
            Command::Quit => Reply::Quit,
            other => match self.run(other) {
                Ok(text) => Reply::Output(text),
                Err(e) => Reply::Output(format!("Error: {e}\n")),
            },
        }
    }

    /// Opens a lesson by part number or slug, discarding the current page's state.
    pub fn open_lesson(&mut self, key: &str) -> Result<String, TutorialError> {
        let lessons = self.library.curriculum.lessons();
        let lesson = self.library.curriculum.find(key)?;
        let index = lessons
            .iter()
            .position(|l| l.slug == lesson.slug)
            .ok_or_else(|| TutorialError::LessonNotFound(key.to_string()))?;

        info!(lesson = %lesson.slug, "opening lesson");
        self.session = PageSession::for_lesson(index, lesson);
        self.buffer.clear();
        Ok(self.renderer.lesson(lesson))
    }

    fn run(&mut self, cmd: Command) -> Result<String, TutorialError> {
        let r = self.renderer;
        match cmd {
            Command::Quit => Ok(String::new()),
            Command::Help => Ok(format!("{HELP}\n")),
            Command::ListLessons => Ok(r.lessons(self.library.curriculum.lessons())),
            Command::OpenLesson(key) => self.open_lesson(&key),
            Command::ListSteps(search) => {
                let lesson = current_lesson(&self.library, &self.session)?;
                let matches = self
                    .steps_index
                    .filter_items(&lesson.title, search.as_deref().unwrap_or(""))?;
                let steps: Vec<(usize, &LessonStep)> = lesson
                    .steps
                    .iter()
                    .enumerate()
                    .filter(|(_, step)| matches.iter().any(|item| item.title == step.title))
                    .map(|(i, step)| (i + 1, step))
                    .collect();
                Ok(r.steps(&steps))
            }
            Command::ShowStep(n) => {
                let lesson = current_lesson(&self.library, &self.session)?;
                Ok(r.step(n, lesson.step(n)?))
            }
            Command::RunStep(n) => {
                let lesson = current_lesson(&self.library, &self.session)?;
                let step = lesson.step(n)?;
                if !step.editable {
                    return Err(TutorialError::StepNotEditable {
                        lesson: lesson.slug.clone(),
                        step: n,
                    });
                }
                self.session.set_draft(&step.sql);
                let mut out = format!("{n}. {}\n", step.title);
                if let Some(result) = self.session.execute() {
                    out.push_str(&r.format_result(result));
                }
                Ok(out)
            }
            Command::ExplainStep(n) => {
                let lesson = current_lesson(&self.library, &self.session)?;
                Ok(r.explanation(n, lesson.step(n)?))
            }
            Command::ShowDraft => Ok(if self.session.draft().is_empty() {
                "(editor is empty)\n".to_string()
            } else {
                format!("{}\n", self.session.draft())
            }),
            Command::ShowExercise => {
                let lesson = current_lesson(&self.library, &self.session)?;
                Ok(r.exercise(lesson.exercise()?))
            }
            Command::NextHint => {
                let spec = current_lesson(&self.library, &self.session)?.exercise()?;
                let step = self.session.attempt_mut().next_hint(spec);
                Ok(r.hint(&step))
            }
            Command::ShowSolution => {
                let spec = current_lesson(&self.library, &self.session)?.exercise()?;
                Ok(r.solution(self.session.attempt_mut().reveal_solution(spec)))
            }
            Command::CheckAnswer(answer) => {
                let spec = current_lesson(&self.library, &self.session)?.exercise()?;
                let correct = self.session.attempt_mut().submit(spec, &answer);
                info!(exercise = %spec.title, correct, "answer checked");
                Ok(r.verdict(correct))
            }
            Command::Cookbook { category, search } => {
                browse(r, "Cookbook categories", &self.library.cookbook, category, search)
            }
            Command::Tips { category, search } => {
                browse(r, "Tip categories", &self.library.tips, category, search)
            }
            Command::Glossary(search) => {
                Ok(r.glossary(&self.library.glossary.search(search.as_deref().unwrap_or(""))))
            }
            Command::Define(term) => {
                Ok(self
                    .library
                    .glossary
                    .lookup_ignore_case(&term)
                    .map_or_else(|| format!("{term}\n"), |entry| r.definition(entry)))
            }
            Command::CheatSheet(category) => {
                let sheets = &self.library.cheat_sheets;
                let sheet = match category {
                    Some(name) => sheets.get(&name).ok_or(TutorialError::CategoryNotFound(name))?,
                    None => sheets
                        .first()
                        .ok_or_else(|| TutorialError::CategoryNotFound(String::new()))?,
                };
                Ok(r.cheat_sheet(sheet, &sheets.categories()))
            }
            Command::Schema(table) => {
                let schemas = &self.library.schemas;
                match table {
                    Some(name) => schemas
                        .get(&name)
                        .map(|schema| r.schema(schema))
                        .ok_or(TutorialError::TableNotFound(name)),
                    None => Ok(schemas.tables().iter().map(|s| r.schema(s)).collect()),
                }
            }
            Command::Sql(sql) => {
                self.session.set_draft(&sql);
                Ok(self
                    .session
                    .execute()
                    .map(|result| r.format_result(result))
                    .unwrap_or_default())
            }
        }
    }
}

fn current_lesson<'a>(library: &'a ContentLibrary, session: &PageSession) -> Result<&'a Lesson, TutorialError> {
    session
        .lesson_index()
        .and_then(|idx| library.curriculum.lessons().get(idx))
        .ok_or(TutorialError::NoLessonOpen)
}

/// Cookbook and tips browsing. No category lists the categories; `all`
/// searches every category.
fn browse(
    r: Renderer,
    heading: &str,
    registry: &ContentRegistry,
    category: Option<String>,
    search: Option<String>,
) -> Result<String, TutorialError> {
    let term = search.as_deref().unwrap_or("");
    let Some(name) = category else {
        return Ok(r.categories(heading, &registry.list_categories()));
    };

    if name.eq_ignore_ascii_case("all") {
        let mut out = String::new();
        for cat in registry.list_categories() {
            let items = registry.filter_items(cat, term)?;
            if !items.is_empty() {
                out.push_str(&r.items(cat, &items));
                out.push('\n');
            }
        }
        if out.is_empty() {
            out.push_str("No matching items.\n");
        }
        return Ok(out);
    }

    let cat = registry
        .resolve_category(&name)
        .ok_or(TutorialError::CategoryNotFound(name))?;
    Ok(r.items(cat, &registry.filter_items(cat, term)?))
}
