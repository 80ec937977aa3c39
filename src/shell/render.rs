use crate::config::TableStyle;
use crate::content::{CheatSheet, Lesson, LessonContentItem, LessonStep, TableSchema};
use crate::core::SimulatedResultSet;
use crate::exercise::{ExerciseSpec, HintStep};
use crate::glossary::GlossaryEntry;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, Table};
use std::fmt::Write;

pub const HELP: &str = "\
Meta-commands:
  \\q, \\quit                      - Quit
  \\?, \\h, \\help                  - Show this help
  \\lessons                        - List tutorial parts
  \\lesson <n|slug>                - Open a lesson
  \\steps [search]                 - List the open lesson's steps
  \\show <n>                       - Show step n
  \\run <n>                        - Run editable step n in the editor
  \\explain <n>                    - Explain step n's query
  \\draft                          - Show the editor contents
  \\exercise                       - Show the lesson's exercise
  \\hint                           - Reveal the next hint
  \\solution                       - Reveal the solution
  \\check <sql>                    - Grade an exercise answer
  \\cookbook [category|all] [search] - Browse recipes
  \\tips [category|all] [search]   - Browse tips
  \\glossary [search]              - Search glossary terms
  \\define <term>                  - Show a term's definition
  \\cheatsheet [category]          - Show a cheat sheet
  \\schema [table]                 - Show table schemas

Quote multi-word arguments: \\cookbook \"JSON Operations\" jsonb
Anything else is SQL, executed against the open lesson when a line ends with ';'.";

/// Turns content and query results into terminal text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    style: TableStyle,
}

impl Renderer {
    #[must_use]
    pub const fn new(style: TableStyle) -> Self {
        Self { style }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(match self.style {
            TableStyle::Utf8 => UTF8_FULL,
            TableStyle::Ascii => ASCII_FULL,
        });
        table
    }

    #[must_use]
    pub fn format_result(&self, result: &SimulatedResultSet) -> String {
        match result {
            SimulatedResultSet::Error(msg) => format!("Query Error: {msg}\n"),
            SimulatedResultSet::Success => "Query executed successfully.\n".to_string(),
            SimulatedResultSet::Rows(rows) if rows.is_empty() => {
                "Query executed successfully. No rows returned.\n".to_string()
            }
            SimulatedResultSet::Rows(rows) => {
                let mut table = self.table();
                table.set_header(rows.columns().iter().map(Cell::new));
                for row in rows.rows() {
                    table.add_row(row.iter().map(Cell::new));
                }

                let n = rows.len();
                format!("{table}\n({n} {})\n", if n == 1 { "row" } else { "rows" })
            }
        }
    }

    #[must_use]
    pub fn lessons(&self, lessons: &[Lesson]) -> String {
        let mut table = self.table();
        table.set_header(vec!["Part", "Title", "Steps", "Exercise"]);
        for lesson in lessons {
            table.add_row(vec![
                Cell::new(lesson.part),
                Cell::new(&lesson.title),
                Cell::new(lesson.steps.len()),
                Cell::new(if lesson.exercise.is_some() { "yes" } else { "" }),
            ]);
        }
        format!("{table}\n")
    }

    #[must_use]
    pub fn lesson(&self, lesson: &Lesson) -> String {
        let mut out = format!("Part {}: {}\n\n{}\n\n", lesson.part, lesson.title, lesson.summary);
        let steps: Vec<(usize, &LessonStep)> = lesson.steps.iter().enumerate().map(|(i, s)| (i + 1, s)).collect();
        out.push_str(&self.steps(&steps));
        if lesson.exercise.is_some() {
            out.push_str("This lesson has an exercise: \\exercise\n");
        }
        out
    }

    /// Numbered step listing.
    #[must_use]
    pub fn steps(&self, steps: &[(usize, &LessonStep)]) -> String {
        if steps.is_empty() {
            return "No matching steps.\n".to_string();
        }
        let mut table = self.table();
        table.set_header(vec!["#", "Step", "Editable", "Explained"]);
        for (number, step) in steps {
            table.add_row(vec![
                Cell::new(number),
                Cell::new(&step.title),
                Cell::new(if step.editable { "yes" } else { "" }),
                Cell::new(if step.explanation.is_some() { "yes" } else { "" }),
            ]);
        }
        format!("{table}\n")
    }

    #[must_use]
    pub fn step(&self, number: usize, step: &LessonStep) -> String {
        let mut out = format!("{number}. {}\n\n{}\n", step.title, step.sql.trim_end());
        if step.editable {
            let _ = write!(out, "\n(editable: \\run {number} to execute it)\n");
        }
        out
    }

    #[must_use]
    pub fn explanation(&self, number: usize, step: &LessonStep) -> String {
        let Some(explanation) = &step.explanation else {
            return format!("Step {number} has no explanation.\n");
        };

        let mut out = format!("{}\n\nPurpose: {}\n", step.title, explanation.purpose);
        if !explanation.keywords.is_empty() {
            let _ = writeln!(out, "Keywords: {}", explanation.keywords.join(", "));
        }
        if !explanation.steps.is_empty() {
            out.push_str("\nHow it works:\n");
            for (i, line) in explanation.steps.iter().enumerate() {
                let _ = writeln!(out, "  {}. {line}", i + 1);
            }
        }
        out
    }

    #[must_use]
    pub fn exercise(&self, spec: &ExerciseSpec) -> String {
        let mut out = format!("{}\n\n{}\n\n{}\n", spec.title, spec.description, spec.instructions);
        if !spec.hints.is_empty() {
            let _ = writeln!(out, "\n{} hints available: \\hint", spec.hints.len());
        }
        out.push_str("Submit with: \\check <your sql>\n");
        out
    }

    #[must_use]
    pub fn hint(&self, step: &HintStep<'_>) -> String {
        match step {
            HintStep::Hint { number, total, text } => format!("Hint {number}/{total}: {text}\n"),
            HintStep::Solution(sql) => self.solution(sql),
        }
    }

    #[must_use]
    pub fn solution(&self, sql: &str) -> String {
        format!("Solution:\n{}\n", sql.trim_end())
    }

    #[must_use]
    pub fn verdict(&self, correct: bool) -> String {
        if correct {
            "Correct! 🎉 Great job! Your solution is correct.\n".to_string()
        } else {
            "Not quite right. Try again or check the solution for reference.\n".to_string()
        }
    }

    #[must_use]
    pub fn categories(&self, heading: &str, categories: &[&str]) -> String {
        let mut out = format!("{heading}:\n");
        for name in categories {
            let _ = writeln!(out, "  {name}");
        }
        out
    }

    /// Items of one category, each with its SQL.
    #[must_use]
    pub fn items(&self, category: &str, items: &[&LessonContentItem]) -> String {
        let mut out = format!("== {category} ==\n");
        if items.is_empty() {
            out.push_str("No matching items.\n");
            return out;
        }
        for item in items {
            let _ = writeln!(out, "\n{}\n  {}\n", item.title, item.description);
            for line in item.sql_text.trim_end().lines() {
                let _ = writeln!(out, "    {line}");
            }
        }
        out
    }

    #[must_use]
    pub fn glossary(&self, entries: &[(&str, &GlossaryEntry)]) -> String {
        if entries.is_empty() {
            return "No matching terms.\n".to_string();
        }
        let mut table = self.table();
        table.set_header(vec!["Term", "Definition"]);
        for (term, entry) in entries {
            table.add_row(vec![Cell::new(term), Cell::new(&entry.definition)]);
        }
        format!("{table}\n")
    }

    #[must_use]
    pub fn definition(&self, entry: &GlossaryEntry) -> String {
        let mut out = format!("{}: {}\n", entry.term, entry.definition);
        if let Some(example) = &entry.example {
            let _ = writeln!(out, "Example: {example}");
        }
        out
    }

    #[must_use]
    pub fn cheat_sheet(&self, sheet: &CheatSheet, others: &[&str]) -> String {
        let mut out = format!("== {} ==\n{}\n", sheet.category, sheet.content.trim_end());
        let rest: Vec<&str> = others.iter().copied().filter(|c| *c != sheet.category).collect();
        if !rest.is_empty() {
            let _ = writeln!(out, "\nOther sheets: {}", rest.join(", "));
        }
        out
    }

    #[must_use]
    pub fn schema(&self, schema: &TableSchema) -> String {
        let mut table = self.table();
        table.set_header(vec!["Column", "Type", "Constraints"]);
        for column in &schema.columns {
            table.add_row(vec![
                Cell::new(&column.name),
                Cell::new(&column.data_type),
                Cell::new(column.constraints.join(", ")),
            ]);
        }
        format!("Table \"{}\"\n{table}\n", schema.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ResultRows, Value};

    #[test]
    fn test_format_result_variants() {
        let r = Renderer::new(TableStyle::Ascii);
        assert_eq!(r.format_result(&SimulatedResultSet::Success), "Query executed successfully.\n");
        assert_eq!(
            r.format_result(&SimulatedResultSet::Error("boom".into())),
            "Query Error: boom\n"
        );

        let empty = ResultRows::new(vec!["id".into()], vec![]).unwrap();
        assert_eq!(
            r.format_result(&SimulatedResultSet::Rows(empty)),
            "Query executed successfully. No rows returned.\n"
        );
    }

    #[test]
    fn test_format_rows() {
        let r = Renderer::new(TableStyle::Ascii);
        let rows = ResultRows::new(
            vec!["id".into(), "name".into()],
            vec![vec![Value::Integer(7), Value::text("Ada")]],
        )
        .unwrap();
        let out = r.format_result(&SimulatedResultSet::Rows(rows));
        assert!(out.contains("name"));
        assert!(out.contains("Ada"));
        assert!(out.ends_with("(1 row)\n"));
    }

    #[test]
    fn test_definition_without_example() {
        let r = Renderer::default();
        let entry = GlossaryEntry {
            term: "VIEW".into(),
            definition: "A stored query".into(),
            example: None,
        };
        assert_eq!(r.definition(&entry), "VIEW: A stored query\n");
    }
}
