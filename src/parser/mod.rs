// Module declarations
mod command;
mod common;
mod meta;

pub use command::Command;

use nom::branch::alt;

/// Parses one line of shell input. Lines not starting with `\` are SQL.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    if !input.starts_with('\\') {
        return Ok(Command::Sql(input.to_string()));
    }

    // Split into two alt blocks to stay well under nom's tuple limit
    let result = alt((
        alt((
            meta::quit,
            meta::help,
            meta::list_lessons,
            meta::open_lesson,
            meta::list_steps,
            meta::show_step,
            meta::run_step,
            meta::explain_step,
            meta::show_draft,
        )),
        alt((
            meta::show_exercise,
            meta::next_hint,
            meta::show_solution,
            meta::check_answer,
            meta::cookbook,
            meta::tips,
            meta::glossary,
            meta::define,
            meta::cheat_sheet,
            meta::schema,
        )),
    ))(input);

    match result {
        Ok((remaining, cmd)) => {
            if remaining.trim().is_empty() {
                Ok(cmd)
            } else {
                Err(format!("Unexpected input after command: {remaining}"))
            }
        }
        Err(_) => {
            let name = input.split_whitespace().next().unwrap_or(input);
            Err(format!("Unknown or incomplete command: {name}. Use \\? for help."))
        }
    }
}
