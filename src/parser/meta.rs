use super::command::Command;
use super::common::{argument, keyword, number, text_rest, ws};
use nom::{
    branch::alt,
    combinator::{map, opt},
    sequence::{pair, preceded},
    IResult,
};

pub fn quit(input: &str) -> IResult<&str, Command> {
    map(ws(alt((keyword("\\quit"), keyword("\\q")))), |_| Command::Quit)(input)
}

pub fn help(input: &str) -> IResult<&str, Command> {
    // psql-style aliases
    map(
        ws(alt((keyword("\\help"), keyword("\\h"), keyword("\\?")))),
        |_| Command::Help,
    )(input)
}

pub fn list_lessons(input: &str) -> IResult<&str, Command> {
    map(ws(keyword("\\lessons")), |_| Command::ListLessons)(input)
}

pub fn open_lesson(input: &str) -> IResult<&str, Command> {
    map(preceded(ws(keyword("\\lesson")), argument), Command::OpenLesson)(input)
}

pub fn list_steps(input: &str) -> IResult<&str, Command> {
    map(preceded(ws(keyword("\\steps")), opt(text_rest)), Command::ListSteps)(input)
}

pub fn show_step(input: &str) -> IResult<&str, Command> {
    map(preceded(ws(keyword("\\show")), number), Command::ShowStep)(input)
}

pub fn run_step(input: &str) -> IResult<&str, Command> {
    map(preceded(ws(keyword("\\run")), number), Command::RunStep)(input)
}

pub fn explain_step(input: &str) -> IResult<&str, Command> {
    map(preceded(ws(keyword("\\explain")), number), Command::ExplainStep)(input)
}

pub fn show_draft(input: &str) -> IResult<&str, Command> {
    map(ws(keyword("\\draft")), |_| Command::ShowDraft)(input)
}

pub fn show_exercise(input: &str) -> IResult<&str, Command> {
    map(ws(keyword("\\exercise")), |_| Command::ShowExercise)(input)
}

pub fn next_hint(input: &str) -> IResult<&str, Command> {
    map(ws(keyword("\\hint")), |_| Command::NextHint)(input)
}

pub fn show_solution(input: &str) -> IResult<&str, Command> {
    map(ws(keyword("\\solution")), |_| Command::ShowSolution)(input)
}

pub fn check_answer(input: &str) -> IResult<&str, Command> {
    map(preceded(ws(keyword("\\check")), text_rest), Command::CheckAnswer)(input)
}

pub fn cookbook(input: &str) -> IResult<&str, Command> {
    map(
        preceded(ws(keyword("\\cookbook")), pair(opt(argument), opt(text_rest))),
        |(category, search)| Command::Cookbook { category, search },
    )(input)
}

pub fn tips(input: &str) -> IResult<&str, Command> {
    map(
        preceded(ws(keyword("\\tips")), pair(opt(argument), opt(text_rest))),
        |(category, search)| Command::Tips { category, search },
    )(input)
}

pub fn glossary(input: &str) -> IResult<&str, Command> {
    map(preceded(ws(keyword("\\glossary")), opt(text_rest)), Command::Glossary)(input)
}

pub fn define(input: &str) -> IResult<&str, Command> {
    map(preceded(ws(keyword("\\define")), text_rest), Command::Define)(input)
}

pub fn cheat_sheet(input: &str) -> IResult<&str, Command> {
    map(preceded(ws(keyword("\\cheatsheet")), opt(text_rest)), Command::CheatSheet)(input)
}

pub fn schema(input: &str) -> IResult<&str, Command> {
    map(preceded(ws(keyword("\\schema")), opt(argument)), Command::Schema)(input)
}
