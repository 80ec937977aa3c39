use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_till1},
    character::complete::{char, digit1, multispace0, multispace1},
    combinator::{eof, map, map_res, peek, rest, verify},
    sequence::{delimited, terminated},
    IResult,
};

pub fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

/// Matches `name` only as a whole word, so `\lesson` does not eat `\lessons`.
pub fn keyword<'a>(name: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    terminated(tag(name), peek(alt((multispace1, eof))))
}

/// A bare word or a double-quoted string (for multi-word category names).
pub fn argument(input: &str) -> IResult<&str, String> {
    ws(alt((
        map(
            delimited(char('"'), take_till(|c| c == '"'), char('"')),
            |s: &str| s.to_string(),
        ),
        map(take_till1(char::is_whitespace), |s: &str| s.to_string()),
    )))(input)
}

pub fn number(input: &str) -> IResult<&str, usize> {
    ws(map_res(digit1, |s: &str| s.parse::<usize>()))(input)
}

/// Everything left on the line, trimmed; fails when only whitespace remains.
pub fn text_rest(input: &str) -> IResult<&str, String> {
    map(verify(rest, |s: &str| !s.trim().is_empty()), |s: &str| {
        s.trim().to_string()
    })(input)
}
