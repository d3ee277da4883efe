//! Course identifiers: two digits, an optional hyphen, three digits.
//!
//! The identifier is kept exactly as written; `15122` is not rewritten to
//! `15-122`.

use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{map, opt, recognize},
    sequence::tuple,
};

use super::token::{LexResult, Token};

fn digits<'a>(count: usize) -> impl FnMut(&'a str) -> LexResult<'a, &'a str> {
    take_while_m_n(count, count, |c: char| c.is_ascii_digit())
}

pub fn parse_course_id(input: &str) -> LexResult<Token> {
    map(
        recognize(tuple((digits(2), opt(char('-')), digits(3)))),
        |id: &str| Token::Course(id.to_string()),
    )(input)
}
