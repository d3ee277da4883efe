use nom::{branch::alt, bytes::complete::tag, combinator::value};
use strum::{AsRefStr, Display, EnumString};

use super::token::{LexResult, Token};

/// Structural characters of a prerequisite expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr)]
pub enum Delimiter {
    #[strum(serialize = "(")]
    OpenParen,
    #[strum(serialize = ")")]
    CloseParen,
}

impl From<Delimiter> for Token {
    fn from(delimiter: Delimiter) -> Self {
        match delimiter {
            Delimiter::OpenParen => Token::LParen,
            Delimiter::CloseParen => Token::RParen,
        }
    }
}

pub fn parse_delimiter(input: &str) -> LexResult<Token> {
    alt((
        value(
            Token::from(Delimiter::OpenParen),
            tag(Delimiter::OpenParen.as_ref()),
        ),
        value(
            Token::from(Delimiter::CloseParen),
            tag(Delimiter::CloseParen.as_ref()),
        ),
    ))(input)
}
