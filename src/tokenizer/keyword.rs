//! # Keyword Token Handling
//!
//! The two boolean operators of a prerequisite expression. Matching is an
//! exact, case-sensitive prefix match with no word-boundary check, so `or`
//! is recognized at the start of `order`.

use nom::{branch::alt, bytes::complete::tag, combinator::value};

use super::token::{LexResult, Token};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    /// Conjunction.
    And,
    /// Disjunction.
    Or,
}

impl From<Keyword> for Token {
    fn from(keyword: Keyword) -> Self {
        match keyword {
            Keyword::And => Token::And,
            Keyword::Or => Token::Or,
        }
    }
}

pub fn parse_keyword(input: &str) -> LexResult<Token> {
    alt((
        value(Token::from(Keyword::And), tag(Keyword::And.as_ref())),
        value(Token::from(Keyword::Or), tag(Keyword::Or.as_ref())),
    ))(input)
}
