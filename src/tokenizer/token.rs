use std::fmt;

use nom::{branch::alt, IResult};
use strum::EnumDiscriminants;
use thiserror::Error;

use super::{course::parse_course_id, keyword::parse_keyword, symbol::parse_delimiter};
use crate::analyzer::core::Tagged;

/// A lexical unit of a prerequisite string.
///
/// `TokenKind` is generated alongside and is what the grammar matches on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumDiscriminants)]
#[strum_discriminants(name(TokenKind), derive(Hash, strum::Display))]
pub enum Token {
    LParen,
    RParen,
    And,
    Or,
    /// Raw course identifier as written in the source, e.g. `15-122` or `15122`.
    Course(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::And => write!(f, "and"),
            Token::Or => write!(f, "or"),
            Token::Course(id) => write!(f, "{}", id),
        }
    }
}

impl Tagged for Token {
    type Tag = TokenKind;

    fn tag(&self) -> TokenKind {
        TokenKind::from(self)
    }
}

/// A token together with the byte range it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpan {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}

pub type LexResult<'a, T> = IResult<&'a str, T>;

pub type TokenizerResult<T> = Result<T, LexError>;

/// Raised on the first substring no token class accepts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized input at position {position}: {remaining:?} (after {consumed:?})")]
pub struct LexError {
    /// Text successfully tokenized before the failure.
    pub consumed: String,
    /// Text from the failure onward.
    pub remaining: String,
    /// Byte offset of the failure.
    pub position: usize,
}

// Order is significant: delimiters, then keywords, then course identifiers.
fn parse_token(input: &str) -> LexResult<Token> {
    alt((parse_delimiter, parse_keyword, parse_course_id))(input)
}

/// Tokenizes `input`, keeping the byte span of every token.
#[tracing::instrument(level = "debug", skip(input))]
pub fn tokenize_spans(input: &str) -> TokenizerResult<Vec<TokenSpan>> {
    let mut tokens = Vec::new();
    let mut remaining = input;

    while let Some(c) = remaining.chars().next() {
        let start = input.len() - remaining.len();

        if c.is_whitespace() {
            remaining = &remaining[c.len_utf8()..];
            continue;
        }

        match parse_token(remaining) {
            Ok((rest, token)) => {
                tokens.push(TokenSpan {
                    token,
                    start,
                    end: input.len() - rest.len(),
                });
                remaining = rest;
            }
            Err(e) => {
                let error = LexError {
                    consumed: input[..start].to_string(),
                    remaining: remaining.to_string(),
                    position: start,
                };
                tracing::debug!(cause = ?e, "{}", error);
                return Err(error);
            }
        }
    }

    tracing::debug!(count = tokens.len(), "tokenized prerequisite string");
    Ok(tokens)
}

/// Tokenizes `input` into a flat token sequence.
pub fn tokenize(input: &str) -> TokenizerResult<Vec<Token>> {
    Ok(tokenize_spans(input)?
        .into_iter()
        .map(|span| span.token)
        .collect())
}
