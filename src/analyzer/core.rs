//! # Core Parser Definitions
//!
//! This module defines the fundamental parser interface and error types
//! that the combinators and the prerequisite grammar are built on.

use std::fmt;

use thiserror::Error;

/// Parser trait defines the core parsing interface.
///
/// A parser receives the whole token slice and the offset to start from. It
/// never mutates the input; on success it returns the offset just past what
/// it consumed, so backtracking is a matter of retrying from an older offset.
///
/// # Type Parameters
///
/// * `I` - The input token type
/// * `O` - The output value type
pub trait Parser<I, O> {
    /// Attempts to parse the input starting at the given position.
    ///
    /// # Returns
    ///
    /// * `Ok((new_pos, output))` - If parsing succeeds
    /// * `Err(error)` - If the input does not match at `pos`
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O>;
}

impl<I, O, P> Parser<I, O> for Box<P>
where
    P: Parser<I, O> + ?Sized,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        (**self).parse(input, pos)
    }
}

/// Result type for parsing operations.
pub type ParseResult<O> = Result<(usize, O), ParseError>;

/// Tokens that carry a payload-free tag the grammar can match on.
pub trait Tagged {
    type Tag: Copy + PartialEq + fmt::Display;

    fn tag(&self) -> Self::Tag;
}

/// Why a parser did not match.
///
/// Every variant records the token offset it refers to. These are ordinary
/// "no match" values: alternation and repetition consume them silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended where a token was required
    #[error("unexpected end of input at position {position}, expected {expected}")]
    UnexpectedEOF { expected: String, position: usize },
    /// A token did not satisfy the parser
    #[error("expected {expected}, found {found} at position {position}")]
    Unexpected {
        expected: String,
        found: String,
        position: usize,
    },
    /// Tokens were left where the end of input was required
    #[error("expected end of input, found {found} at position {position}")]
    TrailingInput { found: String, position: usize },
    /// Every alternative failed
    #[error("no alternative matched at position {position}")]
    NoAlternative {
        position: usize,
        /// Furthest offset any alternative got to before failing.
        furthest: usize,
        /// The failure of the alternative that got furthest.
        deepest: Option<Box<ParseError>>,
    },
    #[error("{message}: {inner}")]
    WithContext {
        message: String,
        inner: Box<ParseError>,
    },
}

impl ParseError {
    pub fn with_context(self, ctx: &str) -> Self {
        ParseError::WithContext {
            message: ctx.to_string(),
            inner: Box::new(self),
        }
    }

    /// Offset at which this parser started failing.
    pub fn get_position(&self) -> usize {
        match self {
            ParseError::UnexpectedEOF { position, .. } => *position,
            ParseError::Unexpected { position, .. } => *position,
            ParseError::TrailingInput { position, .. } => *position,
            ParseError::NoAlternative { position, .. } => *position,
            ParseError::WithContext { inner, .. } => inner.get_position(),
        }
    }

    /// Furthest offset reached before the failure, used for diagnostics.
    pub fn furthest_position(&self) -> usize {
        match self {
            ParseError::NoAlternative { furthest, .. } => *furthest,
            ParseError::WithContext { inner, .. } => inner.furthest_position(),
            other => other.get_position(),
        }
    }

    /// The innermost failure at the furthest offset, skipping context and
    /// alternation wrappers.
    pub fn root_cause(&self) -> &ParseError {
        match self {
            ParseError::WithContext { inner, .. } => inner.root_cause(),
            ParseError::NoAlternative {
                deepest: Some(inner),
                ..
            } => inner.root_cause(),
            other => other,
        }
    }
}
