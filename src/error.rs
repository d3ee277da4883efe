use thiserror::Error;

use crate::analyzer::ParseError;
use crate::tokenizer::LexError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrereqError {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    /// No grammar alternative consumed the whole token stream.
    #[error("Parse error at token {position} (byte {offset}), unparsed input: {remaining:?}")]
    Parse {
        /// Token offset of the furthest failure.
        position: usize,
        /// Byte offset of that token in the source string.
        offset: usize,
        /// Source text from `offset` on; empty when the input ran out.
        remaining: String,
        #[source]
        source: ParseError,
    },

    #[error("Input too long: {length} bytes exceeds the limit of {limit}")]
    InputTooLong { length: usize, limit: usize },

    #[error("Nesting too deep: {depth} levels exceeds the limit of {limit}")]
    NestingTooDeep { depth: usize, limit: usize },

    #[error("Config error: {0}")]
    Config(String),
}

pub type PrereqResult<T> = Result<T, PrereqError>;

impl PrereqError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        PrereqError::Config(message.into())
    }

    /// The unparsed source text, for lex and parse failures.
    pub fn remaining(&self) -> Option<&str> {
        match self {
            PrereqError::Lex(error) => Some(&error.remaining),
            PrereqError::Parse { remaining, .. } => Some(remaining),
            _ => None,
        }
    }
}
