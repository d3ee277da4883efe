//! # Prerequisite Engine: Coordinating the Parse Pipeline
//!
//! ```text
//! Source String → Limits → Tokenizer → Nesting Check → Grammar → PrereqTree
//! ```
//!
//! 1. **Empty check**: a blank string means the course has no prerequisites
//! 2. **Length limit**: oversized inputs are rejected before lexing
//! 3. **Tokenization**: the string becomes a stream of [`TokenSpan`]s
//! 4. **Nesting limit**: parenthesis depth is bounded before the recursive
//!    grammar runs
//! 5. **Parsing**: the whole token stream must match
//!    [`parse_expression`](crate::analyzer::parsers::parse_expression)
//!
//! A parse failure is reported at the furthest token any grammar alternative
//! reached, translated back to a byte offset in the source string.

use tracing::{debug, warn};

use crate::{
    analyzer::{parsers, ParseError, Parser},
    ast::PrereqTree,
    config::EngineConfig,
    tokenizer::{self, Token, TokenSpan},
    PrereqError, PrereqResult,
};

/// Parses prerequisite strings under a fixed [`EngineConfig`].
///
/// The engine holds no per-call state; one instance can serve any number of
/// inputs.
#[derive(Debug, Clone, Default)]
pub struct PrereqEngine {
    config: EngineConfig,
}

impl PrereqEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parses one prerequisite string.
    ///
    /// # Errors
    /// * `PrereqError::InputTooLong` - The input exceeds `max_input_length`
    /// * `PrereqError::Lex` - A character sequence is not a token
    /// * `PrereqError::NestingTooDeep` - Parentheses nest deeper than `max_nesting_depth`
    /// * `PrereqError::Parse` - The tokens do not form a prerequisite expression
    ///
    /// # Example
    /// ```rust
    /// use prereq::{ExprNode, PrereqEngine, PrereqTree};
    ///
    /// let engine = PrereqEngine::default();
    /// let tree = engine.parse("15-122 or 15-150").unwrap();
    /// assert_eq!(
    ///     tree,
    ///     PrereqTree::Expr(ExprNode::or(vec![
    ///         ExprNode::course("15-122"),
    ///         ExprNode::course("15-150"),
    ///     ]))
    /// );
    /// ```
    #[tracing::instrument(level = "debug", skip(self, input), fields(length = input.len()))]
    pub fn parse(&self, input: &str) -> PrereqResult<PrereqTree> {
        if input.trim().is_empty() {
            debug!("empty input, no prerequisites");
            return Ok(PrereqTree::NoPrerequisites);
        }

        if input.len() > self.config.max_input_length {
            warn!(
                "rejecting input of {} bytes, limit {}",
                input.len(),
                self.config.max_input_length
            );
            return Err(PrereqError::InputTooLong {
                length: input.len(),
                limit: self.config.max_input_length,
            });
        }

        let spans = tokenizer::tokenize_spans(input)?;
        debug!("tokenized {} tokens", spans.len());

        let depth = nesting_depth(&spans);
        if depth > self.config.max_nesting_depth {
            warn!(
                "rejecting input nested {} levels, limit {}",
                depth, self.config.max_nesting_depth
            );
            return Err(PrereqError::NestingTooDeep {
                depth,
                limit: self.config.max_nesting_depth,
            });
        }

        let tokens: Vec<Token> = spans.iter().map(|span| span.token.clone()).collect();
        let (_, node) = parsers::parse_expression()
            .parse(&tokens, 0)
            .map_err(|e| parse_failure(input, &spans, e))?;
        debug!("{:?}", node);

        Ok(PrereqTree::Expr(node))
    }
}

/// Parses a prerequisite string with the default [`EngineConfig`].
///
/// ```rust
/// use prereq::{parse_prereq_string, PrereqTree};
///
/// assert_eq!(parse_prereq_string("").unwrap(), PrereqTree::NoPrerequisites);
/// assert!(parse_prereq_string("15-122 and 15-151 or 21-127").is_err());
/// ```
pub fn parse_prereq_string(input: &str) -> PrereqResult<PrereqTree> {
    PrereqEngine::default().parse(input)
}

/// Deepest run of unclosed `(` tokens. Unbalanced closers are left for the
/// grammar to reject.
fn nesting_depth(spans: &[TokenSpan]) -> usize {
    let mut depth = 0usize;
    let mut max_depth = 0usize;
    for span in spans {
        match span.token {
            Token::LParen => {
                depth += 1;
                max_depth = max_depth.max(depth);
            }
            Token::RParen => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max_depth
}

fn parse_failure(input: &str, spans: &[TokenSpan], error: ParseError) -> PrereqError {
    let position = error.furthest_position();
    let offset = spans
        .get(position)
        .map(|span| span.start)
        .unwrap_or(input.len());
    let remaining = input[offset..].to_string();
    warn!("failed to parse {:?} at token {}: {}", input, position, error);
    PrereqError::Parse {
        position,
        offset,
        remaining,
        source: error,
    }
}
