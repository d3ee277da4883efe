//! # Parser Combinators
//!
//! The building blocks the prerequisite grammar is assembled from. Every
//! combinator is a plain struct implementing [`Parser`], so composite parsers
//! are values that can be built, stored and rebuilt freely.
//!
//! ## Combinator Types
//!
//! * **Basic**: `MatchToken`, `EndOfInput`, `Satisfy`
//! * **Sequential**: `Then`, `Delimited`
//! * **Alternative**: `Alt`, `Choice`
//! * **Repetition**: `Many`, `SeparatedList1`
//! * **Transformation**: `Map`
//! * **Structural**: `WithContext`, `Lazy`, `Memo`
//!
//! None of them mutate the input. Alternation retries from the offset it was
//! given, so a failed branch never leaks partial consumption.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use super::core::{ParseError, ParseResult, Parser, Tagged};

fn eof(expected: impl ToString, position: usize) -> ParseError {
    ParseError::UnexpectedEOF {
        expected: expected.to_string(),
        position,
    }
}

// Keeps whichever failure got further into the input; the earlier one wins ties.
fn deeper(current: Option<ParseError>, candidate: ParseError) -> Option<ParseError> {
    match current {
        Some(current) if current.furthest_position() >= candidate.furthest_position() => {
            Some(current)
        }
        _ => Some(candidate),
    }
}

fn no_alternative(position: usize, deepest: Option<ParseError>) -> ParseError {
    ParseError::NoAlternative {
        position,
        furthest: deepest
            .as_ref()
            .map_or(position, ParseError::furthest_position),
        deepest: deepest.map(Box::new),
    }
}

/// MatchToken: Consumes one token whose tag equals the given tag
#[derive(Clone)]
pub struct MatchToken<I: Tagged> {
    tag: I::Tag,
}

impl<I: Tagged> MatchToken<I> {
    pub fn new(tag: I::Tag) -> Self {
        Self { tag }
    }
}

impl<I> Parser<I, I> for MatchToken<I>
where
    I: Tagged + Clone + fmt::Display,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<I> {
        match input.get(pos) {
            Some(found) if found.tag() == self.tag => Ok((pos + 1, found.clone())),
            Some(found) => Err(ParseError::Unexpected {
                expected: self.tag.to_string(),
                found: found.to_string(),
                position: pos,
            }),
            None => Err(eof(&self.tag, pos)),
        }
    }
}

/// EndOfInput: Succeeds without consuming anything iff no tokens remain
#[derive(Clone)]
pub struct EndOfInput<I> {
    _phantom: PhantomData<I>,
}

impl<I> EndOfInput<I> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<I> Default for EndOfInput<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: fmt::Display> Parser<I, ()> for EndOfInput<I> {
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<()> {
        match input.get(pos) {
            None => Ok((pos, ())),
            Some(found) => Err(ParseError::TrailingInput {
                found: found.to_string(),
                position: pos,
            }),
        }
    }
}

/// Satisfy: Consumes one token that the function maps to `Some`
#[derive(Clone)]
pub struct Satisfy<I, O, F> {
    expected: &'static str,
    f: F,
    _phantom: PhantomData<(I, O)>,
}

impl<I, O, F> Satisfy<I, O, F> {
    /// `expected` names what the parser accepts, for error messages.
    pub fn new(expected: &'static str, f: F) -> Self {
        Self {
            expected,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, F> Parser<I, O> for Satisfy<I, O, F>
where
    I: fmt::Display,
    F: Fn(&I) -> Option<O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        let found = input.get(pos).ok_or_else(|| eof(self.expected, pos))?;
        (self.f)(found)
            .map(|result| (pos + 1, result))
            .ok_or_else(|| ParseError::Unexpected {
                expected: self.expected.to_string(),
                found: found.to_string(),
                position: pos,
            })
    }
}

/// Alt: Tries the first parser, then the second from the same offset
#[derive(Clone)]
pub struct Alt<P, Q> {
    first: P,
    second: Q,
}

impl<P, Q> Alt<P, Q> {
    pub fn new(first: P, second: Q) -> Self {
        Self { first, second }
    }
}

impl<I, O, P, Q> Parser<I, O> for Alt<P, Q>
where
    P: Parser<I, O>,
    Q: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        let first_error = match self.first.parse(input, pos) {
            Ok(result) => return Ok(result),
            Err(e) => e,
        };
        tracing::trace!(
            target: "prereq::parser::alt",
            error = %first_error,
            position = pos,
            "first alternative failed, trying second"
        );
        self.second
            .parse(input, pos)
            .map_err(|e| no_alternative(pos, deeper(Some(first_error), e)))
    }
}

/// Choice: Tries each parser in order and returns the first success
///
/// Equivalent to folding `Alt` over the list from the left: order matters,
/// and an earlier match wins even if a later one would consume more.
pub struct Choice<I, O> {
    parsers: Vec<Box<dyn Parser<I, O>>>,
}

impl<I, O> Choice<I, O> {
    pub fn new(parsers: Vec<Box<dyn Parser<I, O>>>) -> Self {
        Self { parsers }
    }
}

impl<I, O> Parser<I, O> for Choice<I, O> {
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        let mut deepest = None;
        for (index, parser) in self.parsers.iter().enumerate() {
            match parser.parse(input, pos) {
                Ok(result) => return Ok(result),
                Err(e) => {
                    tracing::trace!(
                        target: "prereq::parser::choice",
                        error = %e,
                        position = pos,
                        alternative = index,
                        "alternative failed"
                    );
                    deepest = deeper(deepest, e);
                }
            }
        }
        Err(no_alternative(pos, deepest))
    }
}

/// Then: Runs two parsers back to back and combines their outputs
#[derive(Clone)]
pub struct Then<P, Q, F, A, B> {
    first: P,
    second: Q,
    combine: F,
    _phantom: PhantomData<(A, B)>,
}

impl<P, Q, F, A, B> Then<P, Q, F, A, B> {
    pub fn new(first: P, second: Q, combine: F) -> Self {
        Self {
            first,
            second,
            combine,
            _phantom: PhantomData,
        }
    }
}

impl<I, A, B, O, P, Q, F> Parser<I, O> for Then<P, Q, F, A, B>
where
    P: Parser<I, A>,
    Q: Parser<I, B>,
    F: Fn(A, B) -> O,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        let (pos, a) = self.first.parse(input, pos)?;
        let (pos, b) = self.second.parse(input, pos)?;
        Ok((pos, (self.combine)(a, b)))
    }
}

/// Map: Transforms the output of a parser using a function
#[derive(Clone)]
pub struct Map<P, F, A, B> {
    parser: P,
    f: F,
    _phantom: PhantomData<(A, B)>,
}

impl<P, F, A, B> Map<P, F, A, B> {
    pub fn new(parser: P, f: F) -> Self {
        Self {
            parser,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<I, A, B, P, F> Parser<I, B> for Map<P, F, A, B>
where
    P: Parser<I, A>,
    F: Fn(A) -> B,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<B> {
        self.parser
            .parse(input, pos)
            .map(|(pos, value)| (pos, (self.f)(value)))
    }
}

/// Many: Applies a parser zero or more times
///
/// Collects results until the inner parser fails. Never fails itself.
#[derive(Clone)]
pub struct Many<P, I, O> {
    parser: P,
    _phantom: PhantomData<(I, O)>,
}

impl<P, I, O> Many<P, I, O> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, P> Parser<I, Vec<O>> for Many<P, I, O>
where
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<Vec<O>> {
        let mut results = Vec::new();
        let mut current_pos = pos;

        loop {
            match self.parser.parse(input, current_pos) {
                Ok((new_pos, value)) => {
                    results.push(value);
                    // A parser that matched nothing would match forever.
                    if new_pos == current_pos {
                        break;
                    }
                    current_pos = new_pos;
                }
                Err(e) => {
                    tracing::trace!(
                        target: "prereq::parser::many",
                        error = %e,
                        position = current_pos,
                        items_collected = results.len(),
                        "many stopped collecting"
                    );
                    break;
                }
            }
        }

        Ok((current_pos, results))
    }
}

/// SeparatedList1: One item, then any number of `separator item` pairs
///
/// Separators are discarded. Fails only when the first item fails; a
/// trailing separator is left unconsumed.
#[derive(Clone)]
pub struct SeparatedList1<P, S, I, O, SO> {
    item_parser: P,
    separator_parser: S,
    _phantom: PhantomData<(I, O, SO)>,
}

impl<P, S, I, O, SO> SeparatedList1<P, S, I, O, SO> {
    pub fn new(item_parser: P, separator_parser: S) -> Self {
        Self {
            item_parser,
            separator_parser,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, SO, P, S> Parser<I, Vec<O>> for SeparatedList1<P, S, I, O, SO>
where
    P: Parser<I, O>,
    S: Parser<I, SO>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<Vec<O>> {
        let (mut current_pos, first) = self.item_parser.parse(input, pos)?;
        let mut results = vec![first];

        loop {
            let next = self
                .separator_parser
                .parse(input, current_pos)
                .and_then(|(sep_pos, _)| self.item_parser.parse(input, sep_pos));
            match next {
                Ok((new_pos, value)) => {
                    results.push(value);
                    current_pos = new_pos;
                }
                Err(e) => {
                    tracing::trace!(
                        target: "prereq::parser::separated_list",
                        error = %e,
                        position = current_pos,
                        items_collected = results.len(),
                        "separated list ended"
                    );
                    break;
                }
            }
        }

        Ok((current_pos, results))
    }
}

/// Delimited: Parses content between left and right delimiters
///
/// Returns only the content parser's result.
#[derive(Clone)]
pub struct Delimited<L, P, R, LO, RO> {
    left: L,
    parser: P,
    right: R,
    _phantom: PhantomData<(LO, RO)>,
}

impl<L, P, R, LO, RO> Delimited<L, P, R, LO, RO> {
    pub fn new(left: L, parser: P, right: R) -> Self {
        Self {
            left,
            parser,
            right,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, LO, RO, L, P, R> Parser<I, O> for Delimited<L, P, R, LO, RO>
where
    L: Parser<I, LO>,
    P: Parser<I, O>,
    R: Parser<I, RO>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        let (pos, _) = self.left.parse(input, pos)?;
        let (pos, value) = self.parser.parse(input, pos)?;
        let (pos, _) = self.right.parse(input, pos)?;
        Ok((pos, value))
    }
}

#[derive(Clone)]
pub struct WithContext<P, C> {
    parser: P,
    context: C,
}

impl<P, C> WithContext<P, C> {
    pub fn new(parser: P, context: C) -> Self {
        Self { parser, context }
    }
}

impl<I, O, P, C: ToString> Parser<I, O> for WithContext<P, C>
where
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        self.parser
            .parse(input, pos)
            .map_err(|e| e.with_context(&self.context.to_string()))
    }
}

/// Lazy: Builds the inner parser only when it is run
///
/// This is what lets grammar rules refer to each other recursively.
#[derive(Clone)]
pub struct Lazy<F> {
    f: F,
}

impl<F> Lazy<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<I, O, F, P> Parser<I, O> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        (self.f)().parse(input, pos)
    }
}

/// Results of one rule, keyed by the offset the rule started at.
///
/// Shared by every `Memo` built for the same rule during one parse. A table
/// must not outlive the token slice it was filled from.
pub type MemoTable<O> = Rc<RefCell<HashMap<usize, ParseResult<O>>>>;

pub fn memo_table<O>() -> MemoTable<O> {
    Rc::new(RefCell::new(HashMap::new()))
}

/// Memo: Runs the inner parser at most once per offset
///
/// Later attempts at the same offset, including failures, are answered from
/// the table. This keeps backtracking alternatives that share a prefix from
/// re-parsing it.
pub struct Memo<P, O> {
    parser: P,
    table: MemoTable<O>,
}

impl<P, O> Memo<P, O> {
    pub fn new(parser: P, table: MemoTable<O>) -> Self {
        Self { parser, table }
    }
}

impl<I, O, P> Parser<I, O> for Memo<P, O>
where
    O: Clone,
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        if let Some(result) = self.table.borrow().get(&pos) {
            tracing::trace!(target: "prereq::parser::memo", position = pos, "memo hit");
            return result.clone();
        }
        let result = self.parser.parse(input, pos);
        self.table.borrow_mut().insert(pos, result.clone());
        result
    }
}
