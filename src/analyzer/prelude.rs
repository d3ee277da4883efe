use super::combinators::*;
use super::core::{Parser, Tagged};

pub fn match_token<I: Tagged>(tag: I::Tag) -> MatchToken<I> {
    MatchToken::new(tag)
}

pub fn end_of_input<I>() -> EndOfInput<I> {
    EndOfInput::new()
}

pub fn satisfy<I, O, F>(expected: &'static str, f: F) -> Satisfy<I, O, F>
where
    F: Fn(&I) -> Option<O>,
{
    Satisfy::new(expected, f)
}

pub fn alt<P, Q, I, O>(first: P, second: Q) -> Alt<P, Q>
where
    P: Parser<I, O>,
    Q: Parser<I, O>,
{
    Alt::new(first, second)
}

pub fn choice<I, O>(parsers: Vec<Box<dyn Parser<I, O>>>) -> Choice<I, O> {
    Choice::new(parsers)
}

pub fn then<P, Q, F, I, A, B, O>(first: P, second: Q, combine: F) -> Then<P, Q, F, A, B>
where
    P: Parser<I, A>,
    Q: Parser<I, B>,
    F: Fn(A, B) -> O,
{
    Then::new(first, second, combine)
}

pub fn map<P, F, A, B, I>(parser: P, f: F) -> Map<P, F, A, B>
where
    P: Parser<I, A>,
    F: Fn(A) -> B,
{
    Map::new(parser, f)
}

pub fn many<P, I, O>(parser: P) -> Many<P, I, O>
where
    P: Parser<I, O>,
{
    Many::new(parser)
}

pub fn separated_list1<P, S, I, O, SO>(
    item_parser: P,
    separator_parser: S,
) -> SeparatedList1<P, S, I, O, SO>
where
    P: Parser<I, O>,
    S: Parser<I, SO>,
{
    SeparatedList1::new(item_parser, separator_parser)
}

pub fn delimited<L, P, R, I, O, LO, RO>(left: L, parser: P, right: R) -> Delimited<L, P, R, LO, RO>
where
    L: Parser<I, LO>,
    P: Parser<I, O>,
    R: Parser<I, RO>,
{
    Delimited::new(left, parser, right)
}

pub fn with_context<P, I, O, C>(parser: P, c: C) -> WithContext<P, C>
where
    P: Parser<I, O>,
{
    WithContext::new(parser, c)
}

pub fn memo<P, I, O>(parser: P, table: MemoTable<O>) -> Memo<P, O>
where
    P: Parser<I, O>,
{
    Memo::new(parser, table)
}

pub fn lazy<I, O, F, P>(f: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<I, O>,
{
    Lazy::new(f)
}
