//! Grammar for prerequisite expressions.
//!
//! ```text
//! value      ::= course | "(" course ")" | "(" or_expr ")" | "(" and_expr ")"
//! or_expr    ::= value ("or" value)*
//! and_expr   ::= value ("and" value)*
//! expression ::= course EOF | or_expr EOF | and_expr EOF
//! ```
//!
//! `and` and `or` cannot be mixed at one nesting level: `A and B or C` is
//! rejected because neither list form consumes the whole input. Lists of one
//! value still produce an `Or`/`And` node; they are not collapsed.

use super::super::{
    combinators::{memo_table, MemoTable},
    core::*,
    prelude::*,
};
use crate::ast::ExprNode;
use crate::tokenizer::token::{Token, TokenKind};

fn parse_token(kind: TokenKind) -> impl Parser<Token, Token> {
    match_token::<Token>(kind)
}

pub fn parse_course() -> impl Parser<Token, ExprNode> {
    satisfy("course", |token: &Token| match token {
        Token::Course(id) => Some(ExprNode::course(id.clone())),
        _ => None,
    })
}

fn parenthesized<P>(parser: P) -> impl Parser<Token, ExprNode>
where
    P: Parser<Token, ExprNode>,
{
    delimited(
        parse_token(TokenKind::LParen),
        parser,
        parse_token(TokenKind::RParen),
    )
}

// One table per parse: every `value` instance reached through `lazy` shares it.
type ValueTable = MemoTable<ExprNode>;

fn value(table: ValueTable) -> impl Parser<Token, ExprNode> {
    let or_table = table.clone();
    let and_table = table.clone();
    memo(
        with_context(
            choice(vec![
                Box::new(parse_course()),
                Box::new(parenthesized(parse_course())),
                Box::new(parenthesized(lazy(move || or_expr(or_table.clone())))),
                Box::new(parenthesized(lazy(move || and_expr(and_table.clone())))),
            ]),
            "value",
        ),
        table,
    )
}

fn or_expr(table: ValueTable) -> impl Parser<Token, ExprNode> {
    with_context(
        map(
            separated_list1(value(table), parse_token(TokenKind::Or)),
            ExprNode::or,
        ),
        "or expression",
    )
}

fn and_expr(table: ValueTable) -> impl Parser<Token, ExprNode> {
    with_context(
        map(
            separated_list1(value(table), parse_token(TokenKind::And)),
            ExprNode::and,
        ),
        "and expression",
    )
}

fn complete<P>(parser: P) -> impl Parser<Token, ExprNode>
where
    P: Parser<Token, ExprNode>,
{
    then(parser, end_of_input(), |node: ExprNode, _: ()| node)
}

fn expression(table: ValueTable) -> impl Parser<Token, ExprNode> {
    with_context(
        choice(vec![
            Box::new(complete(parse_course())),
            Box::new(complete(or_expr(table.clone()))),
            Box::new(complete(and_expr(table))),
        ]),
        "prerequisite expression",
    )
}

// The public rules build their grammar on every `parse` call, so a memo
// table never sees two different token slices.

pub fn parse_value() -> impl Parser<Token, ExprNode> {
    lazy(|| value(memo_table()))
}

pub fn parse_or_expr() -> impl Parser<Token, ExprNode> {
    lazy(|| or_expr(memo_table()))
}

pub fn parse_and_expr() -> impl Parser<Token, ExprNode> {
    lazy(|| and_expr(memo_table()))
}

/// The whole-input parser: each alternative must consume every token.
pub fn parse_expression() -> impl Parser<Token, ExprNode> {
    lazy(|| expression(memo_table()))
}
