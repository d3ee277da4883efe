//! # Analyzer Component
//!
//! Turns a token stream into an [`ExprNode`](crate::ast::ExprNode) tree with
//! a small parser-combinator library.
//!
//! * [`core`]: The [`Parser`] trait and [`ParseError`]
//! * [`combinators`]: Generic combinator structs
//! * [`prelude`]: Constructor functions for the combinators
//! * [`parsers`]: The prerequisite grammar
//!
//! Parsers are values built by plain functions. They hold no state and never
//! consume their input, so an alternative that fails simply leaves the next
//! one to retry from the same offset.

pub mod combinators;
pub mod core;
pub mod parsers;
pub mod prelude;

pub use core::ParseError;
pub use core::ParseResult;
pub use core::Parser;
pub use core::Tagged;
