//! # Tokenizer Component
//!
//! Lexical analysis of prerequisite strings such as
//! `"21-127 and (15-151 or 15-122)"`.
//!
//! ## Component Structure
//!
//! * [`token`]: Token types and the tokenize driver
//! * [`keyword`]: The `and` / `or` operators
//! * [`symbol`]: Parentheses
//! * [`course`]: Course identifiers (`15-122`, `15122`)
//!
//! At every position whitespace is skipped, then parentheses, keywords and
//! course identifiers are tried in that order. The first match wins. Any
//! other character stops the tokenizer with a [`LexError`](token::LexError)
//! that reports the unconsumed remainder.
//!
//! ```rust
//! use prereq::tokenizer::token::{tokenize, Token};
//!
//! let tokens = tokenize("15-122 or 15-151").unwrap();
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Course("15-122".to_string()),
//!         Token::Or,
//!         Token::Course("15-151".to_string()),
//!     ]
//! );
//! ```

pub mod course;
pub mod keyword;
pub mod symbol;
pub mod token;

pub use token::{tokenize, tokenize_spans, LexError, Token, TokenKind, TokenSpan};
