//! # prereq: Course Prerequisite Expressions
//!
//! Parses course-catalog prerequisite strings such as
//! `"21-127 and (15-151 or 15-122)"` into a boolean expression tree that a
//! renderer can display and a database can index.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Prerequisite String → Tokenizer → Analyzer → PrereqTree
//! ```
//!
//! ### Stage 1: Tokenization
//!
//! The [`tokenizer`] module splits the string into parentheses, the `and` /
//! `or` keywords and course identifiers.
//!
//! ### Stage 2: Parsing
//!
//! The [`analyzer`] module holds a generic parser-combinator core and the
//! prerequisite grammar built from it. Operators cannot be mixed at one
//! nesting level without parentheses.
//!
//! ### Stage 3: Coordination
//!
//! The [`engine`] module runs both stages under the limits in [`config`] and
//! reports failures as [`PrereqError`].
//!
//! ## Example
//!
//! ```rust
//! use prereq::{parse_prereq_string, ExprNode, PrereqTree};
//!
//! let tree = parse_prereq_string("15-122 and 15-151").unwrap();
//! assert_eq!(
//!     tree,
//!     PrereqTree::Expr(ExprNode::and(vec![
//!         ExprNode::course("15-122"),
//!         ExprNode::course("15-151"),
//!     ]))
//! );
//! assert_eq!(tree.course_ids(), vec!["15-122", "15-151"]);
//! ```

pub mod analyzer;
pub mod ast;
pub mod config;
pub mod engine;
pub mod error;
pub mod tokenizer;

// Re-exports
pub use ast::*;
pub use config::EngineConfig;
pub use engine::{parse_prereq_string, PrereqEngine};
pub use error::*;
