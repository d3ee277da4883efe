pub mod requisite;

pub use requisite::parse_expression;
