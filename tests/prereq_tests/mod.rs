mod error_test;
mod nesting_test;
mod parse_test;
mod property_test;

use prereq::ExprNode;

pub fn course(id: &str) -> ExprNode {
    ExprNode::course(id)
}
