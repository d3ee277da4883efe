use std::fmt;

use serde::{Deserialize, Serialize};

/// A node of a prerequisite expression tree.
///
/// Serialized with a `tag` field, e.g. `{"tag":"course","value":"15-122"}`
/// or `{"tag":"and","children":[...]}`, which is the shape renderers consume.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
pub enum ExprNode {
    /// A single course requirement.
    Course { value: String },
    /// All children are required.
    And { children: Vec<ExprNode> },
    /// Any one child is required.
    Or { children: Vec<ExprNode> },
}

impl ExprNode {
    pub fn course(value: impl Into<String>) -> Self {
        ExprNode::Course {
            value: value.into(),
        }
    }

    pub fn and(children: Vec<ExprNode>) -> Self {
        ExprNode::And { children }
    }

    pub fn or(children: Vec<ExprNode>) -> Self {
        ExprNode::Or { children }
    }

    pub fn is_course(&self) -> bool {
        matches!(self, ExprNode::Course { .. })
    }

    /// Every course referenced by the tree, in source order. Duplicates are kept.
    pub fn course_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.collect_course_ids(&mut ids);
        ids
    }

    fn collect_course_ids<'a>(&'a self, ids: &mut Vec<&'a str>) {
        match self {
            ExprNode::Course { value } => ids.push(value),
            ExprNode::And { children } | ExprNode::Or { children } => {
                for child in children {
                    child.collect_course_ids(ids);
                }
            }
        }
    }

    /// Number of nested `And`/`Or` levels; a lone course has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            ExprNode::Course { .. } => 0,
            ExprNode::And { children } | ExprNode::Or { children } => {
                1 + children.iter().map(ExprNode::depth).max().unwrap_or(0)
            }
        }
    }
}

fn write_operand(f: &mut fmt::Formatter, node: &ExprNode) -> fmt::Result {
    if node.is_course() {
        write!(f, "{}", node)
    } else {
        write!(f, "({})", node)
    }
}

fn write_joined(f: &mut fmt::Formatter, children: &[ExprNode], keyword: &str) -> fmt::Result {
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, " {} ", keyword)?;
        }
        write_operand(f, child)?;
    }
    Ok(())
}

/// Renders the tree in prerequisite-string syntax. Composite operands are
/// always parenthesized, since the grammar does not mix operators at one level.
impl fmt::Display for ExprNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExprNode::Course { value } => write!(f, "{}", value),
            ExprNode::And { children } => write_joined(f, children, "and"),
            ExprNode::Or { children } => write_joined(f, children, "or"),
        }
    }
}

/// Result of parsing a course's prerequisite string.
///
/// `NoPrerequisites` serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrereqTree {
    NoPrerequisites,
    Expr(ExprNode),
}

impl PrereqTree {
    pub fn expr(&self) -> Option<&ExprNode> {
        match self {
            PrereqTree::NoPrerequisites => None,
            PrereqTree::Expr(node) => Some(node),
        }
    }

    pub fn into_expr(self) -> Option<ExprNode> {
        match self {
            PrereqTree::NoPrerequisites => None,
            PrereqTree::Expr(node) => Some(node),
        }
    }

    pub fn course_ids(&self) -> Vec<&str> {
        self.expr().map(ExprNode::course_ids).unwrap_or_default()
    }
}

impl From<ExprNode> for PrereqTree {
    fn from(node: ExprNode) -> Self {
        PrereqTree::Expr(node)
    }
}

impl fmt::Display for PrereqTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PrereqTree::NoPrerequisites => Ok(()),
            PrereqTree::Expr(node) => write!(f, "{}", node),
        }
    }
}
