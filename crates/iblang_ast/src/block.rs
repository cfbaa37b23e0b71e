use crate::node::Node;

/// A block of statements
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Node>,
}

impl Block {
    pub fn new(statements: impl IntoIterator<Item = Node>) -> Self {
        Self {
            statements: statements.into_iter().collect(),
        }
    }

    /// Creates a new empty block
    pub const fn empty() -> Self {
        Self { statements: vec![] }
    }
}
