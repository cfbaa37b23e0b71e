//! The root of the tree

use crate::function::FunctionDecl;
use crate::visitor::Visitor;

/// A parsed source file: its function declarations in declaration order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Ast {
    pub functions: Vec<FunctionDecl>,
}

impl Ast {
    pub fn new(functions: impl IntoIterator<Item = FunctionDecl>) -> Self {
        Self {
            functions: functions.into_iter().collect(),
        }
    }

    /// Finds a function by name
    pub fn function(&self, name: &str) -> Option<&FunctionDecl> {
        self.functions.iter().find(|function| function.name == name)
    }

    /// Walks this tree with a visitor
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Err> {
        visitor.visit_ast(self)
    }
}
