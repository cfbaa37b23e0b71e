//! Function declarations

use crate::block::Block;

/// A function declaration, `func name(type param ...) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub body: Block,
}

impl FunctionDecl {
    pub fn new(
        name: impl Into<String>,
        parameters: impl IntoIterator<Item = Parameter>,
        body: Block,
    ) -> Self {
        Self {
            name: name.into(),
            parameters: parameters.into_iter().collect(),
            body,
        }
    }
}

/// A single `type name` parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub type_name: String,
    pub name: String,
}

impl Parameter {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }
}
