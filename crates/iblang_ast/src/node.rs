//! Statement and expression nodes

use crate::block::Block;
use iblang_tokens::token::{Token, TokenKind};

/// Any node that can appear inside a block or an expression
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    If(IfStmt),
    Return(ReturnStmt),
    Binary(BinaryExpr),
    Identifier(Identifier),
    Literal(Literal),
    Call(Call),
    Assignment(Assignment),
    Garbage(Garbage),
}

/// `if condition { ... } [else { ... }]`
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Box<Node>,
    pub then_branch: Block,
    pub else_branch: Option<Block>,
}

/// `return value`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Box<Node>,
}

/// A single operator applied to two operands
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Node>,
    pub operator: BinaryOperator,
    pub right: Box<Node>,
}

/// The operator of a [BinaryExpr]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum BinaryOperator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Subtract,
    #[strum(serialize = "*")]
    Multiply,
    #[strum(serialize = "/")]
    Divide,
    #[strum(serialize = "%")]
    Modulo,
    #[strum(serialize = "==")]
    Equal,
    #[strum(serialize = "!=")]
    NotEqual,
    #[strum(serialize = "<")]
    LessThan,
    #[strum(serialize = "<=")]
    LessThanOrEqual,
    #[strum(serialize = ">")]
    GreaterThan,
    #[strum(serialize = ">=")]
    GreaterThanOrEqual,
    #[strum(serialize = "&&")]
    And,
    #[strum(serialize = "||")]
    Or,
}

impl BinaryOperator {
    /// Gets the operator for a token kind, if that kind is a binary operator
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Add => Self::Add,
            TokenKind::Subtract => Self::Subtract,
            TokenKind::Multiply => Self::Multiply,
            TokenKind::Divide => Self::Divide,
            TokenKind::Modulo => Self::Modulo,
            TokenKind::Equal => Self::Equal,
            TokenKind::NotEqual => Self::NotEqual,
            TokenKind::LessThan => Self::LessThan,
            TokenKind::LessThanOrEqual => Self::LessThanOrEqual,
            TokenKind::GreaterThan => Self::GreaterThan,
            TokenKind::GreaterThanOrEqual => Self::GreaterThanOrEqual,
            TokenKind::And => Self::And,
            TokenKind::Or => Self::Or,
            _ => return None,
        })
    }
}

/// A reference to a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A constant value, kept as written in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub kind: LiteralKind,
    pub value: String,
}

impl Literal {
    pub fn new(kind: LiteralKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum LiteralKind {
    Int,
    Float,
    String,
    Char,
}

/// `callee(arg arg ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub callee: String,
    pub arguments: Vec<Node>,
}

/// `target = value`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: Identifier,
    pub value: Box<Node>,
}

/// A token that no expression rule accepts, kept so the tree stays walkable
#[derive(Debug, Clone, PartialEq)]
pub struct Garbage {
    pub token: Token,
}

impl Node {
    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier(Identifier::new(name))
    }

    pub fn literal(kind: LiteralKind, value: impl Into<String>) -> Self {
        Node::Literal(Literal::new(kind, value))
    }

    pub fn binary(left: Node, operator: BinaryOperator, right: Node) -> Self {
        Node::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn call(callee: impl Into<String>, arguments: impl IntoIterator<Item = Node>) -> Self {
        Node::Call(Call {
            callee: callee.into(),
            arguments: arguments.into_iter().collect(),
        })
    }

    pub fn assignment(target: impl Into<String>, value: Node) -> Self {
        Node::Assignment(Assignment {
            target: Identifier::new(target),
            value: Box::new(value),
        })
    }

    pub fn if_stmt(condition: Node, then_branch: Block, else_branch: Option<Block>) -> Self {
        Node::If(IfStmt {
            condition: Box::new(condition),
            then_branch,
            else_branch,
        })
    }

    pub fn return_stmt(value: Node) -> Self {
        Node::Return(ReturnStmt {
            value: Box::new(value),
        })
    }

    pub fn garbage(token: Token) -> Self {
        Node::Garbage(Garbage { token })
    }

    /// If this node is a bare identifier, gets it
    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Node::Identifier(identifier) => Some(identifier),
            _ => None,
        }
    }
}
