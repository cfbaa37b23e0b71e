#![doc = include_str!("../README.md")]

pub mod block;
pub mod function;
pub mod node;
pub mod program;
pub mod visitor;

pub use block::Block;
pub use function::{FunctionDecl, Parameter};
pub use node::*;
pub use program::Ast;
