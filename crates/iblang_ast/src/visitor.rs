//! Walking the tree.
//!
//! Every `visit_*` method of [Visitor] defaults to the free function of the same name, which
//! walks into the node's children. Override a method to intercept a node, and call the free
//! function from the override to keep descending.

use crate::block::Block;
use crate::function::{FunctionDecl, Parameter};
use crate::node::{
    Assignment, BinaryExpr, Call, Garbage, Identifier, IfStmt, Literal, Node, ReturnStmt,
};
use crate::program::Ast;
use iblang_visitor_gen::visit;

visit! {
    pub trait Visitor {
        pub visit(visitor, ast: &Ast) -> Result<()> {
            for function in &ast.functions {
                visitor.visit_function_decl(function)?;
            }
            Ok(())
        }

        pub visit(visitor, function_decl: &FunctionDecl) -> Result<()> {
            for parameter in &function_decl.parameters {
                visitor.visit_parameter(parameter)?;
            }
            visitor.visit_block(&function_decl.body)
        }

        pub visit(visitor, parameter: &Parameter) -> Result<()> {
            Ok(())
        }

        pub visit(visitor, block: &Block) -> Result<()> {
            for statement in &block.statements {
                visitor.visit_node(statement)?;
            }
            Ok(())
        }

        pub visit(visitor, node: &Node) -> Result<()> {
            match node {
                Node::If(if_stmt) => visitor.visit_if_stmt(if_stmt),
                Node::Return(return_stmt) => visitor.visit_return_stmt(return_stmt),
                Node::Binary(binary_expr) => visitor.visit_binary_expr(binary_expr),
                Node::Identifier(identifier) => visitor.visit_identifier(identifier),
                Node::Literal(literal) => visitor.visit_literal(literal),
                Node::Call(call) => visitor.visit_call(call),
                Node::Assignment(assignment) => visitor.visit_assignment(assignment),
                Node::Garbage(garbage) => visitor.visit_garbage(garbage),
            }
        }

        pub visit(visitor, if_stmt: &IfStmt) -> Result<()> {
            visitor.visit_node(&if_stmt.condition)?;
            visitor.visit_block(&if_stmt.then_branch)?;
            if let Some(else_branch) = &if_stmt.else_branch {
                visitor.visit_block(else_branch)?;
            }
            Ok(())
        }

        pub visit(visitor, return_stmt: &ReturnStmt) -> Result<()> {
            visitor.visit_node(&return_stmt.value)
        }

        pub visit(visitor, binary_expr: &BinaryExpr) -> Result<()> {
            visitor.visit_node(&binary_expr.left)?;
            visitor.visit_node(&binary_expr.right)
        }

        pub visit(visitor, identifier: &Identifier) -> Result<()> {
            Ok(())
        }

        pub visit(visitor, literal: &Literal) -> Result<()> {
            Ok(())
        }

        pub visit(visitor, call: &Call) -> Result<()> {
            for argument in &call.arguments {
                visitor.visit_node(argument)?;
            }
            Ok(())
        }

        pub visit(visitor, assignment: &Assignment) -> Result<()> {
            visitor.visit_identifier(&assignment.target)?;
            visitor.visit_node(&assignment.value)
        }

        pub visit(visitor, garbage: &Garbage) -> Result<()> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::LiteralKind;
    use crate::BinaryOperator;
    use std::convert::Infallible;
    use test_log::test;

    #[derive(Default)]
    struct Names(Vec<String>);

    impl Visitor for Names {
        type Err = Infallible;

        fn visit_identifier(&mut self, identifier: &Identifier) -> Result<(), Self::Err> {
            self.0.push(identifier.name.clone());
            Ok(())
        }

        fn visit_parameter(&mut self, parameter: &Parameter) -> Result<(), Self::Err> {
            self.0.push(format!("param {}", parameter.name));
            Ok(())
        }
    }

    fn sample() -> Ast {
        Ast::new([FunctionDecl::new(
            "f",
            [Parameter::new("int", "a")],
            Block::new([
                Node::assignment("y", Node::identifier("a")),
                Node::if_stmt(
                    Node::binary(
                        Node::identifier("y"),
                        BinaryOperator::LessThan,
                        Node::literal(LiteralKind::Int, "3"),
                    ),
                    Block::new([Node::call("print", [Node::identifier("y")])]),
                    Some(Block::new([Node::return_stmt(Node::identifier("a"))])),
                ),
            ]),
        )])
    }

    #[test]
    fn test_default_walk_reaches_every_identifier() {
        let mut names = Names::default();
        sample().accept(&mut names).unwrap();
        assert_eq!(names.0, ["param a", "y", "a", "y", "y", "a"]);
    }

    struct StopAtCall;

    impl Visitor for StopAtCall {
        type Err = String;

        fn visit_call(&mut self, call: &Call) -> Result<(), Self::Err> {
            Err(call.callee.clone())
        }
    }

    #[test]
    fn test_errors_stop_the_walk() {
        assert_eq!(sample().accept(&mut StopAtCall), Err("print".to_string()));
    }
}
