//! Prints a syntax tree one node per line, children indented under their parent

use iblang_ast::visitor::{
    visit_binary_expr, visit_block, visit_call, visit_function_decl, visit_node,
    visit_return_stmt, Visitor,
};
use iblang_ast::{
    Assignment, Ast, BinaryExpr, Block, Call, FunctionDecl, Garbage, Identifier, IfStmt,
    Literal, Parameter, ReturnStmt,
};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Spaces per nesting level unless configured otherwise
pub const DEFAULT_INDENT: usize = 2;

/// Prints every node it visits to a writer
#[derive(Debug)]
pub struct AstPrinter<W> {
    writer: W,
    indent: usize,
    depth: usize,
}

impl<W: fmt::Write> AstPrinter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_indent(writer, DEFAULT_INDENT)
    }

    pub fn with_indent(writer: W, indent: usize) -> Self {
        Self {
            writer,
            indent,
            depth: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(&mut self, args: fmt::Arguments) -> fmt::Result {
        writeln!(
            self.writer,
            "{:width$}{args}",
            "",
            width = self.depth * self.indent
        )
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self) -> fmt::Result) -> fmt::Result {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

impl<W: fmt::Write> Visitor for AstPrinter<W> {
    type Err = fmt::Error;

    fn visit_function_decl(&mut self, function_decl: &FunctionDecl) -> fmt::Result {
        self.line(format_args!("FunctionDecl {}", function_decl.name))?;
        self.nested(|printer| visit_function_decl(printer, function_decl))
    }

    fn visit_parameter(&mut self, parameter: &Parameter) -> fmt::Result {
        self.line(format_args!(
            "Parameter {} {}",
            parameter.type_name, parameter.name
        ))
    }

    fn visit_block(&mut self, block: &Block) -> fmt::Result {
        self.line(format_args!("Block"))?;
        self.nested(|printer| visit_block(printer, block))
    }

    fn visit_if_stmt(&mut self, if_stmt: &IfStmt) -> fmt::Result {
        self.line(format_args!("If"))?;
        self.nested(|printer| {
            printer.visit_node(&if_stmt.condition)?;
            printer.visit_block(&if_stmt.then_branch)?;
            if let Some(else_branch) = &if_stmt.else_branch {
                printer.line(format_args!("Else"))?;
                printer.nested(|printer| printer.visit_block(else_branch))?;
            }
            Ok(())
        })
    }

    fn visit_return_stmt(&mut self, return_stmt: &ReturnStmt) -> fmt::Result {
        self.line(format_args!("Return"))?;
        self.nested(|printer| visit_return_stmt(printer, return_stmt))
    }

    fn visit_binary_expr(&mut self, binary_expr: &BinaryExpr) -> fmt::Result {
        self.line(format_args!("Binary {}", binary_expr.operator))?;
        self.nested(|printer| visit_binary_expr(printer, binary_expr))
    }

    fn visit_identifier(&mut self, identifier: &Identifier) -> fmt::Result {
        self.line(format_args!("Identifier {}", identifier.name))
    }

    fn visit_literal(&mut self, literal: &Literal) -> fmt::Result {
        self.line(format_args!("Literal {} {}", literal.kind, literal.value))
    }

    fn visit_call(&mut self, call: &Call) -> fmt::Result {
        self.line(format_args!("Call {}", call.callee))?;
        self.nested(|printer| visit_call(printer, call))
    }

    fn visit_assignment(&mut self, assignment: &Assignment) -> fmt::Result {
        // the target is part of the header line
        self.line(format_args!("Assignment {}", assignment.target.name))?;
        self.nested(|printer| visit_node(printer, &assignment.value))
    }

    fn visit_garbage(&mut self, garbage: &Garbage) -> fmt::Result {
        self.line(format_args!("Garbage {}", garbage.token))
    }
}

struct PrintedAst<'a> {
    ast: &'a Ast,
    indent: usize,
}

impl Display for PrintedAst<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.ast.accept(&mut AstPrinter::with_indent(f, self.indent))
    }
}

/// Prints a tree with the default indentation
pub fn print_ast(ast: &Ast) -> String {
    print_ast_with_indent(ast, DEFAULT_INDENT)
}

/// Prints a tree, indenting each nesting level by `indent` spaces
pub fn print_ast_with_indent(ast: &Ast, indent: usize) -> String {
    PrintedAst { ast, indent }.to_string()
}
