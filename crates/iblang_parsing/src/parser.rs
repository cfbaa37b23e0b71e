//! Recursive descent over a [TokenStream]

use iblang_ast::{Ast, BinaryOperator, Block, FunctionDecl, LiteralKind, Node, Parameter};
use iblang_tokens::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Site};
use iblang_tokens::spanned::Spanned;
use iblang_tokens::token::{Token, TokenKind};
use iblang_tokens::TokenStream;
use tracing::debug;

mod error;
mod tracer;

pub use error::*;
pub use tracer::*;

/// Parses a token stream, recording recoverable errors in its diagnostic log
pub fn parse(tokens: &mut TokenStream) -> SyntaxResult<Ast> {
    SyntacticParser::new(tokens).parse_program()
}

/// Parses a token stream, reporting every rule entry and consumed token to `tracer`
pub fn parse_with_tracer<T: Tracer>(tokens: &mut TokenStream, tracer: T) -> SyntaxResult<Ast> {
    SyntacticParser::with_tracer(tokens, tracer).parse_program()
}

/// Creates an [Ast] from a token stream.
///
/// Looks at one token at a time and never backtracks. When a specific token kind is required
/// and another is found, a [TokenMismatch](DiagnosticKind::TokenMismatch) is recorded and parsing
/// continues. When no statement rule accepts the lookahead, parsing stops with a
/// [SyntaxError].
///
/// # Examples
/// ```
/// # use iblang_parsing::lexer::lex;
/// # use iblang_parsing::parser::SyntacticParser;
/// let mut tokens = lex("test_path", "func f() { }");
/// let mut parser = SyntacticParser::new(&mut tokens);
/// let ast = parser.parse_program().unwrap();
/// assert_eq!(ast.functions.len(), 1);
/// ```
#[derive(Debug)]
pub struct SyntacticParser<'t, T: Tracer = NoTrace> {
    tokens: &'t [Token],
    diagnostics: &'t mut Diagnostics,
    index: usize,
    non_terminals: Vec<&'static str>,
    tracer: T,
}

impl<'t> SyntacticParser<'t> {
    /// Creates a new parser over a token stream
    pub fn new(tokens: &'t mut TokenStream) -> Self {
        Self::with_tracer(tokens, NoTrace)
    }
}

impl<'t, T: Tracer> SyntacticParser<'t, T> {
    /// Creates a new parser that reports to `tracer`
    pub fn with_tracer(tokens: &'t mut TokenStream, tracer: T) -> Self {
        let (tokens, diagnostics) = tokens.split_mut();
        Self {
            tokens,
            diagnostics,
            index: 0,
            non_terminals: vec![],
            tracer,
        }
    }

    /// `program := { functionDecl }`
    ///
    /// Stops at the first token that is not `func`, leaving the rest unread.
    pub fn parse_program(&mut self) -> SyntaxResult<Ast> {
        self.rule("program", |parser| {
            let mut functions = vec![];
            while parser.peek().kind() == TokenKind::KeywordFunc {
                functions.push(parser.parse_function_decl()?);
            }
            Ok(Ast::new(functions))
        })
    }

    /// `functionDecl := 'func' IDENT '(' { param } ')' block`
    fn parse_function_decl(&mut self) -> SyntaxResult<FunctionDecl> {
        self.rule("function_decl", |parser| {
            parser.eat(TokenKind::KeywordFunc);
            let name = parser.eat_identifier(AFTER_NAME);
            parser.eat_before(TokenKind::OpenParenthesis, AFTER_PARAMETER);
            let mut parameters = vec![];
            while parser.peek().kind() == TokenKind::Identifier {
                parameters.push(parser.parse_parameter()?);
            }
            parser.eat_before(TokenKind::CloseParenthesis, AFTER_PARAMETERS);
            let body = parser.parse_block()?;
            Ok(FunctionDecl::new(name, parameters, body))
        })
    }

    /// `param := IDENT IDENT`
    fn parse_parameter(&mut self) -> SyntaxResult<Parameter> {
        self.rule("parameter", |parser| {
            let type_name = parser.eat_identifier(&[TokenKind::Identifier]);
            let name = parser.eat_identifier(AFTER_PARAMETER);
            Ok(Parameter::new(type_name, name))
        })
    }

    /// `block := '{' { statement } '}'`
    fn parse_block(&mut self) -> SyntaxResult<Block> {
        self.rule("block", |parser| {
            parser.eat_before(TokenKind::OpenScope, AFTER_OPEN_SCOPE);
            let mut statements = vec![];
            while parser.peek().kind() != TokenKind::CloseScope {
                statements.push(parser.parse_statement()?);
            }
            parser.eat(TokenKind::CloseScope);
            Ok(Block::new(statements))
        })
    }

    /// `statement := IDENT identTail | ifStmt | returnStmt`
    fn parse_statement(&mut self) -> SyntaxResult<Node> {
        self.rule("statement", |parser| {
            let lookahead = parser.peek();
            match lookahead.kind() {
                TokenKind::Identifier => {
                    let identifier = parser.eat_identifier(&[]);
                    parser.parse_ident_tail(identifier)
                }
                TokenKind::KeywordIf => parser.parse_if(),
                TokenKind::KeywordReturn => parser.parse_return(),
                _ => Err(parser.unhandled(lookahead)),
            }
        })
    }

    /// `identTail := call | assign`
    fn parse_ident_tail(&mut self, identifier: String) -> SyntaxResult<Node> {
        self.rule("ident_tail", |parser| {
            let lookahead = parser.peek();
            match lookahead.kind() {
                TokenKind::OpenParenthesis => parser.parse_call(identifier),
                TokenKind::Assignment => parser.parse_assignment(identifier),
                _ => Err(parser.unhandled(lookahead)),
            }
        })
    }

    /// `call := '(' { expression } ')'`
    fn parse_call(&mut self, callee: String) -> SyntaxResult<Node> {
        self.rule("call", |parser| {
            parser.eat(TokenKind::OpenParenthesis);
            let mut arguments = vec![];
            while !matches!(
                parser.peek().kind(),
                TokenKind::CloseParenthesis | TokenKind::Eof
            ) {
                arguments.push(parser.parse_expression()?);
            }
            parser.eat(TokenKind::CloseParenthesis);
            Ok(Node::call(callee, arguments))
        })
    }

    /// `assign := '=' statement`
    ///
    /// The right hand side is a statement when it starts with `if` or `return`. Anything else
    /// is an expression, and a bare identifier followed by `=` assigns again.
    fn parse_assignment(&mut self, target: String) -> SyntaxResult<Node> {
        self.rule("assignment", |parser| {
            parser.eat(TokenKind::Assignment);
            let value = match parser.peek().kind() {
                TokenKind::KeywordIf | TokenKind::KeywordReturn => parser.parse_statement()?,
                _ => {
                    let value = parser.parse_expression()?;
                    let chained = value
                        .as_identifier()
                        .filter(|_| parser.peek().kind() == TokenKind::Assignment)
                        .map(|identifier| identifier.name.clone());
                    match chained {
                        Some(target) => parser.parse_assignment(target)?,
                        None => value,
                    }
                }
            };
            Ok(Node::assignment(target, value))
        })
    }

    /// `ifStmt := 'if' expression block [ 'else' block ]`
    fn parse_if(&mut self) -> SyntaxResult<Node> {
        self.rule("if_stmt", |parser| {
            parser.eat(TokenKind::KeywordIf);
            let condition = parser.parse_expression()?;
            let then_branch = parser.parse_block()?;
            let else_branch = if parser.peek().kind() == TokenKind::KeywordElse {
                parser.eat(TokenKind::KeywordElse);
                Some(parser.parse_block()?)
            } else {
                None
            };
            Ok(Node::if_stmt(condition, then_branch, else_branch))
        })
    }

    /// `returnStmt := 'return' expression`
    fn parse_return(&mut self) -> SyntaxResult<Node> {
        self.rule("return_stmt", |parser| {
            parser.eat(TokenKind::KeywordReturn);
            let value = parser.parse_expression()?;
            Ok(Node::return_stmt(value))
        })
    }

    /// `expression := unary [ binaryOp unary ]`
    ///
    /// A single operator at most, there is no precedence and no chaining.
    fn parse_expression(&mut self) -> SyntaxResult<Node> {
        self.rule("expression", |parser| {
            let left = parser.parse_unary()?;
            match BinaryOperator::from_token_kind(parser.peek().kind()) {
                Some(operator) => {
                    parser.advance();
                    let right = parser.parse_unary()?;
                    Ok(Node::binary(left, operator, right))
                }
                None => Ok(left),
            }
        })
    }

    /// `unary := IDENT [ call ] | INT | FLOAT | STRING | <anything else as garbage>`
    fn parse_unary(&mut self) -> SyntaxResult<Node> {
        self.rule("unary", |parser| {
            let token = parser.advance();
            let node = match token.kind() {
                TokenKind::Identifier => {
                    if parser.peek().kind() == TokenKind::OpenParenthesis {
                        return parser.parse_call(token.text().to_string());
                    }
                    Node::identifier(token.text())
                }
                TokenKind::IntegerLiteral => Node::literal(LiteralKind::Int, token.text()),
                TokenKind::FloatLiteral => Node::literal(LiteralKind::Float, token.text()),
                TokenKind::StringLiteral => Node::literal(LiteralKind::String, token.text()),
                _ => Node::garbage(token.clone()),
            };
            Ok(node)
        })
    }

    /// Wrapper function for parsing a rule.
    ///
    /// The rule stays on the non-terminal stack if it fails, so the error can report where
    /// it happened.
    fn rule<O, F>(&mut self, non_terminal: &'static str, parser: F) -> SyntaxResult<O>
    where
        F: FnOnce(&mut Self) -> SyntaxResult<O>,
    {
        self.non_terminals.push(non_terminal);
        let lookahead = self.peek();
        self.tracer
            .enter(non_terminal, self.non_terminals.len(), lookahead);
        let result = parser(self);
        if result.is_ok() {
            self.non_terminals.pop();
        }
        result
    }

    /// The current lookahead. Always valid, the stream ends with an [Eof](TokenKind::Eof).
    fn peek(&self) -> &'t Token {
        let tokens: &'t [Token] = self.tokens;
        &tokens[self.index]
    }

    /// Consumes the lookahead. Consuming [Eof](TokenKind::Eof) leaves the parser on it.
    fn advance(&mut self) -> &'t Token {
        let token = self.peek();
        if token.kind() != TokenKind::Eof {
            self.index += 1;
        }
        self.tracer.consume(token);
        token
    }

    /// The token `n` places after the lookahead, or [Eof](TokenKind::Eof) past the end
    fn peek_nth(&self, n: usize) -> &'t Token {
        let tokens: &'t [Token] = self.tokens;
        let last = tokens.len() - 1;
        &tokens[(self.index + n).min(last)]
    }

    /// Consumes the lookahead, recording a mismatch if it is not of the `expected` kind
    fn eat(&mut self, expected: TokenKind) -> &'t Token {
        self.eat_before(expected, &[])
    }

    /// Consumes the lookahead, recording a mismatch if it is not of the `expected` kind.
    ///
    /// `follow` holds the kinds that can come right after `expected`. A mismatched token of one
    /// of those kinds means `expected` is missing, so it is left for the enclosing rule. If the
    /// token after it could also follow `expected`, the mismatched token stands in for
    /// `expected` and is consumed instead.
    fn eat_before(&mut self, expected: TokenKind, follow: &[TokenKind]) -> &'t Token {
        let token = self.peek();
        if token.kind() == expected {
            return self.advance();
        }
        self.mismatch(expected, token);
        let missing =
            follow.contains(&token.kind()) && !follow.contains(&self.peek_nth(1).kind());
        if !missing {
            self.advance();
        }
        token
    }

    /// Eats an identifier, returning the text of whatever token was there
    fn eat_identifier(&mut self, follow: &[TokenKind]) -> String {
        self.eat_before(TokenKind::Identifier, follow).text().to_string()
    }

    fn mismatch(&mut self, expected: TokenKind, found: &Token) {
        let diagnostic = Diagnostic::new(
            DiagnosticKind::TokenMismatch {
                expected,
                found: found.clone(),
            },
            found.span(),
            Site::from_stack(&self.non_terminals),
        );
        debug!("recorded {diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    fn unhandled(&self, found: &Token) -> SyntaxError {
        let rule = self.non_terminals.last().copied().unwrap_or("program");
        let error = SyntaxError::new(
            ErrorKind::UnhandledConstruct {
                rule,
                found: found.clone(),
            },
            found.span(),
            self.non_terminals.clone(),
        );
        debug!("aborting parse: {}", error.kind);
        error
    }
}

const AFTER_NAME: &[TokenKind] = &[TokenKind::OpenParenthesis];
/// After `(` or a parameter: another parameter or the end of the list
const AFTER_PARAMETER: &[TokenKind] = &[TokenKind::Identifier, TokenKind::CloseParenthesis];
const AFTER_PARAMETERS: &[TokenKind] = &[TokenKind::OpenScope];
const AFTER_OPEN_SCOPE: &[TokenKind] = &[
    TokenKind::Identifier,
    TokenKind::KeywordIf,
    TokenKind::KeywordReturn,
    TokenKind::CloseScope,
];
