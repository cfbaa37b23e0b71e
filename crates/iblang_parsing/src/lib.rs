#![doc = include_str!("../README.md")]

use iblang_ast::Ast;
use iblang_tokens::TokenStream;
use std::io;
use std::path::Path;

pub mod lexer;
pub mod parser;

pub use lexer::{lex, lex_path, lex_reader, Lexer, LexerOptions};
pub use parser::{parse, parse_with_tracer, SyntacticParser, SyntaxError, SyntaxResult};

/// Lexes and parses a source string.
///
/// The token stream is returned alongside the result because its diagnostic log holds
/// every recoverable error, even when parsing succeeded.
pub fn syntactic_parse(path: impl AsRef<Path>, src: &str) -> (TokenStream, SyntaxResult<Ast>) {
    let mut tokens = lex(path, src);
    let result = parse(&mut tokens);
    (tokens, result)
}

/// Reads, lexes and parses a file.
pub fn syntactic_parse_path(
    path: impl AsRef<Path>,
) -> io::Result<(TokenStream, SyntaxResult<Ast>)> {
    let mut tokens = lex_path(path)?;
    let result = parse(&mut tokens);
    Ok((tokens, result))
}
