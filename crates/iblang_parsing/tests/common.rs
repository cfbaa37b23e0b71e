use iblang_ast::Ast;
use iblang_parsing::syntactic_parse;
use iblang_tokens::TokenStream;

/// Parses a source that must parse without any fatal error
pub fn parse_ok(src: &str) -> (TokenStream, Ast) {
    let (tokens, result) = syntactic_parse("test.ib", src);
    match result {
        Ok(ast) => (tokens, ast),
        Err(e) => panic!("could not parse {src:?}: {e}"),
    }
}
