use iblang_parsing::{lex, syntactic_parse, syntactic_parse_path};
use iblang_tokens::spanned::Spanned;
use iblang_tokens::token::TokenKind;
use std::io::Write as _;
use tempfile::NamedTempFile;
use test_log::test;

mod common;

const PROGRAM: &str = r#"
// adds two numbers
func add(int a int b) {
    sum = a + b
    return sum
}

/* the entry point */
func main() {
    x = add(1 2)
    if x >= 3 {
        print("big" x)
    } else {
        print('s')
    }
    return 0
}
"#;

#[test]
fn test_offsets_increase() {
    let tokens = lex("test.ib", PROGRAM);
    assert!(!tokens.has_errors());
    let offsets = tokens
        .tokens()
        .iter()
        .map(|token| token.span().offset())
        .collect::<Vec<_>>();
    assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]), "{offsets:?}");
    let eofs = tokens
        .tokens()
        .iter()
        .filter(|token| token.kind() == TokenKind::Eof)
        .count();
    assert_eq!(eofs, 1);
    assert_eq!(tokens.tokens().last().map(|t| t.kind()), Some(TokenKind::Eof));
}

#[test]
fn test_parsing_is_idempotent() {
    let (_, first) = common::parse_ok(PROGRAM);
    let (_, second) = common::parse_ok(PROGRAM);
    assert_eq!(first, second);
    assert_eq!(first.functions.len(), 2);
    assert_eq!(first.functions[1].body.statements.len(), 3);
}

#[test]
fn test_parameter_count_matches_pairs() {
    for count in 0..5 {
        let params = (0..count)
            .map(|i| format!("int p{i}"))
            .collect::<Vec<_>>()
            .join(" ");
        let (tokens, ast) = common::parse_ok(&format!("func f({params}) {{ }}"));
        assert!(!tokens.has_errors());
        assert_eq!(ast.functions[0].name, "f");
        assert_eq!(ast.functions[0].parameters.len(), count);
    }
}

#[test]
fn test_every_mismatch_is_reported_once() {
    let (tokens, result) = syntactic_parse("test.ib", "func f() x }\nfunc 2() { }");
    let ast = result.expect("mismatches are recoverable");
    assert_eq!(ast.functions.len(), 2);
    let mut out = Vec::new();
    tokens.list_errors(&mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out,
        "error: Expected OpenScope but got Identifier 'x'\n  \
         -> test.ib:1:10\n  \
         in rule block (program > function_decl > block)\n\
         error: Expected Identifier but got IntegerLiteral '2'\n  \
         -> test.ib:2:6\n  \
         in rule function_decl (program > function_decl)\n"
    );
}

#[test]
fn test_parse_file() -> eyre::Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{PROGRAM}")?;
    let (tokens, result) = syntactic_parse_path(file.path())?;
    assert_eq!(tokens.path(), file.path());
    assert_eq!(result?.functions[0].name, "add");
    Ok(())
}
