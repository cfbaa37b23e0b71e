use iblangc::error::IbLangCErrorKind;
use iblangc::{BuildIbLangCError, IbLangC};
use tracing::info;
use test_log::test;

mod common;

#[test]
fn test_compile_single_file() -> eyre::Result<()> {
    let iblangc = IbLangC::builder().build()?;
    let file = common::ib_file("main.ib");
    info!("compiling {file:?}");

    let compilation = iblangc.compile(&file)?;

    assert!(compilation.succeeded(), "{}", compilation.report());
    assert_eq!(compilation.path(), file.as_path());
    let names = compilation
        .ast()
        .map(|ast| ast.functions.iter().map(|f| f.name.as_str()).collect::<Vec<_>>());
    assert_eq!(names, Some(vec!["add", "main"]));
    Ok(())
}

#[test]
fn test_expectations_in_file() -> eyre::Result<()> {
    let iblangc = IbLangC::builder().trace_parser(true).build()?;
    let outcome = iblangc.test(common::ib_file("main.ib"))?;
    assert!(outcome.passed(), "{outcome}");
    Ok(())
}

#[test]
fn test_wrong_expectations_fail() -> eyre::Result<()> {
    let file = common::write_source("// FunctionDecl g\n//   Block\nfunc f() { }\n");
    let outcome = IbLangC::builder().build()?.test(file.path())?;
    assert!(!outcome.passed());
    assert_eq!(outcome.mismatches.len(), 1);
    assert_eq!(outcome.mismatches[0].line, 1);
    assert_eq!(
        outcome.mismatches[0].actual.as_deref(),
        Some("FunctionDecl f")
    );
    Ok(())
}

#[test]
fn test_recovered_report() -> eyre::Result<()> {
    let iblangc = IbLangC::builder().trace_lexer(true).build()?;
    let compilation = iblangc.compile_source("f.ib", "func f( { }");
    assert!(!compilation.succeeded());
    assert!(compilation.ast().is_some());
    assert_eq!(compilation.diagnostics().len(), 1);
    assert_eq!(
        compilation.report(),
        "FunctionDecl f\n  \
         Block\n\
         error: Expected CloseParenthesis but got OpenScope '{'\n  \
         -> f.ib:1:9\n  \
         in rule function_decl (program > function_decl)\n"
    );
    let mut listed = Vec::new();
    compilation.list_errors(&mut listed)?;
    assert!(String::from_utf8(listed)?.starts_with("error: Expected CloseParenthesis"));
    Ok(())
}

#[test]
fn test_fatal_report() -> eyre::Result<()> {
    let iblangc = IbLangC::builder().build()?;
    let compilation = iblangc.compile_source("fatal.ib", "func f() { 123 }");
    assert!(!compilation.succeeded());
    assert!(compilation.ast().is_none());
    assert_eq!(compilation.error().and_then(|e| e.rule()), Some("statement"));
    assert_eq!(
        compilation.report(),
        "syntax error: no statement starts with IntegerLiteral '123'\n  \
         -> fatal.ib:1:12\n\
         non terminal stack:\n  \
         0: program\n  \
         1: function_decl\n  \
         2: block\n  \
         3: statement\n"
    );
    let error = compilation.into_ast().unwrap_err();
    assert!(matches!(error.kind(), IbLangCErrorKind::Syntax(_)));
    Ok(())
}

#[test]
fn test_indent_is_configurable() -> eyre::Result<()> {
    let iblangc = IbLangC::builder().indent(4).build()?;
    let compilation = iblangc.compile_source("f.ib", "func f() { return 1 }");
    assert_eq!(
        compilation.report(),
        "FunctionDecl f\n    Block\n        Return\n            Literal Int 1\n"
    );
    assert!(matches!(
        IbLangC::builder().indent(0).build(),
        Err(BuildIbLangCError::ZeroIndent)
    ));
    Ok(())
}

#[test]
fn test_missing_files() -> eyre::Result<()> {
    let iblangc = IbLangC::builder().build()?;
    let missing = common::ib_file("missing.ib");

    let error = iblangc.compile(&missing).unwrap_err();
    assert!(matches!(error.kind(), IbLangCErrorKind::Io(_)));
    assert_eq!(error.path(), Some(missing.as_path()));

    let error = iblangc
        .compile_all([common::ib_file("main.ib"), missing.clone(), missing])
        .unwrap_err();
    let IbLangCErrorKind::Multi(errors) = error.kind() else {
        panic!("expected every failure, got {error}");
    };
    assert_eq!(errors.len(), 2);

    let compilations = iblangc.compile_all([common::ib_file("main.ib")])?;
    assert_eq!(compilations.len(), 1);
    Ok(())
}
