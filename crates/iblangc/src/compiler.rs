//! Responsible with turning iblang files into syntax trees

use crate::expectations::{Expectations, TestOutcome};
use crate::printer::{print_ast_with_indent, DEFAULT_INDENT};
use iblang_ast::Ast;
use iblang_parsing::lexer::lex_with_options;
use iblang_parsing::parser::LogTracer;
use iblang_parsing::{parse, parse_with_tracer, LexerOptions, SyntaxError};
use iblang_tokens::diagnostics::Diagnostics;
use iblang_tokens::TokenStream;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info_span, warn};

pub mod error;

use error::{IbLangCError, IbLangCResult};

/// Responsible with compiling iblang files.
///
/// Must be configured using an [IbLangCBuilder].
#[derive(Debug)]
pub struct IbLangC {
    lexer_options: LexerOptions,
    trace_parser: bool,
    indent: usize,
}

impl IbLangC {
    /// Creates the default IbLangCBuilder
    #[inline]
    pub fn builder() -> IbLangCBuilder {
        IbLangCBuilder::new()
    }

    /// Compiles source text that came from `path`
    pub fn compile_source(&self, path: impl AsRef<Path>, src: &str) -> Compilation {
        let path = path.as_ref();
        let _span = info_span!("compile", path = %path.display()).entered();
        let mut tokens = lex_with_options(path, src, self.lexer_options);
        let outcome = if self.trace_parser {
            parse_with_tracer(&mut tokens, LogTracer)
        } else {
            parse(&mut tokens)
        };
        match &outcome {
            Ok(ast) => debug!(
                functions = ast.functions.len(),
                diagnostics = tokens.diagnostics().len(),
                "parsed"
            ),
            Err(error) => warn!("parsing aborted: {}", error.kind),
        }
        Compilation {
            tokens,
            outcome,
            indent: self.indent,
        }
    }

    /// Compile a file at a given path
    pub fn compile(&self, path: impl AsRef<Path>) -> IbLangCResult<Compilation> {
        let path = path.as_ref();
        let src = read_source(path)?;
        Ok(self.compile_source(path, &src))
    }

    /// Compiles every file, failing with every file that could not be read
    pub fn compile_all<P: AsRef<Path>>(
        &self,
        paths: impl IntoIterator<Item = P>,
    ) -> IbLangCResult<Vec<Compilation>> {
        let (compilations, errors): (Vec<_>, Vec<_>) = paths
            .into_iter()
            .map(|path| self.compile(path))
            .partition(Result::is_ok);
        if !errors.is_empty() {
            return Err(IbLangCError::from(
                errors
                    .into_iter()
                    .filter_map(Result::err)
                    .collect::<Vec<_>>(),
            ));
        }
        Ok(compilations.into_iter().filter_map(Result::ok).collect())
    }

    /// Compiles a file and checks its report against the expectations written in it
    pub fn test(&self, path: impl AsRef<Path>) -> IbLangCResult<TestOutcome> {
        let path = path.as_ref();
        let src = read_source(path)?;
        let expectations = Expectations::from_source(&src);
        let compilation = self.compile_source(path, &src);
        Ok(expectations.check(&compilation.report()))
    }
}

fn read_source(path: &Path) -> IbLangCResult<String> {
    std::fs::read_to_string(path).map_err(|e| IbLangCError::new(e, path))
}

/// The result of compiling one source
#[derive(Debug)]
pub struct Compilation {
    tokens: TokenStream,
    outcome: Result<Ast, SyntaxError>,
    indent: usize,
}

impl Compilation {
    /// The tree, unless parsing was aborted
    pub fn ast(&self) -> Option<&Ast> {
        self.outcome.as_ref().ok()
    }

    /// The error that aborted parsing, if any
    pub fn error(&self) -> Option<&SyntaxError> {
        self.outcome.as_ref().err()
    }

    pub fn tokens(&self) -> &TokenStream {
        &self.tokens
    }

    pub fn path(&self) -> &Path {
        self.tokens.path()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        self.tokens.diagnostics()
    }

    /// Whether a tree was produced without any diagnostic being recorded
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok() && !self.tokens.has_errors()
    }

    /// Writes every recorded diagnostic
    pub fn list_errors<W: io::Write>(&self, writer: W) -> io::Result<()> {
        self.tokens.list_errors(writer)
    }

    /// The printed tree (or the error that aborted parsing), followed by every diagnostic
    pub fn report(&self) -> String {
        self.to_string()
    }

    /// Takes the tree, failing if parsing was aborted
    pub fn into_ast(self) -> IbLangCResult<Ast> {
        let path = self.tokens.path().to_path_buf();
        self.outcome.map_err(|e| IbLangCError::new(e, path))
    }

    fn fmt_syntax_error(&self, error: &SyntaxError, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "syntax error: {}", error.kind)?;
        if let Some(span) = error.span {
            let (line, col) = self.tokens.line_col(span);
            writeln!(f, "  -> {}:{line}:{col}", self.tokens.path().display())?;
        }
        writeln!(f, "non terminal stack:")?;
        for (idx, non_terminal) in error.non_terminal_stack.iter().enumerate() {
            writeln!(f, "  {idx}: {non_terminal}")?;
        }
        Ok(())
    }
}

impl Display for Compilation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            Ok(ast) => f.write_str(&print_ast_with_indent(ast, self.indent))?,
            Err(error) => self.fmt_syntax_error(error, f)?,
        }
        for diagnostic in self.tokens.diagnostics() {
            f.write_str(&self.tokens.format_diagnostic(diagnostic))?;
        }
        Ok(())
    }
}

/// Builder for creating a [IbLangC] instance.
#[derive(Debug)]
pub struct IbLangCBuilder {
    /// Emit every lexed token as a debug event
    pub trace_lexer: bool,
    /// Emit every parser rule and consumed token as a trace event
    pub trace_parser: bool,
    /// Spaces per nesting level in printed trees
    pub indent: usize,
}

impl IbLangCBuilder {
    /// Creates an IbLangCBuilder with default settings
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trace_lexer(mut self, trace: bool) -> Self {
        self.trace_lexer = trace;
        self
    }

    pub fn trace_parser(mut self, trace: bool) -> Self {
        self.trace_parser = trace;
        self
    }

    /// Sets how many spaces each nesting level of a printed tree is indented by
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Builds an [IbLangC] instance from this builder
    pub fn build(self) -> Result<IbLangC, BuildIbLangCError> {
        if self.indent == 0 {
            return Err(BuildIbLangCError::ZeroIndent);
        }
        Ok(IbLangC {
            lexer_options: LexerOptions {
                trace_tokens: self.trace_lexer,
            },
            trace_parser: self.trace_parser,
            indent: self.indent,
        })
    }
}

impl Default for IbLangCBuilder {
    fn default() -> Self {
        Self {
            trace_lexer: false,
            trace_parser: false,
            indent: DEFAULT_INDENT,
        }
    }
}

/// An error occurred while building an [IbLangC] instance
#[derive(Debug, Error)]
pub enum BuildIbLangCError {
    #[error("printed trees can't be told apart without indentation")]
    ZeroIndent,
}
