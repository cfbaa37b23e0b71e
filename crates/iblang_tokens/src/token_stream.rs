//! The output of lexing: tokens, their line table and the diagnostic log

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::spanned::{LineTable, Span, Spanned};
use crate::token::{Token, TokenKind};
use std::io;
use std::path::{Path, PathBuf};

/// A sentinel-terminated sequence of tokens from one source.
///
/// The tokens are read only once lexing is finished, the diagnostic log keeps growing while
/// the stream is parsed.
#[derive(Debug, Clone)]
pub struct TokenStream {
    path: PathBuf,
    tokens: Vec<Token>,
    lines: LineTable,
    diagnostics: Diagnostics,
}

impl TokenStream {
    /// Creates a token stream.
    ///
    /// An [Eof](TokenKind::Eof) sentinel is appended when `tokens` does not already end in one.
    pub fn new(
        path: impl AsRef<Path>,
        tokens: impl IntoIterator<Item = Token>,
        lines: LineTable,
        diagnostics: Diagnostics,
    ) -> Self {
        let mut tokens = tokens.into_iter().collect::<Vec<_>>();
        if tokens.last().map(Token::kind) != Some(TokenKind::Eof) {
            let offset = tokens.last().map_or(0, |token| token.span().end().offset());
            tokens.push(Token::eof(offset));
        }
        Self {
            path: path.as_ref().to_path_buf(),
            tokens,
            lines,
            diagnostics,
        }
    }

    /// The path (or name) of the source these tokens came from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The tokens, always ending in the [Eof](TokenKind::Eof) sentinel
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn lines(&self) -> &LineTable {
        &self.lines
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    /// Splits this stream into a read-only view of the tokens and the mutable diagnostic log
    pub fn split_mut(&mut self) -> (&[Token], &mut Diagnostics) {
        (&self.tokens, &mut self.diagnostics)
    }

    /// Gets the 1-based line and column a span starts at
    pub fn line_col(&self, span: Span) -> (usize, usize) {
        self.lines.line_col(span.offset())
    }

    /// Whether any diagnostic has been recorded
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Writes every recorded diagnostic, in the order it was recorded
    pub fn list_errors<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        for diagnostic in &self.diagnostics {
            writer.write_all(self.format_diagnostic(diagnostic).as_bytes())?;
        }
        Ok(())
    }

    /// Renders a diagnostic as the block [list_errors](Self::list_errors) writes for it
    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let mut block = format!("error: {}\n", diagnostic.message());
        if let Some(span) = diagnostic.span {
            let (line, col) = self.line_col(span);
            block.push_str(&format!("  -> {}:{line}:{col}\n", self.path.display()));
        }
        block.push_str(&format!("  in rule {}\n", diagnostic.site));
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticKind, Site};
    use test_log::test;

    #[test]
    fn test_sentinel_is_appended() {
        let stream = TokenStream::new("empty", [], LineTable::new(), Diagnostics::new());
        assert_eq!(stream.tokens().len(), 1);
        assert_eq!(stream.tokens()[0].kind(), TokenKind::Eof);

        let stream = TokenStream::new(
            "one",
            [Token::new(TokenKind::Identifier, "abc", Span::new(0, 3))],
            LineTable::new(),
            Diagnostics::new(),
        );
        assert_eq!(stream.tokens().len(), 2);
        assert_eq!(stream.tokens()[1], Token::eof(3));
    }

    #[test]
    fn test_sentinel_is_not_duplicated() {
        let stream = TokenStream::new("eof", [Token::eof(0)], LineTable::new(), Diagnostics::new());
        assert_eq!(stream.tokens().len(), 1);
    }

    #[test]
    fn test_list_errors() {
        let mut lines = LineTable::new();
        lines.push_line_start(10);
        let mut stream = TokenStream::new("main.ib", [], lines, Diagnostics::new());
        assert!(!stream.has_errors());
        let found = Token::new(TokenKind::OpenScope, "{", Span::new(12, 1));
        stream.diagnostics_mut().push(Diagnostic::new(
            DiagnosticKind::TokenMismatch {
                expected: TokenKind::CloseParenthesis,
                found,
            },
            Span::new(12, 1),
            Site::from_stack(&["program", "function_decl"]),
        ));
        assert!(stream.has_errors());

        let mut out = Vec::new();
        stream.list_errors(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "error: Expected CloseParenthesis but got OpenScope '{'\n  \
             -> main.ib:2:3\n  \
             in rule function_decl (program > function_decl)\n"
        );
    }
}
