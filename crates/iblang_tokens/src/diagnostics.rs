//! The append-only diagnostic log shared by the lexer and the parser

use crate::spanned::Span;
use crate::token::{Token, TokenKind};
use itertools::Itertools as _;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// An error found while scanning source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexingError {
    /// Invalid char
    #[error("invalid char: {0:?}")]
    InvalidChar(char),
    #[error("unterminated {0} literal")]
    UnterminatedLiteral(&'static str),
}

/// The kind of a [Diagnostic]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    #[error(transparent)]
    Lex(#[from] LexingError),
    #[error("Expected {expected} but got {found}")]
    TokenMismatch { expected: TokenKind, found: Token },
}

/// Which rule of the front end recorded a diagnostic.
///
/// This points into the compiler, not into the user's source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub rule: &'static str,
    pub stack: Vec<&'static str>,
}

impl Site {
    /// A site with no enclosing rules
    pub fn rule(rule: &'static str) -> Self {
        Self {
            rule,
            stack: vec![rule],
        }
    }

    /// A site at the innermost rule of a non-terminal stack
    pub fn from_stack(stack: &[&'static str]) -> Self {
        Self {
            rule: stack.last().copied().unwrap_or("<top>"),
            stack: stack.to_vec(),
        }
    }
}

impl Display for Site {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.rule, self.stack.iter().join(" > "))
    }
}

/// A recoverable error recorded during lexing or parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Option<Span>,
    pub site: Site,
}

impl Diagnostic {
    /// Creates a new diagnostic
    pub fn new(kind: impl Into<DiagnosticKind>, span: impl Into<Option<Span>>, site: Site) -> Self {
        Self {
            kind: kind.into(),
            span: span.into(),
            site,
        }
    }

    /// The human readable message of this diagnostic
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [in rule {}]", self.kind, self.site)
    }
}

/// An append-only, ordered list of [Diagnostic]s
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_token_mismatch_message() {
        let found = Token::new(TokenKind::OpenScope, "{", Span::new(7, 1));
        let diagnostic = Diagnostic::new(
            DiagnosticKind::TokenMismatch {
                expected: TokenKind::CloseParenthesis,
                found,
            },
            Span::new(7, 1),
            Site::from_stack(&["program", "function_decl"]),
        );
        assert_eq!(
            diagnostic.message(),
            "Expected CloseParenthesis but got OpenScope '{'"
        );
        assert_eq!(diagnostic.site.rule, "function_decl");
        assert_eq!(diagnostic.site.to_string(), "function_decl (program > function_decl)");
    }

    #[test]
    fn test_log_is_ordered() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::new(LexingError::InvalidChar('$'), None, Site::rule("lex")));
        diagnostics.push(Diagnostic::new(LexingError::InvalidChar('@'), None, Site::rule("lex")));
        let messages = diagnostics.iter().map(Diagnostic::message).collect::<Vec<_>>();
        assert_eq!(messages, ["invalid char: '$'", "invalid char: '@'"]);
    }
}
