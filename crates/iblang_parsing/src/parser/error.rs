use iblang_tokens::spanned::Span;
use iblang_tokens::token::Token;
use std::fmt::{Display, Formatter};

/// An error that aborts parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct SyntaxError {
    pub kind: ErrorKind,
    pub span: Option<Span>,
    pub non_terminal_stack: Vec<&'static str>,
}

impl SyntaxError {
    /// Creates a new error
    pub fn new(
        kind: ErrorKind,
        span: impl Into<Option<Span>>,
        non_terminals: impl Into<Vec<&'static str>>,
    ) -> Self {
        Self {
            kind,
            span: span.into(),
            non_terminal_stack: non_terminals.into(),
        }
    }

    /// The innermost rule that was being parsed
    pub fn rule(&self) -> Option<&'static str> {
        self.non_terminal_stack.last().copied()
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "syntax error: {}", self.kind)?;
        if !self.non_terminal_stack.is_empty() {
            writeln!(f, "non terminal stack:")?;
            for (idx, non_terminal) in self.non_terminal_stack.iter().enumerate() {
                writeln!(f, "  {}: {}", idx, non_terminal)?;
            }
        }
        Ok(())
    }
}

/// [SyntaxError] kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("no {rule} starts with {found}")]
    UnhandledConstruct { rule: &'static str, found: Token },
}

pub type SyntaxResult<T> = Result<T, SyntaxError>;
