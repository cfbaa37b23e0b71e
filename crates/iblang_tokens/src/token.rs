//! A lexical token from a source file

use crate::spanned::{Span, Spanned};
use std::fmt::{Debug, Display, Formatter};

/// A lexical token from a source file
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    span: Span,
}

impl Token {
    /// Creates a new token
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Creates the end of stream sentinel at the given offset
    pub fn eof(offset: usize) -> Self {
        Self::new(TokenKind::Eof, "", Span::new(offset, 0))
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The lexeme of this token. Quoted literals hold only what is between the quotes.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({:?})@{}", self.kind, self.text, self.span.offset())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "{}", self.kind),
            _ => write!(f, "{} '{}'", self.kind, self.text),
        }
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

/// The kind for this token
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, strum::EnumIter,
)]
pub enum TokenKind {
    /// `func`
    KeywordFunc,
    /// `if`
    KeywordIf,
    /// `else`
    KeywordElse,
    /// `return`
    KeywordReturn,

    Identifier,

    // literals
    IntegerLiteral,
    FloatLiteral,
    StringLiteral,
    CharLiteral,

    /// (
    OpenParenthesis,
    /// )
    CloseParenthesis,
    /// {
    OpenScope,
    /// }
    CloseScope,
    /// ,
    Comma,

    /// =
    Assignment,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    /// ==
    Equal,
    /// !=
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    /// &&
    And,
    /// ||
    Or,
    /// !
    Not,

    /// EOF, will only appear at the end of a token sequence
    Eof,
}

impl TokenKind {
    /// Whether this kind can join two operands in a binary expression
    pub fn is_binary_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Add
                | TokenKind::Subtract
                | TokenKind::Multiply
                | TokenKind::Divide
                | TokenKind::Modulo
                | TokenKind::Equal
                | TokenKind::NotEqual
                | TokenKind::LessThan
                | TokenKind::LessThanOrEqual
                | TokenKind::GreaterThan
                | TokenKind::GreaterThanOrEqual
                | TokenKind::And
                | TokenKind::Or
        )
    }

    /// Whether this kind is one of the language keywords
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::KeywordFunc
                | TokenKind::KeywordIf
                | TokenKind::KeywordElse
                | TokenKind::KeywordReturn
        )
    }
}
