//! Responsible with converting source text into a [TokenStream]

use crate::lexer::token_parsing::{parse_insignificant, parse_token};
use iblang_tokens::diagnostics::{Diagnostic, Diagnostics, LexingError, Site};
use iblang_tokens::spanned::{LineTable, Span};
use iblang_tokens::token::{Token, TokenKind};
use iblang_tokens::TokenStream;
use std::io;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

mod token_parsing;

/// Options for a [Lexer]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct LexerOptions {
    /// Emit every produced token as a debug event
    pub trace_tokens: bool,
}

/// Produces tokens from source text, ending with a single [Eof](TokenKind::Eof) token.
///
/// Errors never stop the lexer. They are recorded in its diagnostic log, which is handed over
/// to the [TokenStream] built by [into_token_stream](Lexer::into_token_stream).
#[derive(Debug)]
pub struct Lexer<'src> {
    path: PathBuf,
    src: &'src str,
    offset: usize,
    lines: LineTable,
    diagnostics: Diagnostics,
    options: LexerOptions,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer
    pub fn new(path: impl AsRef<Path>, src: &'src str) -> Self {
        Self::with_options(path, src, LexerOptions::default())
    }

    /// Creates a new lexer with the given options
    pub fn with_options(path: impl AsRef<Path>, src: &'src str, options: LexerOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            src,
            offset: 0,
            lines: LineTable::new(),
            diagnostics: Diagnostics::new(),
            options,
            finished: false,
        }
    }

    /// Lexes whatever is left and packages the result
    pub fn into_token_stream(mut self) -> TokenStream {
        let tokens = self.by_ref().collect::<Vec<_>>();
        TokenStream::new(self.path, tokens, self.lines, self.diagnostics)
    }

    fn remaining(&self) -> &'src str {
        &self.src[self.offset..]
    }

    fn advance(&mut self, len: usize) {
        let consumed = &self.src[self.offset..self.offset + len];
        for (idx, _) in consumed.match_indices('\n') {
            self.lines.push_line_start(self.offset + idx + 1);
        }
        self.offset += len;
    }

    fn next_token(&mut self) -> Option<Token> {
        loop {
            if let Ok((_, skipped)) = parse_insignificant(self.remaining()) {
                self.advance(skipped.len());
            }
            let remaining = self.remaining();
            if remaining.is_empty() {
                return None;
            }
            match parse_token(remaining) {
                Ok((_, (lexeme, kind))) => {
                    let span = Span::new(self.offset, lexeme.len());
                    self.advance(lexeme.len());
                    let text = match kind {
                        TokenKind::StringLiteral | TokenKind::CharLiteral => {
                            &lexeme[1..lexeme.len() - 1]
                        }
                        _ => lexeme,
                    };
                    return Some(Token::new(kind, text, span));
                }
                Err(e) => {
                    trace!("no token at offset {}: {e}", self.offset);
                    self.recover(remaining);
                }
            }
        }
    }

    /// Records why `remaining` does not start with a token, then skips past the problem
    fn recover(&mut self, remaining: &str) {
        let (error, len) = match remaining.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let len = remaining.find('\n').unwrap_or(remaining.len());
                let literal = if quote == '"' { "string" } else { "char" };
                (LexingError::UnterminatedLiteral(literal), len)
            }
            Some(c) => (LexingError::InvalidChar(c), c.len_utf8()),
            None => return,
        };
        let span = Span::new(self.offset, len);
        debug!("{error} at offset {}", span.offset());
        self.diagnostics
            .push(Diagnostic::new(error, span, Site::rule("lex")));
        self.advance(len);
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token().unwrap_or_else(|| {
            self.finished = true;
            Token::eof(self.offset)
        });
        if self.options.trace_tokens {
            debug!(path = %self.path.display(), "{token:?}");
        }
        Some(token)
    }
}

/// Lexes a source string
pub fn lex(path: impl AsRef<Path>, src: &str) -> TokenStream {
    lex_with_options(path, src, LexerOptions::default())
}

/// Lexes a source string with the given options
pub fn lex_with_options(path: impl AsRef<Path>, src: &str, options: LexerOptions) -> TokenStream {
    Lexer::with_options(path, src, options).into_token_stream()
}

/// Reads all of `reader` and lexes it
pub fn lex_reader<R: Read>(path: impl AsRef<Path>, mut reader: R) -> io::Result<TokenStream> {
    let mut src = String::new();
    reader.read_to_string(&mut src)?;
    Ok(lex(path, &src))
}

/// Reads the file at `path` and lexes it
pub fn lex_path(path: impl AsRef<Path>) -> io::Result<TokenStream> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path)?;
    Ok(lex(path, &src))
}
