//! An iblangc error

use iblang_parsing::SyntaxError;
use itertools::Itertools as _;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The kind of error
#[derive(Debug, Error)]
pub enum IbLangCErrorKind {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{}", .0.iter().join("\n"))]
    Multi(Vec<IbLangCError>),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// An error occurred while attempting to compile iblang files
#[derive(Debug, Error)]
pub struct IbLangCError {
    kind: IbLangCErrorKind,
    path: Option<PathBuf>,
}

impl IbLangCError {
    /// Creates a new [IbLangCError] for a source file
    #[inline]
    pub fn new(error: impl Into<IbLangCErrorKind>, path: impl AsRef<Path>) -> Self {
        Self {
            kind: error.into(),
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    pub fn kind(&self) -> &IbLangCErrorKind {
        &self.kind
    }

    /// The source file this error is about, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Display for IbLangCError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}", path.display(), self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl<T> From<T> for IbLangCError
where
    IbLangCErrorKind: From<T>,
{
    fn from(value: T) -> Self {
        Self {
            kind: IbLangCErrorKind::from(value),
            path: None,
        }
    }
}

impl From<Vec<IbLangCError>> for IbLangCErrorKind {
    fn from(value: Vec<IbLangCError>) -> Self {
        IbLangCErrorKind::Multi(value)
    }
}

/// A type alias for general results in iblangc
pub type IbLangCResult<T> = Result<T, IbLangCError>;
