use std::{fmt::Display, io::Write, path::PathBuf};

use termcolor::Buffer;
use thiserror::Error;

use crate::{
    eval::prelude::RuntimeError,
    parser::prelude::{ParseError, ParseErrorType},
    utils::prelude::SrcSpan,
};
use super::diagnostic::{Diagnostic, Label, Location};

/// The three failure categories of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed program text, bad special form usage or a call with the
    /// wrong number of arguments.
    Syntax,
    /// A word with no binding in the active scope chain.
    Reference,
    /// A value used where it cannot be: applying a non-function, bad operands.
    Type,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Syntax => write!(f, "Syntax error"),
            ErrorKind::Reference => write!(f, "Reference error"),
            ErrorKind::Type => write!(f, "Type error"),
        }
    }
}

/// Failure of [`crate::interpreter::Interpreter::run`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EggError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl EggError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EggError::Parse(_) => ErrorKind::Syntax,
            EggError::Runtime(error) => error.kind(),
        }
    }

    /// Attaches the program text so the error can be rendered.
    pub fn with_source(self, path: PathBuf, src: String) -> Error {
        match self {
            EggError::Parse(error) => Error::Parse { path, src, error },
            EggError::Runtime(error) => Error::Runtime { path, src, error },
        }
    }
}

/// A failure tied to a program file, renderable as a diagnostic.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("failed to parse source code")]
    Parse {
        path: PathBuf,
        src: String,
        error: ParseError
    },
    #[error("evaluation failed")]
    Runtime {
        path: PathBuf,
        src: String,
        error: RuntimeError
    },
    #[error("IO operation failed")]
    StdIo {
        err: std::io::ErrorKind
    }
}

impl Error {
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Parse { .. } => Some(ErrorKind::Syntax),
            Error::Runtime { error, .. } => Some(error.kind()),
            Error::StdIo { .. } => None,
        }
    }

    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();

        match self.pretty(&mut nocolor) {
            Ok(()) => String::from_utf8_lossy(nocolor.as_slice()).into_owned(),
            Err(_) => self.to_string(),
        }
    }

    pub fn pretty(&self, buf: &mut Buffer) -> std::io::Result<()> {
        for diagnostic in self.to_diagnostics() {
            diagnostic.write(buf)?;
            writeln!(buf)?;
        }

        Ok(())
    }

    pub fn to_diagnostics(&self) -> Vec<Diagnostic<'_>> {
        match self {
            Error::Parse { path, src, error } => {
                let (label, extra) = error.details();

                let adjusted_location = if matches!(error.error, ParseErrorType::UnexpectedEof) {
                    SrcSpan {
                        start: src.len() as u32,
                        end: src.len() as u32,
                    }
                } else {
                    error.span
                };

                vec![Diagnostic {
                    title: ErrorKind::Syntax.to_string(),
                    text: extra.join("\n"),
                    location: Some(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label.to_string()),
                            span: adjusted_location,
                        },
                        extra_labels: vec![],
                    }),
                }]
            },
            Error::Runtime { path, src, error } => {
                let (label, extra) = error.details();

                vec![Diagnostic {
                    title: error.kind().to_string(),
                    text: extra.join("\n"),
                    location: Some(Location {
                        src,
                        path: path.clone(),
                        label: Label {
                            text: Some(label),
                            span: error.span,
                        },
                        extra_labels: vec![],
                    }),
                }]
            },
            Error::StdIo { err } => {
                vec![Diagnostic {
                    title: "Standard IO error".into(),
                    text: format!("{err}"),
                    location: None,
                }]
            }
        }
    }
}
