use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::prelude::LexicalError, utils::prelude::SrcSpan};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    /// Nothing in the grammar starts here.
    UnexpectedSyntax { remainder: String },
    /// An argument was not followed by `,` or `)`.
    ExpectedCommaOrParen { remainder: String },
    /// A complete program was followed by more text.
    UnexpectedText { remainder: String },
    UnexpectedEof,
    LexError { error: LexicalError, remainder: String },
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{error}")]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan
}

impl ParseError {
    /// The unparsed text the error points at, if any.
    pub fn remainder(&self) -> Option<&str> {
        match &self.error {
            ParseErrorType::UnexpectedSyntax { remainder }
            | ParseErrorType::ExpectedCommaOrParen { remainder }
            | ParseErrorType::UnexpectedText { remainder }
            | ParseErrorType::LexError { remainder, .. } => Some(remainder),
            ParseErrorType::UnexpectedEof => None,
        }
    }

    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::UnexpectedSyntax { remainder } => (
                "Unexpected syntax",
                vec![format!("Expected a string, a number or a word, found `{}`", excerpt(remainder))]
            ),
            ParseErrorType::ExpectedCommaOrParen { remainder } => (
                "Expected `,` or `)`",
                vec![format!("Found `{}`", excerpt(remainder))]
            ),
            ParseErrorType::UnexpectedText { .. } => (
                "Unexpected text after program",
                vec!["A program is a single expression; wrap several in `do(...)`.".into()]
            ),
            ParseErrorType::UnexpectedEof => ("Unexpected end of input", vec![]),
            ParseErrorType::LexError { error, .. } => error.details()
        }
    }
}

impl Display for ParseErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorType::UnexpectedSyntax { remainder } => {
                write!(f, "unexpected syntax: {}", excerpt(remainder))
            },
            ParseErrorType::ExpectedCommaOrParen { remainder } => {
                write!(f, "expected `,` or `)`: {}", excerpt(remainder))
            },
            ParseErrorType::UnexpectedText { remainder } => {
                write!(f, "unexpected text after program: {}", excerpt(remainder))
            },
            ParseErrorType::UnexpectedEof => write!(f, "unexpected end of input"),
            ParseErrorType::LexError { error, remainder } => {
                write!(f, "{}: {}", error.details().0.to_lowercase(), excerpt(remainder))
            }
        }
    }
}

/// First line of `text`, cut to a readable length.
fn excerpt(text: &str) -> String {
    const MAX_CHARS: usize = 32;

    let line = text.lines().next().unwrap_or_default();

    if line.chars().count() > MAX_CHARS {
        format!("{}...", line.chars().take(MAX_CHARS).collect::<String>())
    } else {
        line.to_string()
    }
}
