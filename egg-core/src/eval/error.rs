use std::fmt::Display;

use thiserror::Error;

use crate::{
    environment::prelude::{format_number, ValueType},
    utils::prelude::{ErrorKind, SrcSpan},
};

use super::prelude::{Builtin, SpecialForm};

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeErrorType {
    /// A special form used with the wrong number of arguments.
    FormArity { form: SpecialForm, expected: usize, found: usize },
    /// A binding target or parameter that is not a word.
    ExpectedWord { form: SpecialForm },
    /// `fun` without any arguments.
    MissingBody,
    /// A function called with the wrong number of arguments.
    ArgumentCount { expected: usize, found: usize },
    UndefinedBinding { name: String },
    /// `set` on a name no enclosing frame owns.
    UndefinedAssignment { name: String },
    NotCallable { found: ValueType },
    InvalidOperands { builtin: Builtin, left: ValueType, right: ValueType },
    InvalidArgument { builtin: Builtin, expected: ValueType, found: ValueType },
    InvalidIndex { index: f64, length: usize },
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{error}")]
pub struct RuntimeError {
    pub error: RuntimeErrorType,
    pub span: SrcSpan
}

impl RuntimeError {
    pub fn new(error: RuntimeErrorType, span: SrcSpan) -> Self {
        Self { error, span }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.error {
            RuntimeErrorType::FormArity { .. }
            | RuntimeErrorType::ExpectedWord { .. }
            | RuntimeErrorType::MissingBody
            | RuntimeErrorType::ArgumentCount { .. } => ErrorKind::Syntax,
            RuntimeErrorType::UndefinedBinding { .. }
            | RuntimeErrorType::UndefinedAssignment { .. } => ErrorKind::Reference,
            RuntimeErrorType::NotCallable { .. }
            | RuntimeErrorType::InvalidOperands { .. }
            | RuntimeErrorType::InvalidArgument { .. }
            | RuntimeErrorType::InvalidIndex { .. } => ErrorKind::Type,
        }
    }

    pub fn details(&self) -> (String, Vec<String>) {
        match &self.error {
            RuntimeErrorType::FormArity { form, .. } => (
                format!("Wrong number of arguments to `{}`", form.name()),
                vec![self.error.to_string()]
            ),
            RuntimeErrorType::ExpectedWord { form } => (
                "Expected a word".into(),
                vec![self.error.to_string(), format!("Usage: {}", form.usage())]
            ),
            RuntimeErrorType::MissingBody => (
                "Function has no body".into(),
                vec![format!("Usage: {}", SpecialForm::Lambda.usage())]
            ),
            RuntimeErrorType::ArgumentCount { .. } => (
                "Wrong number of arguments".into(),
                vec![self.error.to_string()]
            ),
            RuntimeErrorType::UndefinedBinding { name } => (
                format!("`{name}` is not defined"),
                vec![]
            ),
            RuntimeErrorType::UndefinedAssignment { name } => (
                format!("`{name}` is not defined"),
                vec![format!("Use `define({name}, ...)` to create a binding before setting it.")]
            ),
            RuntimeErrorType::NotCallable { found } => (
                "Not a function".into(),
                vec![format!("This evaluates to a {found}, which cannot be applied.")]
            ),
            RuntimeErrorType::InvalidOperands { .. }
            | RuntimeErrorType::InvalidArgument { .. } => (
                "Invalid arguments".into(),
                vec![self.error.to_string()]
            ),
            RuntimeErrorType::InvalidIndex { .. } => (
                "Invalid index".into(),
                vec![self.error.to_string()]
            ),
        }
    }
}

impl Display for RuntimeErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeErrorType::FormArity { form, expected, found } => {
                write!(f, "`{}` expects {expected} arguments, found {found}", form.name())
            },
            RuntimeErrorType::ExpectedWord { form } => match form {
                SpecialForm::Lambda => write!(f, "parameters of `fun` must be words"),
                form => write!(f, "first argument of `{}` must be a word", form.name()),
            },
            RuntimeErrorType::MissingBody => write!(f, "function needs a body"),
            RuntimeErrorType::ArgumentCount { expected, found } => {
                write!(f, "wrong number of arguments: expected {expected}, found {found}")
            },
            RuntimeErrorType::UndefinedBinding { name } => write!(f, "undefined binding: {name}"),
            RuntimeErrorType::UndefinedAssignment { name } => {
                write!(f, "cannot set undefined binding: {name}")
            },
            RuntimeErrorType::NotCallable { found } => {
                write!(f, "applying a non-function ({found})")
            },
            RuntimeErrorType::InvalidOperands { builtin, left, right } => {
                write!(f, "cannot apply `{}` to {left} and {right}", builtin.name())
            },
            RuntimeErrorType::InvalidArgument { builtin, expected, found } => {
                write!(f, "`{}` expects a {expected}, found {found}", builtin.name())
            },
            RuntimeErrorType::InvalidIndex { index, length } => {
                write!(f, "index {} is out of range for an array of length {length}", format_number(*index))
            },
        }
    }
}

pub fn runtime_error<T>(error: RuntimeErrorType, span: SrcSpan) -> Result<T, RuntimeError> {
    Err(RuntimeError::new(error, span))
}
