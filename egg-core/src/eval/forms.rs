use std::rc::Rc;

use crate::{
    environment::prelude::{Closure, Scope, Value, FALSE},
    parser::prelude::Expression,
    utils::prelude::SrcSpan,
};

use super::{error::{runtime_error, RuntimeError, RuntimeErrorType}, Evaluator};

/// Constructs that receive their arguments unevaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialForm {
    /// `if(condition, then, else)`
    Conditional,
    /// `while(condition, body)`
    Loop,
    /// `do(expression...)`
    Sequence,
    /// `define(word, value)`
    Define,
    /// `set(word, value)`
    Set,
    /// `fun(parameter..., body)`
    Lambda,
}

impl SpecialForm {
    pub const ALL: [SpecialForm; 6] = [
        SpecialForm::Conditional,
        SpecialForm::Loop,
        SpecialForm::Sequence,
        SpecialForm::Define,
        SpecialForm::Set,
        SpecialForm::Lambda,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "if" => SpecialForm::Conditional,
            "while" => SpecialForm::Loop,
            "do" => SpecialForm::Sequence,
            "define" => SpecialForm::Define,
            "set" => SpecialForm::Set,
            "fun" => SpecialForm::Lambda,
            _ => return None
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            SpecialForm::Conditional => "if",
            SpecialForm::Loop => "while",
            SpecialForm::Sequence => "do",
            SpecialForm::Define => "define",
            SpecialForm::Set => "set",
            SpecialForm::Lambda => "fun",
        }
    }

    /// Exact argument count, for the forms that have one.
    pub fn arity(self) -> Option<usize> {
        match self {
            SpecialForm::Conditional => Some(3),
            SpecialForm::Loop | SpecialForm::Define | SpecialForm::Set => Some(2),
            SpecialForm::Sequence | SpecialForm::Lambda => None,
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            SpecialForm::Conditional => "if(condition, then, else)",
            SpecialForm::Loop => "while(condition, body)",
            SpecialForm::Sequence => "do(expression, ...)",
            SpecialForm::Define => "define(name, value)",
            SpecialForm::Set => "set(name, value)",
            SpecialForm::Lambda => "fun(parameter, ..., body)",
        }
    }
}

impl Evaluator {
    pub(super) fn eval_form(
        &self,
        form: SpecialForm,
        args: &[Rc<Expression>],
        location: SrcSpan,
        scope: &Scope
    ) -> Result<Value, RuntimeError> {
        if let Some(expected) = form.arity() {
            if args.len() != expected {
                return runtime_error(
                    RuntimeErrorType::FormArity { form, expected, found: args.len() },
                    location
                );
            }
        }

        tracing::trace!(form = form.name(), "special form");

        match form {
            SpecialForm::Conditional => {
                if self.evaluate(&args[0], scope)?.is_truthy() {
                    self.evaluate(&args[1], scope)
                } else {
                    self.evaluate(&args[2], scope)
                }
            },
            SpecialForm::Loop => {
                while self.evaluate(&args[0], scope)?.is_truthy() {
                    self.evaluate(&args[1], scope)?;
                }

                Ok(FALSE)
            },
            SpecialForm::Sequence => {
                let mut value = FALSE;

                for arg in args {
                    value = self.evaluate(arg, scope)?;
                }

                Ok(value)
            },
            SpecialForm::Define => {
                let name = binding_target(form, &args[0])?;
                let value = self.evaluate(&args[1], scope)?;

                tracing::trace!(name, "define");
                scope.borrow_mut().define(name, value.clone());

                Ok(value)
            },
            SpecialForm::Set => {
                let name = binding_target(form, &args[0])?;
                let value = self.evaluate(&args[1], scope)?;

                tracing::trace!(name, "set");
                if !scope.borrow_mut().assign(name, value.clone()) {
                    return runtime_error(
                        RuntimeErrorType::UndefinedAssignment { name: name.to_string() },
                        args[0].location()
                    );
                }

                Ok(value)
            },
            SpecialForm::Lambda => {
                let Some((body, params)) = args.split_last() else {
                    return runtime_error(RuntimeErrorType::MissingBody, location);
                };

                let params = params.iter()
                    .map(|param| binding_target(form, param).map(str::to_string))
                    .collect::<Result<Vec<String>, RuntimeError>>()?;

                Ok(Value::Function {
                    closure: Rc::new(Closure {
                        scope: scope.clone(),
                        params,
                        body: body.clone(),
                    })
                })
            },
        }
    }
}

fn binding_target(form: SpecialForm, expression: &Expression) -> Result<&str, RuntimeError> {
    match expression.as_word() {
        Some(name) => Ok(name),
        None => runtime_error(RuntimeErrorType::ExpectedWord { form }, expression.location()),
    }
}
