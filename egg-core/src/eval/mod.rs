pub mod builtins;
pub mod error;
pub mod forms;

pub mod prelude {
    pub use super::{
        builtins::*,
        error::*,
        forms::*,
        Evaluator,
    };
}


use std::rc::Rc;

use crate::{
    environment::prelude::{Closure, Environment, Scope, Value},
    parser::prelude::Expression,
    utils::prelude::{PrintEmitter, PrintSink, SrcSpan},
};

use error::{runtime_error, RuntimeError, RuntimeErrorType};
use forms::SpecialForm;

/// Tree-walking evaluator. Holds nothing but the output channel used by
/// `print`; all program state lives in the [`Scope`] frames passed in.
pub struct Evaluator {
    output: PrintEmitter,
}

impl Evaluator {
    pub fn new(sink: Rc<dyn PrintSink>) -> Self {
        Self {
            output: PrintEmitter::new(sink),
        }
    }

    pub fn output(&self) -> &PrintEmitter {
        &self.output
    }

    pub fn evaluate(&self, expression: &Expression, scope: &Scope) -> Result<Value, RuntimeError> {
        match expression {
            Expression::Literal { value, .. } => Ok(value.into()),
            Expression::Word { name, location } => match scope.borrow().get(name) {
                Some(value) => Ok(value),
                None => runtime_error(
                    RuntimeErrorType::UndefinedBinding { name: name.clone() },
                    *location
                ),
            },
            Expression::Apply { operator, args, location } => {
                self.eval_apply(operator, args, *location, scope)
            }
        }
    }

    fn eval_apply(
        &self,
        operator: &Expression,
        args: &[Rc<Expression>],
        location: SrcSpan,
        scope: &Scope
    ) -> Result<Value, RuntimeError> {
        if let Some(form) = operator.as_word().and_then(SpecialForm::from_name) {
            return self.eval_form(form, args, location, scope);
        }

        let callee = self.evaluate(operator, scope)?;

        let args = args.iter()
            .map(|arg| self.evaluate(arg, scope))
            .collect::<Result<Vec<Value>, RuntimeError>>()?;

        match callee {
            Value::Function { closure } => self.call_closure(&closure, args, location),
            Value::Builtin { builtin } => self.call_builtin(builtin, args, location),
            other => runtime_error(
                RuntimeErrorType::NotCallable { found: other.value_type() },
                operator.location()
            ),
        }
    }

    /// Applies a function value to already evaluated arguments.
    pub fn call(&self, callee: &Value, args: Vec<Value>, location: SrcSpan) -> Result<Value, RuntimeError> {
        match callee {
            Value::Function { closure } => self.call_closure(closure, args, location),
            Value::Builtin { builtin } => self.call_builtin(*builtin, args, location),
            other => runtime_error(
                RuntimeErrorType::NotCallable { found: other.value_type() },
                location
            ),
        }
    }

    fn call_closure(&self, closure: &Closure, args: Vec<Value>, location: SrcSpan) -> Result<Value, RuntimeError> {
        if args.len() != closure.arity() {
            return runtime_error(
                RuntimeErrorType::ArgumentCount { expected: closure.arity(), found: args.len() },
                location
            );
        }

        let local = Environment::child(&closure.scope);

        {
            let mut frame = local.borrow_mut();

            for (param, arg) in closure.params.iter().zip(args) {
                frame.define(param.as_str(), arg);
            }
        }

        tracing::trace!(params = ?closure.params, "calling closure");

        self.evaluate(&closure.body, &local)
    }
}
