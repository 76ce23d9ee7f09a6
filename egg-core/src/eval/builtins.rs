use std::rc::Rc;

use crate::{
    environment::prelude::{Environment, Scope, Value, ValueType, FALSE, TRUE},
    utils::prelude::SrcSpan,
};

use super::{error::{runtime_error, RuntimeError, RuntimeErrorType}, Evaluator};

/// Functions predefined in the root scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equal,
    LessThan,
    GreaterThan,
    Print,
    Array,
    Length,
    Element,
}

impl Builtin {
    pub const ALL: [Builtin; 11] = [
        Builtin::Add,
        Builtin::Subtract,
        Builtin::Multiply,
        Builtin::Divide,
        Builtin::Equal,
        Builtin::LessThan,
        Builtin::GreaterThan,
        Builtin::Print,
        Builtin::Array,
        Builtin::Length,
        Builtin::Element,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Subtract => "-",
            Builtin::Multiply => "*",
            Builtin::Divide => "/",
            Builtin::Equal => "==",
            Builtin::LessThan => "<",
            Builtin::GreaterThan => ">",
            Builtin::Print => "print",
            Builtin::Array => "array",
            Builtin::Length => "length",
            Builtin::Element => "element",
        }
    }

    /// `None` for variadic builtins.
    pub fn arity(self) -> Option<usize> {
        match self {
            Builtin::Print | Builtin::Array => None,
            Builtin::Length => Some(1),
            _ => Some(2),
        }
    }
}

/// A fresh root frame holding `true`, `false` and every [`Builtin`].
pub fn global_scope() -> Scope {
    let scope = Environment::root();

    {
        let mut global = scope.borrow_mut();

        global.define("true", TRUE);
        global.define("false", FALSE);

        for builtin in Builtin::ALL {
            global.define(builtin.name(), Value::Builtin { builtin });
        }
    }

    scope
}

impl Evaluator {
    pub(super) fn call_builtin(
        &self,
        builtin: Builtin,
        args: Vec<Value>,
        location: SrcSpan
    ) -> Result<Value, RuntimeError> {
        if let Some(expected) = builtin.arity() {
            if args.len() != expected {
                return runtime_error(
                    RuntimeErrorType::ArgumentCount { expected, found: args.len() },
                    location
                );
            }
        }

        match builtin {
            Builtin::Print => {
                self.output().emit(&args);
                return Ok(FALSE);
            },
            Builtin::Array => return Ok(Value::array(args)),
            _ => {}
        }

        match (builtin, args.as_slice()) {
            (Builtin::Length, [value]) => match value {
                Value::Array { elements } => Ok(Value::number(elements.len() as f64)),
                Value::String { value } => Ok(Value::number(value.chars().count() as f64)),
                other => runtime_error(
                    RuntimeErrorType::InvalidArgument {
                        builtin,
                        expected: ValueType::Array,
                        found: other.value_type()
                    },
                    location
                ),
            },
            (Builtin::Element, [sequence, index]) => element(sequence, index, location),
            (Builtin::Equal, [left, right]) => Ok(Value::Boolean { value: equals(left, right) }),
            (_, [left, right]) => binary(builtin, left, right, location),
            // arity was checked above
            (_, _) => runtime_error(
                RuntimeErrorType::ArgumentCount { expected: 2, found: args.len() },
                location
            ),
        }
    }
}

fn binary(builtin: Builtin, left: &Value, right: &Value, location: SrcSpan) -> Result<Value, RuntimeError> {
    let value = match (builtin, left, right) {
        (Builtin::Add, Value::Number { value: a }, Value::Number { value: b }) => Value::number(a + b),
        (Builtin::Add, Value::String { .. }, _) | (Builtin::Add, _, Value::String { .. }) => {
            Value::string(left.concat_text() + &right.concat_text())
        },
        (Builtin::Subtract, Value::Number { value: a }, Value::Number { value: b }) => Value::number(a - b),
        (Builtin::Multiply, Value::Number { value: a }, Value::Number { value: b }) => Value::number(a * b),
        (Builtin::Divide, Value::Number { value: a }, Value::Number { value: b }) => Value::number(a / b),
        (Builtin::LessThan, Value::Number { value: a }, Value::Number { value: b }) => Value::Boolean { value: a < b },
        (Builtin::LessThan, Value::String { value: a }, Value::String { value: b }) => Value::Boolean { value: a < b },
        (Builtin::GreaterThan, Value::Number { value: a }, Value::Number { value: b }) => Value::Boolean { value: a > b },
        (Builtin::GreaterThan, Value::String { value: a }, Value::String { value: b }) => Value::Boolean { value: a > b },
        _ => return runtime_error(
            RuntimeErrorType::InvalidOperands {
                builtin,
                left: left.value_type(),
                right: right.value_type()
            },
            location
        ),
    };

    Ok(value)
}

/// Primitives compare by value, arrays and functions by identity.
fn equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Array { elements: a }, Value::Array { elements: b }) => Rc::ptr_eq(a, b),
        (left, right) => left == right,
    }
}

fn element(sequence: &Value, index: &Value, location: SrcSpan) -> Result<Value, RuntimeError> {
    let elements = match sequence {
        Value::Array { elements } => elements,
        other => return runtime_error(
            RuntimeErrorType::InvalidArgument {
                builtin: Builtin::Element,
                expected: ValueType::Array,
                found: other.value_type()
            },
            location
        ),
    };

    let index = match index {
        Value::Number { value } => *value,
        other => return runtime_error(
            RuntimeErrorType::InvalidArgument {
                builtin: Builtin::Element,
                expected: ValueType::Number,
                found: other.value_type()
            },
            location
        ),
    };

    if index.fract() != 0.0 || index < 0.0 || index >= elements.len() as f64 {
        return runtime_error(
            RuntimeErrorType::InvalidIndex { index, length: elements.len() },
            location
        );
    }

    Ok(elements[index as usize].clone())
}
