use std::{fmt::{Debug, Display}, rc::Rc};

use crate::{eval::prelude::Builtin, parser::prelude::{Expression, Literal}};

use super::environment::Scope;

pub const TRUE: Value = Value::Boolean { value: true };
pub const FALSE: Value = Value::Boolean { value: false };

#[derive(Debug, Clone)]
pub enum Value {
    Number {
        value: f64
    },
    String {
        value: String
    },
    Boolean {
        value: bool
    },
    Array {
        elements: Rc<[Value]>
    },
    Function {
        closure: Rc<Closure>
    },
    Builtin {
        builtin: Builtin
    },
}

impl Value {
    pub fn number(value: f64) -> Self {
        Value::Number { value }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Value::String { value: value.into() }
    }

    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array { elements: elements.into() }
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Number { .. } => ValueType::Number,
            Self::String { .. } => ValueType::String,
            Self::Boolean { .. } => ValueType::Boolean,
            Self::Array { .. } => ValueType::Array,
            Self::Function { .. } | Self::Builtin { .. } => ValueType::Function,
        }
    }

    /// Only the boolean `false` is falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean { value: false })
    }

    /// Text the value contributes when `+` joins it to a string. Arrays are
    /// flattened and comma separated: `+("a", array(1, 2))` gives `a1,2`.
    pub fn concat_text(&self) -> String {
        match self {
            Value::Array { elements } => elements.iter()
                .map(Value::concat_text)
                .collect::<Vec<String>>()
                .join(","),
            other => other.to_string(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number { value: a }, Value::Number { value: b }) => a == b,
            (Value::String { value: a }, Value::String { value: b }) => a == b,
            (Value::Boolean { value: a }, Value::Boolean { value: b }) => a == b,
            (Value::Array { elements: a }, Value::Array { elements: b }) => a == b,
            (Value::Function { closure: a }, Value::Function { closure: b }) => Rc::ptr_eq(a, b),
            (Value::Builtin { builtin: a }, Value::Builtin { builtin: b }) => a == b,
            _ => false
        }
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Number { value } => Value::Number { value: *value },
            Literal::String { value } => Value::String { value: value.clone() },
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number { value } => write!(f, "{}", format_number(*value)),
            Value::String { value } => write!(f, "{value}"),
            Value::Boolean { value } => write!(f, "{value}"),
            Value::Array { elements } => {
                let elements = elements.iter()
                    .map(|element| match element {
                        Value::String { value } => format!("\"{value}\""),
                        element => element.to_string()
                    })
                    .collect::<Vec<String>>();

                write!(f, "[{}]", elements.join(", "))
            },
            Value::Function { .. } => write!(f, "<function>"),
            Value::Builtin { builtin } => write!(f, "<builtin {}>", builtin.name()),
        }
    }
}

/// Renders a number the way the language prints it: integral values have no
/// fractional part, non-finite values are spelled out.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".into()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity".into() } else { "-Infinity".into() }
    } else if value == 0.0 {
        "0".into()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let formatted = format!("{value:e}");

        // positive exponents carry an explicit sign: 1e+24
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            },
            _ => formatted,
        }
    } else {
        format!("{value}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Number,
    String,
    Boolean,
    Array,
    Function,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Number => write!(f, "number"),
            ValueType::String => write!(f, "string"),
            ValueType::Boolean => write!(f, "boolean"),
            ValueType::Array => write!(f, "array"),
            ValueType::Function => write!(f, "function"),
        }
    }
}

/// A function value: the scope it was created in, its parameter names and
/// its body.
pub struct Closure {
    pub scope: Scope,
    pub params: Vec<String>,
    pub body: Rc<Expression>,
}

impl Closure {
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

// the captured scope usually contains the closure itself
impl Debug for Closure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Closure")
            .field("params", &self.params)
            .field("body", &self.body.to_string())
            .finish()
    }
}
