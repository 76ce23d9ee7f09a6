use std::{fmt::Display, rc::Rc};

use crate::{
    environment::prelude::format_number,
    lexer::prelude::Token,
    parser::prelude::{parse_error, Parse, ParseError, ParseErrorType, Parser},
    utils::prelude::SrcSpan
};

#[derive(Debug)]
pub struct Parsed {
    pub program: Expression,
    pub comments: Vec<SrcSpan>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number {
        value: f64
    },
    String {
        value: String
    },
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Number { value } => write!(f, "{}", format_number(*value)),
            Literal::String { value } => write!(f, "\"{value}\""),
        }
    }
}

// expression -> (<string> | <number> | <word>) { "(" [ <expression> { "," <expression> } ] ")" }
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal {
        value: Literal,
        location: SrcSpan
    },
    Word {
        name: String,
        location: SrcSpan
    },
    Apply {
        operator: Rc<Expression>,
        args: Vec<Rc<Expression>>,
        location: SrcSpan
    },
}

impl Expression {
    pub fn location(&self) -> SrcSpan {
        match self {
            Expression::Literal { location, .. }
            | Expression::Word { location, .. }
            | Expression::Apply { location, .. } => *location
        }
    }

    pub fn as_word(&self) -> Option<&str> {
        match self {
            Expression::Word { name, .. } => Some(name),
            _ => None
        }
    }

    /// Structural equality ignoring source locations.
    pub fn same_shape(&self, other: &Expression) -> bool {
        match (self, other) {
            (Expression::Literal { value: a, .. }, Expression::Literal { value: b, .. }) => a == b,
            (Expression::Word { name: a, .. }, Expression::Word { name: b, .. }) => a == b,
            (
                Expression::Apply { operator: op_a, args: args_a, .. },
                Expression::Apply { operator: op_b, args: args_b, .. }
            ) => {
                op_a.same_shape(op_b)
                    && args_a.len() == args_b.len()
                    && args_a.iter().zip(args_b.iter()).all(|(a, b)| a.same_shape(b))
            },
            _ => false
        }
    }
}

impl<'a> Parse<'a> for Expression {
    fn parse(parser: &mut Parser<'a>) -> Result<Self, ParseError> {
        let expression = match &parser.current_token {
            Ok((start, Token::String(value), end)) => Expression::Literal {
                value: Literal::String { value: value.clone() },
                location: SrcSpan::from(*start, *end)
            },
            Ok((start, Token::Number(value), end)) => Expression::Literal {
                value: Literal::Number { value: *value },
                location: SrcSpan::from(*start, *end)
            },
            Ok((start, Token::Word(name), end)) => Expression::Word {
                name: name.clone(),
                location: SrcSpan::from(*start, *end)
            },
            Ok((start, Token::Eof, end)) => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan::from(*start, *end)
            ),
            Ok((start, _, end)) => return parse_error(
                ParseErrorType::UnexpectedSyntax { remainder: parser.remainder().into() },
                SrcSpan::from(*start, *end)
            ),
            Err(error) => return parse_error(
                ParseErrorType::LexError { error: *error, remainder: parser.remainder().into() },
                error.location
            )
        };

        parser.step();

        parse_apply(parser, expression)
    }
}

// apply -> "(" [ <expression> { "," <expression> } [ "," ] ] ")"
fn parse_apply(parser: &mut Parser<'_>, mut expression: Expression) -> Result<Expression, ParseError> {
    while matches!(parser.current_token, Ok((_, Token::LParen, _))) {
        parser.step();

        let mut args = vec![];

        let end = loop {
            if let Ok((_, Token::RParen, end)) = parser.current_token {
                parser.step();
                break end;
            }

            args.push(Rc::new(Expression::parse(parser)?));

            match parser.current_token {
                Ok((_, Token::Comma, _)) => parser.step(),
                Ok((_, Token::RParen, _)) => {},
                Ok((start, Token::Eof, end)) => return parse_error(
                    ParseErrorType::UnexpectedEof,
                    SrcSpan::from(start, end)
                ),
                Ok((start, _, end)) => return parse_error(
                    ParseErrorType::ExpectedCommaOrParen { remainder: parser.remainder().into() },
                    SrcSpan::from(start, end)
                ),
                Err(error) => return parse_error(
                    ParseErrorType::ExpectedCommaOrParen { remainder: parser.remainder().into() },
                    error.location
                )
            }
        };

        let location = SrcSpan::from(expression.location().start, end);

        expression = Expression::Apply {
            operator: Rc::new(expression),
            args,
            location
        };
    }

    Ok(expression)
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal { value, .. } => write!(f, "{value}"),
            Expression::Word { name, .. } => write!(f, "{name}"),
            Expression::Apply { operator, args, .. } => {
                let args = args.iter()
                    .map(|arg| format!("{}", arg))
                    .collect::<Vec<String>>();

                write!(f, "{}({})", operator, args.join(", "))
            }
        }
    }
}
