use crate::{lexer::prelude::{LexResult, Lexer, SrcChars, Token}, utils::prelude::SrcSpan};
use super::error::{ParseError, ParseErrorType};
use super::ast::{Expression, Parsed};

pub trait Parse<'a>
    where Self: Sized,
{
    fn parse(parser: &mut Parser<'a>) -> Result<Self, ParseError>;
}

/// Recursive-descent parser over a single program text.
///
/// The parser looks at exactly one token at a time. Comments are skipped but
/// their spans are kept in [`Parser::comments`].
pub struct Parser<'a> {
    pub current_token: LexResult,
    pub comments: Vec<SrcSpan>,

    src: &'a str,
    tokens: Lexer<SrcChars<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str) -> Self {
        let mut parser = Self {
            current_token: Ok((0, Token::Eof, 0)),
            comments: vec![],

            src,
            tokens: Lexer::from_source(src),
        };

        parser.step();

        parser
    }

    pub fn step(&mut self) {
        loop {
            match self.tokens.next_token() {
                Ok((start, Token::Comment, end)) => {
                    self.comments.push(SrcSpan { start, end })
                },
                token => {
                    self.current_token = token;

                    break;
                }
            }
        }
    }

    /// The unconsumed input, starting at the current token.
    pub fn remainder(&self) -> &'a str {
        let start = match &self.current_token {
            Ok((start, _, _)) => *start,
            Err(error) => error.location.start,
        };

        self.src.get(start as usize..).unwrap_or_default()
    }

    /// Parses one expression, leaving the parser on the token after it.
    pub fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        Expression::parse(self)
    }

    /// Parses one expression and requires that nothing but whitespace and
    /// comments follows it.
    pub fn parse(&mut self) -> Result<Parsed, ParseError> {
        let program = self.parse_expression()?;

        let start = match &self.current_token {
            Ok((_, Token::Eof, _)) => {
                return Ok(Parsed {
                    program,
                    comments: std::mem::take(&mut self.comments)
                });
            },
            Ok((start, _, _)) => *start,
            Err(error) => error.location.start,
        };

        parse_error(
            ParseErrorType::UnexpectedText { remainder: self.remainder().into() },
            SrcSpan { start, end: self.src.len() as u32 }
        )
    }
}

/// Parses the leading expression of `src` and returns it with the text left
/// after it (leading whitespace and comments of the rest already skipped).
pub fn parse_expression(src: &str) -> Result<(Expression, &str), ParseError> {
    let mut parser = Parser::new(src);
    let expression = parser.parse_expression()?;

    Ok((expression, parser.remainder()))
}

pub fn parse_program(src: &str) -> Result<Parsed, ParseError> {
    let mut parser = Parser::new(src);
    let parsed = parser.parse()?;

    tracing::trace!(comments = parsed.comments.len(), "parsed program");

    Ok(parsed)
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
