use super::error::{LexicalError, LexicalErrorType};
use super::token::{is_delimiter, Token};
use std::fmt::Display;
use crate::utils::prelude::SrcSpan;

pub type Spanned = (u32, Token, u32);
pub type LexResult = std::result::Result<Spanned, LexicalError>;

/// Characters of a `&str` paired with their byte offsets.
pub type SrcChars<'a> = std::iter::Map<std::str::CharIndices<'a>, fn((usize, char)) -> (u32, char)>;

pub fn src_chars(src: &str) -> SrcChars<'_> {
	fn offset_u32((i, c): (usize, char)) -> (u32, char) {
		(i as u32, c)
	}

	src.char_indices().map(offset_u32 as fn((usize, char)) -> (u32, char))
}

/// Produces tokens on demand from a stream of `(offset, char)` pairs.
///
/// Whitespace is skipped between tokens; comments are returned as
/// [`Token::Comment`] so the parser can keep track of them.
#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	position: u32,
	next_position: u32,
	ch: Option<char>,
	next_ch: Option<char>,
	input: T,
	finished: bool,
}

impl<T: Iterator<Item = (u32, char)>> Display for Lexer<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f,
			"Lexer {{\n\tposition: {},\n\tnext_position: {},\n\tch: {:?}, next_ch: {:?}\n}}",
			self.position, self.next_position, self.ch, self.next_ch
		)
	}
}

impl<'a> Lexer<SrcChars<'a>> {
	pub fn from_source(src: &'a str) -> Self {
		Lexer::new(src_chars(src))
	}
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
        let mut lexer = Self {
            position: 0,
            next_position: 0,
            ch: None,
			next_ch: None,
            input,
			finished: false,
        };

        lexer.next_char();
        lexer.next_char();

        lexer
    }

    pub fn next_token(&mut self) -> LexResult {
		while let Some(ch) = self.ch {
			if !ch.is_whitespace() {
				break;
			}
			self.next_char();
		}

		let span = match self.ch {
			Some(ch) => match ch {
				'#' => self.lex_comment(),
				'(' => self.eat_one_char(Token::LParen),
				')' => self.eat_one_char(Token::RParen),
				',' => self.eat_one_char(Token::Comma),
				'"' => return self.lex_string(),
				'0'..='9' => return self.lex_number(),
				_ => self.lex_word(),
			},
			None => (self.position, Token::Eof, self.position)
		};

		Ok(span)
    }

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;

		self.ch = self.next_ch;
		self.position = self.next_position;

		match self.input.next() {
			Some((pos, next)) => {
				self.next_ch = Some(next);
				self.next_position = pos;
			},
			None => {
				self.next_ch = None;
				self.next_position = self.position + self.ch.map_or(0, |c| c.len_utf8() as u32);
			}
		}

		ch
	}

	fn eat_one_char(&mut self, token: Token) -> Spanned {
		let start_pos = self.position;
		self.next_char();
		let end_pos = self.position;

		(start_pos, token, end_pos)
	}

	fn collect_word(&mut self, word: &mut String) {
		while let Some(ch) = self.ch {
			if is_delimiter(ch) {
				break;
			}
			word.push(ch);
			self.next_char();
		}
	}

	fn lex_word(&mut self) -> Spanned {
        let start_pos = self.position;
		let mut name = String::new();

		self.collect_word(&mut name);

		(start_pos, Token::Word(name), self.position)
	}

	fn lex_number(&mut self) -> LexResult {
		let start_pos = self.position;
		let mut value = String::new();

		while let Some(ch) = self.ch.filter(char::is_ascii_digit) {
			value.push(ch);
			self.next_char();
		}

		// no word boundary after the digits: the whole run is a word
		if matches!(self.ch, Some(ch) if ch.is_ascii_alphanumeric() || ch == '_') {
			self.collect_word(&mut value);

			return Ok((start_pos, Token::Word(value), self.position));
		}

		let token = match value.parse::<f64>() {
			Ok(number) => Token::Number(number),
			Err(_) => Token::Word(value),
		};

		Ok((start_pos, token, self.position))
	}

	fn lex_string(&mut self) -> LexResult {
		let start_pos = self.position;
		let mut value = String::new();

		self.next_char(); // opening quote

		loop {
			match self.next_char() {
				Some('"') => break,
				Some(ch) => value.push(ch),
				None => return Err(LexicalError {
					error: LexicalErrorType::UnterminatedString,
					location: SrcSpan::from(start_pos, self.position)
				})
			}
		}

		Ok((start_pos, Token::String(value), self.position))
	}

	fn lex_comment(&mut self) -> Spanned {
		let start_pos = self.position;

		while let Some(ch) = self.ch {
			if ch == '\n' {
				break;
			}
			self.next_char();
		}

		(start_pos, Token::Comment, self.position)
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = LexResult;

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}

		let token = self.next_token();

		if matches!(token, Ok((_, Token::Eof, _)) | Err(_)) {
			self.finished = true;
		}

		Some(token)
	}
}
