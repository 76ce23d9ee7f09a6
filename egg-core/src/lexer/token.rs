use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // "<anything but a quote>"
    String(String),
    // {<digit>} followed by a word boundary
    Number(f64),
    // any run without whitespace, `(`, `)`, `,`, `"` and `#`
    Word(String),
    // # up to the end of the line
    Comment,

    LParen, // (
    RParen, // )
    Comma, // ,

    Eof,
}

impl Token {
    pub fn as_literal(&self) -> String {
        match self {
            Token::String(value) => format!("\"{value}\""),
            Token::Number(value) => format!("{value}"),
            Token::Word(name) => name.clone(),
            Token::Comment => "#".into(),
            Token::LParen => "(".into(),
            Token::RParen => ")".into(),
            Token::Comma => ",".into(),
            Token::Eof => "end of input".into(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_literal())
    }
}

/// Characters that end a word.
pub fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '(' | ')' | ',' | '"' | '#')
}
