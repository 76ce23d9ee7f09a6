use pretty_assertions::assert_eq;

use super::prelude::{LexResult, Lexer, LexicalError, LexicalErrorType, Token};

fn tokens(input: &str) -> Result<Vec<Token>, LexicalError> {
    Lexer::from_source(input)
        .map(|res: LexResult| res.map(|(_, token, _)| token))
        .collect()
}

#[test]
fn test_application() -> Result<(), LexicalError> {
    let input = r#"print("total:", +(a, 10))"#;

    assert_eq!(tokens(input)?, vec![
        Token::Word("print".into()),
        Token::LParen,
        Token::String("total:".into()),
        Token::Comma,
        Token::Word("+".into()),
        Token::LParen,
        Token::Word("a".into()),
        Token::Comma,
        Token::Number(10.0),
        Token::RParen,
        Token::RParen,
        Token::Eof,
    ]);

    Ok(())
}

#[test]
fn test_numbers_need_word_boundary() -> Result<(), LexicalError> {
    let input = "12 12abc 7_ 3+ 42";

    assert_eq!(tokens(input)?, vec![
        Token::Number(12.0),
        Token::Word("12abc".into()),
        Token::Word("7_".into()),
        Token::Number(3.0),
        Token::Word("+".into()),
        Token::Number(42.0),
        Token::Eof,
    ]);

    Ok(())
}

#[test]
fn test_long_digit_runs_saturate() -> Result<(), LexicalError> {
    let input = format!("{} 0007", "9".repeat(400));

    assert_eq!(tokens(&input)?, vec![
        Token::Number(f64::INFINITY),
        Token::Number(7.0),
        Token::Eof,
    ]);

    Ok(())
}

#[test]
fn test_words_stop_at_delimiters() -> Result<(), LexicalError> {
    let input = "a.b<=c,==\"x\"";

    assert_eq!(tokens(input)?, vec![
        Token::Word("a.b<=c".into()),
        Token::Comma,
        Token::Word("==".into()),
        Token::String("x".into()),
        Token::Eof,
    ]);

    Ok(())
}

#[test]
fn test_strings_have_no_escapes() -> Result<(), LexicalError> {
    let input = r#""a\n # b" """#;

    assert_eq!(tokens(input)?, vec![
        Token::String(r"a\n # b".into()),
        Token::String("".into()),
        Token::Eof,
    ]);

    Ok(())
}

#[test]
fn test_comments() -> Result<(), LexicalError> {
    let input = "# leading\nx # trailing\n  # last";

    assert_eq!(tokens(input)?, vec![
        Token::Comment,
        Token::Word("x".into()),
        Token::Comment,
        Token::Comment,
        Token::Eof,
    ]);

    Ok(())
}

#[test]
fn test_spans() {
    let mut lexer = Lexer::from_source("  héllo(\"ü\")");

    let spans = std::iter::from_fn(|| lexer.next())
        .map(|res| res.map(|(start, _, end)| (start, end)))
        .collect::<Result<Vec<_>, _>>();

    assert_eq!(spans, Ok(vec![(2, 8), (8, 9), (9, 13), (13, 14), (14, 14)]));
}

#[test]
fn test_unterminated_string() {
    let mut lexer = Lexer::from_source("x \"never closed");

    assert!(matches!(lexer.next(), Some(Ok((_, Token::Word(_), _)))));

    let err = lexer.next_token().unwrap_err();

    assert_eq!(err.error, LexicalErrorType::UnterminatedString);
    assert_eq!(err.location.start, 2);
    assert_eq!(err.location.end, 15);
}

#[test]
fn test_iterator_stops_after_eof() {
    let lexer = Lexer::from_source("a");

    assert_eq!(lexer.count(), 2);
}
