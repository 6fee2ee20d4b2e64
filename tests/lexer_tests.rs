use anise::{CalcError, Lexer, Token};

fn tokens(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize().unwrap()
}

#[test]
fn test_numbers_and_operators() {
    assert_eq!(
        tokens("2 + 3.5 * 4"),
        vec![
            Token::Number("2".to_string()),
            Token::Symbol('+'),
            Token::Number("3.5".to_string()),
            Token::Symbol('*'),
            Token::Number("4".to_string()),
        ]
    );
}

#[test]
fn test_leading_decimal_point() {
    assert_eq!(
        tokens(".5 + 2"),
        vec![
            Token::Number(".5".to_string()),
            Token::Symbol('+'),
            Token::Number("2".to_string()),
        ]
    );
}

#[test]
fn test_quoted_identifier_strips_quotes() {
    assert_eq!(
        tokens("\"Confidence Index\" + 1"),
        vec![
            Token::Quoted("Confidence Index".to_string()),
            Token::Symbol('+'),
            Token::Number("1".to_string()),
        ]
    );
}

#[test]
fn test_unterminated_quote_is_an_error() {
    let err = Lexer::new("\"Confidence").tokenize().unwrap_err();
    assert_eq!(err, CalcError::UnrecognizedItem("\"Confidence".to_string()));
}

#[test]
fn test_bare_words_keep_interior_spaces() {
    assert_eq!(
        tokens("Confidence Index * 2"),
        vec![
            Token::Word("Confidence Index".to_string()),
            Token::Symbol('*'),
            Token::Number("2".to_string()),
        ]
    );
}

#[test]
fn test_words_may_contain_digits_and_underscores() {
    assert_eq!(
        tokens("log10 + Phases_2"),
        vec![
            Token::Word("log10".to_string()),
            Token::Symbol('+'),
            Token::Word("Phases_2".to_string()),
        ]
    );
}

#[test]
fn test_component_index_token() {
    assert_eq!(
        tokens("B[1]"),
        vec![Token::Word("B".to_string()), Token::Index(1)]
    );
}

#[test]
fn test_malformed_index_scans_as_single_characters() {
    assert_eq!(
        tokens("B[x]"),
        vec![
            Token::Word("B".to_string()),
            Token::Symbol('['),
            Token::Word("x".to_string()),
            Token::Symbol(']'),
        ]
    );
}

#[test]
fn test_function_call_shape() {
    assert_eq!(
        tokens("sin(x)"),
        vec![
            Token::Word("sin".to_string()),
            Token::Symbol('('),
            Token::Word("x".to_string()),
            Token::Symbol(')'),
        ]
    );
}

#[test]
fn test_empty_expression() {
    assert_eq!(
        Lexer::new("").tokenize().unwrap_err(),
        CalcError::EmptyExpression
    );
    assert_eq!(
        Lexer::new("   ").tokenize().unwrap_err(),
        CalcError::EmptyExpression
    );
}

#[test]
fn test_tokens_preserve_source_order() {
    assert_eq!(
        tokens("-(2 / x)"),
        vec![
            Token::Symbol('-'),
            Token::Symbol('('),
            Token::Number("2".to_string()),
            Token::Symbol('/'),
            Token::Word("x".to_string()),
            Token::Symbol(')'),
        ]
    );
}
