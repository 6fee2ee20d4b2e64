use crate::ast::Token;
use crate::error::CalcError;

/// Hand-written scanner for infix expressions.
///
/// Scanning rules, tried in order at each position:
///
/// 1. a double-quoted run (closing quote required) is one identifier
///    token with the quotes stripped;
/// 2. a digit run with at most one decimal point (which may lead, when a
///    digit follows) is one numeric token;
/// 3. `[` digits `]` is one component-index token;
/// 4. a run of word characters and interior spaces not starting with a
///    digit is one bare-word token, so array names containing spaces
///    scan as a single token;
/// 5. anything else is a single-character token.
///
/// Whitespace between tokens is skipped.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_quoted(&mut self) -> Result<Token, CalcError> {
        self.advance(); // consume opening quote

        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch == '"' {
                self.advance();
                return Ok(Token::Quoted(result));
            }
            result.push(ch);
            self.advance();
        }

        Err(CalcError::UnrecognizedItem(format!("\"{}", result)))
    }

    fn read_number(&mut self) -> Token {
        let mut number = String::new();
        let mut has_point = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.'
                && !has_point
                && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
            {
                has_point = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::Number(number)
    }

    /// Try to read `[` digits `]` as one index token. Leaves the position
    /// untouched and returns `None` when the bracket run is malformed, so
    /// the `[` falls through as a single-character token.
    fn read_index(&mut self) -> Option<Token> {
        let mut offset = 1;
        let mut digits = String::new();
        while let Some(ch) = self.peek_char(offset) {
            if ch.is_ascii_digit() {
                digits.push(ch);
                offset += 1;
            } else {
                break;
            }
        }

        if digits.is_empty() || self.peek_char(offset) != Some(']') {
            return None;
        }

        let index: usize = match digits.parse() {
            Ok(index) => index,
            Err(_) => return None,
        };
        for _ in 0..=offset {
            self.advance();
        }
        Some(Token::Index(index))
    }

    fn read_word(&mut self) -> Token {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' || ch == ' ' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // give back any trailing spaces; the token ends on a word character
        let trimmed = result.trim_end();
        self.position -= result.chars().count() - trimmed.chars().count();
        Token::Word(trimmed.to_string())
    }

    /// Scan the whole input into tokens.
    pub fn tokenize(mut self) -> Result<Vec<Token>, CalcError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            let Some(ch) = self.current_char() else { break };

            let token = match ch {
                '"' => self.read_quoted()?,
                c if c.is_ascii_digit() => self.read_number(),
                '.' if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => {
                    self.read_number()
                }
                '[' => match self.read_index() {
                    Some(token) => token,
                    None => {
                        self.advance();
                        Token::Symbol('[')
                    }
                },
                c if c.is_alphabetic() || c == '_' => self.read_word(),
                c => {
                    self.advance();
                    Token::Symbol(c)
                }
            };
            tokens.push(token);
        }

        if tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }
        Ok(tokens)
    }
}

#[test]
fn test_index_after_word() {
    let tokens = Lexer::new("Euler Angles[2]").tokenize().unwrap();
    assert_eq!(
        tokens,
        vec![Token::Word("Euler Angles".to_string()), Token::Index(2)]
    );
}

#[test]
fn test_number_with_second_point() {
    let tokens = Lexer::new("2.5.3").tokenize().unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Number("2.5".to_string()),
            Token::Number(".3".to_string()),
        ]
    );
}
