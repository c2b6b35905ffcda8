use tracing::{debug, trace};

use crate::{
    error::{Reporter, ScanError},
    keywords::keyword,
    token::{Literal, Token, TokenType},
};

/// Converts one source string into tokens. Consumed by [`Scanner::scan_tokens`].
pub struct Scanner<'a> {
    source: &'a str,  // Source code.
    reporter: &'a mut dyn Reporter,  // Where scan errors go.
    tokens: Vec<Token>,  // Tokens that have been scanned from source code.
    start: usize,  // Byte offset of the start of the current token.
    current: usize,  // Byte offset of the *next* character to be scanned.
    line: usize,  // Keeps track of the current line number.
}

/// Scans `source` to completion, sending any errors to `reporter`.
pub fn scan(source: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
    Scanner::new(source, reporter).scan_tokens()
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, reporter: &'a mut dyn Reporter) -> Self {
        Self {
            source,
            reporter,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Interface function.
    /// Always returns the full token sequence, ending in a single `Eof` token.
    /// Malformed input is reported along the way and skipped.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            // Keep scanning until we reach the end of the file.
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token::new(TokenType::Eof, "", None, self.line));
        debug!(tokens = self.tokens.len(), lines = self.line, "scan finished");

        self.tokens
    }

    /// Consumes one token, or one piece of whitespace or comment.
    fn scan_token(&mut self) {
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Single-character tokens.
            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            '{' => self.add_token(TokenType::LeftBrace),
            '}' => self.add_token(TokenType::RightBrace),
            ',' => self.add_token(TokenType::Comma),
            '.' => self.add_token(TokenType::Dot),
            '-' => self.add_token(TokenType::Minus),
            '+' => self.add_token(TokenType::Plus),
            ';' => self.add_token(TokenType::Semicolon),
            '*' => self.add_token(TokenType::Star),

            // One or two character tokens.
            '!' => {
                if self.match_next('=') {
                    self.add_token(TokenType::BangEqual)
                } else {
                    self.add_token(TokenType::Bang)
                }
            },
            '=' => {
                if self.match_next('=') {
                    self.add_token(TokenType::EqualEqual)
                } else {
                    self.add_token(TokenType::Equal)
                }
            },
            '<' => {
                if self.match_next('=') {
                    self.add_token(TokenType::LessEqual)
                } else {
                    self.add_token(TokenType::Less)
                }
            },
            '>' => {
                if self.match_next('=') {
                    self.add_token(TokenType::GreaterEqual)
                } else {
                    self.add_token(TokenType::Greater)
                }
            },

            // Slash, or the start of a comment.
            '/' => {
                if self.match_next('/') {
                    self.line_comment();
                } else if self.match_next('*') {
                    self.block_comment();
                } else {
                    self.add_token(TokenType::Slash);
                }
            },

            // Literals.
            '"' => self.string(),
            '0'..='9' => self.number(),

            // Identifiers or keywords.
            'a'..='z' | 'A'..='Z' | '_' => self.identifier(),

            // Ignore these hidden characters.
            ' ' | '\r' | '\t' => (),

            '\n' => self.line += 1,

            other => self.error(ScanError::UnexpectedCharacter {
                character: other,
                line: self.line,
            }),
        }
    }

    /// Skips to the end of the line. The newline itself is left for `scan_token()`.
    fn line_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    /// Skips a `/* ... */` comment, which may contain nested block comments.
    /// The opening `/*` has already been consumed.
    fn block_comment(&mut self) {
        let mut depth = 1;

        while depth > 0 {
            match (self.peek(), self.peek_next()) {
                (None, _) => {
                    self.error(ScanError::UnterminatedBlockComment { line: self.line });
                    return;
                },
                (Some('/'), Some('*')) => {
                    self.advance();
                    self.advance();
                    depth += 1;
                },
                (Some('*'), Some('/')) => {
                    self.advance();
                    self.advance();
                    depth -= 1;
                },
                (Some('\n'), _) => {
                    self.advance();
                    self.line += 1;
                },
                _ => {
                    self.advance();
                },
            }
        }
    }

    /// Processes string literals. The token keeps the line of its opening quote.
    fn string(&mut self) {
        let start_line = self.line;

        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            // We have reached the end and there was no closing `"`.
            self.error(ScanError::UnterminatedString { line: self.line });
            return;
        }

        // Consume the closing `"`.
        self.advance();

        let value = &self.source[self.start + 1..self.current - 1];
        self.add_token_at(TokenType::String_, Some(Literal::String_(value.to_owned())), start_line);
    }

    /// Processes number literals.
    fn number(&mut self) {
        self.digits();

        if self.peek() == Some('.') && self.peek_next().is_some_and(is_digit) {
            // Consume `.` as part of the number only if it is followed by a digit.
            self.advance();
            self.digits();
        }

        // Digits with at most one inner `.` always parse.
        let value = self.source[self.start..self.current].parse::<f64>().unwrap_or_default();
        self.add_token_with_literal(TokenType::Number, Literal::Number(value));
    }

    fn digits(&mut self) {
        while self.peek().is_some_and(is_digit) {
            self.advance();
        }
    }

    /// Processes identifiers and keywords.
    fn identifier(&mut self) {
        while self.peek().is_some_and(is_alpha_numeric) {
            self.advance();
        }

        let lexeme = &self.source[self.start..self.current];
        let type_ = keyword(lexeme).unwrap_or(TokenType::Identifier);
        self.add_token(type_);
    }

    /// Consumes and returns the next character.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    /// Checks if the next character is `expected`. If so, consume it and return true.
    fn match_next(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the next character if there is one.
    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    /// Returns the character after next if there is one.
    fn peek_next(&self) -> Option<char> {
        self.source[self.current..].chars().nth(1)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn error(&mut self, error: ScanError) {
        trace!(?error, "scan error");
        self.reporter.report(error.line(), &error.to_string());
    }

    /// Adds a token that does not represent a literal value.
    fn add_token(&mut self, type_: TokenType) {
        self.add_token_at(type_, None, self.line);
    }

    fn add_token_with_literal(&mut self, type_: TokenType, literal: Literal) {
        self.add_token_at(type_, Some(literal), self.line);
    }

    /// Adds an entire token covering `start..current`.
    fn add_token_at(&mut self, type_: TokenType, literal: Option<Literal>, line: usize) {
        let lexeme = &self.source[self.start..self.current];
        self.tokens.push(Token::new(type_, lexeme, literal, line));
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alpha_numeric(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
