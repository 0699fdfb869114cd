use thiserror::Error;

use super::token::{KEYWORDS, OPERATORS};
use super::{Token, TokenKind};

#[derive(Clone, Debug, Error, PartialEq)]
#[error("unexpected character '{ch}' at line {line}, position {position}")]
pub struct LexError {
    pub position: usize,
    pub line: usize,
    pub ch: char,
}

/// Single forward pass over the source, O(n) in its length.
#[derive(Debug)]
pub struct Lexer {
    tokens: Vec<Token>,
    index: usize,
    line: usize,
}

impl Lexer {
    fn new() -> Self {
        Self {
            tokens: vec![],
            index: 0,
            line: 1,
        }
    }

    pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
        let mut lexer = Lexer::new();
        lexer.scan(source)?;
        Ok(lexer.tokens)
    }

    fn new_token(&mut self, kind: TokenKind, lexeme: &str) {
        self.tokens.push(Token {
            kind,
            lexeme: lexeme.to_string(),
            line: self.line,
        });
        self.index += lexeme.chars().count();
    }

    fn scan(&mut self, source: &str) -> Result<(), LexError> {
        let chars: Vec<char> = source.chars().collect();

        while self.index < chars.len() {
            let c = chars[self.index];

            if c == '\n' {
                self.line += 1;
                self.index += 1;
            } else if c.is_whitespace() {
                self.index += 1;
            } else if c.is_ascii_digit() {
                self.scan_number(&chars[self.index..]);
            } else if c.is_alphabetic() {
                self.scan_word(&chars[self.index..]);
            } else if c == '=' && chars.get(self.index + 1) == Some(&'=') {
                self.new_token(TokenKind::RelOp, "==");
            } else if let Some(kind) = OPERATORS.get(&c) {
                self.new_token(kind.clone(), &c.to_string());
            } else {
                return Err(LexError {
                    position: self.index,
                    line: self.line,
                    ch: c,
                });
            }
        }

        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: "EOF".to_string(),
            line: self.line,
        });
        Ok(())
    }

    fn scan_number(&mut self, chars: &[char]) {
        let mut s: String = chars.iter().take_while(|c| c.is_ascii_digit()).collect();

        let rest = &chars[s.len()..];
        if rest.first() == Some(&'.') && rest.get(1).is_some_and(|c| c.is_ascii_digit()) {
            s.push('.');
            s.extend(rest[1..].iter().take_while(|c| c.is_ascii_digit()));
            self.new_token(TokenKind::Float, &s);
        } else {
            self.new_token(TokenKind::Integer, &s);
        }
    }

    fn scan_word(&mut self, chars: &[char]) {
        let word: String = chars.iter().take_while(|c| c.is_alphabetic()).collect();

        if word == "REM" {
            return self.scan_comment(&chars[word.len()..], word.len());
        }

        if let Some(kind) = KEYWORDS.get(word.as_str()) {
            self.new_token(kind.clone(), &word);
        } else {
            self.new_token(TokenKind::Identifier, &word);
        }
    }

    /// Captures everything after REM up to (not including) the newline. One
    /// separating space is stripped from the comment text.
    fn scan_comment(&mut self, rest: &[char], keyword_len: usize) {
        let raw: String = rest.iter().take_while(|&&c| c != '\n').collect();
        self.index += keyword_len + raw.chars().count();

        let text = raw.strip_prefix(' ').unwrap_or(&raw);
        self.tokens.push(Token {
            kind: TokenKind::Comment,
            lexeme: text.to_string(),
            line: self.line,
        });
    }
}
