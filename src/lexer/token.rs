use std::fmt;

use phf::phf_map;

/// Keyword table, matched case-sensitively against letter runs. REM is
/// handled separately by the lexer because it swallows the rest of the line.
pub(super) static KEYWORDS: phf::Map<&str, TokenKind> = phf_map! {
    "PRINT" => TokenKind::Print,
    "LET" => TokenKind::Let,
    "IF" => TokenKind::If,
    "THEN" => TokenKind::Then,
    "ELSE" => TokenKind::Else,
    "WHILE" => TokenKind::While,
    "DO" => TokenKind::Do,
    "STOP" => TokenKind::Stop,
    "END" => TokenKind::End,
};

/// Single-character operators and punctuation. `==` is matched greedily
/// before this table is consulted.
pub(super) static OPERATORS: phf::Map<char, TokenKind> = phf_map! {
    '+' => TokenKind::AddSub,
    '-' => TokenKind::AddSub,
    '*' => TokenKind::MulDiv,
    '/' => TokenKind::MulDiv,
    '=' => TokenKind::Equals,
    '<' => TokenKind::RelOp,
    '>' => TokenKind::RelOp,
    '(' => TokenKind::LeftParen,
    ')' => TokenKind::RightParen,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Print,
    Let,
    If,
    Then,
    Else,
    While,
    Do,
    Stop,
    End,

    Identifier,
    Integer,
    Float,
    Comment,

    AddSub,
    MulDiv,
    RelOp,
    Equals,
    LeftParen,
    RightParen,

    Eof,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}('{}')", self.kind, self.lexeme)
    }
}
