use thiserror::Error;

use crate::lexer::{Token, TokenKind};

use super::{Program, Stmt};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnexpectedToken,
    UnexpectedEof,
    InvalidLiteral,
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message} at line {line}, near {token}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub token: Token,
    pub line: usize,
    pub message: String,
}

#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    /// program = stmt* EOF
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let mut stmts = vec![];

        while let Some(stmt) = self.parse_stmt()? {
            stmts.push(stmt);
        }

        Ok(Program(stmts))
    }

    /// stmt = "LET" ident "=" expression
    ///      | ident "=" expression
    ///      | "IF" expression "THEN" stmt ("ELSE" stmt)?
    ///      | "WHILE" expression "DO" stmt* "STOP"
    ///      | "PRINT" expression
    ///      | comment
    ///      | "END"
    ///
    /// Returns None when the cursor sits on EOF.
    fn parse_stmt(&mut self) -> Result<Option<Stmt>, ParseError> {
        let stmt = match self.peek().kind {
            TokenKind::Let => self.parse_let()?,
            TokenKind::If => self.parse_if()?,
            TokenKind::While => self.parse_while()?,
            TokenKind::Print => self.parse_print()?,
            TokenKind::Comment => self.parse_comment()?,
            TokenKind::End => self.parse_end()?,
            TokenKind::Identifier => self.parse_assignment()?,
            TokenKind::Eof => return Ok(None),
            _ => {
                return Err(self.error(ParseErrorKind::UnexpectedToken, "unknown statement"));
            }
        };

        Ok(Some(stmt))
    }

    /// IF/WHILE branches hold exactly one nested statement, so EOF is an
    /// error here rather than a graceful stop.
    fn parse_branch_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.parse_stmt()? {
            Some(stmt) => Ok(stmt),
            None => Err(self.error(ParseErrorKind::UnexpectedEof, "expected a statement")),
        }
    }

    fn parse_let(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::Let, "expected LET keyword")?;
        let name = self.expect(&TokenKind::Identifier, "expected an identifier")?;
        self.expect(&TokenKind::Equals, "expected '=' after the variable name")?;
        let value = self.parse_expression()?;

        Ok(Stmt::Let(name.lexeme, value))
    }

    fn parse_assignment(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect(&TokenKind::Identifier, "expected a variable name")?;
        self.expect(&TokenKind::Equals, "expected '=' after the variable name")?;
        let value = self.parse_expression()?;

        Ok(Stmt::Assignment(name.lexeme, value))
    }

    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::If, "expected IF keyword")?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::Then, "expected THEN after the condition")?;
        let then_branch = self.parse_branch_stmt()?;

        let else_branch = if self.consume(&TokenKind::Else) {
            Some(Box::new(self.parse_branch_stmt()?))
        } else {
            None
        };

        Ok(Stmt::If(condition, Box::new(then_branch), else_branch))
    }

    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::While, "expected WHILE keyword")?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::Do, "expected DO after the condition")?;

        let mut body = vec![];
        while !self.check(&TokenKind::Stop) {
            body.push(self.parse_branch_stmt()?);
        }
        self.expect(&TokenKind::Stop, "expected STOP to close the loop")?;

        Ok(Stmt::While(condition, body))
    }

    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::Print, "expected PRINT keyword")?;
        let expression = self.parse_expression()?;

        Ok(Stmt::Print(expression))
    }

    fn parse_comment(&mut self) -> Result<Stmt, ParseError> {
        let token = self.expect(&TokenKind::Comment, "expected a comment")?;

        Ok(Stmt::Comment(token.lexeme))
    }

    fn parse_end(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::End, "expected END keyword")?;

        Ok(Stmt::End)
    }

    pub(super) fn peek(&self) -> &Token {
        // The lexer always terminates the stream with an Eof token.
        &self.tokens[self.index.min(self.tokens.len() - 1)]
    }

    pub(super) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.index += 1;
        }
        token
    }

    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        &self.peek().kind == kind
    }

    pub(super) fn consume(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.index += 1;
            return true;
        }
        false
    }

    pub(super) fn expect(&mut self, kind: &TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            return Ok(self.advance());
        }

        let kind = if self.check(&TokenKind::Eof) {
            ParseErrorKind::UnexpectedEof
        } else {
            ParseErrorKind::UnexpectedToken
        };
        Err(self.error(kind, message))
    }

    pub(super) fn error(&self, kind: ParseErrorKind, message: &str) -> ParseError {
        let token = self.peek().clone();
        ParseError {
            kind,
            line: token.line,
            message: message.to_string(),
            token,
        }
    }
}
