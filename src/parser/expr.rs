use crate::lexer::{Token, TokenKind};

use super::{BinOpKind, Expr, ParseError, ParseErrorKind, Parser};

impl Parser {
    /// expression = term (("==" | "<" | ">") term)*
    pub(super) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;

        while self.check(&TokenKind::RelOp) {
            let op = self.binop()?;
            let right = self.parse_term()?;
            left = Expr::Binary(op, Box::new(left), Box::new(right));
        }

        Ok(left)
    }

    /// term = factor (("+" | "-") factor)*
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;

        while self.check(&TokenKind::AddSub) {
            let op = self.binop()?;
            let right = self.parse_factor()?;
            left = Expr::Binary(op, Box::new(left), Box::new(right));
        }

        Ok(left)
    }

    /// factor = primary (("*" | "/") primary)*
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_primary()?;

        while self.check(&TokenKind::MulDiv) {
            let op = self.binop()?;
            let right = self.parse_primary()?;
            left = Expr::Binary(op, Box::new(left), Box::new(right));
        }

        Ok(left)
    }

    /// primary = INTEGER | FLOAT | IDENTIFIER | "(" expression ")"
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.peek().kind {
            TokenKind::Integer => {
                let token = self.advance();
                integer_literal(token)
            }
            TokenKind::Float => {
                let token = self.advance();
                float_literal(token)
            }
            TokenKind::Identifier => {
                let token = self.advance();
                Ok(Expr::Ident(token.lexeme))
            }
            TokenKind::LeftParen => {
                self.advance();
                let expression = self.parse_expression()?;
                self.expect(&TokenKind::RightParen, "expected closing parenthesis")?;
                Ok(expression)
            }
            _ => Err(self.error(ParseErrorKind::UnexpectedToken, "expected an expression")),
        }
    }

    fn binop(&mut self) -> Result<BinOpKind, ParseError> {
        let token = self.advance();
        BinOpKind::from_lexeme(&token.lexeme).ok_or_else(|| ParseError {
            kind: ParseErrorKind::UnexpectedToken,
            line: token.line,
            message: "expected a binary operator".to_string(),
            token,
        })
    }
}

fn integer_literal(token: Token) -> Result<Expr, ParseError> {
    match token.lexeme.parse() {
        Ok(value) => Ok(Expr::Integer(value)),
        Err(_) => Err(ParseError {
            kind: ParseErrorKind::InvalidLiteral,
            line: token.line,
            message: "integer literal out of range".to_string(),
            token,
        }),
    }
}

fn float_literal(token: Token) -> Result<Expr, ParseError> {
    match token.lexeme.parse() {
        Ok(value) => Ok(Expr::Float(value)),
        Err(_) => Err(ParseError {
            kind: ParseErrorKind::InvalidLiteral,
            line: token.line,
            message: "malformed float literal".to_string(),
            token,
        }),
    }
}
