use thiserror::Error;

use crate::parser::{Expr, Program, Stmt};

use super::SymbolTable;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SemanticError {
    #[error("variable '{0}' is already declared")]
    AlreadyDeclared(String),

    #[error("variable '{0}' is not declared")]
    NotDeclared(String),

    #[error("condition in {0} statement must be a comparison (==, <, >)")]
    ConditionNotComparison(&'static str),
}

/// Pre-order walk over the program, failing on the first rule violation.
#[derive(Debug, Default)]
pub struct SemanticVisitor {
    symbol_table: SymbolTable,
}

impl SemanticVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visit_program(&mut self, program: &Program) -> Result<(), SemanticError> {
        for stmt in &program.0 {
            self.visit_stmt(stmt)?;
        }
        Ok(())
    }

    /// One warning per declared-but-never-read variable. Only meaningful
    /// after a successful `visit_program` pass; order follows the symbol
    /// table's iteration and is unspecified.
    pub fn unused_variables(&self) -> Vec<String> {
        self.symbol_table
            .entries()
            .filter(|entry| !entry.used)
            .map(|entry| format!("variable '{}' is declared but never used", entry.name))
            .collect()
    }

    fn visit_stmt(&mut self, stmt: &Stmt) -> Result<(), SemanticError> {
        match stmt {
            Stmt::Print(expression) => self.visit_expr(expression),
            Stmt::Let(name, value) => self.visit_let(name, value),
            Stmt::Assignment(name, value) => self.symbol_table.assign(name, value.clone()),
            Stmt::If(condition, then_branch, else_branch) => {
                self.visit_if(condition, then_branch, else_branch.as_deref())
            }
            Stmt::While(condition, body) => self.visit_while(condition, body),
            Stmt::Comment(_) | Stmt::End => Ok(()),
        }
    }

    /// The name is declared before its initializer is validated, so the
    /// initializer may read the variable being declared.
    fn visit_let(&mut self, name: &str, value: &Expr) -> Result<(), SemanticError> {
        self.symbol_table.declare(name, value.clone())?;
        self.visit_expr(value)
    }

    fn visit_if(
        &mut self,
        condition: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
    ) -> Result<(), SemanticError> {
        self.visit_condition(condition, "IF")?;
        self.visit_stmt(then_branch)?;

        if let Some(else_branch) = else_branch {
            self.visit_stmt(else_branch)?;
        }

        Ok(())
    }

    fn visit_while(&mut self, condition: &Expr, body: &[Stmt]) -> Result<(), SemanticError> {
        self.visit_condition(condition, "WHILE")?;

        for stmt in body {
            self.visit_stmt(stmt)?;
        }

        Ok(())
    }

    /// The shape check runs before identifier resolution, so a bare
    /// identifier condition reports the comparison error even when the
    /// identifier is undeclared.
    fn visit_condition(
        &mut self,
        condition: &Expr,
        keyword: &'static str,
    ) -> Result<(), SemanticError> {
        if !condition.is_comparison() {
            return Err(SemanticError::ConditionNotComparison(keyword));
        }
        self.visit_expr(condition)
    }

    fn visit_expr(&mut self, expr: &Expr) -> Result<(), SemanticError> {
        match expr {
            Expr::Integer(_) | Expr::Float(_) => Ok(()),
            Expr::Ident(name) => self.symbol_table.mark_used(name),
            Expr::Binary(_, left, right) => {
                self.visit_expr(left)?;
                self.visit_expr(right)
            }
        }
    }
}
