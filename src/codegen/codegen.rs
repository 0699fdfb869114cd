use crate::parser::{Expr, Program, Stmt};

/// Emits JavaScript, one line per top-level statement. Total over any
/// syntactically valid AST; generation never fails.
#[derive(Debug, Default)]
pub struct Codegen {
    output: String,
}

impl Codegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(mut self, program: &Program) -> String {
        for stmt in &program.0 {
            let line = self.gen_stmt(stmt);
            self.output.push_str(&line);
            self.output.push('\n');
        }

        self.output
    }

    fn gen_stmt(&self, stmt: &Stmt) -> String {
        match stmt {
            Stmt::Print(expression) => format!("console.log({});", self.gen_expr(expression, false)),
            Stmt::Let(name, value) => format!("let {} = {};", name, self.gen_expr(value, false)),
            Stmt::Assignment(name, value) => format!("{} = {};", name, self.gen_expr(value, false)),
            Stmt::If(condition, then_branch, else_branch) => {
                self.gen_if(condition, then_branch, else_branch.as_deref())
            }
            Stmt::While(condition, body) => self.gen_while(condition, body),
            Stmt::Comment(text) => format!("// {}", text),
            Stmt::End => "process.exit(0);".to_string(),
        }
    }

    fn gen_if(&self, condition: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) -> String {
        let mut s = format!(
            "if ({}) {{\n\t{}\n}}",
            self.gen_expr(condition, false),
            self.gen_stmt(then_branch)
        );

        if let Some(else_branch) = else_branch {
            s.push_str(&format!(" else {{\n\t{}\n}}", self.gen_stmt(else_branch)));
        }

        s
    }

    fn gen_while(&self, condition: &Expr, body: &[Stmt]) -> String {
        let body: String = body
            .iter()
            .map(|stmt| format!("\t{}\n", self.gen_stmt(stmt)))
            .collect();

        format!("while ({}) {{\n{}}}", self.gen_expr(condition, false), body)
    }

    /// `nested` is true when the expression sits inside another binary
    /// expression; those get wrapped in parentheses so the source precedence
    /// survives textually regardless of JavaScript's own precedence rules.
    fn gen_expr(&self, expr: &Expr, nested: bool) -> String {
        match expr {
            Expr::Integer(value) => value.to_string(),
            Expr::Float(value) => value.to_string(),
            Expr::Ident(name) => name.clone(),
            Expr::Binary(op, left, right) => {
                let left = self.gen_expr(left, true);
                let right = self.gen_expr(right, true);
                if nested {
                    format!("({} {} {})", left, op, right)
                } else {
                    format!("{} {} {}", left, op, right)
                }
            }
        }
    }
}
