use crate::parser::{Program, Stmt};

/// Drops every top-level statement after the first top-level END. Statements
/// up to and including it are kept in order; IF/WHILE bodies are left alone.
/// Idempotent.
pub fn optimize(program: Program) -> Program {
    let mut stmts = vec![];

    for stmt in program.0 {
        let is_end = stmt == Stmt::End;
        stmts.push(stmt);
        if is_end {
            break;
        }
    }

    Program(stmts)
}
