pub mod analyzer;
pub mod codegen;
pub mod lexer;
pub mod optimizer;
pub mod parser;

use analyzer::{SemanticError, SemanticVisitor};
use codegen::Codegen;
use lexer::{LexError, Lexer};
use parser::{ParseError, Parser};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CompileError {
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Semantic error: {0}")]
    Semantic(#[from] SemanticError),
}

/// Generated JavaScript plus the non-fatal diagnostics collected on the way.
#[derive(Clone, Debug, PartialEq)]
pub struct CompileOutput {
    pub code: String,
    pub warnings: Vec<String>,
}

/// Runs the whole pipeline over one source text.
///
/// The optimizer runs before analysis, so statements after a top-level END
/// are neither validated nor emitted.
pub fn compile(source: &str) -> Result<CompileOutput, CompileError> {
    let tokens = Lexer::tokenize(source)?;

    let mut parser = Parser::new(tokens);
    let program = parser.parse()?;
    let program = optimizer::optimize(program);

    let mut visitor = SemanticVisitor::new();
    visitor.visit_program(&program)?;
    let warnings = visitor.unused_variables();

    let codegen = Codegen::new();
    let code = codegen.generate(&program);

    Ok(CompileOutput { code, warnings })
}
