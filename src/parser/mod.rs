mod ast;
mod expr;
mod parser;

pub use ast::*;
pub use parser::*;
