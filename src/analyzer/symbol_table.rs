use std::collections::HashMap;

use crate::parser::Expr;

use super::SemanticError;

#[derive(Clone, Debug, PartialEq)]
pub struct SymbolEntry {
    pub name: String,
    pub value: Expr,
    pub used: bool,
}

/// Per-compilation mapping from declared name to its last-assigned value
/// expression and a used flag. Iteration order is unspecified.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    variables: HashMap<String, SymbolEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: &str, value: Expr) -> Result<(), SemanticError> {
        if self.variables.contains_key(name) {
            return Err(SemanticError::AlreadyDeclared(name.to_string()));
        }

        let entry = SymbolEntry {
            name: name.to_string(),
            value,
            used: false,
        };
        self.variables.insert(name.to_string(), entry);
        Ok(())
    }

    pub fn assign(&mut self, name: &str, value: Expr) -> Result<(), SemanticError> {
        match self.variables.get_mut(name) {
            Some(entry) => {
                entry.value = value;
                Ok(())
            }
            None => Err(SemanticError::NotDeclared(name.to_string())),
        }
    }

    /// Resolves an identifier read, marking the symbol as used.
    pub fn mark_used(&mut self, name: &str) -> Result<(), SemanticError> {
        match self.variables.get_mut(name) {
            Some(entry) => {
                entry.used = true;
                Ok(())
            }
            None => Err(SemanticError::NotDeclared(name.to_string())),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.variables.values()
    }
}
