use std::collections::HashMap;

use crate::error::SqlStencilError;
use crate::statement::BoundStatement;

/// Flat mapping from case-folded statement id to its bound statement.
///
/// Registration happens on one initializing path; after population the
/// registry is read through shared references only. `register` takes
/// `&mut self` and `find` takes `&self`, so the compiler enforces that
/// no registration runs concurrently with lookups.
#[derive(Debug, Default)]
pub struct StatementRegistry {
    statements: HashMap<String, BoundStatement>,
}

impl StatementRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a bound statement under its case-folded id.
    ///
    /// # Errors
    ///
    /// Returns `SqlStencilError::DuplicateId` when a statement is already
    /// registered under an id folding to the same key; the registry is
    /// left unchanged.
    pub fn register(&mut self, statement: BoundStatement) -> Result<(), SqlStencilError> {
        let key = fold_id(statement.id());
        if self.statements.contains_key(&key) {
            return Err(SqlStencilError::DuplicateId(key));
        }
        tracing::debug!(id = %key, bindings = statement.bindings().len(), "registered statement");
        self.statements.insert(key, statement);
        Ok(())
    }

    /// Look up a statement; the probe id is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `SqlStencilError::NotFound` when no statement is
    /// registered under the folded id.
    pub fn find(&self, id: &str) -> Result<&BoundStatement, SqlStencilError> {
        self.statements
            .get(&fold_id(id))
            .ok_or_else(|| SqlStencilError::NotFound(id.to_string()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Registered (case-folded) ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.statements.keys().map(String::as_str)
    }
}

fn fold_id(id: &str) -> String {
    id.to_uppercase()
}
