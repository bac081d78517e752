//! Shared filter contract for transaction queries
//!
//! One pure filter definition backs both the HTTP query layer and the
//! dashboard view-model, so search semantics cannot drift between the
//! two.

use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Search and status filter over the transaction collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilter {
    /// Case-insensitive substring match on description or category
    #[serde(default)]
    pub search: Option<String>,
    /// Case-insensitive status equality; "all" disables the predicate
    #[serde(default)]
    pub status: Option<String>,
}

impl TransactionFilter {
    /// Filter by search term only
    pub fn search(term: &str) -> Self {
        Self {
            search: Some(term.to_string()),
            status: None,
        }
    }

    /// Filter by status only
    pub fn status(status: &str) -> Self {
        Self {
            search: None,
            status: Some(status.to_string()),
        }
    }

    /// Check whether a single record passes the filter
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(term) = self.search.as_deref() {
            if !term.is_empty() {
                let term = term.to_lowercase();
                let hit = tx.description.to_lowercase().contains(&term)
                    || tx.category.to_lowercase().contains(&term);
                if !hit {
                    return false;
                }
            }
        }

        if let Some(status) = self.status.as_deref() {
            if !status.is_empty()
                && !status.eq_ignore_ascii_case("all")
                && !tx.status.eq_ignore_ascii_case(status)
            {
                return false;
            }
        }

        true
    }

    /// Apply the filter, preserving storage order
    pub fn apply(&self, records: &[Transaction]) -> Vec<Transaction> {
        records
            .iter()
            .filter(|tx| self.matches(tx))
            .cloned()
            .collect()
    }
}

// ==================== Tests ====================
