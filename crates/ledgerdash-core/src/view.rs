//! View-model structures for API responses
//!
//! The dashboard view normalizes every record into a signed numeric
//! amount and derives the account balance over the filtered set. The
//! detail view derives sign and status presentation for a single
//! record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TransactionKind};

/// Normalized dashboard row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardEntry {
    pub id: String,
    pub date: String,
    pub description: String,
    pub category: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Signed amount: negative for debits, positive for credits
    pub amount: Decimal,
}

/// Dashboard view over the currently filtered transaction set
#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardView {
    pub transactions: Vec<DashboardEntry>,
    /// Sum of signed amounts of exactly the filtered records
    pub balance: Decimal,
    /// Balance formatted for display (e.g. "$1,234.50")
    pub balance_display: String,
    pub total_count: usize,
}

/// Detail view for a single transaction
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionDetail {
    pub transaction: Transaction,
    /// Signed amount derived from the type field
    pub signed_amount: Decimal,
    /// Signed amount formatted for display
    pub amount_display: String,
    pub direction: TransactionKind,
    pub status_color: String,
    pub status_icon: String,
}

/// Delete confirmation response
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub transaction: Transaction,
}

/// Display color for a status string
pub fn status_color(status: &str) -> &'static str {
    match status {
        "Completed" => "green",
        "Pending" => "yellow",
        _ => "red",
    }
}

/// Display icon for a status string
pub fn status_icon(status: &str) -> &'static str {
    match status {
        "Completed" => "✅",
        "Pending" => "⏳",
        _ => "❌",
    }
}

// ==================== Tests ====================
