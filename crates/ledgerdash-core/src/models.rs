//! Core data models for the transaction ledger

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction direction
///
/// Authoritative for sign derivation: the persisted amount string is
/// an unsigned magnitude; debits count negative, credits positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money in
    Credit,
    /// Money out
    Debit,
}

impl Default for TransactionKind {
    fn default() -> Self {
        TransactionKind::Debit
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "credit" => Ok(TransactionKind::Credit),
            "debit" => Ok(TransactionKind::Debit),
            _ => Err(format!("Invalid transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Credit => write!(f, "credit"),
            TransactionKind::Debit => write!(f, "debit"),
        }
    }
}

/// Transaction record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction identifier
    pub id: String,
    /// Amount as a currency string, unsigned magnitude (e.g. "$123.45")
    pub amount: String,
    /// Transaction date (YYYY-MM-DD format)
    pub date: String,
    /// Status string; well-known values are Completed, Pending, Failed
    pub status: String,
    /// Transaction description
    pub description: String,
    /// Transaction direction
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Category label
    pub category: String,
}

impl Transaction {
    /// Get the transaction date as NaiveDate
    pub fn date_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Get the amount magnitude (if the stored string parses)
    pub fn amount_value(&self) -> Option<Decimal> {
        ledgerdash_utils::parse_currency(&self.amount)
    }

    /// Get the signed amount: negative for debits, positive for credits
    pub fn signed_amount(&self) -> Option<Decimal> {
        let magnitude = self.amount_value()?.abs();
        Some(match self.kind {
            TransactionKind::Debit => -magnitude,
            TransactionKind::Credit => magnitude,
        })
    }

    /// Get the id as a number (ids are assigned from a numeric counter)
    pub fn numeric_id(&self) -> Option<u64> {
        self.id.parse().ok()
    }
}

/// Fields accepted when creating a transaction
///
/// `amount` and `description` are required but modeled as options so a
/// missing field surfaces as a validation error rather than a
/// deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<TransactionKind>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Partial update for a transaction
///
/// Present fields override the stored record; absent fields are
/// retained. The record id is not part of the patch and cannot change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionPatch {
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<TransactionKind>,
    #[serde(default)]
    pub category: Option<String>,
}

impl TransactionPatch {
    /// Shallow-merge the patch onto an existing record
    pub fn apply(&self, tx: &mut Transaction) {
        if let Some(amount) = &self.amount {
            tx.amount = amount.clone();
        }
        if let Some(description) = &self.description {
            tx.description = description.clone();
        }
        if let Some(date) = &self.date {
            tx.date = date.clone();
        }
        if let Some(status) = &self.status {
            tx.status = status.clone();
        }
        if let Some(kind) = self.kind {
            tx.kind = kind;
        }
        if let Some(category) = &self.category {
            tx.category = category.clone();
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample() -> Transaction {
        Transaction {
            id: "1".to_string(),
            amount: "$50.00".to_string(),
            date: "2024-01-01".to_string(),
            status: "Completed".to_string(),
            description: "Deposit".to_string(),
            kind: TransactionKind::Credit,
            category: "Income".to_string(),
        }
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            "credit".parse::<TransactionKind>().unwrap(),
            TransactionKind::Credit
        );
        assert_eq!(
            "DEBIT".parse::<TransactionKind>().unwrap(),
            TransactionKind::Debit
        );
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_kind_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Credit).unwrap(),
            "\"credit\""
        );
        let kind: TransactionKind = serde_json::from_str("\"debit\"").unwrap();
        assert_eq!(kind, TransactionKind::Debit);
    }

    #[test]
    fn test_transaction_serde_uses_type_key() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "credit");
        assert!(json.get("kind").is_none());

        let parsed: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_signed_amount_credit_positive() {
        let tx = sample();
        assert_eq!(
            tx.signed_amount(),
            Some(rust_decimal::Decimal::from_str("50.00").unwrap())
        );
    }

    #[test]
    fn test_signed_amount_debit_negative() {
        let mut tx = sample();
        tx.kind = TransactionKind::Debit;
        assert_eq!(
            tx.signed_amount(),
            Some(rust_decimal::Decimal::from_str("-50.00").unwrap())
        );
    }

    #[test]
    fn test_signed_amount_ignores_stored_sign() {
        // The type field is authoritative even if the magnitude was
        // stored with a stray sign.
        let mut tx = sample();
        tx.amount = "-$50.00".to_string();
        tx.kind = TransactionKind::Credit;
        assert_eq!(
            tx.signed_amount(),
            Some(rust_decimal::Decimal::from_str("50.00").unwrap())
        );
    }

    #[test]
    fn test_signed_amount_unparseable() {
        let mut tx = sample();
        tx.amount = "fifty".to_string();
        assert_eq!(tx.signed_amount(), None);
    }

    #[test]
    fn test_patch_apply_overrides_present_fields_only() {
        let mut tx = sample();
        let patch = TransactionPatch {
            status: Some("Failed".to_string()),
            ..TransactionPatch::default()
        };
        patch.apply(&mut tx);

        assert_eq!(tx.status, "Failed");
        assert_eq!(tx.id, "1");
        assert_eq!(tx.amount, "$50.00");
        assert_eq!(tx.description, "Deposit");
    }

    #[test]
    fn test_patch_ignores_unknown_id_field() {
        // A client-supplied id in the body has no patch field to land
        // in, so the stored id survives an update unchanged.
        let patch: TransactionPatch =
            serde_json::from_str(r#"{"id": "99", "status": "Completed"}"#).unwrap();
        let mut tx = sample();
        patch.apply(&mut tx);
        assert_eq!(tx.id, "1");
        assert_eq!(tx.status, "Completed");
    }

    #[test]
    fn test_date_naive() {
        assert!(sample().date_naive().is_some());
        let mut tx = sample();
        tx.date = "January 1".to_string();
        assert!(tx.date_naive().is_none());
    }
}
