//! Core ledger operations and business logic
//!
//! Every operation follows the same whole-document cycle: load the
//! full collection from the store, operate in memory, persist the
//! full collection back. The `Ledger` is intended to sit behind a
//! single shared lock (see ledgerdash-api); mutating operations take
//! `&mut self` so the lock's write guard serializes every
//! read-modify-write cycle.

pub mod error;
pub mod filter;
pub mod models;
pub mod view;

use ledgerdash_config::Config;
use ledgerdash_store::StoreRef;
use rust_decimal::Decimal;

pub use error::{CoreError, CoreResult, ErrorCode, ErrorSeverity};
pub use filter::TransactionFilter;
pub use models::{NewTransaction, Transaction, TransactionKind, TransactionPatch};
pub use view::{DashboardEntry, DashboardView, DeleteResponse, TransactionDetail};

/// Shared store reference specialized to transaction records
pub type TransactionStoreRef = StoreRef<Transaction>;

/// Default status for new transactions
pub const DEFAULT_STATUS: &str = "Pending";

/// Default category for new transactions
pub const DEFAULT_CATEGORY: &str = "Other";

/// Main ledger facade over the document store
pub struct Ledger {
    config: Config,
    store: TransactionStoreRef,
}

impl Ledger {
    /// Create a new ledger with config and store
    pub fn new(config: Config, store: TransactionStoreRef) -> Self {
        Self { config, store }
    }

    /// Get the active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load the collection and count its records
    ///
    /// Used as a startup probe; failures are the caller's to report.
    pub async fn record_count(&self) -> CoreResult<usize> {
        let records = self.store.load().await?;
        Ok(records.len())
    }

    // ==================== Transaction Operations ====================

    /// List transactions matching the filter, in storage order
    pub async fn list(&self, filter: &TransactionFilter) -> CoreResult<Vec<Transaction>> {
        let records = self.store.load().await?;
        Ok(filter.apply(&records))
    }

    /// Get a single transaction by exact id match
    pub async fn get(&self, id: &str) -> CoreResult<Transaction> {
        let records = self.store.load().await?;
        records
            .into_iter()
            .find(|tx| tx.id == id)
            .ok_or_else(|| CoreError::TransactionNotFound { id: id.to_string() })
    }

    /// Create a transaction, filling defaults and assigning an id
    pub async fn create(&mut self, new: NewTransaction) -> CoreResult<Transaction> {
        let amount = new.amount.unwrap_or_default();
        let description = new.description.unwrap_or_default();
        if amount.is_empty() || description.is_empty() {
            return Err(CoreError::ValidationError {
                message: "Amount and description are required".to_string(),
            });
        }

        let mut records = self.store.load().await?;

        let tx = Transaction {
            id: next_id(&records),
            amount,
            date: non_empty(new.date).unwrap_or_else(today),
            status: non_empty(new.status).unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            description,
            kind: new.kind.unwrap_or_default(),
            category: non_empty(new.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        };

        records.push(tx.clone());
        self.store.save(&records).await?;

        log::info!("Created transaction {} ({})", tx.id, tx.description);
        Ok(tx)
    }

    /// Shallow-merge a patch onto an existing transaction
    pub async fn update(&mut self, id: &str, patch: TransactionPatch) -> CoreResult<Transaction> {
        let mut records = self.store.load().await?;
        let position = records
            .iter()
            .position(|tx| tx.id == id)
            .ok_or_else(|| CoreError::TransactionNotFound { id: id.to_string() })?;

        patch.apply(&mut records[position]);
        let tx = records[position].clone();

        self.store.save(&records).await?;

        log::info!("Updated transaction {}", tx.id);
        Ok(tx)
    }

    /// Remove a transaction, returning the removed record
    pub async fn remove(&mut self, id: &str) -> CoreResult<Transaction> {
        let mut records = self.store.load().await?;
        let position = records
            .iter()
            .position(|tx| tx.id == id)
            .ok_or_else(|| CoreError::TransactionNotFound { id: id.to_string() })?;

        let tx = records.remove(position);
        self.store.save(&records).await?;

        log::info!("Deleted transaction {}", tx.id);
        Ok(tx)
    }

    // ==================== View-Models ====================

    /// Build the dashboard view over the filtered set
    pub async fn dashboard(&self, filter: &TransactionFilter) -> CoreResult<DashboardView> {
        let records = self.list(filter).await?;

        let mut transactions = Vec::with_capacity(records.len());
        let mut balance = Decimal::ZERO;

        for tx in records {
            let amount = tx
                .signed_amount()
                .ok_or_else(|| CoreError::InvalidAmount {
                    value: tx.amount.clone(),
                })?;
            balance += amount;
            transactions.push(DashboardEntry {
                id: tx.id,
                date: tx.date,
                description: tx.description,
                category: tx.category,
                status: tx.status,
                kind: tx.kind,
                amount,
            });
        }

        Ok(DashboardView {
            total_count: transactions.len(),
            balance,
            balance_display: self.format_amount(balance),
            transactions,
        })
    }

    /// Build the detail view for a single transaction
    pub async fn detail(&self, id: &str) -> CoreResult<TransactionDetail> {
        let tx = self.get(id).await?;
        let signed_amount = tx
            .signed_amount()
            .ok_or_else(|| CoreError::InvalidAmount {
                value: tx.amount.clone(),
            })?;

        Ok(TransactionDetail {
            signed_amount,
            amount_display: self.format_amount(signed_amount),
            direction: tx.kind,
            status_color: view::status_color(&tx.status).to_string(),
            status_icon: view::status_icon(&tx.status).to_string(),
            transaction: tx,
        })
    }

    fn format_amount(&self, value: Decimal) -> String {
        ledgerdash_utils::format_currency(
            value,
            &self.config.currency.symbol,
            self.config.currency.decimal_places,
        )
    }
}

/// Next id: one past the highest numeric id in the collection
///
/// Deleting and re-creating records can no longer mint a duplicate id,
/// which the old count-based scheme allowed.
fn next_id(records: &[Transaction]) -> String {
    let max = records
        .iter()
        .filter_map(|tx| tx.numeric_id())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

/// Today's date as YYYY-MM-DD
fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ledgerdash_store::{DocumentStore, StoreError, StoreResult};
    use std::str::FromStr;
    use std::sync::{Arc, Mutex};

    /// In-memory store double
    #[derive(Default)]
    struct MemoryStore {
        records: Mutex<Vec<Transaction>>,
    }

    #[async_trait]
    impl DocumentStore<Transaction> for MemoryStore {
        async fn load(&self) -> StoreResult<Vec<Transaction>> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn save(&self, records: &[Transaction]) -> StoreResult<()> {
            *self.records.lock().unwrap() = records.to_vec();
            Ok(())
        }
    }

    /// Store double whose reads always fail
    struct BrokenStore;

    #[async_trait]
    impl DocumentStore<Transaction> for BrokenStore {
        async fn load(&self) -> StoreResult<Vec<Transaction>> {
            Err(StoreError::from(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "document missing",
            )))
        }

        async fn save(&self, _records: &[Transaction]) -> StoreResult<()> {
            Err(StoreError::from(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    fn ledger_with(records: Vec<Transaction>) -> Ledger {
        let store = MemoryStore {
            records: Mutex::new(records),
        };
        Ledger::new(Config::default(), Arc::new(store))
    }

    fn seed() -> Vec<Transaction> {
        vec![Transaction {
            id: "1".to_string(),
            amount: "$50.00".to_string(),
            date: "2024-01-01".to_string(),
            status: "Completed".to_string(),
            description: "Deposit".to_string(),
            kind: TransactionKind::Credit,
            category: "Income".to_string(),
        }]
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[tokio::test]
    async fn test_create_fills_defaults_on_empty_store() {
        let mut ledger = ledger_with(vec![]);
        let tx = ledger
            .create(NewTransaction {
                amount: Some("$20.00".to_string()),
                description: Some("Coffee".to_string()),
                ..NewTransaction::default()
            })
            .await
            .unwrap();

        assert_eq!(tx.id, "1");
        assert_eq!(tx.status, "Pending");
        assert_eq!(tx.kind, TransactionKind::Debit);
        assert_eq!(tx.category, "Other");
        assert_eq!(tx.date, today());
    }

    #[tokio::test]
    async fn test_create_requires_amount_and_description() {
        let mut ledger = ledger_with(vec![]);

        let err = ledger
            .create(NewTransaction {
                description: Some("Coffee".to_string()),
                ..NewTransaction::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);

        let err = ledger
            .create(NewTransaction {
                amount: Some("$20.00".to_string()),
                description: Some(String::new()),
                ..NewTransaction::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_get_after_create_returns_inputs() {
        let mut ledger = ledger_with(seed());
        let created = ledger
            .create(NewTransaction {
                amount: Some("$12.34".to_string()),
                description: Some("Lunch".to_string()),
                status: Some("Completed".to_string()),
                kind: Some(TransactionKind::Debit),
                category: Some("Food".to_string()),
                date: Some("2024-02-02".to_string()),
            })
            .await
            .unwrap();

        let fetched = ledger.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.amount, "$12.34");
        assert_eq!(fetched.category, "Food");
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let ledger = ledger_with(seed());
        let err = ledger.get("nonexistent").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::TransactionNotFound);
    }

    #[tokio::test]
    async fn test_next_id_skips_gaps() {
        // A collection that has seen deletions must not mint a
        // duplicate: [1, 3] -> 4, not 3.
        let mut records = seed();
        records.push(Transaction {
            id: "3".to_string(),
            ..records[0].clone()
        });
        let mut ledger = ledger_with(records);

        let tx = ledger
            .create(NewTransaction {
                amount: Some("$1.00".to_string()),
                description: Some("Gum".to_string()),
                ..NewTransaction::default()
            })
            .await
            .unwrap();
        assert_eq!(tx.id, "4");
    }

    #[tokio::test]
    async fn test_update_changes_only_patched_fields() {
        let mut ledger = ledger_with(seed());
        let tx = ledger
            .update(
                "1",
                TransactionPatch {
                    status: Some("Failed".to_string()),
                    ..TransactionPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(tx.id, "1");
        assert_eq!(tx.status, "Failed");
        assert_eq!(tx.amount, "$50.00");
        assert_eq!(tx.description, "Deposit");
        assert_eq!(tx.category, "Income");

        // The merge is persisted
        let fetched = ledger.get("1").await.unwrap();
        assert_eq!(fetched.status, "Failed");
    }

    #[tokio::test]
    async fn test_update_amount_preserves_id() {
        let mut ledger = ledger_with(seed());
        let tx = ledger
            .update(
                "1",
                TransactionPatch {
                    amount: Some("$99.00".to_string()),
                    ..TransactionPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(tx.amount, "$99.00");
        assert_eq!(tx.id, "1");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let mut ledger = ledger_with(seed());
        let err = ledger
            .update("7", TransactionPatch::default())
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::TransactionNotFound);
    }

    #[tokio::test]
    async fn test_remove_deletes_exactly_one() {
        let mut records = seed();
        records.push(Transaction {
            id: "2".to_string(),
            description: "Coffee".to_string(),
            ..records[0].clone()
        });
        let mut ledger = ledger_with(records);

        let removed = ledger.remove("1").await.unwrap();
        assert_eq!(removed.id, "1");

        let err = ledger.get("1").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::TransactionNotFound);

        let remaining = ledger.list(&TransactionFilter::default()).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "2");
    }

    #[tokio::test]
    async fn test_list_status_all_equals_unfiltered() {
        let ledger = ledger_with(seed());
        let all = ledger.list(&TransactionFilter::status("all")).await.unwrap();
        let unfiltered = ledger.list(&TransactionFilter::default()).await.unwrap();
        assert_eq!(all, unfiltered);
    }

    #[tokio::test]
    async fn test_dashboard_single_credit() {
        let ledger = ledger_with(seed());
        let view = ledger.dashboard(&TransactionFilter::default()).await.unwrap();

        assert_eq!(view.total_count, 1);
        assert_eq!(view.transactions[0].amount, dec("50.00"));
        assert_eq!(view.balance, dec("50.00"));
        assert_eq!(view.balance_display, "$50.00");
    }

    #[tokio::test]
    async fn test_dashboard_balance_follows_filter() {
        let mut records = seed();
        records.push(Transaction {
            id: "2".to_string(),
            amount: "$20.00".to_string(),
            status: "Pending".to_string(),
            description: "Coffee".to_string(),
            kind: TransactionKind::Debit,
            category: "Food".to_string(),
            date: "2024-01-02".to_string(),
        });
        let ledger = ledger_with(records);

        let everything = ledger.dashboard(&TransactionFilter::default()).await.unwrap();
        assert_eq!(everything.balance, dec("30.00"));

        let completed = ledger
            .dashboard(&TransactionFilter::status("Completed"))
            .await
            .unwrap();
        assert_eq!(completed.total_count, 1);
        assert_eq!(completed.balance, dec("50.00"));

        let pending = ledger
            .dashboard(&TransactionFilter::status("Pending"))
            .await
            .unwrap();
        assert_eq!(pending.balance, dec("-20.00"));
    }

    #[tokio::test]
    async fn test_dashboard_rejects_unparseable_amount() {
        let mut records = seed();
        records[0].amount = "fifty dollars".to_string();
        let ledger = ledger_with(records);

        let err = ledger
            .dashboard(&TransactionFilter::default())
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidAmount);
    }

    #[tokio::test]
    async fn test_detail_derives_sign_from_type() {
        let mut records = seed();
        records.push(Transaction {
            id: "2".to_string(),
            amount: "$20.00".to_string(),
            kind: TransactionKind::Debit,
            ..records[0].clone()
        });
        let ledger = ledger_with(records);

        let credit = ledger.detail("1").await.unwrap();
        assert_eq!(credit.signed_amount, dec("50.00"));
        assert_eq!(credit.direction, TransactionKind::Credit);
        assert_eq!(credit.status_color, "green");
        assert_eq!(credit.status_icon, "✅");
        assert_eq!(credit.amount_display, "$50.00");

        let debit = ledger.detail("2").await.unwrap();
        assert_eq!(debit.signed_amount, dec("-20.00"));
        assert_eq!(debit.amount_display, "-$20.00");
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let ledger = Ledger::new(Config::default(), Arc::new(BrokenStore));
        let err = ledger.list(&TransactionFilter::default()).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::StoreError);
    }
}
