//! Transaction routes - CRUD over the ledger document
//!
//! Features:
//! - List with combined search and status filtering
//! - Create with defaults and presence validation
//! - Get, shallow-merge update, and delete by id

pub mod api;

pub use api::{
    create_transaction, delete_transaction, get_transaction, list_transactions,
    update_transaction,
};
