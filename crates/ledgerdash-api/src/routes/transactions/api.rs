//! Transactions API endpoints - JSON CRUD
//!
//! Endpoints:
//! - list_transactions: GET /transactions?search=&status=
//! - create_transaction: POST /transactions
//! - get_transaction: GET /transactions/:id
//! - update_transaction: PUT /transactions/:id
//! - delete_transaction: DELETE /transactions/:id

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ledgerdash_core::{
    DeleteResponse, NewTransaction, Transaction, TransactionFilter, TransactionPatch,
};

use crate::error::ApiError;
use crate::AppState;

/// List transactions, optionally filtered by search term and status
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(filter): Query<TransactionFilter>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let ledger = state.ledger.read().await;
    let transactions = ledger
        .list(&filter)
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to fetch transactions"))?;
    Ok(Json(transactions))
}

/// Create a new transaction
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(new): Json<NewTransaction>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let mut ledger = state.ledger.write().await;
    let transaction = ledger
        .create(new)
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to create transaction"))?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Get a single transaction by id
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, ApiError> {
    let ledger = state.ledger.read().await;
    let transaction = ledger
        .get(&id)
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to fetch transaction"))?;
    Ok(Json(transaction))
}

/// Shallow-merge a partial update onto a transaction
pub async fn update_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<TransactionPatch>,
) -> Result<Json<Transaction>, ApiError> {
    let mut ledger = state.ledger.write().await;
    let transaction = ledger
        .update(&id, patch)
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to update transaction"))?;
    Ok(Json(transaction))
}

/// Delete a transaction, returning the removed record
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let mut ledger = state.ledger.write().await;
    let transaction = ledger
        .remove(&id)
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to delete transaction"))?;
    Ok(Json(DeleteResponse {
        message: "Transaction deleted successfully".to_string(),
        transaction,
    }))
}

// ==================== Tests ====================
