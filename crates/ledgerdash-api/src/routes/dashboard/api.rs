//! Dashboard API endpoints - view-model JSON
//!
//! Endpoints:
//! - api_dashboard: GET /dashboard?search=&status=
//! - api_transaction_detail: GET /transactions/:id/detail

use axum::extract::{Path, Query, State};
use axum::Json;
use ledgerdash_core::{DashboardView, TransactionDetail, TransactionFilter};

use crate::error::ApiError;
use crate::AppState;

/// Dashboard view over the filtered transaction set
///
/// The balance covers exactly the filtered records, so changing the
/// filter changes the displayed balance.
pub async fn api_dashboard(
    State(state): State<AppState>,
    Query(filter): Query<TransactionFilter>,
) -> Result<Json<DashboardView>, ApiError> {
    let ledger = state.ledger.read().await;
    let view = ledger
        .dashboard(&filter)
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to fetch transactions"))?;
    Ok(Json(view))
}

/// Detail view for a single transaction
pub async fn api_transaction_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TransactionDetail>, ApiError> {
    let ledger = state.ledger.read().await;
    let detail = ledger
        .detail(&id)
        .await
        .map_err(|e| ApiError::from_core(e, "Failed to fetch transaction"))?;
    Ok(Json(detail))
}

// ==================== Tests ====================
