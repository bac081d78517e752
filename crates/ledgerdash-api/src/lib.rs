//! HTTP JSON API server
//!
//! Routes are organized into modules:
//! - routes::transactions: CRUD over the transaction ledger
//! - routes::dashboard: dashboard and detail view-models

pub mod error;
pub mod routes;

use axum::routing::get;
use axum::Router;
use ledgerdash_config::Config;
use ledgerdash_core::Ledger;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
///
/// The ledger sits behind one RwLock: mutating handlers take the
/// write guard, which serializes every load-modify-persist cycle
/// against concurrent writers.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<RwLock<Ledger>>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::dashboard::{api_dashboard, api_transaction_detail};
    use routes::transactions::{
        create_transaction, delete_transaction, get_transaction, list_transactions,
        update_transaction,
    };

    Router::new()
        .route("/health", get(health_check))
        .route(
            "/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route(
            "/transactions/:id",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
        .route("/transactions/:id/detail", get(api_transaction_detail))
        .route("/dashboard", get(api_dashboard))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Start the HTTP server
///
/// Creates the router, binds to the configured address, and serves
/// until the process exits.
pub async fn start_server(config: Config, ledger: Arc<RwLock<Ledger>>) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { ledger, config };

    let router = create_router(state);
    let listener = TcpListener::bind(&addr).await?;

    log::info!("Starting ledgerdash server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - GET/POST   /transactions");
    log::info!("  - GET/PUT/DELETE /transactions/:id");
    log::info!("  - GET        /transactions/:id/detail");
    log::info!("  - GET        /dashboard");
    log::info!("  - GET        /health");

    axum::serve(listener, router).await?;
    Ok(())
}
