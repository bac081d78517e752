//! Dashboard routes - server-side view-models
//!
//! The dashboard endpoint returns normalized rows plus the derived
//! balance over the filtered set; the detail endpoint returns one
//! record with sign and status presentation derived.

pub mod api;

pub use api::{api_dashboard, api_transaction_detail};
