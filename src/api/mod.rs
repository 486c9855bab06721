//! HTTP API module for the Settlement Engine.
//!
//! This module provides the REST API endpoints for calculating settlements,
//! rendering text reports, and summarizing payment history.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ExpenseEntryRequest, PaymentsSummaryQuery, SettlementRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
