//! Payment history client and sales summary.
//!
//! This module is independent of the settlement engine: it shares no types
//! with the calculation pipeline. It fetches a merchant's transaction
//! history from the payment provider's public API, signing each request path
//! with HMAC-SHA256, and summarizes total sales and best/worst sellers.

mod client;
mod signing;
mod summary;

pub use client::{
    APP_ID_HEADER, APP_ID_VAR, APP_SECRET_VAR, PaymentsClient, PaymentsCredentials,
    SIGNATURE_HEADER,
};
pub use signing::sign_request_path;
pub use summary::{
    LEAST_PRODUCTS_LIMIT, NO_DESCRIPTION, ProductSales, SalesSummary, TOP_PRODUCTS_LIMIT,
    Transaction, summarize_sales,
};
