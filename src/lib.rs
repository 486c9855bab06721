//! Subcontractor Settlement Engine
//!
//! This crate turns a subcontractor's reported income and operating costs
//! into a settlement statement (who owes whom what) and renders it as a
//! printable report. An independent client summarizes payment history from
//! the payment provider's API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod payments;
pub mod report;
pub mod session;
