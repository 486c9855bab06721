//! Calculation logic for the Settlement Engine.
//!
//! This module contains the three pipeline stages: input normalization,
//! settlement calculation, and report row assembly. Every function here is
//! pure and synchronous.

mod normalizer;
mod report_rows;
mod settlement;

pub use normalizer::{
    FIELD_CLEANER_COST, FIELD_INCOME, FIELD_SUPPLIES_COST, FIELD_TRANSPORT_COST, MAX_AMOUNT,
    clean_number, normalize_amount, normalize_expense_entry, normalize_inputs,
};
pub use report_rows::{
    FIXED_ROW_COUNT, ROW_AMOUNT_OWED, ROW_CLEANER_COST, ROW_CLEANING_SUPPLIES, ROW_EXPENSE_SHARE,
    ROW_INCOME, ROW_MANAGEMENT_FEE, ROW_NET_INCOME, ROW_PROFIT_SHARE, ROW_TOTAL_EXPENSES,
    ROW_TRANSPORT_COST, build_result_rows, build_settlement_report, custom_expense_label,
};
pub use settlement::calculate_settlement;
