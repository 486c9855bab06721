//! Report row assembly.
//!
//! Rows are produced in a fixed order that downstream renderers index by
//! position. Custom expenses sit between the fixed costs and the totals, in
//! the order they were added.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::SettlementConstants;
use crate::models::{ResultRow, SettlementBreakdown, SettlementInputs, SettlementReport};

use super::calculate_settlement;

/// Label for the income row.
pub const ROW_INCOME: &str = "Income";
/// Label for the transport cost row.
pub const ROW_TRANSPORT_COST: &str = "Transport Cost";
/// Label for the cleaner cost row.
pub const ROW_CLEANER_COST: &str = "Cleaner Cost";
/// Label for the cleaning supplies row.
pub const ROW_CLEANING_SUPPLIES: &str = "Cleaning Supplies";
/// Label for the total expenses row.
pub const ROW_TOTAL_EXPENSES: &str = "Total Expenses";
/// Label for the net income row.
pub const ROW_NET_INCOME: &str = "Net Income After Expenses";
/// Label for the expense share row.
pub const ROW_EXPENSE_SHARE: &str = "Subcontractor's Expense Share";
/// Label for the profit share row.
pub const ROW_PROFIT_SHARE: &str = "Subcontractor's Profit Share";
/// Label for the management fee row.
pub const ROW_MANAGEMENT_FEE: &str = "Management Fee";
/// Label for the final amount row.
pub const ROW_AMOUNT_OWED: &str = "Amount Owed to Subcontractor";

/// Number of rows that appear regardless of custom expenses.
pub const FIXED_ROW_COUNT: usize = 10;

/// Returns the row label for a custom expense.
///
/// ```
/// use settlement_engine::calculation::custom_expense_label;
///
/// assert_eq!(custom_expense_label("Security"), "Security (Custom)");
/// ```
pub fn custom_expense_label(name: &str) -> String {
    format!("{} (Custom)", name)
}

/// Builds the ordered report rows for a settlement.
///
/// The management fee is reported as a negative amount so that the fee row
/// reads as a deduction.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::{build_result_rows, calculate_settlement};
/// use settlement_engine::config::SettlementConstants;
/// use settlement_engine::models::SettlementInputs;
/// use rust_decimal::Decimal;
///
/// let constants = SettlementConstants::new(Decimal::new(356, 3), Decimal::from(3000)).unwrap();
/// let inputs = SettlementInputs::default();
/// let breakdown = calculate_settlement(&inputs, &constants);
///
/// let rows = build_result_rows(&inputs, &constants, &breakdown);
/// assert_eq!(rows.len(), 10);
/// assert_eq!(rows[0].description, "Income");
/// assert_eq!(rows[8].amount, Decimal::from(-3000));
/// ```
pub fn build_result_rows(
    inputs: &SettlementInputs,
    constants: &SettlementConstants,
    breakdown: &SettlementBreakdown,
) -> Vec<ResultRow> {
    let mut rows = Vec::with_capacity(FIXED_ROW_COUNT + inputs.custom_expenses.len());

    rows.push(ResultRow::new(ROW_INCOME, inputs.income));
    rows.push(ResultRow::new(ROW_TRANSPORT_COST, inputs.transport_cost));
    rows.push(ResultRow::new(ROW_CLEANER_COST, inputs.cleaner_cost));
    rows.push(ResultRow::new(ROW_CLEANING_SUPPLIES, inputs.supplies_cost));

    rows.extend(
        inputs
            .custom_expenses
            .iter()
            .map(|expense| ResultRow::new(custom_expense_label(expense.name()), expense.amount())),
    );

    rows.push(ResultRow::new(ROW_TOTAL_EXPENSES, breakdown.total_expenses));
    rows.push(ResultRow::new(ROW_NET_INCOME, breakdown.net_income));
    rows.push(ResultRow::new(ROW_EXPENSE_SHARE, breakdown.expense_share));
    rows.push(ResultRow::new(ROW_PROFIT_SHARE, breakdown.profit_share));
    rows.push(ResultRow::new(ROW_MANAGEMENT_FEE, Decimal::ZERO - constants.management_fee));
    rows.push(ResultRow::new(ROW_AMOUNT_OWED, breakdown.amount_owed));

    rows
}

/// Calculates a settlement and packages it with its header labels.
///
/// `invoice_number` and `date_range` are passed through unmodified.
pub fn build_settlement_report(
    inputs: &SettlementInputs,
    constants: &SettlementConstants,
    invoice_number: &str,
    date_range: &str,
) -> SettlementReport {
    let breakdown = calculate_settlement(inputs, constants);
    let rows = build_result_rows(inputs, constants, &breakdown);

    SettlementReport {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        invoice_number: invoice_number.to_string(),
        date_range: date_range.to_string(),
        breakdown,
        rows,
    }
}
