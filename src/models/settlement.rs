//! Settlement result models.
//!
//! This module contains the [`SettlementBreakdown`] produced by the
//! calculator, the [`ResultRow`] lines produced by the row builder, and the
//! [`SettlementReport`] that bundles them with the report header labels.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The intermediate and final totals of one settlement.
///
/// # Example
///
/// ```
/// use settlement_engine::models::SettlementBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = SettlementBreakdown {
///     fixed_expenses: Decimal::ZERO,
///     custom_total: Decimal::ZERO,
///     total_expenses: Decimal::ZERO,
///     net_income: Decimal::ZERO,
///     expense_share: Decimal::ZERO,
///     profit_share: Decimal::ZERO,
///     management_fee: Decimal::from(3000),
///     amount_owed: Decimal::from(-3000),
/// };
/// assert!(breakdown.amount_owed.is_sign_negative());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementBreakdown {
    /// Transport + cleaner + supplies.
    pub fixed_expenses: Decimal,
    /// Sum of all custom expenses.
    pub custom_total: Decimal,
    /// Fixed plus custom expenses.
    pub total_expenses: Decimal,
    /// Income minus total expenses. May be negative.
    pub net_income: Decimal,
    /// The subcontractor's share of the expenses they fronted.
    pub expense_share: Decimal,
    /// The subcontractor's share of net income. Negative when the period
    /// ran at a loss.
    pub profit_share: Decimal,
    /// The management fee deducted from this settlement.
    pub management_fee: Decimal,
    /// Expense share plus profit share minus the management fee. Negative
    /// means the subcontractor owes money back.
    pub amount_owed: Decimal,
}

/// One labeled line of the settlement report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    /// The row label, e.g. "Total Expenses".
    pub description: String,
    /// The amount shown on the row.
    pub amount: Decimal,
}

impl ResultRow {
    /// Creates a new row.
    pub fn new(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}

/// A complete settlement statement ready for rendering.
///
/// `invoice_number` and `date_range` are opaque labels carried through to
/// the report header unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Invoice number label, possibly empty.
    pub invoice_number: String,
    /// Payment range label, possibly empty.
    pub date_range: String,
    /// The computed totals.
    pub breakdown: SettlementBreakdown,
    /// The ordered report rows.
    pub rows: Vec<ResultRow>,
}

impl SettlementReport {
    /// Looks up a row by its description.
    pub fn row(&self, description: &str) -> Option<&ResultRow> {
        self.rows.iter().find(|r| r.description == description)
    }
}
