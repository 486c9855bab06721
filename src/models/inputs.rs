//! Normalized settlement inputs.

use rust_decimal::Decimal;
use serde::Serialize;

use super::ExpenseEntry;

/// The normalized figures for one settlement period.
///
/// Every amount is expected to be non-negative; values built by
/// [`crate::calculation::normalize_inputs`] always are. The order of
/// `custom_expenses` is the order their rows appear in the report.
///
/// # Example
///
/// ```
/// use settlement_engine::models::{ExpenseEntry, SettlementInputs};
/// use rust_decimal::Decimal;
///
/// let inputs = SettlementInputs {
///     income: Decimal::from(10000),
///     transport_cost: Decimal::from(500),
///     cleaner_cost: Decimal::from(800),
///     supplies_cost: Decimal::from(200),
///     custom_expenses: vec![ExpenseEntry::new("Security", Decimal::from(300)).unwrap()],
/// };
/// assert_eq!(inputs.custom_expenses_total(), Decimal::from(300));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SettlementInputs {
    /// Income for the period.
    pub income: Decimal,
    /// Transport cost for the period.
    pub transport_cost: Decimal,
    /// Cleaner wages for the period.
    pub cleaner_cost: Decimal,
    /// Cleaning supplies for the period.
    pub supplies_cost: Decimal,
    /// Ad-hoc expenses in insertion order.
    pub custom_expenses: Vec<ExpenseEntry>,
}

impl SettlementInputs {
    /// Sum of the three fixed cost categories.
    pub fn fixed_expenses(&self) -> Decimal {
        self.transport_cost + self.cleaner_cost + self.supplies_cost
    }

    /// Sum of all custom expense amounts.
    pub fn custom_expenses_total(&self) -> Decimal {
        self.custom_expenses.iter().map(ExpenseEntry::amount).sum()
    }
}
