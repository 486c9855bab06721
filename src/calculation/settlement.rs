//! Settlement calculation.
//!
//! The subcontractor is paid their share of the expenses they fronted plus
//! the same share of the net profit after those expenses, less a flat
//! management fee deducted once.

use crate::config::SettlementConstants;
use crate::models::{SettlementBreakdown, SettlementInputs};

/// Calculates the settlement totals for one period.
///
/// ```text
/// total_expenses = transport + cleaner + supplies + sum(custom)
/// net_income     = income - total_expenses
/// expense_share  = total_expenses * share
/// profit_share   = net_income * share
/// amount_owed    = expense_share + profit_share - management_fee
/// ```
///
/// This function is total: negative net income produces a negative profit
/// share and the amount owed is never clamped.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::calculate_settlement;
/// use settlement_engine::config::SettlementConstants;
/// use settlement_engine::models::{ExpenseEntry, SettlementInputs};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let constants = SettlementConstants::new(
///     Decimal::from_str("0.356").unwrap(),
///     Decimal::from(3000),
/// )
/// .unwrap();
/// let inputs = SettlementInputs {
///     income: Decimal::from(10000),
///     transport_cost: Decimal::from(500),
///     cleaner_cost: Decimal::from(800),
///     supplies_cost: Decimal::from(200),
///     custom_expenses: vec![ExpenseEntry::new("Security", Decimal::from(300)).unwrap()],
/// };
///
/// let breakdown = calculate_settlement(&inputs, &constants);
/// assert_eq!(breakdown.total_expenses, Decimal::from(1800));
/// assert_eq!(breakdown.amount_owed, Decimal::from(560));
/// ```
pub fn calculate_settlement(
    inputs: &SettlementInputs,
    constants: &SettlementConstants,
) -> SettlementBreakdown {
    let share = constants.subcontractor_share_percent;

    let fixed_expenses = inputs.fixed_expenses();
    let custom_total = inputs.custom_expenses_total();
    let total_expenses = fixed_expenses + custom_total;
    let net_income = inputs.income - total_expenses;

    let expense_share = total_expenses * share;
    let profit_share = net_income * share;
    let amount_owed = expense_share + profit_share - constants.management_fee;

    SettlementBreakdown {
        fixed_expenses,
        custom_total,
        total_expenses,
        net_income,
        expense_share,
        profit_share,
        management_fee: constants.management_fee,
        amount_owed,
    }
}
