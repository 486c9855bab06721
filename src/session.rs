//! Session state for an interactive settlement form.
//!
//! A [`SettlementSession`] holds the raw field text a user is editing and the
//! custom expenses they have added. It builds immutable
//! [`SettlementInputs`](crate::models::SettlementInputs) on demand and hands
//! them to the pure calculation functions; the engine itself never sees this
//! state.

use chrono::NaiveDate;
use tracing::debug;

use crate::calculation::{build_settlement_report, normalize_expense_entry, normalize_inputs};
use crate::config::SettlementConstants;
use crate::error::EngineResult;
use crate::models::{
    ExpenseEntry, RawAmount, RawExpenseEntry, RawSettlementInputs, SettlementReport,
};
use crate::report::format_date_range;

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No result has been computed since creation or the last reset.
    Idle,
    /// A report has been computed and is available.
    Computed,
}

/// Holds the editable state of one settlement form.
///
/// # Example
///
/// ```
/// use settlement_engine::config::SettlementConstants;
/// use settlement_engine::session::{SessionState, SettlementSession};
/// use rust_decimal::Decimal;
///
/// let constants = SettlementConstants::new(Decimal::new(356, 3), Decimal::from(3000)).unwrap();
/// let mut session = SettlementSession::new();
/// session.set_income("10000");
/// session.set_transport_cost("500");
/// session.set_cleaner_cost("800");
/// session.set_supplies_cost("200");
/// session.add_custom_expense("Security", "300").unwrap();
///
/// let report = session.calculate(&constants).unwrap();
/// assert_eq!(report.rows.len(), 11);
/// assert_eq!(session.state(), SessionState::Computed);
///
/// session.reset();
/// assert_eq!(session.state(), SessionState::Idle);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SettlementSession {
    income: String,
    transport_cost: String,
    cleaner_cost: String,
    supplies_cost: String,
    invoice_number: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    custom_expenses: Vec<ExpenseEntry>,
    report: Option<SettlementReport>,
}

impl SettlementSession {
    /// Creates an empty, idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> SessionState {
        if self.report.is_some() {
            SessionState::Computed
        } else {
            SessionState::Idle
        }
    }

    /// Sets the raw income text.
    pub fn set_income(&mut self, value: impl Into<String>) {
        self.income = value.into();
    }

    /// Sets the raw transport cost text.
    pub fn set_transport_cost(&mut self, value: impl Into<String>) {
        self.transport_cost = value.into();
    }

    /// Sets the raw cleaner cost text.
    pub fn set_cleaner_cost(&mut self, value: impl Into<String>) {
        self.cleaner_cost = value.into();
    }

    /// Sets the raw cleaning supplies text.
    pub fn set_supplies_cost(&mut self, value: impl Into<String>) {
        self.supplies_cost = value.into();
    }

    /// Sets the invoice number label.
    pub fn set_invoice_number(&mut self, value: impl Into<String>) {
        self.invoice_number = value.into();
    }

    /// Sets the payment period start date.
    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
    }

    /// Sets the payment period end date.
    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.end_date = date;
    }

    /// Adds a custom expense.
    ///
    /// Returns the accepted entry, or `RejectedExpenseEntry` when the name is
    /// blank or the amount is not a positive number. A rejected entry leaves
    /// the list untouched. Adding never changes the session state.
    pub fn add_custom_expense(&mut self, name: &str, amount: &str) -> EngineResult<&ExpenseEntry> {
        let entry = normalize_expense_entry(name, &RawAmount::from(amount))?;
        debug!(name = entry.name(), amount = %entry.amount(), "Custom expense added");
        self.custom_expenses.push(entry);
        Ok(&self.custom_expenses[self.custom_expenses.len() - 1])
    }

    /// Returns the accepted custom expenses in insertion order.
    pub fn custom_expenses(&self) -> &[ExpenseEntry] {
        &self.custom_expenses
    }

    /// Returns the formatted payment range label.
    pub fn date_range(&self) -> String {
        format_date_range(self.start_date, self.end_date)
    }

    /// Returns the last computed report, if any.
    pub fn report(&self) -> Option<&SettlementReport> {
        self.report.as_ref()
    }

    /// Normalizes all fields and computes the settlement.
    ///
    /// On an invalid field the error is returned and the session keeps its
    /// previous state and report.
    pub fn calculate(&mut self, constants: &SettlementConstants) -> EngineResult<&SettlementReport> {
        let raw = RawSettlementInputs {
            income: RawAmount::from(self.income.as_str()),
            transport_cost: RawAmount::from(self.transport_cost.as_str()),
            cleaner_cost: RawAmount::from(self.cleaner_cost.as_str()),
            supplies_cost: RawAmount::from(self.supplies_cost.as_str()),
            custom_expenses: self
                .custom_expenses
                .iter()
                .map(|e| RawExpenseEntry {
                    name: e.name().to_string(),
                    amount: RawAmount::Text(e.amount().to_string()),
                })
                .collect(),
        };
        let inputs = normalize_inputs(&raw)?;

        let report =
            build_settlement_report(&inputs, constants, &self.invoice_number, &self.date_range());
        debug!(
            calculation_id = %report.calculation_id,
            amount_owed = %report.breakdown.amount_owed,
            "Session settlement computed"
        );

        Ok(self.report.insert(report))
    }

    /// Clears every field, expense and result, returning to `Idle`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_constants() -> SettlementConstants {
        SettlementConstants::new(dec("0.356"), dec("3000")).unwrap()
    }

    fn filled_session() -> SettlementSession {
        let mut session = SettlementSession::new();
        session.set_income("10000");
        session.set_transport_cost("500");
        session.set_cleaner_cost("800");
        session.set_supplies_cost("200");
        session
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = SettlementSession::new();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.report().is_none());
    }

    #[test]
    fn test_calculate_moves_to_computed() {
        let mut session = filled_session();
        session.add_custom_expense("Security", "300").unwrap();

        let report = session.calculate(&test_constants()).unwrap();
        assert_eq!(report.breakdown.total_expenses, dec("1800"));
        assert_eq!(report.breakdown.amount_owed, dec("560"));
        assert_eq!(session.state(), SessionState::Computed);
    }

    #[test]
    fn test_rejected_expense_leaves_list_and_rows_unchanged() {
        let mut session = filled_session();
        session.add_custom_expense("Security", "300").unwrap();

        assert!(matches!(
            session.add_custom_expense("", "300"),
            Err(EngineError::RejectedExpenseEntry { .. })
        ));
        assert!(matches!(
            session.add_custom_expense("Gardening", "0"),
            Err(EngineError::RejectedExpenseEntry { .. })
        ));
        assert_eq!(session.custom_expenses().len(), 1);

        let report = session.calculate(&test_constants()).unwrap();
        assert_eq!(report.rows.len(), 11);
    }

    #[test]
    fn test_add_expense_does_not_change_state() {
        let mut session = filled_session();
        session.add_custom_expense("Security", "300").unwrap();
        assert_eq!(session.state(), SessionState::Idle);

        session.calculate(&test_constants()).unwrap();
        session.add_custom_expense("Gas", "50").unwrap();
        assert_eq!(session.state(), SessionState::Computed);
        assert_eq!(session.custom_expenses().len(), 2);
    }

    #[test]
    fn test_invalid_field_blocks_calculation() {
        let mut session = filled_session();
        session.set_cleaner_cost("eight hundred");

        match session.calculate(&test_constants()) {
            Err(EngineError::InvalidAmount { field, .. }) => {
                assert_eq!(field, "cleaner_cost");
            }
            other => panic!("Expected InvalidAmount error, got {:?}", other),
        }
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_invalid_field_keeps_previous_report() {
        let mut session = filled_session();
        let first_id = session.calculate(&test_constants()).unwrap().calculation_id;

        session.set_income("");
        assert!(session.calculate(&test_constants()).is_err());
        assert_eq!(session.state(), SessionState::Computed);
        assert_eq!(session.report().unwrap().calculation_id, first_id);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = filled_session();
        session.set_invoice_number("INV-9");
        session.add_custom_expense("Security", "300").unwrap();
        session.calculate(&test_constants()).unwrap();

        session.reset();

        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.custom_expenses().is_empty());
        assert!(session.report().is_none());
        assert!(session.calculate(&test_constants()).is_err());
    }

    #[test]
    fn test_labels_flow_into_report() {
        let mut session = filled_session();
        session.set_invoice_number("INV-42");
        session.set_start_date(NaiveDate::from_ymd_opt(2025, 3, 1));
        session.set_end_date(NaiveDate::from_ymd_opt(2025, 3, 31));

        let report = session.calculate(&test_constants()).unwrap();
        assert_eq!(report.invoice_number, "INV-42");
        assert_eq!(report.date_range, "2025-03-01 to 2025-03-31");
    }

    #[test]
    fn test_date_range_empty_when_one_date_missing() {
        let mut session = filled_session();
        session.set_start_date(NaiveDate::from_ymd_opt(2025, 3, 1));

        let report = session.calculate(&test_constants()).unwrap();
        assert_eq!(report.date_range, "");
    }
}
