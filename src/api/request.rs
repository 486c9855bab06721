//! Request types for the Settlement Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/report/text` endpoints and the query for `/payments/summary`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{RawAmount, RawExpenseEntry, RawSettlementInputs};
use crate::report::format_date_range;

/// Request body for the settlement endpoints.
///
/// Amounts may be JSON numbers or strings exactly as typed into a form.
/// The payment range label is taken from `date_range` when given, otherwise
/// it is built from `start_date` and `end_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// Income for the period.
    pub income: RawAmount,
    /// Transport cost for the period.
    pub transport_cost: RawAmount,
    /// Cleaner wages for the period.
    pub cleaner_cost: RawAmount,
    /// Cleaning supplies for the period.
    pub supplies_cost: RawAmount,
    /// Ad-hoc expenses in the order they were added.
    #[serde(default)]
    pub custom_expenses: Vec<ExpenseEntryRequest>,
    /// Invoice number label for the report header.
    #[serde(default)]
    pub invoice_number: String,
    /// Start of the payment period.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// End of the payment period.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// A preformatted payment range label; overrides the dates.
    #[serde(default)]
    pub date_range: Option<String>,
}

/// A custom expense in a settlement request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseEntryRequest {
    /// The expense name.
    pub name: String,
    /// The expense amount.
    pub amount: RawAmount,
}

impl SettlementRequest {
    /// Returns the payment range label for the report header.
    pub fn resolved_date_range(&self) -> String {
        match &self.date_range {
            Some(label) if !label.is_empty() => label.clone(),
            _ => format_date_range(self.start_date, self.end_date),
        }
    }

    /// Extracts the raw inputs for normalization.
    pub fn raw_inputs(&self) -> RawSettlementInputs {
        RawSettlementInputs {
            income: self.income.clone(),
            transport_cost: self.transport_cost.clone(),
            cleaner_cost: self.cleaner_cost.clone(),
            supplies_cost: self.supplies_cost.clone(),
            custom_expenses: self
                .custom_expenses
                .iter()
                .cloned()
                .map(Into::into)
                .collect(),
        }
    }
}

impl From<ExpenseEntryRequest> for RawExpenseEntry {
    fn from(req: ExpenseEntryRequest) -> Self {
        RawExpenseEntry {
            name: req.name,
            amount: req.amount,
        }
    }
}

/// Query parameters for `/payments/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentsSummaryQuery {
    /// First day of the history window.
    pub start_date: NaiveDate,
    /// Last day of the history window.
    pub end_date: NaiveDate,
}
