//! Raw, un-normalized input as collected from a form or request body.
//!
//! Nothing in this module is trusted by the calculator. Values must pass
//! through [`crate::calculation::normalize_inputs`] first.

use serde::{Deserialize, Serialize};

/// A monetary value exactly as the user supplied it.
///
/// Request bodies may carry either a JSON number or the text typed into a
/// field; both shapes are accepted and normalized by the same rule.
///
/// # Example
///
/// ```
/// use settlement_engine::models::RawAmount;
///
/// let typed: RawAmount = serde_json::from_str("\"0500\"").unwrap();
/// assert_eq!(typed, RawAmount::Text("0500".to_string()));
///
/// let number: RawAmount = serde_json::from_str("500").unwrap();
/// assert_eq!(number, RawAmount::Number(500.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// A numeric value, e.g. from a JSON number.
    Number(f64),
    /// Text as typed into a form field.
    Text(String),
}

impl RawAmount {
    /// Returns the value as text, for error messages.
    pub fn as_display(&self) -> String {
        match self {
            RawAmount::Number(n) => n.to_string(),
            RawAmount::Text(s) => s.clone(),
        }
    }
}

impl Default for RawAmount {
    fn default() -> Self {
        RawAmount::Text(String::new())
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(value: String) -> Self {
        RawAmount::Text(value)
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

/// A custom expense as entered, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawExpenseEntry {
    /// The name typed for the expense.
    pub name: String,
    /// The amount typed for the expense.
    pub amount: RawAmount,
}

/// All raw settlement fields for one calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSettlementInputs {
    /// Income for the period.
    pub income: RawAmount,
    /// Transport cost for the period.
    pub transport_cost: RawAmount,
    /// Cleaner wages for the period.
    pub cleaner_cost: RawAmount,
    /// Cleaning supplies for the period.
    pub supplies_cost: RawAmount,
    /// Ad-hoc expenses, in the order they were added.
    #[serde(default)]
    pub custom_expenses: Vec<RawExpenseEntry>,
}
