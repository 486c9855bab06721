//! Custom expense entries.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::MAX_AMOUNT;
use crate::error::{EngineError, EngineResult};

/// An ad-hoc, user-named cost added beyond the fixed categories.
///
/// Entries can only be built through [`ExpenseEntry::new`], which enforces a
/// non-empty name and a strictly positive amount no larger than
/// [`MAX_AMOUNT`]. Fields are read-only once
/// constructed.
///
/// # Example
///
/// ```
/// use settlement_engine::models::ExpenseEntry;
/// use rust_decimal::Decimal;
///
/// let entry = ExpenseEntry::new("  Security ", Decimal::from(300)).unwrap();
/// assert_eq!(entry.name(), "Security");
/// assert_eq!(entry.amount(), Decimal::from(300));
///
/// assert!(ExpenseEntry::new("", Decimal::from(300)).is_err());
/// assert!(ExpenseEntry::new("Security", Decimal::ZERO).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseEntry {
    name: String,
    amount: Decimal,
}

impl ExpenseEntry {
    /// Creates an entry, trimming the name.
    ///
    /// Returns `RejectedExpenseEntry` when the trimmed name is empty or the
    /// amount is not greater than zero or exceeds [`MAX_AMOUNT`].
    pub fn new(name: &str, amount: Decimal) -> EngineResult<Self> {
        let name = name.trim();

        if name.is_empty() {
            return Err(EngineError::RejectedExpenseEntry {
                name: String::new(),
                reason: "name must not be empty".to_string(),
            });
        }

        if amount <= Decimal::ZERO {
            return Err(EngineError::RejectedExpenseEntry {
                name: name.to_string(),
                reason: format!("amount must be greater than zero, got {}", amount),
            });
        }

        if amount > MAX_AMOUNT {
            return Err(EngineError::RejectedExpenseEntry {
                name: name.to_string(),
                reason: format!("amount exceeds maximum of {}, got {}", MAX_AMOUNT, amount),
            });
        }

        Ok(Self {
            name: name.to_string(),
            amount,
        })
    }

    /// The trimmed expense name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The expense amount, always greater than zero.
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}
