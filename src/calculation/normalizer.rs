//! Input normalization.
//!
//! Every raw monetary value passes through one rule before it reaches the
//! calculator: trim, strip redundant leading zeros, parse as a decimal, and
//! refuse anything that is not a finite non-negative number. Custom expense
//! entries additionally require a name and a strictly positive amount.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    ExpenseEntry, RawAmount, RawExpenseEntry, RawSettlementInputs, SettlementInputs,
};

/// Field name used in errors for the income value.
pub const FIELD_INCOME: &str = "income";
/// Field name used in errors for the transport cost.
pub const FIELD_TRANSPORT_COST: &str = "transport_cost";
/// Field name used in errors for the cleaner cost.
pub const FIELD_CLEANER_COST: &str = "cleaner_cost";
/// Field name used in errors for the cleaning supplies cost.
pub const FIELD_SUPPLIES_COST: &str = "supplies_cost";

/// Largest amount accepted for any field, 10^15.
///
/// Sums and differences of bounded amounts stay far inside `Decimal`'s range,
/// so the calculator can use plain arithmetic.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Trims whitespace and strips leading zeros from raw numeric text.
///
/// A zero is kept when it is the only digit left or when it directly
/// precedes a non-digit such as the decimal point.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::clean_number;
///
/// assert_eq!(clean_number("  0500 "), "500");
/// assert_eq!(clean_number("000"), "0");
/// assert_eq!(clean_number("00.75"), "0.75");
/// assert_eq!(clean_number("0"), "0");
/// ```
pub fn clean_number(raw: &str) -> &str {
    let mut cleaned = raw.trim();
    while cleaned.len() > 1
        && cleaned.starts_with('0')
        && cleaned[1..].starts_with(|c: char| c.is_ascii_digit())
    {
        cleaned = &cleaned[1..];
    }
    cleaned
}

/// Normalizes a raw value into a non-negative amount.
///
/// # Arguments
///
/// * `field` - The field name reported in errors
/// * `raw` - The value as supplied
///
/// # Returns
///
/// Returns the parsed amount, or `InvalidAmount` when the value is blank,
/// not a number, not finite, negative, or above [`MAX_AMOUNT`].
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::normalize_amount;
/// use settlement_engine::models::RawAmount;
/// use rust_decimal::Decimal;
///
/// let amount = normalize_amount("income", &RawAmount::from(" 010000 ")).unwrap();
/// assert_eq!(amount, Decimal::from(10000));
///
/// assert!(normalize_amount("income", &RawAmount::from("-5")).is_err());
/// assert!(normalize_amount("income", &RawAmount::from(f64::NAN)).is_err());
/// ```
pub fn normalize_amount(field: &str, raw: &RawAmount) -> EngineResult<Decimal> {
    let invalid = |reason: &str| EngineError::InvalidAmount {
        field: field.to_string(),
        value: raw.as_display(),
        reason: reason.to_string(),
    };

    let text = match raw {
        RawAmount::Number(n) if !n.is_finite() => return Err(invalid("not a finite number")),
        RawAmount::Number(n) => n.to_string(),
        RawAmount::Text(s) => clean_number(s).to_string(),
    };

    if text.is_empty() {
        return Err(invalid("a value is required"));
    }

    let amount = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| match text.parse::<f64>() {
            Ok(n) if n.is_finite() && n.abs() > 1.0 => invalid("exceeds maximum"),
            Ok(n) if n.is_finite() => invalid("has more decimal places than supported"),
            _ => invalid("not a valid decimal number"),
        })?;

    if amount < Decimal::ZERO {
        return Err(invalid("must not be negative"));
    }

    if amount > MAX_AMOUNT {
        return Err(invalid("exceeds maximum"));
    }

    // Collapses "-0" and "0.00" to a plain zero.
    if amount.is_zero() {
        return Ok(Decimal::ZERO);
    }

    Ok(amount)
}

/// Validates and builds a custom expense entry from raw input.
///
/// The rule is stricter than [`normalize_amount`]: the trimmed name must be
/// non-empty and the amount must be greater than zero. Every refusal is
/// reported as `RejectedExpenseEntry`.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::normalize_expense_entry;
/// use settlement_engine::models::RawAmount;
///
/// let entry = normalize_expense_entry(" Security ", &RawAmount::from("0300")).unwrap();
/// assert_eq!(entry.name(), "Security");
///
/// assert!(normalize_expense_entry("", &RawAmount::from("300")).is_err());
/// assert!(normalize_expense_entry("Security", &RawAmount::from("0")).is_err());
/// ```
pub fn normalize_expense_entry(name: &str, raw_amount: &RawAmount) -> EngineResult<ExpenseEntry> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(EngineError::RejectedExpenseEntry {
            name: String::new(),
            reason: "name must not be empty".to_string(),
        });
    }

    let amount = normalize_amount(trimmed, raw_amount).map_err(|err| match err {
        EngineError::InvalidAmount { reason, value, .. } => EngineError::RejectedExpenseEntry {
            name: trimmed.to_string(),
            reason: format!("amount {} (got '{}')", reason, value),
        },
        other => other,
    })?;

    ExpenseEntry::new(trimmed, amount)
}

/// Normalizes every raw field of a settlement.
///
/// Fields are checked in report order and the first failure is returned, so
/// a caller can point the user at a single field.
pub fn normalize_inputs(raw: &RawSettlementInputs) -> EngineResult<SettlementInputs> {
    let income = normalize_amount(FIELD_INCOME, &raw.income)?;
    let transport_cost = normalize_amount(FIELD_TRANSPORT_COST, &raw.transport_cost)?;
    let cleaner_cost = normalize_amount(FIELD_CLEANER_COST, &raw.cleaner_cost)?;
    let supplies_cost = normalize_amount(FIELD_SUPPLIES_COST, &raw.supplies_cost)?;

    let custom_expenses = raw
        .custom_expenses
        .iter()
        .map(|RawExpenseEntry { name, amount }| normalize_expense_entry(name, amount))
        .collect::<EngineResult<Vec<_>>>()?;

    Ok(SettlementInputs {
        income,
        transport_cost,
        cleaner_cost,
        supplies_cost,
        custom_expenses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn text(s: &str) -> RawAmount {
        RawAmount::from(s)
    }

    fn assert_invalid(result: EngineResult<Decimal>, expected_reason: &str) {
        match result {
            Err(EngineError::InvalidAmount { reason, .. }) => {
                assert!(
                    reason.contains(expected_reason),
                    "Expected reason containing '{}', got '{}'",
                    expected_reason,
                    reason
                );
            }
            other => panic!("Expected InvalidAmount error, got {:?}", other),
        }
    }

    #[test]
    fn test_clean_number_strips_leading_zeros() {
        assert_eq!(clean_number("007"), "7");
        assert_eq!(clean_number("0100"), "100");
    }

    #[test]
    fn test_clean_number_keeps_sole_zero() {
        assert_eq!(clean_number("0"), "0");
        assert_eq!(clean_number("0000"), "0");
    }

    #[test]
    fn test_clean_number_keeps_zero_before_decimal_point() {
        assert_eq!(clean_number("0.5"), "0.5");
        assert_eq!(clean_number("000.5"), "0.5");
    }

    #[test]
    fn test_clean_number_trims_whitespace() {
        assert_eq!(clean_number("\t 042 \n"), "42");
        assert_eq!(clean_number("   "), "");
    }

    #[test]
    fn test_normalize_plain_decimal() {
        assert_eq!(
            normalize_amount(FIELD_INCOME, &text("1234.56")).unwrap(),
            dec("1234.56")
        );
    }

    #[test]
    fn test_normalize_leading_zeros_and_whitespace() {
        assert_eq!(
            normalize_amount(FIELD_INCOME, &text("  000800 ")).unwrap(),
            dec("800")
        );
    }

    #[test]
    fn test_normalize_zero_is_allowed() {
        assert_eq!(
            normalize_amount(FIELD_TRANSPORT_COST, &text("0")).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(
            normalize_amount(FIELD_TRANSPORT_COST, &text("0.00")).unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_normalize_scientific_notation() {
        assert_eq!(
            normalize_amount(FIELD_INCOME, &text("1.5e3")).unwrap(),
            dec("1500")
        );
    }

    #[test]
    fn test_normalize_blank_is_invalid() {
        assert_invalid(normalize_amount(FIELD_INCOME, &text("")), "required");
        assert_invalid(normalize_amount(FIELD_INCOME, &text("   ")), "required");
    }

    #[test]
    fn test_normalize_garbage_is_invalid() {
        assert_invalid(
            normalize_amount(FIELD_INCOME, &text("abc")),
            "not a valid decimal",
        );
        assert_invalid(
            normalize_amount(FIELD_INCOME, &text("12abc")),
            "not a valid decimal",
        );
    }

    #[test]
    fn test_normalize_non_finite_text_is_invalid() {
        assert!(normalize_amount(FIELD_INCOME, &text("NaN")).is_err());
        assert!(normalize_amount(FIELD_INCOME, &text("Infinity")).is_err());
    }

    #[test]
    fn test_normalize_non_finite_number_is_invalid() {
        assert_invalid(
            normalize_amount(FIELD_INCOME, &RawAmount::Number(f64::INFINITY)),
            "finite",
        );
        assert_invalid(
            normalize_amount(FIELD_INCOME, &RawAmount::Number(f64::NAN)),
            "finite",
        );
    }

    #[test]
    fn test_normalize_negative_is_invalid() {
        assert_invalid(normalize_amount(FIELD_INCOME, &text("-1")), "negative");
        assert_invalid(
            normalize_amount(FIELD_INCOME, &RawAmount::Number(-0.01)),
            "negative",
        );
    }

    #[test]
    fn test_normalize_maximum_amount_is_allowed() {
        assert_eq!(
            normalize_amount(FIELD_INCOME, &text("1000000000000000")).unwrap(),
            MAX_AMOUNT
        );
    }

    #[test]
    fn test_normalize_above_maximum_is_invalid() {
        assert_invalid(
            normalize_amount(FIELD_INCOME, &text("1000000000000000.01")),
            "exceeds maximum",
        );
        assert_invalid(
            normalize_amount(FIELD_TRANSPORT_COST, &text("79228162514264337593543950335")),
            "exceeds maximum",
        );
    }

    #[test]
    fn test_normalize_beyond_decimal_range_is_invalid() {
        assert_invalid(
            normalize_amount(FIELD_INCOME, &text("79228162514264337593543950336")),
            "exceeds maximum",
        );
        assert_invalid(normalize_amount(FIELD_INCOME, &text("1e40")), "exceeds maximum");
        assert_invalid(
            normalize_amount(FIELD_INCOME, &RawAmount::Number(1e300)),
            "exceeds maximum",
        );
    }

    #[test]
    fn test_normalize_excess_precision_is_invalid() {
        assert_invalid(
            normalize_amount(FIELD_INCOME, &text("1e-40")),
            "decimal places",
        );
    }

    #[test]
    fn test_huge_fixed_costs_are_rejected_before_calculation() {
        let raw = RawSettlementInputs {
            income: text("0"),
            transport_cost: text("79228162514264337593543950335"),
            cleaner_cost: text("79228162514264337593543950335"),
            supplies_cost: text("0"),
            custom_expenses: vec![],
        };

        match normalize_inputs(&raw) {
            Err(EngineError::InvalidAmount { field, reason, .. }) => {
                assert_eq!(field, FIELD_TRANSPORT_COST);
                assert!(reason.contains("exceeds maximum"));
            }
            other => panic!("Expected InvalidAmount error, got {:?}", other),
        }
    }

    #[test]
    fn test_huge_expense_amount_is_rejected() {
        match normalize_expense_entry("Security", &text("2000000000000000")) {
            Err(EngineError::RejectedExpenseEntry { name, reason }) => {
                assert_eq!(name, "Security");
                assert!(reason.contains("exceeds maximum"));
            }
            other => panic!("Expected RejectedExpenseEntry error, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_negative_zero_becomes_zero() {
        let amount = normalize_amount(FIELD_INCOME, &RawAmount::Number(-0.0)).unwrap();
        assert_eq!(amount, Decimal::ZERO);
        assert!(!amount.is_sign_negative());
    }

    #[test]
    fn test_normalize_number_keeps_decimal_digits() {
        assert_eq!(
            normalize_amount(FIELD_INCOME, &RawAmount::Number(0.1)).unwrap(),
            dec("0.1")
        );
    }

    #[test]
    fn test_invalid_amount_names_field_and_value() {
        match normalize_amount(FIELD_CLEANER_COST, &text("ten")) {
            Err(EngineError::InvalidAmount { field, value, .. }) => {
                assert_eq!(field, "cleaner_cost");
                assert_eq!(value, "ten");
            }
            other => panic!("Expected InvalidAmount error, got {:?}", other),
        }
    }

    #[test]
    fn test_expense_entry_valid() {
        let entry = normalize_expense_entry("Security", &text("300")).unwrap();
        assert_eq!(entry.name(), "Security");
        assert_eq!(entry.amount(), dec("300"));
    }

    #[test]
    fn test_expense_entry_empty_name_rejected() {
        let result = normalize_expense_entry("  ", &text("300"));
        assert!(matches!(
            result,
            Err(EngineError::RejectedExpenseEntry { .. })
        ));
    }

    #[test]
    fn test_expense_entry_zero_amount_rejected() {
        match normalize_expense_entry("Security", &text("0")) {
            Err(EngineError::RejectedExpenseEntry { name, reason }) => {
                assert_eq!(name, "Security");
                assert!(reason.contains("greater than zero"));
            }
            other => panic!("Expected RejectedExpenseEntry error, got {:?}", other),
        }
    }

    #[test]
    fn test_expense_entry_unparsable_amount_rejected() {
        match normalize_expense_entry("Security", &text("lots")) {
            Err(EngineError::RejectedExpenseEntry { name, reason }) => {
                assert_eq!(name, "Security");
                assert!(reason.contains("lots"));
            }
            other => panic!("Expected RejectedExpenseEntry error, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_inputs_full_set() {
        let raw = RawSettlementInputs {
            income: text("10000"),
            transport_cost: RawAmount::Number(500.0),
            cleaner_cost: text("0800"),
            supplies_cost: text(" 200 "),
            custom_expenses: vec![RawExpenseEntry {
                name: "Security".to_string(),
                amount: text("300"),
            }],
        };

        let inputs = normalize_inputs(&raw).unwrap();
        assert_eq!(inputs.income, dec("10000"));
        assert_eq!(inputs.transport_cost, dec("500"));
        assert_eq!(inputs.cleaner_cost, dec("800"));
        assert_eq!(inputs.supplies_cost, dec("200"));
        assert_eq!(inputs.custom_expenses.len(), 1);
        assert_eq!(inputs.custom_expenses[0].name(), "Security");
    }

    #[test]
    fn test_normalize_inputs_reports_first_invalid_field() {
        let raw = RawSettlementInputs {
            income: text("10000"),
            transport_cost: text("x"),
            cleaner_cost: text("y"),
            supplies_cost: text("0"),
            custom_expenses: vec![],
        };

        match normalize_inputs(&raw) {
            Err(EngineError::InvalidAmount { field, .. }) => {
                assert_eq!(field, FIELD_TRANSPORT_COST);
            }
            other => panic!("Expected InvalidAmount error, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_inputs_rejects_bad_custom_expense() {
        let raw = RawSettlementInputs {
            income: text("10000"),
            transport_cost: text("0"),
            cleaner_cost: text("0"),
            supplies_cost: text("0"),
            custom_expenses: vec![RawExpenseEntry {
                name: String::new(),
                amount: text("300"),
            }],
        };

        assert!(matches!(
            normalize_inputs(&raw),
            Err(EngineError::RejectedExpenseEntry { .. })
        ));
    }
}
