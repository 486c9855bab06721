//! Fixed-width text rendering of a settlement report.
//!
//! The layout mirrors the printed statement: a title, optional invoice and
//! payment range lines, a rule, a column header, one line per result row,
//! and a closing note. Long statements are split into pages separated by a
//! form feed, with the column header repeated on each page.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::ReportConfig;
use crate::models::SettlementReport;

/// Separator emitted between pages.
pub const PAGE_BREAK: char = '\u{000C}';

/// Formats an amount with the currency symbol and two decimals.
///
/// Midpoints round away from zero.
///
/// ```
/// use settlement_engine::report::format_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_amount("R", Decimal::from_str("640.8").unwrap()), "R640.80");
/// assert_eq!(format_amount("R", Decimal::from(-3000)), "R-3000.00");
/// assert_eq!(format_amount("R", Decimal::from_str("0.125").unwrap()), "R0.13");
/// ```
pub fn format_amount(currency_symbol: &str, amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.2}", currency_symbol, rounded)
}

/// Lays out `left` and `right` on one line of `width` characters.
///
/// At least one space separates the two when they do not fit.
fn justify(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    let padding = width.saturating_sub(used).max(1);
    format!("{}{}{}", left, " ".repeat(padding), right)
}

/// Renders a settlement report as paginated plain text.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::build_settlement_report;
/// use settlement_engine::config::{ReportConfig, SettlementConstants};
/// use settlement_engine::models::SettlementInputs;
/// use settlement_engine::report::render_text_report;
/// use rust_decimal::Decimal;
///
/// let constants = SettlementConstants::new(Decimal::new(5, 1), Decimal::ZERO).unwrap();
/// let report = build_settlement_report(&SettlementInputs::default(), &constants, "INV-1", "");
///
/// let text = render_text_report(&report, &ReportConfig::default());
/// assert!(text.contains("Invoice Number: INV-1"));
/// assert!(!text.contains("Payment Range"));
/// ```
pub fn render_text_report(report: &SettlementReport, config: &ReportConfig) -> String {
    let width = config.line_width;
    let rule = "-".repeat(width);
    let column_header = justify(
        "Description",
        &format!("Amount ({})", config.currency_symbol),
        width,
    );

    let mut lines: Vec<String> = vec![config.title.clone()];
    if !report.invoice_number.is_empty() {
        lines.push(format!("Invoice Number: {}", report.invoice_number));
    }
    if !report.date_range.is_empty() {
        lines.push(format!("Payment Range: {}", report.date_range));
    }
    lines.push(String::new());
    lines.push(rule.clone());
    lines.push(column_header.clone());

    let rows_per_page = config.rows_per_page.max(1);
    for (index, row) in report.rows.iter().enumerate() {
        if index > 0 && index % rows_per_page == 0 {
            lines.push(PAGE_BREAK.to_string());
            lines.push(column_header.clone());
        }
        lines.push(justify(
            &row.description,
            &format_amount(&config.currency_symbol, row.amount),
            width,
        ));
    }

    lines.push(rule);
    lines.push(String::new());
    lines.push(format!(
        "Note: Subcontractor's Profit Share is before deducting the {} management fee.",
        format_amount(&config.currency_symbol, report.breakdown.management_fee)
    ));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Returns how many pages [`render_text_report`] produces for a report.
pub fn page_count(report: &SettlementReport, config: &ReportConfig) -> usize {
    let rows_per_page = config.rows_per_page.max(1);
    report.rows.len().div_ceil(rows_per_page).max(1)
}
