//! Report presentation.
//!
//! Turns a computed [`SettlementReport`](crate::models::SettlementReport)
//! into printable text. Nothing here affects the calculated amounts.

mod date_range;
mod text;

pub use date_range::format_date_range;
pub use text::{PAGE_BREAK, format_amount, page_count, render_text_report};
