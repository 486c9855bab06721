//! Transaction history models and sales summary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Label used for transactions without a description.
pub const NO_DESCRIPTION: &str = "No Description";

/// Number of best-selling products reported.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Number of least-selling products reported.
pub const LEAST_PRODUCTS_LIMIT: usize = 5;

/// One transaction from the payment history API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier of the payment link used.
    #[serde(rename = "paylinkID", default)]
    pub paylink_id: String,
    /// Transaction status as reported upstream.
    #[serde(default)]
    pub status: String,
    /// Creation timestamp as reported upstream.
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    /// Amount in minor currency units (cents).
    pub amount: Decimal,
    /// Product description; blank when the sale had none.
    #[serde(default)]
    pub description: Option<String>,
    /// Identifier assigned by the merchant.
    #[serde(rename = "externalTransactionID", default)]
    pub external_transaction_id: String,
}

/// Number of sales for one product description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSales {
    /// Product description.
    pub description: String,
    /// Number of transactions carrying it.
    pub count: usize,
}

/// Summary of a transaction history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSummary {
    /// Number of transactions summarized.
    pub transaction_count: usize,
    /// Total sales in major currency units.
    pub total_sales: Decimal,
    /// Best sellers, most sales first.
    pub top_products: Vec<ProductSales>,
    /// The tail of the ranking, still most sales first.
    pub least_products: Vec<ProductSales>,
}

/// Summarizes a transaction history into totals and product rankings.
///
/// Products are ranked by sale count, highest first; ties keep the order in
/// which products first appear in the history.
///
/// Returns `PaymentsRequest` when the reported amounts overflow the total.
///
/// # Examples
///
/// ```
/// use settlement_engine::payments::{Transaction, summarize_sales};
/// use rust_decimal::Decimal;
///
/// let sale = |description: &str, cents: i64| Transaction {
///     paylink_id: String::new(),
///     status: "PAID".to_string(),
///     created_at: String::new(),
///     amount: Decimal::from(cents),
///     description: Some(description.to_string()),
///     external_transaction_id: String::new(),
/// };
///
/// let summary =
///     summarize_sales(&[sale("Coffee", 2500), sale("Coffee", 2500), sale("Tea", 1800)]).unwrap();
/// assert_eq!(summary.total_sales, Decimal::from(68));
/// assert_eq!(summary.top_products[0].description, "Coffee");
/// ```
pub fn summarize_sales(transactions: &[Transaction]) -> EngineResult<SalesSummary> {
    let total_minor = transactions
        .iter()
        .try_fold(Decimal::ZERO, |total, t| total.checked_add(t.amount))
        .ok_or_else(|| EngineError::PaymentsRequest {
            message: "transaction amounts overflow the sales total".to_string(),
        })?;
    let total_sales = total_minor / Decimal::ONE_HUNDRED;

    let mut ranking: Vec<ProductSales> = Vec::new();
    for transaction in transactions {
        let description = match transaction.description.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => d,
            _ => NO_DESCRIPTION,
        };

        match ranking.iter_mut().find(|p| p.description == description) {
            Some(product) => product.count += 1,
            None => ranking.push(ProductSales {
                description: description.to_string(),
                count: 1,
            }),
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    ranking.sort_by(|a, b| b.count.cmp(&a.count));

    let top_products = ranking.iter().take(TOP_PRODUCTS_LIMIT).cloned().collect();
    let least_start = ranking.len().saturating_sub(LEAST_PRODUCTS_LIMIT);
    let least_products = ranking[least_start..].to_vec();

    Ok(SalesSummary {
        transaction_count: transactions.len(),
        total_sales,
        top_products,
        least_products,
    })
}
