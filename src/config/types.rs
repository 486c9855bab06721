//! Configuration types for settlement calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the `settlement.yaml` configuration file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The policy constants applied to every settlement.
///
/// Both values are external business policy. They are loaded once at
/// startup and never derived from user input.
///
/// # Example
///
/// ```
/// use settlement_engine::config::SettlementConstants;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let constants = SettlementConstants::new(
///     Decimal::from_str("0.356").unwrap(),
///     Decimal::from(3000),
/// )
/// .unwrap();
/// assert_eq!(constants.management_fee, Decimal::from(3000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementConstants {
    /// The subcontractor's share of expenses and profit, in (0, 1].
    pub subcontractor_share_percent: Decimal,
    /// The flat fee deducted once per settlement.
    pub management_fee: Decimal,
}

impl SettlementConstants {
    /// Creates validated settlement constants.
    ///
    /// Returns `InvalidConfig` when the share is outside (0, 1] or the fee
    /// is negative.
    pub fn new(subcontractor_share_percent: Decimal, management_fee: Decimal) -> EngineResult<Self> {
        let constants = Self {
            subcontractor_share_percent,
            management_fee,
        };
        constants.validate()?;
        Ok(constants)
    }

    /// Checks that the constants are within their allowed ranges.
    pub fn validate(&self) -> EngineResult<()> {
        if self.subcontractor_share_percent <= Decimal::ZERO
            || self.subcontractor_share_percent > Decimal::ONE
        {
            return Err(EngineError::InvalidConfig {
                field: "subcontractor_share_percent".to_string(),
                message: format!(
                    "must be greater than 0 and at most 1, got {}",
                    self.subcontractor_share_percent
                ),
            });
        }

        if self.management_fee < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "management_fee".to_string(),
                message: format!("must not be negative, got {}", self.management_fee),
            });
        }

        Ok(())
    }
}

/// Layout settings for the text report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// The heading printed at the top of the first page.
    pub title: String,
    /// The symbol prefixed to every amount (e.g. "R").
    pub currency_symbol: String,
    /// Maximum number of result rows per page.
    pub rows_per_page: usize,
    /// Width of a report line in characters.
    pub line_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Subcontractor Report".to_string(),
            currency_symbol: "R".to_string(),
            rows_per_page: 36,
            line_width: 72,
        }
    }
}

/// Endpoint settings for the payment history API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentsConfig {
    /// Base URL of the public API, without a trailing slash.
    pub base_url: String,
    /// Path of the history endpoint, signed as part of each request.
    pub history_path: String,
}

impl Default for PaymentsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.ikhokha.com/public-api".to_string(),
            history_path: "/v1/api/payments/history".to_string(),
        }
    }
}

/// Top-level structure of `settlement.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SettlementConfigFile {
    /// Settlement policy constants.
    pub settlement: SettlementConstants,
    /// Report layout.
    #[serde(default)]
    pub report: ReportConfig,
    /// Payment history endpoint.
    #[serde(default)]
    pub payments: PaymentsConfig,
}

/// The complete engine configuration.
///
/// Built by [`ConfigLoader`](super::ConfigLoader) after validation, so every
/// value it holds is within range.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    constants: SettlementConstants,
    report: ReportConfig,
    payments: PaymentsConfig,
}

impl EngineConfig {
    /// Creates a new configuration from validated parts.
    pub fn new(
        constants: SettlementConstants,
        report: ReportConfig,
        payments: PaymentsConfig,
    ) -> Self {
        Self {
            constants,
            report,
            payments,
        }
    }

    /// Returns the settlement constants.
    pub fn constants(&self) -> &SettlementConstants {
        &self.constants
    }

    /// Returns the report layout settings.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }

    /// Returns the payment API settings.
    pub fn payments(&self) -> &PaymentsConfig {
        &self.payments
    }
}
