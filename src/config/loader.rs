//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the settlement
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    EngineConfig, PaymentsConfig, ReportConfig, SettlementConfigFile, SettlementConstants,
};

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "settlement.yaml";

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── settlement.yaml   # Settlement constants, report layout, payment API
/// ```
///
/// # Example
///
/// ```no_run
/// use settlement_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Management fee: {}", loader.constants().management_fee);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `settlement.yaml` is missing
    /// - the file contains invalid YAML or misses a required field
    /// - a value is outside its allowed range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let file_path = path.as_ref().join(CONFIG_FILE_NAME);
        let file = Self::load_yaml(&file_path)?;
        Self::from_parts(file.settlement, file.report, file.payments)
    }

    /// Builds a loader from in-memory values, applying the same validation
    /// as [`ConfigLoader::load`].
    pub fn from_parts(
        constants: SettlementConstants,
        report: ReportConfig,
        payments: PaymentsConfig,
    ) -> EngineResult<Self> {
        constants.validate()?;

        if report.rows_per_page == 0 {
            return Err(EngineError::InvalidConfig {
                field: "rows_per_page".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            config: EngineConfig::new(constants, report, payments),
        })
    }

    /// Loads and parses the YAML file.
    fn load_yaml(path: &Path) -> EngineResult<SettlementConfigFile> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the settlement constants.
    pub fn constants(&self) -> &SettlementConstants {
        self.config.constants()
    }

    /// Returns the report layout settings.
    pub fn report(&self) -> &ReportConfig {
        self.config.report()
    }

    /// Returns the payment API settings.
    pub fn payments(&self) -> &PaymentsConfig {
        self.config.payments()
    }
}
