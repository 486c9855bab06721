//! Configuration loading and management for the Settlement Engine.
//!
//! This module loads the settlement policy constants (share percentage and
//! management fee), report layout, and payment API endpoint from YAML.
//!
//! # Example
//!
//! ```no_run
//! use settlement_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Share: {}", config.constants().subcontractor_share_percent);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{
    EngineConfig, PaymentsConfig, ReportConfig, SettlementConfigFile, SettlementConstants,
};
