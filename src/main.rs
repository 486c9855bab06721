//! HTTP server for the Settlement Engine.
//!
//! Environment:
//! - `SETTLEMENT_CONFIG_DIR`: configuration directory (default `./config`)
//! - `SETTLEMENT_BIND_ADDR`: listen address (default `0.0.0.0:3000`)
//! - `SETTLEMENT_LOG_FORMAT`: `compact` or `json`
//! - `PAYMENTS_APP_ID` / `PAYMENTS_APP_SECRET`: enable `/payments/summary`

use settlement_engine::api::{AppState, create_router};
use settlement_engine::config::ConfigLoader;
use settlement_engine::logging::{LogFormat, init_logging};
use settlement_engine::payments::{PaymentsClient, PaymentsCredentials};

const DEFAULT_CONFIG_DIR: &str = "./config";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_format = std::env::var("SETTLEMENT_LOG_FORMAT").unwrap_or_default();
    init_logging(LogFormat::from_name(&log_format));

    let config_dir =
        std::env::var("SETTLEMENT_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        std::env::var("SETTLEMENT_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir).inspect_err(|e| {
        tracing::error!(config_dir = %config_dir, error = %e, "Failed to load configuration");
    })?;
    tracing::info!(
        config_dir = %config_dir,
        share = %config.constants().subcontractor_share_percent,
        management_fee = %config.constants().management_fee,
        "Configuration loaded"
    );

    let mut state = AppState::new(config.clone());
    match PaymentsCredentials::from_env() {
        Ok(credentials) => {
            tracing::info!(app_id = credentials.app_id(), "Payment history API enabled");
            state = state.with_payments(PaymentsClient::new(config.payments().clone(), credentials));
        }
        Err(e) => tracing::warn!(error = %e, "Payment history API disabled"),
    }

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Settlement engine listening");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
