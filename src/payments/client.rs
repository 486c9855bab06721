//! HTTP client for the payment history API.

use std::fmt;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::PaymentsConfig;
use crate::error::{EngineError, EngineResult};

use super::signing::sign_request_path;
use super::summary::Transaction;

/// Environment variable holding the application id.
pub const APP_ID_VAR: &str = "PAYMENTS_APP_ID";
/// Environment variable holding the application secret.
pub const APP_SECRET_VAR: &str = "PAYMENTS_APP_SECRET";

/// Header carrying the application id.
pub const APP_ID_HEADER: &str = "IK-APPID";
/// Header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "IK-SIGN";

/// Application credentials for the payment API.
#[derive(Clone)]
pub struct PaymentsCredentials {
    app_id: String,
    app_secret: String,
}

impl PaymentsCredentials {
    /// Creates credentials from explicit values.
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
        }
    }

    /// Reads credentials from `PAYMENTS_APP_ID` and `PAYMENTS_APP_SECRET`.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads credentials through `lookup`, treating blank values as missing.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| EngineError::MissingCredentials {
                    variable: name.to_string(),
                })
        };

        Ok(Self::new(read(APP_ID_VAR)?, read(APP_SECRET_VAR)?))
    }

    /// The application id sent with every request.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }
}

impl fmt::Debug for PaymentsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentsCredentials")
            .field("app_id", &self.app_id)
            .field("app_secret", &"<redacted>")
            .finish()
    }
}

/// Read-only client for the payment history endpoint.
#[derive(Debug, Clone)]
pub struct PaymentsClient {
    http: reqwest::Client,
    config: PaymentsConfig,
    credentials: PaymentsCredentials,
}

impl PaymentsClient {
    /// Creates a client for the configured endpoint.
    pub fn new(config: PaymentsConfig, credentials: PaymentsCredentials) -> Self {
        Self::with_http_client(config, credentials, reqwest::Client::new())
    }

    /// Creates a client reusing an existing HTTP client.
    pub fn with_http_client(
        config: PaymentsConfig,
        credentials: PaymentsCredentials,
        http: reqwest::Client,
    ) -> Self {
        Self {
            http,
            config,
            credentials,
        }
    }

    /// Builds the signed request path for a date range.
    pub fn history_request_path(&self, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}?startDate={}&endDate={}",
            self.config.history_path,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        )
    }

    /// Fetches all transactions between `start` and `end`.
    ///
    /// # Returns
    ///
    /// Returns the transaction list, or an error if:
    /// - the request could not be sent or the body was not valid JSON
    ///   (`PaymentsRequest`)
    /// - the API answered with a non-success status (`PaymentsApi`)
    pub async fn fetch_history(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<Transaction>> {
        let request_path = self.history_request_path(start, end);
        let url = format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            request_path
        );
        let signature = sign_request_path(&self.credentials.app_secret, &request_path)?;

        info!(%start, %end, "Fetching payment history");

        let response = self
            .http
            .get(&url)
            .header(APP_ID_HEADER, &self.credentials.app_id)
            .header(SIGNATURE_HEADER, signature)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), path = %request_path, "Payment history request rejected");
            return Err(EngineError::PaymentsApi {
                status: status.as_u16(),
                detail,
            });
        }

        let transactions: Vec<Transaction> = response.json().await?;
        info!(count = transactions.len(), "Payment history received");
        Ok(transactions)
    }
}
