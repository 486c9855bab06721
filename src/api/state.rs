//! Application state for the Settlement Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::payments::PaymentsClient;

/// Shared application state.
///
/// Holds the loaded configuration and, when credentials are available, the
/// payment history client. Both are immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
    /// Client for the payment history API, if configured.
    payments: Option<Arc<PaymentsClient>>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            payments: None,
        }
    }

    /// Enables the payment history endpoint.
    pub fn with_payments(mut self, client: PaymentsClient) -> Self {
        self.payments = Some(Arc::new(client));
        self
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the payment history client, if configured.
    pub fn payments(&self) -> Option<&PaymentsClient> {
        self.payments.as_deref()
    }
}
