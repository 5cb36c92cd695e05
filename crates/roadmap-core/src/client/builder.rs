//! Builder for creating and configuring PlanClient instances.

use std::sync::Arc;

use super::PlanClient;
use crate::{
    config::Config,
    error::Result,
    transport::{HttpTransport, Transport},
};

/// Builder for creating and configuring PlanClient instances.
#[derive(Clone, Default)]
pub struct PlanClientBuilder {
    config: Config,
    transport: Option<Arc<dyn Transport>>,
}

impl PlanClientBuilder {
    /// Creates a new builder with no settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a loaded configuration. Values set afterwards with
    /// `with_api_url` / `with_user_id` take precedence.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config.with_overrides(self.config);
        self
    }

    /// Sets the base URL of the plan store API.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.config.api_url = Some(api_url.into());
        self
    }

    /// Sets the user every request is scoped to.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.config.user_id = Some(user_id.into());
        self
    }

    /// Uses the given transport instead of HTTP. The API URL is then not
    /// required.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the configured client.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Configuration` if the user id is missing, or if no
    /// transport was supplied and the API URL is missing or invalid.
    pub fn build(self) -> Result<PlanClient> {
        let user_id = self.config.user_id()?.to_string();
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(self.config.api_url()?)?),
        };

        Ok(PlanClient::new(transport, user_id))
    }
}
