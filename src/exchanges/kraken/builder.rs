use crate::core::config::KrakenConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig};
use crate::exchanges::kraken::client::KrakenClient;

/// Build the reqwest transport for a configuration
pub fn build_rest(config: &KrakenConfig) -> Result<ReqwestRest, ExchangeError> {
    let rest_config = RestClientConfig::new(config.base_url.clone(), "kraken".to_string())
        .with_user_agent(config.user_agent.clone());

    RestClientBuilder::new(rest_config).build()
}

/// Fluent construction of a [`KrakenClient`]
#[derive(Debug, Clone, Default)]
pub struct KrakenClientBuilder {
    config: KrakenConfig,
}

impl KrakenClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: KrakenConfig) -> Self {
        Self { config }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = self.config.base_url(base_url.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config = self.config.version(version.into());
        self
    }

    pub fn credentials(
        mut self,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        self.config = self.config.credentials(api_key.into(), api_secret.into());
        self
    }

    pub fn otp(mut self, otp: impl Into<String>) -> Self {
        self.config = self.config.otp(otp.into());
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config = self.config.timeout_ms(timeout_ms);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config = self.config.user_agent(user_agent.into());
        self
    }

    pub fn config(&self) -> &KrakenConfig {
        &self.config
    }

    pub fn build(self) -> Result<KrakenClient<ReqwestRest>, ExchangeError> {
        KrakenClient::new(self.config)
    }
}
