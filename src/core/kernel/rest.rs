use crate::core::config::DEFAULT_USER_AGENT;
use crate::core::errors::ExchangeError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, trace};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// REST transport used by the dispatcher
///
/// One call performs exactly one HTTP POST and yields either the parsed
/// JSON body or a transport/parse error. Envelope interpretation happens
/// above this layer.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// POST a pre-encoded form body
    ///
    /// # Arguments
    /// * `endpoint` - Path appended to the base URL, e.g. `/0/public/Time`
    /// * `headers` - Extra request headers (authentication)
    /// * `body` - Form-encoded body, sent byte-for-byte as given
    /// * `timeout` - Upper bound for the whole request; `None` waits indefinitely
    async fn post_form(
        &self,
        endpoint: &str,
        headers: &[(String, String)],
        body: &str,
        timeout: Option<Duration>,
    ) -> Result<Value, ExchangeError>;
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Exchange name for logging and tracing
    pub exchange_name: String,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    pub fn new(base_url: String, exchange_name: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            exchange_name,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
}

impl RestClientBuilder {
    pub fn new(config: RestClientConfig) -> Self {
        Self { config }
    }

    /// Build the REST client
    pub fn build(self) -> Result<ReqwestRest, ExchangeError> {
        let client = Client::builder()
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| ExchangeError::HttpClientBuild(e.to_string()))?;

        Ok(ReqwestRest {
            client,
            config: self.config,
        })
    }
}

/// Implementation of `RestClient` using reqwest
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ReqwestRest {
    pub fn new(base_url: String, exchange_name: String) -> Result<Self, ExchangeError> {
        RestClientBuilder::new(RestClientConfig::new(base_url, exchange_name)).build()
    }

    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    /// Build the full URL for an endpoint
    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url, endpoint)
    }

    /// Read the body and parse it as JSON
    ///
    /// The status code is only logged: the exchange reports failures inside
    /// the JSON envelope, also on non-2xx responses.
    #[instrument(skip(self, response), fields(exchange = %self.config.exchange_name, status = %response.status()))]
    async fn handle_response(&self, response: Response) -> Result<Value, ExchangeError> {
        let status = response.status();
        let response_text = response.text().await?;

        trace!("Response body: {}", response_text);
        if !status.is_success() {
            debug!(%status, "non-success HTTP status");
        }

        parse_body(response_text)
    }
}

/// Parse a response body, keeping the raw text on failure
pub fn parse_body(body: String) -> Result<Value, ExchangeError> {
    match serde_json::from_str(&body) {
        Ok(value) => Ok(value),
        Err(source) => Err(ExchangeError::Parse { body, source }),
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    #[instrument(skip(self, headers, body), fields(exchange = %self.config.exchange_name, endpoint = %endpoint, body_len = body.len()))]
    async fn post_form(
        &self,
        endpoint: &str,
        headers: &[(String, String)],
        body: &str,
        timeout: Option<Duration>,
    ) -> Result<Value, ExchangeError> {
        let url = self.build_url(endpoint);
        let mut request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body.to_string());

        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        for (key, value) in headers {
            request = request.header(key.as_str(), value.as_str());
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }
}
