use crate::core::config::{Credentials, KrakenConfig};
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClient, Signer};
use crate::exchanges::kraken::nonce::NonceGenerator;
use crate::exchanges::kraken::response::normalize;
use crate::exchanges::kraken::signer::KrakenSigner;
use crate::exchanges::kraken::types::RequestParams;
use parking_lot::RwLock;
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for the Kraken REST API
///
/// Every endpoint method is an independent future resolving exactly once.
/// The client is `Send + Sync`; share it behind an `Arc` for concurrent use.
pub struct KrakenClient<R: RestClient = ReqwestRest> {
    rest: R,
    version: String,
    credentials: RwLock<Option<Credentials>>,
    otp: RwLock<Option<Secret<String>>>,
    timeout_ms: AtomicU64,
    nonce: NonceGenerator,
}

impl<R: RestClient> std::fmt::Debug for KrakenClient<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KrakenClient")
            .field("version", &self.version)
            .field("has_credentials", &self.has_credentials())
            .field("timeout", &self.timeout())
            .finish_non_exhaustive()
    }
}

impl KrakenClient<ReqwestRest> {
    /// Create a client talking to `config.base_url` over reqwest
    pub fn new(config: KrakenConfig) -> Result<Self, ExchangeError> {
        crate::exchanges::kraken::builder::build_rest(&config)
            .map(|rest| Self::with_rest(rest, &config))
    }

    /// Public market data only
    pub fn public() -> Result<Self, ExchangeError> {
        Self::new(KrakenConfig::read_only())
    }
}

impl<R: RestClient> KrakenClient<R> {
    /// Create a client over any transport
    pub fn with_rest(rest: R, config: &KrakenConfig) -> Self {
        let credentials = match (&config.api_key, &config.api_secret) {
            (Some(api_key), Some(api_secret)) => Some(Credentials {
                api_key: api_key.clone(),
                api_secret: api_secret.clone(),
            }),
            _ => None,
        };

        Self {
            rest,
            version: config.version.clone(),
            credentials: RwLock::new(credentials),
            otp: RwLock::new(config.otp.clone()),
            timeout_ms: AtomicU64::new(config.timeout_ms),
            nonce: NonceGenerator::new(),
        }
    }

    pub fn set_credentials(&self, api_key: String, api_secret: String) {
        *self.credentials.write() = Some(Credentials::new(api_key, api_secret));
    }

    pub fn clear_credentials(&self) {
        *self.credentials.write() = None;
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials
            .read()
            .as_ref()
            .is_some_and(Credentials::is_complete)
    }

    /// One-time password sent with every private call; `None` stops sending it
    pub fn set_otp(&self, otp: Option<String>) {
        *self.otp.write() = otp.map(Secret::new);
    }

    /// Per-request timeout; `Duration::ZERO` disables it
    pub fn set_timeout(&self, timeout: Duration) {
        self.timeout_ms
            .store(timeout.as_millis() as u64, Ordering::Relaxed);
    }

    /// `None` when requests run without a timeout
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_ms.load(Ordering::Relaxed) {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn rest(&self) -> &R {
        &self.rest
    }

    /// Call `/{version}/public/{method}`
    #[instrument(skip(self, params), fields(method = %method))]
    pub async fn public_call(
        &self,
        method: &str,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        let path = format!("/{}/public/{}", self.version, method);
        let body = match params {
            Some(params) => params.encode()?,
            None => String::new(),
        };

        let raw = self
            .rest
            .post_form(&path, &[], &body, self.timeout())
            .await?;
        normalize(raw)
    }

    /// Call `/{version}/private/{method}` with a signed request
    ///
    /// Fails without any I/O when the key or secret is missing or the
    /// secret is not valid base64. The caller's params are copied before
    /// `nonce` and `otp` are injected.
    #[instrument(skip(self, params), fields(method = %method))]
    pub async fn private_call(
        &self,
        method: &str,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        let credentials = self
            .credentials
            .read()
            .clone()
            .filter(Credentials::is_complete)
            .ok_or_else(|| ExchangeError::MissingCredentials {
                method: method.to_string(),
            })?;
        let signer = KrakenSigner::new(&credentials)?;

        let mut params = params.cloned().unwrap_or_default();
        let nonce = self.nonce.generate();
        params.set("nonce", nonce);

        let otp = self.otp.read().clone();
        if let Some(otp) = otp {
            params.set("otp", otp.expose_secret());
        }

        let path = format!("/{}/private/{}", self.version, method);
        let body = params.encode()?;
        let headers = signer.sign_request(&path, nonce, &body)?;
        debug!(nonce, "signed private request");

        let raw = self
            .rest
            .post_form(&path, &headers, &body, self.timeout())
            .await?;
        normalize(raw)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub endpoint: String,
        pub headers: Vec<(String, String)>,
        pub body: String,
        pub timeout: Option<Duration>,
    }

    /// Transport double that records requests and replies with a canned body
    #[derive(Default)]
    pub struct RecordingRest {
        pub requests: Mutex<Vec<RecordedRequest>>,
        pub reply: Mutex<Option<Value>>,
    }

    impl RecordingRest {
        pub fn replying(reply: Value) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                reply: Mutex::new(Some(reply)),
            }
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().clone()
        }
    }

    #[async_trait]
    impl RestClient for RecordingRest {
        async fn post_form(
            &self,
            endpoint: &str,
            headers: &[(String, String)],
            body: &str,
            timeout: Option<Duration>,
        ) -> Result<Value, ExchangeError> {
            self.requests.lock().push(RecordedRequest {
                endpoint: endpoint.to_string(),
                headers: headers.to_vec(),
                body: body.to_string(),
                timeout,
            });
            let reply = self.reply.lock().clone();
            Ok(reply.unwrap_or_else(|| serde_json::json!({"error": [], "result": {}})))
        }
    }
}
