use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.kraken.com";
pub const DEFAULT_API_VERSION: &str = "0";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_USER_AGENT: &str = "Kraken Rust API Client";

/// API key and base64 secret pair used for private endpoints.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: Secret<String>,
    pub api_secret: Secret<String>,
}

impl Credentials {
    #[must_use]
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self {
            api_key: Secret::new(api_key),
            api_secret: Secret::new(api_secret),
        }
    }

    /// Both halves are present and non-empty
    pub fn is_complete(&self) -> bool {
        !self.api_key.expose_secret().is_empty() && !self.api_secret.expose_secret().is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct KrakenConfig {
    pub base_url: String,
    pub version: String,
    pub api_key: Option<Secret<String>>,
    pub api_secret: Option<Secret<String>>,
    pub otp: Option<Secret<String>>,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for KrakenConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            version: DEFAULT_API_VERSION.to_string(),
            api_key: None,
            api_secret: None,
            otp: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for KrakenConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let redact = |s: &Option<Secret<String>>| s.as_ref().map(|_| "[REDACTED]");

        let mut state = serializer.serialize_struct("KrakenConfig", 7)?;
        state.serialize_field("base_url", &self.base_url)?;
        state.serialize_field("version", &self.version)?;
        state.serialize_field("api_key", &redact(&self.api_key))?;
        state.serialize_field("api_secret", &redact(&self.api_secret))?;
        state.serialize_field("otp", &redact(&self.otp))?;
        state.serialize_field("timeout_ms", &self.timeout_ms)?;
        state.serialize_field("user_agent", &self.user_agent)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for KrakenConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct KrakenConfigHelper {
            base_url: Option<String>,
            version: Option<String>,
            api_key: Option<String>,
            api_secret: Option<String>,
            otp: Option<String>,
            timeout_ms: Option<u64>,
            user_agent: Option<String>,
        }

        let helper = KrakenConfigHelper::deserialize(deserializer)?;
        let defaults = Self::default();
        Ok(Self {
            base_url: helper.base_url.unwrap_or(defaults.base_url),
            version: helper.version.unwrap_or(defaults.version),
            api_key: helper.api_key.map(Secret::new),
            api_secret: helper.api_secret.map(Secret::new),
            otp: helper.otp.map(Secret::new),
            timeout_ms: helper.timeout_ms.unwrap_or(defaults.timeout_ms),
            user_agent: helper.user_agent.unwrap_or(defaults.user_agent),
        })
    }
}

impl KrakenConfig {
    /// Create a configuration with API credentials and default endpoints
    #[must_use]
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self::default().credentials(api_key, api_secret)
    }

    /// Configuration for public market data only
    #[must_use]
    pub fn read_only() -> Self {
        Self::default()
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_API_KEY` and `{PREFIX}_API_SECRET` (optional, both needed for private calls)
    /// - `{PREFIX}_OTP` (optional)
    /// - `{PREFIX}_BASE_URL` (optional)
    /// - `{PREFIX}_TIMEOUT_MS` (optional, defaults to 5000, 0 disables the timeout)
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(prefix, |name| env::var(name).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`
    pub fn from_lookup<F>(prefix: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = prefix.to_uppercase();
        let var = |name: &str| lookup(&format!("{}_{}", prefix, name));

        let mut config = Self::default();
        config.api_key = var("API_KEY").map(Secret::new);
        config.api_secret = var("API_SECRET").map(Secret::new);
        config.otp = var("OTP").map(Secret::new);

        if let Some(base_url) = var("BASE_URL") {
            config.base_url = base_url;
        }

        if let Some(timeout) = var("TIMEOUT_MS") {
            config.timeout_ms = timeout.parse().map_err(|_| {
                ConfigError::InvalidConfiguration(format!(
                    "{}_TIMEOUT_MS must be a non-negative integer, got '{}'",
                    prefix, timeout
                ))
            })?;
        }

        Ok(config)
    }

    /// Like [`Self::from_env`], but requires both credential variables to be set
    pub fn from_env_with_credentials(prefix: &str) -> Result<Self, ConfigError> {
        let config = Self::from_env(prefix)?;
        let upper = prefix.to_uppercase();
        if config.api_key.is_none() {
            return Err(ConfigError::MissingEnvironmentVariable(format!(
                "{}_API_KEY",
                upper
            )));
        }
        if config.api_secret.is_none() {
            return Err(ConfigError::MissingEnvironmentVariable(format!(
                "{}_API_SECRET",
                upper
            )));
        }
        Ok(config)
    }

    /// Create configuration from .env file and environment variables
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(prefix, ".env")
    }

    /// Create configuration from a specific .env file path
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(prefix: &str, env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                // No .env file, fall back to the process environment
            }
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(prefix)
    }

    #[must_use]
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    #[must_use]
    pub fn version(mut self, version: String) -> Self {
        self.version = version;
        self
    }

    #[must_use]
    pub fn credentials(mut self, api_key: String, api_secret: String) -> Self {
        self.api_key = Some(Secret::new(api_key));
        self.api_secret = Some(Secret::new(api_secret));
        self
    }

    #[must_use]
    pub fn otp(mut self, otp: String) -> Self {
        self.otp = Some(Secret::new(otp));
        self
    }

    #[must_use]
    pub const fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Credential pair, if both halves are configured and non-empty
    pub fn credential_pair(&self) -> Option<Credentials> {
        let creds = Credentials {
            api_key: self.api_key.clone()?,
            api_secret: self.api_secret.clone()?,
        };
        creds.is_complete().then_some(creds)
    }

    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.credential_pair().is_some()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
