use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("API key or secret not set for private method {method}")]
    MissingCredentials { method: String },

    #[error("Invalid API secret encoding: {0}")]
    InvalidSecret(#[from] base64::DecodeError),

    #[error("Invalid nonce: {0}")]
    InvalidNonce(u64),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClientBuild(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Error in server response: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Could not understand response from server: {body}")]
    Parse {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Kraken API returned an error: {code}")]
    Remote { code: String, messages: Vec<String> },
}

impl ExchangeError {
    /// Errors raised before any request left the process.
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingCredentials { .. }
                | Self::InvalidSecret(_)
                | Self::InvalidNonce(_)
                | Self::ConfigError(_)
                | Self::HttpClientBuild(_)
                | Self::InvalidParameters(_)
        )
    }

    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// True when the transport gave up because the request timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
