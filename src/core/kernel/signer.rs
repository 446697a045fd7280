use crate::core::errors::ExchangeError;

/// Result type for signing operations: authentication headers in send order
pub type SignatureResult = Result<Vec<(String, String)>, ExchangeError>;

/// Signer trait for request authentication
///
/// Implementations turn a request path, its nonce and the exact body bytes
/// that will be sent into the headers that authenticate the request.
pub trait Signer: Send + Sync {
    /// Sign a request and return the headers to attach
    ///
    /// # Arguments
    /// * `path` - Request path as sent, e.g. `/0/private/Balance`
    /// * `nonce` - Nonce already embedded in `body`
    /// * `body` - Form-encoded request body
    fn sign_request(&self, path: &str, nonce: u64, body: &str) -> SignatureResult;
}
