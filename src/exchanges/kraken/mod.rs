pub mod account;
pub mod builder;
pub mod client;
pub mod market_data;
pub mod nonce;
pub mod response;
pub mod signer;
pub mod trading;
pub mod types;

// Re-export main types for easier importing
pub use builder::KrakenClientBuilder;
pub use client::KrakenClient;
pub use nonce::NonceGenerator;
pub use signer::{sign_message, KrakenSigner};
pub use types::{KrakenResponse, RequestParams};
