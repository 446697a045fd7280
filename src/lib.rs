pub mod core;
pub mod exchanges;

pub use crate::core::{
    config::{ConfigError, KrakenConfig},
    errors::ExchangeError,
};
pub use exchanges::kraken::{KrakenClient, KrakenClientBuilder, KrakenResponse, RequestParams};
