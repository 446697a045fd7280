//! Transport kernel shared by exchange clients
//!
//! The kernel knows how to move a form-encoded request over HTTP and how to
//! attach authentication produced by a [`Signer`]. It contains no
//! exchange-specific path or envelope logic.
//!
//! ## Transport Layer
//! - `RestClient`: one POST, one parsed JSON body
//! - `ReqwestRest`: the reqwest-backed implementation
//!
//! ## Authentication
//! - `Signer`: produces authentication headers for a signed request
//!
//! ```rust,no_run
//! use krakenx::core::kernel::*;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let rest_config = RestClientConfig::new("https://api.kraken.com".to_string(), "kraken".to_string());
//! let rest = RestClientBuilder::new(rest_config).build()?;
//! let time = rest.post_form("/0/public/Time", &[], "", Some(Duration::from_secs(5))).await?;
//! println!("{}", time);
//! # Ok(())
//! # }
//! ```
pub mod rest;
pub mod signer;

pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use signer::{SignatureResult, Signer};
