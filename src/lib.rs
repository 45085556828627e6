//! # lava-api - asynchronous lava.ru client
//!
//! A thin asynchronous binding for the lava.ru payment-processing HTTP API.
//! A [`LavaClient`] turns method calls into signed HTTP requests against
//! fixed URL paths, decodes the JSON response envelope, and returns the
//! `data` payload or a typed error.
//!
//! ```no_run
//! use lava_api::LavaClient;
//!
//! # async fn example() -> lava_api::Result<()> {
//! let client = LavaClient::new("your-jwt-token")?;
//! let wallets = client.wallet_list().await?;
//! for wallet in wallets {
//!     println!("{}: {} {}", wallet.account, wallet.balance, wallet.currency);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod sign;
pub mod types;

// Re-exports for convenience
pub use client::LavaClient;
pub use error::{LavaError, Result};
pub use types::*;

/// Current version of the lava-api library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = LavaConfig::new("jwt-token")
            .with_base_url("https://api.example.com")
            .with_timeout(std::time::Duration::from_secs(10));

        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout, Some(std::time::Duration::from_secs(10)));
        assert!(config.validate().is_ok());
    }
}
