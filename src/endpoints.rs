//! Endpoint table for the lava.ru API
//!
//! Maps method identifiers to HTTP verbs and URL paths. Known endpoints are
//! listed explicitly; unknown identifiers fall back to a generic mapping rule
//! so new remote endpoints stay callable without a library update.

use crate::{LavaError, Result};
use reqwest::Method;

/// A resolved remote endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// HTTP verb used for the request
    pub method: Method,
    /// URL path relative to the API base URL
    pub path: String,
}

impl Endpoint {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }
}

/// Known endpoint paths
pub mod paths {
    pub const TEST_PING: &str = "/test/ping";
    pub const WALLET_LIST: &str = "/wallet/list";
    pub const WITHDRAW_CREATE: &str = "/withdraw/create";
    pub const WITHDRAW_INFO: &str = "/withdraw/info";
    pub const TRANSFER_CREATE: &str = "/transfer/create";
    pub const TRANSFER_INFO: &str = "/transfer/info";
    pub const TRANSACTIONS_LIST: &str = "/transactions/list";
    pub const INVOICE_CREATE: &str = "/invoice/create";
    pub const INVOICE_INFO: &str = "/invoice/info";
    pub const INVOICE_SET_WEBHOOK: &str = "/invoice/set-webhook";
    pub const INVOICE_GENERATE_SECRET_KEY: &str = "/invoice/generate-secret-key";
}

/// Resolve a method identifier to an endpoint
///
/// Known identifiers come from the explicit table. Anything else is mapped
/// generically: `.` separates path segments, otherwise the first `_` splits
/// namespace from action, and underscores inside the action become hyphens
/// (`invoice_set_webhook` resolves to `/invoice/set-webhook`). Generic
/// endpoints default to POST.
pub fn resolve(name: &str) -> Result<Endpoint> {
    if name.is_empty() {
        return Err(LavaError::config("method name must not be empty"));
    }

    let known = match name {
        "test_ping" => Some((Method::GET, paths::TEST_PING)),
        "wallet_list" => Some((Method::GET, paths::WALLET_LIST)),
        "withdraw_create" => Some((Method::POST, paths::WITHDRAW_CREATE)),
        "withdraw_info" => Some((Method::POST, paths::WITHDRAW_INFO)),
        "transfer_create" => Some((Method::POST, paths::TRANSFER_CREATE)),
        "transfer_info" => Some((Method::POST, paths::TRANSFER_INFO)),
        "transactions_list" => Some((Method::POST, paths::TRANSACTIONS_LIST)),
        "invoice_create" => Some((Method::POST, paths::INVOICE_CREATE)),
        "invoice_info" => Some((Method::POST, paths::INVOICE_INFO)),
        "invoice_set_webhook" => Some((Method::POST, paths::INVOICE_SET_WEBHOOK)),
        "invoice_generate_secret_key" => Some((Method::GET, paths::INVOICE_GENERATE_SECRET_KEY)),
        _ => None,
    };

    if let Some((method, path)) = known {
        return Ok(Endpoint::new(method, path));
    }

    let segments: Vec<String> = if name.contains('.') {
        name.split('.').map(|s| s.replace('_', "-")).collect()
    } else {
        match name.split_once('_') {
            Some((ns, action)) => vec![ns.to_string(), action.replace('_', "-")],
            None => vec![name.to_string()],
        }
    };

    if segments.iter().any(|s| s.is_empty()) {
        return Err(LavaError::config(format!(
            "invalid method name: {:?}",
            name
        )));
    }

    Ok(Endpoint::new(Method::POST, format!("/{}", segments.join("/"))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_endpoints() {
        let ep = resolve("test_ping").unwrap();
        assert_eq!(ep.method, Method::GET);
        assert_eq!(ep.path, "/test/ping");

        let ep = resolve("invoice_set_webhook").unwrap();
        assert_eq!(ep.method, Method::POST);
        assert_eq!(ep.path, "/invoice/set-webhook");

        let ep = resolve("invoice_generate_secret_key").unwrap();
        assert_eq!(ep.method, Method::GET);
        assert_eq!(ep.path, "/invoice/generate-secret-key");
    }

    #[test]
    fn test_generic_underscore_mapping() {
        let ep = resolve("payoff_create_request").unwrap();
        assert_eq!(ep.method, Method::POST);
        assert_eq!(ep.path, "/payoff/create-request");
    }

    #[test]
    fn test_generic_dot_mapping() {
        let ep = resolve("shop.update_settings").unwrap();
        assert_eq!(ep.path, "/shop/update-settings");
    }

    #[test]
    fn test_single_segment() {
        let ep = resolve("ping").unwrap();
        assert_eq!(ep.path, "/ping");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(resolve("").is_err());
        assert!(resolve("wallet_").is_err());
        assert!(resolve(".list").is_err());
    }
}
