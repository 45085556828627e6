//! Asynchronous client for the lava.ru API

use crate::endpoints::{self, Endpoint};
use crate::sign;
use crate::types::*;
use crate::{LavaError, Result};
use reqwest::{Client, Method};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the lava.ru API
///
/// Holds the immutable configuration and a shared HTTP client; individual
/// calls share no mutable state, so one instance may be used concurrently
/// without coordination.
#[derive(Debug, Clone)]
pub struct LavaClient {
    /// Underlying HTTP client
    client: Client,
    /// Client configuration
    config: LavaConfig,
}

impl LavaClient {
    /// Create a new client with the default base URL
    ///
    /// Fails with a configuration error before any network activity if the
    /// token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(LavaConfig::new(token))
    }

    /// Create a new client with a custom configuration
    pub fn with_config(config: LavaConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| LavaError::config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get the client configuration
    pub fn config(&self) -> &LavaConfig {
        &self.config
    }

    /// Call a remote endpoint by method identifier
    ///
    /// Generic entry point behind every typed wrapper. The method identifier
    /// is resolved through the endpoint table (unknown identifiers use the
    /// generic mapping rule, see [`endpoints::resolve`]), the parameter set
    /// is signed and sent, and the response envelope is consumed: the `data`
    /// field is returned unmodified on success, an error envelope becomes
    /// [`LavaError::Remote`]. Exactly one HTTP request per call; nothing is
    /// retried.
    pub async fn call(&self, method: &str, params: Map<String, Value>) -> Result<Value> {
        let endpoint = endpoints::resolve(method)?;
        self.execute(endpoint, params).await
    }

    async fn execute(&self, endpoint: Endpoint, params: Map<String, Value>) -> Result<Value> {
        let pairs = sign::canonical_pairs(&params)?;
        let signature = sign::signature(&self.config.token, &params)?;
        let url = format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.path
        );

        debug!(method = %endpoint.method, url = %url, "sending request");

        let mut request = self
            .client
            .request(endpoint.method.clone(), &url)
            .header("Authorization", &self.config.token)
            .header("Signature", signature);

        request = if endpoint.method == Method::GET {
            request.query(&pairs)
        } else {
            request.form(&pairs)
        };

        let response = request.send().await?;
        let http_status = response.status();
        let body = response.bytes().await?;

        let envelope: ApiEnvelope = serde_json::from_slice(&body).map_err(|e| {
            LavaError::transport(format!("unexpected response (HTTP {}): {}", http_status, e))
        })?;

        match envelope {
            ApiEnvelope::Success { data } => Ok(data),
            ApiEnvelope::Error { message, code } => {
                warn!(code, %message, url = %url, "remote reported an error");
                Err(LavaError::remote(message, code))
            }
        }
    }

    async fn call_typed<P, T>(&self, method: &str, params: &P) -> Result<T>
    where
        P: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let data = self.call(method, to_params(params)?).await?;
        serde_json::from_value(data).map_err(Into::into)
    }

    /// Check the token for authorization
    pub async fn test_ping(&self) -> Result<Value> {
        self.call("test_ping", Map::new()).await
    }

    /// List wallets with their balances
    pub async fn wallet_list(&self) -> Result<Vec<Wallet>> {
        self.call_typed("wallet_list", &Map::<String, Value>::new())
            .await
    }

    /// Create a withdrawal
    pub async fn withdraw_create(&self, request: WithdrawCreateRequest) -> Result<WithdrawCreated> {
        self.call_typed("withdraw_create", &request).await
    }

    /// Get details of a withdrawal
    pub async fn withdraw_info(&self, id: &str) -> Result<WithdrawInfo> {
        self.call_typed("withdraw_info", &serde_json::json!({ "id": id }))
            .await
    }

    /// Create a transfer between wallets
    pub async fn transfer_create(&self, request: TransferCreateRequest) -> Result<TransferCreated> {
        self.call_typed("transfer_create", &request).await
    }

    /// Get details of a transfer
    pub async fn transfer_info(&self, id: &str) -> Result<TransferInfo> {
        self.call_typed("transfer_info", &serde_json::json!({ "id": id }))
            .await
    }

    /// List transactions matching the given filters
    pub async fn transactions_list(
        &self,
        request: TransactionsListRequest,
    ) -> Result<Vec<Transaction>> {
        self.call_typed("transactions_list", &request).await
    }

    /// Issue an invoice
    pub async fn invoice_create(&self, request: InvoiceCreateRequest) -> Result<InvoiceCreated> {
        self.call_typed("invoice_create", &request).await
    }

    /// Get details of an issued invoice
    pub async fn invoice_info(&self, request: InvoiceInfoRequest) -> Result<InvoiceInfo> {
        self.call_typed("invoice_info", &request).await
    }

    /// Set the URL for webhook notifications
    pub async fn invoice_set_webhook(&self, url: url::Url) -> Result<()> {
        self.call("invoice_set_webhook", to_params(&serde_json::json!({ "url": url }))?)
            .await
            .map(|_| ())
    }

    /// Generate the secret keys used for invoice and webhook signatures
    pub async fn invoice_generate_secret_key(&self) -> Result<SecretKeys> {
        self.call_typed("invoice_generate_secret_key", &Map::<String, Value>::new())
            .await
    }
}

fn to_params<P: serde::Serialize>(params: &P) -> Result<Map<String, Value>> {
    match serde_json::to_value(params)? {
        Value::Object(map) => Ok(map),
        other => Err(LavaError::config(format!(
            "parameters must serialize to an object, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use rust_decimal::Decimal;
    use serde_json::json;

    fn client_for(server: &Server) -> LavaClient {
        LavaClient::with_config(LavaConfig::new("jwt-token").with_base_url(server.url())).unwrap()
    }

    #[test]
    fn test_empty_token_rejected_before_any_network_activity() {
        let result = LavaClient::new("");
        assert!(matches!(result, Err(LavaError::Config { .. })));
    }

    #[tokio::test]
    async fn test_success_returns_data_unmodified() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/test/ping")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"status": "success", "data": {"status": true}}).to_string())
            .create();

        let client = client_for(&server);
        let data = client.test_ping().await.unwrap();
        assert_eq!(data, json!({"status": true}));
    }

    #[tokio::test]
    async fn test_requests_are_signed() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/wallet/list")
            .match_header("Authorization", "jwt-token")
            .match_header("Signature", Matcher::Regex("^[0-9a-f]{64}$".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"status": "success", "data": []}).to_string())
            .create();

        let client = client_for(&server);
        let wallets = client.wallet_list().await.unwrap();
        assert!(wallets.is_empty());
    }

    #[tokio::test]
    async fn test_post_sends_form_body_without_null_params() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/transactions/list")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("account".into(), "R10000001".into()),
                Matcher::UrlEncoded("transfer_type".into(), "transfer".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"status": "success", "data": []}).to_string())
            .create();

        let client = client_for(&server);
        let request = TransactionsListRequest::new()
            .with_transfer_type("transfer")
            .with_account("R10000001");
        let transactions = client.transactions_list(request).await.unwrap();
        assert!(transactions.is_empty());
    }

    #[tokio::test]
    async fn test_error_envelope_raises_remote_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/test/ping")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({"status": "error", "message": "Invalid token", "code": 5}).to_string(),
            )
            .create();

        let client = client_for(&server);
        let err = client.test_ping().await.unwrap_err();
        match err {
            LavaError::Remote { message, code } => {
                assert_eq!(message, "Invalid token");
                assert_eq!(code, 5);
            }
            other => panic!("expected remote error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_raises_transport_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/test/ping")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create();

        let client = client_for(&server);
        let err = client.test_ping().await.unwrap_err();
        assert!(matches!(err, LavaError::Transport { .. }));
        assert!(err.to_string().contains("unexpected response"));
    }

    #[tokio::test]
    async fn test_unknown_envelope_status_raises_transport_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/test/ping")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"status": "pending"}).to_string())
            .create();

        let client = client_for(&server);
        let err = client.test_ping().await.unwrap_err();
        assert!(matches!(err, LavaError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_concurrent_calls_do_not_interfere() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/wallet/list")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({"status": "success", "data": [
                    {"account": "R10000001", "currency": "RUB", "balance": "1500.00"}
                ]})
                .to_string(),
            )
            .expect(2)
            .create();

        let client = client_for(&server);
        let (first, second) = tokio::join!(client.wallet_list(), client.wallet_list());
        assert_eq!(first.unwrap()[0].account, "R10000001");
        assert_eq!(second.unwrap()[0].account, "R10000001");
    }

    #[tokio::test]
    async fn test_withdraw_create_round_trip() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/withdraw/create")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("account".into(), "R10000001".into()),
                Matcher::UrlEncoded("amount".into(), "1000.01".into()),
                Matcher::UrlEncoded("service".into(), "card".into()),
                Matcher::UrlEncoded("wallet_to".into(), "4242424242424242".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({"status": "success", "data": {
                    "id": "3e22b0c8-2c4a-93d8-2f6d-b93ce824ee62",
                    "amount": "1000.01",
                    "commission": 50
                }})
                .to_string(),
            )
            .create();

        let client = client_for(&server);
        let request = WithdrawCreateRequest::new(
            "R10000001",
            "1000.01".parse::<Decimal>().unwrap(),
            "card",
            "4242424242424242",
        );
        let created = client.withdraw_create(request).await.unwrap();
        assert_eq!(created.id, "3e22b0c8-2c4a-93d8-2f6d-b93ce824ee62");
        assert_eq!(created.commission, Decimal::from(50));
    }

    #[tokio::test]
    async fn test_generic_call_reaches_unknown_endpoint() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/payoff/create-request")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"status": "success", "data": {"accepted": true}}).to_string())
            .create();

        let client = client_for(&server);
        let mut params = Map::new();
        params.insert("amount".to_string(), json!("10.00"));
        let data = client.call("payoff_create_request", params).await.unwrap();
        assert_eq!(data, json!({"accepted": true}));
    }

    #[tokio::test]
    async fn test_invoice_info_lookup_by_order_id() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/invoice/info")
            .match_body(Matcher::UrlEncoded("order_id".into(), "order_125".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({"status": "success", "data": {
                    "id": "1ee31634-e3e0-34ce-1423-b5b4cb524c6a",
                    "order_id": "order_125",
                    "expire": 1636983503,
                    "sum": "100.00",
                    "comment": null,
                    "status": "success",
                    "success_url": null,
                    "fail_url": null,
                    "hook_url": null,
                    "custom_fields": null
                }})
                .to_string(),
            )
            .create();

        let client = client_for(&server);
        let info = client
            .invoice_info(InvoiceInfoRequest::by_order_id("order_125"))
            .await
            .unwrap();
        assert_eq!(info.order_id.as_deref(), Some("order_125"));
        assert_eq!(info.sum, Decimal::new(10000, 2));
    }
}
