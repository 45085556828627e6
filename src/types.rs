//! Core types for the lava.ru API client

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Default base URL of the lava.ru API
pub const DEFAULT_BASE_URL: &str = "https://api.lava.ru";

/// Client configuration
///
/// An explicit value passed at construction; there is no process-wide
/// default token or base URL.
#[derive(Debug, Clone)]
pub struct LavaConfig {
    /// Account JWT token
    pub token: String,
    /// Base URL of the API
    pub base_url: String,
    /// Request timeout
    pub timeout: Option<Duration>,
}

impl LavaConfig {
    /// Create a new config with the default base URL
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.token.is_empty() {
            return Err(crate::LavaError::config("token must not be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(crate::LavaError::config(
                "base URL must start with http:// or https://",
            ));
        }

        Ok(())
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Response envelope returned by every endpoint
///
/// `data` carries the payload on success; `message` and `code` describe the
/// failure on error. Any other shape is treated as a transport error.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiEnvelope {
    Success {
        #[serde(default)]
        data: Value,
    },
    Error {
        message: String,
        code: i64,
    },
}

/// A wallet with its balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    /// Wallet account number (e.g., "R10000001")
    pub account: String,
    /// Wallet currency code
    pub currency: String,
    /// Current balance
    pub balance: Decimal,
}

/// Parameters for creating a withdrawal
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawCreateRequest {
    /// Wallet the withdrawal is made from
    pub account: String,
    /// Withdrawal amount
    pub amount: Decimal,
    /// Withdrawal service (e.g., "card")
    pub service: String,
    /// Recipient account number
    pub wallet_to: String,
    /// Unique order number in the caller's system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Webhook URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_url: Option<Url>,
    /// Where the commission is taken from: 1 - balance, 0 - amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substract: Option<u8>,
    /// Withdrawal comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl WithdrawCreateRequest {
    /// Create a withdrawal request with the required fields
    pub fn new(
        account: impl Into<String>,
        amount: Decimal,
        service: impl Into<String>,
        wallet_to: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            amount,
            service: service.into(),
            wallet_to: wallet_to.into(),
            order_id: None,
            hook_url: None,
            substract: None,
            comment: None,
        }
    }

    /// Set the order number
    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    /// Set the webhook URL
    pub fn with_hook_url(mut self, hook_url: Url) -> Self {
        self.hook_url = Some(hook_url);
        self
    }

    /// Set the commission source
    pub fn with_substract(mut self, substract: u8) -> Self {
        self.substract = Some(substract);
        self
    }

    /// Set the comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A created withdrawal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawCreated {
    /// Withdrawal id
    pub id: String,
    /// Withdrawal amount
    pub amount: Decimal,
    /// Commission charged
    pub commission: Decimal,
}

/// Details of a withdrawal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawInfo {
    /// Withdrawal id
    pub id: String,
    /// Creation time (unix timestamp)
    pub created_at: String,
    /// Withdrawal amount
    pub amount: Decimal,
    /// Commission charged
    pub commission: Decimal,
    /// Withdrawal status (e.g., "pending")
    pub status: String,
    /// Withdrawal service
    pub service: String,
    /// Comment given at creation
    pub comment: Option<String>,
    /// Currency code
    pub currency: String,
}

/// Parameters for creating a transfer between wallets
#[derive(Debug, Clone, Serialize)]
pub struct TransferCreateRequest {
    /// Wallet the transfer is made from
    pub account_from: String,
    /// Wallet the transfer is made to
    pub account_to: String,
    /// Transfer amount
    pub amount: Decimal,
    /// Where the commission is taken from: 1 - balance, 0 - amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtract: Option<u8>,
    /// Transfer comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl TransferCreateRequest {
    /// Create a transfer request with the required fields
    pub fn new(
        account_from: impl Into<String>,
        account_to: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            account_from: account_from.into(),
            account_to: account_to.into(),
            amount,
            subtract: None,
            comment: None,
        }
    }

    /// Set the commission source
    pub fn with_subtract(mut self, subtract: u8) -> Self {
        self.subtract = Some(subtract);
        self
    }

    /// Set the comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A created transfer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferCreated {
    /// Transfer id
    pub id: String,
    /// Transfer amount
    pub amount: Decimal,
    /// Commission charged
    pub commission: Decimal,
}

/// Details of a transfer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferInfo {
    /// Transfer id
    pub id: String,
    /// Creation time (unix timestamp)
    pub created_at: String,
    /// Transfer amount
    pub amount: Decimal,
    /// Transfer status
    pub status: String,
    /// Comment given at creation
    pub comment: Option<String>,
    /// Currency code
    pub currency: String,
    /// Direction: "in" - deposit, "out" - transfer out
    #[serde(rename = "type")]
    pub direction: String,
    /// Recipient wallet
    pub receiver: String,
    /// Commission charged
    pub commission: Decimal,
}

/// Filters for listing transactions
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionsListRequest {
    /// Transfer type: "withdraw" or "transfer"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_type: Option<String>,
    /// Wallet account number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Show transactions created at or after this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,
    /// Show transactions created at or before this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_end: Option<String>,
    /// Number of results to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Maximum number of results (max 50)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl TransactionsListRequest {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by transfer type
    pub fn with_transfer_type(mut self, transfer_type: impl Into<String>) -> Self {
        self.transfer_type = Some(transfer_type.into());
        self
    }

    /// Filter by wallet account
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Set the period start
    pub fn with_period_start(mut self, period_start: impl Into<String>) -> Self {
        self.period_start = Some(period_start.into());
        self
    }

    /// Set the period end
    pub fn with_period_end(mut self, period_end: impl Into<String>) -> Self {
        self.period_end = Some(period_end.into());
        self
    }

    /// Set the offset
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the limit
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A ledger transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction id
    pub id: String,
    /// Creation time (unix timestamp)
    pub created_at: String,
    /// Creation time
    pub created_date: DateTime<Utc>,
    /// Transaction amount
    pub amount: Decimal,
    /// Transaction status
    pub status: String,
    /// Transfer type: "withdraw" or "transfer"
    pub transfer_type: String,
    /// Transaction comment
    pub comment: Option<String>,
    /// Method: "1" - credit, "-1" - debit
    pub method: String,
    /// Currency code
    pub currency: String,
    /// Wallet account number
    pub account: String,
    /// Commission charged
    pub commission: Decimal,
    /// Direction: "in" - deposit, "out" - transfer out
    #[serde(rename = "type")]
    pub direction: String,
    /// Recipient account number
    pub receiver: Option<String>,
}

/// Parameters for issuing an invoice
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceCreateRequest {
    /// Account number the funds are credited to
    pub wallet_to: String,
    /// Invoice amount, two decimal places
    pub sum: Decimal,
    /// Unique order number in the caller's system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Webhook URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_url: Option<Url>,
    /// Redirect URL after a successful payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<Url>,
    /// Redirect URL after a failed payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_url: Option<Url>,
    /// Invoice lifetime in minutes (1..=43200, default 1440)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<u32>,
    /// Who pays the commission: 1 - client, 0 - shop
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substract: Option<u8>,
    /// Extra field echoed back in the webhook
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<String>,
    /// Payment comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Merchant id (webhook only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    /// Merchant name (shown on the payment form)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
}

impl InvoiceCreateRequest {
    /// Create an invoice request with the required fields
    pub fn new(wallet_to: impl Into<String>, sum: Decimal) -> Self {
        Self {
            wallet_to: wallet_to.into(),
            sum,
            order_id: None,
            hook_url: None,
            success_url: None,
            fail_url: None,
            expire: None,
            substract: None,
            custom_fields: None,
            comment: None,
            merchant_id: None,
            merchant_name: None,
        }
    }

    /// Set the order number
    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    /// Set the webhook URL
    pub fn with_hook_url(mut self, hook_url: Url) -> Self {
        self.hook_url = Some(hook_url);
        self
    }

    /// Set the success redirect URL
    pub fn with_success_url(mut self, success_url: Url) -> Self {
        self.success_url = Some(success_url);
        self
    }

    /// Set the failure redirect URL
    pub fn with_fail_url(mut self, fail_url: Url) -> Self {
        self.fail_url = Some(fail_url);
        self
    }

    /// Set the invoice lifetime in minutes
    pub fn with_expire(mut self, expire: u32) -> Self {
        self.expire = Some(expire);
        self
    }

    /// Set who pays the commission
    pub fn with_substract(mut self, substract: u8) -> Self {
        self.substract = Some(substract);
        self
    }

    /// Set the webhook extra field
    pub fn with_custom_fields(mut self, custom_fields: impl Into<String>) -> Self {
        self.custom_fields = Some(custom_fields.into());
        self
    }

    /// Set the comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Set the merchant id
    pub fn with_merchant_id(mut self, merchant_id: impl Into<String>) -> Self {
        self.merchant_id = Some(merchant_id.into());
        self
    }

    /// Set the merchant name
    pub fn with_merchant_name(mut self, merchant_name: impl Into<String>) -> Self {
        self.merchant_name = Some(merchant_name.into());
        self
    }
}

/// An issued invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceCreated {
    /// Invoice id
    pub id: String,
    /// Payment form URL
    pub url: String,
    /// Invoice expiry time (unix timestamp)
    pub expire: i64,
    /// Invoice amount
    pub sum: Decimal,
    /// Redirect URL after a successful payment
    pub success_url: Option<String>,
    /// Redirect URL after a failed payment
    pub fail_url: Option<String>,
    /// Webhook URL
    pub hook_url: Option<String>,
    /// Extra field echoed back in the webhook
    pub custom_fields: Option<String>,
    /// Merchant name
    pub merchant_name: Option<String>,
    /// Merchant id
    pub merchant_id: Option<String>,
}

/// Lookup key for an invoice: the remote id or the caller's order id
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceInfoRequest {
    /// Invoice id in the remote system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Order number in the caller's system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

impl InvoiceInfoRequest {
    /// Look up by the remote invoice id
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            order_id: None,
        }
    }

    /// Look up by the caller's order number
    pub fn by_order_id(order_id: impl Into<String>) -> Self {
        Self {
            id: None,
            order_id: Some(order_id.into()),
        }
    }
}

/// Details of an issued invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceInfo {
    /// Invoice id
    pub id: String,
    /// Order number in the caller's system
    pub order_id: Option<String>,
    /// Invoice expiry time (unix timestamp)
    pub expire: i64,
    /// Invoice amount
    pub sum: Decimal,
    /// Payment comment
    pub comment: Option<String>,
    /// Invoice status
    pub status: String,
    /// Redirect URL after a successful payment
    pub success_url: Option<String>,
    /// Redirect URL after a failed payment
    pub fail_url: Option<String>,
    /// Webhook URL
    pub hook_url: Option<String>,
    /// Extra field echoed back in the webhook
    pub custom_fields: Option<String>,
}

/// Secret keys for the legacy invoice signature and the webhook signature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretKeys {
    /// Key for the legacy invoice signature
    pub secret_key: String,
    /// Key for the webhook signature
    pub secret_key_2: String,
}
