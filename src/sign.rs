//! Request signing for the lava.ru API
//!
//! The signature is an HMAC-SHA256 over the canonical form of the request
//! parameters, keyed by the account token. Canonicalization: null-valued
//! parameters are dropped, the rest are sorted by key and rendered as
//! `key=value` pairs joined with `&`. Scalar values use their plain string
//! form; compound values use compact JSON.

use crate::Result;
use hmac::{Hmac, Mac};
use serde_json::{Map, Value};
use sha2::Sha256;
use std::collections::BTreeMap;

type HmacSha256 = Hmac<Sha256>;

/// Render a parameter value for the canonical string and the wire encoding
pub fn render_value(value: &Value) -> Result<String> {
    Ok(match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        compound => serde_json::to_string(compound)?,
    })
}

/// Sorted `(key, rendered value)` pairs with null-valued parameters dropped
pub fn canonical_pairs(params: &Map<String, Value>) -> Result<Vec<(String, String)>> {
    let sorted: BTreeMap<&String, &Value> = params
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k, v))
        .collect();

    let mut pairs = Vec::with_capacity(sorted.len());
    for (key, value) in sorted {
        pairs.push((key.clone(), render_value(value)?));
    }
    Ok(pairs)
}

/// Canonical string form of a parameter set
pub fn canonical_string(params: &Map<String, Value>) -> Result<String> {
    let pairs = canonical_pairs(params)?;
    Ok(pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&"))
}

/// Compute the request signature for a parameter set
///
/// Pure function of the token and the sorted parameter set: identical inputs
/// always produce identical signatures.
pub fn signature(token: &str, params: &Map<String, Value>) -> Result<String> {
    let message = canonical_string(params)?;
    let mut mac = HmacSha256::new_from_slice(token.as_bytes())
        .map_err(|e| crate::LavaError::config(format!("invalid signing key: {}", e)))?;
    mac.update(message.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}
