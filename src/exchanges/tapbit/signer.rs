use crate::core::errors::ExchangeError;
use crate::core::kernel::{sign_prehash, EmptyBodyMarker, SignatureResult, Signer};
use secrecy::{ExposeSecret, Secret};

pub const ACCESS_KEY_HEADER: &str = "ACCESS-KEY";
pub const ACCESS_SIGN_HEADER: &str = "ACCESS-SIGN";
pub const ACCESS_TIMESTAMP_HEADER: &str = "ACCESS-TIMESTAMP";

/// Tapbit HMAC-SHA256 signer
///
/// The prehash string is `timestamp + method + endpoint + body`, where the
/// endpoint excludes the query string and the body is the JSON text exactly
/// as sent.
#[derive(Debug, Clone)]
pub struct TapbitSigner {
    api_key: Secret<String>,
    secret_key: Secret<String>,
    empty_body: EmptyBodyMarker,
}

impl TapbitSigner {
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key: Secret::new(api_key),
            secret_key: Secret::new(secret_key),
            empty_body: EmptyBodyMarker::default(),
        }
    }

    #[must_use]
    pub fn with_empty_body_marker(mut self, marker: EmptyBodyMarker) -> Self {
        self.empty_body = marker;
        self
    }

    /// Generate the signature for one request
    pub fn generate_signature(
        &self,
        timestamp: &str,
        method: &str,
        endpoint: &str,
        body: &str,
    ) -> Result<String, ExchangeError> {
        sign_prehash(
            self.secret_key.expose_secret().as_bytes(),
            timestamp,
            method,
            endpoint,
            body,
        )
    }
}

impl Signer for TapbitSigner {
    fn sign_request(
        &self,
        method: &str,
        endpoint: &str,
        _query_string: &str,
        body: &[u8],
        timestamp: u64,
    ) -> SignatureResult {
        let body_str = if body.is_empty() {
            self.empty_body.as_str()
        } else {
            std::str::from_utf8(body)
                .map_err(|e| ExchangeError::AuthError(format!("Invalid body encoding: {}", e)))?
        };

        let timestamp = timestamp.to_string();
        let signature = self.generate_signature(&timestamp, method, endpoint, body_str)?;

        Ok(vec![
            (
                ACCESS_KEY_HEADER.to_string(),
                self.api_key.expose_secret().clone(),
            ),
            (ACCESS_SIGN_HEADER.to_string(), signature),
            (ACCESS_TIMESTAMP_HEADER.to_string(), timestamp),
        ])
    }
}
