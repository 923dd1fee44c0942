use crate::core::errors::ExchangeError;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Result type for signing operations: headers to attach to the request
pub type SignatureResult = Result<Vec<(String, String)>, ExchangeError>;

/// Signer trait for request authentication
///
/// Implementations turn the exact bytes of an outgoing request into the
/// authentication headers the remote service expects.
pub trait Signer: Send + Sync {
    /// Sign a request and return the headers to attach
    ///
    /// # Arguments
    /// * `method` - HTTP method (GET, POST, etc.)
    /// * `endpoint` - API endpoint path, without query string
    /// * `query_string` - Query string (without leading '?')
    /// * `body` - Raw request body bytes, empty when the request has none
    /// * `timestamp` - Request timestamp in milliseconds, already clock-corrected
    fn sign_request(
        &self,
        method: &str,
        endpoint: &str,
        query_string: &str,
        body: &[u8],
        timestamp: u64,
    ) -> SignatureResult;
}

/// What a bodyless request contributes to the signed message.
///
/// The server rebuilds the message byte for byte, so this has to match its
/// own verification rather than whatever looks natural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyBodyMarker {
    /// Nothing is appended
    #[default]
    Empty,
    /// The literal text `None` is appended
    NoneLiteral,
}

impl EmptyBodyMarker {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::NoneLiteral => "None",
        }
    }
}

/// Lowercase hex HMAC-SHA256 of `timestamp || method || path || body`
pub fn sign_prehash(
    secret_key: &[u8],
    timestamp: &str,
    method: &str,
    request_path: &str,
    body: &str,
) -> Result<String, ExchangeError> {
    let mut mac = HmacSha256::new_from_slice(secret_key)
        .map_err(|e| ExchangeError::AuthError(format!("Invalid secret key: {}", e)))?;

    mac.update(timestamp.as_bytes());
    mac.update(method.as_bytes());
    mac.update(request_path.as_bytes());
    mac.update(body.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}
