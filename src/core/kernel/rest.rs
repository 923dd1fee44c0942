use crate::core::errors::ExchangeError;
use crate::core::kernel::clock::{Clock, ClockOffset, SystemClock};
use crate::core::kernel::signer::Signer;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// REST client trait for making HTTP requests
///
/// Every call is a single round trip: no retries, no response rewriting.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Sign and send one request, returning the parsed JSON body verbatim
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `endpoint` - The API endpoint path
    /// * `query_params` - Query parameters as key-value pairs
    /// * `body` - JSON payload, sent and signed byte for byte
    /// * `authenticated` - Whether the endpoint refuses unsigned requests
    async fn dispatch(
        &self,
        method: Method,
        endpoint: &str,
        query_params: &[(&str, &str)],
        body: Option<&Value>,
        authenticated: bool,
    ) -> Result<Value, ExchangeError>;

    /// Make a GET request
    async fn get(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        self.dispatch(Method::GET, endpoint, query_params, None, authenticated)
            .await
    }

    /// Make a POST request with a JSON body
    async fn post(
        &self,
        endpoint: &str,
        body: &Value,
        authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        self.dispatch(Method::POST, endpoint, &[], Some(body), authenticated)
            .await
    }

    /// Offset applied to every signed timestamp
    fn clock_offset(&self) -> ClockOffset;
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Exchange name for logging and tracing
    pub exchange_name: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    pub fn new(base_url: String, exchange_name: String) -> Self {
        Self {
            base_url,
            exchange_name,
            timeout_seconds: 30,
            user_agent: "tapbit-client/0.1".to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
    clock: Arc<dyn Clock>,
}

impl RestClientBuilder {
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            signer: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Set the signer for authenticated requests
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Replace the local time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the REST client with a zero clock offset
    pub fn build(self) -> Result<ReqwestRest, ExchangeError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| ExchangeError::ClientBuildError(e.to_string()))?;

        Ok(ReqwestRest {
            client,
            config: self.config,
            signer: self.signer,
            clock: self.clock,
            clock_offset: ClockOffset::ZERO,
        })
    }
}

/// Implementation of `RestClient` using reqwest
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
    clock: Arc<dyn Clock>,
    clock_offset: ClockOffset,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .field("has_signer", &self.signer.is_some())
            .field("clock_offset", &self.clock_offset)
            .finish_non_exhaustive()
    }
}

impl ReqwestRest {
    /// Consume the client and return one that signs with `offset`
    #[must_use]
    pub fn with_clock_offset(mut self, offset: ClockOffset) -> Self {
        self.clock_offset = offset;
        self
    }

    pub fn has_signer(&self) -> bool {
        self.signer.is_some()
    }

    /// Clock-corrected timestamp for the next signature
    fn signing_timestamp(&self) -> Result<u64, ExchangeError> {
        let corrected = self.clock_offset.apply(self.clock.now_millis());
        u64::try_from(corrected).map_err(|_| {
            ExchangeError::AuthError(format!("Signed timestamp is negative: {}", corrected))
        })
    }

    /// Build the full URL for an endpoint
    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint)
    }

    /// Create query string from parameters
    fn create_query_string(params: &[(&str, &str)]) -> String {
        params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Handle the response and extract JSON
    #[instrument(skip(self, response), fields(exchange = %self.config.exchange_name, status = %response.status()))]
    async fn handle_response(&self, response: Response) -> Result<Value, ExchangeError> {
        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            ExchangeError::NetworkError(format!("Failed to read response body: {}", e))
        })?;

        trace!("Response body: {}", response_text);

        if status.is_success() {
            serde_json::from_str(&response_text).map_err(|e| {
                ExchangeError::DeserializationError(format!("Failed to parse JSON response: {}", e))
            })
        } else {
            Err(ExchangeError::ApiError {
                code: i32::from(status.as_u16()),
                message: response_text,
            })
        }
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    #[instrument(skip(self, query_params, body), fields(exchange = %self.config.exchange_name, method = %method, endpoint = %endpoint, param_count = query_params.len()))]
    async fn dispatch(
        &self,
        method: Method,
        endpoint: &str,
        query_params: &[(&str, &str)],
        body: Option<&Value>,
        authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        let body_bytes = match body {
            Some(value) => serde_json::to_vec(value).map_err(|e| {
                ExchangeError::SerializationError(format!(
                    "Failed to serialize request body: {}",
                    e
                ))
            })?,
            None => Vec::new(),
        };

        let url = self.build_url(endpoint);
        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        match &self.signer {
            Some(signer) => {
                let timestamp = self.signing_timestamp()?;
                let query_string = Self::create_query_string(query_params);
                let headers = signer.sign_request(
                    method.as_str(),
                    endpoint,
                    &query_string,
                    &body_bytes,
                    timestamp,
                )?;

                debug!(timestamp, "Signed request");
                for (key, value) in headers {
                    request = request.header(key, value);
                }
            }
            None if authenticated => return Err(ExchangeError::AuthenticationRequired),
            None => {}
        }

        if !query_params.is_empty() {
            request = request.query(query_params);
        }

        if !body_bytes.is_empty() {
            trace!("Request body: {}", String::from_utf8_lossy(&body_bytes));
            request = request.body(body_bytes);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ExchangeError::NetworkError(format!("Request failed: {}", e)))?;

        self.handle_response(response).await
    }

    fn clock_offset(&self) -> ClockOffset {
        self.clock_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rest(base_url: &str) -> ReqwestRest {
        RestClientBuilder::new(RestClientConfig::new(
            base_url.to_string(),
            "tapbit".to_string(),
        ))
        .build()
        .unwrap()
    }

    #[test]
    fn test_build_url_joins_without_double_slash() {
        assert_eq!(
            rest("https://openapi.tapbit.com/").build_url("/spot/api/spot/time"),
            "https://openapi.tapbit.com/spot/api/spot/time"
        );
        assert_eq!(
            rest("https://openapi.tapbit.com").build_url("/spot/api/spot/time"),
            "https://openapi.tapbit.com/spot/api/spot/time"
        );
    }

    #[test]
    fn test_create_query_string() {
        assert_eq!(ReqwestRest::create_query_string(&[]), "");
        assert_eq!(
            ReqwestRest::create_query_string(&[("instrument_id", "BTC/USDT"), ("depth", "10")]),
            "instrument_id=BTC/USDT&depth=10"
        );
    }

    #[test]
    fn test_offset_is_fixed_after_construction() {
        let client = rest("http://localhost").with_clock_offset(ClockOffset::from_millis(250));
        assert_eq!(client.clock_offset(), ClockOffset::from_millis(250));
        assert!(!client.has_signer());
    }

    #[tokio::test]
    async fn test_authenticated_call_without_signer_is_rejected() {
        let client = rest("http://127.0.0.1:9");
        let result = client.get("/spot/api/v1/spot/account/list", &[], true).await;
        assert!(matches!(result, Err(ExchangeError::AuthenticationRequired)));
    }
}
