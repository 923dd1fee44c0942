use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{
    Clock, ClockOffset, EmptyBodyMarker, ReqwestRest, RestClient, RestClientBuilder,
    RestClientConfig, SystemClock,
};
use crate::exchanges::tapbit::connector::TapbitConnector;
use crate::exchanges::tapbit::conversions;
use crate::exchanges::tapbit::endpoints::Endpoint;
use crate::exchanges::tapbit::signer::TapbitSigner;
use crate::exchanges::tapbit::DEFAULT_BASE_URL;
use std::sync::Arc;
use tracing::{info, instrument};

/// Builder for creating Tapbit connectors
///
/// Building performs one request: the server time used to fix the clock
/// offset. A client whose clock cannot be synchronized is never returned.
pub struct TapbitBuilder {
    config: ExchangeConfig,
    clock: Arc<dyn Clock>,
    empty_body_marker: EmptyBodyMarker,
    rest_timeout: u64,
}

impl Default for TapbitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TapbitBuilder {
    pub fn new() -> Self {
        Self {
            config: ExchangeConfig::read_only(),
            clock: Arc::new(SystemClock),
            empty_body_marker: EmptyBodyMarker::default(),
            rest_timeout: 30,
        }
    }

    pub fn with_config(mut self, config: ExchangeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set API credentials, keeping any base URL already configured
    pub fn with_credentials(mut self, api_key: String, secret_key: String) -> Self {
        let mut config = ExchangeConfig::new(api_key, secret_key);
        config.passphrase = self.config.passphrase.take();
        config.base_url = self.config.base_url.take();
        self.config = config;
        self
    }

    /// Stored with the credentials; Tapbit's signature does not use it
    pub fn with_passphrase(mut self, passphrase: String) -> Self {
        self.config = self.config.passphrase(passphrase);
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.config.base_url = Some(base_url);
        self
    }

    /// Replace the local time source used for syncing and signing
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// What to sign in place of the body for requests without one
    pub fn with_empty_body_marker(mut self, marker: EmptyBodyMarker) -> Self {
        self.empty_body_marker = marker;
        self
    }

    /// Set REST client timeout in seconds
    pub fn with_rest_timeout(mut self, timeout: u64) -> Self {
        self.rest_timeout = timeout;
        self
    }

    /// Build the REST client, synchronize its clock and wrap it in a connector
    pub async fn build(self) -> Result<TapbitConnector<ReqwestRest>, ExchangeError> {
        let base_url = self
            .config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let rest_config =
            RestClientConfig::new(base_url, "tapbit".to_string()).with_timeout(self.rest_timeout);

        let mut rest_builder =
            RestClientBuilder::new(rest_config).with_clock(Arc::clone(&self.clock));

        if self.config.has_credentials() {
            let signer = TapbitSigner::new(
                self.config.api_key().to_string(),
                self.config.secret_key().to_string(),
            )
            .with_empty_body_marker(self.empty_body_marker);
            rest_builder = rest_builder.with_signer(Arc::new(signer));
        }

        let rest = rest_builder.build()?;
        let offset = sync_clock(&rest, self.clock.as_ref()).await?;
        info!(%offset, "Synchronized clock with Tapbit server");

        Ok(TapbitConnector::new(rest.with_clock_offset(offset)))
    }
}

/// Measure `server - local` against the spot time endpoint
///
/// Local time is sampled once the response has arrived. Any failure,
/// transport or parsing, is reported as [`ExchangeError::ClockSyncError`].
#[instrument(skip(rest, clock), fields(exchange = "tapbit"))]
pub async fn sync_clock<R: RestClient>(
    rest: &R,
    clock: &dyn Clock,
) -> Result<ClockOffset, ExchangeError> {
    let endpoint = Endpoint::SpotServerTime;
    let response = rest
        .get(endpoint.path(), &[], endpoint.requires_auth())
        .await
        .map_err(|e| ExchangeError::ClockSyncError(format!("Server time request failed: {}", e)))?;

    let server_millis = conversions::parse_server_time(&response)
        .map_err(|e| ExchangeError::ClockSyncError(e.to_string()))?;

    Ok(ClockOffset::between(server_millis, clock.now_millis()))
}

/// Create a Tapbit connector from a configuration
pub async fn build_connector(
    config: ExchangeConfig,
) -> Result<TapbitConnector<ReqwestRest>, ExchangeError> {
    TapbitBuilder::new().with_config(config).build().await
}

/// Create a Tapbit connector from `{PREFIX}_API_KEY`, `{PREFIX}_SECRET_KEY`
/// and the optional `{PREFIX}_PASSPHRASE` / `{PREFIX}_BASE_URL`
pub async fn build_connector_from_env(
    prefix: &str,
) -> Result<TapbitConnector<ReqwestRest>, ExchangeError> {
    let config = ExchangeConfig::from_env(prefix)?;
    build_connector(config).await
}
