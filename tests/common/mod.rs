//! Shared helpers for the Tapbit integration tests

use serde_json::json;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tapbit_client::core::config::ExchangeConfig;
use tapbit_client::core::kernel::Clock;
use tapbit_client::exchanges::tapbit::TapbitBuilder;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-api-key";
pub const SECRET_KEY: &str = "test-secret-key";

/// `1970-01-01T00:01:40Z`, i.e. 100 000 ms after the epoch
pub const SERVER_TIME: &str = "1970-01-01T00:01:40.000000+0000";
pub const SERVER_MILLIS: i64 = 100_000;

/// Local clock the test moves by hand
#[derive(Debug)]
pub struct ManualClock(AtomicI64);

impl ManualClock {
    pub fn at(millis: i64) -> Arc<Self> {
        Arc::new(Self(AtomicI64::new(millis)))
    }

    pub fn set(&self, millis: i64) {
        self.0.store(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// Setup a mock HTTP server answering the spot time endpoint
pub async fn setup_mock_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/spot/api/spot/time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "",
            "data": { "timestamp": SERVER_TIME }
        })))
        .mount(&server)
        .await;
    server
}

pub fn credentials(server: &MockServer) -> ExchangeConfig {
    ExchangeConfig::new(API_KEY.to_string(), SECRET_KEY.to_string()).base_url(server.uri())
}

pub fn read_only(server: &MockServer) -> ExchangeConfig {
    ExchangeConfig::read_only().base_url(server.uri())
}

pub fn builder(config: ExchangeConfig, clock: &Arc<ManualClock>) -> TapbitBuilder {
    TapbitBuilder::new()
        .with_config(config)
        .with_clock(clock.clone())
}
