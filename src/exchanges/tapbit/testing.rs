use crate::core::errors::ExchangeError;
use crate::core::kernel::{ClockOffset, RestClient};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Value};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub endpoint: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub authenticated: bool,
}

/// In-memory `RestClient` that records every dispatch and answers with a canned body
#[derive(Debug)]
pub struct RecordingRest {
    calls: Mutex<Vec<RecordedCall>>,
    response: Value,
}

impl Default for RecordingRest {
    fn default() -> Self {
        Self::responding(json!({ "code": 200, "data": {} }))
    }
}

impl RecordingRest {
    pub fn responding(response: Value) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response,
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls().pop().expect("no request was dispatched")
    }
}

#[async_trait]
impl RestClient for RecordingRest {
    async fn dispatch(
        &self,
        method: Method,
        endpoint: &str,
        query_params: &[(&str, &str)],
        body: Option<&Value>,
        authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            endpoint: endpoint.to_string(),
            query: query_params
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            body: body.cloned(),
            authenticated,
        });
        Ok(self.response.clone())
    }

    fn clock_offset(&self) -> ClockOffset {
        ClockOffset::ZERO
    }
}
