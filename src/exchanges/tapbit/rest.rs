use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::exchanges::tapbit::endpoints::Endpoint;
use crate::exchanges::tapbit::types::{
    TapbitBatchCancelRequest, TapbitCancelRequest, TapbitOrderRequest,
};
use serde::Serialize;
use serde_json::Value;

/// Default order book depth requested when the caller does not pick one
pub const DEFAULT_DEPTH: u32 = 10;

/// Tapbit REST API client implementation
///
/// One method per row of [`Endpoint`]. Responses are returned exactly as the
/// server sent them.
#[derive(Debug, Clone)]
pub struct TapbitRest<R: RestClient> {
    rest_client: R,
}

impl<R: RestClient> TapbitRest<R> {
    pub fn new(rest_client: R) -> Self {
        Self { rest_client }
    }

    pub fn rest_client(&self) -> &R {
        &self.rest_client
    }

    async fn call(
        &self,
        endpoint: Endpoint,
        query_params: &[(&str, &str)],
        body: Option<&Value>,
    ) -> Result<Value, ExchangeError> {
        self.rest_client
            .dispatch(
                endpoint.method(),
                endpoint.path(),
                query_params,
                body,
                endpoint.requires_auth(),
            )
            .await
    }

    async fn call_with_body<T: Serialize + Sync>(
        &self,
        endpoint: Endpoint,
        body: &T,
    ) -> Result<Value, ExchangeError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ExchangeError::SerializationError(e.to_string()))?;
        self.call(endpoint, &[], Some(&body)).await
    }

    // Swap (USDT-margined contract) market data

    pub async fn get_swap_server_time(&self) -> Result<Value, ExchangeError> {
        self.call(Endpoint::SwapServerTime, &[], None).await
    }

    pub async fn get_swap_instruments(&self) -> Result<Value, ExchangeError> {
        self.call(Endpoint::SwapInstruments, &[], None).await
    }

    pub async fn get_swap_order_book(
        &self,
        instrument_id: &str,
        depth: u32,
    ) -> Result<Value, ExchangeError> {
        let depth_str = depth.to_string();
        let query_params = [("instrument_id", instrument_id), ("depth", depth_str.as_str())];
        self.call(Endpoint::SwapDepth, &query_params, None).await
    }

    pub async fn get_swap_candles(
        &self,
        instrument_id: &str,
        start_time: i64,
        end_time: i64,
        period: &str,
    ) -> Result<Value, ExchangeError> {
        let start_str = start_time.to_string();
        let end_str = end_time.to_string();
        let query_params = [
            ("instrument_id", instrument_id),
            ("start_time", start_str.as_str()),
            ("end_time", end_str.as_str()),
            ("period", period),
        ];
        self.call(Endpoint::SwapCandles, &query_params, None).await
    }

    pub async fn get_swap_ticker(&self, instrument_id: &str) -> Result<Value, ExchangeError> {
        self.call(Endpoint::SwapTicker, &[("instrument_id", instrument_id)], None)
            .await
    }

    pub async fn get_swap_tickers(&self) -> Result<Value, ExchangeError> {
        self.call(Endpoint::SwapTickers, &[], None).await
    }

    pub async fn get_swap_funding_rate(&self, instrument_id: &str) -> Result<Value, ExchangeError> {
        self.call(
            Endpoint::SwapFundingRate,
            &[("instrument_id", instrument_id)],
            None,
        )
        .await
    }

    pub async fn get_swap_recent_trades(
        &self,
        instrument_id: &str,
    ) -> Result<Value, ExchangeError> {
        self.call(Endpoint::SwapTrades, &[("instrument_id", instrument_id)], None)
            .await
    }

    // Spot market data

    pub async fn get_spot_server_time(&self) -> Result<Value, ExchangeError> {
        self.call(Endpoint::SpotServerTime, &[], None).await
    }

    pub async fn get_spot_instrument(&self, instrument_id: &str) -> Result<Value, ExchangeError> {
        self.call(
            Endpoint::SpotInstrument,
            &[("instrument_id", instrument_id)],
            None,
        )
        .await
    }

    pub async fn get_spot_instruments(&self) -> Result<Value, ExchangeError> {
        self.call(Endpoint::SpotInstruments, &[], None).await
    }

    pub async fn get_spot_order_book(
        &self,
        instrument_id: &str,
        depth: u32,
    ) -> Result<Value, ExchangeError> {
        let depth_str = depth.to_string();
        let query_params = [("instrument_id", instrument_id), ("depth", depth_str.as_str())];
        self.call(Endpoint::SpotDepth, &query_params, None).await
    }

    pub async fn get_spot_ticker(&self, instrument_id: &str) -> Result<Value, ExchangeError> {
        self.call(Endpoint::SpotTicker, &[("instrument_id", instrument_id)], None)
            .await
    }

    pub async fn get_spot_tickers(&self) -> Result<Value, ExchangeError> {
        self.call(Endpoint::SpotTickers, &[], None).await
    }

    pub async fn get_spot_candles(
        &self,
        instrument_id: &str,
        period: &str,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Value, ExchangeError> {
        let mut query_params = vec![("instrument_id", instrument_id), ("period", period)];

        let start_str;
        if let Some(start) = start_time {
            start_str = start.to_string();
            query_params.push(("start_time", start_str.as_str()));
        }

        let end_str;
        if let Some(end) = end_time {
            end_str = end.to_string();
            query_params.push(("end_time", end_str.as_str()));
        }

        self.call(Endpoint::SpotCandles, &query_params, None).await
    }

    pub async fn get_spot_recent_trades(
        &self,
        instrument_id: &str,
    ) -> Result<Value, ExchangeError> {
        self.call(Endpoint::SpotTrades, &[("instrument_id", instrument_id)], None)
            .await
    }

    pub async fn get_asset_list(&self, currency: Option<&str>) -> Result<Value, ExchangeError> {
        let query_params = currency.map_or_else(Vec::new, |ccy| vec![("currency", ccy)]);
        self.call(Endpoint::AssetList, &query_params, None).await
    }

    // Account API endpoints (require authentication)

    pub async fn get_spot_accounts(&self) -> Result<Value, ExchangeError> {
        self.call(Endpoint::SpotAccounts, &[], None).await
    }

    pub async fn get_spot_account(&self, asset: &str) -> Result<Value, ExchangeError> {
        self.call(Endpoint::SpotAccount, &[("asset", asset)], None)
            .await
    }

    // Order API endpoints (require authentication)

    pub async fn place_order(&self, order: &TapbitOrderRequest) -> Result<Value, ExchangeError> {
        self.call_with_body(Endpoint::PlaceOrder, order).await
    }

    pub async fn place_batch_orders(
        &self,
        orders: &[TapbitOrderRequest],
    ) -> Result<Value, ExchangeError> {
        self.call_with_body(Endpoint::PlaceBatchOrders, &orders).await
    }

    pub async fn cancel_order(&self, order_id: &str) -> Result<Value, ExchangeError> {
        let request = TapbitCancelRequest {
            order_id: order_id.to_string(),
        };
        self.call_with_body(Endpoint::CancelOrder, &request).await
    }

    pub async fn batch_cancel_orders(&self, order_ids: &[String]) -> Result<Value, ExchangeError> {
        let request = TapbitBatchCancelRequest {
            order_ids: order_ids.to_vec(),
        };
        self.call_with_body(Endpoint::BatchCancelOrders, &request)
            .await
    }

    pub async fn get_open_orders(
        &self,
        instrument_id: &str,
        next_order_id: Option<&str>,
    ) -> Result<Value, ExchangeError> {
        let mut query_params = vec![("instrument_id", instrument_id)];
        if let Some(next) = next_order_id {
            query_params.push(("next_order_id", next));
        }
        self.call(Endpoint::OpenOrders, &query_params, None).await
    }

    pub async fn get_closed_orders(
        &self,
        instrument_id: &str,
        next_order_id: Option<&str>,
    ) -> Result<Value, ExchangeError> {
        let mut query_params = vec![("instrument_id", instrument_id)];
        if let Some(next) = next_order_id {
            query_params.push(("next_order_id", next));
        }
        self.call(Endpoint::ClosedOrders, &query_params, None).await
    }

    pub async fn get_order_info(&self, order_id: &str) -> Result<Value, ExchangeError> {
        self.call(Endpoint::OrderInfo, &[("order_id", order_id)], None)
            .await
    }
}
