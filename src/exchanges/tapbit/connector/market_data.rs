use super::TapbitConnector;
use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::exchanges::tapbit::conversions;
use crate::exchanges::tapbit::rest::DEFAULT_DEPTH;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::instrument;

impl<R: RestClient> TapbitConnector<R> {
    /// Spot ticker for one instrument
    #[instrument(skip(self), fields(exchange = "tapbit"))]
    pub async fn fetch_ticker(&self, symbol: &str) -> Result<Value, ExchangeError> {
        self.rest.get_spot_ticker(symbol).await
    }

    /// Spot order book, `depth` levels per side (10 when `None`)
    #[instrument(skip(self), fields(exchange = "tapbit"))]
    pub async fn fetch_orderbook(
        &self,
        symbol: &str,
        depth: Option<u32>,
    ) -> Result<Value, ExchangeError> {
        self.rest
            .get_spot_order_book(symbol, depth.unwrap_or(DEFAULT_DEPTH))
            .await
    }

    #[instrument(skip(self), fields(exchange = "tapbit"))]
    pub async fn fetch_klines(
        &self,
        symbol: &str,
        timeframe: &str,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Value, ExchangeError> {
        self.rest
            .get_spot_candles(symbol, timeframe, start_time, end_time)
            .await
    }

    /// Last traded price from the spot ticker
    #[instrument(skip(self), fields(exchange = "tapbit"))]
    pub async fn get_price(&self, symbol: &str) -> Result<Decimal, ExchangeError> {
        let ticker = self.fetch_ticker(symbol).await?;
        conversions::decimal_field(conversions::response_data(&ticker), "last")
    }
}

#[cfg(test)]
mod tests {
    use crate::exchanges::tapbit::connector::TapbitConnector;
    use crate::exchanges::tapbit::testing::RecordingRest;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_orderbook_default_depth() {
        let connector = TapbitConnector::new(RecordingRest::default());
        connector.fetch_orderbook("BTC/USDT", None).await.unwrap();

        let call = connector.rest().rest_client().last_call();
        assert_eq!(call.query[1], ("depth".to_string(), "10".to_string()));

        connector.fetch_orderbook("BTC/USDT", Some(50)).await.unwrap();
        let call = connector.rest().rest_client().last_call();
        assert_eq!(call.query[1], ("depth".to_string(), "50".to_string()));
    }

    #[tokio::test]
    async fn test_get_price_reads_last() {
        let rest = RecordingRest::responding(json!({
            "code": 200,
            "data": { "instrument_id": "BTC/USDT", "last": "64250.5" }
        }));
        let connector = TapbitConnector::new(rest);
        let price = connector.get_price("BTC/USDT").await.unwrap();
        assert_eq!(price, Decimal::new(642_505, 1));
    }

    #[tokio::test]
    async fn test_get_price_missing_last() {
        let connector = TapbitConnector::new(RecordingRest::responding(json!({ "data": {} })));
        assert!(connector.get_price("BTC/USDT").await.is_err());
    }
}
