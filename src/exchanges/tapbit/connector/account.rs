use super::TapbitConnector;
use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::types::Capability;
use crate::exchanges::tapbit::conversions;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, instrument};

impl<R: RestClient> TapbitConnector<R> {
    /// All spot balances
    #[instrument(skip(self), fields(exchange = "tapbit"))]
    pub async fn fetch_balance(&self) -> Result<Value, ExchangeError> {
        self.rest.get_spot_accounts().await
    }

    /// Available balance of one currency, zero when the account holds none
    #[instrument(skip(self), fields(exchange = "tapbit"))]
    pub async fn get_balance(&self, currency: &str) -> Result<Decimal, ExchangeError> {
        let response = self.fetch_balance().await?;
        let balances = conversions::response_data(&response)
            .as_array()
            .ok_or_else(|| {
                ExchangeError::DeserializationError(format!(
                    "Expected a balance list, got: {}",
                    response
                ))
            })?;

        match balances
            .iter()
            .find(|balance| balance.get("currency").and_then(Value::as_str) == Some(currency))
        {
            Some(balance) => conversions::decimal_field(balance, "available"),
            None => {
                debug!(currency, "No balance entry, treating as zero");
                Ok(Decimal::ZERO)
            }
        }
    }

    /// Futures positions are not exposed by this client
    pub async fn get_futures_position(&self, _symbol: Option<&str>) -> Result<Value, ExchangeError> {
        Err(ExchangeError::Unsupported(Capability::FuturesPosition))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::errors::ExchangeError;
    use crate::core::types::Capability;
    use crate::exchanges::tapbit::connector::TapbitConnector;
    use crate::exchanges::tapbit::testing::RecordingRest;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn balances() -> serde_json::Value {
        json!({
            "code": 200,
            "data": [
                { "currency": "BTC", "available": "0.5", "frozen": "0" },
                { "currency": "USDT", "available": "1200.75", "frozen": "10" }
            ]
        })
    }

    #[tokio::test]
    async fn test_get_balance_finds_currency() {
        let connector = TapbitConnector::new(RecordingRest::responding(balances()));
        assert_eq!(
            connector.get_balance("USDT").await.unwrap(),
            Decimal::new(120_075, 2)
        );

        let call = connector.rest().rest_client().last_call();
        assert_eq!(call.endpoint, "/spot/api/v1/spot/account/list");
        assert!(call.authenticated);
    }

    #[tokio::test]
    async fn test_get_balance_absent_currency_is_zero() {
        let connector = TapbitConnector::new(RecordingRest::responding(balances()));
        assert_eq!(connector.get_balance("ETH").await.unwrap(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_get_balance_accepts_bare_list() {
        let bare = json!([{ "currency": "BTC", "available": 0.25 }]);
        let connector = TapbitConnector::new(RecordingRest::responding(bare));
        assert_eq!(connector.get_balance("BTC").await.unwrap(), Decimal::new(25, 2));
    }

    #[tokio::test]
    async fn test_get_balance_rejects_non_list() {
        let connector =
            TapbitConnector::new(RecordingRest::responding(json!({ "code": 500, "data": null })));
        assert!(matches!(
            connector.get_balance("BTC").await,
            Err(ExchangeError::DeserializationError(_))
        ));
    }

    #[tokio::test]
    async fn test_futures_position_is_unsupported() {
        let connector = TapbitConnector::new(RecordingRest::default());
        assert!(matches!(
            connector.get_futures_position(None).await,
            Err(ExchangeError::Unsupported(Capability::FuturesPosition))
        ));
        assert!(connector.rest().rest_client().calls().is_empty());
    }
}
