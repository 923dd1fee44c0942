use serde::{Deserialize, Serialize};

/// Tapbit order type code for market orders
pub const MARKET_ORDER_TYPE: &str = "1";

/// Tapbit order request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapbitOrderRequest {
    pub instrument_id: String, // e.g. BTC/USDT
    pub direction: String,     // "1" buy, "2" sell
    pub quantity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce_only: Option<String>,
}

impl TapbitOrderRequest {
    /// Plain order; limit when `price` is set
    pub fn new(instrument_id: String, direction: String, quantity: String) -> Self {
        Self {
            instrument_id,
            direction,
            quantity,
            price: None,
            order_type: None,
            reduce_only: None,
        }
    }

    pub fn market(instrument_id: String, direction: String, quantity: String) -> Self {
        Self {
            order_type: Some(MARKET_ORDER_TYPE.to_string()),
            ..Self::new(instrument_id, direction, quantity)
        }
    }

    #[must_use]
    pub fn with_price(mut self, price: String) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn reduce_only(mut self) -> Self {
        self.reduce_only = Some("true".to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapbitCancelRequest {
    pub order_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapbitBatchCancelRequest {
    #[serde(rename = "orderIds")]
    pub order_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_market_order_serialization() {
        let order = TapbitOrderRequest::market(
            "BTC/USDT".to_string(),
            "1".to_string(),
            "0.001".to_string(),
        );
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "instrument_id": "BTC/USDT",
                "direction": "1",
                "quantity": "0.001",
                "order_type": "1"
            })
        );
    }

    #[test]
    fn test_reduce_only_and_price() {
        let order = TapbitOrderRequest::new(
            "ETH/USDT".to_string(),
            "2".to_string(),
            "1".to_string(),
        )
        .with_price("3500".to_string())
        .reduce_only();
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["price"], "3500");
        assert_eq!(value["reduce_only"], "true");
        assert!(value.get("order_type").is_none());
    }

    #[test]
    fn test_batch_cancel_uses_camel_case_key() {
        let request = TapbitBatchCancelRequest {
            order_ids: vec!["1".to_string(), "2".to_string()],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "orderIds": ["1", "2"] })
        );
    }
}
