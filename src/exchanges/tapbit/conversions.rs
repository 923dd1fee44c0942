use crate::core::errors::ExchangeError;
use crate::core::types::OrderSide;
use chrono::DateTime;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Server time layout, e.g. `2024-05-01T08:30:00.123456+0000`
pub const SERVER_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Smallest bare integer read as epoch milliseconds (2001-09-09).
/// Anything lower is a seconds value or garbage.
pub const MIN_EPOCH_MILLIS: i64 = 1_000_000_000_000;

/// Convert an order side to the Tapbit direction code
pub const fn convert_order_side_to_tapbit(side: OrderSide) -> &'static str {
    match side {
        OrderSide::Buy => "1",
        OrderSide::Sell => "2",
    }
}

/// The payload of a response, looking through a `data` envelope if present
pub fn response_data(response: &Value) -> &Value {
    response.get("data").unwrap_or(response)
}

/// Parse a server timestamp into epoch milliseconds
///
/// Accepts the exchange's own layout, RFC 3339, and bare epoch milliseconds.
pub fn parse_server_timestamp(raw: &str) -> Result<i64, ExchangeError> {
    let raw = raw.trim();

    if let Ok(number) = raw.parse::<i64>() {
        return epoch_millis(number);
    }

    DateTime::parse_from_str(raw, SERVER_TIME_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|dt| dt.timestamp_millis())
        .map_err(|e| {
            ExchangeError::DeserializationError(format!(
                "Unparsable server timestamp '{}': {}",
                raw, e
            ))
        })
}

fn epoch_millis(number: i64) -> Result<i64, ExchangeError> {
    if number < MIN_EPOCH_MILLIS {
        return Err(ExchangeError::DeserializationError(format!(
            "Server timestamp {} is not in epoch milliseconds",
            number
        )));
    }
    Ok(number)
}

/// Extract the server time from a time endpoint response
pub fn parse_server_time(response: &Value) -> Result<i64, ExchangeError> {
    let field = response
        .get("timestamp")
        .or_else(|| response_data(response).get("timestamp"))
        .ok_or_else(|| {
            ExchangeError::DeserializationError(format!(
                "Missing timestamp in time response: {}",
                response
            ))
        })?;

    match field {
        Value::String(s) => parse_server_timestamp(s),
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| ExchangeError::DeserializationError(format!("Invalid timestamp: {}", n)))
            .and_then(epoch_millis),
        other => Err(ExchangeError::DeserializationError(format!(
            "Invalid timestamp: {}",
            other
        ))),
    }
}

/// Read a decimal that may be encoded as a JSON string or number
pub fn decimal_field(object: &Value, key: &str) -> Result<Decimal, ExchangeError> {
    let value = object.get(key).ok_or_else(|| {
        ExchangeError::DeserializationError(format!("Missing field '{}'", key))
    })?;

    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => {
            return Err(ExchangeError::DeserializationError(format!(
                "Field '{}' is not numeric: {}",
                key, other
            )))
        }
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|e| {
            ExchangeError::DeserializationError(format!("Invalid decimal '{}': {}", text, e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direction_codes() {
        assert_eq!(convert_order_side_to_tapbit(OrderSide::Buy), "1");
        assert_eq!(convert_order_side_to_tapbit(OrderSide::Sell), "2");
    }

    #[test]
    fn test_parse_server_timestamp_formats() {
        assert_eq!(
            parse_server_timestamp("1970-01-01T00:01:40.000000+0000").unwrap(),
            100_000
        );
        assert_eq!(
            parse_server_timestamp("1970-01-01T09:01:40.250000+0900").unwrap(),
            100_250
        );
        assert_eq!(
            parse_server_timestamp("1970-01-01T00:01:40.5Z").unwrap(),
            100_500
        );
        assert_eq!(parse_server_timestamp("1700000000123").unwrap(), 1_700_000_000_123);
    }

    #[test]
    fn test_parse_server_timestamp_rejects_garbage() {
        assert!(parse_server_timestamp("yesterday").is_err());
        assert!(parse_server_timestamp("").is_err());
    }

    #[test]
    fn test_bare_integers_must_be_epoch_millis() {
        // seconds resolution
        assert!(parse_server_timestamp("1792108800").is_err());
        assert!(parse_server_timestamp("42").is_err());
        assert!(parse_server_timestamp("-1700000000000").is_err());
        assert!(parse_server_time(&json!({ "timestamp": 1_792_108_800 })).is_err());
        assert_eq!(
            parse_server_timestamp("1792108800000").unwrap(),
            1_792_108_800_000
        );
    }

    #[test]
    fn test_parse_server_time_locations() {
        let top = json!({ "timestamp": "1970-01-01T00:01:40.000000+0000" });
        assert_eq!(parse_server_time(&top).unwrap(), 100_000);

        let wrapped = json!({ "code": 200, "data": { "timestamp": 1_700_000_000_123_i64 } });
        assert_eq!(parse_server_time(&wrapped).unwrap(), 1_700_000_000_123);

        let missing = json!({ "code": 200, "data": {} });
        assert!(parse_server_time(&missing).is_err());

        let wrong_type = json!({ "timestamp": true });
        assert!(parse_server_time(&wrong_type).is_err());
    }

    #[test]
    fn test_decimal_field() {
        let value = json!({ "last": "64250.5", "available": 0.25, "bad": [] });
        assert_eq!(decimal_field(&value, "last").unwrap(), Decimal::new(642_505, 1));
        assert_eq!(decimal_field(&value, "available").unwrap(), Decimal::new(25, 2));
        assert!(decimal_field(&value, "bad").is_err());
        assert!(decimal_field(&value, "missing").is_err());
    }

    #[test]
    fn test_response_data() {
        let wrapped = json!({ "data": [1, 2] });
        assert_eq!(response_data(&wrapped), &json!([1, 2]));
        let bare = json!([1, 2]);
        assert_eq!(response_data(&bare), &bare);
    }
}
