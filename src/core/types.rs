use crate::core::errors::ExchangeError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

impl FromStr for OrderSide {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            other => Err(ExchangeError::InvalidParameters(format!(
                "Unknown order side: {}",
                other
            ))),
        }
    }
}

/// How much of the instrument a market order should move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum OrderSize {
    /// Absolute quantity in base units
    ByAmount(Decimal),
    /// Share of the available balance, in percent
    ByPercent(Decimal),
}

impl OrderSize {
    /// Build a size from the loose "amount or percent" pair.
    ///
    /// Exactly one of the two must be present.
    pub fn from_parts(
        amount: Option<Decimal>,
        percent: Option<Decimal>,
    ) -> Result<Self, ExchangeError> {
        match (amount, percent) {
            (Some(amount), None) => Ok(Self::ByAmount(amount)),
            (None, Some(percent)) => Ok(Self::ByPercent(percent)),
            (None, None) => Err(ExchangeError::InvalidParameters(
                "Either amount or percent must be specified".to_string(),
            )),
            (Some(_), Some(_)) => Err(ExchangeError::InvalidParameters(
                "Only one of amount or percent may be specified".to_string(),
            )),
        }
    }
}

/// A single-use market order intent.
///
/// The role flags carry caller conventions only; the client reads them but
/// routes on `side` and on which trading method is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketOrder {
    pub symbol: String,
    pub side: OrderSide,
    pub size: OrderSize,
    pub is_entry: bool,
    pub is_close: bool,
    pub is_buy: bool,
    pub is_sell: bool,
}

impl MarketOrder {
    pub fn new(symbol: impl Into<String>, side: OrderSide, size: OrderSize) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            size,
            is_entry: false,
            is_close: false,
            is_buy: false,
            is_sell: false,
        }
    }

    /// Buy intent with the `is_buy` flag already set
    pub fn buy(symbol: impl Into<String>, size: OrderSize) -> Self {
        Self::new(symbol, OrderSide::Buy, size).with_buy(true)
    }

    /// Sell intent with the `is_sell` flag already set
    pub fn sell(symbol: impl Into<String>, size: OrderSize) -> Self {
        Self::new(symbol, OrderSide::Sell, size).with_sell(true)
    }

    pub const fn with_entry(mut self, is_entry: bool) -> Self {
        self.is_entry = is_entry;
        self
    }

    pub const fn with_close(mut self, is_close: bool) -> Self {
        self.is_close = is_close;
        self
    }

    pub const fn with_buy(mut self, is_buy: bool) -> Self {
        self.is_buy = is_buy;
        self
    }

    pub const fn with_sell(mut self, is_sell: bool) -> Self {
        self.is_sell = is_sell;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionMode {
    #[default]
    OneWay,
    Hedge,
}

/// Optional features a caller can probe before relying on them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Leverage,
    HedgeMode,
    PercentSizing,
    FuturesPosition,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Leverage => "leverage setting",
            Self::HedgeMode => "hedge position mode",
            Self::PercentSizing => "percent-of-balance sizing",
            Self::FuturesPosition => "futures positions",
        };
        f.write_str(name)
    }
}
