use super::TapbitConnector;
use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::types::{Capability, MarketOrder, OrderSide, OrderSize, PositionMode};
use crate::exchanges::tapbit::conversions;
use crate::exchanges::tapbit::types::TapbitOrderRequest;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{info, instrument};

/// Quantity to send for an order intent.
///
/// Percent sizing needs a balance lookup that this client does not perform,
/// so only explicit amounts resolve.
pub fn resolve_amount(order: &MarketOrder) -> Result<Decimal, ExchangeError> {
    match order.size {
        OrderSize::ByAmount(amount) => Ok(amount),
        OrderSize::ByPercent(percent) => Err(ExchangeError::NotImplemented(format!(
            "{} ({}% of balance requested for {})",
            Capability::PercentSizing,
            percent,
            order.symbol
        ))),
    }
}

/// Build the market order body for `order` traded in `direction`
pub fn market_order_request(
    order: &MarketOrder,
    direction: OrderSide,
    reduce_only: bool,
) -> Result<TapbitOrderRequest, ExchangeError> {
    let amount = resolve_amount(order)?;
    let request = TapbitOrderRequest::market(
        order.symbol.clone(),
        conversions::convert_order_side_to_tapbit(direction).to_string(),
        amount.to_string(),
    );

    Ok(if reduce_only {
        request.reduce_only()
    } else {
        request
    })
}

impl<R: RestClient> TapbitConnector<R> {
    /// Market order opening or adding to a position on the intent's side
    #[instrument(skip(self, order), fields(exchange = "tapbit", symbol = %order.symbol, side = %order.side))]
    pub async fn market_entry(&self, order: &MarketOrder) -> Result<Value, ExchangeError> {
        let request = market_order_request(order, order.side, false)?;
        self.rest.place_order(&request).await
    }

    /// Market order that may only reduce an existing position
    #[instrument(skip(self, order), fields(exchange = "tapbit", symbol = %order.symbol, side = %order.side))]
    pub async fn market_close(&self, order: &MarketOrder) -> Result<Value, ExchangeError> {
        let request = market_order_request(order, order.side, true)?;
        self.rest.place_order(&request).await
    }

    /// Market buy, whatever side the intent carries
    #[instrument(skip(self, order), fields(exchange = "tapbit", symbol = %order.symbol))]
    pub async fn market_buy(&self, order: &MarketOrder) -> Result<Value, ExchangeError> {
        let request = market_order_request(order, OrderSide::Buy, false)?;
        self.rest.place_order(&request).await
    }

    /// Market sell, whatever side the intent carries
    #[instrument(skip(self, order), fields(exchange = "tapbit", symbol = %order.symbol))]
    pub async fn market_sell(&self, order: &MarketOrder) -> Result<Value, ExchangeError> {
        let request = market_order_request(order, OrderSide::Sell, false)?;
        self.rest.place_order(&request).await
    }

    /// Limit order when `price` is given, otherwise a plain order at market
    #[instrument(skip(self), fields(exchange = "tapbit"))]
    pub async fn create_order(
        &self,
        symbol: &str,
        side: OrderSide,
        amount: Decimal,
        price: Option<Decimal>,
    ) -> Result<Value, ExchangeError> {
        let mut request = TapbitOrderRequest::new(
            symbol.to_string(),
            conversions::convert_order_side_to_tapbit(side).to_string(),
            amount.to_string(),
        );
        if let Some(price) = price {
            request = request.with_price(price.to_string());
        }

        let response = self.rest.place_order(&request).await?;
        info!(symbol, %side, %amount, "Order submitted");
        Ok(response)
    }

    #[instrument(skip(self), fields(exchange = "tapbit"))]
    pub async fn cancel_order(&self, order_id: &str) -> Result<Value, ExchangeError> {
        self.rest.cancel_order(order_id).await
    }

    /// First page of open orders for one instrument
    #[instrument(skip(self), fields(exchange = "tapbit"))]
    pub async fn fetch_open_orders(&self, symbol: &str) -> Result<Value, ExchangeError> {
        self.rest.get_open_orders(symbol, None).await
    }

    /// Leverage cannot be changed through this client
    pub async fn set_leverage(&self, _leverage: u32, _symbol: &str) -> Result<(), ExchangeError> {
        Err(ExchangeError::Unsupported(Capability::Leverage))
    }

    /// Accepts one-way mode, the only mode orders are placed in
    pub fn set_position_mode(&self, mode: PositionMode) -> Result<(), ExchangeError> {
        match mode {
            PositionMode::OneWay => Ok(()),
            PositionMode::Hedge => Err(ExchangeError::Unsupported(Capability::HedgeMode)),
        }
    }
}
