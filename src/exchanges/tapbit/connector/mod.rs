use crate::core::kernel::{ClockOffset, RestClient};
use crate::core::types::{Capability, PositionMode};
use crate::exchanges::tapbit::rest::TapbitRest;

mod account;
mod market_data;
mod trading;

pub use trading::{market_order_request, resolve_amount};

/// Tapbit client: the raw endpoint catalogue plus the order conveniences
/// built on top of it.
///
/// The clock offset inside `R` is fixed when the connector is built; the
/// connector holds no other state, so it can be shared by reference.
#[derive(Debug, Clone)]
pub struct TapbitConnector<R: RestClient> {
    rest: TapbitRest<R>,
}

impl<R: RestClient> TapbitConnector<R> {
    pub fn new(rest: R) -> Self {
        Self {
            rest: TapbitRest::new(rest),
        }
    }

    /// Direct access to every endpoint wrapper
    pub fn rest(&self) -> &TapbitRest<R> {
        &self.rest
    }

    pub fn clock_offset(&self) -> ClockOffset {
        self.rest.rest_client().clock_offset()
    }

    /// Orders are always placed in one-way position mode
    pub const fn position_mode(&self) -> PositionMode {
        PositionMode::OneWay
    }

    /// Whether an optional capability is available on this client
    pub const fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::Leverage
            | Capability::HedgeMode
            | Capability::PercentSizing
            | Capability::FuturesPosition => false,
        }
    }
}
