pub mod conversions;
pub mod endpoints;
pub mod signer;
pub mod types;

pub mod builder;
pub mod connector;
pub mod rest;

#[cfg(test)]
mod testing;

/// Production REST host
pub const DEFAULT_BASE_URL: &str = "https://openapi.tapbit.com";

// Re-export main components
pub use builder::{build_connector, build_connector_from_env, sync_clock, TapbitBuilder};
pub use connector::{market_order_request, resolve_amount, TapbitConnector};
pub use endpoints::{Endpoint, MarketFamily};
pub use rest::TapbitRest;
pub use signer::TapbitSigner;
pub use types::{TapbitBatchCancelRequest, TapbitCancelRequest, TapbitOrderRequest};
