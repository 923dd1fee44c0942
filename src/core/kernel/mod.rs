/// Transport kernel shared by every endpoint wrapper
///
/// The kernel owns the three concerns that do not depend on which endpoint
/// is being called:
///
/// ## Transport
/// - `RestClient`: one signed HTTP round trip returning raw JSON
/// - `ReqwestRest`: the reqwest-backed implementation
///
/// ## Authentication
/// - `Signer`: turns the exact request bytes into authentication headers
/// - `sign_prehash`: HMAC-SHA256 over `timestamp || method || path || body`
///
/// ## Time
/// - `Clock`: local time source, replaceable in tests
/// - `ClockOffset`: server-minus-local correction fixed at construction
///
/// # Example
/// ```rust,no_run
/// use tapbit_client::core::kernel::*;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let rest_config = RestClientConfig::new(
///     "https://openapi.tapbit.com".to_string(),
///     "tapbit".to_string(),
/// );
/// let rest = RestClientBuilder::new(rest_config).build()?;
///
/// let ticker = rest
///     .get("/spot/api/spot/instruments/ticker_one", &[("instrument_id", "BTC/USDT")], false)
///     .await?;
/// println!("{}", ticker);
/// # Ok(())
/// # }
/// ```
pub mod clock;
pub mod rest;
pub mod signer;

pub use clock::{Clock, ClockOffset, SystemClock};
pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use signer::{sign_prehash, EmptyBodyMarker, SignatureResult, Signer};
