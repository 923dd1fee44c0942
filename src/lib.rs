pub mod core;
pub mod exchanges;

pub use crate::core::config::ExchangeConfig;
pub use crate::core::errors::{ErrorKind, ExchangeError};
pub use crate::core::types::*;
pub use exchanges::tapbit::{TapbitBuilder, TapbitConnector};
