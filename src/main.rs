use rust_decimal::Decimal;
use tapbit_client::core::config::{ConfigError, ExchangeConfig};
use tapbit_client::core::types::{MarketOrder, OrderSize};
use tapbit_client::exchanges::tapbit::TapbitBuilder;

const SYMBOL: &str = "BTC/USDT";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(ConfigError::MissingEnvironmentVariable(var)) => {
            println!("{} not set, continuing with public endpoints only", var);
            ExchangeConfig::read_only()
        }
        Err(e) => return Err(e.into()),
    };
    let has_credentials = config.has_credentials();

    let tapbit = TapbitBuilder::new().with_config(config).build().await?;
    println!("Clock offset against server: {}", tapbit.clock_offset());

    let price = tapbit.get_price(SYMBOL).await?;
    println!("{} last price: {}", SYMBOL, price);

    if !has_credentials {
        return Ok(());
    }

    let usdt = tapbit.get_balance("USDT").await?;
    println!("Available USDT: {}", usdt);

    // Orders are real; opt in explicitly
    if std::env::var("TAPBIT_DEMO_ORDER").as_deref() == Ok("1") {
        let order = MarketOrder::buy(SYMBOL, OrderSize::ByAmount(Decimal::new(1, 3)));
        let response = tapbit.market_buy(&order).await?;
        println!("Market buy response: {}", response);
    }

    Ok(())
}

#[cfg(feature = "env-file")]
fn load_config() -> Result<ExchangeConfig, ConfigError> {
    ExchangeConfig::from_env_file("TAPBIT")
}

#[cfg(not(feature = "env-file"))]
fn load_config() -> Result<ExchangeConfig, ConfigError> {
    ExchangeConfig::from_env("TAPBIT")
}
