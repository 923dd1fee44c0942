use reqwest::Method;

/// Which product line an endpoint belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketFamily {
    Spot,
    Swap,
}

macro_rules! endpoint_table {
    ($($name:ident => $method:ident $family:ident $path:literal, auth = $auth:literal;)+) => {
        /// Every remote operation the client can reach
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Endpoint {
            $($name,)+
        }

        impl Endpoint {
            pub const ALL: &'static [Self] = &[$(Self::$name,)+];

            pub const fn path(self) -> &'static str {
                match self {
                    $(Self::$name => $path,)+
                }
            }

            pub fn method(self) -> Method {
                match self {
                    $(Self::$name => Method::$method,)+
                }
            }

            pub const fn family(self) -> MarketFamily {
                match self {
                    $(Self::$name => MarketFamily::$family,)+
                }
            }

            /// Whether the endpoint rejects unsigned requests
            pub const fn requires_auth(self) -> bool {
                match self {
                    $(Self::$name => $auth,)+
                }
            }
        }
    };
}

endpoint_table! {
    SwapServerTime => GET Swap "/swap/api/v1/usdt/time", auth = false;
    SwapInstruments => GET Swap "/swap/api/usdt/instruments/list", auth = false;
    SwapDepth => GET Swap "/swap/api/usdt/instruments/depth", auth = false;
    SwapCandles => GET Swap "/swap/api/usdt/instruments/candles", auth = false;
    SwapTicker => GET Swap "/swap/api/usdt/instruments/ticker_one", auth = false;
    SwapTickers => GET Swap "/swap/api/usdt/instruments/ticker_list", auth = false;
    SwapFundingRate => GET Swap "/swap/api/usdt/instruments/funding_rate", auth = false;
    SwapTrades => GET Swap "/swap/api/usdt/instruments/trade_list", auth = false;

    SpotServerTime => GET Spot "/spot/api/spot/time", auth = false;
    SpotInstrument => GET Spot "/spot/api/spot/instruments/trade_pair_one", auth = false;
    SpotInstruments => GET Spot "/spot/api/spot/instruments/trade_pair_list", auth = false;
    SpotDepth => GET Spot "/spot/api/spot/instruments/depth", auth = false;
    SpotTicker => GET Spot "/spot/api/spot/instruments/ticker_one", auth = false;
    SpotTickers => GET Spot "/spot/api/spot/instruments/ticker_list", auth = false;
    SpotCandles => GET Spot "/spot/api/spot/instruments/candles", auth = false;
    SpotTrades => GET Spot "/spot/api/spot/instruments/trade_list", auth = false;
    AssetList => GET Spot "/spot/api/spot/instruments/asset/list", auth = false;

    SpotAccounts => GET Spot "/spot/api/v1/spot/account/list", auth = true;
    SpotAccount => GET Spot "/spot/api/v1/spot/account/one", auth = true;

    PlaceOrder => POST Spot "/spot/api/v1/spot/order", auth = true;
    PlaceBatchOrders => POST Spot "/spot/api/v1/spot/batch_order", auth = true;
    CancelOrder => POST Spot "/spot/api/v1/spot/cancel_order", auth = true;
    BatchCancelOrders => POST Spot "/spot/api/v1/spot/batch_cancel_order", auth = true;
    OpenOrders => GET Spot "/spot/api/v1/spot/open_order_list", auth = true;
    ClosedOrders => GET Spot "/spot/api/v1/spot/closed_order_list", auth = true;
    OrderInfo => GET Spot "/spot/api/v1/spot/order_info", auth = true;
}
