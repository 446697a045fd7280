use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::exchanges::kraken::client::KrakenClient;
use crate::exchanges::kraken::types::RequestParams;
use serde_json::Value;

/// Public market data endpoints
impl<R: RestClient> KrakenClient<R> {
    /// Server time
    pub async fn get_time(&self) -> Result<Value, ExchangeError> {
        self.public_call("Time", None).await
    }

    /// Asset info (`info`, `aclass`, `asset`)
    pub async fn get_assets(&self, params: Option<&RequestParams>) -> Result<Value, ExchangeError> {
        self.public_call("Assets", params).await
    }

    /// Tradable asset pairs (`info`, `pair`)
    pub async fn get_asset_pairs(
        &self,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        self.public_call("AssetPairs", params).await
    }

    /// Ticker information (`pair`)
    pub async fn get_ticker(&self, params: Option<&RequestParams>) -> Result<Value, ExchangeError> {
        self.public_call("Ticker", params).await
    }

    /// Order book (`pair`, `count`)
    pub async fn get_depth(&self, params: Option<&RequestParams>) -> Result<Value, ExchangeError> {
        self.public_call("Depth", params).await
    }

    /// Recent trades (`pair`, `since`)
    pub async fn get_trades(&self, params: Option<&RequestParams>) -> Result<Value, ExchangeError> {
        self.public_call("Trades", params).await
    }

    /// Recent spread data (`pair`, `since`)
    pub async fn get_spread(&self, params: Option<&RequestParams>) -> Result<Value, ExchangeError> {
        self.public_call("Spread", params).await
    }

    /// OHLC candles (`pair`, `interval`, `since`)
    pub async fn get_ohlc(&self, params: Option<&RequestParams>) -> Result<Value, ExchangeError> {
        self.public_call("OHLC", params).await
    }
}
