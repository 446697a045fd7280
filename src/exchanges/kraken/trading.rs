use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::exchanges::kraken::client::KrakenClient;
use crate::exchanges::kraken::types::RequestParams;
use serde_json::Value;

/// Order entry endpoints
impl<R: RestClient> KrakenClient<R> {
    /// Place an order (`pair`, `type`, `ordertype`, `volume`, `price`, ...)
    pub async fn add_order(&self, params: Option<&RequestParams>) -> Result<Value, ExchangeError> {
        self.private_call("AddOrder", params).await
    }

    /// Cancel an open order (`txid`)
    pub async fn cancel_order(
        &self,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        self.private_call("CancelOrder", params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::core::config::KrakenConfig;
    use crate::exchanges::kraken::client::testing::RecordingRest;
    use crate::exchanges::kraken::client::KrakenClient;
    use crate::exchanges::kraken::types::RequestParams;
    use rstest::rstest;

    const SECRET: &str = "c2VjcmV0LWtleS1ieXRlcw==";

    fn private_client() -> KrakenClient<RecordingRest> {
        KrakenClient::with_rest(
            RecordingRest::default(),
            &KrakenConfig::new("key".to_string(), SECRET.to_string()),
        )
    }

    #[tokio::test]
    async fn test_public_catalog_paths() {
        let client = private_client();
        let params = RequestParams::new().with("pair", "XBTUSD");
        let p = Some(&params);

        client.get_time().await.unwrap();
        client.get_assets(p).await.unwrap();
        client.get_asset_pairs(p).await.unwrap();
        client.get_ticker(p).await.unwrap();
        client.get_depth(p).await.unwrap();
        client.get_trades(p).await.unwrap();
        client.get_spread(p).await.unwrap();
        client.get_ohlc(p).await.unwrap();

        let endpoints: Vec<_> = client
            .rest()
            .requests()
            .into_iter()
            .map(|r| r.endpoint)
            .collect();
        assert_eq!(
            endpoints,
            vec![
                "/0/public/Time",
                "/0/public/Assets",
                "/0/public/AssetPairs",
                "/0/public/Ticker",
                "/0/public/Depth",
                "/0/public/Trades",
                "/0/public/Spread",
                "/0/public/OHLC",
            ]
        );
    }

    #[rstest]
    #[case("Balance")]
    #[case("TradeBalance")]
    #[case("OpenOrders")]
    #[case("ClosedOrders")]
    #[case("QueryOrders")]
    #[case("TradesHistory")]
    #[case("QueryTrades")]
    #[case("OpenPositions")]
    #[case("Ledgers")]
    #[case("QueryLedgers")]
    #[case("TradeVolume")]
    #[case("AddOrder")]
    #[case("CancelOrder")]
    #[case("DepositMethods")]
    #[case("DepositAddresses")]
    #[case("DepositStatus")]
    #[case("WithdrawInfo")]
    #[case("Withdraw")]
    #[case("WithdrawStatus")]
    #[case("WithdrawCancel")]
    #[tokio::test]
    async fn test_private_catalog_paths(#[case] method: &str) {
        let client = private_client();
        let params = RequestParams::new().with("txid", "OQCLML-BW3P3-BUCMWZ");
        let p = Some(&params);

        let result = match method {
            "Balance" => client.get_balance().await,
            "TradeBalance" => client.get_trade_balance(p).await,
            "OpenOrders" => client.get_open_orders(p).await,
            "ClosedOrders" => client.get_closed_orders(p).await,
            "QueryOrders" => client.query_orders(p).await,
            "TradesHistory" => client.get_trades_history(p).await,
            "QueryTrades" => client.query_trades(p).await,
            "OpenPositions" => client.get_open_positions(p).await,
            "Ledgers" => client.get_ledgers(p).await,
            "QueryLedgers" => client.query_ledgers(p).await,
            "TradeVolume" => client.get_trade_volume(p).await,
            "AddOrder" => client.add_order(p).await,
            "CancelOrder" => client.cancel_order(p).await,
            "DepositMethods" => client.get_deposit_methods(p).await,
            "DepositAddresses" => client.get_deposit_addresses(p).await,
            "DepositStatus" => client.get_deposit_status(p).await,
            "WithdrawInfo" => client.get_withdraw_info(p).await,
            "Withdraw" => client.withdraw(p).await,
            "WithdrawStatus" => client.get_withdraw_status(p).await,
            "WithdrawCancel" => client.cancel_withdraw(p).await,
            other => panic!("unknown method {}", other),
        };
        result.unwrap();

        let requests = client.rest().requests();
        let request = &requests[0];
        assert_eq!(request.endpoint, format!("/0/private/{}", method));
        assert_eq!(request.headers.len(), 2);

        let sent = RequestParams::decode(&request.body).unwrap();
        assert!(sent.get("nonce").is_some());
        if method != "Balance" {
            assert_eq!(sent.get("txid"), Some("OQCLML-BW3P3-BUCMWZ"));
        }
    }
}
