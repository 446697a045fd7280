use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::exchanges::kraken::client::KrakenClient;
use crate::exchanges::kraken::types::RequestParams;
use serde_json::Value;

// Private account, history and funding endpoints. All require credentials.
impl<R: RestClient> KrakenClient<R> {
    pub async fn get_balance(&self) -> Result<Value, ExchangeError> {
        self.private_call("Balance", None).await
    }

    pub async fn get_trade_balance(
        &self,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        self.private_call("TradeBalance", params).await
    }

    pub async fn get_open_orders(
        &self,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        self.private_call("OpenOrders", params).await
    }

    pub async fn get_closed_orders(
        &self,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        self.private_call("ClosedOrders", params).await
    }

    pub async fn query_orders(
        &self,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        self.private_call("QueryOrders", params).await
    }

    pub async fn get_trades_history(
        &self,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        self.private_call("TradesHistory", params).await
    }

    pub async fn query_trades(
        &self,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        self.private_call("QueryTrades", params).await
    }

    pub async fn get_open_positions(
        &self,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        self.private_call("OpenPositions", params).await
    }

    pub async fn get_ledgers(
        &self,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        self.private_call("Ledgers", params).await
    }

    pub async fn query_ledgers(
        &self,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        self.private_call("QueryLedgers", params).await
    }

    pub async fn get_trade_volume(
        &self,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        self.private_call("TradeVolume", params).await
    }

    pub async fn get_deposit_methods(
        &self,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        self.private_call("DepositMethods", params).await
    }

    pub async fn get_deposit_addresses(
        &self,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        self.private_call("DepositAddresses", params).await
    }

    pub async fn get_deposit_status(
        &self,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        self.private_call("DepositStatus", params).await
    }

    pub async fn get_withdraw_info(
        &self,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        self.private_call("WithdrawInfo", params).await
    }

    pub async fn withdraw(&self, params: Option<&RequestParams>) -> Result<Value, ExchangeError> {
        self.private_call("Withdraw", params).await
    }

    pub async fn get_withdraw_status(
        &self,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        self.private_call("WithdrawStatus", params).await
    }

    pub async fn cancel_withdraw(
        &self,
        params: Option<&RequestParams>,
    ) -> Result<Value, ExchangeError> {
        self.private_call("WithdrawCancel", params).await
    }
}
