//! Orders sub-client — ask-side liquidity for a trading pair.

use crate::client::{remote, OrderbookAdapter};
use crate::domain::order::wire::OrderbookRequest;
use crate::domain::order::{normalize_orders, CanonicalOrder, TradingPairRequest};
use crate::error::{HttpError, SdkError};

/// Sub-client for order-book operations.
pub struct Orders<'a> {
    pub(crate) client: &'a OrderbookAdapter,
}

impl<'a> Orders<'a> {
    /// Fetch the asks for `maker/taker` and annotate each with its remaining
    /// fillable maker amount. One request, never cached.
    pub async fn fetch(
        &self,
        request: &TradingPairRequest,
    ) -> Result<Vec<CanonicalOrder>, SdkError> {
        request
            .validate()
            .map_err(|e| SdkError::InvalidRequest(e.to_string()))?;

        let query = OrderbookRequest {
            base_asset_data: request.maker_asset_data.clone(),
            quote_asset_data: request.taker_asset_data.clone(),
            network_id: self.client.config.network_id,
        };

        remote(self.fetch_asks(&query).await)
    }

    async fn fetch_asks(&self, query: &OrderbookRequest) -> Result<Vec<CanonicalOrder>, HttpError> {
        let orderbook = self.client.relayer.get_orderbook(query).await?;
        tracing::debug!(
            asks = orderbook.asks.records.len(),
            bids = orderbook.bids.records.len(),
            "Fetched orderbook"
        );
        Ok(normalize_orders(
            orderbook.asks.records,
            self.client.fill_calculator.as_ref(),
        )?)
    }
}
