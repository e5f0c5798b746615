//! HTTP layer — the `RelayerApi` seam and its reqwest implementation `SraHttp`.

#[cfg(feature = "http")]
pub mod client;

#[cfg(feature = "http")]
pub use client::SraHttp;

use crate::domain::asset_pair::wire::{AssetPairsRequest, AssetPairsResponse};
use crate::domain::order::wire::{OrderbookRequest, OrderbookResponse};
use crate::error::HttpError;
use async_trait::async_trait;

/// Remote order-book service: one method per SRA endpoint the adapter uses.
///
/// Implementations make exactly one request per call and never retry.
#[async_trait]
pub trait RelayerApi: Send + Sync {
    async fn get_orderbook(
        &self,
        request: &OrderbookRequest,
    ) -> Result<OrderbookResponse, HttpError>;

    async fn get_asset_pairs(
        &self,
        request: &AssetPairsRequest,
    ) -> Result<AssetPairsResponse, HttpError>;
}
