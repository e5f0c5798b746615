//! Low-level HTTP client — `SraHttp`.
//!
//! One method per relayer endpoint. Returns wire types; annotation and
//! other-side extraction happen in the domain slices.

use crate::domain::asset_pair::wire::{AssetPairsRequest, AssetPairsResponse};
use crate::domain::order::wire::{OrderbookRequest, OrderbookResponse};
use crate::error::HttpError;
use crate::http::RelayerApi;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Low-level HTTP client for a Standard Relayer API v2 endpoint.
#[derive(Debug, Clone)]
pub struct SraHttp {
    base_url: String,
    client: Client,
}

impl SraHttp {
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!(url, "GET");

        let resp = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status();

        if status.is_success() {
            let bytes = resp.bytes().await?;
            return Ok(serde_json::from_slice(&bytes)?);
        }

        let body = resp.text().await.unwrap_or_default();
        Err(HttpError::ServerError {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl RelayerApi for SraHttp {
    async fn get_orderbook(
        &self,
        request: &OrderbookRequest,
    ) -> Result<OrderbookResponse, HttpError> {
        let url = format!(
            "{}/orderbook?baseAssetData={}&quoteAssetData={}&networkId={}",
            self.base_url,
            urlencoding::encode(request.base_asset_data.as_str()),
            urlencoding::encode(request.quote_asset_data.as_str()),
            request.network_id
        );
        self.get(&url).await
    }

    async fn get_asset_pairs(
        &self,
        request: &AssetPairsRequest,
    ) -> Result<AssetPairsResponse, HttpError> {
        let url = format!(
            "{}/asset_pairs?assetDataA={}&networkId={}&page={}&perPage={}",
            self.base_url,
            urlencoding::encode(request.asset_data_a.as_str()),
            request.network_id,
            request.page,
            request.per_page
        );
        self.get(&url).await
    }
}
