//! High-level client — `OrderbookAdapter` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared collaborators, and the
//! single boundary that turns transport failures into `SdkError::RemoteService`.

use crate::config::{parse_endpoint, AdapterConfig};
use crate::domain::asset_pair::client::AssetPairs;
use crate::domain::asset_pair::{Direction, UnmatchedPairPolicy};
use crate::domain::order::client::Orders;
use crate::domain::order::{CanonicalOrder, FillAmountCalculator, FloorFillCalculator, TradingPairRequest};
use crate::error::{HttpError, SdkError};
use crate::http::RelayerApi;
use crate::network::MAINNET_NETWORK_ID;
use crate::shared::AssetData;

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::asset_pair::client::AssetPairs as AssetPairsClient;
pub use crate::domain::order::client::Orders as OrdersClient;

/// Retrieves order liquidity and tradable pairs from a Standard Relayer API.
///
/// Cheap to clone; clones share the HTTP connection pool.
#[derive(Clone)]
pub struct OrderbookAdapter {
    pub(crate) config: AdapterConfig,
    pub(crate) relayer: Arc<dyn RelayerApi>,
    pub(crate) fill_calculator: Arc<dyn FillAmountCalculator>,
}

impl OrderbookAdapter {
    /// Validate the endpoint and bind an HTTP client to it.
    #[cfg(feature = "http")]
    pub fn new(endpoint_url: &str, network_id: u64) -> Result<Self, SdkError> {
        Self::builder()
            .endpoint_url(endpoint_url)
            .network_id(network_id)
            .build()
    }

    /// Build from `SRA_API_URL` / `SRA_NETWORK_ID`.
    #[cfg(feature = "http")]
    pub fn from_env() -> Result<Self, SdkError> {
        let config = AdapterConfig::from_env()?;
        OrderbookAdapterBuilder::from_config(config).build()
    }

    pub fn builder() -> OrderbookAdapterBuilder {
        OrderbookAdapterBuilder::default()
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn network_id(&self) -> u64 {
        self.config.network_id
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn asset_pairs(&self) -> AssetPairs<'_> {
        AssetPairs { client: self }
    }

    // ── Facade ───────────────────────────────────────────────────────────

    /// Ask-side orders for the pair, each annotated with its remaining
    /// fillable maker amount.
    pub async fn fetch_orders(
        &self,
        request: &TradingPairRequest,
    ) -> Result<Vec<CanonicalOrder>, SdkError> {
        self.orders().fetch(request).await
    }

    /// Assets tradable against `asset`, one page, in relayer order.
    pub async fn list_paired_assets(
        &self,
        asset: &AssetData,
        direction: Direction,
        page_size: Option<u32>,
    ) -> Result<Vec<AssetData>, SdkError> {
        self.asset_pairs().list(asset, direction, page_size).await
    }

    /// Maker assets a taker holding `taker_asset_data` could buy.
    pub async fn available_maker_assets(
        &self,
        taker_asset_data: &AssetData,
    ) -> Result<Vec<AssetData>, SdkError> {
        self.list_paired_assets(taker_asset_data, Direction::AsBase, None)
            .await
    }

    /// Taker assets that `maker_asset_data` could be sold for.
    pub async fn available_taker_assets(
        &self,
        maker_asset_data: &AssetData,
    ) -> Result<Vec<AssetData>, SdkError> {
        self.list_paired_assets(maker_asset_data, Direction::AsQuote, None)
            .await
    }
}

impl std::fmt::Debug for OrderbookAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderbookAdapter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Collapse any relayer failure into the one error callers see.
pub(crate) fn remote<T>(result: Result<T, HttpError>) -> Result<T, SdkError> {
    result.map_err(|e| {
        tracing::debug!(error = %e, "Relayer request failed");
        SdkError::RemoteService
    })
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct OrderbookAdapterBuilder {
    endpoint_url: Option<String>,
    network_id: u64,
    default_per_page: Option<u32>,
    request_timeout: Option<Duration>,
    unmatched_pair_policy: UnmatchedPairPolicy,
    relayer: Option<Arc<dyn RelayerApi>>,
    fill_calculator: Arc<dyn FillAmountCalculator>,
    config: Option<AdapterConfig>,
}

impl Default for OrderbookAdapterBuilder {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            network_id: MAINNET_NETWORK_ID,
            default_per_page: None,
            request_timeout: None,
            unmatched_pair_policy: UnmatchedPairPolicy::default(),
            relayer: None,
            fill_calculator: Arc::new(FloorFillCalculator),
            config: None,
        }
    }
}

impl OrderbookAdapterBuilder {
    /// Start from an already-validated config.
    pub fn from_config(config: AdapterConfig) -> Self {
        Self {
            network_id: config.network_id,
            unmatched_pair_policy: config.unmatched_pair_policy,
            config: Some(config),
            ..Self::default()
        }
    }

    pub fn endpoint_url(mut self, url: &str) -> Self {
        self.endpoint_url = Some(url.to_string());
        self
    }

    pub fn network_id(mut self, network_id: u64) -> Self {
        self.network_id = network_id;
        self
    }

    pub fn default_per_page(mut self, per_page: u32) -> Self {
        self.default_per_page = Some(per_page);
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn unmatched_pair_policy(mut self, policy: UnmatchedPairPolicy) -> Self {
        self.unmatched_pair_policy = policy;
        self
    }

    /// Use a custom relayer client instead of the built-in HTTP one.
    pub fn relayer(mut self, relayer: Arc<dyn RelayerApi>) -> Self {
        self.relayer = Some(relayer);
        self
    }

    pub fn fill_calculator(mut self, calculator: Arc<dyn FillAmountCalculator>) -> Self {
        self.fill_calculator = calculator;
        self
    }

    /// Validates the configuration first; the HTTP client is only created
    /// once validation passes.
    pub fn build(self) -> Result<OrderbookAdapter, SdkError> {
        let mut config = match (self.config, self.endpoint_url) {
            (Some(mut config), url) => {
                if let Some(url) = url {
                    config.endpoint_url = parse_endpoint(&url)?;
                }
                config.network_id = self.network_id;
                config
            }
            (None, Some(url)) => AdapterConfig::new(&url, self.network_id)?,
            (None, None) => {
                return Err(SdkError::InvalidConfiguration(
                    "endpoint url is required".to_string(),
                ))
            }
        };
        if let Some(per_page) = self.default_per_page {
            if per_page == 0 {
                return Err(SdkError::InvalidConfiguration(
                    "default page size must be positive".to_string(),
                ));
            }
            config.default_per_page = per_page;
        }
        if let Some(timeout) = self.request_timeout {
            config.request_timeout = timeout;
        }
        config.unmatched_pair_policy = self.unmatched_pair_policy;

        let relayer = match self.relayer {
            Some(relayer) => relayer,
            None => default_relayer(&config)?,
        };

        Ok(OrderbookAdapter {
            config,
            relayer,
            fill_calculator: self.fill_calculator,
        })
    }
}

#[cfg(feature = "http")]
fn default_relayer(config: &AdapterConfig) -> Result<Arc<dyn RelayerApi>, SdkError> {
    let http = crate::http::SraHttp::new(&config.endpoint_url, config.request_timeout)
        .map_err(|e| SdkError::InvalidConfiguration(format!("http client: {e}")))?;
    Ok(Arc::new(http))
}

#[cfg(not(feature = "http"))]
fn default_relayer(_config: &AdapterConfig) -> Result<Arc<dyn RelayerApi>, SdkError> {
    Err(SdkError::InvalidConfiguration(
        "no relayer client: enable the `http` feature or call `relayer(..)`".to_string(),
    ))
}
