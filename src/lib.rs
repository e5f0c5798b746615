//! # sra-liquidity
//!
//! Retrieves order liquidity from a Standard Relayer API (v2) order book and
//! annotates every order with how much of its maker asset is still fillable.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Newtypes, domain models, normalization and pair discovery (pure)
//! 2. **Config** — Endpoint / network validation, environment loading
//! 3. **HTTP API** — `RelayerApi` trait, `SraHttp` reqwest implementation
//! 4. **High-Level Client** — `OrderbookAdapter` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sra_liquidity::prelude::*;
//!
//! let adapter = OrderbookAdapter::new("https://relayer.example/v2", MAINNET_NETWORK_ID)?;
//!
//! let request = TradingPairRequest::new(zrx_asset_data, weth_asset_data);
//! let orders = adapter.fetch_orders(&request).await?;
//! let makers = adapter.available_maker_assets(&weth_asset_data).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network ids and paging constants.
pub mod network;

// ── Layer 2: Config ──────────────────────────────────────────────────────────

pub mod config;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// Relayer client seam and its HTTP implementation.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `OrderbookAdapter` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Amount, AssetData, PaginatedCollection};

    // Domain types — order
    pub use crate::domain::order::{
        normalize_orders, CanonicalOrder, FillAmountCalculator, FloorFillCalculator,
        SignedOrder, TradingPairRequest,
    };

    // Domain types — asset pair
    pub use crate::domain::asset_pair::{AssetPair, Direction, UnmatchedPairPolicy};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Config + network
    pub use crate::config::AdapterConfig;
    pub use crate::network::{DEFAULT_PER_PAGE, MAINNET_NETWORK_ID, MAX_PER_PAGE};

    // HTTP client + sub-clients
    pub use crate::client::{AssetPairsClient, OrderbookAdapter, OrderbookAdapterBuilder, OrdersClient};
    pub use crate::http::RelayerApi;
    #[cfg(feature = "http")]
    pub use crate::http::SraHttp;
}
