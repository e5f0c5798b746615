//! Wire types for the SRA v2 `/orderbook` endpoint.

use super::SignedOrder;
use crate::shared::{AssetData, PaginatedCollection};
use serde::{Deserialize, Serialize};

// ─── Request ─────────────────────────────────────────────────────────────────

/// Query parameters for `GET /orderbook`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderbookRequest {
    pub base_asset_data: AssetData,
    pub quote_asset_data: AssetData,
    pub network_id: u64,
}

// ─── Response ────────────────────────────────────────────────────────────────

/// An order record plus the relayer's opaque metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiOrder {
    pub order: SignedOrder,
    #[serde(default)]
    pub meta_data: serde_json::Map<String, serde_json::Value>,
}

/// Both sides of the book for a base/quote pair.
///
/// `asks` are orders whose maker asset is the requested base asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderbookResponse {
    pub bids: PaginatedCollection<ApiOrder>,
    pub asks: PaginatedCollection<ApiOrder>,
}
