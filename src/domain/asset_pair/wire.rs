//! Wire types for the SRA v2 `/asset_pairs` endpoint.

use crate::shared::{AssetData, PaginatedCollection};
use serde::{Deserialize, Serialize};

/// Query parameters for `GET /asset_pairs`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssetPairsRequest {
    pub asset_data_a: AssetData,
    pub network_id: u64,
    pub page: u32,
    pub per_page: u32,
}

/// One side of a tradable pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetDescriptor {
    pub asset_data: AssetData,
    #[serde(default)]
    pub min_amount: Option<String>,
    #[serde(default)]
    pub max_amount: Option<String>,
    #[serde(default)]
    pub precision: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetPairRecord {
    pub asset_data_a: AssetDescriptor,
    pub asset_data_b: AssetDescriptor,
}

pub type AssetPairsResponse = PaginatedCollection<AssetPairRecord>;
