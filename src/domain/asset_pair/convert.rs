//! Conversion: AssetPairRecord → AssetPair, and other-side extraction.

use super::wire;
use super::{AssetPair, UnmatchedPairPolicy};
use crate::error::HttpError;
use crate::shared::AssetData;
use std::fmt;

impl From<wire::AssetPairRecord> for AssetPair {
    fn from(record: wire::AssetPairRecord) -> Self {
        AssetPair {
            asset_data_a: record.asset_data_a.asset_data,
            asset_data_b: record.asset_data_b.asset_data,
        }
    }
}

/// A pair record that does not contain the queried asset on either side.
#[derive(Debug, Clone, PartialEq)]
pub struct UnmatchedPairError {
    pub index: usize,
    pub queried: AssetData,
    pub pair: AssetPair,
}

impl fmt::Display for UnmatchedPairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "asset pair {} ({} / {}) does not contain {}",
            self.index, self.pair.asset_data_a, self.pair.asset_data_b, self.queried
        )
    }
}

impl std::error::Error for UnmatchedPairError {}

impl From<UnmatchedPairError> for HttpError {
    fn from(e: UnmatchedPairError) -> Self {
        HttpError::Decode(e.to_string())
    }
}

/// For each record, the asset paired with `asset`.
///
/// Order and duplicates are kept as the relayer returned them.
pub fn paired_asset_data(
    records: Vec<wire::AssetPairRecord>,
    asset: &AssetData,
    policy: UnmatchedPairPolicy,
) -> Result<Vec<AssetData>, UnmatchedPairError> {
    records
        .into_iter()
        .map(AssetPair::from)
        .enumerate()
        .map(|(index, pair)| {
            if let Some(other) = pair.other_side(asset) {
                return Ok(other.clone());
            }
            match policy {
                UnmatchedPairPolicy::FallbackToA => {
                    tracing::warn!(
                        index,
                        queried = %asset,
                        asset_data_a = %pair.asset_data_a,
                        asset_data_b = %pair.asset_data_b,
                        "Asset pair does not contain the queried asset, using side A"
                    );
                    Ok(pair.asset_data_a)
                }
                UnmatchedPairPolicy::Reject => Err(UnmatchedPairError {
                    index,
                    queried: asset.clone(),
                    pair,
                }),
            }
        })
        .collect()
}
