//! Asset pair domain — discovery direction, pair records, other-side lookup.

pub mod client;
mod convert;
pub mod wire;

pub use convert::{paired_asset_data, UnmatchedPairError};

use crate::network::MAX_PER_PAGE;
use crate::shared::AssetData;
use serde::{Deserialize, Serialize};

// ─── Direction ───────────────────────────────────────────────────────────────

/// Which side of a trade the queried asset sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// The queried asset is what the taker pays; discovers maker assets.
    AsBase,
    /// The queried asset is what the maker offers; discovers taker assets.
    AsQuote,
}

impl Direction {
    /// Page size used when the caller does not pick one.
    pub fn page_size(&self, default_per_page: u32) -> u32 {
        match self {
            Direction::AsBase => MAX_PER_PAGE,
            Direction::AsQuote => default_per_page,
        }
    }
}

// ─── UnmatchedPairPolicy ─────────────────────────────────────────────────────

/// What to do with a pair record where neither side is the queried asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnmatchedPairPolicy {
    /// Return side A and log a warning.
    #[default]
    FallbackToA,
    /// Fail the whole call as a malformed relayer response.
    Reject,
}

// ─── AssetPair ───────────────────────────────────────────────────────────────

/// Two assets the relayer will match against each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetPair {
    pub asset_data_a: AssetData,
    pub asset_data_b: AssetData,
}

impl AssetPair {
    /// The side that is not `asset`, or `None` if `asset` is on neither side.
    pub fn other_side(&self, asset: &AssetData) -> Option<&AssetData> {
        if self.asset_data_a.matches(asset) {
            Some(&self.asset_data_b)
        } else if self.asset_data_b.matches(asset) {
            Some(&self.asset_data_a)
        } else {
            None
        }
    }
}
