//! Asset pairs sub-client — which assets trade against a given asset.

use crate::client::{remote, OrderbookAdapter};
use crate::domain::asset_pair::wire::AssetPairsRequest;
use crate::domain::asset_pair::{paired_asset_data, Direction};
use crate::error::{HttpError, SdkError};
use crate::network::FIRST_PAGE;
use crate::shared::AssetData;

/// Sub-client for asset pair discovery.
pub struct AssetPairs<'a> {
    pub(crate) client: &'a OrderbookAdapter,
}

impl<'a> AssetPairs<'a> {
    /// Query one page of pairs with `asset` as `assetDataA` and return the
    /// other side of each. `page_size` overrides the direction's default.
    pub async fn list(
        &self,
        asset: &AssetData,
        direction: Direction,
        page_size: Option<u32>,
    ) -> Result<Vec<AssetData>, SdkError> {
        if !asset.is_well_formed() {
            return Err(SdkError::InvalidRequest(format!(
                "assetData is not 0x-prefixed hex: {:?}",
                asset.as_str()
            )));
        }
        let per_page = match page_size {
            Some(0) => {
                return Err(SdkError::InvalidRequest(
                    "page size must be positive".to_string(),
                ))
            }
            Some(n) => n,
            None => direction.page_size(self.client.config.default_per_page),
        };

        let query = AssetPairsRequest {
            asset_data_a: asset.clone(),
            network_id: self.client.config.network_id,
            page: FIRST_PAGE,
            per_page,
        };

        remote(self.fetch_paired(&query, asset).await)
    }

    async fn fetch_paired(
        &self,
        query: &AssetPairsRequest,
        asset: &AssetData,
    ) -> Result<Vec<AssetData>, HttpError> {
        let page = self.client.relayer.get_asset_pairs(query).await?;
        if page.total > page.records.len() as u64 {
            tracing::debug!(
                total = page.total,
                returned = page.records.len(),
                "Asset pairs truncated to the first page"
            );
        }
        Ok(paired_asset_data(
            page.records,
            asset,
            self.client.config.unmatched_pair_policy,
        )?)
    }
}
