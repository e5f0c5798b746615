//! Adapter configuration — endpoint, network id, paging and timeout.

use crate::domain::asset_pair::UnmatchedPairPolicy;
use crate::error::SdkError;
use crate::network::{DEFAULT_PER_PAGE, ENV_API_URL, ENV_NETWORK_ID, MAINNET_NETWORK_ID};
use std::time::Duration;
use url::Url;

/// Immutable settings fixed at adapter construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterConfig {
    pub endpoint_url: Url,
    pub network_id: u64,
    /// Page size for maker → taker asset discovery.
    pub default_per_page: u32,
    pub request_timeout: Duration,
    pub unmatched_pair_policy: UnmatchedPairPolicy,
}

impl AdapterConfig {
    pub fn new(endpoint_url: &str, network_id: u64) -> Result<Self, SdkError> {
        Ok(Self {
            endpoint_url: parse_endpoint(endpoint_url)?,
            network_id,
            default_per_page: DEFAULT_PER_PAGE,
            request_timeout: Duration::from_secs(30),
            unmatched_pair_policy: UnmatchedPairPolicy::default(),
        })
    }

    /// Read `SRA_API_URL` and `SRA_NETWORK_ID` (defaults to mainnet).
    pub fn from_env() -> Result<Self, SdkError> {
        let endpoint = std::env::var(ENV_API_URL)
            .map_err(|_| SdkError::InvalidConfiguration(format!("{ENV_API_URL} is not set")))?;
        let network_id = match std::env::var(ENV_NETWORK_ID) {
            Ok(raw) => parse_network_id(&raw)?,
            Err(_) => MAINNET_NETWORK_ID,
        };
        Self::new(&endpoint, network_id)
    }
}

/// Absolute `http(s)` URL with a host.
pub fn parse_endpoint(raw: &str) -> Result<Url, SdkError> {
    let url = Url::parse(raw)
        .map_err(|e| SdkError::InvalidConfiguration(format!("endpoint url {raw:?}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(SdkError::InvalidConfiguration(format!(
            "endpoint url {raw:?}: scheme must be http or https"
        )));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(SdkError::InvalidConfiguration(format!(
            "endpoint url {raw:?}: missing host"
        )));
    }
    Ok(url)
}

pub fn parse_network_id(raw: &str) -> Result<u64, SdkError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| SdkError::InvalidConfiguration(format!("network id {raw:?}: {e}")))
}
