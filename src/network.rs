//! Network and paging constants for Standard Relayer API endpoints.

/// Ethereum mainnet network id, used when none is configured.
pub const MAINNET_NETWORK_ID: u64 = 1;

/// Page size for taker → maker asset discovery.
pub const MAX_PER_PAGE: u32 = 1000;

/// Page size for maker → taker asset discovery unless configured otherwise.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// SRA pages are 1-indexed.
pub const FIRST_PAGE: u32 = 1;

/// Environment variable holding the relayer endpoint.
pub const ENV_API_URL: &str = "SRA_API_URL";

/// Environment variable holding the network id.
pub const ENV_NETWORK_ID: &str = "SRA_NETWORK_ID";
