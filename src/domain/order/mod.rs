//! Order domain — signed orders, remaining-fillable annotation, pair requests.

pub mod client;
mod convert;
pub mod math;
pub mod wire;

pub use convert::{normalize_orders, NormalizeError, REMAINING_TAKER_ASSET_AMOUNT_KEY};
pub use math::{FillAmountCalculator, FloorFillCalculator};

use crate::shared::{Amount, AssetData};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

// ─── SignedOrder ─────────────────────────────────────────────────────────────

/// A signed SRA v2 order as published by the relayer.
///
/// Attributes this crate does not model are kept in `extra`, in the order the
/// relayer sent them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignedOrder {
    pub maker_address: String,
    pub taker_address: String,
    pub fee_recipient_address: String,
    pub sender_address: String,
    pub maker_asset_amount: Amount,
    pub taker_asset_amount: Amount,
    pub maker_fee: Amount,
    pub taker_fee: Amount,
    pub expiration_time_seconds: Amount,
    pub salt: Amount,
    pub maker_asset_data: AssetData,
    pub taker_asset_data: AssetData,
    pub exchange_address: String,
    pub signature: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ─── CanonicalOrder ──────────────────────────────────────────────────────────

/// A signed order annotated with how much of its maker asset is still fillable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalOrder {
    #[serde(flatten)]
    pub order: SignedOrder,
    pub remaining_fillable_maker_asset_amount: Amount,
}

impl CanonicalOrder {
    pub fn into_signed_order(self) -> SignedOrder {
        self.order
    }
}

impl Deref for CanonicalOrder {
    type Target = SignedOrder;

    fn deref(&self) -> &SignedOrder {
        &self.order
    }
}

// ─── TradingPairRequest ──────────────────────────────────────────────────────

/// The pair of assets a caller wants liquidity for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingPairRequest {
    pub maker_asset_data: AssetData,
    pub taker_asset_data: AssetData,
}

impl TradingPairRequest {
    pub fn new(maker_asset_data: impl Into<AssetData>, taker_asset_data: impl Into<AssetData>) -> Self {
        Self {
            maker_asset_data: maker_asset_data.into(),
            taker_asset_data: taker_asset_data.into(),
        }
    }

    /// Shape check only; asset data encodings are not decoded.
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        let mut errors = Vec::new();
        if !self.maker_asset_data.is_well_formed() {
            errors.push(RequestValidationError::MakerAssetData(
                self.maker_asset_data.to_string(),
            ));
        }
        if !self.taker_asset_data.is_well_formed() {
            errors.push(RequestValidationError::TakerAssetData(
                self.taker_asset_data.to_string(),
            ));
        }

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(RequestValidationError::Multiple(errors)),
        }
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum RequestValidationError {
    Multiple(Vec<RequestValidationError>),
    MakerAssetData(String),
    TakerAssetData(String),
}

impl fmt::Display for RequestValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestValidationError::Multiple(errors) => {
                write!(f, "trading pair request errors:")?;
                for err in errors {
                    write!(f, " [{}]", err)?;
                }
                Ok(())
            }
            RequestValidationError::MakerAssetData(s) => {
                write!(f, "makerAssetData is not 0x-prefixed hex: {s:?}")
            }
            RequestValidationError::TakerAssetData(s) => {
                write!(f, "takerAssetData is not 0x-prefixed hex: {s:?}")
            }
        }
    }
}

impl std::error::Error for RequestValidationError {}
