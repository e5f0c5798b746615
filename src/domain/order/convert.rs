//! Conversion: ApiOrder → CanonicalOrder (remaining fillable maker amount).

use super::math::FillAmountCalculator;
use super::wire;
use super::CanonicalOrder;
use crate::error::HttpError;
use crate::shared::{Amount, AmountParseError};
use std::fmt;

/// Metadata key relayers use for the unfilled taker-side quantity.
pub const REMAINING_TAKER_ASSET_AMOUNT_KEY: &str = "remainingTakerAssetAmount";

#[derive(Debug, Clone, PartialEq)]
pub enum NormalizeError {
    InvalidRemainingAmount {
        index: usize,
        source: AmountParseError,
    },
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::InvalidRemainingAmount { index, source } => {
                write!(f, "record {index}: {REMAINING_TAKER_ASSET_AMOUNT_KEY}: {source}")
            }
        }
    }
}

impl std::error::Error for NormalizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NormalizeError::InvalidRemainingAmount { source, .. } => Some(source),
        }
    }
}

impl From<NormalizeError> for HttpError {
    fn from(e: NormalizeError) -> Self {
        HttpError::Decode(e.to_string())
    }
}

impl wire::ApiOrder {
    /// Unfilled taker quantity; an order without the metadata entry is
    /// treated as untouched.
    pub fn remaining_taker_asset_amount(&self) -> Result<Amount, AmountParseError> {
        let reported = match self.meta_data.get(REMAINING_TAKER_ASSET_AMOUNT_KEY) {
            Some(value) => Amount::from_json_value(value)?,
            None => None,
        };
        Ok(reported.unwrap_or_else(|| self.order.taker_asset_amount.clone()))
    }
}

impl TryFrom<(wire::ApiOrder, &dyn FillAmountCalculator)> for CanonicalOrder {
    type Error = AmountParseError;

    fn try_from(value: (wire::ApiOrder, &dyn FillAmountCalculator)) -> Result<Self, Self::Error> {
        let (source, calculator) = value;
        let remaining_taker = source.remaining_taker_asset_amount()?;
        let remaining_maker = calculator.maker_fill_amount(&source.order, &remaining_taker);

        Ok(CanonicalOrder {
            order: source.order,
            remaining_fillable_maker_asset_amount: remaining_maker,
        })
    }
}

/// Annotate every record with its remaining fillable maker amount.
///
/// Output is 1:1 with the input and in the same order.
pub fn normalize_orders(
    records: Vec<wire::ApiOrder>,
    calculator: &dyn FillAmountCalculator,
) -> Result<Vec<CanonicalOrder>, NormalizeError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            CanonicalOrder::try_from((record, calculator))
                .map_err(|source| NormalizeError::InvalidRemainingAmount { index, source })
        })
        .collect()
}
